// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Worker profile and the reviews it has received.

use proxhogar_api::{ApiClient, Offer, Review, WorkerProfile, format_rating};
use proxhogar_core::ProxHogarError;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub profile: WorkerProfile,
    pub reviews: Vec<Review>,
}

impl ProfileView {
    pub fn rating_display(&self) -> String {
        format_rating(self.profile.average_rating)
    }
}

/// Fetches a worker's profile and received reviews together.
pub async fn load_profile(api: &ApiClient, user_id: i64) -> Result<ProfileView, ProxHogarError> {
    let (profile, reviews) = futures::try_join!(
        api.worker_profile(user_id),
        api.reviews_for_user(user_id)
    )?;
    debug!(user_id, reviews = reviews.len(), "profile loaded");
    Ok(ProfileView { profile, reviews })
}

/// Reviews of the worker behind `offer`, for a client weighing bids.
pub async fn reviews_for_offer(api: &ApiClient, offer: &Offer) -> Result<Vec<Review>, ProxHogarError> {
    api.reviews_for_user(offer.worker.user.id).await
}
