// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subscription plan commands.

use proxhogar_core::ActiveRole;
use proxhogar_dashboard::subscription::SUBSCRIPTION_ACTIVATED;

use super::{CommandError, OrSay, PlansCommand, RoleArg};
use crate::app::{App, WORKER_ONLY};
use crate::render::money;

pub const SUBSCRIPTION_FAILED: &str = "Hubo un error al procesar tu suscripción.";

pub async fn run(app: &App, action: PlansCommand) -> Result<(), CommandError> {
    app.user().await?;
    match action {
        PlansCommand::List { role } => {
            select_role(app, role).await?;
            let plans = app
                .subscriptions()
                .plans()
                .await
                .or_say("No se pudieron cargar los planes.")?;
            app.out.plans(&plans)
        }
        PlansCommand::Subscribe {
            plan_id,
            method,
            role,
        } => {
            select_role(app, role).await?;
            let subscriptions = app.subscriptions();
            let plans = subscriptions.plans().await.or_say(SUBSCRIPTION_FAILED)?;
            let plan = plans
                .iter()
                .find(|p| p.id == plan_id)
                .ok_or_else(|| CommandError::new(format!("No existe el plan {plan_id}.")))?;

            let receipt = subscriptions
                .subscribe(plan, method)
                .await
                .or_say(SUBSCRIPTION_FAILED)?;
            if let Some(receipt) = receipt {
                println!(
                    "Pagado {} con {}.",
                    money(Some(receipt.amount)),
                    receipt.method.label()
                );
            }
            app.out.success(SUBSCRIPTION_ACTIVATED);
            Ok(())
        }
    }
}

/// Flips the view when a different role is requested.
async fn select_role(app: &App, role: Option<RoleArg>) -> Result<(), CommandError> {
    let Some(wanted) = role.map(ActiveRole::from) else {
        return Ok(());
    };
    if app.session.active_role().await == wanted {
        return Ok(());
    }
    app.session
        .toggle_role_view()
        .await
        .map(|_| ())
        .ok_or_else(|| CommandError::new(WORKER_ONLY))
}
