// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Which actions each request status allows, and which tab shows it.

use proxhogar_api::ServiceRequest;
use proxhogar_core::RequestStatus;
use serde::Serialize;
use strum::Display;

/// Something a client can do with one of their own requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ClientAction {
    Edit,
    Delete,
    ViewOffers,
    Pay,
}

/// Something a worker can do with a job they were hired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WorkerAction {
    Start,
    Finish,
}

/// Actions offered to the client for a request in `status`.
pub fn client_actions(status: RequestStatus) -> &'static [ClientAction] {
    match status {
        RequestStatus::Pending => &[ClientAction::Edit, ClientAction::Delete],
        RequestStatus::Bidding => &[ClientAction::ViewOffers],
        RequestStatus::WorkerFinished => &[ClientAction::Pay],
        RequestStatus::Accepted
        | RequestStatus::InProgress
        | RequestStatus::Finalized
        | RequestStatus::Cancelled => &[],
    }
}

/// Actions offered to the hired worker for a job in `status`.
pub fn worker_actions(status: RequestStatus) -> &'static [WorkerAction] {
    match status {
        RequestStatus::Accepted => &[WorkerAction::Start],
        RequestStatus::InProgress => &[WorkerAction::Finish],
        RequestStatus::Pending
        | RequestStatus::Bidding
        | RequestStatus::WorkerFinished
        | RequestStatus::Finalized
        | RequestStatus::Cancelled => &[],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ClientTab {
    #[strum(serialize = "activas")]
    Active,
    #[strum(serialize = "historial")]
    History,
}

impl ClientTab {
    pub fn includes(self, status: RequestStatus) -> bool {
        match self {
            ClientTab::Active => !status.is_closed(),
            ClientTab::History => status.is_closed(),
        }
    }
}

/// Tabs over the worker's own jobs. Available requests are a separate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum JobTab {
    #[strum(serialize = "aceptados")]
    Accepted,
    #[strum(serialize = "historial")]
    History,
}

impl JobTab {
    pub fn includes(self, status: RequestStatus) -> bool {
        match self {
            JobTab::Accepted => matches!(status, RequestStatus::Accepted | RequestStatus::InProgress),
            JobTab::History => matches!(
                status,
                RequestStatus::WorkerFinished | RequestStatus::Finalized | RequestStatus::Cancelled
            ),
        }
    }
}

/// Requests whose status passes `keep`, in their original order.
pub fn filter_by<'a>(
    requests: &'a [ServiceRequest],
    keep: impl Fn(RequestStatus) -> bool,
) -> Vec<&'a ServiceRequest> {
    requests.iter().filter(|r| keep(r.status)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_table_matches_lifecycle() {
        assert_eq!(
            client_actions(RequestStatus::Pending),
            &[ClientAction::Edit, ClientAction::Delete]
        );
        assert_eq!(
            client_actions(RequestStatus::Bidding),
            &[ClientAction::ViewOffers]
        );
        assert_eq!(
            client_actions(RequestStatus::WorkerFinished),
            &[ClientAction::Pay]
        );
        for status in [
            RequestStatus::Accepted,
            RequestStatus::InProgress,
            RequestStatus::Finalized,
            RequestStatus::Cancelled,
        ] {
            assert!(client_actions(status).is_empty(), "{status}");
        }
    }

    #[test]
    fn worker_table_matches_lifecycle() {
        assert_eq!(worker_actions(RequestStatus::Accepted), &[WorkerAction::Start]);
        assert_eq!(
            worker_actions(RequestStatus::InProgress),
            &[WorkerAction::Finish]
        );
        let with_actions = RequestStatus::ALL
            .iter()
            .filter(|s| !worker_actions(**s).is_empty())
            .count();
        assert_eq!(with_actions, 2);
    }

    #[test]
    fn client_tabs_partition_every_status() {
        for status in RequestStatus::ALL {
            assert_ne!(
                ClientTab::Active.includes(status),
                ClientTab::History.includes(status),
                "{status}"
            );
        }
        assert!(ClientTab::History.includes(RequestStatus::Finalized));
        assert!(ClientTab::History.includes(RequestStatus::Cancelled));
        assert!(ClientTab::Active.includes(RequestStatus::WorkerFinished));
    }

    #[test]
    fn job_tabs_follow_the_hired_lifecycle() {
        assert!(JobTab::Accepted.includes(RequestStatus::Accepted));
        assert!(JobTab::Accepted.includes(RequestStatus::InProgress));
        assert!(!JobTab::Accepted.includes(RequestStatus::WorkerFinished));
        assert!(JobTab::History.includes(RequestStatus::WorkerFinished));
        assert!(JobTab::History.includes(RequestStatus::Finalized));
        assert!(JobTab::History.includes(RequestStatus::Cancelled));
        assert!(!JobTab::History.includes(RequestStatus::Pending));
    }

    #[test]
    fn action_names_are_kebab_case() {
        assert_eq!(ClientAction::ViewOffers.to_string(), "view-offers");
        assert_eq!(WorkerAction::Finish.to_string(), "finish");
    }
}
