// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.
//!
//! Every command returns a [`CommandError`] carrying the message shown to the
//! user. Backend and transport failures are replaced by a per-command message
//! through [`OrSay::or_say`]; the underlying error is logged.

pub mod account;
pub mod jobs;
pub mod plans;
pub mod requests;

use std::str::FromStr;

use clap::{Subcommand, ValueEnum};
use proxhogar_core::{ActiveRole, PaymentMethod, ProxHogarError};
use proxhogar_dashboard::{ClientTab, JobTab};
use tracing::debug;

pub const LOGIN_REQUIRED: &str = "Inicia sesión primero con `proxhogar login`.";

/// A failed command, as the user should read it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ProxHogarError> for CommandError {
    fn from(err: ProxHogarError) -> Self {
        match err {
            ProxHogarError::NotAuthenticated => Self::new(LOGIN_REQUIRED),
            other => Self::new(other.to_string()),
        }
    }
}

/// Replaces opaque failures with a command-specific message.
pub trait OrSay<T> {
    fn or_say(self, fallback: &str) -> Result<T, CommandError>;
}

impl<T> OrSay<T> for Result<T, ProxHogarError> {
    fn or_say(self, fallback: &str) -> Result<T, CommandError> {
        self.map_err(|err| match err {
            ProxHogarError::Validation(_)
            | ProxHogarError::Verification(_)
            | ProxHogarError::NotAuthenticated => err.into(),
            other => {
                debug!(error = %other, "command failed");
                CommandError::new(fallback)
            }
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum RoleCommand {
    /// Flip between client and worker views (worker accounts only).
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum RequestsCommand {
    /// List your requests.
    List {
        #[arg(long, value_enum, default_value_t = ClientTabArg::Activas)]
        tab: ClientTabArg,
    },
    /// Publish a new request.
    Create {
        #[command(flatten)]
        form: RequestFormArgs,
        /// Rewrite the description with the text-completion service first.
        #[arg(long)]
        improve: bool,
    },
    /// Edit a pending request. Omitted fields keep their current value.
    Edit {
        id: i64,
        #[command(flatten)]
        form: RequestFormArgs,
    },
    /// Delete a pending request.
    Delete { id: i64 },
    /// Show offers received by a request.
    Offers {
        id: i64,
        /// Also show each worker's reviews.
        #[arg(long)]
        reviews: bool,
    },
    /// Accept an offer.
    Accept { offer_id: i64 },
    /// Pay a finished request and close it.
    Pay {
        id: i64,
        #[arg(long, value_parser = parse_payment_method)]
        method: Option<PaymentMethod>,
    },
    /// Rate the worker of a finalized request.
    Review {
        id: i64,
        /// Stars, 1 to 5.
        #[arg(long)]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct RequestFormArgs {
    #[arg(long)]
    pub description: Option<String>,
    /// Suggested price in soles.
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub category: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum JobsCommand {
    /// Requests open for offers.
    Available,
    /// Jobs you were hired for.
    List {
        #[arg(long, value_enum, default_value_t = JobTabArg::Aceptados)]
        tab: JobTabArg,
    },
    /// Bid on a request.
    Offer {
        request_id: i64,
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Check in on site and start a job.
    Start { id: i64 },
    /// Mark a job as finished.
    Finish { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PlansCommand {
    /// List plans for the active role.
    List {
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
    },
    /// Subscribe to a plan for one month.
    Subscribe {
        plan_id: i64,
        #[arg(long, value_parser = parse_payment_method)]
        method: Option<PaymentMethod>,
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientTabArg {
    Activas,
    Historial,
}

impl From<ClientTabArg> for ClientTab {
    fn from(arg: ClientTabArg) -> Self {
        match arg {
            ClientTabArg::Activas => ClientTab::Active,
            ClientTabArg::Historial => ClientTab::History,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobTabArg {
    Aceptados,
    Historial,
}

impl From<JobTabArg> for JobTab {
    fn from(arg: JobTabArg) -> Self {
        match arg {
            JobTabArg::Aceptados => JobTab::Accepted,
            JobTabArg::Historial => JobTab::History,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleArg {
    Cliente,
    Trabajador,
}

impl From<RoleArg> for ActiveRole {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Cliente => ActiveRole::Client,
            RoleArg::Trabajador => ActiveRole::Worker,
        }
    }
}

fn parse_payment_method(s: &str) -> Result<PaymentMethod, String> {
    PaymentMethod::from_str(&s.to_lowercase()).map_err(|_| {
        let valid: Vec<String> = PaymentMethod::ALL.iter().map(|m| m.to_string()).collect();
        format!("método desconocido '{s}' (usa: {})", valid.join(", "))
    })
}
