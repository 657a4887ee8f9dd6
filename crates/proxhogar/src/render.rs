// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal output: colored or plain text, or JSON for scripting.

use std::io::IsTerminal;

use colored::Colorize;
use proxhogar_api::{Offer, Review, ServiceRequest, SubscriptionPlan, format_rating};
use proxhogar_core::RequestStatus;
use serde::Serialize;

use crate::commands::CommandError;

#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub color: bool,
}

impl Output {
    /// Colors are used only on a terminal and when `--plain` is absent.
    pub fn new(json: bool, plain: bool) -> Self {
        Self {
            json,
            color: !plain && std::io::stdout().is_terminal(),
        }
    }

    pub fn success(&self, message: &str) {
        if self.color {
            println!("{} {message}", "✓".green());
        } else {
            println!("[OK] {message}");
        }
    }

    pub fn notice(&self, message: &str) {
        if self.color {
            println!("{} {}", "!".yellow(), message.yellow());
        } else {
            println!("[AVISO] {message}");
        }
    }

    pub fn error(&self, message: &str) {
        if self.color {
            eprintln!("{} {}", "✗".red(), message.red());
        } else {
            eprintln!("[ERROR] {message}");
        }
    }

    pub fn heading(&self, title: &str) {
        println!();
        if self.color {
            println!("  {}", title.bold());
        } else {
            println!("  {title}");
        }
        println!("  {}", "-".repeat(50));
    }

    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), CommandError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| CommandError::new(format!("no se pudo generar JSON: {e}")))?;
        println!("{text}");
        Ok(())
    }

    pub fn status(&self, status: RequestStatus) -> String {
        let label = status.label();
        if !self.color {
            return format!("[{label}]");
        }
        match status {
            RequestStatus::Pending => label.yellow().to_string(),
            RequestStatus::Bidding => label.blue().to_string(),
            RequestStatus::Accepted => label.cyan().to_string(),
            RequestStatus::InProgress => label.magenta().to_string(),
            RequestStatus::WorkerFinished => label.bright_yellow().bold().to_string(),
            RequestStatus::Finalized => label.green().to_string(),
            RequestStatus::Cancelled => label.red().to_string(),
        }
    }

    pub fn requests(&self, title: &str, requests: &[&ServiceRequest]) -> Result<(), CommandError> {
        if self.json {
            return self.print_json(requests);
        }
        self.heading(title);
        if requests.is_empty() {
            println!("    (ninguna)");
        }
        for request in requests {
            println!(
                "    #{:<5} {:<28} {} {}",
                request.id,
                self.status(request.status),
                money(request.suggested_price),
                request.description
            );
            if !request.address.is_empty() {
                println!("           {}", request.address);
            }
            if let Some(worker) = &request.chosen_worker {
                println!(
                    "           Trabajador: {} ({})",
                    worker.user.full_name,
                    rating(worker.average_rating)
                );
            }
        }
        println!();
        Ok(())
    }

    pub fn offers(&self, offers: &[Offer]) -> Result<(), CommandError> {
        if self.json {
            return self.print_json(offers);
        }
        self.heading("Ofertas recibidas");
        if offers.is_empty() {
            println!("    (sin ofertas todavía)");
        }
        for offer in offers {
            println!(
                "    #{:<5} {} de {} ({})",
                offer.id,
                money(Some(offer.amount)),
                offer.worker.user.full_name,
                rating(offer.worker.average_rating)
            );
            if let Some(comment) = offer.comment.as_deref().filter(|c| !c.is_empty()) {
                println!("           \"{comment}\"");
            }
        }
        println!();
        Ok(())
    }

    pub fn reviews(&self, reviews: &[Review]) {
        if reviews.is_empty() {
            println!("    (sin reseñas)");
        }
        for review in reviews {
            let stars = "★".repeat(usize::from(review.rating.min(5)));
            let author = review
                .author
                .as_ref()
                .map(|a| a.full_name.as_str())
                .unwrap_or("Anónimo");
            println!("    {stars:<5} {author}");
            if let Some(comment) = review.comment.as_deref().filter(|c| !c.is_empty()) {
                println!("          {comment}");
            }
        }
    }

    pub fn plans(&self, plans: &[SubscriptionPlan]) -> Result<(), CommandError> {
        if self.json {
            return self.print_json(plans);
        }
        self.heading("Planes de suscripción");
        for plan in plans {
            let price = if plan.is_free() {
                "Gratis".to_string()
            } else {
                format!(
                    "{}/{}",
                    money(Some(plan.price)),
                    plan.period.as_deref().unwrap_or("mes")
                )
            };
            let name = if plan.recommended && self.color {
                format!("{} {}", plan.name.bold(), "(recomendado)".green())
            } else if plan.recommended {
                format!("{} (recomendado)", plan.name)
            } else {
                plan.name.clone()
            };
            println!("    #{:<3} {name} - {price}", plan.id);
            for feature in plan.feature_list() {
                println!("          · {feature}");
            }
        }
        println!();
        Ok(())
    }
}

/// Amount in soles, or a dash when unknown.
pub fn money(amount: Option<f64>) -> String {
    match amount {
        Some(a) => format!("S/ {a:.2}"),
        None => "S/ -".to_string(),
    }
}

/// Rating line used by profile and offer views.
pub fn rating(value: Option<f64>) -> String {
    format!("★ {}", format_rating(value))
}
