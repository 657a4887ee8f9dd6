// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Worker commands: available requests, offers and hired jobs.

use proxhogar_dashboard::JobTab;

use super::{CommandError, JobsCommand, OrSay};
use crate::app::App;
use crate::render::rating;

pub const OFFER_SENT: &str = "¡Oferta enviada!";
pub const OFFER_FAILED: &str = "Hubo un error al enviar tu oferta.";
pub const START_FAILED: &str = "No se pudo iniciar el trabajo.";
pub const FINISH_FAILED: &str = "No se pudo finalizar el trabajo.";

pub async fn run(app: &App, action: JobsCommand) -> Result<(), CommandError> {
    app.worker().await?;
    let mut dashboard = app.worker_dashboard();
    dashboard
        .load()
        .await
        .or_say("No se pudieron cargar tus trabajos.")?;

    match action {
        JobsCommand::Available => {
            let view = dashboard.view();
            if !app.out.json {
                let own = view.profile.as_ref().and_then(|p| p.average_rating);
                println!("Tu calificación: {}", rating(own));
            }
            let available: Vec<_> = view.available.iter().collect();
            app.out.requests("Solicitudes disponibles", &available)
        }
        JobsCommand::List { tab } => {
            let tab = JobTab::from(tab);
            let title = match tab {
                JobTab::Accepted => "Trabajos aceptados",
                JobTab::History => "Historial de trabajos",
            };
            app.out.requests(title, &dashboard.view().tab(tab))
        }
        JobsCommand::Offer {
            request_id,
            amount,
            comment,
        } => {
            dashboard
                .send_offer(request_id, amount, &comment)
                .await
                .or_say(OFFER_FAILED)?;
            app.out.success(OFFER_SENT);
            Ok(())
        }
        JobsCommand::Start { id } => {
            println!("Verificando ubicación y selfie...");
            dashboard.start_job(id).await.or_say(START_FAILED)?;
            app.out.success("Trabajo iniciado.");
            Ok(())
        }
        JobsCommand::Finish { id } => {
            dashboard.finish_job(id).await.or_say(FINISH_FAILED)?;
            app.out
                .success("Trabajo finalizado. El cliente ya puede realizar el pago.");
            Ok(())
        }
    }
}
