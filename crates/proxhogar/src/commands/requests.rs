// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client commands over the user's own service requests.

use proxhogar_dashboard::{ClientDashboard, RequestForm, reviews_for_offer};

use super::{CommandError, OrSay, RequestFormArgs, RequestsCommand};
use crate::app::App;
use crate::render::money;

const LOAD_FAILED: &str = "No se pudieron cargar tus solicitudes.";

pub async fn run(app: &App, action: RequestsCommand) -> Result<(), CommandError> {
    let mut dashboard = app.client_dashboard();
    dashboard.load().await.or_say(LOAD_FAILED)?;

    match action {
        RequestsCommand::List { tab } => {
            let title = match tab {
                super::ClientTabArg::Activas => "Solicitudes activas",
                super::ClientTabArg::Historial => "Historial",
            };
            app.out.requests(title, &dashboard.view().tab(tab.into()))
        }
        RequestsCommand::Create { form, improve: rewrite } => {
            let mut form = apply(RequestForm::default(), form);
            if rewrite {
                form.description = app.enhancer()?.enhance(&form.description).await;
                println!("Descripción: {}", form.description);
            }
            dashboard
                .create_request(&form)
                .await
                .or_say("Hubo un error al crear la solicitud.")?;
            app.out.success("Solicitud publicada.");
            Ok(())
        }
        RequestsCommand::Edit { id, form } => {
            let current = dashboard
                .view()
                .find(id)
                .map(RequestForm::from_request)
                .ok_or_else(|| CommandError::new(format!("No se encontró la solicitud {id}.")))?;
            dashboard
                .update_request(id, &apply(current, form))
                .await
                .or_say("Hubo un error al actualizar la solicitud.")?;
            app.out.success("Solicitud actualizada.");
            Ok(())
        }
        RequestsCommand::Delete { id } => {
            dashboard
                .delete_request(id)
                .await
                .or_say("Error al eliminar")?;
            app.out.success("Solicitud eliminada.");
            Ok(())
        }
        RequestsCommand::Offers { id, reviews } => offers(app, &dashboard, id, reviews).await,
        RequestsCommand::Accept { offer_id } => {
            dashboard
                .accept_offer(offer_id)
                .await
                .or_say("No se pudo aceptar la oferta.")?;
            app.out.success("Oferta aceptada.");
            Ok(())
        }
        RequestsCommand::Pay { id, method } => {
            let pending = dashboard
                .pay_and_finalize(id, method)
                .await
                .or_say("No se pudo procesar el pago.")?;
            app.out.success("Pago realizado. Solicitud finalizada.");
            if let Some(review) = pending {
                app.out.notice(&format!(
                    "Califica a {} con `proxhogar requests review {} --rating <1-5>`.",
                    review.worker_name, review.request_id
                ));
            }
            Ok(())
        }
        RequestsCommand::Review {
            id,
            rating,
            comment,
        } => {
            dashboard.start_review(id)?;
            dashboard
                .submit_review(rating, &comment)
                .await
                .or_say("Error al enviar la calificación")?;
            app.out.success("¡Gracias por tu calificación!");
            Ok(())
        }
    }
}

async fn offers(
    app: &App,
    dashboard: &ClientDashboard,
    id: i64,
    with_reviews: bool,
) -> Result<(), CommandError> {
    let offers = dashboard
        .offers(id)
        .await
        .or_say("No se pudieron cargar las ofertas.")?;
    app.out.offers(&offers)?;

    if with_reviews && !app.out.json {
        for offer in &offers {
            let reviews = reviews_for_offer(&app.api, offer)
                .await
                .or_say("No se pudieron cargar las reseñas.")?;
            println!(
                "  {} ({}) - {} reseñas",
                offer.worker.user.full_name,
                money(Some(offer.amount)),
                reviews.len()
            );
            app.out.reviews(&reviews);
        }
    }
    Ok(())
}

/// Description enhancer as a standalone command.
pub async fn improve(app: &App, description: &str) -> Result<(), CommandError> {
    let suggestion = app.enhancer()?.enhance(description).await;
    println!("{suggestion}");
    Ok(())
}

/// Overlays the flags that were given onto `form`.
fn apply(mut form: RequestForm, args: RequestFormArgs) -> RequestForm {
    if let Some(description) = args.description {
        form.description = description;
    }
    if let Some(price) = args.price {
        form.price = price;
    }
    if let Some(address) = args.address {
        form.address = address;
    }
    if let Some(category) = args.category {
        form.category_id = category;
    }
    if let Some(latitude) = args.latitude {
        form.latitude = latitude;
    }
    if let Some(longitude) = args.longitude {
        form.longitude = longitude;
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_unset_fields() {
        let base = RequestForm {
            description: "Pintar sala".into(),
            price: "120".into(),
            address: "Calle 1".into(),
            ..RequestForm::default()
        };
        let form = apply(
            base.clone(),
            RequestFormArgs {
                price: Some("150".into()),
                ..RequestFormArgs::default()
            },
        );
        assert_eq!(form.price, "150");
        assert_eq!(form.description, base.description);
        assert_eq!(form.latitude, base.latitude);
    }
}
