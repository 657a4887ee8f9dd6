// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account commands: registration, login, role handling and profile.

use proxhogar_api::Registration;
use proxhogar_core::ActiveRole;
use proxhogar_dashboard::load_profile;
use secrecy::SecretString;
use serde::Serialize;

use super::{CommandError, OrSay, RoleCommand};
use crate::app::{App, WORKER_ONLY};
use crate::render::rating;

pub const REGISTERED: &str = "¡Cuenta creada! Ahora inicia sesión.";
pub const REGISTER_FAILED: &str = "Error al registrarse. Verifique datos.";
pub const INVALID_CREDENTIALS: &str = "Credenciales inválidas.";
pub const CONVERSION_USED: &str = "El cambio de rol solo se puede realizar una vez.";
pub const CONVERSION_FAILED: &str = "No se pudo completar el cambio a trabajador.";

fn read_password(prompt: &str) -> Result<SecretString, CommandError> {
    rpassword::prompt_password(prompt)
        .map(SecretString::from)
        .map_err(|e| CommandError::new(format!("no se pudo leer la contraseña: {e}")))
}

pub async fn register(
    app: &App,
    email: String,
    full_name: String,
    phone: String,
) -> Result<(), CommandError> {
    let password = read_password("Contraseña: ")?;
    app.api
        .register(&Registration {
            email,
            password,
            full_name,
            phone,
        })
        .await
        .or_say(REGISTER_FAILED)?;
    app.out.success(REGISTERED);
    Ok(())
}

pub async fn login(app: &App, email: &str) -> Result<(), CommandError> {
    let password = read_password("Contraseña: ")?;
    let session = app
        .api
        .login(email, &password)
        .await
        .or_say(INVALID_CREDENTIALS)?;
    app.session.login(session).await?;

    let user = app.user().await?;
    app.out
        .success(&format!("¡Hola, {}! Sesión iniciada.", user.first_name()));
    Ok(())
}

pub async fn logout(app: &App) -> Result<(), CommandError> {
    app.session.logout().await?;
    app.out.success("Sesión cerrada.");
    Ok(())
}

#[derive(Serialize)]
struct WhoAmI<'a> {
    user_id: Option<i64>,
    email: &'a str,
    full_name: &'a str,
    is_worker: bool,
    has_changed_to_worker: bool,
    active_role: ActiveRole,
}

pub async fn whoami(app: &App) -> Result<(), CommandError> {
    let user = app.user().await?;
    let role = app.session.active_role().await;

    if app.out.json {
        return app.out.print_json(&WhoAmI {
            user_id: user.user_id,
            email: &user.email,
            full_name: &user.full_name,
            is_worker: user.is_worker,
            has_changed_to_worker: user.has_changed_to_worker,
            active_role: role,
        });
    }

    app.out.heading(&user.full_name);
    println!("    Correo:      {}", user.email);
    println!("    Vista:       {}", role_label(role));
    println!(
        "    Trabajador:  {}",
        if user.is_worker { "sí" } else { "no" }
    );
    if !user.has_changed_to_worker {
        println!("    Puedes convertirte en trabajador con `proxhogar become-worker`.");
    }
    println!();
    Ok(())
}

pub async fn role(app: &App, action: RoleCommand) -> Result<(), CommandError> {
    match action {
        RoleCommand::Toggle => {
            app.user().await?;
            let role = app
                .session
                .toggle_role_view()
                .await
                .ok_or_else(|| CommandError::new(WORKER_ONLY))?;
            app.out
                .success(&format!("Vista cambiada a {}.", role_label(role)));
            app.out.notice(
                "La vista no se guarda; usa --role en `plans` para consultar la otra vista.",
            );
            Ok(())
        }
    }
}

/// Runs identity and background verification, then converts the account.
pub async fn become_worker(app: &App, dni: &str, bio: &str) -> Result<(), CommandError> {
    let user = app.user().await?;
    if user.is_worker || !app.session.can_convert().await {
        return Err(CommandError::new(CONVERSION_USED));
    }

    let mut flow = app.verification();
    flow.set_dni(dni);
    flow.set_biography(bio);
    flow.upload_photo().await?;

    println!("Verificando identidad...");
    flow.submit_identity().await?;

    println!("Verificando antecedentes...");
    flow.run_background_check().await?;
    if let Some(note) = flow.notice() {
        app.out.notice(note);
    }

    let request = flow.finish()?;
    app.session
        .switch_to_worker_role(&request)
        .await
        .or_say(CONVERSION_FAILED)?;
    app.out
        .success("¡Ahora eres trabajador! Revisa `proxhogar jobs available`.");
    Ok(())
}

pub async fn profile(app: &App) -> Result<(), CommandError> {
    let user = app.worker().await?;
    let user_id = user.require_user_id()?;
    let view = load_profile(&app.api, user_id)
        .await
        .or_say("No se pudo cargar el perfil.")?;

    if app.out.json {
        return app.out.print_json(&view);
    }

    app.out.heading(&view.profile.user.full_name);
    println!("    Calificación: {}", rating(view.profile.average_rating));
    if view.profile.verified {
        println!("    Verificado");
    }
    if let Some(bio) = view.profile.biography.as_deref() {
        println!("    {bio}");
    }
    println!();
    println!("  Reseñas ({})", view.reviews.len());
    app.out.reviews(&view.reviews);
    println!();
    Ok(())
}

fn role_label(role: ActiveRole) -> &'static str {
    match role {
        ActiveRole::Client => "Cliente",
        ActiveRole::Worker => "Trabajador",
    }
}
