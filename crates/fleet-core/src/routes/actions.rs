//! Form actions: login, create and delete.

use async_trait::async_trait;

use crate::domain::FormData;
use crate::domain::forms::{is_valid_email, parse_new_vehicle};
use crate::error::{ApiError, DomainError, RouteError};
use crate::router::{Action, LoaderData, LoginForm, Outcome, Request, RouteContext};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MISSING_PASSWORD: &str = "Please enter your password.";
pub const DELETE_FAILED: &str = "There was a problem deleting the vehicle.";

fn form(request: &Request) -> Result<&FormData, RouteError> {
    request
        .form
        .as_ref()
        .ok_or_else(|| RouteError::InvalidForm("No form data submitted".to_string()))
}

fn inline_login_error(message: &str) -> Outcome {
    Outcome::Data(LoaderData::Login(LoginForm {
        error: Some(message.to_string()),
    }))
}

pub struct LoginAction;

#[async_trait]
impl Action for LoginAction {
    async fn submit(&self, ctx: &RouteContext, request: &Request) -> Result<Outcome, RouteError> {
        let form = form(request)?;
        let email = form.get("email").unwrap_or_default().trim();
        let password = form.get("password").unwrap_or_default();

        if !is_valid_email(email) {
            return Ok(inline_login_error(INVALID_EMAIL));
        }
        if password.is_empty() {
            return Ok(inline_login_error(MISSING_PASSWORD));
        }

        let session = match ctx.api.login(email, password).await {
            Ok(session) => session,
            Err(ApiError::Unauthorized) => {
                tracing::info!("Login rejected");
                return Ok(inline_login_error(INVALID_CREDENTIALS));
            }
            Err(e) => return Err(e.into()),
        };

        ctx.session
            .set(&session)
            .await
            .map_err(|e| RouteError::Failed(format!("Could not store the session: {e}")))?;

        // Only in-app paths are followed.
        let to = request
            .location
            .query("to")
            .filter(|to| to.starts_with('/') && !to.starts_with("//"))
            .unwrap_or("/");
        tracing::info!(to, "Signed in");
        Ok(Outcome::redirect(to))
    }
}

pub struct CreateVehicleAction;

#[async_trait]
impl Action for CreateVehicleAction {
    async fn submit(&self, ctx: &RouteContext, request: &Request) -> Result<Outcome, RouteError> {
        let new_vehicle = parse_new_vehicle(form(request)?).map_err(|e| match e {
            DomainError::Validation(message) => RouteError::InvalidForm(message),
            other => RouteError::InvalidForm(other.to_string()),
        })?;

        let vehicle = ctx.api.create_vehicle(&new_vehicle).await?;
        tracing::info!(id = %vehicle.id, vrm = %vehicle.vrm, "Vehicle created");
        Ok(Outcome::redirect(&format!(
            "/vehicles/{}",
            urlencoding::encode(&vehicle.id)
        )))
    }
}

pub struct DestroyVehicleAction;

#[async_trait]
impl Action for DestroyVehicleAction {
    async fn submit(&self, ctx: &RouteContext, request: &Request) -> Result<Outcome, RouteError> {
        let id = request
            .param("id")
            .ok_or_else(|| RouteError::Failed(DELETE_FAILED.to_string()))?;

        ctx.api.delete_vehicle(id).await.map_err(|e| {
            tracing::warn!(id, error = %e, "Delete failed");
            RouteError::Failed(DELETE_FAILED.to_string())
        })?;

        tracing::info!(id, "Vehicle deleted");
        Ok(Outcome::redirect("/vehicles"))
    }
}
