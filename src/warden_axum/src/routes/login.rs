//! Axum-specific login route.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use warden_adapters::handlers::LoginRouter;
use warden_application::Authenticator;
use warden_core::{EmailValidator, HttpRequest, LoginRequestBody};

use crate::adapters::response_builder;

/// Axum login route.
///
/// A body that is not a JSON object reaches the handler as an absent body.
/// Status mapping belongs to [`LoginRouter`].
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<A, E>(
    State(router): State<Arc<LoginRouter<A, E>>>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Response
where
    A: Authenticator + 'static,
    E: EmailValidator + 'static,
{
    let request = match body {
        Ok(Json(body)) => HttpRequest::with_body(body),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable login body");
            HttpRequest::default()
        }
    };

    router.route(Some(request)).await.write(response_builder())
}
