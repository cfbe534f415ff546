//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with all fine, payment, and user endpoints registered. Each
/// endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document. The router includes Swagger UI at `/api/docs` for
/// interactive API exploration and testing.
///
/// # Registered Endpoints
/// - `POST /api/fines` - Issue a new fine
/// - `GET /api/fines` - List fines with owner emails, filtered by status/license/date
/// - `POST /api/fines/dispute` - File a dispute against a pending fine
/// - `POST /api/fines/resolve-dispute` - Keep or remove a disputed fine
/// - `PUT /api/fines/update-status` - Admin status override
/// - `GET /api/fines/user` - Get the authenticated caller's fines
/// - `POST /api/fines/pay` - Mark one of the caller's fines as paid
/// - `DELETE /api/fines/{fine_id}` - Permanently delete a fine
/// - `POST /api/payments/add` - Record a payment gateway outcome
/// - `GET /api/payments` - List payments with payer identity
/// - `GET /api/payments/user` - A user's payment history
/// - `GET /api/payments/{intent_id}` - Look up a payment by gateway intent id
/// - `POST /api/users` - Register an identity provider account
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Gavel", description = "Traffic fine management API"), tags(
        (name = controller::fine::FINE_TAG, description = "Fine lifecycle API routes"),
        (name = controller::payment::PAYMENT_TAG, description = "Payment recording API routes"),
        (name = controller::user::USER_TAG, description = "User registration API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::fine::create_fine,
            controller::fine::list_fines
        ))
        .routes(routes!(controller::fine::dispute_fine))
        .routes(routes!(controller::fine::resolve_dispute))
        .routes(routes!(controller::fine::update_fine_status))
        .routes(routes!(controller::fine::get_user_fines))
        .routes(routes!(controller::fine::pay_fine))
        .routes(routes!(controller::fine::delete_fine))
        .routes(routes!(controller::payment::record_payment))
        .routes(routes!(controller::payment::list_payments))
        .routes(routes!(controller::payment::get_user_payments))
        .routes(routes!(controller::payment::get_payment_by_intent))
        .routes(routes!(controller::user::register_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
