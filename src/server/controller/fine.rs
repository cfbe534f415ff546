use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        fine::{
            CreateFineDto, DisputeFineDto, FineDto, FineListQuery, FineWithOwnerDto, PayFineDto,
            ResolveDisputeDto, UpdateFineStatusDto,
        },
    },
    server::{
        auth::bearer_token,
        error::Error,
        model::app::AppState,
        service::fine::FineService,
    },
};

pub static FINE_TAG: &str = "fine";

/// Issue a new fine against a license holder
#[utoipa::path(
    post,
    path = "/api/fines",
    tag = FINE_TAG,
    request_body = CreateFineDto,
    responses(
        (status = 201, description = "Fine created", body = FineDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 404, description = "No user found to own the fine", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fine(
    State(state): State<AppState>,
    Json(dto): Json<CreateFineDto>,
) -> Result<impl IntoResponse, Error> {
    let fine_service = FineService::new(&state.db);

    let fine = fine_service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(fine)))
}

/// List fines with each owner's email, optionally filtered
#[utoipa::path(
    get,
    path = "/api/fines",
    tag = FINE_TAG,
    params(FineListQuery),
    responses(
        (status = 200, description = "Fines matching the filters", body = Vec<FineWithOwnerDto>),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_fines(
    State(state): State<AppState>,
    Query(query): Query<FineListQuery>,
) -> Result<impl IntoResponse, Error> {
    let fine_service = FineService::new(&state.db);

    let fines = fine_service.list(query).await?;

    Ok((StatusCode::OK, Json(fines)))
}

/// File a dispute against a pending fine
#[utoipa::path(
    post,
    path = "/api/fines/dispute",
    tag = FINE_TAG,
    request_body = DisputeFineDto,
    responses(
        (status = 200, description = "Fine marked disputed", body = FineDto),
        (status = 400, description = "Missing reason or fine not pending", body = ErrorDto),
        (status = 404, description = "Fine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dispute_fine(
    State(state): State<AppState>,
    Json(dto): Json<DisputeFineDto>,
) -> Result<impl IntoResponse, Error> {
    let fine_service = FineService::new(&state.db);

    let fine = fine_service.dispute(dto).await?;

    Ok((StatusCode::OK, Json(fine)))
}

/// Resolve a disputed fine by keeping or removing it
#[utoipa::path(
    post,
    path = "/api/fines/resolve-dispute",
    tag = FINE_TAG,
    request_body = ResolveDisputeDto,
    responses(
        (status = 200, description = "Dispute resolved", body = FineDto),
        (status = 400, description = "Unknown action or fine not disputed", body = ErrorDto),
        (status = 404, description = "Fine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_dispute(
    State(state): State<AppState>,
    Json(dto): Json<ResolveDisputeDto>,
) -> Result<impl IntoResponse, Error> {
    let fine_service = FineService::new(&state.db);

    let fine = fine_service.resolve_dispute(dto).await?;

    Ok((StatusCode::OK, Json(fine)))
}

/// Override a fine's status without state machine checks
#[utoipa::path(
    put,
    path = "/api/fines/update-status",
    tag = FINE_TAG,
    request_body = UpdateFineStatusDto,
    responses(
        (status = 200, description = "Status overridden", body = FineDto),
        (status = 400, description = "Status outside the enum", body = ErrorDto),
        (status = 404, description = "Fine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fine_status(
    State(state): State<AppState>,
    Json(dto): Json<UpdateFineStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let fine_service = FineService::new(&state.db);

    let fine = fine_service.update_status(dto).await?;

    Ok((StatusCode::OK, Json(fine)))
}

/// Get all fines owned by the authenticated caller
#[utoipa::path(
    get,
    path = "/api/fines/user",
    tag = FINE_TAG,
    responses(
        (status = 200, description = "The caller's fines", body = Vec<FineDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = [])),
)]
pub async fn get_user_fines(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let token = bearer_token(&headers)?;
    let claims = state.verifier.verify(token).await?;

    let fine_service = FineService::new(&state.db);
    let fines = fine_service.list_for_caller(&claims.sub).await?;

    Ok((StatusCode::OK, Json(fines)))
}

/// Mark one of the caller's pending fines as paid
#[utoipa::path(
    post,
    path = "/api/fines/pay",
    tag = FINE_TAG,
    request_body = PayFineDto,
    responses(
        (status = 200, description = "Fine marked paid", body = FineDto),
        (status = 400, description = "Fine not pending", body = ErrorDto),
        (status = 401, description = "Missing/invalid token or fine not owned by caller", body = ErrorDto),
        (status = 404, description = "Fine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_token" = [])),
)]
pub async fn pay_fine(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<PayFineDto>,
) -> Result<impl IntoResponse, Error> {
    let token = bearer_token(&headers)?;
    let claims = state.verifier.verify(token).await?;

    let fine_service = FineService::new(&state.db);
    let fine = fine_service.pay(&claims.sub, dto).await?;

    Ok((StatusCode::OK, Json(fine)))
}

/// Permanently delete a fine
#[utoipa::path(
    delete,
    path = "/api/fines/{fine_id}",
    tag = FINE_TAG,
    params(
        ("fine_id" = i32, Path, description = "ID of the fine to delete")
    ),
    responses(
        (status = 200, description = "Fine deleted", body = MessageDto),
        (status = 404, description = "Fine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fine(
    State(state): State<AppState>,
    Path(fine_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let fine_service = FineService::new(&state.db);

    fine_service.delete(fine_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Fine {} deleted", fine_id),
        }),
    ))
}
