use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::payments::model::{CreatePaymentIntentDto, PaymentIntentResponse};
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a payment intent for the caller
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 422, description = "Price out of range", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePaymentIntentDto>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let user_id = auth_user.user_id()?;
    let amount_cents = (dto.price * 100.0).round() as i64;

    let client_secret =
        PaymentService::create_intent(&state.db, user_id, auth_user.email(), amount_cents).await?;

    Ok(Json(PaymentIntentResponse { client_secret }))
}
