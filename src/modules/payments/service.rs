use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::errors::AppError;

pub struct PaymentService;

impl PaymentService {
    /// Records a payment intent keyed by the authenticated caller and hands
    /// back the secret the client completes the payment with. Provider
    /// integration happens outside this service; the amount is fixed at
    /// creation time.
    pub async fn create_intent(
        db: &PgPool,
        user_id: Uuid,
        email: &str,
        amount_cents: i64,
    ) -> Result<String, AppError> {
        let client_secret = format!(
            "pi_{}_secret_{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        );

        sqlx::query(
            "INSERT INTO payment_intents (user_id, email, amount_cents, client_secret) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_id)
        .bind(email)
        .bind(amount_cents)
        .bind(&client_secret)
        .execute(db)
        .await
        .context("Failed to record payment intent")
        .map_err(AppError::database)?;

        Ok(client_secret)
    }
}
