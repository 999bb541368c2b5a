use std::env;

/// Payment-provider credentials. The provider itself is an external
/// collaborator; only the secret is carried here so the boundary is
/// configured in one place.
#[derive(Clone, Debug)]
pub struct PaymentConfig {
    pub secret_key: String,
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("PAYMENT_SECRET_KEY").unwrap_or_default(),
        }
    }
}
