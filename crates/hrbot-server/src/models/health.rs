use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub model: String,
    pub version: String,
}
