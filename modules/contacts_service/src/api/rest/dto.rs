//! REST DTOs with serde derives for HTTP API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Contact response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Ann")]
    pub first_name: String,

    #[schema(example = "Lee")]
    pub last_name: String,

    #[schema(example = "ann@x.com")]
    pub email: String,

    /// Calendar date, `YYYY-MM-DD`
    #[schema(example = "1990-05-01")]
    pub birthday: NaiveDate,
}

/// Contact create request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateContactRequest {
    #[schema(example = "Ann")]
    pub first_name: String,

    #[schema(example = "Lee")]
    pub last_name: String,

    #[schema(example = "ann@x.com")]
    pub email: String,

    #[schema(example = "1990-05-01")]
    pub birthday: NaiveDate,
}

/// Contact update request
///
/// Omitted (or null) fields keep their stored value. Unknown fields,
/// `id` included, are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateContactRequest {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    #[schema(example = "1990-05-01")]
    pub birthday: Option<NaiveDate>,
}

// Note: Conversion implementations live in mapper.rs
