use crate::model::validator::{validate_email_format, validate_not_blank};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_email_format", message = "Invalid email format"))]
    pub email: String,
    pub subject: Option<String>,
    #[validate(custom(function = "validate_not_blank", message = "Message is required"))]
    pub message: String,
}

/// Echo of the safe fields, returned to the submitting form.
#[derive(Debug, Serialize)]
pub struct ContactEcho {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub message: String,
    pub contact: ContactEcho,
}
