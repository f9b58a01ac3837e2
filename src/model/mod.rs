use serde::Serialize;

pub mod admin;
pub mod blog;
pub mod contact;
pub mod project;
pub mod tech;
pub mod user;
pub mod validator;

/// Plain `{"message": "..."}` body used by delete/logout style endpoints.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: &str) -> Self {
        StatusMessage {
            message: message.to_string(),
        }
    }
}
