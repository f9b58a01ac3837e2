pub mod auth_service;
pub mod blog_service;
pub mod contact_service;
pub mod project_service;
pub mod tech_service;
pub mod user_service;
