// Presentation layer - Local view server
pub mod app_state;
pub mod handlers;
pub mod routes;
