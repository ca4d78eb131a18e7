/// Authentication and session
pub mod auth;
/// Session client
pub mod client;
/// Client configuration
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations for the client
pub mod services;
