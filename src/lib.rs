//! # ICE Client
//!
//! A client for the [JBEI ICE](https://github.com/JBEI/ice) sample manager REST API.
//!
//! The crate wraps the handful of ICE endpoints that scripts need most often: listing
//! the folders of a collection, walking the entries of a folder, fetching entry
//! metadata and sequences, and finding where the physical samples of an entry are
//! stored.
//!
//! ## Authentication
//!
//! Two modes are supported:
//!
//! * **API token**: the token (and optional token client id) is sent with every request.
//!   No network call is made when the client is built.
//! * **Email and password**: the credentials are exchanged for a session id once, when
//!   the client is built, and the session id is sent with every request afterwards.
//!
//! ## Example
//!
//! ```ignore
//! use ice_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let config = IceConfig::with_token("https://ice.genomefoundry.org", "WHz+BC...", Some("icebot"));
//!     let ice = IceClient::new(config).await?;
//!
//!     let primers = ice.get_folder_id("PRIMERS", Collection::Shared).await?;
//!     for entry in ice.get_folder_entries(primers).await? {
//!         let samples = ice.get_samples(entry.id).await?;
//!         let locations: Vec<String> = samples.iter().map(|s| s.location_string()).collect();
//!         println!("{}: {}", entry.name, locations.join(", "));
//!     }
//!     Ok(())
//! }
//! ```

/// Client, authentication, configuration and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Transport, request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Pure formatting helpers for samples, wells and sequences
pub mod presentation;
/// Environment, logging and name matching utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
