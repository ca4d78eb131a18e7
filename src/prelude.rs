/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # ICE Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the ICE Client library.
//!
//! ## Usage
//!
//! ```rust
//! use ice_client::prelude::*;
//!
//! let config = IceConfig::with_token("https://ice.example.org", "token", Some("icebot"));
//! assert!(!config.requires_login());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{ConfigKeys, Credentials, IceConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{AppError, IceResult};

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Session client
pub use crate::application::client::IceClient;

/// Authentication handler and session
pub use crate::application::auth::{Auth, Session};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Service traits implemented by the client
pub use crate::application::interfaces::{EntryService, FolderService, SampleService};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Transport seam and its `reqwest` implementation
pub use crate::model::http::{
    FormField, HttpRequest, HttpResponse, IceTransport, ReqwestTransport, RequestBody,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{Collection, EntryQuery, EntryType, FolderScope, NewEntry};

/// Response models
pub use crate::model::responses::{
    CustomField, Entry, EntryRecord, Folder, Sample, SampleLocation, SearchResults,
};

// ============================================================================
// PRESENTATION AND RECIPES
// ============================================================================

/// Pure formatting helpers
pub use crate::presentation::{
    LocationRow, locations_table, normalize_genbank, parse_sample_location,
    sample_location_string, sanitize_well_name,
};

/// Sample locations of entries looked up by name
pub use crate::model::utils::find_entries_locations;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Name suggestions
pub use crate::utils::names::did_you_mean;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types used in transports
pub use reqwest::{Method, StatusCode};
