/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::DEFAULT_LOCATION_STOP;
use crate::presentation::location::sample_location_string;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Folder, as listed in a collection
///
/// Fields not modelled here are kept in `extra`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Folder {
    /// Folder id
    pub id: u64,
    /// Display name
    #[serde(rename = "folderName")]
    pub folder_name: String,
    /// Number of entries, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Every other field returned by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entry (part, plasmid, strain...) metadata
///
/// Folder listings return a summary of each entry, `parts/{id}` the full record; both
/// share this shape and anything not modelled is kept in `extra`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    /// Numeric id
    pub id: u64,
    /// Entry name
    #[serde(default)]
    pub name: String,
    /// Human readable id, e.g. `JBx_000123`
    #[serde(rename = "partId", skip_serializing_if = "Option::is_none")]
    pub part_id: Option<String>,
    /// Entry kind, e.g. `PART` or `PLASMID`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    /// One line description
    #[serde(rename = "shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Creation time, in milliseconds since the epoch
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    /// Every other field returned by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// Creation date, when the server reported a valid one
    #[must_use]
    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_time.and_then(DateTime::from_timestamp_millis)
    }
}

/// One page of a folder listing
#[derive(Debug, Clone, Deserialize)]
pub struct FolderEntries {
    /// Total number of entries in the folder
    #[serde(default)]
    pub count: u64,
    /// Entries of this page
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Entry metadata together with its sequence
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryRecord {
    /// Entry metadata
    pub entry: Entry,
    /// GenBank text of the sequence, LOCUS line padded to 80 columns
    pub genbank: String,
}

/// Storage location of a sample, one container level per node
///
/// A plate holds a well which may hold a tube: `child` goes one level down.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleLocation {
    /// Container kind, e.g. `PLATE96`, `WELL`, `TUBE`
    #[serde(rename = "type", default)]
    pub location_type: String,
    /// Label of the container, e.g. a plate barcode or `A01`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Container nested in this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<SampleLocation>>,
    /// Every other field returned by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Physical sample of an entry
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sample {
    /// Sample id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Sample label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Where the sample is stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SampleLocation>,
    /// Every other field returned by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Sample {
    /// Location as `container/position`, stopping at the well
    ///
    /// Empty when the sample has no location.
    #[must_use]
    pub fn location_string(&self) -> String {
        self.location_string_until(DEFAULT_LOCATION_STOP)
    }

    /// Location as `container/.../position`, stopping after the `stop_at` container
    #[must_use]
    pub fn location_string_until(&self, stop_at: &str) -> String {
        self.location
            .as_ref()
            .map(|location| sample_location_string(location, stop_at))
            .unwrap_or_default()
    }
}

/// Custom (user defined) field of an entry
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomField {
    /// Field id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Entry the field belongs to
    #[serde(rename = "partId", skip_serializing_if = "Option::is_none")]
    pub part_id: Option<u64>,
    /// Field name
    pub name: String,
    /// Field value
    #[serde(default)]
    pub value: String,
    /// Every other field returned by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of a login call
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Session id to send with subsequent requests
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// One hit of a search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Entry found
    #[serde(rename = "entryInfo")]
    pub entry_info: Entry,
    /// Relevance score
    pub score: Option<f64>,
}

/// Response of a search
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchResults {
    /// Total number of hits
    #[serde(rename = "resultCount", default)]
    pub result_count: u64,
    /// Hits of this page
    #[serde(default)]
    pub results: Vec<SearchResult>,
}
