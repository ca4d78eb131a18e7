/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::constants::DEFAULT_BATCH_SIZE;
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level grouping of folders in ICE
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Collection {
    /// Folders featured on the instance home page
    Featured,
    /// Folders owned by the authenticated user
    Personal,
    /// Folders shared with the authenticated user
    Shared,
    /// Bulk upload drafts
    Drafts,
    /// Bulk uploads pending approval
    Pending,
    /// Deleted folders
    Deleted,
}

impl Collection {
    /// Every collection, in the order ICE lists them
    pub const ALL: [Collection; 6] = [
        Collection::Featured,
        Collection::Personal,
        Collection::Shared,
        Collection::Drafts,
        Collection::Pending,
        Collection::Deleted,
    ];

    /// Name used in endpoint paths
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Featured => "FEATURED",
            Collection::Personal => "PERSONAL",
            Collection::Shared => "SHARED",
            Collection::Drafts => "DRAFTS",
            Collection::Pending => "PENDING",
            Collection::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidInput(format!("unknown collection: {s}")))
    }
}

/// Kind of entry stored in ICE
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryType {
    /// Generic part (primer, fragment...)
    #[default]
    Part,
    /// Plasmid
    Plasmid,
    /// Strain
    Strain,
    /// Arabidopsis seed
    Seed,
    /// Protein
    Protein,
}

impl EntryType {
    /// Name used by the ICE API
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Part => "PART",
            EntryType::Plasmid => "PLASMID",
            EntryType::Strain => "STRAIN",
            EntryType::Seed => "SEED",
            EntryType::Protein => "PROTEIN",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Folders searched when identifying an entry by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderScope {
    /// A single folder
    Folder(u64),
    /// Several folders
    Folders(Vec<u64>),
    /// Every folder of a collection
    Collection(Collection),
}

/// Options for walking the entries of a folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuery {
    /// Only entries whose name or id contains this string
    pub filter: Option<String>,
    /// Stop after this many entries
    pub limit: Option<usize>,
    /// Entries pulled per request
    pub batch_size: usize,
}

impl Default for EntryQuery {
    fn default() -> Self {
        Self {
            filter: None,
            limit: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl EntryQuery {
    /// Query returning every entry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to entries whose name or id contains `filter`
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Keeps only the first `limit` entries
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Pulls `batch_size` entries per request (at least one)
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

/// Body of the login call
#[derive(Serialize, Clone)]
pub struct LoginRequest<'a> {
    /// Account email
    pub email: &'a str,
    /// Account password
    pub password: &'a str,
}

/// New entry to register
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewEntry {
    /// Kind of entry
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Entry name
    pub name: String,
    /// One line description
    #[serde(rename = "shortDescription")]
    pub short_description: String,
    /// Principal investigator
    #[serde(rename = "principalInvestigator")]
    pub principal_investigator: String,
    /// Selection markers (plasmids and strains)
    #[serde(rename = "selectionMarkers", skip_serializing_if = "Vec::is_empty", default)]
    pub selection_markers: Vec<String>,
    /// Creator name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Creator email
    #[serde(rename = "creatorEmail", skip_serializing_if = "Option::is_none")]
    pub creator_email: Option<String>,
    /// Status, e.g. `Complete` or `In Progress`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Biosafety level (1 or 2)
    #[serde(rename = "bioSafetyLevel", skip_serializing_if = "Option::is_none")]
    pub bio_safety_level: Option<u8>,
}

impl NewEntry {
    /// Part with a name, description and principal investigator
    pub fn part(
        name: impl Into<String>,
        description: impl Into<String>,
        pi: impl Into<String>,
    ) -> Self {
        Self {
            entry_type: EntryType::Part,
            name: name.into(),
            short_description: description.into(),
            principal_investigator: pi.into(),
            ..Self::default()
        }
    }

    /// Plasmid with a name, description, principal investigator and selection markers
    pub fn plasmid(
        name: impl Into<String>,
        description: impl Into<String>,
        pi: impl Into<String>,
        markers: Vec<String>,
    ) -> Self {
        Self {
            entry_type: EntryType::Plasmid,
            selection_markers: markers,
            ..Self::part(name, description, pi)
        }
    }
}

/// Body of the folder creation call
#[derive(Serialize, Clone)]
pub struct NewFolder<'a> {
    /// Folder name
    #[serde(rename = "folderName")]
    pub folder_name: &'a str,
}

/// Reference to a folder by id
#[derive(Serialize, Clone, Copy)]
pub struct FolderRef {
    /// Folder id
    pub id: u64,
}

/// Body of the call adding entries to folders
#[derive(Serialize, Clone)]
pub struct FolderSelection {
    /// Whether every entry of the source selection is concerned
    pub all: bool,
    /// Entries to add
    pub entries: Vec<u64>,
    /// Destination folders
    pub destination: Vec<FolderRef>,
}

/// Body of the custom field creation call
#[derive(Serialize, Clone)]
pub struct CustomFieldRequest<'a> {
    /// Entry the field belongs to
    #[serde(rename = "partId")]
    pub part_id: u64,
    /// Field name
    pub name: &'a str,
    /// Field value
    pub value: &'a str,
}

/// Paging of a search query
#[derive(Serialize, Clone)]
pub struct SearchParameters {
    /// Index of the first result
    pub start: usize,
    /// Number of results to return
    #[serde(rename = "retrieveCount")]
    pub retrieve_count: usize,
    /// Sort order of the results
    #[serde(rename = "sortField")]
    pub sort_field: &'static str,
}

/// Body of the search call
#[derive(Serialize, Clone)]
pub struct SearchRequest<'a> {
    /// Free text query
    #[serde(rename = "queryString")]
    pub query_string: &'a str,
    /// Paging
    pub parameters: SearchParameters,
}

impl<'a> SearchRequest<'a> {
    /// First `limit` results of `query`, by relevance
    #[must_use]
    pub fn new(query: &'a str, limit: usize) -> Self {
        Self {
            query_string: query,
            parameters: SearchParameters {
                start: 0,
                retrieve_count: limit,
                sort_field: "RELEVANCE",
            },
        }
    }
}
