use crate::error::IceResult;
use crate::model::requests::{FolderScope, NewEntry};
use crate::model::responses::{CustomField, Entry, EntryRecord, SearchResults};
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Interface for entries: metadata, sequences, lookup by name and custom fields
#[async_trait]
pub trait EntryService: Send + Sync {
    /// Gets an entry's metadata
    async fn get_part_infos(&self, entry_id: u64) -> IceResult<Entry>;

    /// Gets an entry's sequence as text, in `format` (`genbank`, `fasta`, `sbol1`...)
    async fn get_sequence(&self, entry_id: u64, format: &str) -> IceResult<String>;

    /// Gets an entry's metadata and GenBank sequence
    ///
    /// Fails with `AppError::NotFound` if there is no entry with that id.
    async fn get_record(&self, entry_id: u64) -> IceResult<EntryRecord>;

    /// Finds the id of the entry named `name` in the folders of `scope`
    ///
    /// Every entry of the scope is listed, so a misspelt name gets suggestions.
    async fn get_part_id(&self, name: &str, scope: &FolderScope) -> IceResult<u64> {
        self.get_part_id_with(name, scope, false).await
    }

    /// Same as `get_part_id`; with `use_filter` only entries whose name contains `name`
    /// are listed, which is faster on large folders but only suggests those entries
    async fn get_part_id_with(
        &self,
        name: &str,
        scope: &FolderScope,
        use_filter: bool,
    ) -> IceResult<u64>;

    /// Runs a free text search, returning at most `limit` hits
    async fn search_entries(&self, query: &str, limit: usize) -> IceResult<SearchResults>;

    /// Finds the entry named exactly `name` using the search endpoint
    async fn find_entry_by_name(&self, name: &str) -> IceResult<Entry>;

    /// Registers a new entry
    async fn create_part(&self, entry: &NewEntry) -> IceResult<Entry>;

    /// Uploads a GenBank record as the sequence of an entry
    async fn attach_record_to_part(&self, entry_id: u64, genbank: &str) -> IceResult<Value>;

    /// Uploads a GenBank file as the sequence of an entry
    async fn attach_record_file(&self, entry_id: u64, path: &Path) -> IceResult<Value>;

    /// Removes the sequence of an entry
    async fn delete_part_record(&self, entry_id: u64) -> IceResult<()>;

    /// Adds a custom field to an entry
    async fn set_part_custom_field(
        &self,
        entry_id: u64,
        name: &str,
        value: &str,
    ) -> IceResult<CustomField>;

    /// Lists the custom fields of an entry
    async fn get_part_custom_fields_list(&self, entry_id: u64) -> IceResult<Vec<CustomField>>;

    /// Gets the value of the custom field `name` of an entry
    async fn get_part_custom_field(&self, entry_id: u64, name: &str) -> IceResult<String>;

    /// Deletes a custom field
    async fn delete_custom_field(&self, field_id: u64) -> IceResult<()>;

    /// Finds the entries having a custom field `name` set to `value`
    async fn find_parts_by_custom_field_value(
        &self,
        name: &str,
        value: &str,
    ) -> IceResult<Vec<Entry>>;
}
