use crate::application::client::IceClient;
use crate::application::interfaces::entry::EntryService;
use crate::application::interfaces::folder::FolderService;
use crate::application::services::resolve_unique_name;
use crate::constants::{DEFAULT_SEARCH_LIMIT, DEFAULT_SEQUENCE_FORMAT, SEQUENCE_UPLOAD_ENTRY_TYPE};
use crate::error::{AppError, IceResult};
use crate::model::http::{FormField, IceTransport};
use crate::model::requests::{
    CustomFieldRequest, EntryQuery, FolderScope, NewEntry, SearchRequest,
};
use crate::model::responses::{CustomField, Entry, EntryRecord, SearchResults};
use crate::presentation::sequence::normalize_genbank;
use crate::utils::names::not_found_message;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

#[async_trait]
impl<T: IceTransport + 'static> EntryService for IceClient<T> {
    async fn get_part_infos(&self, entry_id: u64) -> IceResult<Entry> {
        debug!("Getting entry {}", entry_id);
        self.get(&format!("parts/{entry_id}")).await
    }

    async fn get_sequence(&self, entry_id: u64, format: &str) -> IceResult<String> {
        if format.trim().is_empty() {
            return Err(AppError::InvalidInput("sequence format is empty".to_string()));
        }
        debug!("Getting {} sequence of entry {}", format, entry_id);
        self.get_text(&format!("file/{entry_id}/sequence/{format}"))
            .await
    }

    async fn get_record(&self, entry_id: u64) -> IceResult<EntryRecord> {
        let entry = self.get_part_infos(entry_id).await?;
        let genbank = self.get_sequence(entry_id, DEFAULT_SEQUENCE_FORMAT).await?;
        Ok(EntryRecord {
            entry,
            genbank: normalize_genbank(&genbank),
        })
    }

    async fn get_part_id_with(
        &self,
        name: &str,
        scope: &FolderScope,
        use_filter: bool,
    ) -> IceResult<u64> {
        let folder_ids = match scope {
            FolderScope::Folder(id) => vec![*id],
            FolderScope::Folders(ids) => ids.clone(),
            FolderScope::Collection(collection) => {
                let mut ids: Vec<u64> = self
                    .get_collection_folders(*collection)
                    .await?
                    .iter()
                    .map(|f| f.id)
                    .collect();
                ids.sort_unstable();
                ids
            }
        };

        let query = if use_filter {
            EntryQuery::new().with_filter(name)
        } else {
            EntryQuery::new()
        };
        debug!("Looking for entry {} in {} folders", name, folder_ids.len());
        let mut entries = Vec::new();
        for folder_id in folder_ids {
            entries.extend(self.get_folder_entries_with(folder_id, &query).await?);
        }
        resolve_unique_name(
            "entry",
            name,
            entries.iter().map(|e| (e.name.as_str(), e.id)),
        )
    }

    async fn search_entries(&self, query: &str, limit: usize) -> IceResult<SearchResults> {
        debug!("Searching entries for {:?}", query);
        let results: Option<SearchResults> =
            self.post("search", &SearchRequest::new(query, limit)).await?;
        Ok(results.unwrap_or_default())
    }

    async fn find_entry_by_name(&self, name: &str) -> IceResult<Entry> {
        let results = self.search_entries(name, DEFAULT_SEARCH_LIMIT).await?;
        let hits: Vec<Entry> = results.results.into_iter().map(|r| r.entry_info).collect();

        let mut matches: Vec<&Entry> = hits.iter().filter(|e| e.name == name).collect();
        matches.sort_by_key(|e| e.id);
        matches.dedup_by_key(|e| e.id);

        match matches.as_slice() {
            [] => Err(AppError::NotFound(not_found_message(
                "entry",
                name,
                hits.iter().map(|e| e.name.as_str()),
            ))),
            [entry] => Ok((*entry).clone()),
            _ => Err(AppError::Ambiguous {
                name: name.to_string(),
                ids: matches.iter().map(|e| e.id).collect(),
            }),
        }
    }

    async fn create_part(&self, entry: &NewEntry) -> IceResult<Entry> {
        if entry.name.trim().is_empty() {
            return Err(AppError::InvalidInput("entry name is empty".to_string()));
        }
        info!("Creating {} {}", entry.entry_type, entry.name);
        self.post("parts", entry).await
    }

    async fn attach_record_to_part(&self, entry_id: u64, genbank: &str) -> IceResult<Value> {
        info!("Attaching sequence to entry {}", entry_id);
        let fields = vec![
            FormField::text("entryRecordId", entry_id.to_string()),
            FormField::text("entryType", SEQUENCE_UPLOAD_ENTRY_TYPE),
            FormField::file("file", format!("{entry_id}.gb"), genbank),
        ];
        self.post_multipart("file/sequence", fields).await
    }

    async fn attach_record_file(&self, entry_id: u64, path: &Path) -> IceResult<Value> {
        let genbank = tokio::fs::read_to_string(path).await?;
        self.attach_record_to_part(entry_id, &genbank).await
    }

    async fn delete_part_record(&self, entry_id: u64) -> IceResult<()> {
        info!("Deleting sequence of entry {}", entry_id);
        let _: Value = self.delete(&format!("parts/{entry_id}/sequence")).await?;
        Ok(())
    }

    async fn set_part_custom_field(
        &self,
        entry_id: u64,
        name: &str,
        value: &str,
    ) -> IceResult<CustomField> {
        debug!("Setting custom field {} of entry {}", name, entry_id);
        let request = CustomFieldRequest {
            part_id: entry_id,
            name,
            value,
        };
        self.post("custom-fields", &request).await
    }

    async fn get_part_custom_fields_list(&self, entry_id: u64) -> IceResult<Vec<CustomField>> {
        let fields: Option<Vec<CustomField>> = self
            .get_with_query("custom-fields", &[("partId", entry_id.to_string())])
            .await?;
        Ok(fields.unwrap_or_default())
    }

    async fn get_part_custom_field(&self, entry_id: u64, name: &str) -> IceResult<String> {
        self.get_part_custom_fields_list(entry_id)
            .await?
            .into_iter()
            .find(|field| field.name == name)
            .map(|field| field.value)
            .ok_or_else(|| {
                AppError::NotFound(format!("No custom field named {name} on entry {entry_id}."))
            })
    }

    async fn delete_custom_field(&self, field_id: u64) -> IceResult<()> {
        debug!("Deleting custom field {}", field_id);
        let _: Value = self.delete(&format!("custom-fields/{field_id}")).await?;
        Ok(())
    }

    async fn find_parts_by_custom_field_value(
        &self,
        name: &str,
        value: &str,
    ) -> IceResult<Vec<Entry>> {
        let query = [("name", name.to_string()), ("value", value.to_string())];
        let entries: Option<Vec<Entry>> =
            self.get_with_query("custom-fields/parts", &query).await?;
        Ok(entries.unwrap_or_default())
    }
}
