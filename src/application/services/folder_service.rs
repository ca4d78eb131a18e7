use crate::application::client::IceClient;
use crate::application::interfaces::folder::FolderService;
use crate::application::services::resolve_unique_name;
use crate::error::{AppError, IceResult};
use crate::model::http::IceTransport;
use crate::model::requests::{Collection, EntryQuery, FolderRef, FolderSelection, NewFolder};
use crate::model::responses::{Entry, Folder, FolderEntries};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl<T: IceTransport + 'static> FolderService for IceClient<T> {
    async fn get_collection_folders(&self, collection: Collection) -> IceResult<Vec<Folder>> {
        let path = format!("collections/{collection}/folders");
        debug!("Getting folders of collection {}", collection);

        let folders: Option<Vec<Folder>> = self.get(&path).await?;
        let folders = folders.unwrap_or_default();

        debug!("Folders obtained: {} in {}", folders.len(), collection);
        Ok(folders)
    }

    async fn get_folder_id(&self, name: &str, collection: Collection) -> IceResult<u64> {
        let folders = self.get_collection_folders(collection).await?;
        resolve_unique_name(
            "folder",
            name,
            folders.iter().map(|f| (f.folder_name.as_str(), f.id)),
        )
    }

    async fn get_folder_infos(&self, folder_id: u64) -> IceResult<Folder> {
        self.get(&format!("folders/{folder_id}")).await
    }

    async fn get_folder_entries_with(
        &self,
        folder_id: u64,
        query: &EntryQuery,
    ) -> IceResult<Vec<Entry>> {
        let path = format!("folders/{folder_id}/entries");
        let batch_size = query.batch_size.max(1);
        let mut entries: Vec<Entry> = Vec::new();

        if query.limit == Some(0) {
            return Ok(entries);
        }

        let mut offset = 0;
        let mut total: Option<usize> = None;
        loop {
            let mut params = vec![
                ("offset", offset.to_string()),
                ("limit", batch_size.to_string()),
            ];
            if let Some(filter) = &query.filter {
                params.push(("filter", filter.clone()));
            }

            let page: FolderEntries = self.get_with_query(&path, &params).await?;
            let count = *total.get_or_insert(page.count as usize);
            let received = page.entries.len();
            debug!(
                "Folder {}: {} entries at offset {} of {}",
                folder_id, received, offset, count
            );
            entries.extend(page.entries);
            offset += batch_size;

            if let Some(limit) = query.limit {
                if entries.len() >= limit {
                    entries.truncate(limit);
                    break;
                }
            }
            if received == 0 || offset >= count {
                break;
            }
        }

        info!("Folder {}: {} entries obtained", folder_id, entries.len());
        Ok(entries)
    }

    async fn get_collection_entries(
        &self,
        collection: Collection,
        ignored_folders: &[u64],
    ) -> IceResult<Vec<Entry>> {
        let mut entries = Vec::new();
        for folder in self.get_collection_folders(collection).await? {
            if ignored_folders.contains(&folder.id) {
                debug!("Skipping folder {} ({})", folder.folder_name, folder.id);
                continue;
            }
            entries.extend(self.get_folder_entries(folder.id).await?);
        }
        Ok(entries)
    }

    async fn create_folder(&self, name: &str) -> IceResult<Folder> {
        if name.trim().is_empty() {
            return Err(AppError::InvalidInput("folder name is empty".to_string()));
        }
        info!("Creating folder {}", name);
        self.post("folders", &NewFolder { folder_name: name })
            .await
    }

    async fn add_to_folder(&self, entry_ids: &[u64], folder_ids: &[u64]) -> IceResult<Value> {
        if entry_ids.is_empty() || folder_ids.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one entry and one folder are required".to_string(),
            ));
        }
        let selection = FolderSelection {
            all: false,
            entries: entry_ids.to_vec(),
            destination: folder_ids.iter().map(|&id| FolderRef { id }).collect(),
        };
        debug!(
            "Adding {} entries to {} folders",
            entry_ids.len(),
            folder_ids.len()
        );
        self.put("folders/entries", &selection).await
    }
}
