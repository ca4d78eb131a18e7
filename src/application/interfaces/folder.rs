use crate::error::IceResult;
use crate::model::requests::{Collection, EntryQuery};
use crate::model::responses::{Entry, Folder};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for collections and folders
#[async_trait]
pub trait FolderService: Send + Sync {
    /// Lists every collection
    fn get_collections_list(&self) -> Vec<Collection> {
        Collection::ALL.to_vec()
    }

    /// Gets the folders of a collection
    async fn get_collection_folders(&self, collection: Collection) -> IceResult<Vec<Folder>>;

    /// Finds the id of the folder named `name` in `collection`
    ///
    /// # Returns
    /// * `Ok(u64)` - Id of the only folder with that name
    /// * `Err(AppError::NotFound)` - If no folder has that name; the message lists close names
    /// * `Err(AppError::Ambiguous)` - If several folders have that name
    async fn get_folder_id(&self, name: &str, collection: Collection) -> IceResult<u64>;

    /// Gets a folder's details
    async fn get_folder_infos(&self, folder_id: u64) -> IceResult<Folder>;

    /// Gets every entry of a folder, in server order, following pagination
    async fn get_folder_entries(&self, folder_id: u64) -> IceResult<Vec<Entry>> {
        self.get_folder_entries_with(folder_id, &EntryQuery::default())
            .await
    }

    /// Gets the entries of a folder matching `query`, following pagination
    async fn get_folder_entries_with(
        &self,
        folder_id: u64,
        query: &EntryQuery,
    ) -> IceResult<Vec<Entry>>;

    /// Gets the entries of every folder of a collection, skipping `ignored_folders`
    async fn get_collection_entries(
        &self,
        collection: Collection,
        ignored_folders: &[u64],
    ) -> IceResult<Vec<Entry>>;

    /// Creates a personal folder
    async fn create_folder(&self, name: &str) -> IceResult<Folder>;

    /// Adds entries to folders
    async fn add_to_folder(&self, entry_ids: &[u64], folder_ids: &[u64]) -> IceResult<Value>;
}
