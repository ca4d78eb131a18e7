/// Entry service interface
pub mod entry;
/// Folder service interface
pub mod folder;
/// Sample service interface
pub mod sample;

pub use entry::EntryService;
pub use folder::FolderService;
pub use sample::SampleService;
