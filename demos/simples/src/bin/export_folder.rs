use ice_client::prelude::*;
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = std::env::args().skip(1);
    let (Some(folder), Some(target)) = (args.next(), args.next()) else {
        info!("Usage: export_folder FOLDER_NAME TARGET_DIR [COLLECTION]");
        return Ok(());
    };
    let collection: Collection = args.next().as_deref().unwrap_or("PERSONAL").parse()?;

    let ice = IceClient::from_env().await?;
    let folder_id = ice.get_folder_id(&folder, collection).await?;
    let entries = ice.get_folder_entries(folder_id).await?;
    info!("{} entries in {} ({})", entries.len(), folder, folder_id);

    let target = PathBuf::from(target);
    tokio::fs::create_dir_all(&target).await?;
    for entry in &entries {
        let record = ice.get_record(entry.id).await?;
        let stem = file_stem(entry);
        tokio::fs::write(target.join(format!("{stem}.gb")), &record.genbank).await?;
        tokio::fs::write(
            target.join(format!("{stem}.json")),
            serde_json::to_string_pretty(&record.entry)?,
        )
        .await?;
        info!("✓ {} exported", entry.name);
    }

    Ok(())
}

/// `{id}_{name}`, with every character that is not safe in a file name replaced by `_`
fn file_stem(entry: &Entry) -> String {
    let name: String = entry
        .name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}", entry.id, name)
}
