use ice_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    // Credentials come from ICE_ROOT, ICE_TOKEN... or a .env file
    info!("Creating client and authenticating...");
    let ice = IceClient::from_env().await?;
    info!("✓ Client created and authenticated");

    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        info!("Usage: primer_locations NAME [NAME...]");
        return Ok(());
    }
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    let rows = find_entries_locations(&ice, &names).await?;
    locations_table(&rows).printstd();

    Ok(())
}
