/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::interfaces::{EntryService, SampleService};
use crate::constants::TUBE_LOCATION_STOP;
use crate::error::{AppError, IceResult};
use crate::presentation::locations::LocationRow;
use tracing::{debug, warn};

/// Message used for entries that exist but have no registered sample
pub const NO_SAMPLES_MESSAGE: &str = "In ICE but no samples";

/// Finds where the samples of each named entry are stored
///
/// Every sample gives one row, with its location flattened to a single line and
/// followed down to the tube. Entries without samples give one row saying so. Names
/// that match no entry (or several) give one row carrying the lookup error, so a
/// single typo does not abort the whole listing.
///
/// # Arguments
/// * `client` - Client able to look entries up and list their samples
/// * `names` - Entry names, in the order rows should be produced
///
/// # Returns
/// The rows, or the first error that is not a lookup miss
pub async fn find_entries_locations<C>(client: &C, names: &[&str]) -> IceResult<Vec<LocationRow>>
where
    C: EntryService + SampleService + ?Sized,
{
    let mut rows = Vec::new();
    for &name in names {
        let entry = match client.find_entry_by_name(name).await {
            Ok(entry) => entry,
            Err(e @ (AppError::NotFound(_) | AppError::Ambiguous { .. })) => {
                warn!("Could not identify {}: {}", name, e);
                rows.push(LocationRow::new(name, lookup_message(&e)));
                continue;
            }
            Err(e) => return Err(e),
        };

        let samples = client.get_samples(entry.id).await?;
        debug!("{}: {} samples", name, samples.len());
        if samples.is_empty() {
            rows.push(LocationRow::new(name, NO_SAMPLES_MESSAGE));
            continue;
        }
        for sample in samples {
            let location = sample
                .location_string_until(TUBE_LOCATION_STOP)
                .replace(['\n', '\r'], " ");
            rows.push(LocationRow::new(name, location));
        }
    }
    Ok(rows)
}

fn lookup_message(error: &AppError) -> String {
    match error {
        AppError::NotFound(msg) => msg.clone(),
        other => other.to_string(),
    }
}
