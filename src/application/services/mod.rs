/// Entry service implementation for [`IceClient`](crate::application::client::IceClient)
pub mod entry_service;
/// Folder service implementation for [`IceClient`](crate::application::client::IceClient)
pub mod folder_service;
/// Sample service implementation for [`IceClient`](crate::application::client::IceClient)
pub mod sample_service;

use crate::error::{AppError, IceResult};
use crate::utils::names::not_found_message;

/// Resolves `name` to the id of the only record carrying it
///
/// `records` yields `(name, id)` pairs; the same id listed twice counts once.
pub(crate) fn resolve_unique_name<'a, I>(kind: &str, name: &str, records: I) -> IceResult<u64>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let records: Vec<(&str, u64)> = records.into_iter().collect();
    let mut ids: Vec<u64> = records
        .iter()
        .filter(|(candidate, _)| *candidate == name)
        .map(|(_, id)| *id)
        .collect();
    ids.sort_unstable();
    ids.dedup();

    match ids.as_slice() {
        [] => Err(AppError::NotFound(not_found_message(
            kind,
            name,
            records.iter().map(|(candidate, _)| *candidate),
        ))),
        [id] => Ok(*id),
        _ => Err(AppError::Ambiguous {
            name: name.to_string(),
            ids,
        }),
    }
}
