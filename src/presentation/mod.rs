/// Sample location formatting and well names
pub mod location;
/// Location rows and tables
pub mod locations;
/// Sequence text helpers
pub mod sequence;

pub use location::{parse_sample_location, sample_location_string, sanitize_well_name};
pub use locations::{LocationRow, locations_table};
pub use sequence::normalize_genbank;
