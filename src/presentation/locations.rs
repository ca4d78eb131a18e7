use pretty_simple_display::{DebugPretty, DisplaySimple};
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};

/// Where one entry is stored, or why it could not be located
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationRow {
    /// Entry name, as requested
    pub entry: String,
    /// Location on a single line, or an explanation
    pub location: String,
}

impl LocationRow {
    /// Row for `entry` stored at `location`
    pub fn new(entry: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            location: location.into(),
        }
    }
}

/// Renders location rows as a two column table
#[must_use]
pub fn locations_table(rows: &[LocationRow]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["entry", "location"]);
    for r in rows {
        table.add_row(row![r.entry, r.location]);
    }
    table
}
