use crate::constants::GENBANK_LOCUS_WIDTH;

/// Pads the first (LOCUS) line of a GenBank record to 80 columns
///
/// ICE trims trailing spaces from the LOCUS line, which strict GenBank readers
/// reject. Line endings are normalised to `\n`.
#[must_use]
pub fn normalize_genbank(text: &str) -> String {
    let mut lines = text.lines();
    let Some(first) = lines.next() else {
        return String::new();
    };
    let mut normalized = format!("{first:<width$}", width = GENBANK_LOCUS_WIDTH);
    for line in lines {
        normalized.push('\n');
        normalized.push_str(line);
    }
    normalized
}
