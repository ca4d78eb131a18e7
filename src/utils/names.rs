use crate::constants::{SUGGESTION_LIMIT, SUGGESTION_MIN_SCORE};
use std::collections::BTreeSet;

/// Similarity between two names as a score from 0 (nothing in common) to 100 (equal)
///
/// The comparison ignores case and is based on the Levenshtein distance over
/// characters, normalised by the length of the longest name.
#[must_use]
pub fn similarity(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 100;
    }
    let distance = levenshtein(&a, &b);
    (100.0 * (1.0 - distance as f64 / longest as f64)).round() as u8
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Returns the candidates closest to `name`, best first
///
/// Duplicated candidates are considered once. At most `limit` names are returned,
/// all with a [`similarity`] of at least `min_score`. Ties keep alphabetical order.
#[must_use]
pub fn did_you_mean<'a, I>(name: &str, candidates: I, limit: usize, min_score: u8) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: BTreeSet<&str> = candidates.into_iter().collect();
    let mut scored: Vec<(u8, &str)> = unique
        .into_iter()
        .map(|candidate| (similarity(name, candidate), candidate))
        .filter(|(score, _)| *score >= min_score)
        .collect();
    scored.sort_by(|x, y| y.0.cmp(&x.0).then_with(|| x.1.cmp(y.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

/// Builds the message of a failed name lookup, with suggestions when some names are close
pub(crate) fn not_found_message<'a, I>(kind: &str, name: &str, candidates: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut message = format!("No {kind} named {name}.");
    let suggestions = did_you_mean(name, candidates, SUGGESTION_LIMIT, SUGGESTION_MIN_SCORE);
    if !suggestions.is_empty() {
        message.push_str(&format!(" Suggestions: {}.", suggestions.join(", ")));
    }
    message
}
