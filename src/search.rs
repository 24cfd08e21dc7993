//! Token search over entry names
//!
//! A query is split on spaces and slashes into lowercase tokens. An entry
//! matches when its lowercased name contains every token, in any order.
//! Adjacent delimiters produce empty tokens, which match everything.

use std::iter::FusedIterator;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

static DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ /]").expect("delimiter pattern is a valid regex"));

pub fn tokenize<S>(query: S) -> Vec<String>
where
    S: AsRef<str>,
{
    DELIMITERS
        .split(&query.as_ref().to_lowercase())
        .map(ToOwned::to_owned)
        .collect()
}

/// `tokens` must already be lowercase.
pub fn is_match<S>(entry: &str, tokens: &[S]) -> bool
where
    S: AsRef<str>,
{
    let entry = entry.to_lowercase();
    tokens.iter().all(|token| entry.contains(token.as_ref()))
}

/// Filters `entries` by `query`, lazily and in listing order.
pub fn search<S>(query: S, entries: Arc<Vec<String>>) -> Matches
where
    S: AsRef<str>,
{
    Matches {
        tokens: tokenize(query).into(),
        entries,
        next: 0,
    }
}

/// The entries of one listing that match one query. Each entry is examined
/// only when the iterator is advanced past it, so taking a prefix does no
/// work on the rest of the listing.
#[derive(Debug, Clone)]
pub struct Matches {
    tokens: Arc<[String]>,
    entries: Arc<Vec<String>>,
    next: usize,
}

impl Matches {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of entries not examined yet.
    pub fn remaining(&self) -> usize {
        self.entries.len() - self.next
    }
}

impl Iterator for Matches {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(entry) = self.entries.get(self.next) {
            self.next += 1;
            if is_match(entry, &self.tokens[..]) {
                return Some(entry.clone());
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl FusedIterator for Matches {}
