//! Turning launcher queries into result lists
//!
//! The host delivers one [`KeywordQuery`] per keystroke. The search keyword
//! lists matching entries, each copying its password when selected; the
//! generate keyword offers to generate a password for whatever was typed.

use std::str::FromStr;

use crate::action::{self, ResultItem};
use crate::cache::{Clock, SystemClock};
use crate::config::Preferences;
use crate::error::LauncherError;
use crate::store::{PasswordStore, Scanner, WalkScanner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    pub keyword: String,
    pub argument: Option<String>,
}

impl KeywordQuery {
    pub fn new<K>(keyword: K, argument: Option<String>) -> Self
    where
        K: Into<String>,
    {
        KeywordQuery {
            keyword: keyword.into(),
            argument,
        }
    }

    /// The text typed after the keyword; empty if there is none.
    pub fn argument(&self) -> &str {
        self.argument.as_deref().unwrap_or("")
    }
}

/// Parses `<keyword> [argument]`, the way a launcher input line reads.
impl FromStr for KeywordQuery {
    type Err = LauncherError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let mut parts = line.splitn(2, char::is_whitespace);

        let keyword = match parts.next() {
            Some(keyword) if !keyword.is_empty() => keyword,
            _ => return Err(LauncherError::MalformedEvent(line.to_owned())),
        };
        let argument = parts
            .next()
            .map(str::trim_start)
            .filter(|argument| !argument.is_empty())
            .map(ToOwned::to_owned);

        Ok(KeywordQuery::new(keyword, argument))
    }
}

#[derive(Debug)]
pub struct Launcher<S = WalkScanner, C = SystemClock> {
    prefs: Preferences,
    store: PasswordStore<S, C>,
}

impl Launcher<WalkScanner, SystemClock> {
    pub fn new(prefs: Preferences) -> Self {
        let store = PasswordStore::with_ttl(prefs.ttl);
        Launcher { prefs, store }
    }
}

impl<S, C> Launcher<S, C>
where
    S: Scanner,
    C: Clock,
{
    pub fn with_store(prefs: Preferences, store: PasswordStore<S, C>) -> Self {
        Launcher { prefs, store }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Replaces the preferences. Listings cached for a previous store
    /// location stay cached under that location.
    pub fn set_preferences(&mut self, prefs: Preferences) {
        self.prefs = prefs;
    }

    pub fn store(&self) -> &PasswordStore<S, C> {
        &self.store
    }

    pub fn on_keyword_query(&self, event: &KeywordQuery) -> Vec<ResultItem> {
        let keyword = event.keyword.as_str();

        if keyword == self.prefs.search_keyword {
            self.search_results(event.argument())
        } else if keyword == self.prefs.generate_keyword {
            self.generate_results(event.argument())
        } else {
            log::debug!("no handler for keyword '{}'", keyword);
            Vec::new()
        }
    }

    /// The first `max_results` entries matching `query`, in store order.
    pub fn search_results(&self, query: &str) -> Vec<ResultItem> {
        let max_results = self.prefs.max_results();

        self.store
            .search(query, &self.prefs.pass_location)
            .take(max_results)
            .map(|entry| action::search_result(&entry, self.prefs.notify))
            .collect()
    }

    /// Blank input offers nothing to generate.
    pub fn generate_results(&self, name: &str) -> Vec<ResultItem> {
        let name = name.trim();
        if name.is_empty() {
            return Vec::new();
        }

        vec![action::generate_result(name, self.prefs.notify)]
    }
}
