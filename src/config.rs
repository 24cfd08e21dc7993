//! Preferences handed over by the launcher host.
//!
//! Hosts deliver preferences as strings. Everything here is parsed leniently:
//! a bad value is logged and replaced by its default instead of failing the
//! query that needed it.

use std::collections::HashMap;
use std::time::Duration;

use crate::consts::{
    DEFAULT_GENERATE_KEYWORD, DEFAULT_MAX_RESULTS, DEFAULT_SEARCH_KEYWORD, DEFAULT_TTL,
    PASSWORD_STORE_DIR,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Store root; may start with `~`.
    pub pass_location: String,
    /// Raw value, see [`Preferences::max_results`].
    pub max_results: String,
    pub search_keyword: String,
    pub generate_keyword: String,
    pub ttl: Duration,
    pub notify: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            pass_location: (*PASSWORD_STORE_DIR).clone(),
            max_results: DEFAULT_MAX_RESULTS.to_string(),
            search_keyword: DEFAULT_SEARCH_KEYWORD.to_owned(),
            generate_keyword: DEFAULT_GENERATE_KEYWORD.to_owned(),
            ttl: DEFAULT_TTL,
            notify: true,
        }
    }
}

impl Preferences {
    /// Reads the host's preference map. Missing keys keep their defaults and
    /// unknown keys are ignored.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let mut prefs = Preferences::default();

        for (key, value) in map {
            match key.as_str() {
                "pass_location" => prefs.pass_location = value.clone(),
                "max_results" => prefs.max_results = value.clone(),
                "search_keyword" => prefs.search_keyword = value.clone(),
                "generate_keyword" => prefs.generate_keyword = value.clone(),
                "ttl" => match value.trim().parse::<u64>() {
                    Ok(secs) => prefs.ttl = Duration::from_secs(secs),
                    Err(_) => log::error!("Invalid value for ttl: {}", value),
                },
                "notify" => match parse_flag(value) {
                    Some(notify) => prefs.notify = notify,
                    None => log::error!("Invalid value for notify: {}", value),
                },
                _ => log::debug!("ignoring unknown preference {}", key),
            }
        }

        prefs
    }

    /// How many results a search shows. A value that isn't a non-negative
    /// integer falls back to the default.
    pub fn max_results(&self) -> usize {
        match self.max_results.trim().parse::<usize>() {
            Ok(max) => max,
            Err(_) => {
                log::error!("Invalid value for max_results: {}", self.max_results);
                DEFAULT_MAX_RESULTS
            }
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
