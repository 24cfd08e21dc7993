//! Runtime constants
//!
//! # consts
//!
//! This module houses constants used throughout the code. Some of these are
//! just lazily-evaluated environment variables.

use std::env;
use std::time::Duration;

use once_cell::sync::Lazy;

/// Suffix every entry file in the store carries.
pub const GPG_SUFFIX: &str = ".gpg";

/// How long a store listing is served before the store is walked again.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RESULTS: usize = 5;

pub const DEFAULT_SEARCH_KEYWORD: &str = "p";
pub const DEFAULT_GENERATE_KEYWORD: &str = "pg";

pub const PASS_BINARY: &str = "pass";
pub const NOTIFY_BINARY: &str = "notify-send";

pub const SEARCH_ICON: &str = "images/icon.png";
pub const GENERATE_ICON: &str = "images/generate.png";

pub static VERSION: &str = env!("PASS_LAUNCHER_VERSION");

// unlike pass(1), an unset HOME isn't fatal: `~` is just left alone
pub static HOME: Lazy<Option<String>> =
    Lazy::new(|| env::var("HOME").ok().filter(|home| !home.is_empty()));

// pass(1)
pub static PASSWORD_STORE_DIR: Lazy<String> = Lazy::new(|| match env::var("PASSWORD_STORE_DIR") {
    Ok(store) if !store.is_empty() => store,
    _ => String::from("~/.password-store"),
});
