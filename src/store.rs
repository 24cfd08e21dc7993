//! Listing the entries of a password store
//!
//! # store
//!
//! A store is a directory tree of `.gpg` files. Each file is one entry, named
//! by its path relative to the store root with the suffix dropped, e.g.
//! `<root>/finance/bank.gpg` is `finance/bank`. Walking the tree on every
//! keystroke is wasteful, so [`PasswordStore`] keeps each listing in a
//! [`TtlCache`] keyed by the resolved root.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use walkdir::{DirEntry, WalkDir};

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::consts::{DEFAULT_TTL, GPG_SUFFIX, HOME};
use crate::search::{self, Matches};

/// Identifies one listing in the cache: every input that changes what a scan
/// would return.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey {
    root: PathBuf,
}

impl StoreKey {
    /// Builds the key for a configured store location, expanding `~`.
    pub fn new<S>(location: S) -> Self
    where
        S: AsRef<str>,
    {
        StoreKey {
            root: expand_home(location),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Replaces a leading `~` (alone or followed by `/`) with `$HOME`. Any other
/// path, including `~user`, is returned as is.
pub fn expand_home<S>(path: S) -> PathBuf
where
    S: AsRef<str>,
{
    let path = path.as_ref();

    match (&*HOME, path.strip_prefix('~')) {
        (Some(home), Some(rest)) if rest.is_empty() || rest.starts_with('/') => {
            PathBuf::from([home.as_str(), rest].concat())
        }
        _ => PathBuf::from(path),
    }
}

/// Produces the entry identifiers found under a root, in traversal order.
pub trait Scanner {
    fn scan(&self, root: &Path) -> Vec<String>;
}

impl<S: Scanner + ?Sized> Scanner for Arc<S> {
    fn scan(&self, root: &Path) -> Vec<String> {
        (**self).scan(root)
    }
}

/// Walks the filesystem with `walkdir`. Directories that can't be read,
/// including a missing root, contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkScanner;

impl Scanner for WalkScanner {
    fn scan(&self, root: &Path) -> Vec<String> {
        let started = Instant::now();
        let mut entries = Vec::new();

        for entry in WalkDir::new(root).min_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("skipping unreadable path: {}", err);
                    continue;
                }
            };

            if !is_entry_file(&entry) {
                continue;
            }

            match entry_name(root, entry.path()) {
                Some(name) => entries.push(name),
                None => log::warn!(
                    "skipping {}: name is not valid UTF-8",
                    entry.path().display()
                ),
            }
        }

        log::debug!(
            "scanned {} in {:?}: {} entries",
            root.display(),
            started.elapsed(),
            entries.len()
        );

        entries
    }
}

fn is_entry_file(entry: &DirEntry) -> bool {
    // lossy, so undecodable names still reach entry_name and get reported
    let name = entry.file_name().to_string_lossy();
    // a bare `.gpg` would name an empty entry
    if name.len() <= GPG_SUFFIX.len() || !name.ends_with(GPG_SUFFIX) {
        return false;
    }

    let file_type = entry.file_type();
    // symlinks aren't followed into directories, but a link to a file counts
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Derives the identifier for `path` under `root`: relative, `/`-separated,
/// suffix stripped. `None` if the relative path isn't valid UTF-8.
pub fn entry_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut parts = Vec::new();

    for component in relative.components() {
        parts.push(component.as_os_str().to_str()?);
    }

    let name = parts.join("/");
    let name = name.strip_suffix(GPG_SUFFIX).unwrap_or(&name);
    Some(name.trim_start_matches('/').to_owned())
}

/// Cached access to store listings.
#[derive(Debug)]
pub struct PasswordStore<S = WalkScanner, C = SystemClock> {
    scanner: S,
    cache: TtlCache<StoreKey, Vec<String>, C>,
}

impl PasswordStore<WalkScanner, SystemClock> {
    pub fn new() -> Self {
        PasswordStore::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        PasswordStore::with_parts(WalkScanner, TtlCache::with_ttl(ttl))
    }
}

impl Default for PasswordStore<WalkScanner, SystemClock> {
    fn default() -> Self {
        PasswordStore::new()
    }
}

impl<S, C> PasswordStore<S, C>
where
    S: Scanner,
    C: Clock,
{
    pub fn with_parts(scanner: S, cache: TtlCache<StoreKey, Vec<String>, C>) -> Self {
        PasswordStore { scanner, cache }
    }

    /// Every entry under `location`, in scan order. Only touches the
    /// filesystem when the cached listing is missing or expired.
    pub fn entries<L>(&self, location: L) -> Arc<Vec<String>>
    where
        L: AsRef<str>,
    {
        self.entries_for(&StoreKey::new(location))
    }

    pub fn entries_for(&self, key: &StoreKey) -> Arc<Vec<String>> {
        let scanner = &self.scanner;
        self.cache
            .get_or_compute(key, |key| scanner.scan(key.root()))
    }

    /// Lazily yields the entries under `location` that match `query`.
    pub fn search<Q, L>(&self, query: Q, location: L) -> Matches
    where
        Q: AsRef<str>,
        L: AsRef<str>,
    {
        search::search(query, self.entries(location))
    }

    /// Forgets the listing for `location` so the next lookup rescans it.
    pub fn refresh<L>(&self, location: L) -> bool
    where
        L: AsRef<str>,
    {
        self.cache.invalidate(&StoreKey::new(location))
    }

    pub fn cache(&self) -> &TtlCache<StoreKey, Vec<String>, C> {
        &self.cache
    }
}
