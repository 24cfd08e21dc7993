pub mod action;
pub mod cache;
pub mod cli;
pub mod config;
pub mod consts;
pub mod error;
pub mod extension;
pub mod logging;
pub mod render;
pub mod search;
pub mod store;

pub use action::{Invocation, ResultItem, Script};
pub use cache::{Clock, SystemClock, TtlCache};
pub use config::Preferences;
pub use error::{LauncherError, Result};
pub use extension::{KeywordQuery, Launcher};
pub use search::Matches;
pub use store::{PasswordStore, Scanner, StoreKey, WalkScanner};
