use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use crate::action::ResultItem;
use crate::config::Preferences;
use crate::consts::VERSION;
use crate::error::LauncherError;
use crate::extension::{KeywordQuery, Launcher};
use crate::logging;
use crate::render;

#[derive(Debug, Parser)]
#[clap(name = "pass-launcher", version = VERSION, term_width = 80)]
/// Search, copy and generate `pass` entries the way a launcher would
struct Opts {
    #[clap(long, short = 's')]
    /// Password store to search [default: $PASSWORD_STORE_DIR or ~/.password-store]
    store: Option<String>,
    #[clap(long, short = 'n')]
    /// Maximum number of search results [default: 5]
    max_results: Option<String>,
    #[clap(long)]
    /// Seconds a store listing is reused before rescanning [default: 30]
    ttl: Option<u64>,
    #[clap(long)]
    /// Keyword that searches entries [default: p]
    search_keyword: Option<String>,
    #[clap(long)]
    /// Keyword that generates an entry [default: pg]
    generate_keyword: Option<String>,
    #[clap(long)]
    /// Don't chain a desktop notification after `pass`
    no_notify: bool,
    #[clap(long)]
    /// Print results as JSON
    json: bool,
    #[clap(long, short = 'v', action = ArgAction::Count)]
    /// More logging; repeat for more
    verbose: u8,
    #[clap(long, short = 'q', conflicts_with = "verbose")]
    /// Only log errors
    quiet: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Handle a single query and list its results
    Query {
        #[clap(long, short = 'r')]
        /// Run the n-th result (1-based) after listing
        run: Option<usize>,
        keyword: String,
        #[clap(allow_hyphen_values = true)]
        argument: Vec<String>,
    },
    /// Handle one `<keyword> [argument]` query per line of stdin
    Listen,
}

impl Opts {
    fn preferences(&self) -> Preferences {
        let mut prefs = Preferences::default();

        if let Some(store) = &self.store {
            prefs.pass_location = store.clone();
        }
        if let Some(max_results) = &self.max_results {
            prefs.max_results = max_results.clone();
        }
        if let Some(ttl) = self.ttl {
            prefs.ttl = std::time::Duration::from_secs(ttl);
        }
        if let Some(keyword) = &self.search_keyword {
            prefs.search_keyword = keyword.clone();
        }
        if let Some(keyword) = &self.generate_keyword {
            prefs.generate_keyword = keyword.clone();
        }
        prefs.notify = !self.no_notify;

        prefs
    }
}

pub fn opt() -> Result<()> {
    let opts = Opts::parse();
    logging::init_logging(opts.verbose, opts.quiet);

    let launcher = Launcher::new(opts.preferences());
    log::debug!("{:?}", launcher.preferences());

    match opts.command {
        Command::Query {
            run,
            keyword,
            argument,
        } => {
            let argument = if argument.is_empty() {
                None
            } else {
                Some(argument.join(" "))
            };
            let items = launcher.on_keyword_query(&KeywordQuery::new(keyword, argument));
            render::print_items(&items, opts.json)?;

            if let Some(n) = run {
                run_item(&items, n)?;
            }
        }
        Command::Listen => listen(&launcher, opts.json)?,
    }

    Ok(())
}

fn run_item(items: &[ResultItem], n: usize) -> Result<()> {
    let item = n
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .ok_or(LauncherError::NoSuchResult(n, items.len()))?;

    item.on_enter
        .run()
        .with_context(|| format!("Failed to run '{}'", item.name))
}

fn listen(launcher: &Launcher, json: bool) -> Result<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.with_context(|| "Failed to read query from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let event = match line.parse::<KeywordQuery>() {
            Ok(event) => event,
            Err(err) => {
                log::warn!("{}", err);
                continue;
            }
        };

        render::print_items(&launcher.on_keyword_query(&event), json)?;
    }

    Ok(())
}
