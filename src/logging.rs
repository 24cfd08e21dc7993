//! Logging setup for the `pass-launcher` binary.
//!
//! `RUST_LOG`, when set, wins. Otherwise the level comes from the command
//! line: `-q` shows errors only, the default shows warnings, and each `-v`
//! adds a level (info, debug, trace).

use std::env;
use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();

    if env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    } else {
        builder.filter_level(level(verbose, quiet));
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "[{} {}] {}",
            record.level(),
            record.module_path().unwrap_or("pass_launcher"),
            record.args()
        )
    });

    // a host embedding the library may already have installed a logger
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}

fn level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }

    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
