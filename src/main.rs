//! The `pass-launcher` binary

fn main() {
    if let Err(err) = pass_launcher::cli::opt() {
        eprint!("{}", err);
        err.chain().skip(1).for_each(|e| eprint!(": {}", e));
        eprintln!();

        std::process::exit(1);
    }
}
