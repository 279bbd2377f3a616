//! Binary entry point. The CLI lives in `cli/`; this file only invokes
//! `cli::run()` and turns an error into an exit status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
