//! Entry point for the `runmate` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = runmate_cli::run() {
        eprintln!("runmate: {err}");
        std::process::exit(1);
    }
}
