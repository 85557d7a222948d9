//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = fernweh_cli::run() {
        eprintln!("fernweh: {err:#}");
        std::process::exit(1);
    }
}
