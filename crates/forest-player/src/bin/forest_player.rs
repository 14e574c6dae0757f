//! `forest-player`: run a script of tree commands and print each result.
//!
//! Usage:
//!   forest-player [config.toml] < script.txt
//!
//! The script is read from stdin, one command per line. Output is one JSON
//! object per executed command. `FOREST_KIND` overrides the configured tree
//! kind; `RUST_LOG` controls diagnostics on stderr.

use std::io::{self, Read, Write};
use std::path::Path;

use forest_player::run;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config_path = args.get(1).map(Path::new);

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&buf, config_path) {
        Ok(result) => {
            if let Err(e) = io::stdout().write_all(result.as_bytes()) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
