// src/bin/syslog-probe/main.rs

use probe_cli::{exit_with, handle_clap_error, parse_args};
use probe_core::{ExitCode, ProbeError};

fn main() {
    let opts = parse_args(std::env::args_os()).unwrap_or_else(|e| handle_clap_error(e));
    let mut stdout = std::io::stdout().lock();
    match probe_cli::run(&opts, &mut stdout) {
        Ok(_) => {}
        Err(e) => {
            if !matches!(e, ProbeError::NoSelection) {
                eprintln!("{e}");
            }
            exit_with(ExitCode::from(&e));
        }
    }
}
