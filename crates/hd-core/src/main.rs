//! `heredity` binary entry point.

use clap::Parser;
use hd_core::cli::{run, Cli};
use hd_core::exit_codes::ExitCode;
use hd_core::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(ExitCode::from(&err).as_i32());
        }
    }
}
