use log::{error, info};
use std::process::ExitCode;

use braillebrot::{Invocation, RunTerminalCommand, TERMINAL_FAILURE_EXIT_CODE, logging, parse_args};

fn main() -> ExitCode {
    if let Ok(path) = logging::init() {
        info!("logging to {}", path.display());
    }

    let region = match parse_args(std::env::args_os()) {
        Ok(Invocation::Run(region)) => region,
        Ok(Invocation::Help(usage)) => {
            print!("{usage}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    match RunTerminalCommand::new(region).execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("terminal failure: {err}");
            eprintln!("terminal failure: {err}");
            ExitCode::from(TERMINAL_FAILURE_EXIT_CODE)
        }
    }
}
