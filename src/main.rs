//! # calcline Main Entry Point

use anyhow::Result;
use calcline::cmd_args::{CommandLineArgs, RunMode};
use calcline::config::{self, CalcSettings};
use calcline::io::{TerminalEventStream, TerminalRenderStream};
use calcline::one_shot::{self, EXIT_SUCCESS};
use calcline::AppController;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> Result<ExitCode> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();

    let status = match cmd_args.mode().clone() {
        RunMode::Interactive => {
            let mut app = AppController::with_io_streams(
                cmd_args,
                TerminalEventStream,
                TerminalRenderStream::stdout(),
            )?;
            app.run()?;
            EXIT_SUCCESS
        }
        RunMode::Evaluate(expression) => {
            let settings = CalcSettings::load(cmd_args.profile(), &config::get_profile_path())?;
            one_shot::run_evaluation(
                &expression,
                settings.precision,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?
        }
        RunMode::Factorial(n) => {
            one_shot::run_factorial(n, &mut io::stdout().lock(), &mut io::stderr().lock())?
        }
    };

    Ok(ExitCode::from(status))
}

fn init_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(format!(
            "{}_LOG_LEVEL",
            env!("CARGO_PKG_NAME").to_uppercase()
        )))
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
