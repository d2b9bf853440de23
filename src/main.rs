use range_cipher::{
    args::Args,
    cli::{run, usage, write_output},
    config::Config,
};
use std::{env, io, process::ExitCode};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn program_name() -> String {
    env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let program = program_name();
    let args = match Args::try_from_raw(env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            debug!(kind = ?err.kind(), "bad arguments");
            eprintln!("{}", usage(&program));
            return Ok(ExitCode::FAILURE);
        }
    };

    match run(&args, &Config::default()) {
        Ok(output) => {
            write_output(&mut io::stdout().lock(), &output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            if err.shows_usage() {
                eprintln!("{}", usage(&program));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
