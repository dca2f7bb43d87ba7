//! Server entry point.

use clap::Parser;
use patients_server::Config;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    match patients_server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=server_exit module=server status=error error={err}");
            eprintln!("patients-server: {err}");
            ExitCode::FAILURE
        }
    }
}
