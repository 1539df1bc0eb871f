#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

use tls_client as _;

pub mod app;
pub mod output;

use std::process::ExitCode;

use app::CivicReportApp;
use clap::Parser;
use config::{args::ArgsConfig, get_config};

fn main() -> ExitCode {
    let args = ArgsConfig::parse();

    let config = match get_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:?}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Tokio runtime creation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(async { CivicReportApp::new(config).run().await })
}
