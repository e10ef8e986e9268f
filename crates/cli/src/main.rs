// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jobwatch - alert once on every failed job

use std::process::ExitCode;

use clap::Parser;
use jobwatch::commands::check::{self, CheckArgs};
use jobwatch::{error, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CheckArgs::parse();
    logging::init();

    match check::execute(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error::chain(&e));
            ExitCode::FAILURE
        }
    }
}
