// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! twinshell binary entry point.

use std::io;
use std::path::Path;

use clap::Parser;

use twinshell::cli::Cli;
use twinshell::compile::{check_working_dir, Compiler};
use twinshell::config::{HarnessConfig, Overrides};
use twinshell::error::{exit_codes, HarnessError};
use twinshell::output_diagnostic::{print_error, print_warning};
use twinshell::report::Reporter;
use twinshell::{env, logging, TestCycle};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        print_warning(format_args!("Failed to initialize logging: {}", e));
    }

    let code = match run(&cli).await {
        Ok(true) => exit_codes::SUCCESS,
        Ok(false) => exit_codes::FAILED,
        Err(e) => {
            print_error(&e);
            exit_codes::SETUP_FAILURE
        }
    };
    std::process::exit(code);
}

/// Returns whether every command passed.
async fn run(cli: &Cli) -> Result<bool, HarnessError> {
    let config_path = cli.config.clone().or_else(env::config_path);
    let overrides = Overrides {
        grace_ms: cli.grace_ms.or_else(env::grace_ms),
        skip_build: cli.no_build,
    };
    let config = HarnessConfig::load(config_path.as_deref())?.with_overrides(&overrides);
    config.validate()?;

    let working_dir = check_working_dir(&cli.working_dir)?;
    let mut reporter = Reporter::new(io::stdout().lock(), cli.output_format);

    if config.build.enabled {
        let report = Compiler::new(config.build.clone())
            .build(&working_dir)
            .await?;
        reporter.build(&report)?;
    }

    let summary = cycle(&config, &working_dir).run(&mut reporter).await?;
    Ok(summary.is_success())
}

fn cycle(config: &HarnessConfig, working_dir: &Path) -> TestCycle {
    tracing::info!(
        dir = %working_dir.display(),
        commands = config.commands.len(),
        grace_ms = config.grace_ms,
        "starting test cycle"
    );
    TestCycle::from_config(config, working_dir)
}
