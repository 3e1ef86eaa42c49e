// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! clubsync-cli: command line host for the club sync layer.
//!
//! Every invocation opens the local store under the state directory,
//! restores the session, runs one command against the backend and exits.
//! `watch` is the exception: it keeps polling until interrupted.

mod cli;
mod commands;
mod context;
mod display;
mod logging;

pub mod error;

pub use cli::{Cli, ClubCommand, Command, EventCommand, GlobalArgs, OutputFormat};
pub use context::Context;
pub use error::{Error, Result};

/// Runs a parsed command line to completion.
pub fn run(cli: Cli) -> Result<()> {
    let state_dir = context::resolve_state_dir(cli.global.state_dir.as_deref())?;
    logging::setup_logging(&state_dir);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let ctx = context::Context::open(&cli.global, state_dir)?;
        commands::dispatch(&ctx, cli.command).await
    })
}
