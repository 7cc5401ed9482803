// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! piwebapi - command-line browser for the PI Web API element hierarchy

use anyhow::Result;
use clap::{Parser, Subcommand};
use piwebapi_client::{CancellationToken, ElementApi};

mod commands;
mod config;
mod output;

use commands::ElementCommand;

#[derive(Parser)]
#[command(
    name = "piwebapi",
    version,
    about = "PI Web API element browser",
    long_about = "Browse and manage AF elements through the PI Web API"
)]
struct Cli {
    /// PI Web API base URL, e.g. https://pisrv/piwebapi
    #[arg(short = 'U', long, global = true, env = "PIWEBAPI_URL")]
    url: Option<String>,

    /// Username for HTTP Basic authentication
    #[arg(short, long, global = true, env = "PIWEBAPI_USERNAME")]
    username: Option<String>,

    /// Password for HTTP Basic authentication
    #[arg(long, global = true, env = "PIWEBAPI_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Bearer token; takes precedence over username and password
    #[arg(long, global = true, env = "PIWEBAPI_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Skip TLS certificate verification (or set PIWEBAPI_INSECURE=1)
    #[arg(short = 'k', long, global = true)]
    insecure: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and manage AF elements
    #[command(alias = "el")]
    Element {
        #[command(subcommand)]
        command: ElementCommand,
    },
}

impl Cli {
    fn connection(&self) -> config::ConnectionArgs {
        config::ConnectionArgs {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            token: self.token.clone(),
            insecure: self.insecure,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("piwebapi=debug,piwebapi_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupted, cancelling request");
            on_interrupt.cancel();
        }
    });

    match &cli.command {
        Commands::Element { command } => {
            let configuration = config::build_configuration(&cli.connection())?;
            let api = ElementApi::from_configuration(configuration)?;
            command.clone().run(&api, &cancel, cli.json).await
        }
    }
}
