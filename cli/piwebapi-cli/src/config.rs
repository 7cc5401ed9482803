// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Connection settings
//!
//! Command-line options win over the environment; anything the command line
//! does not cover (timeout, WebID type) is read from `PIWEBAPI_*` variables.

use anyhow::{Result, anyhow};
use piwebapi_client::configuration::env;
use piwebapi_client::{Configuration, StatusErrorMapper};

/// Connection options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct ConnectionArgs {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    pub insecure: bool,
}

/// Build the client configuration for a command
///
/// Remote failures are raised as errors so the exit status reflects them.
pub fn build_configuration(args: &ConnectionArgs) -> Result<Configuration> {
    build_with_lookup(args, |key| std::env::var(key).ok())
}

fn build_with_lookup(
    args: &ConnectionArgs,
    fallback: impl Fn(&str) -> Option<String>,
) -> Result<Configuration> {
    if args.url.is_none() && fallback(env::URL).is_none() {
        return Err(anyhow!(
            "No PI Web API URL configured. Use --url or set {}",
            env::URL
        ));
    }

    let lookup = |key: &str| -> Option<String> {
        let from_args = match key {
            env::URL => args.url.clone(),
            env::USERNAME => args.username.clone(),
            env::PASSWORD => args.password.clone(),
            env::TOKEN => args.token.clone(),
            env::INSECURE if args.insecure => Some("true".to_string()),
            _ => None,
        };
        from_args.or_else(|| fallback(key))
    };

    let configuration = Configuration::from_lookup(lookup)?.with_error_mapper(StatusErrorMapper);
    Ok(configuration)
}
