// This file is part of Gear.
//
// Copyright (C) 2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::{cmd::Command, endpoint::Endpoint, keyring::Account, result::Result};
use anyhow::anyhow;
use clap::Parser;
use gclient::GearApi;
use gsdk::Api;
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Parser)]
pub struct Opts {
    /// Timeout for RPC requests, in milliseconds.
    #[arg(short, long, default_value = "60000", global = true)]
    pub timeout: u64,

    /// Increase verbosity level, maximum is 3.
    #[clap(short, long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Vara node RPC endpoint.
    ///
    /// Can be `mainnet`, `testnet`, `localhost` or a custom websocket URL.
    #[arg(
        short,
        long,
        env = "GDEPLOY_ENDPOINT",
        default_value = "testnet",
        global = true
    )]
    pub endpoint: Endpoint,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    opts: Opts,
}

impl App {
    /// Constructs new application instance.
    pub fn new(opts: Opts) -> Self {
        Self { opts }
    }

    pub async fn run(self, command: Command) -> Result<()> {
        let name = env!("CARGO_PKG_NAME");
        let filter = if env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            EnvFilter::from_default_env()
        } else {
            match self.opts.verbosity {
                0 => format!("{name}=info,gsdk=info").into(),
                1 => format!("{name}=debug,gsdk=debug,gclient=debug").into(),
                2 => "debug".into(),
                _ => "trace".into(),
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .without_time()
            .try_init()
            .map_err(|err| anyhow!("{err}"))?;

        command.exec(&self).await
    }

    /// Returns a Gear node API wrapper.
    ///
    /// Every call opens a new connection.
    pub async fn api(&self) -> Result<Api> {
        let endpoint = self.opts.endpoint.as_str();
        tracing::debug!("Connecting to {endpoint}");

        Ok(Api::builder()
            .timeout(self.opts.timeout)
            .build(endpoint)
            .await?)
    }

    /// Returns a Gear node API signing with `account`.
    pub async fn signed_api(&self, account: &Account) -> Result<GearApi> {
        let api = self.api().await?;
        tracing::info!("Signing as {} ({})", account.name(), account.address());

        Ok(GearApi::from((api, account.pair().clone())))
    }
}
