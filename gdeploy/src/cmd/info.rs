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

//! command `info`
use crate::{app::App, result::Result};
use anyhow::anyhow;
use async_trait::async_trait;
use clap::Parser;
use colored::Colorize;
use gsdk::Api;
use std::fmt;
use subxt::backend::rpc::RpcParams;

/// Print the chain name, node name and node version.
#[derive(Clone, Debug, Parser)]
pub struct Info {}

impl Info {
    /// Execute command info
    pub async fn exec(&self, app: &App) -> Result<()> {
        let info = NodeInfo::query(&app.api().await?).await?;
        println!("{}", info.to_string().bold());

        Ok(())
    }
}

/// Parameterless `system_*` RPCs answering with a string.
#[async_trait(?Send)]
pub trait SystemRpc {
    async fn system(&self, method: &'static str) -> Result<String>;
}

#[async_trait(?Send)]
impl SystemRpc for Api {
    async fn system(&self, method: &'static str) -> Result<String> {
        self.rpc()
            .request(method, RpcParams::new())
            .await
            .map_err(|err| anyhow!("{method} failed: {err}").into())
    }
}

/// Metadata reported by the node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    pub chain: String,
    pub node_name: String,
    pub node_version: String,
}

impl NodeInfo {
    /// Sends `system_chain`, `system_name` and `system_version` at once.
    pub async fn query(rpc: &impl SystemRpc) -> Result<Self> {
        let (chain, node_name, node_version) = tokio::try_join!(
            rpc.system("system_chain"),
            rpc.system("system_name"),
            rpc.system("system_version")
        )?;

        Ok(Self {
            chain,
            node_name,
            node_version,
        })
    }
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You are connected to chain {} using {} v{}",
            self.chain, self.node_name, self.node_version
        )
    }
}
