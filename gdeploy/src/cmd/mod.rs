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

//! commands
use crate::{app::App, result::Result};
use clap::Subcommand;

pub mod deploy;
pub mod info;

pub use self::{deploy::Deploy, info::Info};

/// Commands of `gdeploy`.
#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    Info(Info),
    Deploy(Deploy),
}

impl Command {
    /// Execute the command.
    pub async fn exec(&self, app: &App) -> Result<()> {
        match self {
            Command::Info(info) => info.exec(app).await,
            Command::Deploy(deploy) => deploy.exec(app).await,
        }
    }
}
