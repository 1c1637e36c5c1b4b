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

//! Deploy Gear programs to Vara networks.
//!
//! `gdeploy` reads an optimized Wasm binary, derives a signing account from
//! a seed, mnemonic or SURI and submits `Gear::upload_program` to the node.
//!
//! ```shell
//! gdeploy info
//! gdeploy deploy ./target/wasm32-gear/release/dex_factory.opt.wasm --mnemonic "<phrase>"
//! ```

pub mod app;
pub mod artifact;
pub mod cli;
pub mod cmd;
pub mod endpoint;
pub mod keyring;
pub mod program;
pub mod result;
pub mod utils;

pub use self::{
    app::{App, Opts},
    artifact::Artifact,
    cli::Cli,
    cmd::Command,
    endpoint::Endpoint,
    keyring::Account,
    program::{Deployment, ProgramDescriptor},
    result::{Error, Result},
};
