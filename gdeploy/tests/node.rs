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

//! Tests against a live node.
//!
//! Run with `cargo test -- --ignored`, the endpoint is read from
//! `GDEPLOY_NODE_ENDPOINT`. Metadata is queried from the Vara testnet by
//! default, deployments go to a local development node.

use gclient::DispatchStatus;
use gdeploy::{
    Account, App, Artifact, Endpoint, Opts, ProgramDescriptor, Result, cmd::info::NodeInfo,
};
use std::env;

/// Program with an empty `init`.
const PROGRAM: &str = r#"
(module
    (import "env" "memory" (memory 1))
    (export "init" (func $init))
    (func $init)
)
"#;

fn app(default: Endpoint) -> App {
    let endpoint = env::var("GDEPLOY_NODE_ENDPOINT")
        .ok()
        .map(|endpoint| endpoint.parse().expect("invalid GDEPLOY_NODE_ENDPOINT"))
        .unwrap_or(default);

    App::new(Opts {
        timeout: 60_000,
        verbosity: 0,
        endpoint,
    })
}

#[tokio::test]
#[ignore = "requires a reachable node"]
async fn node_info_is_reported() -> Result<()> {
    let api = app(Endpoint::Testnet).api().await?;
    let info = NodeInfo::query(&api).await?;

    assert!(!info.chain.is_empty());
    assert!(!info.node_name.is_empty());
    assert!(!info.node_version.is_empty());
    assert!(info.to_string().starts_with("You are connected to chain"));

    Ok(())
}

#[tokio::test]
#[ignore = "requires a development node"]
async fn program_is_deployed_and_initialized() -> Result<()> {
    let alice = Account::from_suri("//Alice", "Alice")?;
    let api = app(Endpoint::Localhost).signed_api(&alice).await?;

    let artifact = Artifact::from_bytes(wat::parse_str(PROGRAM).expect("invalid program"))?;
    let code_id = artifact.code_id();

    let mut program = ProgramDescriptor::new(artifact).value(0);
    let gas_limit = program.estimate_gas(&api).await?;
    assert!(gas_limit > 0);

    let deployment = program.submit(&api).await?;

    assert_eq!(deployment.code_id, code_id);
    assert_ne!(deployment.program_id, [0; 32]);
    assert_ne!(deployment.program_id, code_id);
    assert_eq!(deployment.status, Some(DispatchStatus::Success));
    assert!(deployment.initialized());

    Ok(())
}
