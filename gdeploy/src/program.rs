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

//! Program deployment requests.

use crate::{artifact::Artifact, result::Result, utils};
use gclient::{DispatchStatus, EventProcessor, GearApi};
use gsdk::ext::sp_core::H256;
use std::time::{SystemTime, UNIX_EPOCH};

/// Gas limit used when none is given or estimated.
pub const DEFAULT_GAS_LIMIT: u64 = 1_000_000;
/// Balance transferred to the program on creation by default.
pub const DEFAULT_INIT_VALUE: u128 = 1_000;

/// Salt derived from the current time, in microseconds.
pub fn salt_now() -> Vec<u8> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros()
        .to_le_bytes()
        .to_vec()
}

/// Request to create a program from code.
#[derive(Clone, Debug)]
pub struct ProgramDescriptor {
    /// Program code.
    pub code: Artifact,
    /// Maximum amount of gas the init message can spend.
    pub gas_limit: u64,
    /// Balance transferred to the program once it's been created.
    pub value: u128,
    /// Encoded parameters of the `init` function.
    pub init_payload: Vec<u8>,
    /// Randomness term allowing identical code to be deployed independently.
    pub salt: Vec<u8>,
}

impl ProgramDescriptor {
    pub fn new(code: Artifact) -> Self {
        Self {
            code,
            gas_limit: DEFAULT_GAS_LIMIT,
            value: DEFAULT_INIT_VALUE,
            init_payload: Vec::new(),
            salt: salt_now(),
        }
    }

    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn value(mut self, value: u128) -> Self {
        self.value = value;
        self
    }

    pub fn init_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.init_payload = payload.into();
        self
    }

    pub fn salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Replaces the gas limit with the minimum the node reports for
    /// initializing this program.
    ///
    /// Sends the `gear_calculateInitUploadGas` RPC.
    pub async fn estimate_gas(&mut self, api: &GearApi) -> Result<u64> {
        let info = api
            .calculate_upload_gas(
                None,
                self.code.code().to_vec(),
                self.init_payload.clone(),
                self.value,
                true,
            )
            .await?;

        tracing::debug!("Estimated gas: {info:?}");
        self.gas_limit = info.min_limit;
        Ok(self.gas_limit)
    }

    /// Submits `Gear::upload_program` signed by the account of `api` and
    /// waits until the init message is dispatched.
    pub async fn submit(self, api: &GearApi) -> Result<Deployment> {
        // Subscribe before submitting, the dispatch may land in the same block.
        let mut listener = api.subscribe().await?;
        let code_id = self.code.code_id();

        tracing::info!(
            "Uploading program: {} bytes, gas limit {}, value {}",
            self.code.code().len(),
            self.gas_limit,
            self.value
        );
        let (message_id, program_id, block_hash) = api
            .upload_program_bytes(
                self.code.code(),
                &self.salt,
                &self.init_payload,
                self.gas_limit,
                self.value,
            )
            .await?;

        let mut deployment = Deployment {
            program_id: program_id.into_bytes(),
            code_id,
            salt: self.salt,
            message_id: message_id.into_bytes(),
            block_hash,
            status: None,
        };
        deployment.log();

        deployment.status = Some(listener.message_processed(message_id).await?);

        Ok(deployment)
    }
}

/// Identifiers of a submitted program.
#[derive(Clone, Debug)]
pub struct Deployment {
    pub program_id: [u8; 32],
    pub code_id: [u8; 32],
    pub salt: Vec<u8>,
    /// Id of the init message.
    pub message_id: [u8; 32],
    /// Hash of the block including the extrinsic.
    pub block_hash: H256,
    /// Dispatch status of the init message.
    pub status: Option<DispatchStatus>,
}

impl Deployment {
    fn log(&self) {
        tracing::info!("Program id: {}", utils::to_hex(self.program_id));
        tracing::info!("Code id: {}", utils::to_hex(self.code_id));
        tracing::info!("Salt: {}", utils::to_hex(&self.salt));
        tracing::info!("Init message id: {}", utils::to_hex(self.message_id));
        tracing::info!("Extrinsic block hash: {:?}", self.block_hash);
    }

    /// Whether the init message was dispatched successfully.
    pub fn initialized(&self) -> bool {
        self.status.as_ref().is_some_and(DispatchStatus::succeed)
    }

    /// Logs the outcome of the init message.
    pub fn report(&self) {
        let program_id = utils::to_hex(self.program_id);

        if self.initialized() {
            tracing::info!("Program {program_id} initialized");
        } else {
            tracing::error!(
                "Program {program_id} was not initialized: {:?}",
                self.status
            );
        }
    }
}
