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

//! Program binaries loaded from disk.

use crate::result::{Error, Result};
use blake2::{Blake2b, Digest, digest::typenum::U32};
use std::{fs, path::Path};

type Blake2b256 = Blake2b<U32>;

/// Magic bytes every Wasm module starts with.
const WASM_MAGIC: [u8; 4] = *b"\0asm";

/// Compiled program code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    code: Vec<u8>,
}

impl Artifact {
    /// Reads the optimized Wasm binary located at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .filter(|&extension| extension.eq("wasm"))
            .ok_or(Error::WrongBinaryExtension)?;

        let code = fs::read(path)?;
        tracing::debug!("Loaded {} bytes from {}", code.len(), path.display());

        Self::from_bytes(code)
    }

    /// Wraps in-memory code, checking the Wasm header.
    pub fn from_bytes(code: Vec<u8>) -> Result<Self> {
        if code.is_empty() {
            return Err(Error::EmptyBinary);
        }

        if !code.starts_with(&WASM_MAGIC) {
            return Err(Error::InvalidBinary);
        }

        Ok(Self { code })
    }

    /// Code id the chain assigns to this binary.
    pub fn code_id(&self) -> [u8; 32] {
        Blake2b256::digest(&self.code).into()
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }
}
