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

//! Custom result

/// Errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    GClient(#[from] gclient::Error),
    #[error(transparent)]
    GSdk(#[from] gsdk::Error),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("An attempt to deploy a binary without the `.wasm` extension")]
    WrongBinaryExtension,
    #[error("Program binary is empty")]
    EmptyBinary,
    #[error("Program binary is not a Wasm module")]
    InvalidBinary,
    #[error("Incorrect seed length {0}, expected 32 bytes")]
    InvalidSeedLength(usize),
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),
    #[error("No secret was provided, use one of `--mnemonic`, `--seed` or `--suri`")]
    MissingSecret,
}

/// Custom result
pub type Result<T, E = Error> = std::result::Result<T, E>;
