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

//! Signing accounts derived from secret material.

use crate::{
    result::{Error, Result},
    utils::Hex,
};
use gsdk::ext::sp_core::{
    Pair as PairT,
    crypto::{Ss58AddressFormat, Ss58Codec},
    sr25519::{Pair, Public},
};
use std::fmt;

/// SS58 prefix of Vara networks.
pub const VARA_SS58_PREFIX: u16 = 137;

/// Named sr25519 signing identity.
#[derive(Clone)]
pub struct Account {
    name: String,
    pair: Pair,
}

impl Account {
    /// Derives the account from a 32-byte hex seed.
    pub fn from_seed(seed: impl AsRef<str>, name: impl Into<String>) -> Result<Self> {
        let seed = seed.as_ref().to_vec()?;
        if seed.len() != 32 {
            return Err(Error::InvalidSeedLength(seed.len()));
        }

        let pair =
            Pair::from_seed_slice(&seed).map_err(|e| Error::InvalidSecret(format!("{e:?}")))?;
        Ok(Self::new(pair, name))
    }

    /// Derives the account from a BIP-39 mnemonic phrase.
    pub fn from_mnemonic(mnemonic: impl AsRef<str>, name: impl Into<String>) -> Result<Self> {
        let (pair, _) = Pair::from_phrase(mnemonic.as_ref().trim(), None)
            .map_err(|e| Error::InvalidSecret(format!("{e:?}")))?;
        Ok(Self::new(pair, name))
    }

    /// Derives the account from a Substrate URI, e.g. `//Alice` or
    /// `<phrase>//hard/soft:password`.
    pub fn from_suri(suri: impl AsRef<str>, name: impl Into<String>) -> Result<Self> {
        let mut suri = suri.as_ref().splitn(2, ':');
        let uri = suri.next().unwrap_or_default();

        let pair = Pair::from_string(uri, suri.next())
            .map_err(|e| Error::InvalidSecret(format!("{e:?}")))?;
        Ok(Self::new(pair, name))
    }

    fn new(pair: Pair, name: impl Into<String>) -> Self {
        let account = Self {
            name: name.into(),
            pair,
        };
        tracing::debug!("Derived account {account:?}");

        account
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public(&self) -> Public {
        self.pair.public()
    }

    pub fn pair(&self) -> &Pair {
        &self.pair
    }

    /// SS58 address with the Vara prefix.
    pub fn address(&self) -> String {
        self.public()
            .to_ss58check_with_version(Ss58AddressFormat::custom(VARA_SS58_PREFIX))
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("name", &self.name)
            .field("address", &self.address())
            .finish()
    }
}
