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

//! Hex helpers for command arguments.

use crate::result::Result;

/// Converts hex strings with an optional `0x` prefix.
pub trait Hex {
    /// Decodes the string into bytes.
    fn to_vec(&self) -> Result<Vec<u8>>;
}

impl<T: AsRef<str>> Hex for T {
    fn to_vec(&self) -> Result<Vec<u8>> {
        let s = self.as_ref();
        hex::decode(s.strip_prefix("0x").unwrap_or(s)).map_err(Into::into)
    }
}

/// Encodes bytes as a `0x` prefixed hex string.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    ["0x", &hex::encode(bytes)].concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Error;

    #[test]
    fn prefix_is_optional() {
        assert_eq!("0x0102".to_vec().unwrap(), vec![1, 2]);
        assert_eq!("0102".to_vec().unwrap(), vec![1, 2]);
        assert!("0x".to_vec().unwrap().is_empty());
    }

    #[test]
    fn odd_length_is_rejected() {
        assert!(matches!("0x123".to_vec(), Err(Error::Hex(_))));
    }

    #[test]
    fn prefix_is_stripped_once() {
        assert!(matches!("0x0x01".to_vec(), Err(Error::Hex(_))));
    }

    #[test]
    fn encodes_with_prefix() {
        assert_eq!(to_hex([0xde, 0xad]), "0xdead");
        assert_eq!(to_hex([0u8; 0]), "0x");
    }
}
