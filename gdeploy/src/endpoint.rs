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

//! Vara network endpoints.

use std::{fmt, str::FromStr};
use url::Url;

/// Vara main network RPC endpoint.
pub const VARA_ENDPOINT: &str = "wss://rpc.vara.network";
/// Vara test network RPC endpoint.
pub const VARA_TESTNET_ENDPOINT: &str = "wss://testnet.vara.network";
/// Local development node RPC endpoint.
pub const DEV_ENDPOINT: &str = "ws://127.0.0.1:9944";

/// Vara networks
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Endpoint {
    /// Vara main network
    Mainnet,
    /// Vara test network
    #[default]
    Testnet,
    /// Localhost endpoint
    Localhost,
    /// Customized vara network
    Custom(Url),
}

impl Endpoint {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mainnet => VARA_ENDPOINT,
            Self::Testnet => VARA_TESTNET_ENDPOINT,
            Self::Localhost => DEV_ENDPOINT,
            Self::Custom(url) => url.as_str(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors of parsing [`Endpoint`].
#[derive(Debug, thiserror::Error)]
pub enum ParseEndpointError {
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("unsupported scheme `{0}`, expected `ws` or `wss`")]
    Scheme(String),
}

impl FromStr for Endpoint {
    type Err = ParseEndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "mainnet" => Self::Mainnet,
            "testnet" => Self::Testnet,
            "localhost" => Self::Localhost,
            input => {
                let url = Url::parse(input)?;
                if !matches!(url.scheme(), "ws" | "wss") {
                    return Err(ParseEndpointError::Scheme(url.scheme().into()));
                }

                Self::Custom(url)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_networks() {
        assert_eq!("mainnet".parse::<Endpoint>().unwrap(), Endpoint::Mainnet);
        assert_eq!("testnet".parse::<Endpoint>().unwrap(), Endpoint::Testnet);
        assert_eq!(
            "localhost".parse::<Endpoint>().unwrap().as_str(),
            DEV_ENDPOINT
        );
        assert_eq!(Endpoint::default().as_str(), "wss://testnet.vara.network");
    }

    #[test]
    fn custom_url() {
        let endpoint: Endpoint = "ws://10.0.0.1:9944".parse().unwrap();
        assert_eq!(endpoint.as_str(), "ws://10.0.0.1:9944/");
    }

    #[test]
    fn rejects_non_websocket_urls() {
        assert!(matches!(
            "https://rpc.vara.network".parse::<Endpoint>(),
            Err(ParseEndpointError::Scheme(s)) if s == "https"
        ));
        assert!(matches!(
            "not a url".parse::<Endpoint>(),
            Err(ParseEndpointError::Url(_))
        ));
    }
}
