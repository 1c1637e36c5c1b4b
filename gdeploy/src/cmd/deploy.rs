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

//! command `deploy`
use crate::{
    app::App,
    artifact::Artifact,
    cmd::info::NodeInfo,
    keyring::Account,
    program::{DEFAULT_GAS_LIMIT, DEFAULT_INIT_VALUE, Deployment, ProgramDescriptor},
    result::{Error, Result},
    utils::Hex,
};
use clap::{Args, Parser};
use std::{fmt, path::PathBuf};

/// Secret material of the signing account.
///
/// When several are given, the mnemonic wins over the seed and the seed
/// wins over the SURI.
#[derive(Clone, Default, Args)]
pub struct Secret {
    /// BIP-39 mnemonic phrase.
    #[arg(short, long, env = "GDEPLOY_MNEMONIC", hide_env_values = true)]
    pub mnemonic: Option<String>,
    /// 32-byte seed, as hex string.
    #[arg(long, env = "GDEPLOY_SEED", hide_env_values = true)]
    pub seed: Option<String>,
    /// Substrate URI, e.g. `//Alice` for development nodes.
    #[arg(long, env = "GDEPLOY_SURI", hide_env_values = true)]
    pub suri: Option<String>,
}

impl Secret {
    /// Derives the signing account named `name`.
    pub fn account(&self, name: &str) -> Result<Account> {
        match (&self.mnemonic, &self.seed, &self.suri) {
            (Some(mnemonic), _, _) => Account::from_mnemonic(mnemonic, name),
            (_, Some(seed), _) => Account::from_seed(seed, name),
            (_, _, Some(suri)) => Account::from_suri(suri, name),
            _ => Err(Error::MissingSecret),
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |secret: &Option<String>| secret.as_ref().map(|_| "<hidden>");

        f.debug_struct("Secret")
            .field("mnemonic", &redact(&self.mnemonic))
            .field("seed", &redact(&self.seed))
            .field("suri", &redact(&self.suri))
            .finish()
    }
}

/// Deploy a program to the node.
#[derive(Clone, Debug, Parser)]
pub struct Deploy {
    /// Program code <*.wasm>
    pub code: PathBuf,
    #[command(flatten)]
    pub secret: Secret,
    /// Name of the signing account.
    #[arg(short, long, default_value = "gdeploy")]
    pub name: String,
    /// Encoded parameters of the wasm module `init` function.
    #[arg(short, long, default_value = "0x")]
    pub payload: String,
    /// Randomness term (a seed) to allow programs with identical code to be created independently.
    ///
    /// Derived from the current time if not set.
    #[arg(short, long)]
    pub salt: Option<String>,
    /// Maximum amount of gas the program can spend before it is halted.
    #[arg(short, long, default_value_t = DEFAULT_GAS_LIMIT)]
    pub gas_limit: u64,
    /// Estimate the gas limit with the node instead of using `--gas-limit`.
    #[arg(long)]
    pub estimate_gas: bool,
    /// Balance to be transferred to the program once it's been created.
    #[arg(long, default_value_t = DEFAULT_INIT_VALUE)]
    pub value: u128,
}

impl Deploy {
    /// Execute command deploy
    ///
    /// Failures after the arguments are validated are logged, not returned.
    pub async fn exec(&self, app: &App) -> Result<()> {
        let program = self.descriptor(Artifact::load(&self.code)?)?;
        let account = self.secret.account(&self.name)?;
        tracing::info!("Using account {} ({})", account.name(), account.address());

        match self.create_program(app, &account, program).await {
            Ok(deployment) => deployment.report(),
            Err(err) => tracing::error!("Failed to create program: {err}"),
        }

        Ok(())
    }

    /// Builds the deployment request from the arguments.
    pub fn descriptor(&self, artifact: Artifact) -> Result<ProgramDescriptor> {
        let mut program = ProgramDescriptor::new(artifact)
            .gas_limit(self.gas_limit)
            .value(self.value)
            .init_payload(self.payload.to_vec()?);

        if let Some(salt) = &self.salt {
            program = program.salt(salt.to_vec()?);
        }

        Ok(program)
    }

    async fn create_program(
        &self,
        app: &App,
        account: &Account,
        mut program: ProgramDescriptor,
    ) -> Result<Deployment> {
        let info = NodeInfo::query(&app.api().await?).await?;
        tracing::info!("{info}");

        let api = app.signed_api(account).await?;
        if self.estimate_gas {
            program.estimate_gas(&api).await?;
        }

        program.submit(&api).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const MODULE: &[u8] = b"\0asm\x01\0\0\0";

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        deploy: Deploy,
    }

    fn parse(args: &[&str]) -> Deploy {
        Wrapper::try_parse_from(std::iter::once("deploy").chain(args.iter().copied()))
            .unwrap()
            .deploy
    }

    #[test]
    fn defaults() {
        let deploy = parse(&["dex_factory.opt.wasm", "--suri", "//Alice"]);

        assert_eq!(deploy.name, "gdeploy");
        assert_eq!(deploy.gas_limit, 1_000_000);
        assert_eq!(deploy.value, 1_000);
        assert!(!deploy.estimate_gas);
        assert!(deploy.salt.is_none());
    }

    #[test]
    fn descriptor_from_arguments() {
        let deploy = parse(&[
            "dex_factory.opt.wasm",
            "--suri",
            "//Alice",
            "-p",
            "0x0102",
            "-s",
            "0xff",
            "-g",
            "250000000",
            "--value",
            "0",
        ]);
        let program = deploy
            .descriptor(Artifact::from_bytes(MODULE.to_vec()).unwrap())
            .unwrap();

        assert_eq!(program.init_payload, vec![1, 2]);
        assert_eq!(program.salt, vec![0xff]);
        assert_eq!(program.gas_limit, 250_000_000);
        assert_eq!(program.value, 0);
    }

    #[test]
    fn bad_payload_is_rejected() {
        let deploy = parse(&["a.wasm", "--suri", "//Alice", "-p", "0xgg"]);

        assert!(matches!(
            deploy.descriptor(Artifact::from_bytes(MODULE.to_vec()).unwrap()),
            Err(Error::Hex(_))
        ));
    }

    #[test]
    fn secret_priority() {
        let alice = Account::from_suri("//Alice", "alice").unwrap();
        let secret = Secret {
            suri: Some("//Alice".into()),
            ..Default::default()
        };
        assert_eq!(secret.account("alice").unwrap().public(), alice.public());

        let secret = Secret {
            seed: Some("0x".to_string() + &"00".repeat(32)),
            suri: Some("//Alice".into()),
            ..Default::default()
        };
        assert_ne!(secret.account("seed").unwrap().public(), alice.public());

        assert!(matches!(
            Secret::default().account("nobody"),
            Err(Error::MissingSecret)
        ));
    }

    #[test]
    fn debug_redacts_secret() {
        let deploy = parse(&["a.wasm", "--mnemonic", "glimpse code swing"]);
        let debug = format!("{deploy:?}");

        assert!(debug.contains("<hidden>"));
        assert!(!debug.contains("glimpse"));
    }

    #[test]
    fn value_defaults_to_init_value() {
        let deploy = parse(&["a.wasm"]);

        assert_eq!(deploy.value, DEFAULT_INIT_VALUE);
        assert_eq!(deploy.gas_limit, DEFAULT_GAS_LIMIT);
    }

    #[test]
    fn several_secrets_are_accepted() {
        let seed = "0x".to_string() + &"00".repeat(32);
        let deploy = parse(&["a.wasm", "--suri", "//Alice", "--seed", &seed]);

        let account = deploy.secret.account("deployer").unwrap();
        assert_eq!(
            account.public(),
            Account::from_seed(&seed, "seed").unwrap().public()
        );
    }
}
