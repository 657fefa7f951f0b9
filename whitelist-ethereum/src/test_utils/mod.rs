// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{
    node_bindings::{Anvil, AnvilInstance},
    primitives::Address,
};
use alloy_signer_local::PrivateKeySigner;
use anyhow::Result;
use url::Url;

use crate::provider::{EthereumClient, HttpProvider};

/// Binds an ephemeral port and releases it for the node to claim.
pub async fn get_free_port() -> Result<u16> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    Ok(listener.local_addr()?.port())
}

/// A local Anvil node together with a client pointed at it.
pub struct AnvilTest {
    pub anvil_instance: AnvilInstance,
    pub endpoint: Url,
    pub client: EthereumClient<HttpProvider>,
}

pub async fn get_anvil() -> Result<AnvilTest> {
    let port = get_free_port().await?;
    let anvil_instance = Anvil::new().port(port).try_spawn()?;
    let endpoint: Url = anvil_instance.endpoint().parse()?;
    let client = EthereumClient::new(endpoint.clone());
    Ok(AnvilTest {
        anvil_instance,
        endpoint,
        client,
    })
}

impl AnvilTest {
    /// The signing key and address of one of the node's funded dev accounts.
    pub fn get_wallet(&self, index: usize) -> (PrivateKeySigner, Address) {
        let signer: PrivateKeySigner = self.anvil_instance.keys()[index].clone().into();
        let address = self.anvil_instance.addresses()[index];
        (signer, address)
    }

    pub fn get_address(&self, index: usize) -> Address {
        self.anvil_instance.addresses()[index]
    }

    pub fn chain_id(&self) -> u64 {
        self.anvil_instance.chain_id()
    }
}
