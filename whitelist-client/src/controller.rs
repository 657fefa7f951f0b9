// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::Error;

/// The wallet and registry surface the controller drives.
///
/// Implemented by [`crate::session::DappSession`] against the real node,
/// and by an in-memory double in the unit tests.
#[async_trait]
pub trait DappContext: Send + Sync {
    /// Authorizes the wallet session, verifying the active network, and
    /// returns the active address.
    async fn connect(&self) -> Result<Address, Error>;

    /// Whether `address` is present in the registry.
    async fn is_whitelisted(&self, address: Address) -> Result<bool, Error>;

    /// The number of addresses in the registry.
    async fn whitelisted_count(&self) -> Result<u64, Error>;

    /// Submits the join transaction and waits for it to confirm.
    async fn join_whitelist(&self) -> Result<B256, Error>;
}

/// The state of the page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DappState {
    /// No wallet session is established.
    Disconnected,
    /// The connect flow is running.
    Connecting,
    /// Connected; the active address has not joined the registry.
    NotJoined,
    /// Connected; the join transaction is in flight.
    Joining,
    /// Connected; the active address is a member of the registry.
    Joined,
}

/// Mediates between the wallet session, the remote registry and the render
/// function.
pub struct DappController<C> {
    context: C,
    state: DappState,
    address: Option<Address>,
    whitelisted_count: u64,
}

impl<C> DappController<C>
where
    C: DappContext,
{
    /// A fresh controller; the page starts disconnected.
    pub fn new(context: C) -> Self {
        Self {
            context,
            state: DappState::Disconnected,
            address: None,
            whitelisted_count: 0,
        }
    }

    pub fn state(&self) -> DappState {
        self.state
    }

    /// The active wallet address, once connected.
    pub fn address(&self) -> Option<Address> {
        self.address
    }

    /// The cached member count.
    pub fn whitelisted_count(&self) -> u64 {
        self.whitelisted_count
    }

    /// Establishes the wallet session, then reads the membership state of
    /// the active address and the member counter. Any failure returns the
    /// page to `Disconnected`.
    pub async fn connect_wallet(&mut self) -> Result<(), Error> {
        if self.state != DappState::Disconnected {
            return Err(Error::AlreadyConnected);
        }
        self.state = DappState::Connecting;
        match self.run_connect().await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.state = DappState::Disconnected;
                self.address = None;
                Err(error)
            }
        }
    }

    async fn run_connect(&mut self) -> Result<(), Error> {
        let address = self.context.connect().await?;
        let joined = self.context.is_whitelisted(address).await?;
        let count = self.context.whitelisted_count().await?;
        info!(%address, joined, count, "wallet connected");
        self.address = Some(address);
        self.whitelisted_count = count;
        self.state = if joined {
            DappState::Joined
        } else {
            DappState::NotJoined
        };
        Ok(())
    }

    /// Submits the join transaction and waits for it to confirm, then
    /// re-reads the member counter.
    ///
    /// The in-flight state is reset on every exit path. A confirmed
    /// transaction is durable, so a counter read failing afterwards leaves
    /// the page joined and the cached counter stale.
    pub async fn join_whitelist(&mut self) -> Result<(), Error> {
        match self.state {
            DappState::NotJoined => {}
            DappState::Joining => return Err(Error::JoinPending),
            DappState::Joined => return Err(Error::AlreadyJoined),
            DappState::Disconnected | DappState::Connecting => return Err(Error::NotConnected),
        }
        self.state = DappState::Joining;
        let transaction = match self.context.join_whitelist().await {
            Ok(transaction) => transaction,
            Err(error) => {
                self.state = DappState::NotJoined;
                return Err(error);
            }
        };
        self.state = DappState::Joined;
        info!(%transaction, "joined the whitelist");
        match self.context.whitelisted_count().await {
            Ok(count) => {
                self.whitelisted_count = count;
                Ok(())
            }
            Err(error) => {
                warn!("failed to refresh the member count: {error}");
                Err(error)
            }
        }
    }

    /// Re-reads the member counter.
    pub async fn refresh_count(&mut self) -> Result<u64, Error> {
        match self.state {
            DappState::Disconnected | DappState::Connecting => return Err(Error::NotConnected),
            DappState::NotJoined | DappState::Joining | DappState::Joined => {}
        }
        let count = self.context.whitelisted_count().await?;
        self.whitelisted_count = count;
        Ok(count)
    }

    /// Renders the page for the current state.
    pub fn render(&self) -> Page {
        Page::new(self.state, self.whitelisted_count)
    }
}

/// What the page shows: the header lines, the member counter and the
/// primary action.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    pub title: &'static str,
    pub description: &'static str,
    pub whitelisted_count: u64,
    pub action: PageAction,
    pub footer: &'static str,
}

/// The primary control of the page: a button, or the text shown once the
/// active address has joined.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PageAction {
    Button(&'static str),
    Notice(&'static str),
}

impl Page {
    /// The page as shown while the join transaction is in flight.
    pub fn loading(whitelisted_count: u64) -> Self {
        Self::new(DappState::Joining, whitelisted_count)
    }

    pub(crate) fn new(state: DappState, whitelisted_count: u64) -> Self {
        let action = match state {
            DappState::Disconnected | DappState::Connecting => {
                PageAction::Button("Connect your wallet")
            }
            DappState::NotJoined => PageAction::Button("Join the Whitelist"),
            DappState::Joining => PageAction::Button("Loading..."),
            DappState::Joined => PageAction::Notice("Thanks for joining the Whitelist!"),
        };
        Self {
            title: "Welcome to Crypto Devs!",
            description: "Its an NFT collection for developers in Crypto.",
            whitelisted_count,
            action,
            footer: "Made with ♥ by Crypto Devs",
        }
    }
}
