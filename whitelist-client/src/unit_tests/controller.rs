// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Mutex,
};

use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use whitelist_ethereum::common::EthereumError;

use crate::{
    controller::{DappContext, DappController, DappState, Page, PageAction},
    Error,
};

const TEST_ADDRESS: Address = Address::repeat_byte(0x11);

/// Which remote operations a test run issued, in order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Call {
    Connect,
    IsWhitelisted,
    WhitelistedCount,
    Join,
}

/// An in-memory wallet-and-registry double with scriptable failures.
#[derive(Default)]
struct TestContext {
    joined: AtomicBool,
    count: AtomicU64,
    wrong_chain: bool,
    fail_join: bool,
    fail_next_count_read: AtomicBool,
    calls: Mutex<Vec<Call>>,
}

impl TestContext {
    fn with_count(count: u64) -> Self {
        Self {
            count: AtomicU64::new(count),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DappContext for &TestContext {
    async fn connect(&self) -> Result<Address, Error> {
        self.record(Call::Connect);
        if self.wrong_chain {
            return Err(EthereumError::ChainIdMismatch {
                expected: 5,
                found: 1,
            }
            .into());
        }
        Ok(TEST_ADDRESS)
    }

    async fn is_whitelisted(&self, address: Address) -> Result<bool, Error> {
        assert_eq!(address, TEST_ADDRESS);
        self.record(Call::IsWhitelisted);
        Ok(self.joined.load(Ordering::SeqCst))
    }

    async fn whitelisted_count(&self) -> Result<u64, Error> {
        self.record(Call::WhitelistedCount);
        if self.fail_next_count_read.swap(false, Ordering::SeqCst) {
            return Err(Error::IoError(std::io::Error::other(
                "counter read failed",
            )));
        }
        Ok(self.count.load(Ordering::SeqCst))
    }

    async fn join_whitelist(&self) -> Result<B256, Error> {
        self.record(Call::Join);
        if self.fail_join {
            return Err(Error::TransactionReverted { hash: B256::ZERO });
        }
        self.joined.store(true, Ordering::SeqCst);
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(B256::ZERO)
    }
}

/// A fresh page starts disconnected and renders the connect button.
#[tokio::test]
async fn test_initial_page_shows_connect() {
    let context = TestContext::default();
    let controller = DappController::new(&context);
    assert_eq!(controller.state(), DappState::Disconnected);
    assert_eq!(controller.address(), None);
    let page = controller.render();
    assert_eq!(page.action, PageAction::Button("Connect your wallet"));
    assert_eq!(page.whitelisted_count, 0);
    assert!(context.calls().is_empty());
}

/// Connecting on the wrong network aborts with an alertable error, before
/// any contract call is attempted.
#[tokio::test]
async fn test_wrong_network_aborts_connect() {
    let context = TestContext {
        wrong_chain: true,
        ..TestContext::default()
    };
    let mut controller = DappController::new(&context);
    let result = controller.connect_wallet().await;
    assert!(matches!(
        result,
        Err(Error::Ethereum(EthereumError::ChainIdMismatch {
            expected: 5,
            found: 1,
        })),
    ));
    assert_eq!(controller.state(), DappState::Disconnected);
    assert_eq!(context.calls(), vec![Call::Connect]);
    assert_eq!(
        controller.render().action,
        PageAction::Button("Connect your wallet"),
    );
}

/// A successful connect issues exactly one membership read and one counter
/// read.
#[tokio::test]
async fn test_connect_reads_membership_and_count_once() {
    let context = TestContext::with_count(3);
    let mut controller = DappController::new(&context);
    controller.connect_wallet().await.unwrap();
    assert_eq!(controller.state(), DappState::NotJoined);
    assert_eq!(controller.address(), Some(TEST_ADDRESS));
    assert_eq!(controller.whitelisted_count(), 3);
    assert_eq!(
        context.calls(),
        vec![Call::Connect, Call::IsWhitelisted, Call::WhitelistedCount],
    );
}

/// An address already present in the registry connects straight into the
/// joined page.
#[tokio::test]
async fn test_connect_already_joined() {
    let context = TestContext::with_count(4);
    context.joined.store(true, Ordering::SeqCst);
    let mut controller = DappController::new(&context);
    controller.connect_wallet().await.unwrap();
    assert_eq!(controller.state(), DappState::Joined);
    assert_eq!(
        controller.render().action,
        PageAction::Notice("Thanks for joining the Whitelist!"),
    );
}

/// Connecting twice is rejected without touching the node again.
#[tokio::test]
async fn test_connect_twice_is_rejected() {
    let context = TestContext::with_count(0);
    let mut controller = DappController::new(&context);
    controller.connect_wallet().await.unwrap();
    assert!(matches!(
        controller.connect_wallet().await,
        Err(Error::AlreadyConnected),
    ));
    assert_eq!(context.calls().len(), 3);
}

/// The full join flow: submit, confirm, re-read the counter once, render
/// the thank-you page.
#[tokio::test]
async fn test_join_whitelist_success() {
    let context = TestContext::with_count(3);
    let mut controller = DappController::new(&context);
    controller.connect_wallet().await.unwrap();
    controller.join_whitelist().await.unwrap();
    assert_eq!(controller.state(), DappState::Joined);
    assert_eq!(controller.whitelisted_count(), 4);
    assert_eq!(
        controller.render().action,
        PageAction::Notice("Thanks for joining the Whitelist!"),
    );
    assert_eq!(
        context.calls(),
        vec![
            Call::Connect,
            Call::IsWhitelisted,
            Call::WhitelistedCount,
            Call::Join,
            Call::WhitelistedCount,
        ],
    );
}

/// The page shows the loading button for the whole in-flight interval.
#[tokio::test]
async fn test_page_shows_loading_while_joining() {
    let page = Page::new(DappState::Joining, 2);
    assert_eq!(page.action, PageAction::Button("Loading..."));
    assert_eq!(page.whitelisted_count, 2);
}

/// A failed join resets the in-flight state and surfaces the error; the
/// counter is not re-read.
#[tokio::test]
async fn test_join_failure_resets_loading() {
    let context = TestContext {
        fail_join: true,
        ..TestContext::with_count(2)
    };
    let mut controller = DappController::new(&context);
    controller.connect_wallet().await.unwrap();
    let result = controller.join_whitelist().await;
    assert!(matches!(
        result,
        Err(Error::TransactionReverted { hash: B256::ZERO }),
    ));
    assert_eq!(controller.state(), DappState::NotJoined);
    assert_eq!(controller.whitelisted_count(), 2);
    assert_eq!(
        controller.render().action,
        PageAction::Button("Join the Whitelist"),
    );
    assert_eq!(*context.calls().last().unwrap(), Call::Join);
}

/// Join requests are rejected unless the page is connected and not joined.
#[tokio::test]
async fn test_join_guards() {
    let context = TestContext::with_count(0);
    let mut controller = DappController::new(&context);
    assert!(matches!(
        controller.join_whitelist().await,
        Err(Error::NotConnected),
    ));
    controller.connect_wallet().await.unwrap();
    controller.join_whitelist().await.unwrap();
    assert!(matches!(
        controller.join_whitelist().await,
        Err(Error::AlreadyJoined),
    ));
    let joins = context
        .calls()
        .into_iter()
        .filter(|call| *call == Call::Join)
        .count();
    assert_eq!(joins, 1);
}

/// A counter read failing after the transaction confirmed leaves the page
/// joined; the stale counter can be refreshed explicitly.
#[tokio::test]
async fn test_count_read_failure_after_confirmed_join() {
    let context = TestContext::with_count(7);
    let mut controller = DappController::new(&context);
    controller.connect_wallet().await.unwrap();
    context.fail_next_count_read.store(true, Ordering::SeqCst);
    let result = controller.join_whitelist().await;
    assert!(result.is_err());
    assert_eq!(controller.state(), DappState::Joined);
    assert_eq!(controller.whitelisted_count(), 7);
    assert_eq!(controller.refresh_count().await.unwrap(), 8);
    assert_eq!(controller.whitelisted_count(), 8);
}

/// The counter cannot be refreshed before a wallet is connected.
#[tokio::test]
async fn test_refresh_requires_connection() {
    let context = TestContext::with_count(1);
    let mut controller = DappController::new(&context);
    assert!(matches!(
        controller.refresh_count().await,
        Err(Error::NotConnected),
    ));
    assert!(context.calls().is_empty());
}
