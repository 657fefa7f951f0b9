// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module provides functionalities for accessing an Ethereum blockchain node
//! on behalf of the whitelist dapp.

pub mod client;
pub mod common;
pub mod connector;
pub mod provider;

/// Helper types for tests.
#[cfg(feature = "anvil")]
pub mod test_utils;
