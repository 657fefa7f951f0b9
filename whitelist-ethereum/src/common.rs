// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::rpc::json_rpc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EthereumError {
    /// The node serves a chain other than the one this session requires.
    /// The caller must not retry on a mismatched network.
    #[error("the active chain id {found} does not match the required chain id {expected}")]
    ChainIdMismatch { expected: u64, found: u64 },

    /// RPC error
    #[error(transparent)]
    RpcError(#[from] json_rpc::RpcError<alloy::transports::TransportErrorKind>),
}
