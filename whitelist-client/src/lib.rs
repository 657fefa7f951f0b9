// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module provides a convenient library for writing the whitelist dapp
//! front end.

pub mod client_options;
pub mod config;
pub mod controller;
mod error;
pub mod registry;
pub mod session;

#[cfg(test)]
mod unit_tests;

pub use error::Error;
