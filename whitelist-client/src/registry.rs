// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::sol;

sol! {
    /// The deployed whitelist registry. `numAddressedWhitelisted` is the
    /// spelling the contract exposes.
    #[sol(rpc)]
    contract Whitelist {
        function addAddressToWhitelist() external;
        function numAddressedWhitelisted() external view returns (uint256);
        function whitelistedAddresses(address account) external view returns (bool);
    }
}
