//! ABI of the Eduble access-control surface

use alloy::sol;

sol! {
    /// Grants `role` to `account`, restricted to the role's admin
    function grantRole(bytes32 role, address account) external;
}
