/*!
# Role Registry for Stylus

A role-based access control registry for
[Arbitrum Stylus](https://docs.arbitrum.io/stylus/stylus-gentle-introduction).
It tracks which accounts hold which roles, lets only the holders of a role's
admin role grant, revoke, or re-assign that role, and keeps an enumerable
member list per role.

## Usage

Compose [`access::RoleRegistry`] into your contract and route the
[`access::IRoleRegistry`] interface to it:

```ignore
use role_registry_stylus::access::{
    registry, IRoleRegistry, RoleRegistry, DEFAULT_ADMIN_ROLE,
};
use stylus_sdk::prelude::*;

#[entrypoint]
#[storage]
struct MyContract {
    registry: RoleRegistry,
}

#[public]
#[implements(IRoleRegistry<Error = registry::Error>)]
impl MyContract {
    #[constructor]
    fn constructor(&mut self, initial_admin: Address) {
        self.registry.constructor(initial_admin);
    }
}
```

Every successful state change emits exactly one event (`RoleGranted`,
`RoleRevoked` or `RoleAdminChanged`); no-op calls and failed calls emit
nothing.
*/

#![allow(clippy::pub_underscore_fields, clippy::module_name_repetitions)]
#![cfg_attr(not(any(test, feature = "std")), no_std, no_main)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod access;
