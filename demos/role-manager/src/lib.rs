#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::vec::Vec;

use alloy_primitives::{Address, B256, U256};
use role_registry_stylus::access::registry::{
    self, EnumerableError, IRoleRegistry, IRoleRegistryEnumerable,
    RoleRegistry,
};
use stylus_sdk::prelude::*;

#[entrypoint]
#[storage]
struct RoleManager {
    registry: RoleRegistry,
}

#[public]
#[implements(IRoleRegistry<Error = registry::Error>, IRoleRegistryEnumerable<Error = EnumerableError>)]
impl RoleManager {
    #[constructor]
    fn constructor(&mut self, initial_admin: Address) {
        self.registry.constructor(initial_admin);
    }
}

#[public]
impl IRoleRegistry for RoleManager {
    type Error = registry::Error;

    fn has_role(&self, role: B256, account: Address) -> bool {
        self.registry.has_role(role, account)
    }

    fn only_role(&self, role: B256) -> Result<(), Self::Error> {
        self.registry.only_role(role)
    }

    fn get_role_admin(&self, role: B256) -> B256 {
        self.registry.get_role_admin(role)
    }

    fn get_role_list(&self, role: B256) -> Vec<Address> {
        self.registry.get_role_list(role)
    }

    fn grant_role(
        &mut self,
        role: B256,
        account: Address,
    ) -> Result<(), Self::Error> {
        self.registry.grant_role(role, account)
    }

    fn revoke_role(
        &mut self,
        role: B256,
        account: Address,
    ) -> Result<(), Self::Error> {
        self.registry.revoke_role(role, account)
    }

    fn renounce_role(
        &mut self,
        role: B256,
        confirmation: Address,
    ) -> Result<(), Self::Error> {
        self.registry.renounce_role(role, confirmation)
    }

    fn set_role_admin(
        &mut self,
        role: B256,
        new_admin_role: B256,
    ) -> Result<(), Self::Error> {
        self.registry.set_role_admin(role, new_admin_role)
    }
}

#[public]
impl IRoleRegistryEnumerable for RoleManager {
    type Error = EnumerableError;

    fn get_role_member(
        &self,
        role: B256,
        index: U256,
    ) -> Result<Address, Self::Error> {
        self.registry.get_role_member(role, index)
    }

    fn get_role_member_count(&self, role: B256) -> U256 {
        self.registry.get_role_member_count(role)
    }
}
