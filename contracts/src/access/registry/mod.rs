//! Contract module that lets children implement role-based access control
//! with enumerable role members.
//!
//! Roles are referred to by their `bytes32` identifier. The best way to
//! produce unique identifiers is hashing a human-readable name at compile
//! time with [`crate::access::roles::role_id`]:
//!
//! ```rust
//! use role_registry_stylus::access::roles::role_id;
//!
//! pub const MINTER_ROLE: [u8; 32] = role_id(b"MINTER_ROLE");
//! ```
//!
//! Roles can be granted and revoked dynamically via
//! [`IRoleRegistry::grant_role`] and [`IRoleRegistry::revoke_role`]. Each role
//! has an associated admin role, and only accounts that hold a `role`'s admin
//! role can grant it, revoke it, or move it under another admin role with
//! [`IRoleRegistry::set_role_admin`].
//!
//! By default, the admin role for all roles is [`DEFAULT_ADMIN_ROLE`], which
//! is also its own admin. The account passed to
//! [`RoleRegistry::constructor`] is its only initial member.
//!
//! Role records are never declared. A role nobody has touched has no
//! members and [`DEFAULT_ADMIN_ROLE`] as its admin.
//!
//! Members of every role can be enumerated with
//! [`IRoleRegistry::get_role_list`] or, one at a time, through
//! [`IRoleRegistryEnumerable`]. The order of members is the order they were
//! granted in until the first revocation: a revoked member's slot is taken
//! by the last member.
//!
//! WARNING: Admin relationships may form cycles (role `A` administers `B`
//! while `B` administers `A`). Nothing here detects or prevents that.
use alloc::{vec, vec::Vec};

use alloy_primitives::{Address, B256, U256};
pub use sol::*;
use stylus_sdk::{
    call::MethodError,
    evm, msg,
    prelude::*,
    storage::{StorageB256, StorageMap},
};

use crate::access::roles::DEFAULT_ADMIN_ROLE;

pub mod members;

use members::RoleMembers;

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `new_admin_role` is set as `role`'s admin role,
        /// replacing `previous_admin_role`.
        ///
        /// `DEFAULT_ADMIN_ROLE` is the starting admin for all roles, despite
        /// `RoleAdminChanged` not being emitted signaling this.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event RoleAdminChanged(bytes32 indexed role, bytes32 indexed previous_admin_role, bytes32 indexed new_admin_role);
        /// Emitted when `account` is granted `role`.
        ///
        /// `sender` is the account that originated the contract call. It
        /// bears the admin role of the granted role, unless the grant came
        /// from the constructor.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event RoleGranted(bytes32 indexed role, address indexed account, address indexed sender);
        /// Emitted when `account` is revoked `role`.
        ///
        /// `sender` is the account that originated the contract call:
        ///   - if using `revoke_role`, it is the admin role bearer.
        ///   - if using `renounce_role`, it is the role bearer (i.e. `account`).
        #[derive(Debug)]
        #[allow(missing_docs)]
        event RoleRevoked(bytes32 indexed role, address indexed account, address indexed sender);
    }

    sol! {
        /// The `account` is missing a role.
        ///
        /// * `account` - Account that was found to not be authorized.
        /// * `needed_role` - The missing role.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AccessControlUnauthorizedAccount(address account, bytes32 needed_role);
        /// The caller tried to renounce a role on behalf of another account.
        ///
        /// NOTE: Don't confuse with [`AccessControlUnauthorizedAccount`].
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AccessControlBadConfirmation();
        /// The caller attempted to query a `role` member at an invalid
        /// `index`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error AccessControlEnumerableOutOfBounds(bytes32 role, uint256 index);
    }
}

/// An error that occurred while authorizing a [`RoleRegistry`] mutation.
///
/// Both variants mean the caller is not allowed to perform the operation. A
/// call that fails with either leaves the state and the event log untouched.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller account is missing a role.
    UnauthorizedAccount(AccessControlUnauthorizedAccount),
    /// The caller of a function is not the expected one.
    BadConfirmation(AccessControlBadConfirmation),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// An error that occurred while indexing into a role's members.
#[derive(SolidityError, Debug)]
pub enum EnumerableError {
    /// The caller attempted to query a `role` member at an invalid `index`.
    OutOfBounds(AccessControlEnumerableOutOfBounds),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for EnumerableError {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of a single role.
#[storage]
pub struct RoleData {
    /// Accounts currently holding the role.
    pub members: RoleMembers,
    /// The admin role for this role.
    pub admin_role: StorageB256,
}

/// State of a [`RoleRegistry`] contract.
#[storage]
pub struct RoleRegistry {
    /// Role identifier -> Role information.
    pub(crate) roles: StorageMap<B256, RoleData>,
}

/// Interface for a [`RoleRegistry`] contract.
pub trait IRoleRegistry {
    /// The error type associated with this interface implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Returns `true` if `account` has been granted `role`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `role` - The role identifier.
    /// * `account` - The account to check for membership.
    fn has_role(&self, role: B256, account: Address) -> bool;

    /// Checks if [`msg::sender`] has been granted `role`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `role` - The role identifier.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If [`msg::sender`] has not been
    ///   granted `role`.
    fn only_role(&self, role: B256) -> Result<(), Self::Error>;

    /// Returns the admin role that controls `role`. See
    /// [`IRoleRegistry::grant_role`] and [`IRoleRegistry::revoke_role`].
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `role` - The role identifier.
    fn get_role_admin(&self, role: B256) -> B256;

    /// Returns a copy of the accounts currently holding `role`.
    ///
    /// Grant order is kept until a member is revoked or renounces; after
    /// that the order of the remaining members is unspecified.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `role` - The role identifier.
    fn get_role_list(&self, role: B256) -> Vec<Address>;

    /// Grants `role` to `account`.
    ///
    /// If `account` had not been already granted `role`, emits a
    /// [`RoleGranted`] event. Granting a held role is a silent success.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `role` - The role identifier.
    /// * `account` - The account which will be granted the role.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If [`msg::sender`] has not been
    ///   granted `role`'s admin role.
    ///
    /// # Events
    ///
    /// * [`RoleGranted`]
    fn grant_role(
        &mut self,
        role: B256,
        account: Address,
    ) -> Result<(), Self::Error>;

    /// Revokes `role` from `account`.
    ///
    /// If `account` had been granted `role`, emits a [`RoleRevoked`] event.
    /// Revoking a role that is not held is a silent success.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `role` - The role identifier.
    /// * `account` - The account which will be revoked the role.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If [`msg::sender`] has not been
    ///   granted `role`'s admin role.
    ///
    /// # Events
    ///
    /// * [`RoleRevoked`].
    fn revoke_role(
        &mut self,
        role: B256,
        account: Address,
    ) -> Result<(), Self::Error>;

    /// Revokes `role` from the calling account.
    ///
    /// Roles are often managed via [`Self::grant_role`] and
    /// [`Self::revoke_role`]: this function's purpose is to provide a mechanism
    /// for accounts to lose their privileges if they are compromised (such as
    /// when a trusted device is misplaced). Admin status of the caller is not
    /// considered.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `role` - The role identifier.
    /// * `confirmation` - The account which will be revoked the role.
    ///
    /// # Errors
    ///
    /// * [`Error::BadConfirmation`] - If [`msg::sender`] is not the
    ///   `confirmation` address.
    ///
    /// # Events
    ///
    /// * [`RoleRevoked`] - If the calling account has its `role` revoked.
    fn renounce_role(
        &mut self,
        role: B256,
        confirmation: Address,
    ) -> Result<(), Self::Error>;

    /// Sets `new_admin_role` as `role`'s admin role.
    ///
    /// Requires the current admin role of `role`, not
    /// [`DEFAULT_ADMIN_ROLE`]. The event is emitted even when the admin role
    /// does not change.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `role` - The identifier of the role we are changing the admin to.
    /// * `new_admin_role` - The new admin role.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If [`msg::sender`] has not been
    ///   granted `role`'s current admin role.
    ///
    /// # Events
    ///
    /// * [`RoleAdminChanged`].
    fn set_role_admin(
        &mut self,
        role: B256,
        new_admin_role: B256,
    ) -> Result<(), Self::Error>;
}

/// Interface for indexed access to role members of a [`RoleRegistry`].
pub trait IRoleRegistryEnumerable {
    /// The error type associated with this interface implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Returns one of the accounts that have `role`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `role` - The role identifier.
    /// * `index` - The index of the account at `role`'s members list.
    ///
    /// # Errors
    ///
    /// * [`EnumerableError::OutOfBounds`] - If `index` is out of bounds.
    fn get_role_member(
        &self,
        role: B256,
        index: U256,
    ) -> Result<Address, Self::Error>;

    /// Returns the number of accounts that have `role`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `role` - The role identifier.
    fn get_role_member_count(&self, role: B256) -> U256;
}

#[public]
#[implements(IRoleRegistry<Error = Error>, IRoleRegistryEnumerable<Error = EnumerableError>)]
impl RoleRegistry {
    /// Constructor.
    ///
    /// Makes `initial_admin` the only member of [`DEFAULT_ADMIN_ROLE`].
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `initial_admin` - The account receiving [`DEFAULT_ADMIN_ROLE`].
    ///
    /// # Events
    ///
    /// * [`RoleGranted`].
    #[constructor]
    pub fn constructor(&mut self, initial_admin: Address) {
        self._grant_role(DEFAULT_ADMIN_ROLE.into(), initial_admin);
    }
}

#[public]
impl IRoleRegistry for RoleRegistry {
    type Error = Error;

    fn has_role(&self, role: B256, account: Address) -> bool {
        self.roles.getter(role).members.contains(account)
    }

    fn only_role(&self, role: B256) -> Result<(), Self::Error> {
        #[allow(deprecated)]
        let sender = msg::sender();
        self._check_role(role, sender)
    }

    fn get_role_admin(&self, role: B256) -> B256 {
        self.roles.getter(role).admin_role.get()
    }

    fn get_role_list(&self, role: B256) -> Vec<Address> {
        self.roles.getter(role).members.values()
    }

    fn grant_role(
        &mut self,
        role: B256,
        account: Address,
    ) -> Result<(), Self::Error> {
        let admin_role = self.get_role_admin(role);
        self.only_role(admin_role)?;
        self._grant_role(role, account);
        Ok(())
    }

    fn revoke_role(
        &mut self,
        role: B256,
        account: Address,
    ) -> Result<(), Self::Error> {
        let admin_role = self.get_role_admin(role);
        self.only_role(admin_role)?;
        self._revoke_role(role, account);
        Ok(())
    }

    fn renounce_role(
        &mut self,
        role: B256,
        confirmation: Address,
    ) -> Result<(), Self::Error> {
        #[allow(deprecated)]
        let sender = msg::sender();
        if sender != confirmation {
            return Err(Error::BadConfirmation(
                AccessControlBadConfirmation {},
            ));
        }

        self._revoke_role(role, confirmation);
        Ok(())
    }

    fn set_role_admin(
        &mut self,
        role: B256,
        new_admin_role: B256,
    ) -> Result<(), Self::Error> {
        let admin_role = self.get_role_admin(role);
        self.only_role(admin_role)?;
        self._set_role_admin(role, new_admin_role);
        Ok(())
    }
}

#[public]
impl IRoleRegistryEnumerable for RoleRegistry {
    type Error = EnumerableError;

    fn get_role_member(
        &self,
        role: B256,
        index: U256,
    ) -> Result<Address, Self::Error> {
        match self.roles.getter(role).members.at(index) {
            Some(member) => Ok(member),
            None => Err(EnumerableError::OutOfBounds(
                AccessControlEnumerableOutOfBounds { role, index },
            )),
        }
    }

    fn get_role_member_count(&self, role: B256) -> U256 {
        self.roles.getter(role).members.length()
    }
}

impl RoleRegistry {
    /// Sets `new_admin_role` as `role`'s admin role.
    ///
    /// Internal function without access restriction.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `role` - The identifier of the role we are changing the admin to.
    /// * `new_admin_role` - The new admin role.
    ///
    /// # Events
    ///
    /// * [`RoleAdminChanged`].
    #[allow(deprecated)]
    pub fn _set_role_admin(&mut self, role: B256, new_admin_role: B256) {
        let previous_admin_role = self.get_role_admin(role);
        self.roles.setter(role).admin_role.set(new_admin_role);
        evm::log(RoleAdminChanged {
            role,
            previous_admin_role,
            new_admin_role,
        });
    }

    /// Checks if `account` has been granted `role`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `role` - The role identifier.
    /// * `account` - The account to check for membership.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If `account` has not been granted
    ///   `role`.
    pub fn _check_role(
        &self,
        role: B256,
        account: Address,
    ) -> Result<(), Error> {
        if !self.has_role(role, account) {
            return Err(Error::UnauthorizedAccount(
                AccessControlUnauthorizedAccount { account, needed_role: role },
            ));
        }

        Ok(())
    }

    /// Attempts to grant `role` to `account` and returns a boolean indicating
    /// if `role` was granted.
    ///
    /// Internal function without access restriction.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `role` - The role identifier.
    /// * `account` - The account which will be granted the role.
    ///
    /// # Events
    ///
    /// * [`RoleGranted`].
    #[allow(deprecated)]
    pub fn _grant_role(&mut self, role: B256, account: Address) -> bool {
        let granted = self.roles.setter(role).members.add(account);
        if granted {
            evm::log(RoleGranted { role, account, sender: msg::sender() });
        }
        granted
    }

    /// Attempts to revoke `role` from `account` and returns a boolean
    /// indicating if `role` was revoked.
    ///
    /// Internal function without access restriction.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `role` - The role identifier.
    /// * `account` - The account which will be revoked the role.
    ///
    /// # Events
    ///
    /// * [`RoleRevoked`].
    #[allow(deprecated)]
    pub fn _revoke_role(&mut self, role: B256, account: Address) -> bool {
        let revoked = self.roles.setter(role).members.remove(account);
        if revoked {
            evm::log(RoleRevoked { role, account, sender: msg::sender() });
        }
        revoked
    }
}
