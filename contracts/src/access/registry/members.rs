//! Enumerable membership list of a single role.
//!
//! Members are added, removed, and checked for existence in constant time and
//! enumerated in O(n). Removal moves the last member into the vacated slot, so
//! the relative order of the remaining members is not preserved.
use alloc::{vec, vec::Vec};

use alloy_primitives::{uint, Address, U256};
use stylus_sdk::{
    prelude::*,
    storage::{StorageAddress, StorageMap, StorageU256, StorageVec},
};

/// State of a [`RoleMembers`] list.
#[storage]
pub struct RoleMembers {
    /// Accounts currently holding the role, in storage order.
    members: StorageVec<StorageAddress>,
    /// Position of an account in `members` plus 1.
    /// Position 0 means the account is not a member.
    positions: StorageMap<Address, StorageU256>,
}

impl RoleMembers {
    /// Appends `account` to the list.
    ///
    /// Returns `true` if `account` was added, that is if it was not already a
    /// member.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the list's state.
    /// * `account` - The account to add.
    pub fn add(&mut self, account: Address) -> bool {
        if self.contains(account) {
            return false;
        }

        self.members.push(account);
        let position = self.length();
        self.positions.setter(account).set(position);
        true
    }

    /// Removes `account` from the list.
    ///
    /// Returns `true` if `account` was removed, that is if it was a member.
    ///
    /// The last member takes the place of the removed one.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the list's state.
    /// * `account` - The account to remove.
    #[allow(clippy::missing_panics_doc)]
    pub fn remove(&mut self, account: Address) -> bool {
        let position = self.positions.get(account);
        if position.is_zero() {
            return false;
        }

        let one = uint!(1_U256);
        let index = position - one;
        let last_index = self.length() - one;

        if index != last_index {
            let last = self
                .members
                .get(last_index)
                .expect("member at `last_index` must exist");

            self.members
                .setter(index)
                .expect("member at `index` must exist - is being removed")
                .set(last);

            self.positions.setter(last).set(position);
        }

        self.members.pop();
        self.positions.delete(account);

        true
    }

    /// Returns `true` if `account` is a member.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the list's state.
    /// * `account` - The account to look up.
    pub fn contains(&self, account: Address) -> bool {
        !self.positions.get(account).is_zero()
    }

    /// Returns the number of members.
    pub fn length(&self) -> U256 {
        U256::from(self.members.len())
    }

    /// Returns the member stored at `index`, or [`None`] if `index` is out of
    /// bounds.
    ///
    /// Ordering may change when members are removed.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the list's state.
    /// * `index` - Position in the list.
    pub fn at(&self, index: U256) -> Option<Address> {
        self.members.get(index)
    }

    /// Copies the whole list to memory, in storage order.
    #[allow(clippy::missing_panics_doc)]
    pub fn values(&self) -> Vec<Address> {
        (0..self.members.len())
            .map(|idx| {
                self.members.get(idx).expect("member at `idx` must exist")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{collections::BTreeSet, vec, vec::Vec};

    use alloy_primitives::{
        private::proptest::{prop_assert, prop_assert_eq, proptest},
        Address, U256,
    };
    use motsu::prelude::Contract;
    use stylus_sdk::prelude::*;

    use super::RoleMembers;

    unsafe impl TopLevelStorage for RoleMembers {}

    #[public]
    impl RoleMembers {}

    fn accounts(n: u8) -> Vec<Address> {
        (1..=n).map(Address::with_last_byte).collect()
    }

    #[motsu::test]
    fn empty_list_has_no_members(
        contract: Contract<RoleMembers>,
        alice: Address,
    ) {
        assert_eq!(contract.sender(alice).length(), U256::ZERO);
        assert!(!contract.sender(alice).contains(alice));
        assert_eq!(contract.sender(alice).at(U256::ZERO), None);
        assert!(contract.sender(alice).values().is_empty());
    }

    #[motsu::test]
    fn add_appends_in_order(contract: Contract<RoleMembers>, alice: Address) {
        let members = accounts(3);
        for member in &members {
            assert!(contract.sender(alice).add(*member));
        }

        assert_eq!(contract.sender(alice).values(), members);
        assert_eq!(contract.sender(alice).at(U256::from(2)), Some(members[2]));
        assert_eq!(contract.sender(alice).at(U256::from(3)), None);
    }

    #[motsu::test]
    fn add_twice_keeps_single_entry(
        contract: Contract<RoleMembers>,
        alice: Address,
        bob: Address,
    ) {
        assert!(contract.sender(alice).add(bob));
        assert!(!contract.sender(alice).add(bob));

        assert_eq!(contract.sender(alice).length(), U256::from(1));
        assert_eq!(contract.sender(alice).values(), vec![bob]);
    }

    #[motsu::test]
    fn remove_absent_is_noop(
        contract: Contract<RoleMembers>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).add(alice);

        assert!(!contract.sender(alice).remove(bob));
        assert_eq!(contract.sender(alice).values(), vec![alice]);
    }

    #[motsu::test]
    fn remove_moves_last_member_into_gap(
        contract: Contract<RoleMembers>,
        alice: Address,
    ) {
        let m = accounts(4);
        for member in &m {
            contract.sender(alice).add(*member);
        }

        assert!(contract.sender(alice).remove(m[1]));
        assert_eq!(contract.sender(alice).values(), vec![m[0], m[3], m[2]]);

        // The moved member must still be removable from its new slot.
        assert!(contract.sender(alice).remove(m[3]));
        assert_eq!(contract.sender(alice).values(), vec![m[0], m[2]]);
    }

    #[motsu::test]
    fn remove_last_member_pops(
        contract: Contract<RoleMembers>,
        alice: Address,
    ) {
        let m = accounts(3);
        for member in &m {
            contract.sender(alice).add(*member);
        }

        assert!(contract.sender(alice).remove(m[2]));
        assert_eq!(contract.sender(alice).values(), vec![m[0], m[1]]);
    }

    #[motsu::test]
    fn removed_member_can_be_added_again(
        contract: Contract<RoleMembers>,
        alice: Address,
        bob: Address,
    ) {
        contract.sender(alice).add(alice);
        contract.sender(alice).add(bob);
        contract.sender(alice).remove(alice);

        assert!(contract.sender(alice).add(alice));
        assert_eq!(contract.sender(alice).values(), vec![bob, alice]);
    }

    // every interleaving of adds and removes leaves `values`, `contains` and
    // `length` agreeing with a reference set.
    #[test]
    fn prop_matches_reference_set() {
        proptest!(|(ops: Vec<(bool, u8)>, alice: Address)| {
            let contract = Contract::<RoleMembers>::default();
            let mut expected = BTreeSet::new();

            for (is_add, byte) in ops {
                let account = Address::with_last_byte(byte % 16);
                if is_add {
                    let added = contract.sender(alice).add(account);
                    prop_assert_eq!(added, expected.insert(account));
                } else {
                    let removed = contract.sender(alice).remove(account);
                    prop_assert_eq!(removed, expected.remove(&account));
                }
                prop_assert_eq!(
                    contract.sender(alice).contains(account),
                    expected.contains(&account)
                );
            }

            let values = contract.sender(alice).values();
            prop_assert_eq!(values.len(), expected.len());
            prop_assert_eq!(
                contract.sender(alice).length(),
                U256::from(expected.len())
            );

            let actual: BTreeSet<Address> = values.iter().copied().collect();
            prop_assert_eq!(&actual, &expected);

            for (idx, value) in values.iter().enumerate() {
                prop_assert!(contract.sender(alice).at(U256::from(idx)) == Some(*value));
            }
        });
    }
}
