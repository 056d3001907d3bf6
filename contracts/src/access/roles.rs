//! Role identifiers.
//!
//! A role is an opaque `bytes32` key. Identifiers are usually derived from a
//! human-readable name with [`role_id`], but any 32-byte value is a valid
//! role.

/// The default admin role. `[0; 32]` by default.
///
/// Every role is administered by this role until its admin role is changed,
/// and it is its own admin.
pub const DEFAULT_ADMIN_ROLE: [u8; 32] = [0; 32];

/// Returns the role identifier of `name`, its Keccak-256 digest.
///
/// Usable in `const` context:
///
/// ```rust
/// use role_registry_stylus::access::roles::role_id;
///
/// pub const PAUSER_ROLE: [u8; 32] = role_id(b"PAUSER_ROLE");
/// ```
#[must_use]
pub const fn role_id(name: &[u8]) -> [u8; 32] {
    keccak_const::Keccak256::new().update(name).finalize()
}
