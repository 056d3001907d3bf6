//! Contracts implementing role-based access control.
pub mod registry;
pub mod roles;

pub use registry::{
    EnumerableError as RoleRegistryEnumerableError, Error as RoleRegistryError,
    IRoleRegistry, IRoleRegistryEnumerable, RoleRegistry,
};
pub use roles::{role_id, DEFAULT_ADMIN_ROLE};
