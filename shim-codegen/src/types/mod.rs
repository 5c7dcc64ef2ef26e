//! Internal type vocabulary and qualification of type references.

mod patcher;
mod registry;

pub use patcher::TypePatcher;
pub use registry::{BASE_TYPES, InternalTypes, InternalTypesBuilder};
