//! Operation catalog wiring.
//!
//! The catalog is a fixed set of tables compiled into the crate, one per
//! value-shape category. Callers use `operations`/`find` for lookup and the
//! identity types for selector handling; nothing here is mutable.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::Category;
pub use index::{find, operations, total};
pub use model::{Effect, OpFn, Operation, OperationSnapshot};
