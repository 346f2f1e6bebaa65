//! Selectable utility-operation library.
//!
//! The crate ships a fixed catalog of small transforms grouped by the value
//! shape they operate on (sequences, key/value mappings, text) and a
//! registry that attaches a chosen subset of them to process-wide dispatch
//! tables. `install`/`uninstall`/`ls` form the public contract: selectors
//! name a whole category (`"mapping"`) or one operation
//! (`"sequence:last"`), and a zero-length selector list means everything.
//! Once installed, any `serde_json::Value` of the matching shape can call
//! an operation through [`Invoke`].
//!
//! Installed state is shared by the whole process. Two consumers in one
//! process see each other's installs and uninstalls; nothing here scopes a
//! binding to a caller.

use thiserror::Error as ThisError;

pub mod catalog;
mod ops;
pub mod registry;
pub mod resolve;

pub use catalog::{Category, Effect, OpFn, Operation, OperationSnapshot};
pub use registry::{Invoke, installed};
pub use resolve::Selector;

/// Failures surfaced by resolution and dispatch.
///
/// Resolution errors are deterministic for identical input and abort the
/// whole call before any binding changes, so a failed `install` leaves the
/// installed state exactly as it was.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("unknown category in selector '{0}'")]
    UnknownCategory(String),
    #[error("unknown operation in selector '{0}'")]
    UnknownOperation(String),
    #[error("operation '{name}' is not installed for {category} values")]
    NotInstalled {
        category: Category,
        name: &'static str,
    },
    #[error("no operation namespace covers values of this shape")]
    UnsupportedShape,
    #[error("operation '{name}' expects a {expected} target")]
    TargetMismatch {
        name: &'static str,
        expected: Category,
    },
}

/// Attach the selected operations to their namespaces.
///
/// Selectors resolve first and bind second, in resolved order; a resolution
/// error therefore aborts before anything is attached. Installing an
/// already-installed operation is a no-op.
pub fn install(selectors: &[&str]) -> Result<(), Error> {
    for op in resolve::resolve(selectors)? {
        registry::bind(op);
    }
    Ok(())
}

/// Detach the selected operations from their namespaces.
///
/// Same selector grammar and all-or-nothing resolution as [`install`];
/// uninstalling an operation that is not attached is a no-op.
pub fn uninstall(selectors: &[&str]) -> Result<(), Error> {
    for op in resolve::resolve(selectors)? {
        registry::unbind(op);
    }
    Ok(())
}

/// List the selected operations as qualified `category:name` strings.
///
/// Pure introspection over the catalog; the installed state is neither
/// consulted nor changed.
pub fn ls(selectors: &[&str]) -> Result<Vec<String>, Error> {
    Ok(resolve::resolve(selectors)?
        .into_iter()
        .map(|op| op.qualified())
        .collect())
}
