//! The installed state and its dispatch path.
//!
//! One process-wide table maps `(category, name)` to the bound catalog
//! entry. Binding and unbinding are idempotent; re-binding replaces the
//! entry, so the last writer wins. The table is the only mutable state in
//! the crate and is shared by every caller in the process; install and
//! uninstall are global, not scoped to a module or request.
//!
//! Values reach bound operations through the [`Invoke`] trait, which picks
//! the namespace from the value's shape. Because dispatch goes through this
//! table and never through the value itself, installed operations are
//! invisible to attribute enumeration of any individual value.

use crate::Error;
use crate::catalog::{self, Operation};
use crate::catalog::identity::Category;
use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

static BOUND: RwLock<BTreeMap<(Category, &'static str), &'static Operation>> =
    RwLock::new(BTreeMap::new());

// The lock only satisfies Sync for the static; the table holds no invariant
// a panicked writer could half-apply, so poisoning is absorbed.
pub(crate) fn bind(op: &'static Operation) {
    let mut table = BOUND.write().unwrap_or_else(PoisonError::into_inner);
    if table.insert((op.category, op.name), op).is_none() {
        debug!("bound {} onto the {} namespace", op.name, op.category);
    }
}

pub(crate) fn unbind(op: &'static Operation) {
    let mut table = BOUND.write().unwrap_or_else(PoisonError::into_inner);
    if table.remove(&(op.category, op.name)).is_some() {
        debug!("unbound {} from the {} namespace", op.name, op.category);
    }
}

fn bound(category: Category, name: &str) -> Option<&'static Operation> {
    let table = BOUND.read().unwrap_or_else(PoisonError::into_inner);
    table
        .iter()
        .find(|((c, n), _)| *c == category && *n == name)
        .map(|(_, op)| *op)
}

/// Names currently bound in `category`'s namespace, sorted.
pub fn installed(category: Category) -> Vec<String> {
    let table = BOUND.read().unwrap_or_else(PoisonError::into_inner);
    table
        .keys()
        .filter(|(c, _)| *c == category)
        .map(|(_, name)| (*name).to_string())
        .collect()
}

/// Dispatch through the installed state by the value's shape.
pub trait Invoke {
    /// Invoke a bound operation on this value.
    ///
    /// Fails with `UnsupportedShape` when the value has no namespace,
    /// `NotInstalled` when the operation exists in the catalog but is not
    /// currently bound, and `UnknownOperation` when the catalog has never
    /// heard of the name.
    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value, Error>;
}

impl Invoke for Value {
    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value, Error> {
        let category = Category::of_value(self).ok_or(Error::UnsupportedShape)?;
        let Some(op) = bound(category, name) else {
            return Err(match catalog::find(category, name) {
                Some(op) => Error::NotInstalled {
                    category,
                    name: op.name,
                },
                None => Error::UnknownOperation(format!("{category}:{name}")),
            });
        };
        (op.apply)(self, args)
    }
}
