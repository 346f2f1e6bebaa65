//! Selector resolution.
//!
//! Expands a mixed list of selector strings, bare categories and qualified
//! `category:name` pairs alike, into an ordered, de-duplicated list of catalog
//! entries. Resolution is all-or-nothing: the first invalid selector aborts
//! the whole call with no partial result, which is what lets the installer
//! guarantee that a failed call changes nothing.

use crate::Error;
use crate::catalog::{self, Operation};
use crate::catalog::identity::{Category, is_identifier};
use log::trace;
use std::collections::BTreeSet;

/// One parsed selector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Selector {
    Category(Category),
    Qualified(Category, String),
}

impl Selector {
    /// Parse a raw selector string.
    ///
    /// Anything left of the first `:` must be a known category; a name part
    /// outside the identifier grammar is reported as an unknown operation so
    /// the caller sees the full offending selector either way.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        match raw.split_once(':') {
            None => Category::parse(raw)
                .map(Selector::Category)
                .ok_or_else(|| Error::UnknownCategory(raw.to_string())),
            Some((category, name)) => {
                let category = Category::parse(category)
                    .ok_or_else(|| Error::UnknownCategory(raw.to_string()))?;
                if !is_identifier(name) {
                    return Err(Error::UnknownOperation(raw.to_string()));
                }
                Ok(Selector::Qualified(category, name.to_string()))
            }
        }
    }
}

/// Expand selectors into catalog entries, first-seen order, no duplicates.
///
/// An empty selector list is the niladic form and expands to every
/// operation in every category, in declared order.
pub fn resolve(selectors: &[&str]) -> Result<Vec<&'static Operation>, Error> {
    let mut seen: BTreeSet<(Category, &'static str)> = BTreeSet::new();
    let mut resolved: Vec<&'static Operation> = Vec::new();

    if selectors.is_empty() {
        for category in Category::ALL {
            expand_category(category, &mut seen, &mut resolved);
        }
        return Ok(resolved);
    }

    for raw in selectors {
        match Selector::parse(raw)? {
            Selector::Category(category) => expand_category(category, &mut seen, &mut resolved),
            Selector::Qualified(category, name) => {
                let op = catalog::find(category, &name)
                    .ok_or_else(|| Error::UnknownOperation(raw.to_string()))?;
                push_once(op, &mut seen, &mut resolved);
            }
        }
    }

    trace!(
        "resolved {} selectors to {} operations",
        selectors.len(),
        resolved.len()
    );
    Ok(resolved)
}

fn expand_category(
    category: Category,
    seen: &mut BTreeSet<(Category, &'static str)>,
    out: &mut Vec<&'static Operation>,
) {
    for op in catalog::operations(category) {
        push_once(op, seen, out);
    }
}

fn push_once(
    op: &'static Operation,
    seen: &mut BTreeSet<(Category, &'static str)>,
    out: &mut Vec<&'static Operation>,
) {
    if seen.insert((op.category, op.name)) {
        out.push(op);
    }
}
