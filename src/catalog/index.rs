//! Lookup surface over the static catalog tables.
//!
//! Lookups are linear scans over slices a few entries long; the tables stay
//! in declaration order because that order is part of the resolver contract.
//! Strict well-formedness checks live in this module's tests since the
//! compiled-in tables have no load path that could reject a bad catalog.

use crate::catalog::identity::Category;
use crate::catalog::model::{MAPPING_OPS, Operation, SEQUENCE_OPS, TEXT_OPS};

/// Every operation declared for `category`, in catalog order.
pub fn operations(category: Category) -> &'static [Operation] {
    match category {
        Category::Sequence => SEQUENCE_OPS,
        Category::Mapping => MAPPING_OPS,
        Category::Text => TEXT_OPS,
    }
}

/// Resolve one operation by category and name.
///
/// Returns `None` instead of erroring; callers surface errors carrying the
/// selector text that referenced the missing name.
pub fn find(category: Category, name: &str) -> Option<&'static Operation> {
    operations(category).iter().find(|op| op.name == name)
}

/// Total operation count across all categories.
pub fn total() -> usize {
    Category::ALL.iter().map(|c| operations(*c).len()).sum()
}
