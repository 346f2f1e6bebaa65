//! Operation records and the static catalog tables.
//!
//! One table per category, in declared order; the slices are the catalog, so
//! there is no load step and no load-time failure mode. `CatalogIndex`-style
//! well-formedness (unique names, selector grammar, category agreement) is
//! asserted by the tests in `index.rs`.

use crate::Error;
use crate::catalog::identity::Category;
use crate::ops;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Call convention for every operation body.
///
/// Pure operations leave the target untouched and build their result from
/// it; in-place operations mutate the target and return the updated value as
/// well, so both calling styles work.
pub type OpFn = fn(&mut Value, &[Value]) -> Result<Value, Error>;

/// Declared mutation behavior of an operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Pure,
    InPlace,
}

#[derive(Clone, Copy, Debug)]
/// One catalog entry: a named transform bound to a single category.
pub struct Operation {
    pub name: &'static str,
    pub category: Category,
    pub effect: Effect,
    pub apply: OpFn,
}

impl Operation {
    /// The `category:name` display form used by selectors and `ls`.
    pub fn qualified(&self) -> String {
        format!("{}:{}", self.category, self.name)
    }

    /// Compact serializable descriptor for reporting and introspection.
    pub fn snapshot(&self) -> OperationSnapshot {
        OperationSnapshot {
            id: self.qualified(),
            category: self.category,
            effect: self.effect,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Denormalized operation metadata, self-describing away from the tables.
pub struct OperationSnapshot {
    pub id: String,
    pub category: Category,
    pub effect: Effect,
}

macro_rules! op {
    ($name:literal, $category:ident, $effect:ident, $apply:path) => {
        Operation {
            name: $name,
            category: Category::$category,
            effect: Effect::$effect,
            apply: $apply,
        }
    };
}

pub(crate) const SEQUENCE_OPS: &[Operation] = &[
    op!("unique", Sequence, Pure, ops::sequence::unique),
    op!("trim", Sequence, Pure, ops::sequence::trim),
    op!("flat", Sequence, Pure, ops::sequence::flat),
    op!("last", Sequence, Pure, ops::sequence::last),
    op!("unpack", Sequence, Pure, ops::sequence::unpack),
    op!("keyval", Sequence, Pure, ops::sequence::keyval),
    op!("isStr", Sequence, Pure, ops::is_str),
    op!("isArr", Sequence, Pure, ops::is_arr),
    op!("isObj", Sequence, Pure, ops::is_obj),
];

pub(crate) const MAPPING_OPS: &[Operation] = &[
    op!("keys", Mapping, Pure, ops::mapping::keys),
    op!("isEmpty", Mapping, Pure, ops::mapping::is_empty),
    op!("keyval", Mapping, Pure, ops::mapping::keyval),
    op!("concat", Mapping, Pure, ops::mapping::concat),
    op!("mv", Mapping, InPlace, ops::mapping::mv),
    op!("mvp", Mapping, Pure, ops::mapping::mvp),
    op!("rm", Mapping, InPlace, ops::mapping::rm),
    op!("rmp", Mapping, Pure, ops::mapping::rmp),
    op!("notIn", Mapping, Pure, ops::mapping::not_in),
    op!("getpath", Mapping, Pure, ops::mapping::getpath),
    op!("setpath", Mapping, InPlace, ops::mapping::setpath),
    op!("isStr", Mapping, Pure, ops::is_str),
    op!("isArr", Mapping, Pure, ops::is_arr),
    op!("isObj", Mapping, Pure, ops::is_obj),
];

pub(crate) const TEXT_OPS: &[Operation] = &[
    op!("sprintf", Text, Pure, ops::text::sprintf),
    op!("trimln", Text, Pure, ops::text::trimln),
    op!("uc", Text, Pure, ops::text::uc),
    op!("lc", Text, Pure, ops::text::lc),
    op!("tc", Text, Pure, ops::text::tc),
    op!("isStr", Text, Pure, ops::is_str),
    op!("isArr", Text, Pure, ops::is_arr),
    op!("isObj", Text, Pure, ops::is_obj),
];
