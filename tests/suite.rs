// Centralized integration suite for the installer, uninstaller, and lister;
// exercises selector resolution, installed-state transitions, and the error
// taxonomy so regressions surface in one place.
mod support;

use anyhow::Result;
use opshelf::{Category, Error, Invoke, catalog, install, installed, ls, uninstall};
use serde_json::{Value, json};
use support::{detach_all, state_lock};

#[test]
fn ls_expands_categories() -> Result<()> {
    let actual = ls(&["sequence"])?;
    let expected: Vec<String> = catalog::operations(Category::Sequence)
        .iter()
        .map(|op| op.qualified())
        .collect();
    assert_eq!(actual, expected);
    Ok(())
}

#[test]
fn ls_is_identity_on_qualified_names() -> Result<()> {
    let expected = vec!["sequence:unique", "sequence:trim", "sequence:flat"];
    let actual = ls(&expected)?;
    assert_eq!(actual, expected);
    Ok(())
}

#[test]
fn ls_supports_mixed_selectors() -> Result<()> {
    // A category followed by one of its own members adds nothing.
    let actual = ls(&["mapping", "mapping:keys"])?;
    assert_eq!(actual.len(), catalog::operations(Category::Mapping).len());

    // A member of another category appends after the expansion.
    let actual = ls(&["mapping", "text:trimln"])?;
    assert_eq!(
        actual.len(),
        catalog::operations(Category::Mapping).len() + 1
    );
    assert_eq!(actual.last().map(String::as_str), Some("text:trimln"));
    Ok(())
}

#[test]
fn ls_niladic_lists_everything() -> Result<()> {
    let actual = ls(&[])?;
    assert_eq!(actual.len(), catalog::total());
    assert_eq!(actual.first().map(String::as_str), Some("sequence:unique"));
    Ok(())
}

#[test]
fn ls_rejects_unknown_selectors() {
    let err = ls(&["bogus_category"]).unwrap_err();
    assert!(matches!(err, Error::UnknownCategory(ref s) if s == "bogus_category"));

    let err = ls(&["sequence:bogus_op"]).unwrap_err();
    assert!(matches!(err, Error::UnknownOperation(ref s) if s == "sequence:bogus_op"));

    // Same invalid input, same error, every time.
    let again = ls(&["sequence:bogus_op"]).unwrap_err();
    assert_eq!(err.to_string(), again.to_string());
}

#[test]
fn install_handles_a_single_operation() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&["sequence:last"])?;
    assert_eq!(installed(Category::Sequence), ["last"]);
    assert!(installed(Category::Mapping).is_empty());
    assert!(installed(Category::Text).is_empty());
    Ok(())
}

#[test]
fn install_supports_category_groups() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&["mapping"])?;
    let mut expected: Vec<String> = catalog::operations(Category::Mapping)
        .iter()
        .map(|op| op.name.to_string())
        .collect();
    expected.sort();
    assert_eq!(installed(Category::Mapping), expected);
    assert!(installed(Category::Sequence).is_empty());
    Ok(())
}

#[test]
fn niladic_install_attaches_everything() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&[])?;
    for category in Category::ALL {
        let mut expected: Vec<String> = catalog::operations(category)
            .iter()
            .map(|op| op.name.to_string())
            .collect();
        expected.sort();
        assert_eq!(installed(category), expected, "{category} incomplete");
    }
    assert_eq!(ls(&[])?.len(), catalog::total());
    Ok(())
}

#[test]
fn install_is_idempotent() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&["text:uc"])?;
    let first = installed(Category::Text);
    install(&["text:uc"])?;
    assert_eq!(installed(Category::Text), first);
    Ok(())
}

#[test]
fn uninstall_is_idempotent() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&["text:uc"])?;
    uninstall(&["text:uc"])?;
    assert!(installed(Category::Text).is_empty());
    uninstall(&["text:uc"])?;
    assert!(installed(Category::Text).is_empty());
    Ok(())
}

#[test]
fn uninstall_supports_category_groups() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&[])?;
    uninstall(&["mapping"])?;
    assert!(installed(Category::Mapping).is_empty());
    assert!(!installed(Category::Sequence).is_empty());
    assert!(!installed(Category::Text).is_empty());
    Ok(())
}

#[test]
fn failed_install_changes_nothing() {
    let _state = state_lock();
    detach_all();

    // The valid selector comes first; resolution must still abort the whole
    // call before anything is attached.
    let err = install(&["sequence:last", "bogus_category"]).unwrap_err();
    assert!(matches!(err, Error::UnknownCategory(_)));
    assert!(installed(Category::Sequence).is_empty());

    let err = install(&["sequence:bogus_op"]).unwrap_err();
    assert!(matches!(err, Error::UnknownOperation(_)));
    assert!(installed(Category::Sequence).is_empty());
}

#[test]
fn failed_uninstall_changes_nothing() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&["sequence"])?;
    let before = installed(Category::Sequence);
    let err = uninstall(&["sequence:last", "nope"]).unwrap_err();
    assert!(matches!(err, Error::UnknownCategory(_)));
    assert_eq!(installed(Category::Sequence), before);
    Ok(())
}

#[test]
fn install_preserves_value_enumeration() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&[])?;
    // A freshly created empty mapping enumerates no attributes at all.
    let fresh = json!({});
    assert_eq!(fresh.as_object().map(|m| m.len()), Some(0));

    // And a populated one enumerates only its own data.
    let mut value = json!({"a": 1});
    assert_eq!(value.invoke("keys", &[])?, json!(["a"]));
    Ok(())
}

#[test]
fn last_scenario_round_trip() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&["sequence:last"])?;
    let mut seq = json!([1, 2, 3]);
    assert_eq!(seq.invoke("last", &[])?, json!(3));
    assert_eq!(seq.invoke("last", &[json!(1)])?, json!(2));

    let mut empty = json!([]);
    assert_eq!(empty.invoke("last", &[])?, Value::Null);

    uninstall(&["sequence:last"])?;
    let err = seq.invoke("last", &[]).unwrap_err();
    assert!(matches!(
        err,
        Error::NotInstalled {
            category: Category::Sequence,
            name: "last"
        }
    ));
    Ok(())
}

#[test]
fn invoke_rejects_uncategorized_shapes() {
    let mut number = json!(42);
    let err = number.invoke("last", &[]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedShape));
}

#[test]
fn invoke_distinguishes_unknown_from_uninstalled() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&["sequence"])?;
    let mut seq = json!([1]);
    let err = seq.invoke("fabricated", &[]).unwrap_err();
    assert!(matches!(err, Error::UnknownOperation(_)));

    detach_all();
    let err = seq.invoke("unique", &[]).unwrap_err();
    assert!(matches!(err, Error::NotInstalled { .. }));
    Ok(())
}

#[test]
fn rebinding_replaces_without_duplicating() -> Result<()> {
    let _state = state_lock();
    detach_all();

    install(&["mapping:keys"])?;
    install(&["mapping:keys"])?;
    assert_eq!(installed(Category::Mapping), ["keys"]);

    let mut value = json!({"x": 1, "y": 2});
    assert_eq!(value.invoke("keys", &[])?, json!(["x", "y"]));
    Ok(())
}
