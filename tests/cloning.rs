use scoped_options::ScopedOptions;
use serde_json::json;

#[test]
fn test_clone_is_independent_of_the_original() {
    let mut opt = ScopedOptions::new();
    opt.set("x", 1).unwrap();
    let mut copy = opt.clone();
    copy.set("x", 2).unwrap();
    assert_eq!(opt.get("x").unwrap(), &json!(1));
    assert_eq!(copy.get("x").unwrap(), &json!(2));
}

#[test]
fn test_clone_deep_copies_nested_values() {
    let mut opt = ScopedOptions::new();
    opt.set("layers", json!({"conv": [1, 2, 3]})).unwrap();
    let mut copy = opt.clone();
    copy.set("layers", json!({"conv": [9]})).unwrap();
    assert_eq!(opt.get("layers").unwrap(), &json!({"conv": [1, 2, 3]}));
}

#[test]
fn test_clone_overrides_apply_only_to_the_clone() {
    let mut opt = ScopedOptions::new();
    opt.set("x", 1).unwrap();
    let copy = opt.clone_with([("y", json!(5))]).unwrap();
    assert_eq!(copy.get("x").unwrap(), &json!(1));
    assert_eq!(copy.get("y").unwrap(), &json!(5));
    assert!(opt.get("y").is_err());
}

// The clone keeps the scope that was active when the copy was taken, and the
// overrides land under that scope; the original's cursor still restores.
#[test]
fn test_clone_inherits_the_scope_active_at_copy_time() {
    let mut opt = ScopedOptions::new();
    let copy = opt.with_scope("experiment", |o| {
        o.set("lr", json!(0.1)).unwrap();
        o.clone_with([("lr", json!(0.01))]).unwrap()
    });
    assert_eq!(opt.current_scope(), "");
    assert_eq!(copy.current_scope(), "experiment");
    assert_eq!(copy.get("lr").unwrap(), &json!(0.01));
    opt.with_scope("experiment", |o| assert_eq!(o.get("lr").unwrap(), &json!(0.1)));
}

#[test]
fn test_clone_with_a_reserved_override_fails() {
    let mut opt = ScopedOptions::new();
    opt.set("x", 1).unwrap();
    assert!(opt.clone_with([("_scope", json!("hijacked"))]).is_err());
    // the original is still intact either way
    assert_eq!(opt.get("x").unwrap(), &json!(1));
}
