//! Tests for nested rule-set composition.
//!
//! A child directory's effective rule set is the parent's rules followed by
//! the child's own local rules; later rules override earlier ones for the
//! same path, and rules never apply outside their declaration directory.

use filters::{IgnoreRule, RuleSet};
use std::path::Path;

#[test]
fn child_rules_append_to_parent_rules() {
    let (root, _) = RuleSet::new().extended(Path::new(""), [IgnoreRule::exclude("*.tmp")]);
    let (child, _) = root.extended(Path::new("sub"), [IgnoreRule::exclude("*.bak")]);

    assert_eq!(root.len(), 1);
    assert_eq!(child.len(), 2);
    assert!(child.is_excluded(Path::new("sub/a.tmp"), false));
    assert!(child.is_excluded(Path::new("sub/a.bak"), false));
}

#[test]
fn sibling_scopes_do_not_interfere() {
    let (root, _) = RuleSet::new().extended(Path::new(""), [IgnoreRule::exclude("*.tmp")]);
    let (left, _) = root.extended(Path::new("left"), [IgnoreRule::negate("keep.tmp")]);

    // the negation only exists in the `left` lineage
    assert!(!left.is_excluded(Path::new("left/keep.tmp"), false));
    assert!(root.is_excluded(Path::new("right/keep.tmp"), false));
    assert!(root.is_excluded(Path::new("right/other.tmp"), false));
}

#[test]
fn deeper_scopes_layer_in_order() {
    let (root, _) = RuleSet::new().extended(Path::new(""), [IgnoreRule::exclude("*.tmp")]);
    let (mid, _) = root.extended(Path::new("a"), [IgnoreRule::negate("keep.tmp")]);
    let (leaf, _) = mid.extended(Path::new("a/b"), [IgnoreRule::exclude("keep.tmp")]);

    assert!(!mid.is_excluded(Path::new("a/keep.tmp"), false));
    // the leaf re-excludes what the middle scope negated
    assert!(leaf.is_excluded(Path::new("a/b/keep.tmp"), false));
    assert!(!leaf.is_excluded(Path::new("a/keep.tmp"), false));
}

#[test]
fn anchored_child_rule_is_relative_to_its_scope() {
    let (set, _) = RuleSet::new().extended(Path::new("sub"), [IgnoreRule::exclude("/top.txt")]);

    assert!(set.is_excluded(Path::new("sub/top.txt"), false));
    assert!(!set.is_excluded(Path::new("sub/deeper/top.txt"), false));
    assert!(!set.is_excluded(Path::new("top.txt"), false));
}

#[test]
fn extension_preserves_declaration_order() {
    let (set, _) = RuleSet::new().extended(
        Path::new(""),
        [
            IgnoreRule::exclude("keep.tmp"),
            IgnoreRule::negate("keep.tmp"),
        ],
    );
    let (set, _) = set.extended(Path::new(""), [IgnoreRule::exclude("keep.tmp")]);

    // the final exclude, added last, wins
    assert!(set.is_excluded(Path::new("keep.tmp"), false));
}
