//! Integration tests for re-running after a partial pass

use super::test_utils::{build_tree, list_tree};
use rmchars::action::Quiet;
use rmchars::error::RmcharsError;
use rmchars::sanitize::{Classifier, Platform};
use rmchars::tree::{CollisionPolicy, Rewriter};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn rewriter(policy: CollisionPolicy) -> Rewriter {
    Rewriter::new(Classifier::for_platform(Platform::Posix), policy)
}

#[test]
fn test_second_pass_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    build_tree(root, &["one^"], &["one^/two\u{7}.txt", "three😇.txt"]);

    rewriter(CollisionPolicy::Fail).run(root, &mut Quiet).unwrap();
    let after_first = list_tree(root);

    let report = rewriter(CollisionPolicy::Fail).run(root, &mut Quiet).unwrap();
    assert!(report.entries.is_empty());
    assert_eq!(list_tree(root), after_first);
    assert_eq!(
        after_first,
        vec![
            PathBuf::from("one"),
            PathBuf::from("one/two.txt"),
            PathBuf::from("three.txt"),
        ]
    );
}

#[test]
fn test_rerun_resumes_after_fixing_collision() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    build_tree(root, &[], &["a.txt", "a?.txt", "b:.txt"]);

    let err = rewriter(CollisionPolicy::Fail).run(root, &mut Quiet).unwrap_err();
    assert!(matches!(err, RmcharsError::TargetExists { .. }));

    fs::remove_file(root.join("a.txt")).unwrap();
    let report = rewriter(CollisionPolicy::Fail).run(root, &mut Quiet).unwrap();
    assert_eq!(report.summary().renamed, 2);
    assert_eq!(
        list_tree(root),
        vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
    );
}
