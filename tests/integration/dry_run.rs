//! Integration tests for dry-run mode

use super::test_utils::list_tree;
use rmchars::action::DryRun;
use rmchars::report::{Outcome, SkipReason};
use rmchars::sanitize::{Classifier, Platform};
use rmchars::tree::{CollisionPolicy, Rewriter};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_dry_run_reports_without_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("bad:name.txt"), "data").unwrap();
    let before = list_tree(root);

    let rewriter = Rewriter::new(Classifier::for_platform(Platform::Posix), CollisionPolicy::Fail);
    let mut action = DryRun::new(Vec::new());
    let report = rewriter.run(root, &mut action).unwrap();

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].from, root.join("bad:name.txt"));
    assert_eq!(report.entries[0].to, root.join("badname.txt"));
    assert_eq!(report.entries[0].outcome, Outcome::WouldRename);

    let printed = String::from_utf8(action.into_inner()).unwrap();
    assert_eq!(
        printed,
        format!(
            "TESTING: {} to {}\n",
            root.join("bad:name.txt").display(),
            root.join("badname.txt").display()
        )
    );

    assert_eq!(list_tree(root), before);
}

#[test]
fn test_dry_run_reports_every_conflict_under_fail_policy() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("???"), "").unwrap();
    fs::write(root.join("x:y"), "").unwrap();
    let before = list_tree(root);

    let rewriter = Rewriter::new(Classifier::for_platform(Platform::Posix), CollisionPolicy::Fail);
    let mut action = DryRun::new(Vec::new());
    let report = rewriter.run(root, &mut action).unwrap();

    let outcomes: Vec<_> = report
        .entries
        .iter()
        .map(|e| (e.from.file_name().unwrap().to_string_lossy().into_owned(), e.outcome))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("???".to_string(), Outcome::WouldFail(SkipReason::EmptyName)),
            ("x:y".to_string(), Outcome::WouldRename),
        ]
    );

    let printed = String::from_utf8(action.into_inner()).unwrap();
    let lines: Vec<_> = printed.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("(would fail: empty name)"));
    assert!(lines[1].ends_with(&format!("{}", root.join("xy").display())));
    assert_eq!(list_tree(root), before);
}
