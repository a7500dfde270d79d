use gitview_core::domain::*;
use std::collections::HashSet;

#[test]
fn commit_id_is_hashable() {
    let mut set = HashSet::new();
    set.insert(CommitId("a".into()));
    set.insert(CommitId("b".into()));
    assert!(set.contains(&CommitId("a".into())));
}

#[test]
fn commit_id_short_truncates_long_ids_only() {
    let full = CommitId("0123456789abcdef0123456789abcdef01234567".into());
    assert_eq!(full.short(), "0123456");

    let tiny = CommitId("abc".into());
    assert_eq!(tiny.short(), "abc");
}

#[test]
fn merge_commits_have_more_than_one_parent() {
    let commit = Commit {
        id: CommitId("1".into()),
        parent_ids: vec![CommitId("0".into())],
        summary: "test".into(),
        author: "me".into(),
        time_unix: 1,
    };
    assert!(!commit.is_merge());

    let merge = Commit {
        parent_ids: vec![CommitId("0".into()), CommitId("0b".into())],
        ..commit
    };
    assert!(merge.is_merge());
}
