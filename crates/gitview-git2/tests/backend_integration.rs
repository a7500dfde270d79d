use gitview_core::services::GitBackend;
use gitview_git2::Git2Backend;
use std::path::Path;
use std::process::Command;

fn run_git(repo: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_SYSTEM", "/dev/null")
        .env("GIT_TERMINAL_PROMPT", "0")
        .env("GIT_EDITOR", "true")
        .status()
        .expect("git command to run");
    assert!(status.success(), "git {args:?} failed");
}

fn commit_file(repo: &Path, name: &str, contents: &str, message: &str) {
    std::fs::write(repo.join(name), contents).unwrap();
    run_git(repo, &["add", name]);
    run_git(
        repo,
        &["-c", "commit.gpgsign=false", "commit", "-m", message],
    );
}

fn init_repo(repo: &Path) {
    std::fs::create_dir_all(repo).unwrap();
    run_git(repo, &["init", "-b", "main"]);
    run_git(repo, &["config", "user.email", "you@example.com"]);
    run_git(repo, &["config", "user.name", "You"]);
    run_git(repo, &["config", "commit.gpgsign", "false"]);
}

#[test]
fn detects_repositories_and_initializes_new_ones() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Git2Backend;

    let plain = dir.path().join("plain");
    std::fs::create_dir_all(&plain).unwrap();
    assert!(!backend.is_repository(&plain).unwrap());
    assert!(!backend.is_repository(&dir.path().join("missing")).unwrap());

    backend.init_repository(&plain).unwrap();
    assert!(backend.is_repository(&plain).unwrap());
}

#[test]
fn lists_local_and_remote_branches_with_classification() {
    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path().join("repo");
    let origin = dir.path().join("origin.git");
    init_repo(&repo);
    commit_file(&repo, "a.txt", "one\n", "A");
    run_git(&repo, &["branch", "feature"]);

    run_git(
        dir.path(),
        &["init", "--bare", "-b", "main", origin.to_str().unwrap()],
    );
    run_git(&repo, &["remote", "add", "origin", origin.to_str().unwrap()]);
    run_git(&repo, &["push", "origin", "main"]);
    run_git(&repo, &["fetch", "origin"]);

    let backend = Git2Backend;
    let branches = backend.list_branches(&repo).unwrap();

    let local: Vec<&str> = branches
        .iter()
        .filter(|b| !b.is_remote)
        .map(|b| b.name.as_str())
        .collect();
    let remote: Vec<&str> = branches
        .iter()
        .filter(|b| b.is_remote)
        .map(|b| b.name.as_str())
        .collect();

    assert!(local.contains(&"main"), "missing local main: {local:?}");
    assert!(
        local.contains(&"feature"),
        "missing local feature: {local:?}"
    );
    assert!(
        remote.contains(&"origin/main"),
        "missing remote-tracking branch: {remote:?}"
    );
}

#[test]
fn current_branch_follows_head_and_fails_when_detached() {
    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path().join("repo");
    init_repo(&repo);
    commit_file(&repo, "a.txt", "one\n", "A");

    let backend = Git2Backend;
    assert_eq!(backend.current_branch(&repo).unwrap(), "main");

    run_git(&repo, &["checkout", "-b", "feature"]);
    assert_eq!(backend.current_branch(&repo).unwrap(), "feature");

    run_git(&repo, &["checkout", "--detach", "HEAD"]);
    assert!(backend.current_branch(&repo).is_err());
}

#[test]
fn list_commits_is_reverse_chronological_and_tracks_parents() {
    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path().join("repo");
    init_repo(&repo);
    commit_file(&repo, "a.txt", "one\n", "first");
    commit_file(&repo, "b.txt", "two\n", "second");

    run_git(&repo, &["checkout", "-b", "side", "HEAD~1"]);
    commit_file(&repo, "c.txt", "three\n", "side work");
    run_git(&repo, &["checkout", "main"]);
    run_git(
        &repo,
        &[
            "-c",
            "commit.gpgsign=false",
            "merge",
            "--no-ff",
            "-m",
            "merge side",
            "side",
        ],
    );

    let backend = Git2Backend;
    let commits = backend.list_commits(&repo, "main").unwrap();
    assert_eq!(commits.len(), 4);

    let summaries: Vec<&str> = commits.iter().map(|c| c.summary.as_str()).collect();
    assert_eq!(summaries[0], "merge side");
    assert_eq!(*summaries.last().unwrap(), "first");

    assert!(commits[0].is_merge());
    assert_eq!(commits[0].parent_ids.len(), 2);
    assert_eq!(commits.iter().filter(|c| c.is_merge()).count(), 1);
    assert!(commits.last().unwrap().parent_ids.is_empty());

    assert!(commits.iter().all(|c| c.id.0.len() == 40));
    assert!(commits.iter().all(|c| c.author == "You"));
    assert!(commits.windows(2).all(|w| w[0].time_unix >= w[1].time_unix));
}

#[test]
fn commit_subjects_may_contain_control_characters() {
    // git permits arbitrary bytes short of NUL in a subject line; the log
    // must return such commits intact instead of failing.
    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path().join("repo");
    init_repo(&repo);

    let subject = "fix \u{1f} separator handling";
    commit_file(&repo, "a.txt", "one\n", subject);

    let backend = Git2Backend;
    let commits = backend.list_commits(&repo, "main").unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].summary, subject);
    assert!(commits[0].parent_ids.is_empty());
}

#[test]
fn list_commits_for_unknown_branch_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path().join("repo");
    init_repo(&repo);
    commit_file(&repo, "a.txt", "one\n", "A");

    let backend = Git2Backend;
    assert!(backend.list_commits(&repo, "no-such-branch").is_err());
}
