//! Integration tests for the Git interface.
//!
//! These tests use real git repositories created via tempfile to verify
//! that the Git interface works correctly with actual git operations.

mod common;

use chrono::DateTime;
use tempfile::TempDir;

use common::{TestRepo, FIXED_DATE};
use gitlocal::git::{Git, GitError};

// =============================================================================
// Repository Opening Tests
// =============================================================================

#[test]
fn open_valid_repository() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path());
    assert!(git.is_ok());
}

#[test]
fn open_non_repository_fails() {
    let dir = TempDir::new().unwrap();
    let git = Git::open(dir.path());
    assert!(matches!(git, Err(GitError::NotARepo { .. })));
}

#[test]
fn open_does_not_search_parents() {
    let repo = TestRepo::new();
    let subdir = repo.path().join("subdir");
    std::fs::create_dir(&subdir).unwrap();

    assert!(matches!(
        Git::open(&subdir),
        Err(GitError::NotARepo { .. })
    ));
}

// =============================================================================
// Head Tests
// =============================================================================

#[test]
fn head_oid_matches_rev_parse() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path()).unwrap();

    let head = git.head_oid().unwrap();
    assert_eq!(head, repo.head_oid_raw());
    assert_eq!(head.len(), 40);
    assert!(head.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn head_follows_new_commits_without_reopening() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path()).unwrap();
    let before = git.head_oid().unwrap();

    let after = repo.commit_file("a.txt", "a", "Second commit");

    assert_ne!(before, after);
    assert_eq!(git.head_oid().unwrap(), after);
}

#[test]
fn head_on_detached_checkout() {
    let repo = TestRepo::new();
    let first = repo.head_oid_raw();
    repo.commit_file("a.txt", "a", "Second commit");
    repo.git(&["checkout", "--detach", &first]);

    let git = Git::open(repo.path()).unwrap();
    assert_eq!(git.head_oid().unwrap(), first);
}

#[test]
fn unborn_head_is_an_error() {
    let repo = TestRepo::empty();
    let git = Git::open(repo.path()).unwrap();

    assert!(matches!(git.head_oid(), Err(GitError::UnbornHead { .. })));
}

// =============================================================================
// Commit Tests
// =============================================================================

#[test]
fn commit_info_keeps_author_offset() {
    let repo = TestRepo::new();
    let oid = repo.commit_at("dated.txt", "Add head data source", FIXED_DATE);
    let git = Git::open(repo.path()).unwrap();

    let info = git.commit_info(&oid).unwrap();
    assert_eq!(info.oid, oid);
    assert_eq!(info.date_rfc3339(), FIXED_DATE);
    assert_eq!(
        info.author_time,
        DateTime::parse_from_rfc3339(FIXED_DATE).unwrap()
    );
}

#[test]
fn commit_message_is_verbatim() {
    let repo = TestRepo::new();
    let oid = repo.commit_file("a.txt", "a", "Add head data source");
    let git = Git::open(repo.path()).unwrap();

    let info = git.commit_info(&oid).unwrap();
    assert_eq!(info.message, "Add head data source\n");
}

#[test]
fn commit_message_keeps_leading_blank_lines() {
    let repo = TestRepo::new();
    let oid = repo.commit_raw_message("\n\nhello\n");
    let git = Git::open(repo.path()).unwrap();

    let info = git.commit_info(&oid).unwrap();
    assert_eq!(info.message, "\n\nhello\n");
    assert_eq!(info.date_rfc3339(), "2025-05-14T09:08:28-04:00");
}

#[test]
fn commit_multiline_message() {
    let repo = TestRepo::new();
    let oid = repo.commit_file("a.txt", "a", "Subject\n\nBody line one\nBody line two");
    let git = Git::open(repo.path()).unwrap();

    let info = git.commit_info(&oid).unwrap();
    assert_eq!(info.message, "Subject\n\nBody line one\nBody line two\n");
}

#[test]
fn unknown_commit_is_not_found() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path()).unwrap();

    let result = git.commit_info("0123456789abcdef0123456789abcdef01234567");
    assert!(matches!(result, Err(GitError::ObjectNotFound { .. })));
}

#[test]
fn malformed_hash_is_invalid() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path()).unwrap();

    let result = git.commit_info("not-a-hash");
    match result {
        Err(GitError::InvalidOid { oid, message }) => {
            assert_eq!(oid, "not-a-hash");
            assert!(!message.is_empty());
        }
        other => panic!("unexpected {:?}", other),
    }
}

// =============================================================================
// Remote Tests
// =============================================================================

#[test]
fn single_remote_single_url() {
    let repo = TestRepo::new();
    repo.add_remote("origin", "https://example.com/org/repo.git");
    let git = Git::open(repo.path()).unwrap();

    let remote = git.remote("origin").unwrap();
    assert_eq!(remote.name, "origin");
    assert_eq!(remote.urls, vec!["https://example.com/org/repo.git"]);
}

#[test]
fn remote_urls_keep_order_and_duplicates() {
    let repo = TestRepo::new();
    repo.add_remote("origin", "https://example.com/b.git");
    repo.add_remote_url("origin", "https://example.com/a.git");
    repo.add_remote_url("origin", "https://example.com/b.git");
    let git = Git::open(repo.path()).unwrap();

    let remote = git.remote("origin").unwrap();
    assert_eq!(
        remote.urls,
        vec![
            "https://example.com/b.git",
            "https://example.com/a.git",
            "https://example.com/b.git",
        ]
    );
}

#[test]
fn push_only_remote_has_no_urls() {
    let repo = TestRepo::new();
    repo.git(&["config", "remote.mirror.pushurl", "https://example.com/mirror.git"]);
    let git = Git::open(repo.path()).unwrap();

    let remote = git.remote("mirror").unwrap();
    assert_eq!(remote.name, "mirror");
    assert!(remote.urls.is_empty());
}

#[test]
fn unknown_remote_is_not_found() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path()).unwrap();

    match git.remote("upstream") {
        Err(GitError::RemoteNotFound { name, .. }) => assert_eq!(name, "upstream"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn no_remotes_lists_empty() {
    let repo = TestRepo::new();
    let git = Git::open(repo.path()).unwrap();

    assert!(git.remotes().unwrap().is_empty());
}

#[test]
fn remotes_lists_every_remote() {
    let repo = TestRepo::new();
    repo.add_remote("origin", "https://example.com/origin.git");
    repo.add_remote("upstream", "https://example.com/upstream.git");
    repo.add_remote_url("upstream", "git@example.com:upstream.git");
    let git = Git::open(repo.path()).unwrap();

    // Enumeration order belongs to git2; compare without relying on it.
    let mut remotes = git.remotes().unwrap();
    remotes.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(remotes.len(), 2);
    assert_eq!(remotes[0].name, "origin");
    assert_eq!(remotes[0].urls, vec!["https://example.com/origin.git"]);
    assert_eq!(remotes[1].name, "upstream");
    assert_eq!(
        remotes[1].urls,
        vec![
            "https://example.com/upstream.git",
            "git@example.com:upstream.git"
        ]
    );
}

#[test]
fn non_utf8_remote_name_is_an_error() {
    let repo = TestRepo::new();
    repo.add_remote("origin", "https://example.com/origin.git");

    let config = repo.path().join(".git").join("config");
    let mut contents = std::fs::read(&config).unwrap();
    contents.extend_from_slice(b"[remote \"caf\xe9\"]\n\turl = https://example.com/latin1.git\n");
    std::fs::write(&config, contents).unwrap();

    let git = Git::open(repo.path()).unwrap();
    assert!(matches!(git.remotes(), Err(GitError::Internal { .. })));
}
