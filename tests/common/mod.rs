//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Author date used for commits made with [`TestRepo::commit_at`].
pub const FIXED_DATE: &str = "2025-05-14T09:08:28-04:00";

/// Test fixture that creates a real git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test repository with an initial commit on main.
    pub fn new() -> Self {
        let repo = Self::empty();
        repo.commit_file("README.md", "# Test Repo\n", "Initial commit");
        repo
    }

    /// Create a repository with no commits (unborn HEAD).
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "-b", "main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        Self { dir }
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path as a string, as the host would configure it.
    pub fn path_str(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }

    /// Create a file and commit it, returning the new commit hash.
    pub fn commit_file(&self, path: &str, content: &str, message: &str) -> String {
        std::fs::write(self.path().join(path), content).unwrap();
        run_git(self.path(), &["add", path]);
        run_git(self.path(), &["commit", "-m", message]);
        self.head_oid_raw()
    }

    /// Commit with a fixed author date, returning the new commit hash.
    pub fn commit_at(&self, path: &str, message: &str, date: &str) -> String {
        std::fs::write(self.path().join(path), message).unwrap();
        run_git(self.path(), &["add", path]);
        run_git_env(
            self.path(),
            &["commit", "-m", message],
            &[("GIT_AUTHOR_DATE", date), ("GIT_COMMITTER_DATE", date)],
        );
        self.head_oid_raw()
    }

    /// Add a remote with one URL.
    pub fn add_remote(&self, name: &str, url: &str) {
        run_git(self.path(), &["remote", "add", name, url]);
    }

    /// Append another URL to an existing remote.
    pub fn add_remote_url(&self, name: &str, url: &str) {
        let key = format!("remote.{}.url", name);
        run_git(self.path(), &["config", "--add", &key, url]);
    }

    /// Run an arbitrary git command in the repository.
    pub fn git(&self, args: &[&str]) {
        run_git(self.path(), args);
    }

    /// Write a commit object with an exact message, bypassing git's
    /// message cleanup. The commit reuses HEAD's tree and is not checked out.
    pub fn commit_raw_message(&self, message: &str) -> String {
        let tree = self.git_output(&["rev-parse", "HEAD^{tree}"]);
        let parent = self.head_oid_raw();
        let object = format!(
            "tree {}\nparent {}\n\
             author Test User <test@example.com> 1747228108 -0400\n\
             committer Test User <test@example.com> 1747228108 -0400\n\n{}",
            tree, parent, message
        );

        let mut child = Command::new("git")
            .args(["hash-object", "-t", "commit", "-w", "--stdin", "--literally"])
            .current_dir(self.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .expect("git hash-object failed to start");
        child
            .stdin
            .take()
            .unwrap()
            .write_all(object.as_bytes())
            .unwrap();
        let output = child.wait_with_output().expect("git hash-object failed");
        assert!(output.status.success(), "git hash-object failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    /// Run git and return trimmed stdout.
    pub fn git_output(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("git command failed");
        assert!(output.status.success(), "git {:?} failed", args);
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    /// Get HEAD OID using git directly.
    pub fn head_oid_raw(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }
}

/// Run a git command in the given directory.
pub fn run_git(dir: &Path, args: &[&str]) {
    run_git_env(dir, args, &[]);
}

/// Run a git command with extra environment variables.
pub fn run_git_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) {
    let output = Command::new("git")
        .args(args)
        .envs(env.iter().copied())
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
