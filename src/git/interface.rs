//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to the repository for the
//! provider. Every query a data source answers is one call on [`Git`],
//! which returns plain owned values and normalizes git2 failures into
//! [`GitError`] variants that keep the library's own message text.
//!
//! # Error Handling
//!
//! - [`GitError::NotARepo`]: The configured path is not a repository
//! - [`GitError::UnbornHead`]: HEAD does not resolve to a commit yet
//! - [`GitError::InvalidOid`]: A commit hash could not be parsed
//! - [`GitError::ObjectNotFound`]: A commit hash is not in the object database
//! - [`GitError::RemoteNotFound`]: No remote with the requested name
//!
//! # Example
//!
//! ```ignore
//! use gitlocal::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let head = git.head_oid()?;
//! let commit = git.commit_info(&head)?;
//! println!("{} {}", head, commit.date_rfc3339());
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, FixedOffset, SecondsFormat};
use thiserror::Error;

/// Errors from Git operations.
///
/// Every variant carries the message git2 produced so callers can surface
/// the underlying text unchanged.
#[derive(Debug, Error)]
pub enum GitError {
    /// The path does not contain a repository.
    #[error("{message}")]
    NotARepo {
        /// The path that was opened
        path: PathBuf,
        /// The library's error text
        message: String,
    },

    /// HEAD points at a branch with no commits.
    #[error("{message}")]
    UnbornHead {
        /// The library's error text
        message: String,
    },

    /// Commit hash could not be parsed.
    #[error("{message}")]
    InvalidOid {
        /// The hash as supplied
        oid: String,
        /// The library's error text
        message: String,
    },

    /// Object not found in repository.
    #[error("{message}")]
    ObjectNotFound {
        /// The hash as supplied
        oid: String,
        /// The library's error text
        message: String,
    },

    /// No remote with this name is configured.
    #[error("{message}")]
    RemoteNotFound {
        /// The remote name as supplied
        name: String,
        /// The library's error text
        message: String,
    },

    /// Commit author time cannot be represented.
    #[error("commit {oid} has an out of range author time")]
    InvalidTime {
        /// The commit hash
        oid: String,
    },

    /// Internal git2 error.
    #[error("{message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError for resolving HEAD.
    ///
    /// A missing target ref means the branch HEAD names has no commits.
    fn for_head(err: git2::Error) -> Self {
        let message = err.message().to_string();
        match err.code() {
            git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound => {
                GitError::UnbornHead { message }
            }
            _ => GitError::Internal { message },
        }
    }

    /// Create a GitError for an object lookup.
    fn for_object(err: git2::Error, oid: &str) -> Self {
        let message = err.message().to_string();
        match err.code() {
            git2::ErrorCode::NotFound => GitError::ObjectNotFound {
                oid: oid.to_string(),
                message,
            },
            git2::ErrorCode::InvalidSpec | git2::ErrorCode::Ambiguous => GitError::InvalidOid {
                oid: oid.to_string(),
                message,
            },
            _ if err.class() == git2::ErrorClass::Invalid => GitError::InvalidOid {
                oid: oid.to_string(),
                message,
            },
            _ => GitError::Internal { message },
        }
    }

    /// Create a GitError for a remote lookup.
    fn for_remote(err: git2::Error, name: &str) -> Self {
        let message = err.message().to_string();
        match err.code() {
            git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec => GitError::RemoteNotFound {
                name: name.to_string(),
                message,
            },
            _ => GitError::Internal { message },
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Information about a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// The full commit hash
    pub oid: String,
    /// Full commit message, byte for byte as stored
    pub message: String,
    /// Author timestamp in the author's own UTC offset
    pub author_time: DateTime<FixedOffset>,
}

impl CommitInfo {
    /// Author time as RFC 3339 with whole seconds.
    ///
    /// A zero offset renders as `Z`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::DateTime;
    /// use gitlocal::git::CommitInfo;
    ///
    /// let info = CommitInfo {
    ///     oid: "13981df24be0f47a94044d21bacdbc3d9132f162".to_string(),
    ///     message: "Add head data source\n".to_string(),
    ///     author_time: DateTime::parse_from_rfc3339("2025-05-14T09:08:28-04:00").unwrap(),
    /// };
    /// assert_eq!(info.date_rfc3339(), "2025-05-14T09:08:28-04:00");
    /// ```
    pub fn date_rfc3339(&self) -> String {
        self.author_time.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// A configured remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    /// Remote name
    pub name: String,
    /// Configured URLs, in config order, duplicates kept
    pub urls: Vec<String>,
}

/// The Git interface.
///
/// This is the **single point of interaction** with git2. The repository
/// is opened once and only read afterwards. `git2::Repository` is not
/// `Sync`, so reads are serialized through a mutex to let one handle be
/// shared by every data source.
pub struct Git {
    /// Path the repository was opened from
    path: PathBuf,
    /// The underlying git2 repository
    repo: Mutex<git2::Repository>,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git").field("path", &self.path).finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening
    // =========================================================================

    /// Open the repository rooted at `path`.
    ///
    /// The path must be the repository root (or a `.git` directory); parent
    /// directories are not searched.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found at `path`
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::open(path).map_err(|e| GitError::NotARepo {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            repo: Mutex::new(repo),
        })
    }

    fn repo(&self) -> MutexGuard<'_, git2::Repository> {
        // Nothing writes through the handle, so a poisoned lock is still usable.
        self.repo
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // =========================================================================
    // Head
    // =========================================================================

    /// Get the commit hash HEAD currently resolves to.
    ///
    /// # Errors
    ///
    /// - [`GitError::UnbornHead`] if HEAD is unborn (new repository)
    pub fn head_oid(&self) -> Result<String, GitError> {
        let repo = self.repo();
        let head = repo.head().map_err(|e| GitError::for_head(e))?;

        let oid = match head.target() {
            Some(oid) => oid,
            None => head
                .peel_to_commit()
                .map_err(|e| GitError::for_head(e))?
                .id(),
        };

        Ok(oid.to_string())
    }

    // =========================================================================
    // Commits
    // =========================================================================

    /// Look up a commit by its hash.
    ///
    /// The hash is handed to git2 as-is; no validation happens here. The
    /// message is the raw stored text, leading blank lines included.
    ///
    /// # Errors
    ///
    /// - [`GitError::InvalidOid`] if the hash is not hexadecimal
    /// - [`GitError::ObjectNotFound`] if the commit doesn't exist
    pub fn commit_info(&self, oid: &str) -> Result<CommitInfo, GitError> {
        let git_oid = git2::Oid::from_str(oid).map_err(|e| GitError::for_object(e, oid))?;

        let repo = self.repo();
        let commit = repo
            .find_commit(git_oid)
            .map_err(|e| GitError::for_object(e, oid))?;

        let author = commit.author();
        let when = author.when();
        let offset = FixedOffset::east_opt(when.offset_minutes() * 60).ok_or_else(|| {
            GitError::InvalidTime {
                oid: commit.id().to_string(),
            }
        })?;
        let author_time = DateTime::from_timestamp(when.seconds(), 0)
            .ok_or_else(|| GitError::InvalidTime {
                oid: commit.id().to_string(),
            })?
            .with_timezone(&offset);

        Ok(CommitInfo {
            oid: commit.id().to_string(),
            message: String::from_utf8_lossy(commit.message_raw_bytes()).into_owned(),
            author_time,
        })
    }

    // =========================================================================
    // Remotes
    // =========================================================================

    /// Look up a remote by name.
    ///
    /// # Errors
    ///
    /// - [`GitError::RemoteNotFound`] if no such remote is configured
    pub fn remote(&self, name: &str) -> Result<RemoteInfo, GitError> {
        let repo = self.repo();
        let remote = repo
            .find_remote(name)
            .map_err(|e| GitError::for_remote(e, name))?;

        let name = remote.name().unwrap_or(name).to_string();
        let urls = Self::remote_urls(&repo, &name, remote.url())?;

        Ok(RemoteInfo { name, urls })
    }

    /// List every configured remote.
    ///
    /// Remotes come back in the order git2 enumerates them. No extra
    /// sorting is applied, and callers should not rely on the order
    /// staying the same after the repository configuration changes.
    pub fn remotes(&self) -> Result<Vec<RemoteInfo>, GitError> {
        let repo = self.repo();
        let names = repo.remotes()?;

        let mut remotes = Vec::with_capacity(names.len());
        for name in names.iter() {
            let name = name.ok_or_else(|| GitError::Internal {
                message: "remote name is not valid UTF-8".to_string(),
            })?;
            let remote = repo
                .find_remote(name)
                .map_err(|e| GitError::for_remote(e, name))?;
            let urls = Self::remote_urls(&repo, name, remote.url())?;
            remotes.push(RemoteInfo {
                name: name.to_string(),
                urls,
            });
        }

        Ok(remotes)
    }

    /// Read every `remote.<name>.url` entry from the repository config.
    ///
    /// git2's `Remote` only exposes the first URL, so the multivar is read
    /// directly. Falls back to `primary` when the local config has no entry
    /// (e.g. the URL comes from an `insteadOf` rewrite or a global file).
    fn remote_urls(
        repo: &git2::Repository,
        name: &str,
        primary: Option<&str>,
    ) -> Result<Vec<String>, GitError> {
        let config = repo.config()?;
        let local = match config.open_level(git2::ConfigLevel::Local) {
            Ok(local) => local,
            Err(e) if e.code() == git2::ErrorCode::NotFound => config,
            Err(e) => return Err(e.into()),
        };

        let key = format!("remote.{}.url", name);
        let mut urls = Vec::new();
        match local.multivar(&key, None) {
            Ok(entries) => {
                entries.for_each(|entry| {
                    if let Some(value) = entry.value() {
                        urls.push(value.to_string());
                    }
                })?;
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        if urls.is_empty() {
            if let Some(url) = primary {
                urls.push(url.to_string());
            }
        }

        Ok(urls)
    }
}
