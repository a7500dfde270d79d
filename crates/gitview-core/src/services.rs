use crate::domain::*;
use crate::error::Error;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

/// Repository-inspection backend. Every call is keyed by the repository
/// location; the backend holds no per-client state.
pub trait GitBackend: Send + Sync {
    /// Whether `workdir` is a git repository. A missing or unreadable folder
    /// reports `Ok(false)`; failure to reach the backend at all is an error.
    fn is_repository(&self, workdir: &Path) -> Result<bool>;

    fn init_repository(&self, workdir: &Path) -> Result<()>;

    /// All local and remote branches, in backend order.
    fn list_branches(&self, workdir: &Path) -> Result<Vec<BranchEntry>>;

    /// Name of the currently checked-out branch. Detached HEAD is an error.
    fn current_branch(&self, workdir: &Path) -> Result<String>;

    /// Commit log for `branch`, most recent first.
    fn list_commits(&self, workdir: &Path, branch: &str) -> Result<Vec<Commit>>;
}

/// Native folder picker. `None` means the user cancelled.
pub trait FolderPicker: Send + Sync {
    fn pick_folder(&self) -> Option<PathBuf>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Modal dialog primitives supplied by the host shell.
pub trait DialogService: Send + Sync {
    fn show_message(&self, kind: NoticeKind, text: &str);

    fn confirm(&self, text: &str) -> bool;
}
