use gitview_core::domain::{BranchEntry, Commit};
use gitview_core::error::{Error, ErrorKind};
use gitview_core::services::{GitBackend, Result};
use std::path::Path;

#[derive(Default)]
pub struct NoopBackend;

fn unsupported<T>() -> Result<T> {
    Err(Error::new(ErrorKind::Unsupported(
        "No Git backend enabled. Build with `--features git2`.",
    )))
}

impl GitBackend for NoopBackend {
    fn is_repository(&self, _workdir: &Path) -> Result<bool> {
        unsupported()
    }

    fn init_repository(&self, _workdir: &Path) -> Result<()> {
        unsupported()
    }

    fn list_branches(&self, _workdir: &Path) -> Result<Vec<BranchEntry>> {
        unsupported()
    }

    fn current_branch(&self, _workdir: &Path) -> Result<String> {
        unsupported()
    }

    fn list_commits(&self, _workdir: &Path, _branch: &str) -> Result<Vec<Commit>> {
        unsupported()
    }
}
