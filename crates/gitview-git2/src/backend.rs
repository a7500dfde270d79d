use git2::{BranchType, ErrorCode, Repository};
use gitview_core::domain::{BranchEntry, Commit, CommitId};
use gitview_core::error::{Error, ErrorKind};
use gitview_core::services::{GitBackend, Result};
use std::path::Path;

#[derive(Default)]
pub struct Git2Backend;

fn open(workdir: &Path) -> Result<Repository> {
    Repository::open(workdir).map_err(|e| match e.code() {
        ErrorCode::NotFound => Error::new(ErrorKind::NotARepository),
        _ => backend_err(e),
    })
}

fn backend_err(e: git2::Error) -> Error {
    Error::new(ErrorKind::Backend(e.message().to_string()))
}

impl GitBackend for Git2Backend {
    fn is_repository(&self, workdir: &Path) -> Result<bool> {
        // A missing or plain folder fails to open; the library runs
        // in-process, so there is no "backend unreachable" case left.
        Ok(Repository::open(workdir).is_ok())
    }

    fn init_repository(&self, workdir: &Path) -> Result<()> {
        Repository::init(workdir).map_err(backend_err)?;
        Ok(())
    }

    fn list_branches(&self, workdir: &Path) -> Result<Vec<BranchEntry>> {
        let repo = open(workdir)?;

        let mut branches = Vec::new();
        for branch_type in [BranchType::Local, BranchType::Remote] {
            for entry in repo.branches(Some(branch_type)).map_err(backend_err)? {
                let (branch, _) = entry.map_err(backend_err)?;
                // Branch names with invalid utf-8 have no display form; skip.
                let Some(name) = branch.name().map_err(backend_err)? else {
                    continue;
                };
                branches.push(BranchEntry {
                    name: name.to_string(),
                    is_remote: branch_type == BranchType::Remote,
                });
            }
        }
        Ok(branches)
    }

    fn current_branch(&self, workdir: &Path) -> Result<String> {
        let repo = open(workdir)?;
        let head = repo.head().map_err(backend_err)?;
        if head.is_branch()
            && let Some(name) = head.shorthand()
        {
            return Ok(name.to_string());
        }
        Err(Error::new(ErrorKind::Backend(
            "HEAD does not name a branch".into(),
        )))
    }

    fn list_commits(&self, workdir: &Path, branch: &str) -> Result<Vec<Commit>> {
        let repo = open(workdir)?;

        // Fully qualify the ref so a tag or remote ref with the same name
        // can never shadow the requested branch.
        let reference = repo
            .find_reference(&format!("refs/heads/{branch}"))
            .map_err(backend_err)?;
        let tip = reference
            .target()
            .ok_or_else(|| Error::new(ErrorKind::Backend(format!("{branch} is not a direct reference"))))?;

        let mut revwalk = repo.revwalk().map_err(backend_err)?;
        revwalk.push(tip).map_err(backend_err)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid.map_err(backend_err)?;
            let commit = repo.find_commit(oid).map_err(backend_err)?;
            commits.push(Commit {
                id: CommitId(oid.to_string()),
                parent_ids: commit.parent_ids().map(|p| CommitId(p.to_string())).collect(),
                summary: commit.summary().unwrap_or("").to_string(),
                author: commit.author().name().unwrap_or("").to_string(),
                time_unix: commit.time().seconds(),
            });
        }
        Ok(commits)
    }
}
