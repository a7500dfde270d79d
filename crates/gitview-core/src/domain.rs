use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RepoSpec {
    pub workdir: PathBuf,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CommitId(pub String);

impl CommitId {
    /// Abbreviated form for display. The full id remains the identity.
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    pub id: CommitId,
    pub parent_ids: Vec<CommitId>,
    pub summary: String,
    pub author: String,
    pub time_unix: i64,
}

impl Commit {
    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() > 1
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BranchEntry {
    pub name: String,
    pub is_remote: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum WorkspacePane {
    #[default]
    WorkingCopy,
    History,
    Stash,
}
