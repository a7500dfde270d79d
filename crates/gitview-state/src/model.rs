use gitview_core::domain::{BranchEntry, Commit, WorkspacePane};
use gitview_core::services::NoticeKind;
use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub recent_repos: RecentRepos,
    pub route: Route,
    pub active_repo: Option<PathBuf>,
    pub workspace: WorkspacePane,
    pub branches: BranchSet,
    pub current_branch: Option<String>,
    pub log: Loadable<Vec<Commit>>,
    pub selection: SelectionPhase,
    pub notices: Vec<Notice>,
    pub diagnostics: Vec<DiagnosticEntry>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Route {
    #[default]
    Welcome,
    RepoDetail {
        path: PathBuf,
    },
}

/// Most-recently-used list of repository locations. No duplicates under
/// path equality, no size cap, no validation of the entries.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecentRepos {
    entries: Vec<PathBuf>,
}

impl RecentRepos {
    pub fn from_entries(entries: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut recents = Self::default();
        for entry in entries {
            if !recents.entries.contains(&entry) {
                recents.entries.push(entry);
            }
        }
        recents
    }

    pub fn add(&mut self, location: PathBuf) {
        self.entries.retain(|p| p != &location);
        self.entries.insert(0, location);
    }

    pub fn list(&self) -> &[PathBuf] {
        &self.entries
    }
}

/// Branch names for one repository, partitioned from a single backend
/// response. Order within each list is backend order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BranchSet {
    pub local: Vec<String>,
    pub remote: Vec<String>,
}

impl BranchSet {
    pub fn partition(entries: Vec<BranchEntry>) -> Self {
        let mut set = Self::default();
        for entry in entries {
            if entry.is_remote {
                set.remote.push(entry.name);
            } else {
                set.local.push(entry.name);
            }
        }
        set
    }
}

/// One attempt of the open-repository flow. Attempts take no lock; starting
/// a new one while another is pending simply resets the phase.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SelectionPhase {
    #[default]
    Idle,
    PickingFolder,
    CheckingRepoStatus {
        path: PathBuf,
    },
    ConfirmingInit {
        path: PathBuf,
    },
    Initializing {
        path: PathBuf,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiagnosticEntry {
    pub time: SystemTime,
    pub kind: DiagnosticKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Loadable<T> {
    #[default]
    NotLoaded,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_repos_add_is_mru_ordered_without_duplicates() {
        let mut recents = RecentRepos::default();
        recents.add(PathBuf::from("/a"));
        recents.add(PathBuf::from("/b"));
        recents.add(PathBuf::from("/a"));

        assert_eq!(
            recents.list(),
            [PathBuf::from("/a"), PathBuf::from("/b")].as_slice()
        );
    }

    #[test]
    fn recent_repos_from_entries_drops_later_duplicates() {
        let recents = RecentRepos::from_entries([
            PathBuf::from("/a"),
            PathBuf::from("/b"),
            PathBuf::from("/a"),
        ]);
        assert_eq!(
            recents.list(),
            [PathBuf::from("/a"), PathBuf::from("/b")].as_slice()
        );
    }

    #[test]
    fn branch_set_partition_preserves_backend_order() {
        let set = BranchSet::partition(vec![
            BranchEntry {
                name: "main".into(),
                is_remote: false,
            },
            BranchEntry {
                name: "origin/main".into(),
                is_remote: true,
            },
            BranchEntry {
                name: "feature".into(),
                is_remote: false,
            },
        ]);
        assert_eq!(set.local, vec!["main".to_string(), "feature".to_string()]);
        assert_eq!(set.remote, vec!["origin/main".to_string()]);
    }
}
