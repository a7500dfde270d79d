use gitview_core::domain::{BranchEntry, Commit, WorkspacePane};
use gitview_core::error::Error;
use gitview_core::services::NoticeKind;
use std::path::PathBuf;

/// Inputs to the reducer: user intents plus completion messages from the
/// effect scheduler. Completion messages carry the input snapshot that
/// spawned them so the reducer can discard stale results.
#[derive(Debug)]
pub enum Msg {
    RestoreSession {
        recent_repos: Vec<PathBuf>,
    },

    OpenRepoRequested,
    FolderPicked {
        selection: Option<PathBuf>,
    },
    RepoDetected {
        path: PathBuf,
        result: Result<bool, Error>,
    },
    InitDecision {
        path: PathBuf,
        accepted: bool,
    },
    RepoInitialized {
        path: PathBuf,
        result: Result<(), Error>,
    },

    OpenRecentRepo {
        path: PathBuf,
    },
    SelectWorkspace {
        pane: WorkspacePane,
    },

    BranchesLoaded {
        path: PathBuf,
        result: Result<Vec<BranchEntry>, Error>,
    },
    CurrentBranchLoaded {
        path: PathBuf,
        result: Result<String, Error>,
    },
    CommitLogLoaded {
        path: PathBuf,
        branch: String,
        result: Result<Vec<Commit>, Error>,
    },
}

/// Work the reducer hands to the effect runner. Each variant resolves into
/// exactly one completion `Msg`, except `Notify` which is fire-and-forget.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    PickFolder,
    DetectRepo {
        path: PathBuf,
    },
    ConfirmInit {
        path: PathBuf,
    },
    InitRepo {
        path: PathBuf,
    },
    Notify {
        kind: NoticeKind,
        text: String,
    },
    LoadBranches {
        path: PathBuf,
    },
    LoadCurrentBranch {
        path: PathBuf,
    },
    LoadCommitLog {
        path: PathBuf,
        branch: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoreEvent {
    StateChanged,
}
