//! Candidate directories and the filesystem probe
//!
//! A candidate is an ordered list of path fragments. Probing a candidate
//! creates the directory tree and verifies it can be written to; the first
//! candidate that passes wins.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::{LogError, LogResult};

/// One attempt in a directory fallback chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    fragments: Vec<Option<PathBuf>>,
}

impl CandidatePath {
    /// Create a candidate from raw fragments
    ///
    /// A `None` fragment marks a value (usually an environment variable)
    /// that was not available.
    pub fn new(fragments: Vec<Option<PathBuf>>) -> Self {
        Self { fragments }
    }

    /// Create a candidate rooted at an optional base directory
    pub fn rooted(root: Option<&Path>, rest: &[&str]) -> Self {
        let mut fragments = Vec::with_capacity(rest.len() + 1);
        fragments.push(root.map(Path::to_path_buf));
        fragments.extend(rest.iter().map(|s| Some(PathBuf::from(s))));
        Self { fragments }
    }

    /// Get the raw fragments
    pub fn fragments(&self) -> &[Option<PathBuf>] {
        &self.fragments
    }

    /// Join the fragments into a single path
    ///
    /// Returns `None` when any fragment is missing or empty, so an unset
    /// variable never degrades into a relative path.
    pub fn join(&self) -> Option<PathBuf> {
        if self.fragments.is_empty() {
            return None;
        }
        let mut path = PathBuf::new();
        for fragment in &self.fragments {
            match fragment {
                Some(part) if !part.as_os_str().is_empty() => path.push(part),
                _ => return None,
            }
        }
        Some(path)
    }
}

/// Decides whether a candidate can host log files
pub trait Probe {
    /// Returns the usable directory, or `None` so the caller can move on
    fn probe(&self, candidate: &CandidatePath) -> Option<PathBuf>;
}

impl<F> Probe for F
where
    F: Fn(&CandidatePath) -> Option<PathBuf>,
{
    fn probe(&self, candidate: &CandidatePath) -> Option<PathBuf> {
        self(candidate)
    }
}

/// Probe backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FsProbe {
    pub fn new() -> Self {
        Self
    }

    /// Create `path` and check that it is writable
    pub fn prepare(&self, path: &Path) -> LogResult<PathBuf> {
        create_dir_tree(path)?;
        check_writable(path)?;
        Ok(path.to_path_buf())
    }
}

impl Probe for FsProbe {
    fn probe(&self, candidate: &CandidatePath) -> Option<PathBuf> {
        let path = candidate.join()?;
        self.prepare(&path).ok()
    }
}

/// Try candidates in order and return the first directory the probe accepts
///
/// Candidates after the first success are never probed.
pub fn first_writable<P>(probe: &P, candidates: &[CandidatePath]) -> Option<PathBuf>
where
    P: Probe + ?Sized,
{
    candidates.iter().find_map(|candidate| probe.probe(candidate))
}

/// Create every missing directory in `path`, one segment at a time from the root
pub fn create_dir_tree(path: &Path) -> LogResult<()> {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        if matches!(component, Component::Prefix(_) | Component::RootDir) {
            continue;
        }

        match fs::create_dir(&current) {
            Ok(()) => {}
            Err(_) if current.is_dir() => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists || current.exists() => {
                return Err(LogError::PathConflict(current));
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// Verify the current process can create files in `dir`
pub fn check_writable(dir: &Path) -> LogResult<()> {
    let marker = dir.join(format!(".write-test-{}", std::process::id()));
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&marker)?;
    fs::remove_file(&marker)?;
    Ok(())
}
