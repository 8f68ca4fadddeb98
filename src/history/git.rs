use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use gix::ObjectId;
use gix::object::tree::EntryKind;

use super::HistorySource;
use crate::{Result, SlocAuditError};

/// One entry of a tree, reduced to what a diff needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Blob(ObjectId),
    Tree(ObjectId),
}

/// Entries of a single tree level, ordered by name.
type TreeEntries = BTreeMap<String, Node>;

/// Blob-level differences between a commit and its first parent.
#[derive(Debug, Default)]
struct TreeChanges {
    added: Vec<(String, ObjectId)>,
    deleted: Vec<(String, ObjectId)>,
    modified: Vec<String>,
}

impl TreeChanges {
    /// Paths in `git log --name-only` form, sorted.
    ///
    /// A deleted path whose exact blob reappears under an added path is a
    /// rename, and only the new path is reported.
    fn into_paths(self) -> Vec<String> {
        let added_blobs: HashSet<ObjectId> = self.added.iter().map(|(_, oid)| *oid).collect();

        let mut paths = self.modified;
        paths.extend(self.added.into_iter().map(|(path, _)| path));
        paths.extend(
            self.deleted
                .into_iter()
                .filter(|(_, oid)| !added_blobs.contains(oid))
                .map(|(path, _)| path),
        );
        paths.sort();
        paths
    }
}

/// Change history read from the git repository enclosing a path.
///
/// Walks from `HEAD` newest-first. Every non-merge commit contributes the
/// paths whose blob differs from its first parent, matching what
/// `git log --name-only` prints. Root commits contribute every file.
#[derive(Debug, Clone)]
pub struct GitHistory {
    start: PathBuf,
}

impl GitHistory {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            start: path.to_path_buf(),
        }
    }

    fn discover_repo(&self) -> Result<gix::Repository> {
        gix::discover(&self.start)
            .map_err(|e| SlocAuditError::Git(format!("Failed to discover git repository: {e}")))
    }

    fn tree_id(repo: &gix::Repository, commit: ObjectId) -> Result<ObjectId> {
        repo.find_commit(commit)
            .map_err(|e| SlocAuditError::Git(format!("Failed to find commit {commit}: {e}")))?
            .tree_id()
            .map(gix::Id::detach)
            .map_err(|e| SlocAuditError::Git(format!("Failed to get tree for {commit}: {e}")))
    }

    fn read_entries(repo: &gix::Repository, tree: Option<ObjectId>) -> Result<TreeEntries> {
        let mut entries = TreeEntries::new();
        let Some(id) = tree else {
            return Ok(entries);
        };

        let tree = repo
            .find_tree(id)
            .map_err(|e| SlocAuditError::Git(format!("Failed to find tree {id}: {e}")))?;
        for entry in tree.iter() {
            let entry = entry
                .map_err(|e| SlocAuditError::Git(format!("Failed to read tree entry: {e}")))?;
            let oid: ObjectId = entry.oid().into();
            let node = match entry.mode().kind() {
                EntryKind::Blob | EntryKind::BlobExecutable | EntryKind::Link => Node::Blob(oid),
                EntryKind::Tree => Node::Tree(oid),
                // Submodules are not files of this repository.
                EntryKind::Commit => continue,
            };
            entries.insert(String::from_utf8_lossy(entry.filename()).into_owned(), node);
        }
        Ok(entries)
    }

    /// Diff two trees, descending only into subtrees whose ids differ.
    fn diff_trees(
        repo: &gix::Repository,
        current: Option<ObjectId>,
        parent: Option<ObjectId>,
        prefix: &str,
        changes: &mut TreeChanges,
    ) -> Result<()> {
        if current == parent {
            return Ok(());
        }

        let mut current = Self::read_entries(repo, current)?;
        let parent = Self::read_entries(repo, parent)?;

        for (name, old) in parent {
            let path = join_path(prefix, &name);
            match (current.remove(&name), old) {
                (Some(new), old) if new == old => {}
                (Some(Node::Blob(_)), Node::Blob(_)) => changes.modified.push(path),
                (Some(Node::Tree(new)), Node::Tree(old)) => {
                    Self::diff_trees(repo, Some(new), Some(old), &path, changes)?;
                }
                (Some(Node::Blob(new)), Node::Tree(old)) => {
                    changes.added.push((path.clone(), new));
                    Self::diff_trees(repo, None, Some(old), &path, changes)?;
                }
                (Some(Node::Tree(new)), Node::Blob(old)) => {
                    changes.deleted.push((path.clone(), old));
                    Self::diff_trees(repo, Some(new), None, &path, changes)?;
                }
                (None, Node::Blob(old)) => changes.deleted.push((path, old)),
                (None, Node::Tree(old)) => {
                    Self::diff_trees(repo, None, Some(old), &path, changes)?;
                }
            }
        }

        // Whatever is left exists only in the current tree.
        for (name, new) in current {
            let path = join_path(prefix, &name);
            match new {
                Node::Blob(oid) => changes.added.push((path, oid)),
                Node::Tree(oid) => Self::diff_trees(repo, Some(oid), None, &path, changes)?,
            }
        }
        Ok(())
    }

    fn commit_changes(
        repo: &gix::Repository,
        commit: ObjectId,
        parent: Option<ObjectId>,
    ) -> Result<Vec<String>> {
        let current = Self::tree_id(repo, commit)?;
        let parent = parent.map(|id| Self::tree_id(repo, id)).transpose()?;

        let mut changes = TreeChanges::default();
        Self::diff_trees(repo, Some(current), parent, "", &mut changes)?;
        Ok(changes.into_paths())
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

impl HistorySource for GitHistory {
    fn modified_paths(&self) -> Result<Vec<String>> {
        let repo = self.discover_repo()?;
        let head = repo
            .head_id()
            .map_err(|e| SlocAuditError::Git(format!("Failed to resolve HEAD: {e}")))?;
        let walk = repo
            .rev_walk([head.detach()])
            .all()
            .map_err(|e| SlocAuditError::Git(format!("Failed to walk history: {e}")))?;

        let mut modified = Vec::new();
        for info in walk {
            let info =
                info.map_err(|e| SlocAuditError::Git(format!("Failed to walk history: {e}")))?;
            let parents: Vec<ObjectId> = info.parent_ids().map(gix::Id::detach).collect();
            // Merges list nothing, as with `git log --name-only`.
            if parents.len() > 1 {
                continue;
            }

            modified.extend(Self::commit_changes(&repo, info.id, parents.first().copied())?);
        }

        Ok(modified)
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
