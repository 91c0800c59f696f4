//! Browser view-state controller.

use std::collections::HashSet;
use std::sync::Arc;

use filedeck_client::store::FileStore;
use filedeck_core::result::AppResult;
use filedeck_entity::api::DeleteResult;
use filedeck_entity::file::FileRecord;
use filedeck_entity::tree::TreeNode;

use crate::tree::build_tree;

/// Fetch lifecycle of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No data requested yet.
    Idle,
    /// A listing request is in flight.
    Loading,
    /// Records are populated.
    Ready,
    /// The last listing failed; records are empty.
    Error,
}

/// Owns the mutable browsing state and mediates between the remote store
/// and the tree builder.
///
/// All state transitions go through `&mut self` methods; the presentation
/// layer reads snapshots through the accessor methods and never mutates
/// state directly. The tree is fully rebuilt from the current record list
/// on every [`tree`](Self::tree) call — it is never patched incrementally,
/// so the rendered hierarchy cannot drift from the records it was derived
/// from.
pub struct FileBrowser {
    /// Remote store collaborator.
    store: Arc<dyn FileStore>,
    /// Key prefix passed to listing calls.
    prefix: String,
    /// Listing page size.
    limit: u32,
    /// Current record list.
    records: Vec<Arc<FileRecord>>,
    /// Fetch lifecycle phase.
    phase: LoadPhase,
    /// Paths of folders currently shown open.
    expanded: HashSet<String>,
}

impl std::fmt::Debug for FileBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileBrowser")
            .field("prefix", &self.prefix)
            .field("records", &self.records.len())
            .field("phase", &self.phase)
            .finish()
    }
}

impl FileBrowser {
    /// Creates an idle browser over a store.
    pub fn new(store: Arc<dyn FileStore>, prefix: impl Into<String>, limit: u32) -> Self {
        Self {
            store,
            prefix: prefix.into(),
            limit,
            records: Vec::new(),
            phase: LoadPhase::Idle,
            expanded: HashSet::new(),
        }
    }

    /// Re-fetch the record list.
    ///
    /// On success the expansion set is reset to exactly the top-level
    /// folder paths of the rebuilt tree. Nested folders the caller opened
    /// earlier come back collapsed — the reset is a one-shot default
    /// applied on every refresh, kept as-is pending product clarification.
    /// On failure the records are cleared and the error is returned for
    /// the front end to surface.
    pub async fn refresh(&mut self) -> AppResult<()> {
        self.phase = LoadPhase::Loading;
        match self.store.list(&self.prefix, self.limit).await {
            Ok(records) => {
                self.records = records.into_iter().map(Arc::new).collect();
                self.expanded = build_tree(&self.records)
                    .iter()
                    .filter_map(|node| match node {
                        TreeNode::Folder(folder) => Some(folder.path.clone()),
                        TreeNode::File(_) => None,
                    })
                    .collect();
                self.phase = LoadPhase::Ready;
                tracing::debug!(records = self.records.len(), "file listing refreshed");
                Ok(())
            }
            Err(err) => {
                self.records.clear();
                self.phase = LoadPhase::Error;
                tracing::warn!(error = %err, "file listing failed");
                Err(err)
            }
        }
    }

    /// Flip a folder's open/closed state.
    ///
    /// Independent of the fetch phase. A path that no folder in the
    /// current tree carries is recorded anyway and stays inert — expansion
    /// state keys on path strings, not on tree nodes.
    pub fn toggle(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    /// Delete a file by key and drop it from the loaded records.
    ///
    /// The removal happens only after the store confirms the delete, and
    /// removes exactly one matching record. A key no longer present — for
    /// example when a refresh replaced the records while the delete was in
    /// flight — is a silent no-op. Expansion state is left untouched; a
    /// folder emptied by the removal simply disappears from the next
    /// rebuild, leaving its path inert in the expansion set.
    pub async fn delete(&mut self, key: &str) -> AppResult<DeleteResult> {
        let result = self.store.delete(key).await?;
        if let Some(position) = self.records.iter().position(|r| r.key == key) {
            self.records.remove(position);
        }
        Ok(result)
    }

    /// Request a short-lived download URL for a key. Mutates nothing.
    pub async fn download_url(&self, key: &str) -> AppResult<String> {
        Ok(self.store.download_url(key).await?.url)
    }

    /// Rebuild the tree from the current records.
    pub fn tree(&self) -> Vec<TreeNode> {
        build_tree(&self.records)
    }

    /// The loaded records.
    pub fn records(&self) -> &[Arc<FileRecord>] {
        &self.records
    }

    /// Current fetch phase.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Whether a listing request is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Whether a folder path is currently shown open.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// The set of expanded folder paths.
    pub fn expanded(&self) -> &HashSet<String> {
        &self.expanded
    }
}
