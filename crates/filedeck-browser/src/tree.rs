//! Tree construction from flat storage keys.

use std::cmp::Ordering;
use std::sync::Arc;

use filedeck_entity::file::FileRecord;
use filedeck_entity::tree::{FileNode, FolderNode, TreeNode, SEPARATOR};

/// Build an ordered folder/file tree from a flat record list.
///
/// Keys are split on `/`; every segment except the last names a folder
/// along the walk, the last names the leaf's placement while the display
/// name comes from the record's `filename`. Folders are matched by segment
/// name among the current level's folder children, so identically-named
/// folders under different parents stay distinct. Duplicate keys produce
/// two sibling leaves; the builder does not deduplicate.
///
/// The output is deterministic for a given input: every children list is
/// sorted with folders first (case-insensitive by name, byte order as the
/// tiebreak), then files newest-first, and the sort is stable so
/// equal-timestamp files keep their input order. Input records are never
/// mutated.
pub fn build_tree(records: &[Arc<FileRecord>]) -> Vec<TreeNode> {
    let mut roots: Vec<TreeNode> = Vec::new();

    for record in records {
        let segments: Vec<&str> = record.key.split(SEPARATOR).collect();
        let folders = &segments[..segments.len() - 1];

        let mut level = &mut roots;
        for (depth, name) in folders.iter().enumerate() {
            let position = level
                .iter()
                .position(|node| matches!(node, TreeNode::Folder(f) if f.name == *name));
            let index = match position {
                Some(index) => index,
                None => {
                    let mut path = segments[..=depth].join("/");
                    path.push(SEPARATOR);
                    level.push(TreeNode::Folder(FolderNode {
                        name: (*name).to_string(),
                        path,
                        children: Vec::new(),
                    }));
                    level.len() - 1
                }
            };
            let TreeNode::Folder(folder) = &mut level[index] else {
                unreachable!("position only matches folder nodes");
            };
            level = &mut folder.children;
        }

        level.push(TreeNode::File(FileNode {
            name: record.filename.clone(),
            record: Arc::clone(record),
        }));
    }

    sort_children(&mut roots);
    roots
}

fn sort_children(nodes: &mut [TreeNode]) {
    nodes.sort_by(compare_nodes);
    for node in nodes.iter_mut() {
        if let TreeNode::Folder(folder) = node {
            sort_children(&mut folder.children);
        }
    }
}

/// Folders before files; folders alphabetical, files newest-first.
fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a, b) {
        (TreeNode::Folder(a), TreeNode::Folder(b)) => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        (TreeNode::Folder(_), TreeNode::File(_)) => Ordering::Less,
        (TreeNode::File(_), TreeNode::Folder(_)) => Ordering::Greater,
        (TreeNode::File(a), TreeNode::File(b)) => b.record.uploaded_at.cmp(&a.record.uploaded_at),
    }
}
