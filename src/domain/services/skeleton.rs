//! Container skeleton extraction
//!
//! Target environments require parent containers to exist before content can
//! be placed inside them, and before collections can be created inside them.
//! The extractor projects a full model tree onto the sub-tree of
//! container-capable nodes, preserving hierarchy and sibling order, so the
//! orchestrator can deploy that scaffolding ahead of the full model.

use crate::domain::entities::{ModelNode, ModelTree, NodeKind};

/// Project a full model tree onto its container skeleton.
///
/// Depth-first and order-preserving:
/// - `Container` nodes are emitted and recursed into
/// - `Collection` nodes are emitted childless; their subtree is never
///   visited, since collection content is applied only in the main phase
/// - `Other` nodes are dropped with their entire subtree
///
/// Under a `Site` root, collections at root level are dropped as well; site
/// roots cannot host them directly (see [`crate::Scope::allows_root_collections`]).
///
/// The function is a projection: applying it to its own output returns an
/// equal tree.
pub fn extract_skeleton(tree: &ModelTree) -> ModelTree {
    let mut skeleton = ModelTree::new(tree.scope());
    let kept = skeleton_children(
        tree.root().children(),
        tree.scope().allows_root_collections(),
    );
    for node in kept {
        skeleton.root_mut().add_child(node);
    }
    skeleton
}

fn skeleton_children(children: &[ModelNode], keep_collections: bool) -> Vec<ModelNode> {
    let mut kept = Vec::new();
    for child in children {
        match child.kind() {
            NodeKind::Container => {
                let mut node = ModelNode::new(child.value().clone());
                // Nested containers are webs; collections are allowed below
                // root level regardless of the tree's scope.
                for grandchild in skeleton_children(child.children(), true) {
                    node.add_child(grandchild);
                }
                kept.push(node);
            }
            NodeKind::Collection if keep_collections => {
                kept.push(ModelNode::new(child.value().clone()));
            }
            NodeKind::Collection | NodeKind::Other => {}
        }
    }
    kept
}
