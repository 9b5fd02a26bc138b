//! Property tests for skeleton extraction
//!
//! Generates arbitrary model trees and checks the extractor's algebraic
//! guarantees: only container-capable nodes survive, sibling order is kept,
//! collections come out childless, and extraction is idempotent.

use proptest::prelude::*;

use metadeploy::{extract_skeleton, Definition, ModelNode, ModelTree, NodeKind, Scope};

fn type_name_for(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Container => "ContainerDefinition",
        NodeKind::Collection => "CollectionDefinition",
        NodeKind::Other => "FieldDefinition",
    }
}

fn arb_kind() -> impl Strategy<Value = NodeKind> {
    prop_oneof![
        Just(NodeKind::Container),
        Just(NodeKind::Collection),
        Just(NodeKind::Other),
    ]
}

fn arb_node() -> impl Strategy<Value = ModelNode> {
    let leaf = (arb_kind(), "[a-z]{1,8}").prop_map(|(kind, name)| {
        ModelNode::new(Definition::new(kind, type_name_for(kind), name))
    });
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            arb_kind(),
            "[a-z]{1,8}",
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(kind, name, children)| {
                let mut node = ModelNode::new(Definition::new(kind, type_name_for(kind), name));
                for child in children {
                    node.add_child(child);
                }
                node
            })
    })
}

fn arb_tree() -> impl Strategy<Value = ModelTree> {
    (
        prop_oneof![Just(Scope::Site), Just(Scope::Web)],
        prop::collection::vec(arb_node(), 0..5),
    )
        .prop_map(|(scope, children)| {
            let mut tree = ModelTree::new(scope);
            for child in children {
                tree.root_mut().add_child(child);
            }
            tree
        })
}

fn for_each_node(node: &ModelNode, f: &mut dyn FnMut(&ModelNode)) {
    f(node);
    for child in node.children() {
        for_each_node(child, f);
    }
}

/// Check the skeleton against its source, level by level: the output's
/// children are exactly the structural input children in declared order,
/// collections are childless, containers project recursively.
fn assert_projection(input: &ModelNode, output: &ModelNode, keep_collections: bool) {
    let kept: Vec<&ModelNode> = input
        .children()
        .iter()
        .filter(|c| match c.kind() {
            NodeKind::Container => true,
            NodeKind::Collection => keep_collections,
            NodeKind::Other => false,
        })
        .collect();

    assert_eq!(kept.len(), output.children().len());
    for (source, projected) in kept.iter().zip(output.children()) {
        assert_eq!(source.kind(), projected.kind());
        assert_eq!(
            source.value().display_name(),
            projected.value().display_name()
        );
        match source.kind() {
            NodeKind::Container => assert_projection(source, projected, true),
            _ => assert!(projected.children().is_empty()),
        }
    }
}

proptest! {
    #[test]
    fn skeleton_contains_no_other_nodes(tree in arb_tree()) {
        let skeleton = extract_skeleton(&tree);
        for_each_node(skeleton.root(), &mut |node| {
            assert!(node.kind().is_structural(), "kept a non-structural node");
        });
    }

    #[test]
    fn extraction_is_idempotent(tree in arb_tree()) {
        let once = extract_skeleton(&tree);
        let twice = extract_skeleton(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn collections_in_the_skeleton_are_childless(tree in arb_tree()) {
        let skeleton = extract_skeleton(&tree);
        for_each_node(skeleton.root(), &mut |node| {
            if node.kind() == NodeKind::Collection {
                assert!(node.children().is_empty(), "collection kept its children");
            }
        });
    }

    #[test]
    fn skeleton_mirrors_the_source_level_by_level(tree in arb_tree()) {
        let skeleton = extract_skeleton(&tree);
        assert_projection(
            tree.root(),
            skeleton.root(),
            tree.scope().allows_root_collections(),
        );
    }

    #[test]
    fn skeleton_keeps_the_scope(tree in arb_tree()) {
        prop_assert_eq!(extract_skeleton(&tree).scope(), tree.scope());
    }
}
