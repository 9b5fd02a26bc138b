//! Structural model tree
//!
//! A [`ModelTree`] describes the desired structure of a target environment as
//! an ordered tree of typed definition nodes. Declared child order is the
//! intended apply order. Trees are built once by the caller and stay
//! read-only during deployment; the orchestrator only ever mutates derived
//! copies (the container skeleton).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Scope;

/// Structural role of a node, fixed at construction
///
/// The discriminator is determined solely by the definition type and never
/// changes afterwards; the skeleton extractor dispatches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Hosts nested structural scope (a nested web); recursed into during
    /// skeleton extraction
    Container,
    /// Leaf container (a list or library); holds content but no further
    /// structural nesting for extraction purposes
    Collection,
    /// Non-structural definition (fields, items, settings)
    Other,
}

impl NodeKind {
    /// Container-capable kinds survive skeleton extraction
    pub fn is_structural(&self) -> bool {
        !matches!(self, NodeKind::Other)
    }
}

/// Typed definition payload of a model node
///
/// Opaque to the orchestration core except for its kind, the definition type
/// name shown in progress output, and the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    kind: NodeKind,
    type_name: String,
    display_name: String,
}

impl Definition {
    pub fn new(
        kind: NodeKind,
        type_name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            display_name: display_name.into(),
        }
    }

    /// A container definition (nested web equivalent)
    pub fn container(display_name: impl Into<String>) -> Self {
        Self::new(NodeKind::Container, "ContainerDefinition", display_name)
    }

    /// A collection definition (list/library equivalent)
    pub fn collection(display_name: impl Into<String>) -> Self {
        Self::new(NodeKind::Collection, "CollectionDefinition", display_name)
    }

    /// Any non-structural definition (field, item, setting, ...)
    pub fn other(type_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::new(NodeKind::Other, type_name, display_name)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// A node in a structural model tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelNode {
    value: Definition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ModelNode>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    property_bag: BTreeMap<String, String>,
}

impl ModelNode {
    pub fn new(value: Definition) -> Self {
        Self {
            value,
            children: Vec::new(),
            property_bag: BTreeMap::new(),
        }
    }

    /// Append a child, preserving declared order
    pub fn add_child(&mut self, child: ModelNode) {
        self.children.push(child);
    }

    /// Builder-style variant of [`add_child`](Self::add_child)
    pub fn with_child(mut self, child: ModelNode) -> Self {
        self.add_child(child);
        self
    }

    pub fn value(&self) -> &Definition {
        &self.value
    }

    pub fn kind(&self) -> NodeKind {
        self.value.kind()
    }

    pub fn children(&self) -> &[ModelNode] {
        &self.children
    }

    /// Set an out-of-band metadata entry; keys are unique, a repeated key
    /// replaces the previous value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.property_bag.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`set_property`](Self::set_property)
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.property_bag.get(key).map(String::as_str)
    }

    /// This node plus all descendants
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ModelNode::node_count)
            .sum::<usize>()
    }
}

/// A rooted model plus the scope its target handle must be bound to
///
/// Two root scopes exist because container nesting rules differ by scope:
/// see [`Scope::allows_root_collections`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTree {
    scope: Scope,
    root: ModelNode,
}

impl ModelTree {
    /// An empty model rooted at the given scope
    pub fn new(scope: Scope) -> Self {
        let root = ModelNode::new(Definition::new(
            NodeKind::Container,
            scope.root_type_name(),
            scope.to_string(),
        ));
        Self { scope, root }
    }

    /// An empty site-scoped model
    pub fn new_site() -> Self {
        Self::new(Scope::Site)
    }

    /// An empty web-scoped model
    pub fn new_web() -> Self {
        Self::new(Scope::Web)
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn root(&self) -> &ModelNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ModelNode {
        &mut self.root
    }

    /// Total node count including the root
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}
