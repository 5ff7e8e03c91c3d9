//! Option tree nodes and their collapse into [`Options`].

use crate::options::{OptionValue, Options};

/// Name given to the root of every tree built from a file. It is dropped
/// again when the tree is collapsed by [`parse`](crate::parse).
pub const ROOT_NAME: &str = "*";

/// One option in the tree.
///
/// A node without children is a `name: content` leaf. A node with children is a
/// subcategory; its content is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    content: String,
    children: Vec<Node>,
}

impl Node {
    /// Create a subcategory node with no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_content(name, String::new())
    }

    /// Create a node carrying an option value.
    pub fn with_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            children: Vec::new(),
        }
    }

    /// Create an empty root node.
    pub fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child; children keep insertion order.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Collapse this node into a single-entry mapping, depth first.
    ///
    /// A leaf becomes `{name: content}`; a subcategory becomes
    /// `{name: {children...}}` where later children overwrite earlier ones
    /// sharing the same name.
    pub fn collapse(self) -> Options {
        let mut options = Options::new();
        let (name, value) = self.into_entry();
        options.insert(name, value);
        options
    }

    /// Collapse only the children, discarding this node's own name.
    pub fn collapse_children(self) -> Options {
        merge(self.children)
    }

    fn into_entry(self) -> (String, OptionValue) {
        let Node {
            name,
            content,
            children,
        } = self;
        if children.is_empty() {
            (name, OptionValue::Value(content))
        } else {
            (name, OptionValue::Section(merge(children)))
        }
    }
}

fn merge(children: Vec<Node>) -> Options {
    let mut merged = Options::new();
    for child in children {
        let (name, value) = child.into_entry();
        merged.insert(name, value);
    }
    merged
}
