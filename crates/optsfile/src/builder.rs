//! Tree builder: depth-ordered [`Record`]s → a single-rooted [`Node`] tree.
//!
//! Records arrive in depth-first pre-order, so the parent of every record is
//! the most recent subcategory one level shallower. The builder keeps those
//! open subcategories on a stack (the root sits below depth 0) and attaches
//! each finished subcategory to its parent once a record at the same or a
//! shallower depth closes it.

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::node::Node;
use crate::tokenizer::Record;

/// Builds option trees from tokenized records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the tree for `records`, returning its root node.
    pub fn build<I>(&self, records: I) -> Result<Node, ParseError>
    where
        I: IntoIterator<Item = Record>,
    {
        // open[d] is the subcategory currently open at depth d - 1.
        let mut open: Vec<Node> = vec![Node::root()];

        for record in records {
            let max_depth = open.len() - 1;
            if record.depth > max_depth {
                return Err(ParseError::Structure {
                    line: record.line,
                    depth: record.depth,
                    max_depth,
                });
            }
            close_to(&mut open, record.depth + 1);

            let line = record.line;
            let depth = record.depth;
            let mut tokens = record.tokens.into_iter();
            let node = match (tokens.next(), tokens.next(), tokens.len()) {
                (Some(name), None, _) => {
                    trace!(line, depth, name = %name, "open subcategory");
                    open.push(Node::new(name));
                    continue;
                }
                (Some(name), Some(value), 0) => {
                    let name = match name.strip_suffix(':') {
                        Some(stripped) => stripped.to_string(),
                        None => name,
                    };
                    Node::with_content(name, value)
                }
                (Some(_), Some(_), extra) => {
                    return Err(ParseError::Token {
                        line,
                        count: extra + 2,
                    });
                }
                (None, _, _) => {
                    return Err(ParseError::format(line, "empty record"));
                }
            };
            trace!(line, depth, name = node.name(), "add option");
            if let Some(parent) = open.last_mut() {
                parent.add_child(node);
            }
        }

        close_to(&mut open, 1);
        let root = open.pop().unwrap_or_else(Node::root);
        debug!(top_level = root.children().len(), "built options tree");
        Ok(root)
    }
}

/// Pop open subcategories until `len` remain, attaching each to its parent.
fn close_to(open: &mut Vec<Node>, len: usize) {
    while open.len() > len {
        if let Some(node) = open.pop()
            && let Some(parent) = open.last_mut()
        {
            parent.add_child(node);
        }
    }
}
