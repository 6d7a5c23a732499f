//! # Path Operations
//!
//! `get`, `set`, `remove`, `insert` and `move` over a [`Node`] tree.
//!
//! Every write is copy-on-write: the containers on the addressed path are
//! shallow-cloned and everything else is shared with the input root. A write
//! that cannot be resolved returns a clone of the input that is
//! pointer-identical to it, never an error.
//!
//! Writes through more than [`MAX_PATH_DEPTH`] segments, or to an index more
//! than [`MAX_INDEX_GAP`] past the end of an array, are no-ops.

use crate::node::Node;
use crate::path::{Path, Segment};

/// Deepest path a write will rebuild
pub const MAX_PATH_DEPTH: usize = 128;

/// Most `Null` padding a single `set` may add to an array
pub const MAX_INDEX_GAP: usize = 1024;

/// Read the value at `path`, or `None` if any step does not resolve
pub fn get_at_path<'a>(root: &'a Node, path: &str) -> Option<&'a Node> {
    Path::parse(path)
        .segments()
        .iter()
        .try_fold(root, |current, segment| child(current, segment))
}

/// Replace the value at `path`, creating missing containers along the way
pub fn set_at_path(root: &Node, path: &str, value: Node) -> Node {
    let Some(path) = writable(path) else {
        return root.clone();
    };
    set_in(root, path.segments(), value).unwrap_or_else(|| root.clone())
}

/// Remove the array element or object field at `path`
pub fn remove_at_path(root: &Node, path: &str) -> Node {
    let Some(path) = writable(path) else {
        return root.clone();
    };
    let Some((parent, last)) = path.split_last() else {
        return root.clone();
    };

    update_in(root, parent, |container| remove_child(container, last))
        .unwrap_or_else(|| root.clone())
}

/// Insert `element` into the array at `array_path`, clamping `index` to its length
pub fn insert_at_path(root: &Node, array_path: &str, index: usize, element: Node) -> Node {
    let Some(path) = writable(array_path) else {
        return root.clone();
    };
    update_in(root, path.segments(), |target| {
        let items = target.as_array()?;
        let mut items = items.to_vec();
        items.insert(index.min(items.len()), element);
        Some(Node::array(items))
    })
    .unwrap_or_else(|| root.clone())
}

/// Move one element within the array at `array_path`
pub fn move_in_array(root: &Node, array_path: &str, from: usize, to: usize) -> Node {
    let Some(path) = writable(array_path) else {
        return root.clone();
    };
    update_in(root, path.segments(), |target| {
        let items = target.as_array()?;
        if from == to || from >= items.len() || to >= items.len() {
            return None;
        }
        let mut items = items.to_vec();
        let moved = items.remove(from);
        items.insert(to, moved);
        Some(Node::array(items))
    })
    .unwrap_or_else(|| root.clone())
}

fn writable(raw: &str) -> Option<Path> {
    let path = Path::parse(raw);
    (path.segments().len() <= MAX_PATH_DEPTH).then_some(path)
}

fn child<'a>(node: &'a Node, segment: &Segment) -> Option<&'a Node> {
    match (node, segment) {
        (Node::Array(items), Segment::Index(index)) => items.get(*index),
        (Node::Object(fields), segment) => fields.get(segment.key().as_ref()),
        _ => None,
    }
}

/// `None` means the write is a no-op
fn set_in(node: &Node, segments: &[Segment], value: Node) -> Option<Node> {
    let Some((first, rest)) = segments.split_first() else {
        return Some(value);
    };

    match (node, first) {
        (Node::Array(items), Segment::Index(index)) => {
            let index = *index;
            if index.saturating_sub(items.len()) > MAX_INDEX_GAP {
                return None;
            }
            let current = items.get(index).cloned().unwrap_or_default();
            let updated = set_in(&current, rest, value)?;

            let mut items = items.to_vec();
            if index < items.len() {
                items[index] = updated;
            } else {
                items.resize(index, Node::Null);
                items.push(updated);
            }
            Some(Node::array(items))
        }
        // Arrays only take index segments
        (Node::Array(_), Segment::Key(_)) => None,
        (Node::Object(fields), segment) => {
            let key = segment.key();
            let current = fields.get(key.as_ref()).cloned().unwrap_or_default();
            let updated = set_in(&current, rest, value)?;

            let mut fields = (**fields).clone();
            fields.insert(key.into_owned(), updated);
            Some(Node::object(fields))
        }
        // Missing or scalar: vivify a container shaped by the segment
        (_, segment) => {
            let fresh = if segment.is_index() {
                Node::empty_array()
            } else {
                Node::empty_object()
            };
            set_in(&fresh, segments, value)
        }
    }
}

/// Rebuild the existing path down to `segments`, replacing its target with `f(target)`
fn update_in<F>(node: &Node, segments: &[Segment], f: F) -> Option<Node>
where
    F: FnOnce(&Node) -> Option<Node>,
{
    let Some((first, rest)) = segments.split_first() else {
        return f(node);
    };

    match (node, first) {
        (Node::Array(items), Segment::Index(index)) => {
            let updated = update_in(items.get(*index)?, rest, f)?;
            let mut items = items.to_vec();
            items[*index] = updated;
            Some(Node::array(items))
        }
        (Node::Object(fields), segment) => {
            let key = segment.key();
            let updated = update_in(fields.get(key.as_ref())?, rest, f)?;
            let mut fields = (**fields).clone();
            fields.insert(key.into_owned(), updated);
            Some(Node::object(fields))
        }
        _ => None,
    }
}

fn remove_child(container: &Node, last: &Segment) -> Option<Node> {
    match (container, last) {
        (Node::Array(items), Segment::Index(index)) if *index < items.len() => {
            let mut items = items.to_vec();
            items.remove(*index);
            Some(Node::array(items))
        }
        (Node::Object(fields), segment) => {
            let key = segment.key();
            if !fields.contains_key(key.as_ref()) {
                return None;
            }
            let mut fields = (**fields).clone();
            fields.remove(key.as_ref());
            Some(Node::object(fields))
        }
        _ => None,
    }
}
