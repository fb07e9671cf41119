//! Depth-first linearization of an error tree into renderable records.
//!
//! The walk flattens a causal structure, which may fan out at joins, into
//! an ordered sequence of records. Indentation level reflects *branching
//! depth*, not chain length: a long chain of single-cause annotations
//! renders flat, while each join with more than one child pushes its
//! descendants one level deeper. Sibling indices identify each branch
//! under a fan-out point.

use std::any::type_name;
use std::error::Error as StdError;

use crate::traits::into_cause::DYN_TYPE_NAME;
use crate::traits::{Cause, StackTracer};
use crate::types::{Error, ErrorVec, Stack, WrapperError};

/// One linearized node of an error tree.
pub struct Record<'a> {
    type_name: &'static str,
    message: String,
    stack: Option<&'a Stack>,
    level: usize,
    index: usize,
}

impl<'a> Record<'a> {
    /// Concrete type name of the error behind this record.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The error's full rendered message, causes included.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stack owned by this error, when one was discoverable.
    #[inline]
    pub fn stack(&self) -> Option<&'a Stack> {
        self.stack
    }

    /// Branching depth of this record: incremented below every fan-out
    /// point with more than one child, and nowhere else.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Position of this error among its immediate siblings.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A node of the walk: the error plus the best known name for its
/// concrete type.
pub(crate) struct Node<'a> {
    err: &'a (dyn StdError + 'static),
    type_name: &'static str,
}

impl<'a> Node<'a> {
    fn from_cause(cause: &'a Cause) -> Self {
        Node {
            err: cause.error(),
            type_name: cause.type_name(),
        }
    }

    pub(crate) fn error(&self) -> &'a (dyn StdError + 'static) {
        self.err
    }
}

/// Linearizes the error tree rooted at `err` into depth-first pre-order
/// records, ready for [`render`](crate::report::render).
pub fn linearize<E>(err: &E) -> Vec<Record<'_>>
where
    E: StdError + 'static,
{
    let root: &(dyn StdError + 'static) = err;
    let mut records = Vec::new();
    visit(
        Node {
            err: root,
            type_name: type_name::<E>(),
        },
        0,
        0,
        &mut records,
    );
    records
}

fn visit<'a>(node: Node<'a>, level: usize, index: usize, records: &mut Vec<Record<'a>>) {
    records.push(Record {
        type_name: refined_type_name(node.err, node.type_name),
        message: node.err.to_string(),
        stack: stack_of(node.err),
        level,
        index,
    });

    let children = unwrap_children(node.err);
    // Only a fan-out deepens the indentation; single-cause chains stay
    // flat and nested fan-outs compound.
    let child_level = if children.len() > 1 { level + 1 } else { level };
    for (index, child) in children.into_iter().enumerate() {
        visit(child, child_level, index, records);
    }
}

/// The unwrap-children of an error: the single cause of an annotation,
/// the ordered children of a join, or whatever a foreign error exposes
/// through `source`. Errors exposing none of these are leaves.
pub(crate) fn unwrap_children<'a>(err: &'a (dyn StdError + 'static)) -> ErrorVec<Node<'a>> {
    if let Some(e) = err.downcast_ref::<Error>() {
        return match e {
            Error::Annotated(a) => a.cause.iter().map(Node::from_cause).collect(),
            Error::Joined(j) => j.children.iter().map(Node::from_cause).collect(),
        };
    }
    if let Some(w) = err.downcast_ref::<WrapperError>() {
        return w.cause_entry().into_iter().map(Node::from_cause).collect();
    }
    err.source()
        .map(|source| Node {
            err: source,
            type_name: DYN_TYPE_NAME,
        })
        .into_iter()
        .collect()
}

fn refined_type_name(err: &(dyn StdError + 'static), hint: &'static str) -> &'static str {
    if let Some(e) = err.downcast_ref::<Error>() {
        e.variant_type_name()
    } else if err.downcast_ref::<WrapperError>().is_some() {
        type_name::<WrapperError>()
    } else {
        hint
    }
}

fn stack_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Stack> {
    if let Some(e) = err.downcast_ref::<Error>() {
        Some(e.stack_trace())
    } else if let Some(w) = err.downcast_ref::<WrapperError>() {
        Some(w.stack_trace())
    } else {
        None
    }
}
