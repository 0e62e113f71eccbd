//! Indirections between nodes.
//!
//! The header encodes references as symbol names: a pointer handle
//! (`<node>_P_<prop>_IDX_0_PH`) holds the prefix of the referenced node, and
//! `<node>_PARENT` holds the prefix of the containing node. Both are followed
//! by looking the prefix up in the [`NodeIndex`].

use gb_manifest::InterfaceDescriptor;
use gb_symtab::{NodeId, NodeIndex};

use crate::{attr, ResolveError};

/// Pseudo attribute name used when reporting a broken parent link.
const PARENT_ATTR: &str = "PARENT";

/// Follow the pointer handle `attr` of `node` to the node it names.
pub(crate) fn follow_handle(
    index: &NodeIndex<'_>,
    node: NodeId,
    attr: &str,
) -> Result<NodeId, ResolveError> {
    let target = attr::raw(index, node, attr)?;
    lookup(index, node, attr, target)
}

/// The node containing `node`.
pub(crate) fn parent_of(index: &NodeIndex<'_>, node: NodeId) -> Result<NodeId, ResolveError> {
    let record = index.record(node);
    let Some(target) = record.parent() else {
        return Err(ResolveError::MissingParent {
            node: record.name().to_owned(),
        });
    };
    lookup(index, node, PARENT_ATTR, target)
}

fn lookup(
    index: &NodeIndex<'_>,
    node: NodeId,
    attr: &str,
    target: &str,
) -> Result<NodeId, ResolveError> {
    index
        .lookup(target)
        .ok_or_else(|| ResolveError::UnknownNode {
            node: index.record(node).name().to_owned(),
            attr: attr.to_owned(),
            target: target.to_owned(),
        })
}

/// The interface owning string `id`, if it names the string as its vendor or
/// product.
pub(crate) fn string_parent(
    interface: Option<&InterfaceDescriptor>,
    id: u8,
) -> Option<InterfaceDescriptor> {
    interface
        .filter(|iface| iface.vendor_string_id == id || iface.product_string_id == id)
        .copied()
}
