//! String descriptor resolution.

use std::collections::BTreeMap;

use gb_manifest::{InterfaceDescriptor, StringDescriptor};
use gb_symtab::{NodeIndex, NodeKind};

use crate::{attr, insert_by_id, link, ResolveError, ID_ATTR};

/// Literal text of a string node.
const STRING_ATTR: &str = "greybus_string";

/// Resolve every string node, keyed by id.
///
/// Takes the already resolved interface so that strings it names as vendor or
/// product get it as their parent.
#[tracing::instrument(level = "debug", skip_all)]
pub fn resolve_strings(
    index: &NodeIndex<'_>,
    interface: Option<&InterfaceDescriptor>,
) -> Result<BTreeMap<u8, StringDescriptor>, ResolveError> {
    let mut strings = BTreeMap::new();
    for node in index.nodes_of(NodeKind::String) {
        let id: u8 = attr::int(index, node, ID_ATTR)?;
        let desc = StringDescriptor {
            id,
            string: attr::string(index, node, STRING_ATTR)?,
            parent: link::string_parent(interface, id),
        };
        tracing::debug!(node = index.record(node).name(), ?desc, "resolved string");
        insert_by_id(&mut strings, id, desc, NodeKind::String);
    }
    Ok(strings)
}

#[cfg(test)]
mod tests;
