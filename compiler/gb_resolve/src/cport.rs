//! `CPort` descriptor resolution.

use std::collections::BTreeMap;

use gb_manifest::CPortDescriptor;
use gb_symtab::{NodeIndex, NodeKind};

use crate::{attr, insert_by_id, link, ResolveError, ID_ATTR};

/// Greybus protocol code of a controller node.
const PROTOCOL_ATTR: &str = "cport_protocol";

/// Resolve every controller node into a `CPort`, keyed by id.
///
/// The owning bundle is the node named by the controller's `_PARENT` symbol;
/// its `id` becomes the descriptor's bundle id.
#[tracing::instrument(level = "debug", skip_all)]
pub fn resolve_cports(
    index: &NodeIndex<'_>,
) -> Result<BTreeMap<u16, CPortDescriptor>, ResolveError> {
    let mut cports = BTreeMap::new();
    for node in index.nodes_of(NodeKind::CPort) {
        let id: u16 = attr::int(index, node, ID_ATTR)?;
        let bundle = link::parent_of(index, node)?;
        let desc = CPortDescriptor {
            id,
            bundle: attr::int(index, bundle, ID_ATTR)?,
            protocol: attr::int(index, node, PROTOCOL_ATTR)?,
        };
        tracing::debug!(node = index.record(node).name(), ?desc, "resolved cport");
        insert_by_id(&mut cports, id, desc, NodeKind::CPort);
    }
    Ok(cports)
}
