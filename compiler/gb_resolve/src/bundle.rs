//! Bundle descriptor resolution.

use std::collections::BTreeMap;

use gb_manifest::BundleDescriptor;
use gb_symtab::{NodeIndex, NodeKind};

use crate::{attr, insert_by_id, ResolveError, ID_ATTR};

/// Greybus class code of a bundle node.
const CLASS_ATTR: &str = "bundle_class";

/// Resolve every bundle node, keyed by id.
#[tracing::instrument(level = "debug", skip_all)]
pub fn resolve_bundles(
    index: &NodeIndex<'_>,
) -> Result<BTreeMap<u8, BundleDescriptor>, ResolveError> {
    let mut bundles = BTreeMap::new();
    for node in index.nodes_of(NodeKind::Bundle) {
        let desc = BundleDescriptor {
            id: attr::int(index, node, ID_ATTR)?,
            class: attr::int(index, node, CLASS_ATTR)?,
        };
        tracing::debug!(node = index.record(node).name(), ?desc, "resolved bundle");
        insert_by_id(&mut bundles, desc.id, desc, NodeKind::Bundle);
    }
    Ok(bundles)
}
