//! Interface descriptor resolution.

use gb_manifest::InterfaceDescriptor;
use gb_symtab::{NodeIndex, NodeKind};

use crate::{attr, link, ResolveError, ID_ATTR};

/// Pointer handle naming the vendor string node.
const VENDOR_STRING_HANDLE: &str = "vendor_string_id_IDX_0_PH";
/// Pointer handle naming the product string node.
const PRODUCT_STRING_HANDLE: &str = "product_string_id_IDX_0_PH";

/// Resolve the interface node, if the header has one.
///
/// The vendor and product string ids are read through the interface's
/// pointer handles from the `id` of each referenced node. More than one
/// interface node is an error; no interface node is not.
#[tracing::instrument(level = "debug", skip_all)]
pub fn resolve_interface(
    index: &NodeIndex<'_>,
) -> Result<Option<InterfaceDescriptor>, ResolveError> {
    let node = match index.nodes_of(NodeKind::Interface)[..] {
        [] => {
            tracing::debug!("no interface node");
            return Ok(None);
        }
        [node] => node,
        [first, second, ..] => {
            return Err(ResolveError::DuplicateInterface {
                first: index.record(first).name().to_owned(),
                second: index.record(second).name().to_owned(),
            });
        }
    };

    let vendor = link::follow_handle(index, node, VENDOR_STRING_HANDLE)?;
    let product = link::follow_handle(index, node, PRODUCT_STRING_HANDLE)?;
    let desc = InterfaceDescriptor {
        vendor_string_id: attr::int(index, vendor, ID_ATTR)?,
        product_string_id: attr::int(index, product, ID_ATTR)?,
    };
    tracing::debug!(node = index.record(node).name(), ?desc, "resolved interface");
    Ok(Some(desc))
}
