//! Devicetree symbols → Greybus manifest descriptors.
//!
//! # Pipeline
//!
//! ```text
//! SymbolTable ──► NodeIndex
//!                    │
//!                    ├─► resolve_interface ──► Option<InterfaceDescriptor>
//!                    │                               │
//!                    ├─► resolve_strings ◄───────────┘ (parent links)
//!                    ├─► resolve_bundles
//!                    └─► resolve_cports   (bundle id via _PARENT)
//!                                │
//!                                ▼
//!                    Resolved ──► assemble ──► ManifestSink
//! ```
//!
//! Resolution is a single pass; the first malformed node aborts it.

mod attr;
mod bundle;
mod cport;
mod error;
mod interface;
mod link;
mod string;

#[cfg(test)]
mod test_helpers;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use gb_manifest::{
    BundleDescriptor, CPortDescriptor, InterfaceDescriptor, Manifest, ManifestHeader,
    ManifestSink, StringDescriptor,
};
use gb_symtab::{NodeIndex, NodeKind, SymbolTable};

pub use bundle::resolve_bundles;
pub use cport::resolve_cports;
pub use error::ResolveError;
pub use interface::resolve_interface;
pub use string::resolve_strings;

/// Attribute holding a node's numeric id.
pub(crate) const ID_ATTR: &str = "id";

/// All descriptors resolved from one symbol table.
///
/// Maps are keyed by descriptor id, so each kind is emitted in id order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Resolved {
    pub interface: Option<InterfaceDescriptor>,
    pub strings: BTreeMap<u8, StringDescriptor>,
    pub bundles: BTreeMap<u8, BundleDescriptor>,
    pub cports: BTreeMap<u16, CPortDescriptor>,
}

impl Resolved {
    /// Build a [`Manifest`] with `header` holding every descriptor.
    pub fn into_manifest(self, header: ManifestHeader) -> Manifest {
        let mut manifest = Manifest::default();
        assemble(self, header, &mut manifest);
        manifest
    }
}

/// Resolve every recognized node in `table`.
pub fn resolve(table: &SymbolTable) -> Result<Resolved, ResolveError> {
    let index = NodeIndex::build(table);
    resolve_index(&index)
}

/// Resolve every recognized node of an already built index.
///
/// The interface is resolved first because string resolution needs its ids.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = index.len()))]
pub fn resolve_index(index: &NodeIndex<'_>) -> Result<Resolved, ResolveError> {
    let interface = resolve_interface(index)?;
    let strings = resolve_strings(index, interface.as_ref())?;
    let bundles = resolve_bundles(index)?;
    let cports = resolve_cports(index)?;
    tracing::debug!(
        interface = interface.is_some(),
        strings = strings.len(),
        bundles = bundles.len(),
        cports = cports.len(),
        "resolution complete"
    );
    Ok(Resolved {
        interface,
        strings,
        bundles,
        cports,
    })
}

/// Hand resolved descriptors to `sink`: header, strings, interface, bundles,
/// then `CPorts`.
pub fn assemble(resolved: Resolved, header: ManifestHeader, sink: &mut impl ManifestSink) {
    sink.add_header(header);
    for desc in resolved.strings.into_values() {
        sink.add_string_desc(desc);
    }
    if let Some(desc) = resolved.interface {
        sink.add_interface_desc(desc);
    }
    for desc in resolved.bundles.into_values() {
        sink.add_bundle_desc(desc);
    }
    for desc in resolved.cports.into_values() {
        sink.add_cport_desc(desc);
    }
}

/// Insert `desc` under `id`; a later node with the same id replaces the
/// earlier one.
pub(crate) fn insert_by_id<K, V>(map: &mut BTreeMap<K, V>, id: K, desc: V, kind: NodeKind)
where
    K: Ord + Copy + std::fmt::Display,
{
    match map.entry(id) {
        Entry::Vacant(slot) => {
            slot.insert(desc);
        }
        Entry::Occupied(mut slot) => {
            tracing::warn!(%kind, %id, "duplicate descriptor id, keeping the later node");
            slot.insert(desc);
        }
    }
}
