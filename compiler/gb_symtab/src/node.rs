//! Node index over a [`SymbolTable`].
//!
//! Groups `<prefix>_P_<attr>` and `<prefix>_PARENT` symbols by node prefix.
//! Records live in a flat arena and are addressed by [`NodeId`], so following
//! a reference is a hash lookup of the referenced prefix followed by an index.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{NodeKind, SymbolTable};

/// Separator between a node prefix and a property name.
pub const PROP_SEPARATOR: &str = "_P_";
/// Suffix of a node's parent link.
pub const PARENT_SUFFIX: &str = "_PARENT";
/// Suffix of the first compatible entry of a node.
pub const COMPATIBLE_SUFFIX: &str = "_P_compatible_IDX_0";

/// Attribute name of the first compatible entry.
const COMPATIBLE_ATTR: &str = "compatible_IDX_0";

/// Index into the node arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// All symbols sharing one node prefix.
#[derive(Clone, Debug)]
pub struct NodeRecord<'t> {
    name: &'t str,
    attrs: FxHashMap<&'t str, &'t str>,
    parent: Option<&'t str>,
}

impl<'t> NodeRecord<'t> {
    fn new(name: &'t str) -> Self {
        Self {
            name,
            attrs: FxHashMap::default(),
            parent: None,
        }
    }

    /// Node prefix, e.g. `DT_N_S_greybus0_S_bundle0`.
    pub fn name(&self) -> &'t str {
        self.name
    }

    /// Raw value of attribute `attr` (the part after `_P_`).
    pub fn attr(&self, attr: &str) -> Option<&'t str> {
        self.attrs.get(attr).copied()
    }

    /// Prefix of the containing node, from the `_PARENT` symbol.
    pub fn parent(&self) -> Option<&'t str> {
        self.parent
    }

    /// Raw first compatible, quotes included.
    pub fn compatible(&self) -> Option<&'t str> {
        self.attr(COMPATIBLE_ATTR)
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.compatible().and_then(NodeKind::from_compatible)
    }
}

/// Node records built from a symbol table, in order of first appearance.
#[derive(Clone, Debug, Default)]
pub struct NodeIndex<'t> {
    records: Vec<NodeRecord<'t>>,
    by_prefix: FxHashMap<&'t str, NodeId>,
}

impl<'t> NodeIndex<'t> {
    /// Group every node-shaped symbol in `table` under its prefix.
    ///
    /// `<prefix>_PARENT` is checked first, so a prefix may itself contain
    /// `_P_`. `<prefix>_P_<attr>` splits at the last `_P_`, so the prefix of a
    /// compatible symbol is its name minus [`COMPATIBLE_SUFFIX`]. Symbols
    /// that match neither convention (`_ORD`, `_EXISTS`, ...) are ignored.
    pub fn build(table: &'t SymbolTable) -> Self {
        let mut index = Self::default();
        for symbol in table.iter() {
            let name = symbol.name.as_str();
            if let Some(prefix) = name.strip_suffix(PARENT_SUFFIX) {
                if prefix.is_empty() {
                    continue;
                }
                let id = index.intern(prefix);
                index.records[id.index()].parent = Some(symbol.value.as_str());
            } else if let Some((prefix, attr)) = name.rsplit_once(PROP_SEPARATOR) {
                if prefix.is_empty() || attr.is_empty() {
                    continue;
                }
                let id = index.intern(prefix);
                index.records[id.index()]
                    .attrs
                    .insert(attr, symbol.value.as_str());
            }
        }
        tracing::debug!(nodes = index.len(), "built node index");
        index
    }

    fn intern(&mut self, prefix: &'t str) -> NodeId {
        if let Some(&id) = self.by_prefix.get(prefix) {
            return id;
        }
        #[allow(clippy::cast_possible_truncation)]
        let id = NodeId(self.records.len() as u32);
        self.records.push(NodeRecord::new(prefix));
        self.by_prefix.insert(prefix, id);
        id
    }

    /// Find the node whose prefix is exactly `prefix`.
    pub fn lookup(&self, prefix: &str) -> Option<NodeId> {
        self.by_prefix.get(prefix).copied()
    }

    pub fn record(&self, id: NodeId) -> &NodeRecord<'t> {
        &self.records[id.index()]
    }

    /// Nodes whose first compatible equals `compatible` (raw text), in order
    /// of first appearance.
    pub fn nodes_with_compatible(&self, compatible: &str) -> Vec<NodeId> {
        self.filter_ids(|record| record.compatible() == Some(compatible))
    }

    /// Nodes classified as `kind`, in order of first appearance.
    pub fn nodes_of(&self, kind: NodeKind) -> Vec<NodeId> {
        self.filter_ids(|record| record.kind() == Some(kind))
    }

    fn filter_ids(&self, mut pred: impl FnMut(&NodeRecord<'t>) -> bool) -> Vec<NodeId> {
        let mut ids = Vec::new();
        for (i, record) in self.records.iter().enumerate() {
            if pred(record) {
                #[allow(clippy::cast_possible_truncation)]
                ids.push(NodeId(i as u32));
            }
        }
        ids
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
