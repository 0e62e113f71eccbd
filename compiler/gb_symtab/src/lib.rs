//! Symbol tables for devicetree-generated headers.
//!
//! The devicetree preprocessor flattens the hardware tree into a list of
//! `#define` declarations. Node identity, properties and parent links are all
//! encoded in the macro names:
//!
//! ```text
//! #define DT_N_S_greybus0_S_bundle0_P_compatible_IDX_0 "zephyr,greybus-bundle"
//! #define DT_N_S_greybus0_S_bundle0_P_id 0
//! #define DT_N_S_greybus0_S_bundle0_S_cport0_PARENT DT_N_S_greybus0_S_bundle0
//! ```
//!
//! Loading happens in two phases:
//!
//! 1. [`SymbolTable`] reads the declarations into a flat name → value table.
//! 2. [`NodeIndex`] groups the table by node prefix so that references
//!    (pointer handles, parent links) resolve with a second lookup instead of
//!    string surgery at every use site.

mod kind;
mod node;
mod table;

pub use kind::{NodeKind, CPORT_COMPATIBLES};
pub use node::{NodeId, NodeIndex, NodeRecord, COMPATIBLE_SUFFIX, PARENT_SUFFIX, PROP_SEPARATOR};
pub use table::{LoadError, Symbol, SymbolTable, DEFINE_MARKER};
