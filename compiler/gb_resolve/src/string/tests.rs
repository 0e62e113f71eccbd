#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::test_helpers::{minimal_with, minimal_without, MINIMAL};
use gb_symtab::SymbolTable;
use pretty_assertions::assert_eq;

const IFACE: InterfaceDescriptor = InterfaceDescriptor {
    vendor_string_id: 1,
    product_string_id: 2,
};

#[test]
fn test_strings_named_by_interface_get_parent() {
    let table = SymbolTable::parse(MINIMAL);
    let index = NodeIndex::build(&table);

    let strings = resolve_strings(&index, Some(&IFACE)).unwrap();
    assert_eq!(strings.len(), 2);
    assert_eq!(
        strings[&1],
        StringDescriptor {
            id: 1,
            string: "Acme".into(),
            parent: Some(IFACE),
        }
    );
    assert_eq!(strings[&2].string, "Widget");
    assert_eq!(strings[&2].parent, Some(IFACE));
}

#[test]
fn test_unreferenced_string_has_no_parent() {
    let table = minimal_with(
        "#define DT_N_S_greybus0_S_extra_P_compatible_IDX_0 \"zephyr,greybus-string\"\n\
         #define DT_N_S_greybus0_S_extra_P_id 7\n\
         #define DT_N_S_greybus0_S_extra_P_greybus_string \"Serial 0042\"\n",
    );
    let index = NodeIndex::build(&table);

    let strings = resolve_strings(&index, Some(&IFACE)).unwrap();
    assert_eq!(strings[&7].string, "Serial 0042");
    assert_eq!(strings[&7].parent, None);
}

#[test]
fn test_without_interface_no_string_has_parent() {
    let table = SymbolTable::parse(MINIMAL);
    let index = NodeIndex::build(&table);

    let strings = resolve_strings(&index, None).unwrap();
    assert!(strings.values().all(|s| s.parent.is_none()));
}

#[test]
fn test_missing_literal() {
    let table = minimal_without("S_product_P_greybus_string");
    let index = NodeIndex::build(&table);

    assert_eq!(
        resolve_strings(&index, Some(&IFACE)),
        Err(ResolveError::MissingAttribute {
            node: "DT_N_S_greybus0_S_interface_S_product".into(),
            attr: "greybus_string".into(),
        })
    );
}

#[test]
fn test_non_numeric_id() {
    let table = minimal_with("#define DT_N_S_greybus0_S_interface_S_vendor_P_id one\n");
    let index = NodeIndex::build(&table);

    let err = resolve_strings(&index, Some(&IFACE)).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidInteger { ref value, .. } if value == "one"));
    assert!(err
        .to_string()
        .contains("DT_N_S_greybus0_S_interface_S_vendor"));
}

#[test]
fn test_duplicate_id_keeps_later_node() {
    let table = minimal_with(
        "#define DT_N_S_greybus0_S_dup_P_compatible_IDX_0 \"zephyr,greybus-string\"\n\
         #define DT_N_S_greybus0_S_dup_P_id 1\n\
         #define DT_N_S_greybus0_S_dup_P_greybus_string \"Other\"\n",
    );
    let index = NodeIndex::build(&table);

    let strings = resolve_strings(&index, Some(&IFACE)).unwrap();
    assert_eq!(strings.len(), 2);
    assert_eq!(strings[&1].string, "Other");
}
