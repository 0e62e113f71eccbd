//! Shared fixtures for resolver unit tests.

use gb_symtab::SymbolTable;

/// One interface, two strings, one bundle holding a control port.
pub(crate) const MINIMAL: &str = r#"
/* Generated by gen_defines.py */
#define DT_N_S_greybus0_P_compatible_IDX_0 "zephyr,greybus"
#define DT_N_S_greybus0_S_interface_P_compatible_IDX_0 "zephyr,greybus-interface"
#define DT_N_S_greybus0_S_interface_P_vendor_string_id_IDX_0_PH DT_N_S_greybus0_S_interface_S_vendor
#define DT_N_S_greybus0_S_interface_P_product_string_id_IDX_0_PH DT_N_S_greybus0_S_interface_S_product
#define DT_N_S_greybus0_S_interface_PARENT DT_N_S_greybus0
#define DT_N_S_greybus0_S_interface_S_vendor_P_compatible_IDX_0 "zephyr,greybus-string"
#define DT_N_S_greybus0_S_interface_S_vendor_P_id 1
#define DT_N_S_greybus0_S_interface_S_vendor_P_greybus_string "Acme"
#define DT_N_S_greybus0_S_interface_S_vendor_PARENT DT_N_S_greybus0_S_interface
#define DT_N_S_greybus0_S_interface_S_product_P_compatible_IDX_0 "zephyr,greybus-string"
#define DT_N_S_greybus0_S_interface_S_product_P_id 2
#define DT_N_S_greybus0_S_interface_S_product_P_greybus_string "Widget"
#define DT_N_S_greybus0_S_interface_S_product_PARENT DT_N_S_greybus0_S_interface
#define DT_N_S_greybus0_S_interface_S_bundle0_P_compatible_IDX_0 "zephyr,greybus-bundle"
#define DT_N_S_greybus0_S_interface_S_bundle0_P_id 0
#define DT_N_S_greybus0_S_interface_S_bundle0_P_bundle_class 2
#define DT_N_S_greybus0_S_interface_S_bundle0_PARENT DT_N_S_greybus0_S_interface
#define DT_N_S_greybus0_S_interface_S_bundle0_S_control_P_compatible_IDX_0 "zephyr,greybus-control"
#define DT_N_S_greybus0_S_interface_S_bundle0_S_control_P_id 0
#define DT_N_S_greybus0_S_interface_S_bundle0_S_control_P_cport_protocol 0
#define DT_N_S_greybus0_S_interface_S_bundle0_S_control_PARENT DT_N_S_greybus0_S_interface_S_bundle0
"#;

/// Parse `extra` declarations appended to [`MINIMAL`].
pub(crate) fn minimal_with(extra: &str) -> SymbolTable {
    SymbolTable::parse(&format!("{MINIMAL}{extra}"))
}

/// [`MINIMAL`] with every line containing `needle` removed.
pub(crate) fn minimal_without(needle: &str) -> SymbolTable {
    let source: String = MINIMAL
        .lines()
        .filter(|line| !line.contains(needle))
        .map(|line| format!("{line}\n"))
        .collect();
    SymbolTable::parse(&source)
}
