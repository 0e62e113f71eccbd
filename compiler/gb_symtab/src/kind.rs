//! Recognized Greybus node kinds.
//!
//! Compatibles are matched against the raw header text, so the surrounding
//! double quotes are part of each literal.

/// Compatible of the interface node.
const INTERFACE_COMPATIBLE: &str = "\"zephyr,greybus-interface\"";
/// Compatible of string nodes.
const STRING_COMPATIBLE: &str = "\"zephyr,greybus-string\"";
/// Compatible of bundle nodes.
const BUNDLE_COMPATIBLE: &str = "\"zephyr,greybus-bundle\"";

/// Controller compatibles that each become a `CPort` descriptor.
///
/// New controller protocols are supported by adding their compatible here.
pub const CPORT_COMPATIBLES: &[&str] = &[
    "\"zephyr,greybus-control\"",
    "\"zephyr,greybus-gpio-controller\"",
    "\"zephyr,greybus-i2c-controller\"",
    "\"zephyr,greybus-spi-controller\"",
];

/// Kind of a devicetree node, as far as the manifest is concerned.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Interface,
    String,
    Bundle,
    /// Any controller listed in [`CPORT_COMPATIBLES`].
    CPort,
}

impl NodeKind {
    /// Classify a raw compatible value.
    pub fn from_compatible(compatible: &str) -> Option<Self> {
        match compatible {
            INTERFACE_COMPATIBLE => Some(NodeKind::Interface),
            STRING_COMPATIBLE => Some(NodeKind::String),
            BUNDLE_COMPATIBLE => Some(NodeKind::Bundle),
            c if CPORT_COMPATIBLES.contains(&c) => Some(NodeKind::CPort),
            _ => None,
        }
    }

    /// Raw compatible literals that classify as this kind.
    pub fn compatibles(self) -> &'static [&'static str] {
        match self {
            NodeKind::Interface => &[INTERFACE_COMPATIBLE],
            NodeKind::String => &[STRING_COMPATIBLE],
            NodeKind::Bundle => &[BUNDLE_COMPATIBLE],
            NodeKind::CPort => CPORT_COMPATIBLES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Interface => "interface",
            NodeKind::String => "string",
            NodeKind::Bundle => "bundle",
            NodeKind::CPort => "cport",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
