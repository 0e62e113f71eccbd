//! Descriptor records.
//!
//! Field widths match the Greybus manifest binary format.

/// Manifest format version carried in the header.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ManifestHeader {
    pub version_major: u8,
    pub version_minor: u8,
}

impl ManifestHeader {
    pub const fn new(version_major: u8, version_minor: u8) -> Self {
        Self {
            version_major,
            version_minor,
        }
    }
}

impl Default for ManifestHeader {
    /// Version 0.1, the only version Greybus modules understand.
    fn default() -> Self {
        Self::new(0, 1)
    }
}

/// The interface descriptor. Root of the descriptor tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InterfaceDescriptor {
    pub vendor_string_id: u8,
    pub product_string_id: u8,
}

/// A string referenced by id from other descriptors.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StringDescriptor {
    pub id: u8,
    pub string: String,
    /// Set when the interface names this string as its vendor or product.
    pub parent: Option<InterfaceDescriptor>,
}

/// A bundle groups the `CPorts` of one device class.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BundleDescriptor {
    pub id: u8,
    pub class: u8,
}

/// A connection port speaking one protocol, owned by a bundle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CPortDescriptor {
    pub id: u16,
    /// Id of the owning [`BundleDescriptor`].
    pub bundle: u8,
    pub protocol: u8,
}

/// Wire type code of a descriptor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum DescriptorType {
    Interface = 0x01,
    String = 0x02,
    Bundle = 0x03,
    CPort = 0x04,
}

/// Any descriptor, in the order it was added to a manifest.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Descriptor {
    Interface(InterfaceDescriptor),
    String(StringDescriptor),
    Bundle(BundleDescriptor),
    CPort(CPortDescriptor),
}

impl Descriptor {
    pub fn descriptor_type(&self) -> DescriptorType {
        match self {
            Descriptor::Interface(_) => DescriptorType::Interface,
            Descriptor::String(_) => DescriptorType::String,
            Descriptor::Bundle(_) => DescriptorType::Bundle,
            Descriptor::CPort(_) => DescriptorType::CPort,
        }
    }
}
