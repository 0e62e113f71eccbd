//! The manifest container and its append-only construction protocol.

use crate::{
    BundleDescriptor, CPortDescriptor, Descriptor, InterfaceDescriptor, ManifestHeader,
    StringDescriptor,
};

/// Append-only destination for resolved descriptors.
///
/// Callers hand over descriptors already resolved; ordering, size accounting
/// and serialization belong to the implementation.
pub trait ManifestSink {
    fn add_header(&mut self, header: ManifestHeader);
    fn add_string_desc(&mut self, desc: StringDescriptor);
    fn add_interface_desc(&mut self, desc: InterfaceDescriptor);
    fn add_bundle_desc(&mut self, desc: BundleDescriptor);
    fn add_cport_desc(&mut self, desc: CPortDescriptor);
}

/// In-memory manifest: a header plus descriptors in append order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Manifest {
    header: ManifestHeader,
    descriptors: Vec<Descriptor>,
}

impl Manifest {
    pub fn new(header: ManifestHeader) -> Self {
        Self {
            header,
            descriptors: Vec::new(),
        }
    }

    pub fn header(&self) -> ManifestHeader {
        self.header
    }

    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceDescriptor> {
        self.descriptors.iter().filter_map(|d| match d {
            Descriptor::Interface(desc) => Some(desc),
            _ => None,
        })
    }

    pub fn strings(&self) -> impl Iterator<Item = &StringDescriptor> {
        self.descriptors.iter().filter_map(|d| match d {
            Descriptor::String(desc) => Some(desc),
            _ => None,
        })
    }

    pub fn bundles(&self) -> impl Iterator<Item = &BundleDescriptor> {
        self.descriptors.iter().filter_map(|d| match d {
            Descriptor::Bundle(desc) => Some(desc),
            _ => None,
        })
    }

    pub fn cports(&self) -> impl Iterator<Item = &CPortDescriptor> {
        self.descriptors.iter().filter_map(|d| match d {
            Descriptor::CPort(desc) => Some(desc),
            _ => None,
        })
    }

    fn push(&mut self, desc: Descriptor) {
        tracing::trace!(?desc, "append descriptor");
        self.descriptors.push(desc);
    }
}

impl ManifestSink for Manifest {
    fn add_header(&mut self, header: ManifestHeader) {
        self.header = header;
    }

    fn add_string_desc(&mut self, desc: StringDescriptor) {
        self.push(Descriptor::String(desc));
    }

    fn add_interface_desc(&mut self, desc: InterfaceDescriptor) {
        self.push(Descriptor::Interface(desc));
    }

    fn add_bundle_desc(&mut self, desc: BundleDescriptor) {
        self.push(Descriptor::Bundle(desc));
    }

    fn add_cport_desc(&mut self, desc: CPortDescriptor) {
        self.push(Descriptor::CPort(desc));
    }
}
