//! Greybus manifest assembly.
//!
//! A manifest is a header followed by an ordered list of descriptors.
//! Producers append fully resolved descriptors through [`ManifestSink`];
//! [`Manifest`] is the in-memory sink and renders either the `mnfs` text
//! source form ([`std::fmt::Display`]) or the packed `mnfb` blob
//! ([`Manifest::to_mnfb`]) that a Greybus module serves at runtime.

mod descriptor;
mod manifest;
mod mnfb;
mod mnfs;

pub use descriptor::{
    BundleDescriptor, CPortDescriptor, Descriptor, DescriptorType, InterfaceDescriptor,
    ManifestHeader, StringDescriptor,
};
pub use manifest::{Manifest, ManifestSink};
pub use mnfb::{ManifestError, MNFB_MAX_SIZE, STRING_DESC_MAX_SIZE, STRING_MAX_SIZE};
