//! `mnfs` text rendering.
//!
//! ```text
//! [manifest-header]
//! version-major = 0
//! version-minor = 1
//!
//! [interface-descriptor]
//! vendor-string-id = 1
//! product-string-id = 2
//!
//! [string-descriptor 1]
//! string = Acme
//! ```

use std::fmt;

use crate::{Descriptor, Manifest};

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header();
        writeln!(f, "[manifest-header]")?;
        writeln!(f, "version-major = {}", header.version_major)?;
        writeln!(f, "version-minor = {}", header.version_minor)?;

        for desc in self.descriptors() {
            writeln!(f)?;
            write_descriptor(f, desc)?;
        }
        Ok(())
    }
}

fn write_descriptor(f: &mut fmt::Formatter<'_>, desc: &Descriptor) -> fmt::Result {
    match desc {
        Descriptor::Interface(d) => {
            writeln!(f, "[interface-descriptor]")?;
            writeln!(f, "vendor-string-id = {}", d.vendor_string_id)?;
            writeln!(f, "product-string-id = {}", d.product_string_id)
        }
        Descriptor::String(d) => {
            writeln!(f, "[string-descriptor {}]", d.id)?;
            writeln!(f, "string = {}", d.string)
        }
        Descriptor::Bundle(d) => {
            writeln!(f, "[bundle-descriptor {}]", d.id)?;
            writeln!(f, "class = {:#04x}", d.class)
        }
        Descriptor::CPort(d) => {
            writeln!(f, "[cport-descriptor {}]", d.id)?;
            writeln!(f, "bundle = {}", d.bundle)?;
            writeln!(f, "protocol = {:#04x}", d.protocol)
        }
    }
}
