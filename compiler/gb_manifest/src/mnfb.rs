//! `mnfb` binary packing.
//!
//! Layout, all integers little endian:
//!
//! ```text
//! header:     size: u16, version_major: u8, version_minor: u8
//! descriptor: size: u16, type: u8, pad: u8, body...
//! ```
//!
//! Every descriptor is zero-padded to a multiple of 4 bytes and its `size`
//! includes the 4 byte descriptor header. The manifest `size` covers the whole
//! blob, header included.

use crate::{Descriptor, Manifest};

/// Largest blob the 16 bit size field can describe.
pub const MNFB_MAX_SIZE: usize = 0xffff;
/// Longest string length the one byte length field can encode.
pub const STRING_MAX_SIZE: usize = 0xff;
/// Largest padded string descriptor, header included.
pub const STRING_DESC_MAX_SIZE: usize = DESC_HEADER_SIZE + 2 + STRING_MAX_SIZE;

const HEADER_SIZE: usize = 4;
const DESC_HEADER_SIZE: usize = 4;

/// Error packing a manifest into its binary form.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ManifestError {
    #[error(
        "string descriptor {id} is {len} bytes long and does not fit in {max} bytes",
        max = STRING_DESC_MAX_SIZE
    )]
    StringTooLong { id: u8, len: usize },

    #[error("manifest is {size} bytes (max {max})", max = MNFB_MAX_SIZE)]
    TooLarge { size: usize },
}

impl Manifest {
    /// Pack the manifest into an `mnfb` blob.
    pub fn to_mnfb(&self) -> Result<Vec<u8>, ManifestError> {
        let header = self.header();
        let mut out = Vec::with_capacity(HEADER_SIZE + 8 * self.descriptors().len());
        // Size is patched in once every descriptor is packed.
        out.extend_from_slice(&[0, 0, header.version_major, header.version_minor]);

        for desc in self.descriptors() {
            pack_descriptor(&mut out, desc)?;
        }

        let size = out.len();
        let Ok(size_le) = u16::try_from(size) else {
            return Err(ManifestError::TooLarge { size });
        };
        out[..2].copy_from_slice(&size_le.to_le_bytes());
        tracing::debug!(size, descriptors = self.descriptors().len(), "packed mnfb");
        Ok(out)
    }
}

fn pack_descriptor(out: &mut Vec<u8>, desc: &Descriptor) -> Result<(), ManifestError> {
    let ty = desc.descriptor_type() as u8;
    match desc {
        Descriptor::Interface(d) => {
            // Trailing bytes are the (unused) feature flags and padding.
            push_desc(out, ty, &[d.vendor_string_id, d.product_string_id, 0, 0]);
        }
        Descriptor::String(d) => {
            let bytes = d.string.as_bytes();
            let padded = (DESC_HEADER_SIZE + 2 + bytes.len()).next_multiple_of(4);
            let len = match u8::try_from(bytes.len()) {
                Ok(len) if padded <= STRING_DESC_MAX_SIZE => len,
                _ => {
                    return Err(ManifestError::StringTooLong {
                        id: d.id,
                        len: bytes.len(),
                    })
                }
            };
            let mut body = Vec::with_capacity(2 + bytes.len());
            body.push(len);
            body.push(d.id);
            body.extend_from_slice(bytes);
            push_desc(out, ty, &body);
        }
        Descriptor::Bundle(d) => {
            push_desc(out, ty, &[d.id, d.class, 0, 0]);
        }
        Descriptor::CPort(d) => {
            let [lo, hi] = d.id.to_le_bytes();
            push_desc(out, ty, &[lo, hi, d.bundle, d.protocol]);
        }
    }
    if out.len() > MNFB_MAX_SIZE {
        return Err(ManifestError::TooLarge { size: out.len() });
    }
    Ok(())
}

/// Append one descriptor, padding it to a 4 byte boundary.
fn push_desc(out: &mut Vec<u8>, ty: u8, body: &[u8]) {
    let size = (DESC_HEADER_SIZE + body.len()).next_multiple_of(4);
    // Bodies never exceed STRING_DESC_MAX_SIZE, so this always fits.
    #[allow(clippy::cast_possible_truncation)]
    let size_le = (size as u16).to_le_bytes();
    out.extend_from_slice(&size_le);
    out.push(ty);
    out.push(0);
    out.extend_from_slice(body);
    out.resize(out.len() + size - DESC_HEADER_SIZE - body.len(), 0);
}
