//! Fixed-width element framing.
//!
//! Elements cross the byte interface in host byte order, 4 bytes each.

/// The stack's unit of storage.
pub type Element = i32;

/// Width of one element on the byte interface.
pub const ELEMENT_SIZE: usize = core::mem::size_of::<Element>();

/// Serialize an element into its native-order bytes.
#[inline]
pub const fn encode_element(value: Element) -> [u8; ELEMENT_SIZE] {
    value.to_ne_bytes()
}

/// Build an element from up to [`ELEMENT_SIZE`] bytes.
///
/// A short chunk fills the low-address bytes and the rest stay zero, so on a
/// little-endian host the missing high-order bytes are zero. Bytes beyond
/// `ELEMENT_SIZE` are ignored.
#[inline]
pub fn decode_element(chunk: &[u8]) -> Element {
    let mut raw = [0u8; ELEMENT_SIZE];
    let len = chunk.len().min(ELEMENT_SIZE);
    raw[..len].copy_from_slice(&chunk[..len]);
    Element::from_ne_bytes(raw)
}
