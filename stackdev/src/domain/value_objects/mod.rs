//! Value objects - immutable, validated domain types.

mod capacity;
mod config;
mod element;

pub use capacity::Capacity;
pub use config::{StackConfig, DEFAULT_CAPACITY};
pub use element::{Element, ELEMENT_SIZE, decode_element, encode_element};
