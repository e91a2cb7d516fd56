//! Data models consumed by the section renderers.

mod shoe;

pub use shoe::Shoe;
