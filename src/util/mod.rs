//! Common utilities

pub mod endian;

pub use endian::{Endianness, Normalizer};
