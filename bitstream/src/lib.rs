//! Bit packing primitives for the BFEN position codec.
//!
//! This crate provides [`BitField`] (a value tagged with its exact width),
//! [`pack`]/[`pack_into`] for laying fields out as one contiguous MSB-first
//! bitstream, and [`BitReader`] for reading such a stream back.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **No padding between fields** - A field starts on the bit right after the previous one.
//! - **No domain knowledge** - This crate knows nothing about chess positions.
//! - **Explicit errors** - Invalid fields are rejected at construction, never clamped.
//!
//! # Example
//!
//! ```
//! use bitstream::{pack, BitField, BitReader};
//!
//! let fields = [
//!     BitField::new(1, 1).unwrap(),
//!     BitField::new(42, 7).unwrap(),
//!     BitField::new(0b101, 3).unwrap(),
//! ];
//! let bytes = pack(&fields);
//! assert_eq!(bytes.len(), 2);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read_bits(1).unwrap(), 1);
//! assert_eq!(reader.read_bits(7).unwrap(), 42);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! ```

mod error;
mod field;
mod packer;
mod reader;

pub use error::{BitError, BitResult};
pub use field::{BitField, MAX_FIELD_BITS};
pub use packer::{pack, pack_into, packed_len, total_bits, BitPacker};
pub use reader::BitReader;
