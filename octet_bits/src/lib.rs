//! # octet_bits
//!
//! A `no_std` compatible library for bit and nibble access on single bytes.
//!
//! [`Octet`] wraps one byte. [`Quartet`] wraps one nibble and keeps the
//! upper half of its backing byte at zero. Bit positions are typed
//! ([`OctetIndex`], [`QuartetIndex`]), so an out-of-range index cannot be
//! written down.
//!
//! ```rust
//! use octet_bits::{Octet, OctetIndex, QuartetPosition, quartets_from_byte};
//!
//! let mut o = Octet::from_byte(0b0110_1001);
//! o.unset(OctetIndex::Bit0).set(OctetIndex::Bit7);
//! assert_eq!(o.to_string(), "11101000");
//!
//! // split a byte, rejoin it
//! let (hi, lo) = quartets_from_byte(0xC4);
//! assert_eq!(octet_bits::Octet::from_quartets(hi, lo).byte(), 0xC4);
//!
//! // swap the nibbles
//! let (hi, lo) = o.quartets();
//! o.overwrite_quartet(hi, QuartetPosition::Lo)
//!     .overwrite_quartet(lo, QuartetPosition::Hi);
//! assert_eq!(o.byte(), 0b1000_1110);
//! ```
//!
//! ## Features
//! - `std` (default): `std::error::Error` for [`BitsError`] via `thiserror`
//! - `alloc`: `String` renderers (`binary_string`, `hex_string`)
//!
//! The `core::fmt` traits (`Display`, `Binary`, `LowerHex`, `UpperHex`) are
//! always available.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub use error::BitsError;

mod bit_ops;
pub use bit_ops::SetBits;

pub mod index;
pub use index::{BitIndex, OctetIndex, QuartetIndex, QuartetPosition};

pub mod map;
pub use map::{OctetMap, QuartetMap};

pub mod octet;
pub use octet::Octet;

pub mod quartet;
pub use quartet::{Quartet, quartets_from_byte};
