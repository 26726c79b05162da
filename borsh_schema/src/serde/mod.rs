//! # Wire format
//!
//! A [`Schema`](crate::Schema)'s fields are encoded back-to-back in declared
//! order. There is no framing, no field names, and no type tags on the wire;
//! the schema is the sole authority on how to read the bytes back, and the
//! same schema must be supplied to both ends.
//!
//! All multi-byte scalars are little-endian. Dynamic-length bodies are
//! preceded by a `u32` length prefix. Optionals are preceded by a one-byte
//! presence flag.
//!
//! ```text
//! field u8 .. u128 / i8 .. i128:
//!     body:           [u8; W]         // W in {1, 2, 4, 8, 16};
//!                                     // two's-complement for i*
//!
//! field f32 / f64:
//!     body:           [u8; 4] or [u8; 8]     // IEEE-754 bit pattern
//!
//! field unit:
//!     // zero bytes
//!
//! field string:
//!     byte_len:       u32
//!     body:           [u8; byte_len]  // UTF-8
//!
//! field fixed_array(elem, N):
//!     elem_0 .. elem_{N-1}            // no prefix; N comes from the schema
//!
//! field dynamic_array(elem):
//!     elem_count:     u32
//!     elem_0 .. elem_{elem_count-1}
//!
//! field map(key, val):
//!     entry_count:    u32
//!     key_0, val_0, .. key_{entry_count-1}, val_{entry_count-1}
//!                                     // ascending key order
//!
//! field set(elem):
//!     elem_count:     u32
//!     elem_0 .. elem_{elem_count-1}   // ascending element order
//!
//! field option(inner):
//!     presence:       u8              // 0 = absent, 1 = present
//!     inner:          ..              // only when present
//!
//! field struct(nested_schema):
//!     field_0 .. field_{n-1}          // nested schema's declared order
//! ```
//!
//! Map and set bodies are written in ascending element order (by the total
//! order on [`Value`]), so one logical value has exactly one encoding. The
//! decoder does not demand sorted input and resolves duplicate map keys as
//! last-write-wins.

mod value;
mod wire;

pub use value::*;
use wire::*;
