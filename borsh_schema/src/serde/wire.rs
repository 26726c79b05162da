use crate::error::{Error, Result};
use derive_more::Deref;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// The `u32` little-endian count that prefixes every dynamic-length body:
/// string bytes, dynamic array elements, map entries, set elements.
#[derive(Deref, Clone, Copy)]
pub struct CollectionLen(u32);
impl CollectionLen {
    pub fn from_len(field: &str, len: usize) -> Result<Self> {
        let int = u32::try_from(len).map_err(|_| Error::LengthOverflow {
            field: field.to_owned(),
            len,
        })?;
        Ok(Self(int))
    }

    pub fn from_le_buf(buf: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(buf))
    }
}

/// The one-byte marker preceding an optional payload. Any byte other than
/// these two is rejected.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, Debug)]
pub enum PresenceFlag {
    Absent = 0,
    Present = 1,
}
impl PresenceFlag {
    pub fn from_byte(field: &str, byte: u8) -> Result<Self> {
        Self::from_u8(byte).ok_or_else(|| Error::InvalidPresenceFlag {
            field: field.to_owned(),
            flag: byte,
        })
    }
}
