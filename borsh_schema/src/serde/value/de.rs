use crate::error::{Error, Result};
use crate::serde::{CollectionLen, PresenceFlag, Value, ValueMap};
use crate::types::{BorshType, Schema};
use std::collections::{BTreeMap, BTreeSet};

pub const DEFAULT_MAX_COLLECTION_LEN: usize = 1 << 20;

/// Resource budget for one decode call.
///
/// Every length prefix that drives an element loop (dynamic array, map, set)
/// is checked against `max_collection_len` before anything is allocated, so a
/// corrupt prefix in a tiny buffer cannot demand unbounded work. String
/// prefixes are instead checked against the bytes actually remaining.
#[derive(Clone, Debug)]
pub struct DecodeLimits {
    pub max_collection_len: usize,
}
impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_collection_len: DEFAULT_MAX_COLLECTION_LEN,
        }
    }
}

/// Decodes one value tree out of `buf`, walking `schema`'s fields in their
/// declared order. Returns the tree and the count of bytes consumed; trailing
/// bytes beyond the last field are permitted and left unread.
pub fn decode(schema: &Schema, buf: &[u8]) -> Result<(ValueMap, usize)> {
    decode_with_limits(schema, buf, &DecodeLimits::default())
}

pub fn decode_with_limits(
    schema: &Schema,
    buf: &[u8],
    limits: &DecodeLimits,
) -> Result<(ValueMap, usize)> {
    let mut r = ValueReader::new(buf, limits.clone());
    let fields = r.read_fields(schema)?;
    Ok((fields, r.pos))
}

struct ValueReader<'a> {
    buf: &'a [u8],
    pos: usize,
    limits: DecodeLimits,
}

impl<'a> ValueReader<'a> {
    fn new(buf: &'a [u8], limits: DecodeLimits) -> Self {
        Self {
            buf,
            pos: 0,
            limits,
        }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The sole place the cursor advances.
    fn take(&mut self, field: &str, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::Truncated {
                field: field.to_owned(),
                needed: n,
                remaining: self.remaining(),
            });
        }
        let body = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(body)
    }

    fn take_arr<const N: usize>(&mut self, field: &str) -> Result<[u8; N]> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.take(field, N)?);
        Ok(arr)
    }

    fn read_fields(&mut self, schema: &Schema) -> Result<ValueMap> {
        let mut fields = ValueMap::new();
        for (name, ty) in schema.iter() {
            let value = self.read_value(name, ty)?;
            fields.insert(name.to_owned(), value);
        }
        Ok(fields)
    }

    fn read_value(&mut self, field: &str, ty: &BorshType) -> Result<Value> {
        match ty {
            BorshType::U8 => self.read_uint(field, 1),
            BorshType::U16 => self.read_uint(field, 2),
            BorshType::U32 => self.read_uint(field, 4),
            BorshType::U64 => self.read_uint(field, 8),
            BorshType::U128 => self.read_uint(field, 16),
            BorshType::I8 => self.read_int(field, 1),
            BorshType::I16 => self.read_int(field, 2),
            BorshType::I32 => self.read_int(field, 4),
            BorshType::I64 => self.read_int(field, 8),
            BorshType::I128 => self.read_int(field, 16),
            BorshType::F32 => {
                let body = self.take_arr::<4>(field)?;
                Ok(Value::Float(f32::from_le_bytes(body) as f64))
            }
            BorshType::F64 => {
                let body = self.take_arr::<8>(field)?;
                Ok(Value::Float(f64::from_le_bytes(body)))
            }
            BorshType::Unit => Ok(Value::Unit),
            BorshType::Str => self.read_str(field),
            BorshType::FixedArray(elem, len) => {
                let mut elems = Vec::with_capacity(*len);
                for _ in 0..*len {
                    elems.push(self.read_value(field, elem)?);
                }
                Ok(Value::Array(elems))
            }
            BorshType::DynamicArray(elem) => {
                let len = self.read_len(field)?;
                let mut elems = Vec::with_capacity(len);
                for _ in 0..len {
                    elems.push(self.read_value(field, elem)?);
                }
                Ok(Value::Array(elems))
            }
            BorshType::Map(key, value) => {
                let len = self.read_len(field)?;
                let mut entries = BTreeMap::new();
                for _ in 0..len {
                    let k = self.read_value(field, key)?;
                    let v = self.read_value(field, value)?;
                    // Duplicate keys: last write wins.
                    entries.insert(k, v);
                }
                Ok(Value::Map(entries))
            }
            BorshType::Set(elem) => {
                let len = self.read_len(field)?;
                let mut elems = BTreeSet::new();
                for _ in 0..len {
                    elems.insert(self.read_value(field, elem)?);
                }
                Ok(Value::Set(elems))
            }
            BorshType::Option(inner) => {
                let body = self.take_arr::<1>(field)?;
                match PresenceFlag::from_byte(field, body[0])? {
                    PresenceFlag::Absent => Ok(Value::Unit),
                    PresenceFlag::Present => self.read_value(field, inner),
                }
            }
            BorshType::Struct(nested) => Ok(Value::Struct(self.read_fields(nested)?)),
        }
    }

    fn read_uint(&mut self, field: &str, width: usize) -> Result<Value> {
        let body = self.take(field, width)?;
        let mut le = [0u8; 16];
        le[..width].copy_from_slice(body);
        Ok(Value::UInt(u128::from_le_bytes(le)))
    }

    fn read_int(&mut self, field: &str, width: usize) -> Result<Value> {
        let body = self.take(field, width)?;
        /* Sign-extend to 16 bytes: two's-complement over 8*width bits. */
        let fill = if body[width - 1] & 0x80 != 0 { 0xFF } else { 0x00 };
        let mut le = [fill; 16];
        le[..width].copy_from_slice(body);
        Ok(Value::Int(i128::from_le_bytes(le)))
    }

    fn read_str(&mut self, field: &str) -> Result<Value> {
        let len = self.read_prefix(field)?;
        let body = self.take(field, len)?;
        let s = String::from_utf8(body.to_vec()).map_err(|source| Error::InvalidUtf8 {
            field: field.to_owned(),
            source,
        })?;
        Ok(Value::Str(s))
    }

    fn read_prefix(&mut self, field: &str) -> Result<usize> {
        let body = self.take_arr::<4>(field)?;
        let len = CollectionLen::from_le_buf(body);
        Ok(*len as usize)
    }

    /// Length prefix for an element loop: prefix plus the per-call cap.
    fn read_len(&mut self, field: &str) -> Result<usize> {
        let len = self.read_prefix(field)?;
        if len > self.limits.max_collection_len {
            return Err(Error::CollectionTooLong {
                field: field.to_owned(),
                len,
                max: self.limits.max_collection_len,
            });
        }
        Ok(len)
    }
}
