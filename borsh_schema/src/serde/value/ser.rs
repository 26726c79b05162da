use crate::error::{Error, Result};
use crate::serde::{CollectionLen, PresenceFlag, Value, ValueKind, ValueMap};
use crate::types::{BorshType, Schema};
use std::fmt::Display;

/// Encodes `values` against `schema`, appending fields in the schema's
/// declared order. A field missing from `values` is an error unless its
/// descriptor is an option, in which case absence encodes as the absent flag.
pub fn encode(schema: &Schema, values: &ValueMap) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_fields(schema, values, &mut buf)?;
    Ok(buf)
}

fn write_fields(schema: &Schema, values: &ValueMap, buf: &mut Vec<u8>) -> Result<()> {
    for (name, ty) in schema.iter() {
        match values.get(name) {
            Some(value) => write_value(name, ty, value, buf)?,
            None => match ty {
                BorshType::Option(_) => buf.push(PresenceFlag::Absent as u8),
                _ => {
                    return Err(Error::MissingField {
                        field: name.to_owned(),
                    })
                }
            },
        }
    }
    Ok(())
}

fn write_value(field: &str, ty: &BorshType, value: &Value, buf: &mut Vec<u8>) -> Result<()> {
    match ty {
        BorshType::U8 => write_uint(field, ty, 1, value, buf),
        BorshType::U16 => write_uint(field, ty, 2, value, buf),
        BorshType::U32 => write_uint(field, ty, 4, value, buf),
        BorshType::U64 => write_uint(field, ty, 8, value, buf),
        BorshType::U128 => write_uint(field, ty, 16, value, buf),
        BorshType::I8 => write_int(field, ty, 1, value, buf),
        BorshType::I16 => write_int(field, ty, 2, value, buf),
        BorshType::I32 => write_int(field, ty, 4, value, buf),
        BorshType::I64 => write_int(field, ty, 8, value, buf),
        BorshType::I128 => write_int(field, ty, 16, value, buf),
        BorshType::F32 => match value {
            Value::Float(f) => {
                buf.extend_from_slice(&(*f as f32).to_le_bytes());
                Ok(())
            }
            _ => Err(mismatch(field, ty, value)),
        },
        BorshType::F64 => match value {
            Value::Float(f) => {
                buf.extend_from_slice(&f.to_le_bytes());
                Ok(())
            }
            _ => Err(mismatch(field, ty, value)),
        },
        BorshType::Unit => match value {
            Value::Unit => Ok(()),
            _ => Err(mismatch(field, ty, value)),
        },
        BorshType::Str => match value {
            Value::Str(s) => {
                write_prefix(field, s.len(), buf)?;
                buf.extend_from_slice(s.as_bytes());
                Ok(())
            }
            _ => Err(mismatch(field, ty, value)),
        },
        BorshType::FixedArray(elem, len) => match value {
            Value::Array(elems) => {
                if elems.len() != *len {
                    return Err(Error::LengthMismatch {
                        field: field.to_owned(),
                        expected: *len,
                        actual: elems.len(),
                    });
                }
                for e in elems {
                    write_value(field, elem, e, buf)?;
                }
                Ok(())
            }
            _ => Err(mismatch(field, ty, value)),
        },
        BorshType::DynamicArray(elem) => match value {
            Value::Array(elems) => {
                write_prefix(field, elems.len(), buf)?;
                for e in elems {
                    write_value(field, elem, e, buf)?;
                }
                Ok(())
            }
            _ => Err(mismatch(field, ty, value)),
        },
        BorshType::Map(key_ty, val_ty) => match value {
            Value::Map(entries) => {
                write_prefix(field, entries.len(), buf)?;
                /* BTreeMap iterates ascending by key: canonical entry order. */
                for (k, v) in entries {
                    write_value(field, key_ty, k, buf)?;
                    write_value(field, val_ty, v, buf)?;
                }
                Ok(())
            }
            _ => Err(mismatch(field, ty, value)),
        },
        BorshType::Set(elem) => match value {
            Value::Set(elems) => {
                write_prefix(field, elems.len(), buf)?;
                /* BTreeSet iterates ascending: canonical element order. */
                for e in elems {
                    write_value(field, elem, e, buf)?;
                }
                Ok(())
            }
            _ => Err(mismatch(field, ty, value)),
        },
        BorshType::Option(inner) => match value {
            Value::Unit => {
                buf.push(PresenceFlag::Absent as u8);
                Ok(())
            }
            present => {
                buf.push(PresenceFlag::Present as u8);
                write_value(field, inner, present, buf)
            }
        },
        BorshType::Struct(nested) => match value {
            Value::Struct(fields) => write_fields(nested, fields, buf),
            _ => Err(mismatch(field, ty, value)),
        },
    }
}

fn write_prefix(field: &str, len: usize, buf: &mut Vec<u8>) -> Result<()> {
    let len = CollectionLen::from_len(field, len)?;
    buf.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

fn write_uint(
    field: &str,
    ty: &BorshType,
    width: usize,
    value: &Value,
    buf: &mut Vec<u8>,
) -> Result<()> {
    let int: u128 = match value {
        Value::UInt(u) => *u,
        Value::Int(i) if *i >= 0 => *i as u128,
        Value::Int(i) => return Err(out_of_range(field, ty, i)),
        _ => return Err(mismatch(field, ty, value)),
    };
    if width < 16 && int >> (8 * width) != 0 {
        return Err(out_of_range(field, ty, int));
    }
    buf.extend_from_slice(&int.to_le_bytes()[..width]);
    Ok(())
}

fn write_int(
    field: &str,
    ty: &BorshType,
    width: usize,
    value: &Value,
    buf: &mut Vec<u8>,
) -> Result<()> {
    let int: i128 = match value {
        Value::Int(i) => *i,
        Value::UInt(u) => match i128::try_from(*u) {
            Ok(i) => i,
            Err(_) => return Err(out_of_range(field, ty, u)),
        },
        _ => return Err(mismatch(field, ty, value)),
    };
    if width < 16 {
        let bits = 8 * width as u32;
        let min = -(1i128 << (bits - 1));
        let max = (1i128 << (bits - 1)) - 1;
        if int < min || int > max {
            return Err(out_of_range(field, ty, int));
        }
    }
    /* The low `width` bytes of a range-checked i128 are its 8*width-bit
    two's-complement representation. */
    buf.extend_from_slice(&int.to_le_bytes()[..width]);
    Ok(())
}

fn mismatch(field: &str, ty: &BorshType, value: &Value) -> Error {
    Error::TypeMismatch {
        field: field.to_owned(),
        expected: ty.name(),
        actual: ValueKind::from(value).name(),
    }
}

fn out_of_range(field: &str, ty: &BorshType, value: impl Display) -> Error {
    Error::OutOfRange {
        field: field.to_owned(),
        ty: ty.name(),
        value: value.to_string(),
    }
}
