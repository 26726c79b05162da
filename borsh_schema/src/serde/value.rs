use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

mod de;
mod ser;
pub use de::*;
pub use ser::*;

/// The name → value mapping a decode produces and an encode consumes.
/// Struct fields nest the same shape.
pub type ValueMap = BTreeMap<String, Value>;

/// One decoded/encodable value.
///
/// Integers are held at full width (`u128`/`i128`) whatever width the schema
/// declares; the declared width is enforced at encode time, which is what
/// makes an out-of-range value representable and reportable. Both float
/// widths live in `Float`; an `f32` body widens losslessly on decode.
/// `Unit` doubles as the absent marker for optional fields.
#[derive(Clone, Debug)]
pub enum Value {
    UInt(u128),
    Int(i128),
    Float(f64),
    Str(String),
    Unit,
    Array(Vec<Value>),
    Map(BTreeMap<Value, Value>),
    Set(BTreeSet<Value>),
    Struct(ValueMap),
}

/* The total order below is what makes set and map encodings canonical:
BTreeSet/BTreeMap iterate ascending by it. Same-kind values compare natively;
UInt and Int compare numerically across the two variants, so a set holding a
mixture still sorts and dedups by magnitude; floats use the IEEE total order;
any other cross-kind pair falls back to the kind ordinal. */
impl Ord for Value {
    fn cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Self::UInt(slf), Self::UInt(oth)) => slf.cmp(oth),
            (Self::Int(slf), Self::Int(oth)) => slf.cmp(oth),
            (Self::UInt(slf), Self::Int(oth)) => cmp_uint_int(*slf, *oth),
            (Self::Int(slf), Self::UInt(oth)) => cmp_uint_int(*oth, *slf).reverse(),
            (Self::Float(slf), Self::Float(oth)) => slf.total_cmp(oth),
            (Self::Str(slf), Self::Str(oth)) => slf.cmp(oth),
            (Self::Unit, Self::Unit) => Ordering::Equal,
            (Self::Array(slf), Self::Array(oth)) => slf.cmp(oth),
            (Self::Map(slf), Self::Map(oth)) => slf.cmp(oth),
            (Self::Set(slf), Self::Set(oth)) => slf.cmp(oth),
            (Self::Struct(slf), Self::Struct(oth)) => slf.cmp(oth),
            _ => ValueKind::from(self).cmp(&ValueKind::from(other)),
        }
    }
}
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
/* Equality is defined through the same comparison, so it can never disagree
with the order the canonical containers sort by. */
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Value {}

fn cmp_uint_int(u: u128, i: i128) -> Ordering {
    if i < 0 {
        Ordering::Greater
    } else {
        u.cmp(&(i as u128))
    }
}

/// Which [`Value`] variant a value is, for diagnostics and for the cross-kind
/// ordering fallback.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum ValueKind {
    UInt,
    Int,
    Float,
    Str,
    Unit,
    Array,
    Map,
    Set,
    Struct,
}
impl From<&Value> for ValueKind {
    fn from(value: &Value) -> Self {
        match value {
            Value::UInt(_) => ValueKind::UInt,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Unit => ValueKind::Unit,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
            Value::Set(_) => ValueKind::Set,
            Value::Struct(_) => ValueKind::Struct,
        }
    }
}
impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::UInt => "unsigned integer",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Str => "string",
            Self::Unit => "unit",
            Self::Array => "array",
            Self::Map => "map",
            Self::Set => "set",
            Self::Struct => "struct",
        }
    }
}
