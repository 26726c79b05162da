use crate::types::Schema;

/// The closed set of shapes a schema field may declare.
///
/// Primitives are unit variants. Composite shapes carry their nested
/// descriptor(s), so an ill-formed nesting is unrepresentable and the encode
/// and decode dispatches can match exhaustively with no fallback arm.
///
/// The wire layout of each variant is documented at [`crate::serde`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum BorshType {
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    F32,
    F64,
    Unit,
    Str,
    /// Element descriptor and element count. The count is part of the type,
    /// not of the data.
    FixedArray(Box<BorshType>, usize),
    /// Element descriptor. The count is part of the data (length-prefixed).
    DynamicArray(Box<BorshType>),
    /// Key and value descriptors.
    Map(Box<BorshType>, Box<BorshType>),
    Set(Box<BorshType>),
    /// Inner descriptor. A one-byte presence flag precedes the payload.
    Option(Box<BorshType>),
    /// Nested schema; its fields encode in their own declared order.
    Struct(Schema),
}

/* Boxing constructors for the parametrized shapes. */
impl BorshType {
    pub fn fixed_array(elem: BorshType, len: usize) -> Self {
        Self::FixedArray(Box::new(elem), len)
    }
    pub fn dynamic_array(elem: BorshType) -> Self {
        Self::DynamicArray(Box::new(elem))
    }
    pub fn map(key: BorshType, value: BorshType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }
    pub fn set(elem: BorshType) -> Self {
        Self::Set(Box::new(elem))
    }
    pub fn option(inner: BorshType) -> Self {
        Self::Option(Box::new(inner))
    }
}

impl BorshType {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Unit => "unit",
            Self::Str => "string",
            Self::FixedArray(..) => "fixed array",
            Self::DynamicArray(_) => "dynamic array",
            Self::Map(..) => "map",
            Self::Set(_) => "set",
            Self::Option(_) => "option",
            Self::Struct(_) => "struct",
        }
    }

    /// Whether this descriptor nests more than `budget` levels deep.
    ///
    /// Recursion is bounded by `budget`, so probing a pathologically deep
    /// hand-built descriptor cannot itself overflow the stack.
    pub(crate) fn exceeds_depth(&self, budget: usize) -> bool {
        if budget == 0 {
            return true;
        }
        match self {
            Self::FixedArray(elem, _) | Self::DynamicArray(elem) => {
                elem.exceeds_depth(budget - 1)
            }
            Self::Set(elem) | Self::Option(elem) => elem.exceeds_depth(budget - 1),
            Self::Map(key, value) => {
                key.exceeds_depth(budget - 1) || value.exceeds_depth(budget - 1)
            }
            Self::Struct(nested) => nested.iter().any(|(_, ty)| ty.exceeds_depth(budget - 1)),
            _ => false,
        }
    }
}
