use crate::error::{Error, Result};
use crate::types::BorshType;
use indexmap::IndexMap;


/// An ordered mapping from field name to [`BorshType`].
///
/// Insertion order is the wire order: the encoder and decoder walk fields in
/// exactly the order they were supplied to [`Schema::new`]. All shape
/// validation happens here, up front, so the engines never meet an un-typed
/// or unboundedly nested node. A constructed schema is immutable.
#[derive(Clone, Debug)]
pub struct Schema {
    fields: IndexMap<String, BorshType>,
}

impl Schema {
    /// Maximum levels a field descriptor may nest. Engine recursion during
    /// encode and decode is bounded by this, since the wire format carries no
    /// nesting of its own.
    pub const MAX_DEPTH: usize = 64;

    pub fn new<S, I>(fields: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, BorshType)>,
    {
        let mut map = IndexMap::new();
        for (name, ty) in fields {
            let name = name.into();
            if name.is_empty() {
                return Err(Error::EmptyFieldName);
            }
            if map.contains_key(&name) {
                return Err(Error::DuplicateField { field: name });
            }
            if ty.exceeds_depth(Self::MAX_DEPTH) {
                return Err(Error::SchemaTooDeep {
                    field: name,
                    max: Self::MAX_DEPTH,
                });
            }
            map.insert(name, ty);
        }
        Ok(Self { fields: map })
    }

    pub fn field(&self, name: &str) -> Result<&BorshType> {
        self.fields.get(name).ok_or_else(|| Error::UnknownField {
            field: name.to_owned(),
        })
    }

    /// Fields in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BorshType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/* Equality is order-sensitive: the same fields in a different order describe
a different wire layout. */
impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
impl Eq for Schema {}
