use std::string::FromUtf8Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a schema construction, an encode, or a decode can fail.
///
/// Errors raised while walking a buffer or a value tree carry the name of the
/// innermost field being processed.
#[derive(Error, Debug)]
pub enum Error {
    /* Schema construction. */
    #[error("schema field name must be non-empty")]
    EmptyFieldName,
    #[error("duplicate schema field `{field}`")]
    DuplicateField { field: String },
    #[error("schema field `{field}` nests deeper than {max} levels")]
    SchemaTooDeep { field: String, max: usize },

    /* Schema lookup. */
    #[error("schema has no field `{field}`")]
    UnknownField { field: String },

    /* Decode. */
    #[error("ran out of data reading field `{field}`: needed {needed} bytes, {remaining} remain")]
    Truncated {
        field: String,
        needed: usize,
        remaining: usize,
    },
    #[error("string field `{field}` is not valid UTF-8")]
    InvalidUtf8 {
        field: String,
        #[source]
        source: FromUtf8Error,
    },
    #[error("invalid presence flag {flag:#04x} for optional field `{field}`")]
    InvalidPresenceFlag { field: String, flag: u8 },
    #[error("length {len} of field `{field}` exceeds the configured maximum {max}")]
    CollectionTooLong { field: String, len: usize, max: usize },

    /* Encode. */
    #[error("missing value for field `{field}`")]
    MissingField { field: String },
    #[error("value {value} does not fit {ty} field `{field}`")]
    OutOfRange {
        field: String,
        ty: &'static str,
        value: String,
    },
    #[error("fixed array field `{field}` expects {expected} elements, got {actual}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
    #[error("field `{field}` expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("field `{field}` has {len} elements, too many to length-prefix")]
    LengthOverflow { field: String, len: usize },
}
