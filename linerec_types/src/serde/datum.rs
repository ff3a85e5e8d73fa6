mod deser;
mod ser;
pub use deser::*;
pub use ser::*;

/// Tuples may nest at most this many levels below the root datum.
///
/// Both directions enforce it, so that anything that serializes also deserializes
/// without exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Datum {
    Null,
    Bool(bool),
    I64(i64),
    Bytes(Vec<u8>),
    Str(String),
    Tuple(Vec<Datum>),
}

impl From<bool> for Datum {
    fn from(b: bool) -> Self {
        Datum::Bool(b)
    }
}
impl From<i64> for Datum {
    fn from(i: i64) -> Self {
        Datum::I64(i)
    }
}
impl From<Vec<u8>> for Datum {
    fn from(b: Vec<u8>) -> Self {
        Datum::Bytes(b)
    }
}
impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Str(s.to_owned())
    }
}
impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::Str(s)
    }
}
impl From<Vec<Datum>> for Datum {
    fn from(members: Vec<Datum>) -> Self {
        Datum::Tuple(members)
    }
}
impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Datum::Null,
            Some(t) => t.into(),
        }
    }
}
