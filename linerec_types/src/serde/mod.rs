//! # Serialization format
//!
//! The one de/serializable type is [`Datum`]. Every record blob is exactly one
//! serialized root `Datum`.
//!
//! The below pseudocode depicts the serialized representations.
//! All integers are little-endian.
//!
//! Every datum starts with `datum_type`, which is encoded in `u8`.
//! Some `Datum` types have fixed body lengths; these lengths are not encoded.
//! `Datum::Bytes` and `Datum::Str` have dynamic body lengths, which are
//! encoded following `datum_type`.
//!
//! A `Datum::Tuple` nests other `Datum`s, including possibly other `Datum::Tuple`s.
//!
//! ```text
//! struct Datum::Null {
//!     datum_type:     u8,
//! }
//!
//! struct Datum::Bool {
//!     datum_type:     u8,
//!     datum_body:     u8,     // 0 or 1
//! }
//!
//! struct Datum::I64 {
//!     datum_type:     u8,
//!     datum_body:     [u8; 8],
//! }
//!
//! struct Datum::Bytes or Datum::Str {
//!     datum_type:         u8,
//!     datum_body_len:     u32,
//!     datum_body:         [u8; datum_body_len],
//! }
//!
//! struct Datum::Tuple {
//!     datum_type:         u8,
//!     members_count:      u32,
//!     member_0:           Datum::*,
//!     member_1:           Datum::*,
//!     ...
//! }
//! ```

mod datum;
mod datum_type;
mod lengths;

pub use datum::*;
pub use datum_type::*;
pub use lengths::*;
