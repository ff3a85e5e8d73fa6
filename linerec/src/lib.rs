//! Record files: one serialized record per line.
//!
//! ```text
//! struct RecordFile {
//!     line_0:     base64(blob_0) "\n",
//!     line_1:     base64(blob_1) "\n",
//!     ...
//!     // where blob_i = codec.encode(record_i)
//! }
//! ```
//!
//! There is no header, footer, length prefix, version marker or checksum.
//! A file can only be read back with a codec compatible with the one that wrote it.

pub mod codec;
mod error;
pub mod fs_utils;
pub mod line;
mod options;
mod reader;
mod repeatable;
mod writer;

pub use codec::{DatumCodec, FnCodec, RecordDecoder, RecordEncoder};
pub use error::*;
pub use options::*;
pub use reader::*;
pub use repeatable::*;
pub use writer::*;
