use derive_more::Display;

/// Attached as context when a record cannot be serialized.
///
/// Recover it with `err.downcast_ref::<EncodeFailure>()`.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "Serializing record #{}", record_num)]
pub struct EncodeFailure {
    /// 1-indexed position of the record within the written sequence.
    pub record_num: usize,
}

/// Attached as context when a line cannot be turned back into a record.
///
/// Recover it with `err.downcast_ref::<DecodeFailure>()`.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "Decoding record on line {}", line_num)]
pub struct DecodeFailure {
    /// 1-indexed line number within the record file.
    pub line_num: usize,
}
