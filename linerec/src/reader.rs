use crate::codec::{DatumCodec, RecordDecoder};
use crate::{fs_utils, line, DecodeFailure, RepeatableIterator};
use anyhow::{Context, Result};
use linerec_types::io_utils;
use linerec_types::types::Deser;
use std::fs::File;
use std::io::BufReader;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

enum ReadState {
    /// The file has not been opened yet.
    Pending,
    Open(BufReader<File>),
    /// End of file was reached, or a line failed. The file is closed.
    Exhausted,
}

/// A single pass over a record file, yielding records in file order.
///
/// The iterator owns the file handle and closes it as soon as it is exhausted,
/// or when it is dropped.
/// The first error ends the pass: every later `next()` returns `None`.
pub struct RecordIterator<T, C> {
    path: PathBuf,
    state: ReadState,
    codec: C,
    lines_read: usize,
    line_buf: Vec<u8>,
    _phant: PhantomData<fn() -> T>,
}

impl<T, C> RecordIterator<T, C>
where
    C: RecordDecoder<T>,
{
    /// Opens the file now, so that I/O failures surface here.
    pub fn open<P: AsRef<Path>>(path: P, codec: C) -> Result<Self> {
        let mut moi = Self::lazy(path, codec);
        let file = fs_utils::open_readonly(&moi.path)?;
        moi.state = ReadState::Open(BufReader::new(file));
        debug!(path = ?moi.path, "Opened record file");
        Ok(moi)
    }

    /// Defers opening the file until the first `next()`, which then yields any I/O failure.
    pub fn lazy<P: AsRef<Path>>(path: P, codec: C) -> Self {
        Self {
            path: path.as_ref().into(),
            state: ReadState::Pending,
            codec,
            lines_read: 0,
            line_buf: vec![],
            _phant: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The count of lines consumed so far, including a line that failed to decode.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, ReadState::Exhausted)
    }

    fn next_record(&mut self) -> Result<Option<T>> {
        if let ReadState::Pending = self.state {
            let file = fs_utils::open_readonly(&self.path)?;
            self.state = ReadState::Open(BufReader::new(file));
            debug!(path = ?self.path, "Opened record file");
        }
        let r = match &mut self.state {
            ReadState::Open(r) => r,
            ReadState::Pending | ReadState::Exhausted => return Ok(None),
        };

        self.line_buf.clear();
        let r_len = io_utils::read_until_then_trim(r, line::LINE_TERMINATOR, &mut self.line_buf)
            .with_context(|| format!("read {:?}", self.path))?;
        if r_len == 0 {
            return Ok(None);
        }
        self.lines_read += 1;
        let line_num = self.lines_read;

        let blob = line::decode_line(&self.line_buf).with_context(|| DecodeFailure { line_num })?;
        let record = self
            .codec
            .decode(&blob)
            .with_context(|| DecodeFailure { line_num })?;
        Ok(Some(record))
    }
}

impl<T, C> Iterator for RecordIterator<T, C>
where
    C: RecordDecoder<T>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                if !self.is_exhausted() {
                    debug!(path = ?self.path, lines_read = self.lines_read, "Reached end of record file");
                    self.state = ReadState::Exhausted;
                }
                None
            }
            Err(e) => {
                debug!(path = ?self.path, lines_read = self.lines_read, error = %e, "Record traversal aborted");
                self.state = ReadState::Exhausted;
                Some(Err(e))
            }
        }
    }
}

impl<T, C> FusedIterator for RecordIterator<T, C> where C: RecordDecoder<T> {}

pub type RepeatableRecords<T, C> = RepeatableIterator<Box<dyn FnMut() -> RecordIterator<T, C>>>;

/// What [`read_records`] returns: one pass, or a handle that can start any number of passes.
pub enum Records<T, C> {
    Single(RecordIterator<T, C>),
    Repeatable(RepeatableRecords<T, C>),
}

impl<T, C> Records<T, C> {
    pub fn into_single(self) -> Option<RecordIterator<T, C>> {
        match self {
            Self::Single(iter) => Some(iter),
            Self::Repeatable(_) => None,
        }
    }

    pub fn into_repeatable(self) -> Option<RepeatableRecords<T, C>> {
        match self {
            Self::Single(_) => None,
            Self::Repeatable(rep) => Some(rep),
        }
    }
}

/// Reads the record file at `path` with an explicit codec.
///
/// In both modes the file is opened once up front, so a missing or unreadable file fails here.
/// Each repeatable pass then reopens the file and reads it from the start.
pub fn read_records_with<T, C, P>(path: P, repeatable: bool, codec: C) -> Result<Records<T, C>>
where
    T: 'static,
    C: RecordDecoder<T> + Clone + 'static,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !repeatable {
        let iter = RecordIterator::open(path, codec)?;
        return Ok(Records::Single(iter));
    }

    fs_utils::open_readonly(path)?;
    let path = path.to_path_buf();
    let iter_fn: Box<dyn FnMut() -> RecordIterator<T, C>> =
        Box::new(move || RecordIterator::lazy(&path, codec.clone()));
    Ok(Records::Repeatable(RepeatableIterator::new(iter_fn)))
}

/// Reads the record file at `path` using [`DatumCodec`].
pub fn read_records<T, P>(path: P, repeatable: bool) -> Result<Records<T, DatumCodec>>
where
    T: Deser + 'static,
    P: AsRef<Path>,
{
    read_records_with(path, repeatable, DatumCodec)
}
