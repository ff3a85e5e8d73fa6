use crate::codec::{DatumCodec, RecordEncoder};
use crate::{fs_utils, line, EncodeFailure, RecordFileOptions};
use anyhow::{anyhow, ensure, Context, Result};
use linerec_types::types::Ser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Writes records to a sink, one line per record.
///
/// After every `flush_every`-th record (1-indexed), the sink is flushed.
/// A sink with nothing to flush, such as `Vec<u8>`, treats the flush as a no-op.
pub struct RecordWriter<W: Write, C> {
    w: W,
    codec: C,
    flush_every: usize,
    records_written: usize,
    line_buf: Vec<u8>,
}

impl<W: Write, C> RecordWriter<W, C> {
    pub fn new(w: W, flush_every: usize, codec: C) -> Result<Self> {
        ensure!(flush_every > 0, "flush_every must be positive");
        Ok(Self {
            w,
            codec,
            flush_every,
            records_written: 0,
            line_buf: vec![],
        })
    }

    /// Appends one record.
    ///
    /// The record is fully encoded before any of its bytes reach the sink,
    /// so an encoding failure leaves only complete lines behind.
    pub fn write<T>(&mut self, record: &T) -> Result<()>
    where
        C: RecordEncoder<T>,
    {
        let record_num = self.records_written + 1;

        let blob = self
            .codec
            .encode(record)
            .with_context(|| EncodeFailure { record_num })?;

        self.line_buf.clear();
        line::encode_line(&blob, &mut self.line_buf);
        self.w
            .write_all(&self.line_buf)
            .with_context(|| format!("Writing record #{record_num}"))?;
        self.records_written = record_num;

        if record_num % self.flush_every == 0 {
            trace!(record_num, "Flushing record writer");
            self.w
                .flush()
                .with_context(|| format!("Flushing after record #{record_num}"))?;
        }

        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn get_ref(&self) -> &W {
        &self.w
    }

    /// Returns the sink as is. Nothing is flushed.
    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<C> RecordWriter<BufWriter<File>, C> {
    /// Creates the record file, truncating any existing file at `path`.
    pub fn create<P: AsRef<Path>>(path: P, opts: &RecordFileOptions, codec: C) -> Result<Self> {
        opts.validate()?;
        let path = path.as_ref();
        let file = fs_utils::create_file(path)?;
        debug!(?path, flush_every = opts.flush_every, "Created record file");
        Self::new(BufWriter::new(file), opts.flush_every, codec)
    }

    /// Drains the buffer into the file and closes it.
    ///
    /// Returns the number of records written.
    pub fn finish(self) -> Result<usize> {
        let records_written = self.records_written;
        let file = self
            .w
            .into_inner()
            .map_err(|e| anyhow!(e.into_error()))
            .context("Flushing record file")?;
        drop(file);
        debug!(records_written, "Finished record file");
        Ok(records_written)
    }
}

/// Writes every record into `w`, then returns `w`.
///
/// `w` is flushed only on `flush_every` boundaries; the caller owns whatever remains buffered.
pub fn write_records_to<I, W, C>(records: I, w: W, flush_every: usize, codec: C) -> Result<W>
where
    I: IntoIterator,
    W: Write,
    C: RecordEncoder<I::Item>,
{
    let mut writer = RecordWriter::new(w, flush_every, codec)?;
    for record in records {
        writer.write(&record)?;
    }
    Ok(writer.into_inner())
}

/// Writes every record into a fresh file at `path`, with explicit options and codec.
///
/// Returns the number of records written.
pub fn write_records_with<I, P, C>(
    records: I,
    path: P,
    opts: &RecordFileOptions,
    codec: C,
) -> Result<usize>
where
    I: IntoIterator,
    P: AsRef<Path>,
    C: RecordEncoder<I::Item>,
{
    let path = path.as_ref();
    let run = || -> Result<usize> {
        let mut writer = RecordWriter::create(path, opts, codec)?;
        for record in records {
            writer.write(&record)?;
        }
        writer.finish()
    };
    run().with_context(|| format!("write_records {path:?}"))
}

/// Writes every record into a fresh file at `path`,
/// using [`DatumCodec`] and [`crate::DEFAULT_FLUSH_EVERY`].
///
/// Returns the number of records written.
pub fn write_records<I, P>(records: I, path: P) -> Result<usize>
where
    I: IntoIterator,
    I::Item: Ser,
    P: AsRef<Path>,
{
    write_records_with(records, path, &RecordFileOptions::default(), DatumCodec)
}
