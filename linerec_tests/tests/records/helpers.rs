use anyhow::{anyhow, Result};
use linerec::{read_records, RecordIterator, Records};
use linerec_types::serde::Datum;
use std::path::Path;

pub fn read_single<P: AsRef<Path>>(path: P) -> Result<RecordIterator<Datum, linerec::DatumCodec>> {
    match read_records::<Datum, _>(path, false)? {
        Records::Single(iter) => Ok(iter),
        Records::Repeatable(_) => Err(anyhow!("Expected a single pass")),
    }
}

pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Vec<Datum>> {
    read_single(path)?.collect()
}

pub fn count_lines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| **b == b'\n').count()
}
