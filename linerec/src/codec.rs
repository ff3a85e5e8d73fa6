//! The boundary between record values and blobs.
//!
//! A writer only needs a [`RecordEncoder`] and a reader only needs a [`RecordDecoder`].
//! Files are portable only between compatible encoder/decoder pairs.

use anyhow::Result;
use linerec_types::types::{Deser, Ser};

pub trait RecordEncoder<T> {
    fn encode(&self, record: &T) -> Result<Vec<u8>>;
}

pub trait RecordDecoder<T> {
    fn decode(&self, blob: &[u8]) -> Result<T>;
}

/// Encodes any [`Ser`] and decodes any [`Deser`] as one self-describing datum blob.
#[derive(Clone, Copy, Default, Debug)]
pub struct DatumCodec;

impl<T: Ser> RecordEncoder<T> for DatumCodec {
    fn encode(&self, record: &T) -> Result<Vec<u8>> {
        record.ser_solo()
    }
}

impl<T: Deser> RecordDecoder<T> for DatumCodec {
    fn decode(&self, blob: &[u8]) -> Result<T> {
        T::deser_solo(blob)
    }
}

/// A codec assembled from an encoding closure and a decoding closure.
#[derive(Clone, Copy)]
pub struct FnCodec<E, D> {
    enc: E,
    dec: D,
}

impl<E, D> FnCodec<E, D> {
    pub fn new(enc: E, dec: D) -> Self {
        Self { enc, dec }
    }
}

impl<T, E, D> RecordEncoder<T> for FnCodec<E, D>
where
    E: Fn(&T) -> Result<Vec<u8>>,
{
    fn encode(&self, record: &T) -> Result<Vec<u8>> {
        (self.enc)(record)
    }
}

impl<T, E, D> RecordDecoder<T> for FnCodec<E, D>
where
    D: Fn(&[u8]) -> Result<T>,
{
    fn decode(&self, blob: &[u8]) -> Result<T> {
        (self.dec)(blob)
    }
}
