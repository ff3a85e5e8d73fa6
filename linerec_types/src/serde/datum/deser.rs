use crate::serde::{
    Datum, DatumBodyLen, DatumType, DatumTypeInt, TupleMembersCount, MAX_NESTING_DEPTH,
};
use anyhow::{anyhow, Context, Result};
use std::io::{ErrorKind, Read};
use std::mem;

/// Upper bound on the capacity reserved from an untrusted `members_count`.
const MEMBERS_PREALLOC_CAP: usize = 1024;

#[derive(PartialEq, Eq, Debug)]
pub enum ReadResult<T> {
    EOF,
    Some(usize, T),
}

impl Datum {
    /// Returns [`ReadResult::EOF`] only if the reader is exhausted before the `datum_type` byte.
    /// Running out of bytes anywhere later is an error.
    pub fn deser<R: Read>(r: &mut R) -> Result<ReadResult<Self>> {
        /* datum_type */
        let (mut r_len, dtype_int) = match DatumTypeInt::deser(r) {
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(ReadResult::EOF),
            Err(e) => return Err(anyhow!(e)),
            Ok((r_len, dtype_int)) => (r_len, dtype_int),
        };
        let dtype = DatumType::try_from(dtype_int)?;

        let dat = Self::deser_body(r, dtype, 0, &mut r_len)?;
        Ok(ReadResult::Some(r_len, dat))
    }

    fn deser_nested<R: Read>(r: &mut R, depth: usize, r_len: &mut usize) -> Result<Self> {
        let (delta_r_len, dtype_int) =
            DatumTypeInt::deser(r).context("EOF while reading Tuple member.")?;
        *r_len += delta_r_len;
        let dtype = DatumType::try_from(dtype_int)?;

        Self::deser_body(r, dtype, depth, r_len)
    }

    fn deser_body<R: Read>(
        r: &mut R,
        dtype: DatumType,
        depth: usize,
        r_len: &mut usize,
    ) -> Result<Self> {
        let dat = match dtype {
            DatumType::Null => Datum::Null,
            DatumType::Bool => {
                let mut buf = [0u8; 1];
                r.read_exact(&mut buf).context("EOF while reading Bool.")?;
                *r_len += buf.len();
                match buf[0] {
                    0 => Datum::Bool(false),
                    1 => Datum::Bool(true),
                    b => return Err(anyhow!("Invalid Bool byte {b}.")),
                }
            }
            DatumType::I64 => {
                let mut buf = [0u8; mem::size_of::<i64>()];
                r.read_exact(&mut buf).context("EOF while reading I64.")?;
                *r_len += buf.len();
                Datum::I64(i64::from_le_bytes(buf))
            }
            DatumType::Bytes => {
                let body = deser_dynalen_body(r, r_len)?;
                Datum::Bytes(body)
            }
            DatumType::Str => {
                let body = deser_dynalen_body(r, r_len)?;
                let s = String::from_utf8(body)?;
                Datum::Str(s)
            }
            DatumType::Tuple => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(anyhow!(
                        "Tuple nesting deeper than {MAX_NESTING_DEPTH} levels."
                    ));
                }

                /* members_count */
                let (delta_r_len, membs_ct) =
                    TupleMembersCount::deser(r).context("EOF while reading Tuple.")?;
                *r_len += delta_r_len;
                let membs_ct = *membs_ct as usize;

                /* members */
                let mut members = Vec::with_capacity(membs_ct.min(MEMBERS_PREALLOC_CAP));
                for _ in 0..membs_ct {
                    members.push(Self::deser_nested(r, depth + 1, r_len)?);
                }
                Datum::Tuple(members)
            }
        };
        Ok(dat)
    }
}

fn deser_dynalen_body<R: Read>(r: &mut R, r_len: &mut usize) -> Result<Vec<u8>> {
    let (delta_r_len, dbody_len) =
        DatumBodyLen::deser(r).context("EOF while reading datum_body_len.")?;
    *r_len += delta_r_len;

    // Read through `take` so that a corrupt length cannot force a huge allocation.
    let want = *dbody_len as usize;
    let mut buf = vec![];
    r.by_ref().take(want as u64).read_to_end(&mut buf)?;
    if buf.len() != want {
        return Err(anyhow!(
            "EOF while reading datum_body: expected {want} bytes, got {}.",
            buf.len()
        ));
    }
    *r_len += buf.len();

    Ok(buf)
}
