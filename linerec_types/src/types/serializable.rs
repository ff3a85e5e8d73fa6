use crate::serde::{Datum, ReadResult, WriteLen};
use anyhow::{anyhow, Result};
use std::any;
use std::borrow::Borrow;
use std::io::{Cursor, Read, Write};

pub trait Ser {
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen>;

    fn ser_solo(&self) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.ser(&mut buf)?;
        Ok(buf)
    }
}
pub trait Deser: Sized {
    fn deser<R: Read>(r: &mut R) -> Result<ReadResult<Self>>;

    /// Deserializes a buffer that holds exactly one `Self`.
    fn deser_solo(buf: &[u8]) -> Result<Self> {
        let mut r = Cursor::new(buf);
        let moi = match Self::deser(&mut r)? {
            ReadResult::EOF => return Err(anyhow!("No data")),
            ReadResult::Some(_, moi) => moi,
        };
        let trailing = buf.len() - r.position() as usize;
        if trailing > 0 {
            return Err(anyhow!(
                "{trailing} trailing bytes after {}",
                any::type_name::<Self>()
            ));
        }
        Ok(moi)
    }
}

/* Blanket impl for Ser */
impl<T> Ser for T
where
    T: Borrow<Datum>,
{
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        let dat: &Datum = self.borrow();
        dat.ser(w)
    }
}

/* Blanket impl for Deser */
impl<T, E> Deser for T
where
    T: TryFrom<Datum, Error = E>,
    E: Into<anyhow::Error>,
{
    fn deser<R: Read>(r: &mut R) -> Result<ReadResult<Self>> {
        match Datum::deser(r)? {
            ReadResult::EOF => Ok(ReadResult::EOF),
            ReadResult::Some(r_len, dat) => {
                let moi = Self::try_from(dat).map_err(|e| {
                    let e: anyhow::Error = e.into();
                    e.context(format!("Converting Datum into {}", any::type_name::<Self>()))
                })?;
                Ok(ReadResult::Some(r_len, moi))
            }
        }
    }
}
