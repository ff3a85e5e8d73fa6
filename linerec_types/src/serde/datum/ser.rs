use crate::serde::{
    Datum, DatumBodyLen, DatumType, DatumTypeInt, TupleMembersCount, MAX_NESTING_DEPTH,
};
use anyhow::{anyhow, Result};
use derive_more::Deref;
use std::io::Write;

#[derive(Deref, Debug)]
pub struct WriteLen(usize);

impl Datum {
    pub fn ser(&self, w: &mut impl Write) -> Result<WriteLen> {
        let mut w_len = WriteLen(0);
        self.ser_(w, 0, &mut w_len)?;
        Ok(w_len)
    }

    fn ser_(&self, w: &mut impl Write, depth: usize, w_len: &mut WriteLen) -> Result<()> {
        /* datum_type */
        let dtype = DatumTypeInt::from(DatumType::from(self));
        write_counted(w, &dtype.to_le_bytes(), w_len)?;

        /* datum_body_len, or members_count, and datum_body */
        match self {
            Datum::Null => {}
            Datum::Bool(b) => write_counted(w, &[u8::from(*b)], w_len)?,
            Datum::I64(i) => write_counted(w, &i.to_le_bytes(), w_len)?,
            Datum::Bytes(b) => ser_dynalen_body(w, b, w_len)?,
            Datum::Str(s) => ser_dynalen_body(w, s.as_bytes(), w_len)?,
            Datum::Tuple(members) => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(anyhow!(
                        "Tuple nesting deeper than {MAX_NESTING_DEPTH} levels."
                    ));
                }

                let membs_ct = TupleMembersCount::from_members(members)?;
                write_counted(w, &membs_ct.to_le_bytes(), w_len)?;

                for member in members {
                    member.ser_(w, depth + 1, w_len)?;
                }
            }
        }

        Ok(())
    }
}

fn ser_dynalen_body(w: &mut impl Write, body: &[u8], w_len: &mut WriteLen) -> Result<()> {
    let dbody_len = DatumBodyLen::from_dynalen_body(body)?;
    write_counted(w, &dbody_len.to_le_bytes(), w_len)?;
    write_counted(w, body, w_len)
}

fn write_counted(w: &mut impl Write, buf: &[u8], w_len: &mut WriteLen) -> Result<()> {
    w.write_all(buf)?;
    w_len.0 += buf.len();
    Ok(())
}
