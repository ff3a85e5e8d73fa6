use anyhow::Result;
use std::io::BufRead;

/// Reads through the next `byte` or EOF, and drops that `byte` if it was found.
///
/// Returns the number of bytes consumed from `r`, including the dropped `byte`.
pub fn read_until_then_trim(r: &mut impl BufRead, byte: u8, buf: &mut Vec<u8>) -> Result<usize> {
    let r_len = r.read_until(byte, buf)?;
    if r_len > 0 && buf.last() == Some(&byte) {
        buf.pop();
    }
    Ok(r_len)
}
