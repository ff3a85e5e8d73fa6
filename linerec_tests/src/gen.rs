use linerec_types::serde::Datum;
use rand::Rng;

const MAX_GEN_DEPTH: usize = 4;
const MAX_GEN_LEN: usize = 40;

/// A random datum, nested up to a few levels.
///
/// Strings and byte strings are biased towards `\n` and `\r`,
/// which must never leak into the line framing.
pub fn gen_datum(rng: &mut impl Rng) -> Datum {
    gen_datum_(rng, 0)
}

fn gen_datum_(rng: &mut impl Rng, depth: usize) -> Datum {
    let variant_ct = if depth < MAX_GEN_DEPTH { 6 } else { 5 };
    match rng.gen_range(0..variant_ct) {
        0 => Datum::Null,
        1 => Datum::Bool(rng.gen()),
        2 => Datum::I64(rng.gen()),
        3 => Datum::Bytes(gen_bytes(rng)),
        4 => {
            let len = rng.gen_range(0..MAX_GEN_LEN);
            let s = (0..len)
                .map(|_| match rng.gen_range(0..8) {
                    0 => '\n',
                    1 => '\r',
                    2 => 'é',
                    _ => rng.gen_range('a'..='z'),
                })
                .collect::<String>();
            Datum::Str(s)
        }
        _ => {
            let len = rng.gen_range(0..6);
            let members = (0..len).map(|_| gen_datum_(rng, depth + 1)).collect();
            Datum::Tuple(members)
        }
    }
}

fn gen_bytes(rng: &mut impl Rng) -> Vec<u8> {
    let len = rng.gen_range(0..MAX_GEN_LEN);
    (0..len)
        .map(|_| match rng.gen_range(0..4) {
            0 => b'\n',
            _ => rng.gen(),
        })
        .collect()
}

pub fn gen_datums(rng: &mut impl Rng, count: usize) -> Vec<Datum> {
    (0..count).map(|_| gen_datum(rng)).collect()
}
