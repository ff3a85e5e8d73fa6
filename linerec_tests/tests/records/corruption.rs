use super::helpers::read_single;
use anyhow::{anyhow, Result};
use linerec::{
    read_records_with, write_records, write_records_with, DecodeFailure, EncodeFailure, FnCodec,
    RecordFileOptions,
};
use linerec_types::serde::Datum;
use std::fs;
use std::path::Path;

fn sample() -> Vec<Datum> {
    (0..5)
        .map(|i| {
            Datum::Tuple(vec![
                Datum::I64(i),
                Datum::from(format!("record {i} with some padding text")),
            ])
        })
        .collect()
}

/// Reads the file, expecting `ok_ct` records and then a failure on line `ok_ct + 1`.
fn verify_failure_after(path: &Path, ok_ct: usize) -> Result<()> {
    let expected = sample();
    let mut iter = read_single(path)?;

    for i in 0..ok_ct {
        let dat = iter.next().transpose()?;
        assert_eq!(dat.as_ref(), Some(&expected[i]));
    }

    let err = match iter.next() {
        Some(Err(e)) => e,
        other => panic!("Expected a decode failure, got {other:?}"),
    };
    assert_eq!(
        err.downcast_ref::<DecodeFailure>(),
        Some(&DecodeFailure {
            line_num: ok_ct + 1
        })
    );

    assert!(iter.next().is_none());
    assert!(iter.is_exhausted());

    Ok(())
}

#[test]
fn truncated_last_line() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("trunc.rec");
    write_records(sample(), &path)?;
    let bytes = fs::read(&path)?;

    let last_line_start = bytes[..bytes.len() - 1]
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(0, |i| i + 1);

    /* Keep at least one character of the last line, and drop its terminator. */
    for keep in last_line_start + 1..bytes.len() - 1 {
        fs::write(&path, &bytes[..keep])?;
        verify_failure_after(&path, sample().len() - 1)?;
    }

    Ok(())
}

#[test]
fn missing_final_terminator_is_tolerated() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("noterm.rec");
    write_records(sample(), &path)?;

    let bytes = fs::read(&path)?;
    fs::write(&path, &bytes[..bytes.len() - 1])?;

    let read = read_single(&path)?.collect::<Result<Vec<_>>>()?;
    assert_eq!(read, sample());

    Ok(())
}

#[test]
fn corrupt_middle_line() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("mid.rec");
    write_records(sample(), &path)?;

    let text = fs::read_to_string(&path)?;
    let mut lines = text.lines().map(String::from).collect::<Vec<_>>();
    lines[2] = String::from("!!not base64!!");
    fs::write(&path, lines.join("\n") + "\n")?;

    verify_failure_after(&path, 2)
}

#[test]
fn valid_base64_invalid_datum() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("datum.rec");
    write_records(sample(), &path)?;

    let text = fs::read_to_string(&path)?;
    let mut lines = text.lines().map(String::from).collect::<Vec<_>>();
    /* A single 0xFF byte, which is not a datum_type. */
    lines[1] = String::from("/w==");
    fs::write(&path, lines.join("\n") + "\n")?;

    verify_failure_after(&path, 1)
}

#[test]
fn encode_failure_keeps_prior_lines() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("partial.rec");

    let codec = FnCodec::new(
        |i: &i64| -> Result<Vec<u8>> {
            if *i == 3 {
                Err(anyhow!("three is not serializable"))
            } else {
                Ok(i.to_le_bytes().to_vec())
            }
        },
        |b: &[u8]| -> Result<i64> {
            let buf = <[u8; 8]>::try_from(b)?;
            Ok(i64::from_le_bytes(buf))
        },
    );

    let res = write_records_with(1..=5i64, &path, &RecordFileOptions::default(), codec);
    let err = match res {
        Err(e) => e,
        Ok(written) => panic!("Expected an encode failure, wrote {written} records"),
    };
    assert_eq!(
        err.downcast_ref::<EncodeFailure>(),
        Some(&EncodeFailure { record_num: 3 })
    );

    let read = read_records_with(&path, false, codec)?
        .into_single()
        .ok_or(anyhow!("Expected a single pass"))?
        .collect::<Result<Vec<i64>>>()?;
    assert_eq!(read, vec![1, 2]);

    Ok(())
}
