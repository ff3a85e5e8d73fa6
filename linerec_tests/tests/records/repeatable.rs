use anyhow::{anyhow, Result};
use linerec::{read_records, write_records, DatumCodec, RepeatableRecords};
use linerec_tests::gen::gen_datums;
use linerec_types::serde::Datum;
use std::path::Path;

fn open_repeatable(path: &Path) -> Result<RepeatableRecords<Datum, DatumCodec>> {
    read_records::<Datum, _>(path, true)?
        .into_repeatable()
        .ok_or(anyhow!("Expected a repeatable handle"))
}

#[test]
fn every_pass_is_complete() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("rep.rec");
    let datums = gen_datums(&mut rand::thread_rng(), 33);
    write_records(&datums, &path)?;

    let mut rep = open_repeatable(&path)?;
    assert_eq!(rep.counter(), 0);

    for pass_i in 1..=4 {
        let pass = rep.iter().collect::<Result<Vec<_>>>()?;
        assert_eq!(pass, datums);
        assert_eq!(rep.counter(), pass_i);
    }

    Ok(())
}

#[test]
fn started_passes_count() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("rep.rec");
    write_records((0..10).map(Datum::I64), &path)?;

    let mut rep = open_repeatable(&path)?;

    /* Abandoned after one record. */
    let mut partial = rep.iter();
    assert_eq!(partial.next().transpose()?, Some(Datum::I64(0)));
    drop(partial);
    assert_eq!(rep.counter(), 1);

    /* Started through `IntoIterator`. */
    let mut seen = 0;
    for res in &mut rep {
        assert_eq!(res?, Datum::I64(seen));
        seen += 1;
    }
    assert_eq!(seen, 10);
    assert_eq!(rep.counter(), 2);

    Ok(())
}

#[test]
fn interleaved_passes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("rep.rec");
    write_records((0..3).map(Datum::I64), &path)?;

    let mut rep = open_repeatable(&path)?;
    let mut pass_1 = rep.iter();
    let mut pass_2 = rep.iter();

    assert_eq!(pass_1.next().transpose()?, Some(Datum::I64(0)));
    assert_eq!(pass_1.next().transpose()?, Some(Datum::I64(1)));
    assert_eq!(pass_2.next().transpose()?, Some(Datum::I64(0)));
    assert_eq!(pass_1.next().transpose()?, Some(Datum::I64(2)));
    assert_eq!(pass_1.next().transpose()?, None);
    assert_eq!(pass_2.count(), 2);

    Ok(())
}

#[test]
fn single_pass_does_not_restart() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("once.rec");
    write_records((0..3).map(Datum::I64), &path)?;

    let mut iter = read_records::<Datum, _>(&path, false)?
        .into_single()
        .ok_or(anyhow!("Expected a single pass"))?;
    assert_eq!(iter.by_ref().count(), 3);
    assert!(iter.is_exhausted());
    assert_eq!(iter.by_ref().count(), 0);

    Ok(())
}
