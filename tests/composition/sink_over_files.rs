//! Tier 2: Failing Sinks Around Real Files

use crate::common::*;
use stagehand::{BadWriter, InjectedFailure, StagehandError};
use std::io::{self, Write};

/// Copy `data` to `sink` in fixed-size chunks, like a buffered exporter would
fn export(data: &[u8], sink: &mut dyn Write) -> io::Result<usize> {
    let mut written = 0;
    for chunk in data.chunks(4) {
        sink.write_all(chunk)?;
        written += chunk.len();
    }
    sink.flush()?;
    Ok(written)
}

#[test]
fn test_export_succeeds_into_real_file() {
    let mut temp = suite_temp_dir("export_into_real_file");
    let mut created = temp.file();

    let written = export(b"0123456789", &mut created.file).unwrap();
    assert_eq!(written, 10);
    assert_eq!(std::fs::read(&created.path).unwrap(), b"0123456789");

    drop(created);
    temp.cleanup();
}

#[test]
fn test_export_stops_at_budget() {
    let mut sink = BadWriter::new(6);

    let err = export(b"0123456789", &mut sink).unwrap_err();

    assert_eq!(sink.bytes_written(), 6);
    let failure = InjectedFailure::from_io(&err).unwrap();
    assert!(failure.same_as(sink.error_value().unwrap()));
    let inner = failure.inner().downcast_ref::<StagehandError>().unwrap();
    assert!(matches!(inner, StagehandError::BudgetExhausted { budget: 6 }));
}

#[test]
fn test_custom_failure_reaches_caller() {
    let disk_full = InjectedFailure::new(io::Error::new(io::ErrorKind::Other, "disk full"));
    let handle = BadWriter::new(2).with_error(disk_full.clone()).shared();

    let mut boxed: Box<dyn Write> = Box::new(handle.clone());
    let err = export(b"abcdef", &mut *boxed).unwrap_err();
    drop(boxed);

    assert!(InjectedFailure::from_io(&err).unwrap().same_as(&disk_full));
    assert_eq!(err.to_string(), "disk full");
    assert_eq!(handle.bytes_written(), 2);
}

#[test]
fn test_zero_budget_writes_nothing_to_disk() {
    let mut temp = suite_temp_dir("zero_budget_writes_nothing");
    let path = temp.file_path();

    let mut sink = BadWriter::new(0);
    let result = export(b"data", &mut sink);
    assert!(result.is_err());

    // the failing sink never touched the path it stood in for
    assert!(!path.exists());
    temp.cleanup();
}
