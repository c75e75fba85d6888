use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::errors::GenerationError;

pub const VIDEO_FILE: &str = "video.csv";
pub const CUSTOMER_FILE: &str = "customer.csv";
pub const PAYMENT_FILE: &str = "payment.csv";
pub const TRANSACTION_FILE: &str = "transaction.csv";
pub const TRANSACTION_REQUEST_FILE: &str = "transaction_request.csv";

/// Output files in the order they are written.
pub const OUTPUT_FILES: [&str; 5] = [
    VIDEO_FILE,
    CUSTOMER_FILE,
    PAYMENT_FILE,
    TRANSACTION_FILE,
    TRANSACTION_REQUEST_FILE,
];

/// Replace `path` with one CSV row per record.
///
/// Columns follow the record's field order. Returns the number of bytes
/// written.
pub fn write_records<T: Serialize>(
    path: &Path,
    records: &[T],
    include_headers: bool,
) -> Result<u64, GenerationError> {
    remove_existing(path)?;

    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(include_headers)
        .from_writer(counting);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

/// Delete a previous output file. A missing file is not an error; anything
/// else (permissions, a directory in the way) is.
pub fn remove_existing(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
