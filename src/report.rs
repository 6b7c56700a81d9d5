// Writes BucketReports as CSV
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::aggregator::BucketReport;
use std::borrow::Cow;
use std::fs::File;
use std::io::{
    self,
    BufWriter,
    Write,
};
use std::path::Path;
use tracing::debug;

/// Column names, in output order.
pub const HEADER: [&str; 8] = [
    "Bucket Name",
    "Number of Objects",
    "Glacier Overhead (Gb)",
    "Total Size (Gb)",
    "Standard Size (Gb)",
    "Infrequent Access Size (Gb)",
    "Intelligent Tiering Size (Gb)",
    "Glacier Size (Gb)",
];

const DELIMITER: char = ',';

/// Quote `field` if it contains anything that would break the row apart.
/// Quotes inside a quoted field are doubled.
fn escape(field: &str) -> Cow<'_, str> {
    let needs_quoting = field.contains(|c: char| {
        matches!(c, DELIMITER | '"' | '\r' | '\n')
    });

    if needs_quoting {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    }
    else {
        Cow::Borrowed(field)
    }
}

// Sizes are presented with exactly three decimal places.
fn size(gib: f64) -> String {
    format!("{:.3}", gib)
}

/// `ReportWriter` writes a header followed by one row per bucket.
///
/// Every row is flushed once written, so a run that fails part way leaves
/// the finished rows behind.
pub struct ReportWriter<W: Write> {
    writer: W,
    rows:   usize,
}

impl ReportWriter<BufWriter<File>> {
    /// Create, or truncate, the report file at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        debug!("create: Opening report '{}'", path.display());

        let file = File::create(path)?;

        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportWriter<W> {
    /// Return a new `ReportWriter` writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: 0,
        }
    }

    /// Number of bucket rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Write the column names.
    pub fn write_header(&mut self) -> io::Result<()> {
        self.write_record(&HEADER)
    }

    /// Write the row for `report`.
    pub fn write_row(&mut self, report: &BucketReport) -> io::Result<()> {
        let fields = [
            report.name.clone(),
            report.object_count.to_string(),
            size(report.glacier_overhead),
            size(report.total()),
            size(report.standard),
            size(report.infrequent_access),
            size(report.intelligent_tiering),
            size(report.glacier),
        ];

        self.write_record(&fields)?;
        self.rows += 1;

        debug!("write_row: Wrote row {} for '{}'", self.rows, report.name);

        Ok(())
    }

    /// Flush anything outstanding and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;

        Ok(self.writer)
    }

    fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> io::Result<()> {
        let mut line = String::new();

        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(DELIMITER);
            }

            line.push_str(&escape(field.as_ref()));
        }

        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}
