//! Delimited text input and output.
//!
//! Input records are `x;y` or `x;y;tag` (the tag column written by a previous
//! aggregation is ignored). Output records are `x;y;tag` with six decimals.

use std::ffi::OsString;
use std::fmt::Display;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::debug;

use crate::cluster::TaggedPoint;
use crate::error::{Error, Result};
use crate::point::Point;

/// Field separator used by the point files.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Value written in the third column of every output record.
pub const DEFAULT_TAG: u32 = 150;

/// Inserted between the input file stem and its extension.
pub const AGGREGATED_SUFFIX: &str = "-aggregated";

/// Text format of point files.
#[derive(Debug, Clone, PartialEq)]
pub struct Format<T = u32> {
    /// Field separator.
    pub delimiter: u8,
    /// Tag attached to every output record.
    pub tag: T,
}

impl Default for Format<u32> {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            tag: DEFAULT_TAG,
        }
    }
}

impl<T> Format<T> {
    /// Format with the default delimiter and a custom tag.
    pub fn with_tag(tag: T) -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            tag,
        }
    }

    /// Replace the field separator.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// 0-based line index of a csv record or error position.
fn line_index(pos: &csv::Position) -> usize {
    (pos.line() as usize).saturating_sub(1)
}

fn read_error(err: csv::Error) -> Error {
    if let csv::ErrorKind::Utf8 { pos: Some(pos), err: utf8 } = err.kind() {
        return Error::MalformedRecord {
            record: line_index(pos),
            message: utf8.to_string(),
        };
    }
    if err.is_io_error() {
        return Error::Io(err.into());
    }
    Error::Csv(err)
}

fn parse_coordinate(field: &str, axis: &str, record: usize) -> Result<f64> {
    let value: f64 = field.parse().map_err(|e| Error::MalformedRecord {
        record,
        message: format!("{axis} coordinate {field:?}: {e}"),
    })?;
    if !value.is_finite() {
        return Err(Error::MalformedRecord {
            record,
            message: format!("{axis} coordinate {value} is not finite"),
        });
    }
    Ok(value)
}

/// Turn one record into a point. Records whose fields are all blank yield
/// `None`.
pub fn parse_record(fields: &StringRecord, record: usize) -> Result<Option<Point>> {
    if fields.iter().all(|f| f.trim().is_empty()) {
        return Ok(None);
    }
    if !(2..=3).contains(&fields.len()) {
        return Err(Error::MalformedRecord {
            record,
            message: format!("expected 2 or 3 fields, found {}", fields.len()),
        });
    }
    let x = parse_coordinate(fields[0].trim(), "x", record)?;
    let y = parse_coordinate(fields[1].trim(), "y", record)?;
    Ok(Some(Point::new(x, y)))
}

/// Read every record from `reader`.
///
/// Fails on the first malformed record; record indices are 0-based line
/// numbers, blank lines included.
pub fn read_points<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Point>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    let mut fields = StringRecord::new();
    let mut fallback = 0;
    while reader.read_record(&mut fields).map_err(read_error)? {
        let record = fields.position().map(line_index).unwrap_or(fallback);
        fallback = record + 1;
        if let Some(p) = parse_record(&fields, record)? {
            points.push(p);
        }
    }
    Ok(points)
}

/// Read a point file from disk.
pub fn load_points(path: &Path, delimiter: u8) -> Result<Vec<Point>> {
    let file = File::open(path)?;
    let points = read_points(file, delimiter)?;
    debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Write one `x;y;tag` record per point. Tags containing the delimiter are
/// quoted.
pub fn write_points<W: Write, T: Display>(
    writer: W,
    points: &[TaggedPoint<T>],
    delimiter: u8,
) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(writer);
    for p in points {
        writer.write_record([
            format!("{:.6}", p.x),
            format!("{:.6}", p.y),
            p.tag.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a point file to disk, replacing any existing file.
pub fn save_points<T: Display>(
    path: &Path,
    points: &[TaggedPoint<T>],
    delimiter: u8,
) -> Result<()> {
    let file = File::create(path)?;
    write_points(file, points, delimiter)?;
    debug!("wrote {} points to {}", points.len(), path.display());
    Ok(())
}

/// Output location for an input file: `stops.csv` becomes
/// `stops-aggregated.csv`, `stops` becomes `stops-aggregated`.
pub fn aggregated_path(input: &Path) -> PathBuf {
    let mut name: OsString = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(AGGREGATED_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
