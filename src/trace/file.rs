//! Trace file reader and writer.
//!
//! Traces are stored as JSON lines: the first line is a header object,
//! every following non-empty line is one step. The same parser is the
//! acceptance boundary for traces produced elsewhere (for example by an
//! asynchronous generation service): a file that parses here has already
//! passed schema validation and can be bound to a player unchanged.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Step, Trace, TraceError};

/// Current trace file format version.
pub const FORMAT_VERSION: u8 = 1;

/// Header line of a trace file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceHeader {
    pub version: u8,
    /// Identifier of the algorithm the trace narrates.
    pub algorithm: String,
    /// Name of the test case that drove the recording, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    /// When the file was written. File metadata only; not part of the
    /// trace and excluded from the determinism contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl TraceHeader {
    /// Create a header for the current format version.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            version: FORMAT_VERSION,
            algorithm: algorithm.into(),
            case: None,
            recorded_at: None,
        }
    }

    /// Record the test case name.
    pub fn with_case(mut self, case: impl Into<String>) -> Self {
        self.case = Some(case.into());
        self
    }

    /// Stamp the header with the current time.
    pub fn stamped(mut self) -> Self {
        self.recorded_at = Some(Utc::now());
        self
    }
}

/// A complete trace file: header plus validated trace.
#[derive(Debug, Clone)]
pub struct TraceFile {
    pub header: TraceHeader,
    pub trace: Trace,
}

impl TraceFile {
    pub fn new(header: TraceHeader, trace: Trace) -> Self {
        Self { header, trace }
    }

    /// Parse a trace file from a path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            fs::File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse a trace file from a reader.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        // First line is the header
        let header_line = lines
            .next()
            .context("File is empty")?
            .context("Failed to read header line")?;

        let header: TraceHeader =
            serde_json::from_str(&header_line).context("Failed to parse header")?;

        if header.version != FORMAT_VERSION {
            return Err(TraceError::UnsupportedVersion {
                version: header.version,
            }
            .into());
        }

        // Remaining lines are steps
        let mut steps = Vec::new();
        for (line_num, line_result) in lines.enumerate() {
            let line =
                line_result.with_context(|| format!("Failed to read line {}", line_num + 2))?;

            if line.trim().is_empty() {
                continue;
            }

            let step: Step = serde_json::from_str(&line)
                .with_context(|| format!("Failed to parse step on line {}", line_num + 2))?;
            steps.push(step);
        }

        let trace = Trace::new(steps).context("Trace failed schema validation")?;

        Ok(TraceFile { header, trace })
    }

    /// Parse from a string.
    pub fn parse_str(content: &str) -> Result<Self> {
        Self::parse_reader(BufReader::new(content.as_bytes()))
    }

    /// Write the trace file to a path.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file =
            fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
        self.write_to(&mut file)
    }

    /// Write the trace file to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let header_json =
            serde_json::to_string(&self.header).context("Failed to serialize header")?;
        writeln!(writer, "{}", header_json)?;

        for step in self.trace.steps() {
            let step_json = serde_json::to_string(step).context("Failed to serialize step")?;
            writeln!(writer, "{}", step_json)?;
        }

        Ok(())
    }

    /// Render to a string.
    pub fn to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
