//! Filesystem collaborators: input checks, line reading and company files

use super::traits::OutputSink;
use crate::core::writer::CompanyOutput;
use crate::domain::{EnrollmentError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Extension the input file must carry, compared case-insensitively
pub const INPUT_EXTENSION: &str = "csv";

/// Text after the last `.` of the file name, or empty when there is none
pub fn file_extension(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.rsplit_once('.')
        .map(|(_, extension)| extension.to_string())
        .unwrap_or_default()
}

/// Rejects input files whose extension is not `csv`
pub fn check_input_extension(path: &Path) -> Result<()> {
    let extension = file_extension(path);
    if extension.eq_ignore_ascii_case(INPUT_EXTENSION) {
        Ok(())
    } else {
        Err(EnrollmentError::InvalidFileType { extension })
    }
}

/// Reads every line of the input file
///
/// Lines end at `\n` with an optional `\r` before it. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD in their own line only. The file is
/// closed before returning, whether or not reading succeeded.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let unreadable = |e: std::io::Error| EnrollmentError::InputUnreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let file = File::open(path).map_err(unreadable)?;
    let mut lines = Vec::new();
    for (index, raw) in BufReader::new(file).split(b'\n').enumerate() {
        let mut raw = raw.map_err(unreadable)?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::debug!(line = index + 1, "Replacing invalid UTF-8 in input line");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        lines.push(line);
    }
    Ok(lines)
}

/// Rejects company names that would escape the output directory
pub fn check_company_file_name(company: &str) -> Result<()> {
    if company.contains(['/', '\\', '\0']) {
        return Err(EnrollmentError::Output {
            company: company.to_string(),
            message: "company name cannot be used as a file name".to_string(),
        });
    }
    Ok(())
}

/// Writes company files into a directory
///
/// Each file is written to a temporary file in the same directory and then
/// persisted over `{company}.csv`, replacing any existing file.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    create_missing: bool,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>, create_missing: bool) -> Self {
        Self {
            dir: dir.into(),
            create_missing,
        }
    }

    fn output_error(output: &CompanyOutput, message: impl ToString) -> EnrollmentError {
        EnrollmentError::Output {
            company: output.company.clone(),
            message: message.to_string(),
        }
    }
}

impl OutputSink for DirectorySink {
    fn prepare(&self) -> Result<()> {
        let directory_error = |message: String| EnrollmentError::OutputDirectory {
            path: self.dir.display().to_string(),
            message,
        };

        if self.dir.is_dir() {
            return Ok(());
        }
        if self.dir.exists() {
            return Err(directory_error("not a directory".to_string()));
        }
        if !self.create_missing {
            return Err(directory_error("directory does not exist".to_string()));
        }

        fs::create_dir_all(&self.dir).map_err(|e| directory_error(e.to_string()))?;
        tracing::info!(dir = %self.dir.display(), "Created output directory");
        Ok(())
    }

    fn write(&self, output: &CompanyOutput) -> Result<PathBuf> {
        check_company_file_name(&output.company)?;
        let path = self.dir.join(&output.file_name);

        let mut temp_file =
            NamedTempFile::new_in(&self.dir).map_err(|e| Self::output_error(output, e))?;
        temp_file
            .write_all(output.contents.as_bytes())
            .and_then(|_| temp_file.flush())
            .map_err(|e| Self::output_error(output, e))?;
        temp_file
            .persist(&path)
            .map_err(|e| Self::output_error(output, e.error))?;

        Ok(path)
    }
}

/// Reports company files without writing them
#[derive(Debug, Clone)]
pub struct DryRunSink {
    dir: PathBuf,
}

impl DryRunSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for DryRunSink {
    fn prepare(&self) -> Result<()> {
        if !self.dir.is_dir() {
            tracing::warn!(dir = %self.dir.display(), "Output directory does not exist");
        }
        Ok(())
    }

    fn write(&self, output: &CompanyOutput) -> Result<PathBuf> {
        check_company_file_name(&output.company)?;
        let path = self.dir.join(&output.file_name);
        tracing::info!(
            path = %path.display(),
            records = output.record_count,
            "Dry run: skipping company file"
        );
        Ok(path)
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
