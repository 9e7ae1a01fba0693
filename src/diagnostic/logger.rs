use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::diagnostic::diagnostic::Diagnostic;
use crate::error::ConvertError;

/// Writes diagnostics as JSON lines.
///
/// The file is created (truncated) on `create`, so each run leaves exactly
/// the diagnostics of that run behind.
pub struct DiagnosticLogger {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl DiagnosticLogger {
    pub fn create(path: &Path) -> Result<Self, ConvertError> {
        let file = File::create(path).map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn log(&mut self, diagnostic: &Diagnostic) -> Result<(), ConvertError> {
        let json = serde_json::to_string(diagnostic)?;
        writeln!(self.writer, "{}", json).map_err(|source| self.write_error(source))
    }

    pub fn finish(mut self) -> Result<(), ConvertError> {
        self.writer.flush().map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: std::io::Error) -> ConvertError {
        ConvertError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Write all diagnostics of a run to `path`.
pub fn write_diagnostics(path: &Path, diagnostics: &[Diagnostic]) -> Result<(), ConvertError> {
    let mut logger = DiagnosticLogger::create(path)?;
    for diagnostic in diagnostics {
        logger.log(diagnostic)?;
    }
    logger.finish()
}
