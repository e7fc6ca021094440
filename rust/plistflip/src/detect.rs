//! Detecting which encoding a property list file uses.

use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use log::debug;

use crate::{enums::PlistFormat, process::ToolStatus, Error, Result};

/// A facility that describes the type of a file in a short line of text.
pub trait DetectFileType {
    /// Returns the description of the file at `path`, trimmed of surrounding
    /// whitespace.
    ///
    /// # Errors
    /// This function returns an error if the facility can't be run or reports
    /// failure.
    fn describe(&self, path: &Path) -> Result<String>;
}

impl<D: DetectFileType + ?Sized> DetectFileType for &D {
    fn describe(&self, path: &Path) -> Result<String> {
        (**self).describe(path)
    }
}

/// Classifies a file-type description. The first [`PlistFormat`] whose
/// [detection marker](PlistFormat::detection_marker) is contained in
/// `description` wins; matching is case-sensitive.
pub fn classify(description: &str) -> Option<PlistFormat> {
    PlistFormat::ALL
        .into_iter()
        .find(|format| description.contains(format.detection_marker()))
}

/// Describes files with the `file(1)` utility in brief mode.
#[derive(Clone, Debug)]
pub struct FileCommand {
    program: OsString,
}

impl FileCommand {
    /// The program run when none is configured.
    pub const DEFAULT_PROGRAM: &'static str = "file";

    /// Creates a detector that runs `program` instead of `file`.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the program this detector runs.
    pub fn program(&self) -> &Path {
        Path::new(&self.program)
    }
}

impl Default for FileCommand {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl DetectFileType for FileCommand {
    fn describe(&self, path: &Path) -> Result<String> {
        let program = self.program().display().to_string();
        debug!("Running {program} -b {}", path.display());
        let output = Command::new(&self.program)
            .arg("-b")
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Error::io(e, format!("running '{program}'")))?;
        let status = ToolStatus::from(output.status);
        if !status.success() {
            return Err(Error::Detection { program, status });
        }
        let description = String::from_utf8_lossy(&output.stdout).trim().to_owned();
        debug!("{program} described {} as {description:?}", path.display());
        Ok(description)
    }
}
