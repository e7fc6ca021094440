//! Converting a property list file to another encoding in place.

use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use log::debug;

use crate::{enums::PlistFormat, process::ToolStatus, Error, Result};

/// A facility that rewrites a property list file in place in another encoding.
pub trait ConvertPlist {
    /// Converts the file at `path` to `target`, returning how the conversion
    /// exited. A converter that runs but fails is reported through the returned
    /// [`ToolStatus`], not an error.
    ///
    /// # Errors
    /// This function returns an error if the converter can't be run at all.
    fn convert(&self, path: &Path, target: PlistFormat) -> Result<ToolStatus>;
}

impl<C: ConvertPlist + ?Sized> ConvertPlist for &C {
    fn convert(&self, path: &Path, target: PlistFormat) -> Result<ToolStatus> {
        (**self).convert(path, target)
    }
}

/// Converts files with `plutil -convert <format> <path>`.
///
/// The converter inherits standard output and error so its own diagnostics,
/// e.g. for malformed content, reach the user unchanged.
#[derive(Clone, Debug)]
pub struct Plutil {
    program: OsString,
}

impl Plutil {
    /// The program run when none is configured.
    pub const DEFAULT_PROGRAM: &'static str = "plutil";

    /// Creates a converter that runs `program` instead of `plutil`.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the program this converter runs.
    pub fn program(&self) -> &Path {
        Path::new(&self.program)
    }
}

impl Default for Plutil {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl ConvertPlist for Plutil {
    fn convert(&self, path: &Path, target: PlistFormat) -> Result<ToolStatus> {
        let program = self.program().display().to_string();
        debug!(
            "Running {program} -convert {} {}",
            target.converter_id(),
            path.display()
        );
        let status = Command::new(&self.program)
            .arg("-convert")
            .arg(target.converter_id())
            .arg(path)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| Error::io(e, format!("running '{program}'")))?;
        Ok(ToolStatus::from(status))
    }
}
