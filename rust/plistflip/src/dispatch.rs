//! The command dispatcher: validate the path, detect, classify, convert, report.

use std::{
    io,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{
    attributes::FileAttributes,
    convert::ConvertPlist,
    detect::{classify, DetectFileType},
    enums::PlistFormat,
    Error, Result,
};

/// A successful classification, and conversion unless it was a dry run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flip {
    /// The encoding the file was detected as.
    pub from: PlistFormat,
    /// The encoding the file was, or would be, converted to.
    pub to: PlistFormat,
}

/// Flips a single property list between its binary and XML encodings using a
/// detector and a converter.
#[derive(Debug)]
pub struct Dispatcher<D, C> {
    detector: D,
    converter: C,
    dry_run: bool,
}

impl<D, C> Dispatcher<D, C>
where
    D: DetectFileType,
    C: ConvertPlist,
{
    /// Creates a new dispatcher.
    pub fn new(detector: D, converter: C) -> Self {
        Self {
            detector,
            converter,
            dry_run: false,
        }
    }

    /// Sets whether to stop after classification without invoking the converter.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs one invocation with the positional `paths` given on the command line,
    /// writing every message to `out`, and returns the process exit code.
    pub fn run<W: io::Write>(&self, program: &str, paths: &[PathBuf], out: &mut W) -> u8 {
        let res = match paths {
            [path] => self.flip(path, out),
            _ => Err(Error::usage(program)),
        };
        match res {
            Ok(flip) => {
                debug!("Finished flipping {} to {}", flip.from, flip.to);
                0
            }
            Err(err) => {
                if let Err(write_err) = writeln!(out, "{err}") {
                    warn!("Failed to report {err:?}: {write_err}");
                }
                err.exit_code()
            }
        }
    }

    /// Detects the encoding of the file at `path` and converts it in place to the
    /// opposite encoding. Conversions to binary keep the file's permission bits and
    /// ownership.
    ///
    /// # Errors
    /// This function returns an error if `path` isn't a regular file, the detected
    /// type is neither encoding, either tool fails, or `out` can't be written to.
    pub fn flip<W: io::Write>(&self, path: &Path, out: &mut W) -> Result<Flip> {
        if !path.is_file() {
            return Err(Error::NotFound {
                path: path.to_owned(),
            });
        }
        let detected = self.detector.describe(path)?;
        let Some(from) = classify(&detected) else {
            return Err(Error::UnsupportedFormat { detected });
        };
        let to = from.opposite();
        let flip = Flip { from, to };
        if self.dry_run {
            report(out, format_args!("Detected {from} plist, would convert to {to}"))?;
            return Ok(flip);
        }
        report(out, format_args!("Detected {from} plist, converting to {to}..."))?;

        let attributes = if to == PlistFormat::Binary {
            Some(FileAttributes::snapshot(path)?)
        } else {
            None
        };
        let status = self.converter.convert(path, to)?;
        if !status.success() {
            return Err(Error::Conversion { target: to, status });
        }
        if let Some(attributes) = attributes {
            attributes.restore(path)?;
        }
        info!("Converted {} from {from} to {to}", path.display());
        report(out, format_args!("Conversion complete!"))?;
        Ok(flip)
    }
}

// Flushes after every line: the converter shares the same standard output.
fn report<W: io::Write>(out: &mut W, msg: std::fmt::Arguments) -> Result<()> {
    writeln!(out, "{msg}")
        .and_then(|_| out.flush())
        .map_err(|e| Error::io(e, "writing status message"))
}
