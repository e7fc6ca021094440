//! A crate for detecting whether a property list file uses the binary or XML
//! encoding and flipping it to the other one in place.
//!
//! Neither detection nor conversion is done in-process: both are delegated to
//! external tools, `file` and `plutil` by default, behind the
//! [`DetectFileType`](detect::DetectFileType) and
//! [`ConvertPlist`](convert::ConvertPlist) traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]

pub mod attributes;
pub mod convert;
pub mod detect;
pub mod dispatch;
pub mod enums;
pub mod error;
pub mod process;
#[cfg(test)]
mod test_utils;

pub use crate::{
    convert::{ConvertPlist, Plutil},
    detect::{classify, DetectFileType, FileCommand},
    dispatch::{Dispatcher, Flip},
    enums::PlistFormat,
    error::{Error, Result},
    process::ToolStatus,
};
