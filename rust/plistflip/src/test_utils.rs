use std::{
    cell::{Cell, RefCell},
    fs,
    path::{Path, PathBuf},
};

use crate::{
    convert::ConvertPlist, detect::DetectFileType, enums::PlistFormat, process::ToolStatus,
    Error, Result,
};

/// A detector that always returns the same description and counts its calls.
pub struct FixedDetector {
    description: String,
    calls: Cell<usize>,
}

impl FixedDetector {
    pub fn new(description: impl ToString) -> Self {
        Self {
            description: description.to_string(),
            calls: Cell::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl DetectFileType for FixedDetector {
    fn describe(&self, _path: &Path) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.description.clone())
    }
}

/// A converter that records its calls and reports a fixed status without touching
/// the file.
pub struct RecordingConverter {
    status: ToolStatus,
    calls: RefCell<Vec<(PathBuf, PlistFormat)>>,
}

impl RecordingConverter {
    pub fn new(status: ToolStatus) -> Self {
        Self {
            status,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PlistFormat)> {
        self.calls.borrow().clone()
    }
}

impl ConvertPlist for RecordingConverter {
    fn convert(&self, path: &Path, target: PlistFormat) -> Result<ToolStatus> {
        self.calls.borrow_mut().push((path.to_owned(), target));
        Ok(self.status)
    }
}

const BINARY_MAGIC: &[u8] = b"bplist00";
const XML_PROLOG: &[u8] = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// A detector that describes a file by its leading bytes, like `file -b`.
pub struct ContentDetector;

impl DetectFileType for ContentDetector {
    fn describe(&self, path: &Path) -> Result<String> {
        let contents = fs::read(path).map_err(|e| Error::io(e, "reading test plist"))?;
        let description = if contents.starts_with(BINARY_MAGIC) {
            PlistFormat::Binary.detection_marker()
        } else if contents.starts_with(b"<?xml") {
            "XML 1.0 document text, ASCII text"
        } else {
            "data"
        };
        Ok(description.to_owned())
    }
}

/// A converter that swaps the file's leading bytes by writing a sibling file and
/// renaming it over the original, which resets the file's permissions.
pub struct FlippingConverter;

impl ConvertPlist for FlippingConverter {
    fn convert(&self, path: &Path, target: PlistFormat) -> Result<ToolStatus> {
        let contents = match target {
            PlistFormat::Binary => BINARY_MAGIC,
            PlistFormat::Xml => XML_PROLOG,
        };
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, contents).map_err(|e| Error::io(e, "writing test plist"))?;
        fs::rename(&tmp, path).map_err(|e| Error::io(e, "replacing test plist"))?;
        Ok(ToolStatus::Code(0))
    }
}
