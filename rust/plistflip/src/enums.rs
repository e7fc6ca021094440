//! Enums used in detecting and converting property lists.

use std::fmt::{self, Display, Formatter};

/// One of the two encodings of a property list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlistFormat {
    /// The compact `bplist00` encoding.
    Binary,
    /// The XML 1.0 text encoding.
    Xml,
}

impl PlistFormat {
    /// Every format, in the order detection markers are tested.
    pub const ALL: [PlistFormat; 2] = [PlistFormat::Binary, PlistFormat::Xml];

    /// The substring of a file-type description that identifies this format.
    pub const fn detection_marker(&self) -> &'static str {
        match self {
            PlistFormat::Binary => "Apple binary property list",
            PlistFormat::Xml => "XML 1.0 document text",
        }
    }

    /// The format identifier passed to the converter, version 1 of each encoding.
    pub const fn converter_id(&self) -> &'static str {
        match self {
            PlistFormat::Binary => "binary1",
            PlistFormat::Xml => "xml1",
        }
    }

    /// The format a file in this format gets converted to.
    pub const fn opposite(&self) -> Self {
        match self {
            PlistFormat::Binary => PlistFormat::Xml,
            PlistFormat::Xml => PlistFormat::Binary,
        }
    }

    /// Converts the given format to a `&'static str`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlistFormat::Binary => "binary",
            PlistFormat::Xml => "XML",
        }
    }
}

impl Display for PlistFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
