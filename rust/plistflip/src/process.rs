//! Helpers shared by the process-backed detector and converter.

use std::{
    fmt::{self, Display, Formatter},
    process::ExitStatus,
};

use crate::error::EXIT_INTERNAL;

/// How an external tool exited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolStatus {
    /// The tool exited with the given code.
    Code(i32),
    /// The tool was terminated without an exit code, e.g. by a signal.
    Terminated,
}

impl ToolStatus {
    /// Returns `true` if the tool exited with code 0.
    pub fn success(&self) -> bool {
        matches!(self, ToolStatus::Code(0))
    }

    /// The code to exit this process with so the tool's own status reaches the
    /// caller. Only the low 8 bits survive, and a non-zero status never collapses
    /// to a successful one.
    pub fn exit_code(&self) -> u8 {
        match self {
            ToolStatus::Code(0) => 0,
            ToolStatus::Code(code) => match (*code & 0xFF) as u8 {
                0 => EXIT_INTERNAL,
                low => low,
            },
            ToolStatus::Terminated => EXIT_INTERNAL,
        }
    }
}

impl From<ExitStatus> for ToolStatus {
    fn from(status: ExitStatus) -> Self {
        status
            .code()
            .map(ToolStatus::Code)
            .unwrap_or(ToolStatus::Terminated)
    }
}

impl Display for ToolStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ToolStatus::Code(code) => write!(f, "exit status {code}"),
            ToolStatus::Terminated => f.write_str("terminated by signal"),
        }
    }
}
