// Blocking acknowledgments shown after user actions
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    Saved,
    LedTestSent,
    ConnectRequested,
    ConnectFailed,
}

impl Acknowledgment {
    pub fn message(self) -> &'static str {
        match self {
            Acknowledgment::Saved => "Saved",
            Acknowledgment::LedTestSent => "LED test sent",
            Acknowledgment::ConnectRequested => "Connect requested",
            Acknowledgment::ConnectFailed => "Connect failed",
        }
    }

    pub fn is_success(self) -> bool {
        !matches!(self, Acknowledgment::ConnectFailed)
    }
}

impl fmt::Display for Acknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Acknowledgment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}
