//! Digital port status message.

use serde::Serialize;

/// Levels of the four digital/analog ports, raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PortLevels {
    pub d0: i16,
    pub d1: i16,
    pub d2: i16,
    pub d3: i16,
}
