//! Version information read from the CP2110.

/// Contents of the Get Version Information feature report (0x46).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    /// Part number byte; 0x0A for the CP2110.
    pub part_number: u8,
    /// Device (firmware) version byte.
    pub device_version: u8,
}

impl VersionInfo {
    /// Both bytes in the order the CP2110 sent them.
    pub fn raw(&self) -> [u8; 2] {
        [self.part_number, self.device_version]
    }
}

impl From<[u8; 2]> for VersionInfo {
    fn from([part_number, device_version]: [u8; 2]) -> Self {
        Self {
            part_number,
            device_version,
        }
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "part {:#04X}, version {:#04X}",
            self.part_number, self.device_version
        )
    }
}
