//! Byte layouts of the CP2110 HID reports.
//!
//! Everything in this module is pure: it turns values into report buffers and
//! back, without touching a device. [`CP2110`] combines these with a
//! [`HidTransport`] to talk to the chip.
//!
//! [`CP2110`]: crate::CP2110
//! [`HidTransport`]: crate::HidTransport
//!
//! # Interface specification
//!
//! The report IDs and layouts come from Silicon Labs application note AN434,
//! "CP2110/4 HID-to-UART Interface Specification".

mod framing;
mod uart_config;

pub use crate::constants::{MAX_CHUNK_PAYLOAD, MAX_REPORT_LEN, UART_CONFIG_REPORT_LEN};
pub use framing::{OutputReport, WriteChunks, deframe_read, frame_write_chunks};
pub use uart_config::{DataBits, FlowControl, Parity, StopBits, UartConfig};

/// Feature reports issued by this driver.
///
/// The CP2110 has many more (pin configuration, USB customisation, lock bytes)
/// that are not needed to drive the UART.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Get or set whether the UART is enabled.
    UartEnable,
    /// Clear the transmit and/or receive FIFO. Set only.
    PurgeFifos,
    /// Read the part number and device version. Get only.
    VersionInfo,
    /// Get or set the UART line settings.
    UartConfig,
}

impl ReportKind {
    /// HID report ID, placed in byte 0 of every feature report buffer.
    pub const fn id(self) -> u8 {
        match self {
            ReportKind::UartEnable => 0x41,
            ReportKind::PurgeFifos => 0x43,
            ReportKind::VersionInfo => 0x46,
            ReportKind::UartConfig => 0x50,
        }
    }

    /// Length of the report's buffer, including the report ID.
    pub const fn report_len(self) -> usize {
        match self {
            ReportKind::UartEnable => 2,
            ReportKind::PurgeFifos => 2,
            ReportKind::VersionInfo => 3,
            ReportKind::UartConfig => UART_CONFIG_REPORT_LEN,
        }
    }
}

impl From<ReportKind> for u8 {
    fn from(value: ReportKind) -> Self {
        value.id()
    }
}

/// Which of the CP2110's hardware FIFOs to purge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FifoSelector {
    /// Transmit FIFO only.
    Tx,
    /// Receive FIFO only.
    Rx,
    /// Both FIFOs.
    #[default]
    Both,
}

impl From<FifoSelector> for u8 {
    fn from(value: FifoSelector) -> Self {
        match value {
            FifoSelector::Tx => 0,
            FifoSelector::Rx => 1,
            FifoSelector::Both => 2,
        }
    }
}

/// Build a two-byte feature report: the report ID followed by one setting byte.
///
/// Used for enabling/disabling the UART (`1`/`0`) and purging FIFOs (the
/// [`FifoSelector`] value).
pub fn simple_command(report: ReportKind, payload: u8) -> [u8; 2] {
    [report.id(), payload]
}
