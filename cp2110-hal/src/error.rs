use crate::DeviceSelector;
use crate::protocol::ReportKind;

/// Wrapper for problems when communicating with the CP2110.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No attached HID device matched the selector used to open the session.
    #[error("no CP2110 found matching {0}")]
    DeviceNotFound(DeviceSelector),
    /// A feature report from the CP2110 held a value with no defined meaning.
    ///
    /// The device state should be treated as unknown.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// A feature report from the CP2110 was shorter than its fixed layout.
    #[error("{report:?} feature report was {received} bytes long, expected {expected}")]
    ShortFeatureReport {
        /// Feature report that was requested.
        report: ReportKind,
        /// Length of the report layout, including the report ID.
        expected: usize,
        /// Number of bytes actually returned by the HID stack.
        received: usize,
    },
    /// Writing one of the interrupt reports of a UART write failed.
    ///
    /// The chunks before the failing one were sent, so the caller can resume from
    /// `written` if it wants to retry.
    #[error("UART write failed after {written} of {total} bytes")]
    UartWriteIncomplete {
        /// Number of payload bytes sent to the CP2110 before the failure.
        written: usize,
        /// Length of the data passed to the write.
        total: usize,
        /// Underlying HID error.
        #[source]
        source: hidapi::HidError,
    },
    /// An error occurred in the underlying USB HID layer.
    #[error("USB HID error: {0}")]
    HidApi(#[from] hidapi::HidError),
}

/// A byte in a feature report does not correspond to any defined setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} value {value:#04x}")]
pub struct DecodeError {
    /// Name of the setting being decoded.
    pub field: &'static str,
    /// Raw byte received from the CP2110.
    pub value: u8,
}

impl DecodeError {
    pub(crate) fn new(field: &'static str, value: u8) -> Self {
        Self { field, value }
    }
}
