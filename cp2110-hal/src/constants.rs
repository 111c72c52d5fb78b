/// Silicon Labs USB vendor ID.
pub const SILABS_VID: u16 = 0x10C4;
/// Factory-default USB product ID of the CP2110.
pub const CP2110_PID: u16 = 0xEA80;

/// Largest HID report the CP2110 exchanges, including the report ID byte.
pub const MAX_REPORT_LEN: usize = 64;
/// Largest UART payload carried by one interrupt report.
///
/// The report ID doubles as the length prefix, leaving 63 bytes of the 64-byte
/// report, one of which is held back from the payload.
pub const MAX_CHUNK_PAYLOAD: usize = 62;
/// Length of the UART config feature report, including the report ID.
pub const UART_CONFIG_REPORT_LEN: usize = 9;
