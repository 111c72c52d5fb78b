//! Framing of UART data in HID interrupt reports.
//!
//! UART data travels in interrupt reports whose report ID is the number of data
//! bytes that follow (see "Interrupt Transfers" in AN434). In the outgoing
//! direction the driver writes `[length, data...]`; in the incoming direction the
//! first byte is dropped and the rest handed to the caller.

use crate::constants::{MAX_CHUNK_PAYLOAD, MAX_REPORT_LEN};

/// One outgoing interrupt report carrying a chunk of UART data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputReport {
    buf: [u8; MAX_REPORT_LEN],
    len: usize,
}

impl OutputReport {
    fn new(payload: &[u8]) -> Self {
        debug_assert!(
            !payload.is_empty() && payload.len() <= MAX_CHUNK_PAYLOAD,
            "Chunk payload length {} out of range.",
            payload.len()
        );
        let mut buf = [0u8; MAX_REPORT_LEN];
        // Length prefix counts itself.
        buf[0] = payload.len() as u8 + 1;
        buf[1..=payload.len()].copy_from_slice(payload);
        Self {
            buf,
            len: payload.len() + 1,
        }
    }

    /// The length prefix (report ID) of this report.
    pub fn header(&self) -> u8 {
        self.buf[0]
    }

    /// The UART data carried by this report.
    pub fn payload(&self) -> &[u8] {
        &self.buf[1..self.len]
    }

    /// The full report as written to the HID device, length prefix included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl AsRef<[u8]> for OutputReport {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Iterator over the interrupt reports needed to send a byte slice.
///
/// Created by [`frame_write_chunks`] or [`WriteChunks::with_max_payload`]. The
/// input is never modified, and cloning the iterator restarts framing from the
/// clone's position.
#[derive(Debug, Clone)]
pub struct WriteChunks<'a> {
    chunks: std::slice::Chunks<'a, u8>,
}

impl<'a> WriteChunks<'a> {
    /// Frame `data` with at most `max_payload` data bytes per report.
    ///
    /// `max_payload` is clamped to `1..=MAX_CHUNK_PAYLOAD`.
    pub fn with_max_payload(data: &'a [u8], max_payload: usize) -> Self {
        Self {
            chunks: data.chunks(max_payload.clamp(1, MAX_CHUNK_PAYLOAD)),
        }
    }
}

impl Iterator for WriteChunks<'_> {
    type Item = OutputReport;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(OutputReport::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for WriteChunks<'_> {}

impl std::iter::FusedIterator for WriteChunks<'_> {}

/// Split `data` into interrupt reports of at most [`MAX_CHUNK_PAYLOAD`] data bytes.
///
/// Empty input produces no reports, as a zero length prefix is not a valid
/// report ID.
pub fn frame_write_chunks(data: &[u8]) -> WriteChunks<'_> {
    WriteChunks::with_max_payload(data, MAX_CHUNK_PAYLOAD)
}

/// Strip the leading length byte from an incoming interrupt report.
///
/// The length byte is not checked against the number of bytes received. An empty
/// buffer gives an empty payload.
pub fn deframe_read(buf: &[u8]) -> &[u8] {
    buf.get(1..).unwrap_or_default()
}
