use std::cell::RefCell;
use std::collections::VecDeque;

use hidapi::HidDevice;

use crate::VersionInfo;
use crate::error::Error;
use crate::protocol::{
    FifoSelector, ReportKind, UART_CONFIG_REPORT_LEN, UartConfig, deframe_read,
    frame_write_chunks, simple_command,
};
use crate::transport::HidTransport;

#[cfg(feature = "async")]
mod async_io;
mod io;
mod usb;

pub use usb::DeviceSelector;

/// Driver for the CP2110.
///
/// # Quick start
///
/// Open the first CP2110 attached to the host with [`CP2110::connect`], or pick a
/// particular one with [`CP2110::connect_with_serial`], [`CP2110::connect_with_path`]
/// or [`CP2110::connect_with_vid_and_pid`] (if its USB IDs have been customised).
///
/// The UART must be configured with [`CP2110::uart_write_config`] and enabled with
/// [`CP2110::uart_enable`] before data will flow. Data is then sent with
/// [`CP2110::uart_write`] and received with [`CP2110::uart_read`], or through the
/// [`std::io`] and [`embedded_io`] traits implemented for this struct.
///
/// Reads never block: the USB HID device is put into non-blocking mode when the
/// driver is created, so a read returns whatever the CP2110 has already sent to
/// the host, which may be nothing.
///
/// # Transports
///
/// The driver is generic over the [`HidTransport`] it talks through, which is
/// [`hidapi::HidDevice`] unless you use [`CP2110::from_transport`].
#[derive(Debug)]
pub struct CP2110<T: HidTransport = HidDevice> {
    /// Underlying HID device.
    ///
    /// The C hidapi library is not thread safe and the `hidapi` types are
    /// appropriately `!Sync`, as is this driver.
    inner: T,
    /// UART data received from the device but not yet handed to a caller.
    ///
    /// Only the stream trait implementations leave bytes here, when the caller's
    /// buffer is smaller than the payload of the report just read. `RefCell` keeps
    /// the driver usable through a shared reference; the driver is `!Sync` anyway.
    rx_backlog: RefCell<VecDeque<u8>>,
}

impl<T: HidTransport> CP2110<T> {
    ////////////////////////////////////////////////////////////////////////////////
    // Construction and teardown
    ////////////////////////////////////////////////////////////////////////////////

    /// Create a driver talking through an already-open HID transport.
    ///
    /// The transport is switched to non-blocking reads.
    ///
    /// # Errors
    ///
    /// An error is returned if the transport cannot be put into non-blocking mode.
    pub fn from_transport(inner: T) -> Result<Self, Error> {
        inner.set_blocking_mode(false)?;
        Ok(Self {
            inner,
            rx_backlog: RefCell::default(),
        })
    }

    /// Release the device.
    ///
    /// Dropping the driver has the same effect; this just makes the release
    /// explicit at the call site.
    pub fn close(self) {
        tracing::debug!("closing CP2110");
        drop(self);
    }

    /// Consume the driver and return the underlying transport.
    ///
    /// Any received UART data still held by the driver is discarded.
    pub fn into_inner(self) -> T {
        self.inner
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Feature report exchange with the CP2110
    ////////////////////////////////////////////////////////////////////////////////

    /// Read the given feature report from the CP2110.
    ///
    /// `N` must be the report's full length, including the report ID.
    fn get_feature_report<const N: usize>(&self, report: ReportKind) -> Result<[u8; N], Error> {
        debug_assert_eq!(N, report.report_len(), "Wrong buffer size for {report:?}.");
        let mut buf = [0u8; N];
        buf[0] = report.id();
        let received = self.inner.get_feature_report(&mut buf)?;
        tracing::trace!(?report, bytes = ?&buf[..received.min(N)], "get feature report");

        if received < N {
            return Err(Error::ShortFeatureReport {
                report,
                expected: N,
                received,
            });
        }
        // The decoders don't rely on the echoed ID, so a mismatch is only noted.
        if buf[0] != report.id() {
            tracing::warn!(
                ?report,
                echoed = buf[0],
                "CP2110 echoed an unexpected report ID"
            );
        }
        Ok(buf)
    }

    /// Send a feature report, whose first byte is the report ID, to the CP2110.
    fn send_feature_report(&self, buf: &[u8]) -> Result<(), Error> {
        tracing::trace!(bytes = ?buf, "send feature report");
        self.inner.send_feature_report(buf)?;
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // UART control
    ////////////////////////////////////////////////////////////////////////////////

    /// Check whether the UART is enabled.
    ///
    /// Any reported state other than exactly 1 is treated as disabled.
    ///
    /// # Interface specification
    ///
    /// See the Get/Set UART Enable report (0x41) in AN434.
    pub fn uart_is_enabled(&self) -> Result<bool, Error> {
        let buf: [u8; 2] = self.get_feature_report(ReportKind::UartEnable)?;
        Ok(buf[1] == 1)
    }

    /// Enable the UART.
    ///
    /// The TX and RX pins are only driven while the UART is enabled.
    pub fn uart_enable(&self) -> Result<(), Error> {
        tracing::debug!("enabling UART");
        self.send_feature_report(&simple_command(ReportKind::UartEnable, 1))
    }

    /// Disable the UART.
    pub fn uart_disable(&self) -> Result<(), Error> {
        tracing::debug!("disabling UART");
        self.send_feature_report(&simple_command(ReportKind::UartEnable, 0))
    }

    /// Discard the contents of the transmit and/or receive FIFOs.
    ///
    /// Purging the receive FIFO does not touch data already transferred to the host,
    /// including any held by this driver for the stream trait implementations.
    ///
    /// # Interface specification
    ///
    /// See the Purge FIFOs report (0x43) in AN434.
    pub fn uart_purge_fifos(&self, which: FifoSelector) -> Result<(), Error> {
        tracing::debug!(?which, "purging FIFOs");
        self.send_feature_report(&simple_command(ReportKind::PurgeFifos, which.into()))
    }

    /// Read the current UART line settings.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] is returned if the CP2110 reports a setting this driver
    /// does not recognise.
    pub fn uart_read_config(&self) -> Result<UartConfig, Error> {
        let buf: [u8; UART_CONFIG_REPORT_LEN] = self.get_feature_report(ReportKind::UartConfig)?;
        Ok(UartConfig::from_feature_report(&buf)?)
    }

    /// Change the UART line settings.
    pub fn uart_write_config(&self, config: &UartConfig) -> Result<(), Error> {
        tracing::debug!(%config, "writing UART config");
        self.send_feature_report(&config.to_feature_report())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Device information
    ////////////////////////////////////////////////////////////////////////////////

    /// Read the part number and device version.
    ///
    /// # Interface specification
    ///
    /// See the Get Version Information report (0x46) in AN434.
    pub fn version_info(&self) -> Result<VersionInfo, Error> {
        let [_, part_number, device_version]: [u8; 3] =
            self.get_feature_report(ReportKind::VersionInfo)?;
        Ok(VersionInfo::from([part_number, device_version]))
    }

    ////////////////////////////////////////////////////////////////////////////////
    // UART data
    ////////////////////////////////////////////////////////////////////////////////

    /// Send data out of the UART.
    ///
    /// The data is split into interrupt reports of at most 62 bytes, written in
    /// order. Returns the number of bytes written, which is always `data.len()`.
    /// Writing an empty slice does nothing.
    ///
    /// # Errors
    ///
    /// If writing a report fails, [`Error::UartWriteIncomplete`] is returned with
    /// the number of bytes of `data` that were sent by the earlier reports.
    pub fn uart_write(&self, data: &[u8]) -> Result<usize, Error> {
        let mut written = 0;
        for report in frame_write_chunks(data) {
            tracing::trace!(bytes = ?report.as_bytes(), "write UART data report");
            if let Err(source) = self.inner.write(report.as_bytes()) {
                return Err(Error::UartWriteIncomplete {
                    written,
                    total: data.len(),
                    source,
                });
            }
            written += report.payload().len();
        }
        Ok(written)
    }

    /// Read data received by the UART.
    ///
    /// At most one interrupt report of up to `size` bytes is read, and its leading
    /// length byte is dropped, so up to `size - 1` bytes are returned. Receiving
    /// nothing is not an error: an empty vector means no data was waiting.
    ///
    /// If the stream trait implementations have left received data with the driver,
    /// that is returned first and the device is not read.
    pub fn uart_read(&self, size: usize) -> Result<Vec<u8>, Error> {
        let max_payload = size.saturating_sub(1);
        {
            let mut backlog = self.rx_backlog.borrow_mut();
            if !backlog.is_empty() {
                let n = backlog.len().min(max_payload);
                return Ok(backlog.drain(..n).collect());
            }
        }

        let mut report = vec![0u8; size];
        let received = self.inner.read(&mut report)?;
        let payload = deframe_read(&report[..received.min(size)]);
        if !payload.is_empty() {
            tracing::trace!(bytes = ?payload, "read UART data");
        }
        Ok(payload.to_vec())
    }
}
