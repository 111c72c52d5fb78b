//! Byte stream trait implementations for the CP2110 UART.
//!
//! Both `std::io` and `embedded_io` are supported. The HID device is in
//! non-blocking mode, so `std::io::Read` reports `WouldBlock` when nothing has
//! arrived, while `embedded_io::Read` (which must block) polls the device.
use std::time::Duration;

use super::CP2110;
use crate::Error;
use crate::constants::MAX_REPORT_LEN;
use crate::protocol::deframe_read;
use crate::transport::HidTransport;

/// Delay between reads while `embedded_io::Read::read` waits for data.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

impl<T: HidTransport> CP2110<T> {
    /// Read one interrupt report into the receive backlog, if the backlog is empty.
    fn fill_rx_backlog(&self) -> Result<(), Error> {
        let mut backlog = self.rx_backlog.borrow_mut();
        if backlog.is_empty() {
            let mut report = [0u8; MAX_REPORT_LEN];
            let received = self.inner.read(&mut report)?;
            let payload = deframe_read(&report[..received.min(MAX_REPORT_LEN)]);
            if !payload.is_empty() {
                tracing::trace!(bytes = ?payload, "read UART data");
            }
            backlog.extend(payload);
        }
        Ok(())
    }

    /// Copy as much received data as is available (and fits) into `buf`.
    fn read_available(&self, buf: &mut [u8]) -> Result<usize, Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.fill_rx_backlog()?;
        let mut backlog = self.rx_backlog.borrow_mut();
        let n = backlog.len().min(buf.len());
        for (dst, src) in buf.iter_mut().zip(backlog.drain(..n)) {
            *dst = src;
        }
        Ok(n)
    }

    /// Write all of `buf`, reporting a short write if a later chunk fails.
    ///
    /// The error is only returned if nothing at all could be written.
    fn write_stream(&self, buf: &[u8]) -> Result<usize, Error> {
        match self.uart_write(buf) {
            Err(Error::UartWriteIncomplete { written, .. }) if written > 0 => {
                tracing::debug!(written, total = buf.len(), "short UART write");
                Ok(written)
            }
            result => result,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// std::io
////////////////////////////////////////////////////////////////////////////////

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        use std::io::ErrorKind;
        let kind = match &value {
            Error::DeviceNotFound(_) => ErrorKind::NotFound,
            Error::Decode(_) | Error::ShortFeatureReport { .. } => ErrorKind::InvalidData,
            Error::UartWriteIncomplete { .. } | Error::HidApi(_) => ErrorKind::Other,
        };
        std::io::Error::new(kind, value)
    }
}

impl<T: HidTransport> std::io::Read for CP2110<T> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.read_available(buf)? {
            0 if !buf.is_empty() => Err(std::io::ErrorKind::WouldBlock.into()),
            n => Ok(n),
        }
    }
}

impl<T: HidTransport> std::io::Write for CP2110<T> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(self.write_stream(buf)?)
    }

    /// Reports are handed to the HID stack as they are written, so this does nothing.
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// embedded_io
////////////////////////////////////////////////////////////////////////////////

impl embedded_io::Error for Error {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Error::DeviceNotFound(_) => embedded_io::ErrorKind::NotFound,
            Error::Decode(_) | Error::ShortFeatureReport { .. } => {
                embedded_io::ErrorKind::InvalidData
            }
            Error::UartWriteIncomplete { .. } | Error::HidApi(_) => embedded_io::ErrorKind::Other,
        }
    }
}

impl<T: HidTransport> embedded_io::ErrorType for CP2110<T> {
    type Error = Error;
}

impl<T: HidTransport> embedded_io::Read for CP2110<T> {
    /// Block until at least one byte has been received.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            let n = self.read_available(buf)?;
            if n > 0 || buf.is_empty() {
                return Ok(n);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

impl<T: HidTransport> embedded_io::ReadReady for CP2110<T> {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        self.fill_rx_backlog()?;
        Ok(!self.rx_backlog.borrow().is_empty())
    }
}

impl<T: HidTransport> embedded_io::Write for CP2110<T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.write_stream(buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
