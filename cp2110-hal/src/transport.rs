//! USB HID capability required by the driver.
//!
//! [`CP2110`] is generic over [`HidTransport`] so that it can be driven by
//! something other than a real [`hidapi::HidDevice`], for example an in-memory
//! fake in tests. The method signatures follow `hidapi` so that its device type
//! implements the trait by straight delegation.
//!
//! [`CP2110`]: crate::CP2110

use hidapi::{HidDevice, HidResult};

/// An open USB HID device.
///
/// Buffers passed to the feature report methods start with the report ID, and
/// so do buffers filled by them.
pub trait HidTransport {
    /// Read a feature report into `buf`, whose byte 0 holds the requested report ID.
    ///
    /// Returns the number of bytes read, including the report ID.
    fn get_feature_report(&self, buf: &mut [u8]) -> HidResult<usize>;

    /// Send a feature report. Byte 0 of `data` is the report ID.
    fn send_feature_report(&self, data: &[u8]) -> HidResult<()>;

    /// Write an output report. Byte 0 of `data` is the report ID.
    ///
    /// Returns the number of bytes written.
    fn write(&self, data: &[u8]) -> HidResult<usize>;

    /// Read an input report into `buf`, returning the number of bytes read.
    ///
    /// In non-blocking mode this returns `Ok(0)` if no report is waiting.
    fn read(&self, buf: &mut [u8]) -> HidResult<usize>;

    /// Switch [`HidTransport::read`] between blocking and non-blocking mode.
    fn set_blocking_mode(&self, blocking: bool) -> HidResult<()>;
}

impl HidTransport for HidDevice {
    fn get_feature_report(&self, buf: &mut [u8]) -> HidResult<usize> {
        HidDevice::get_feature_report(self, buf)
    }

    fn send_feature_report(&self, data: &[u8]) -> HidResult<()> {
        HidDevice::send_feature_report(self, data)
    }

    fn write(&self, data: &[u8]) -> HidResult<usize> {
        HidDevice::write(self, data)
    }

    fn read(&self, buf: &mut [u8]) -> HidResult<usize> {
        HidDevice::read(self, buf)
    }

    fn set_blocking_mode(&self, blocking: bool) -> HidResult<()> {
        HidDevice::set_blocking_mode(self, blocking)
    }
}

impl<T: HidTransport + ?Sized> HidTransport for &T {
    fn get_feature_report(&self, buf: &mut [u8]) -> HidResult<usize> {
        (**self).get_feature_report(buf)
    }

    fn send_feature_report(&self, data: &[u8]) -> HidResult<()> {
        (**self).send_feature_report(data)
    }

    fn write(&self, data: &[u8]) -> HidResult<usize> {
        (**self).write(data)
    }

    fn read(&self, buf: &mut [u8]) -> HidResult<usize> {
        (**self).read(buf)
    }

    fn set_blocking_mode(&self, blocking: bool) -> HidResult<()> {
        (**self).set_blocking_mode(blocking)
    }
}
