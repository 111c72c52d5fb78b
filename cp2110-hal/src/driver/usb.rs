use std::ffi::{CStr, CString};

use hidapi::{DeviceInfo, HidApi, HidDevice};

use super::CP2110;
use crate::Error;
use crate::constants::{CP2110_PID, SILABS_VID};

/// How to pick the USB HID device a driver is opened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelector {
    /// The first device with the given vendor and product ID.
    VidPid {
        /// USB vendor ID.
        vendor_id: u16,
        /// USB product ID.
        product_id: u16,
    },
    /// The device with the given vendor ID, product ID, and USB serial number.
    Serial {
        /// USB vendor ID.
        vendor_id: u16,
        /// USB product ID.
        product_id: u16,
        /// USB serial number string.
        serial_number: String,
    },
    /// The device at the given platform-specific path.
    ///
    /// Paths are listed by [`CP2110::enumerate`].
    Path(CString),
}

impl Default for DeviceSelector {
    /// The factory-default CP2110 vendor and product ID.
    fn default() -> Self {
        Self::VidPid {
            vendor_id: SILABS_VID,
            product_id: CP2110_PID,
        }
    }
}

impl DeviceSelector {
    fn matches(&self, info: &DeviceInfo) -> bool {
        match self {
            DeviceSelector::VidPid {
                vendor_id,
                product_id,
            } => info.vendor_id() == *vendor_id && info.product_id() == *product_id,
            DeviceSelector::Serial {
                vendor_id,
                product_id,
                serial_number,
            } => {
                info.vendor_id() == *vendor_id
                    && info.product_id() == *product_id
                    && info.serial_number() == Some(serial_number.as_str())
            }
            DeviceSelector::Path(path) => info.path() == path.as_c_str(),
        }
    }
}

impl std::fmt::Display for DeviceSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceSelector::VidPid {
                vendor_id,
                product_id,
            } => write!(f, "VID {vendor_id:#06X} PID {product_id:#06X}"),
            DeviceSelector::Serial {
                vendor_id,
                product_id,
                serial_number,
            } => write!(
                f,
                "VID {vendor_id:#06X} PID {product_id:#06X} serial number {serial_number:?}"
            ),
            DeviceSelector::Path(path) => write!(f, "path {}", path.to_string_lossy()),
        }
    }
}

/// # USB device functionality
impl CP2110 {
    /// Connect to the first USB device found with the default vendor and product ID.
    ///
    /// The default VID is 0x10C4 (Silicon Labs) and the default PID is 0xEA80.
    ///
    /// # Errors
    ///
    /// [`Error::DeviceNotFound`] is returned if no such device is attached, and
    /// [`Error::HidApi`] if it cannot be opened.
    pub fn connect() -> Result<Self, Error> {
        Self::connect_with(DeviceSelector::default())
    }

    /// Connect to the first USB device found with the given vendor and product ID.
    ///
    /// Use this constructor if you have changed the USB VID or PID of your CP2110.
    pub fn connect_with_vid_and_pid(vendor_id: u16, product_id: u16) -> Result<Self, Error> {
        Self::connect_with(DeviceSelector::VidPid {
            vendor_id,
            product_id,
        })
    }

    /// Connect to the CP2110 with the given USB serial number.
    ///
    /// Only devices with the default vendor and product ID are considered; use
    /// [`CP2110::connect_with`] with [`DeviceSelector::Serial`] otherwise.
    pub fn connect_with_serial(serial_number: &str) -> Result<Self, Error> {
        Self::connect_with(DeviceSelector::Serial {
            vendor_id: SILABS_VID,
            product_id: CP2110_PID,
            serial_number: serial_number.to_owned(),
        })
    }

    /// Connect to the USB HID device at the given platform-specific path.
    pub fn connect_with_path(path: &CStr) -> Result<Self, Error> {
        Self::connect_with(DeviceSelector::Path(path.to_owned()))
    }

    /// Connect to the first USB HID device matching `selector`.
    ///
    /// # Errors
    ///
    /// [`Error::DeviceNotFound`] is returned if no attached device matches, and
    /// [`Error::HidApi`] if the matching device cannot be opened.
    pub fn connect_with(selector: DeviceSelector) -> Result<Self, Error> {
        let hidapi = HidApi::new()?;
        let Some(info) = hidapi.device_list().find(|info| selector.matches(info)) else {
            tracing::debug!(%selector, "no matching HID device");
            return Err(Error::DeviceNotFound(selector));
        };
        let device = info.open_device(&hidapi)?;
        tracing::debug!(%selector, path = %info.path().to_string_lossy(), "opened CP2110");
        Self::from_transport(device)
    }

    /// List the attached USB HID devices with the given vendor and product ID.
    ///
    /// Pass [`SILABS_VID`] and [`CP2110_PID`] to find CP2110s with the factory IDs.
    ///
    /// [`SILABS_VID`]: crate::SILABS_VID
    /// [`CP2110_PID`]: crate::CP2110_PID
    pub fn enumerate(vendor_id: u16, product_id: u16) -> Result<Vec<DeviceInfo>, Error> {
        let hidapi = HidApi::new()?;
        Ok(hidapi
            .device_list()
            .filter(|info| info.vendor_id() == vendor_id && info.product_id() == product_id)
            .cloned()
            .collect())
    }

    /// Get the USB HID device information from the host's USB interface.
    ///
    /// This is a thin wrapper around [`HidDevice::get_device_info`].
    ///
    /// # Errors
    ///
    /// An error will be returned if the device information cannot be obtained from the
    /// underlying USB interface.
    pub fn usb_device_info(&self) -> Result<DeviceInfo, Error> {
        HidDevice::get_device_info(&self.inner).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selector_is_factory_ids() {
        assert_eq!(
            DeviceSelector::default(),
            DeviceSelector::VidPid {
                vendor_id: 0x10C4,
                product_id: 0xEA80
            }
        );
    }

    #[test]
    fn selector_display() {
        assert_eq!(
            DeviceSelector::default().to_string(),
            "VID 0x10C4 PID 0xEA80"
        );
        let by_path = DeviceSelector::Path(CString::new("/dev/hidraw3").unwrap());
        assert_eq!(by_path.to_string(), "path /dev/hidraw3");
    }
}
