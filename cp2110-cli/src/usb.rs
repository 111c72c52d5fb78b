use cp2110_hal::CP2110;

#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct UsbInfo<'a> {
    pub(crate) manufacturer: Option<&'a str>,
    pub(crate) product: Option<&'a str>,
    pub(crate) serial_number: Option<&'a str>,
    pub(crate) vendor_id: String,
    pub(crate) product_id: String,
    pub(crate) path: String,
}

impl<'a> From<&'a hidapi::DeviceInfo> for UsbInfo<'a> {
    fn from(info: &'a hidapi::DeviceInfo) -> Self {
        Self {
            manufacturer: info.manufacturer_string(),
            product: info.product_string(),
            serial_number: info.serial_number(),
            vendor_id: format!("{:#06X}", info.vendor_id()),
            product_id: format!("{:#06X}", info.product_id()),
            path: info.path().to_string_lossy().to_string(),
        }
    }
}

pub(crate) fn print_info(device: &CP2110) -> Result<(), cp2110_hal::Error> {
    println!("{:#?}", UsbInfo::from(&device.usb_device_info()?));
    Ok(())
}

pub(crate) fn list(vendor_id: u16, product_id: u16) -> anyhow::Result<()> {
    let devices = CP2110::enumerate(vendor_id, product_id)?;
    if devices.is_empty() {
        println!("No devices found with VID {vendor_id:#06X} PID {product_id:#06X}.");
    }
    for info in &devices {
        println!("{:#?}", UsbInfo::from(info));
    }
    Ok(())
}
