//! Tests against a real CP2110 with its TX pin wired to its RX pin.
//!
//! These are ignored by default. Run them with `cargo test -- --ignored
//! --test-threads=1`: only one driver at a time can hold the USB device, and the
//! underlying HidApi struct cannot be shared between threads.
use std::time::{Duration, Instant};

use cp2110_hal::protocol::{FifoSelector, MAX_REPORT_LEN, Parity, UartConfig};
use cp2110_hal::{CP2110, Error};

fn open_loopback() -> Result<CP2110, Error> {
    let device = CP2110::connect()?;
    device.uart_write_config(&UartConfig::new(115_200))?;
    device.uart_enable()?;
    device.uart_purge_fifos(FifoSelector::Both)?;
    Ok(device)
}

/// Poll until `len` bytes have been read or a second has passed.
fn read_at_least(device: &CP2110, len: usize) -> Result<Vec<u8>, Error> {
    let deadline = Instant::now() + Duration::from_secs(1);
    let mut received = Vec::new();
    while received.len() < len && Instant::now() < deadline {
        received.extend(device.uart_read(MAX_REPORT_LEN)?);
        std::thread::sleep(Duration::from_millis(1));
    }
    Ok(received)
}

/// The CP2110 reports part number 0x0A.
#[test]
#[ignore = "needs a CP2110 attached"]
fn hw_version_info() -> Result<(), Error> {
    let device = CP2110::connect()?;
    assert_eq!(device.version_info()?.part_number, 0x0A);
    Ok(())
}

/// Written line settings are read back unchanged.
#[test]
#[ignore = "needs a CP2110 attached"]
fn hw_config_round_trip() -> Result<(), Error> {
    let device = CP2110::connect()?;
    let config = UartConfig::new(57_600).with_parity(Parity::Even);
    device.uart_write_config(&config)?;
    assert_eq!(device.uart_read_config()?, config);
    Ok(())
}

/// Enabling and disabling the UART is reflected in its reported state.
#[test]
#[ignore = "needs a CP2110 attached"]
fn hw_enable_disable() -> Result<(), Error> {
    let device = CP2110::connect()?;
    device.uart_disable()?;
    assert!(!device.uart_is_enabled()?);
    device.uart_enable()?;
    assert!(device.uart_is_enabled()?);
    Ok(())
}

/// Data longer than one report comes back intact over the loopback wire.
#[test]
#[ignore = "needs a CP2110 with TX looped back to RX"]
fn hw_loopback() -> Result<(), Error> {
    let device = open_loopback()?;
    let data: Vec<u8> = (0..200).map(|n| n as u8).collect();
    assert_eq!(device.uart_write(&data)?, data.len());
    assert_eq!(read_at_least(&device, data.len())?, data);
    Ok(())
}
