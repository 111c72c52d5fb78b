use std::ffi::CString;

use clap::{Parser, ValueEnum};
use cp2110_hal::DeviceSelector;
use cp2110_hal::protocol::FifoSelector;

use crate::config::ConfigCommand;
use crate::uart::{ReadArgs, WriteArgs};
use crate::util;

/// CLI for the CP2110 USB HID to UART bridge
///
/// This exposes the UART functionality of the Silicon Labs CP2110 via the command
/// line: reading and changing the line settings, enabling and disabling the UART,
/// purging its FIFOs, and sending and receiving data.
///
/// The device is chosen by USB vendor and product ID (the factory defaults unless
/// given), optionally narrowed by serial number, or by its platform-specific HID
/// path as shown by the list command.
///
/// Set RUST_LOG (or pass --verbose) to see the HID reports exchanged with the device.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Device vendor ID in hexadecimal
    #[arg(short, long = "vid", default_value = "0x10C4", value_parser = util::u16_from_hex)]
    pub(crate) vid: u16,
    /// Device product ID in hexadecimal
    #[arg(short, long = "pid", default_value = "0xEA80", value_parser = util::u16_from_hex)]
    pub(crate) pid: u16,
    /// Device USB serial number
    #[arg(short, long, conflicts_with = "path")]
    pub(crate) serial: Option<String>,
    /// Platform-specific HID device path
    #[arg(long)]
    pub(crate) path: Option<String>,
    /// Log more detail to stderr (repeat for more)
    #[arg(long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

impl Cli {
    /// Device selection from the vid, pid, serial and path options.
    pub(crate) fn selector(&self) -> anyhow::Result<DeviceSelector> {
        Ok(match (&self.path, &self.serial) {
            (Some(path), _) => DeviceSelector::Path(CString::new(path.as_str())?),
            (None, Some(serial_number)) => DeviceSelector::Serial {
                vendor_id: self.vid,
                product_id: self.pid,
                serial_number: serial_number.clone(),
            },
            (None, None) => DeviceSelector::VidPid {
                vendor_id: self.vid,
                product_id: self.pid,
            },
        })
    }
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// List attached devices with the given vendor and product ID.
    List,
    /// Show the USB HID device information.
    Info,
    /// Read the part number and device version.
    Version,
    /// Show whether the UART is enabled and its line settings.
    Status,
    /// Enable the UART.
    Enable,
    /// Disable the UART.
    Disable,
    /// Discard the contents of the UART FIFOs.
    Purge {
        /// Which FIFO to purge.
        #[arg(default_value = "both")]
        which: Fifo,
    },
    /// Read or change the UART line settings.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Send data out of the UART.
    Write(WriteArgs),
    /// Print data received by the UART.
    Read(ReadArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Fifo {
    /// Transmit FIFO
    Tx,
    /// Receive FIFO
    Rx,
    /// Both FIFOs
    Both,
}

impl From<Fifo> for FifoSelector {
    fn from(value: Fifo) -> Self {
        match value {
            Fifo::Tx => FifoSelector::Tx,
            Fifo::Rx => FifoSelector::Rx,
            Fifo::Both => FifoSelector::Both,
        }
    }
}
