//! # Send a line and print the reply
//!
//! Configures the first CP2110 found for 115200 8-N-1, writes the text given on
//! the command line followed by CR LF, then prints whatever comes back on the
//! UART in the next half second.
//!
//! With TX wired to RX the reply is the line itself, which makes this a quick
//! check that a board is working:
//!
//! ```text
//! cargo run --example send_line -- "hello there"
//! ```
use std::time::{Duration, Instant};

use cp2110_hal::CP2110;
use cp2110_hal::protocol::{FifoSelector, MAX_REPORT_LEN, UartConfig};

const LISTEN_FOR: Duration = Duration::from_millis(500);

fn main() -> Result<(), cp2110_hal::Error> {
    let line = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let device = CP2110::connect()?;
    println!("Connected to CP2110 ({})", device.version_info()?);

    device.uart_write_config(&UartConfig::new(115_200))?;
    device.uart_enable()?;
    device.uart_purge_fifos(FifoSelector::Both)?;

    device.uart_write(format!("{line}\r\n").as_bytes())?;

    let mut reply = Vec::new();
    let started = Instant::now();
    while started.elapsed() < LISTEN_FOR {
        reply.extend(device.uart_read(MAX_REPORT_LEN)?);
        std::thread::sleep(Duration::from_millis(5));
    }
    println!("Received {} bytes: {}", reply.len(), String::from_utf8_lossy(&reply));

    device.uart_disable()?;
    device.close();
    Ok(())
}
