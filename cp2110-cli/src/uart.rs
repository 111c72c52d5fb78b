use std::io::Write as _;
use std::time::{Duration, Instant};

use clap::Args;
use cp2110_hal::CP2110;
use cp2110_hal::protocol::MAX_REPORT_LEN;

use crate::util;

#[derive(Debug, Args)]
pub(crate) struct WriteArgs {
    /// Data to send.
    data: String,
    /// Treat the data as hex bytes, eg "48 69 0d 0a".
    #[arg(long)]
    hex: bool,
    /// Append CR LF to the data (ignored with --hex).
    #[arg(long)]
    crlf: bool,
}

#[derive(Debug, Args)]
pub(crate) struct ReadArgs {
    /// How long to wait for data, in milliseconds.
    #[arg(short, long, default_value_t = 1000)]
    timeout_ms: u64,
    /// Print received bytes as hex rather than raw.
    #[arg(long)]
    hex: bool,
}

/// Delay between polls of the non-blocking read.
const POLL_INTERVAL: Duration = Duration::from_millis(5);

pub(crate) fn print_status(device: &CP2110) -> Result<(), cp2110_hal::Error> {
    let enabled = match device.uart_is_enabled()? {
        true => "enabled",
        false => "disabled",
    };
    println!("UART {enabled}, {}", device.uart_read_config()?);
    Ok(())
}

pub(crate) fn write(device: &CP2110, args: WriteArgs) -> anyhow::Result<()> {
    let data = if args.hex {
        util::bytes_from_hex(&args.data).map_err(anyhow::Error::msg)?
    } else {
        let mut data = args.data.into_bytes();
        if args.crlf {
            data.extend_from_slice(b"\r\n");
        }
        data
    };
    let written = device.uart_write(&data)?;
    tracing::info!(written, "sent UART data");
    Ok(())
}

/// Poll the UART until the timeout passes, printing data as it arrives.
pub(crate) fn read(device: &CP2110, args: ReadArgs) -> anyhow::Result<()> {
    let deadline = Instant::now() + Duration::from_millis(args.timeout_ms);
    let mut stdout = std::io::stdout().lock();
    let mut total = 0;
    while Instant::now() < deadline {
        let received = device.uart_read(MAX_REPORT_LEN)?;
        if received.is_empty() {
            std::thread::sleep(POLL_INTERVAL);
            continue;
        }
        total += received.len();
        if args.hex {
            for byte in &received {
                write!(stdout, "{byte:02x} ")?;
            }
        } else {
            stdout.write_all(&received)?;
        }
        stdout.flush()?;
    }
    if args.hex && total > 0 {
        writeln!(stdout)?;
    }
    tracing::info!(total, "finished reading");
    Ok(())
}
