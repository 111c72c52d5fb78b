use clap::{Parser, ValueEnum};
use cp2110_hal::CP2110;
use cp2110_hal::protocol::{DataBits, FlowControl, Parity, StopBits, UartConfig};

#[derive(Debug, Parser)]
#[command(flatten_help = true)]
pub(crate) enum ConfigCommand {
    /// Read the current UART line settings.
    Read,
    /// Change the UART line settings.
    ///
    /// Settings not given are left as they currently are on the device.
    Write(ConfigChanges),
}

#[derive(Debug, Parser)]
pub(crate) struct ConfigChanges {
    /// Baud rate (300 to 921600).
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(300..=921_600))]
    baud: Option<u32>,
    /// Parity bit setting.
    #[arg(long)]
    parity: Option<ParityArg>,
    /// RTS/CTS hardware flow control.
    #[arg(long)]
    flow_control: Option<FlowControlArg>,
    /// Number of data bits.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(5..=8))]
    data_bits: Option<u8>,
    /// Stop bit length.
    #[arg(long)]
    stop_bits: Option<StopBitsArg>,
}

impl ConfigChanges {
    fn merge_into_existing(&self, mut config: UartConfig) -> UartConfig {
        if let Some(baud) = self.baud {
            config = config.with_baud(baud);
        }
        if let Some(parity) = self.parity {
            config = config.with_parity(parity.into());
        }
        if let Some(flow_control) = self.flow_control {
            config = config.with_flow_control(flow_control.into());
        }
        if let Some(data_bits) = self.data_bits {
            config = config.with_data_bits(match data_bits {
                5 => DataBits::Five,
                6 => DataBits::Six,
                7 => DataBits::Seven,
                _ => DataBits::Eight,
            });
        }
        if let Some(stop_bits) = self.stop_bits {
            config = config.with_stop_bits(stop_bits.into());
        }
        config
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ParityArg {
    None,
    Odd,
    Even,
    Mark,
    Space,
}

impl From<ParityArg> for Parity {
    fn from(value: ParityArg) -> Self {
        match value {
            ParityArg::None => Parity::None,
            ParityArg::Odd => Parity::Odd,
            ParityArg::Even => Parity::Even,
            ParityArg::Mark => Parity::Mark,
            ParityArg::Space => Parity::Space,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum FlowControlArg {
    Off,
    On,
}

impl From<FlowControlArg> for FlowControl {
    fn from(value: FlowControlArg) -> Self {
        match value {
            FlowControlArg::Off => FlowControl::Disabled,
            FlowControlArg::On => FlowControl::Enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum StopBitsArg {
    /// One stop bit
    Short,
    /// 1.5 stop bits with 5 data bits, otherwise 2
    Long,
}

impl From<StopBitsArg> for StopBits {
    fn from(value: StopBitsArg) -> Self {
        match value {
            StopBitsArg::Short => StopBits::Short,
            StopBitsArg::Long => StopBits::Long,
        }
    }
}

pub(crate) fn action(device: &CP2110, command: ConfigCommand) -> Result<(), cp2110_hal::Error> {
    match command {
        ConfigCommand::Read => {
            let config = device.uart_read_config()?;
            println!("{config}");
            println!("{config:#?}");
        }
        ConfigCommand::Write(changes) => {
            let config = changes.merge_into_existing(device.uart_read_config()?);
            device.uart_write_config(&config)?;
            println!("{config}");
        }
    }
    Ok(())
}
