use clap::Parser;
use cp2110_hal::CP2110;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::Commands;

mod cli;
mod config;
mod uart;
mod usb;
mod util;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("cp2110_hal={log_level},cp2110={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Listing doesn't need a device to be opened.
    if let Commands::List = cli.command {
        return usb::list(cli.vid, cli.pid);
    }

    let device = CP2110::connect_with(cli.selector()?)?;
    match cli.command {
        Commands::List => unreachable!("Handled before opening the device."),
        Commands::Info => usb::print_info(&device)?,
        Commands::Version => println!("{}", device.version_info()?),
        Commands::Status => uart::print_status(&device)?,
        Commands::Enable => device.uart_enable()?,
        Commands::Disable => device.uart_disable()?,
        Commands::Purge { which } => device.uart_purge_fifos(which.into())?,
        Commands::Config(command) => config::action(&device, command)?,
        Commands::Write(args) => uart::write(&device, args)?,
        Commands::Read(args) => uart::read(&device, args)?,
    }
    device.close();
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::cli::Cli;

    use clap::CommandFactory;

    #[test]
    fn check_cli_debug_asserts() {
        Cli::command().debug_assert();
    }
}
