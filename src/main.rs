use std::{io::ErrorKind, path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use ipmi_rs_tploem::{
    cli::{Cli, CliCommand},
    connection::File,
    Capabilities, Ipmi, LogOutput,
};

/// T-Platforms OEM IPMI commands.
///
/// Run with `help` for the list of commands.
#[derive(Parser)]
pub struct Command {
    /// The connection URI to use
    #[clap(default_value = "file:///dev/ipmi0", long, short)]
    connection_uri: String,
    /// How many milliseconds to wait before timing out while waiting for a response
    #[clap(default_value = "2000", long)]
    timeout_ms: u64,
    /// The OEM command set supported by the BMC firmware
    #[clap(value_enum, default_value = "extended", long)]
    command_set: CommandSet,
    /// Append command output to this file instead of printing it
    #[clap(long)]
    output_file: Option<PathBuf>,
    /// The command, e.g. `lom mac 1` or `fwupdate status`
    args: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CommandSet {
    /// LOM MAC and firmware update addressing only
    Basic,
    /// All LOM and firmware update commands
    Extended,
}

impl From<CommandSet> for Capabilities {
    fn from(value: CommandSet) -> Self {
        match value {
            CommandSet::Basic => Capabilities::BASIC,
            CommandSet::Extended => Capabilities::EXTENDED,
        }
    }
}

fn error<T>(val: T) -> std::io::Error
where
    T: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    std::io::Error::new(ErrorKind::Other, val)
}

impl Command {
    fn get_connection(&self) -> std::io::Result<Ipmi<File>> {
        let timeout = Duration::from_millis(self.timeout_ms);

        let path = self.connection_uri.strip_prefix("file://").ok_or_else(|| {
            error(format!(
                "Invalid connection URI {}. Format: `file://[path]`",
                self.connection_uri
            ))
        })?;

        log::debug!("Opening file {path}");

        let file = File::new(path, timeout)?;
        Ok(Ipmi::new(file))
    }

    fn output(&self) -> std::io::Result<LogOutput> {
        match &self.output_file {
            Some(path) => {
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?;
                Ok(file.into())
            }
            None => Ok(LogOutput::StdOut),
        }
    }
}

fn main() -> std::io::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or("info".to_string()))
        .init();

    let command = Command::parse();

    let cli = Cli::new(command.command_set.into(), command.output()?);

    let cli_command = CliCommand::parse(command.args.as_slice()).map_err(|e| {
        log::error!("{e}");
        e
    })?;

    if cli.handle_offline(&cli_command) {
        return Ok(());
    }

    let mut ipmi = command.get_connection()?;

    cli.execute(&mut ipmi, cli_command)?;

    Ok(())
}
