use crate::{
    fwupdate::{FirmwareType, FwUpdateParameterValue, TransportProtocol},
    lom::LomPort,
    Capabilities,
};

use super::{CliError, UsageTopic};

/// A parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub enum CliCommand {
    /// Print a usage text, optionally preceded by a notice.
    Usage {
        topic: UsageTopic,
        notice: Option<String>,
    },
    /// Query the MAC address of one port, or of all ports.
    LomMac(Option<LomPort>),
    FwUpdateSet(FwUpdateParameterValue),
    FwUpdateInfo,
    FwUpdateStatus,
    FwUpdateStart {
        preserve_config: bool,
        /// An argument that was not understood and ignored.
        unrecognized: Option<String>,
    },
}

impl CliCommand {
    fn usage(topic: UsageTopic) -> Self {
        Self::Usage {
            topic,
            notice: None,
        }
    }

    /// Parse an argument vector (without the program name).
    ///
    /// Malformed values fail with [`CliError::InvalidArgument`], unknown
    /// commands and options produce [`CliCommand::Usage`].
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        let command = match args.as_slice() {
            [] | ["help", ..] => Self::usage(UsageTopic::Main),
            ["lom", "mac"] => Self::LomMac(None),
            ["lom", "mac", port] => Self::LomMac(Some(parse_port(port)?)),
            ["lom", ..] => Self::usage(UsageTopic::Main),
            ["fwupdate", "set", option, value] => parse_set(option, value)?,
            ["fwupdate", "info"] => Self::FwUpdateInfo,
            ["fwupdate", "status"] => Self::FwUpdateStatus,
            ["fwupdate", "start"] => Self::FwUpdateStart {
                preserve_config: false,
                unrecognized: None,
            },
            ["fwupdate", "start", arg] => parse_start(arg),
            ["fwupdate", ..] => Self::usage(UsageTopic::FwUpdate),
            [other, ..] => Self::Usage {
                topic: UsageTopic::Main,
                notice: Some(format!("Invalid command: {other}")),
            },
        };

        Ok(command)
    }

    /// The capabilities the BMC needs to execute this command.
    pub fn required_capabilities(&self) -> Capabilities {
        match self {
            CliCommand::Usage { .. } => Capabilities::empty(),
            CliCommand::LomMac(_) => Capabilities::LOM_MAC,
            CliCommand::FwUpdateSet(
                FwUpdateParameterValue::RetryCount(_) | FwUpdateParameterValue::FirmwareType(_),
            )
            | CliCommand::FwUpdateStatus
            | CliCommand::FwUpdateStart { .. } => Capabilities::FW_EXTENDED,
            CliCommand::FwUpdateSet(_) | CliCommand::FwUpdateInfo => Capabilities::FW_CONFIG,
        }
    }
}

fn parse_port(port: &str) -> Result<LomPort, CliError> {
    let value: u8 = port.parse().map_err(|_| {
        CliError::InvalidArgument("Port number must be specified: 1 or 2".to_string())
    })?;

    LomPort::new(value).ok_or_else(|| {
        CliError::InvalidArgument(format!("Invalid port number: {value}. Should be 1 or 2"))
    })
}

fn parse_set(option: &str, value: &str) -> Result<CliCommand, CliError> {
    let value = match option {
        "transport" => {
            let transport: TransportProtocol = value.parse().map_err(|_| {
                CliError::InvalidArgument(format!("Transport protocol {value} is not supported"))
            })?;
            FwUpdateParameterValue::TransportProtocol(transport)
        }
        "server-ip" => FwUpdateParameterValue::ServerAddress(value.to_string()),
        "filename" => FwUpdateParameterValue::ImageFilename(value.to_string()),
        "retry" => {
            let count: u8 = value.parse().map_err(|_| {
                CliError::InvalidArgument(format!(
                    "Invalid retry count {value}. Should be a number from 0 to 255"
                ))
            })?;
            FwUpdateParameterValue::RetryCount(count)
        }
        "type" => {
            let ty: FirmwareType = value.parse().map_err(|_| {
                CliError::InvalidArgument(format!(
                    "Invalid firmware type {value}. Should be bios or bmc"
                ))
            })?;
            FwUpdateParameterValue::FirmwareType(ty)
        }
        other => {
            return Ok(CliCommand::Usage {
                topic: UsageTopic::FwUpdate,
                notice: Some(format!("Unknown fwupdate parameter {other}")),
            })
        }
    };

    Ok(CliCommand::FwUpdateSet(value))
}

fn parse_start(arg: &str) -> CliCommand {
    let preserve = arg
        .strip_prefix("preserve-config=")
        .map(str::to_ascii_lowercase);

    let (preserve_config, unrecognized) = match preserve.as_deref() {
        Some("yes") => (true, None),
        Some("no") => (false, None),
        _ => (false, Some(arg.to_string())),
    };

    CliCommand::FwUpdateStart {
        preserve_config,
        unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, CliError> {
        CliCommand::parse(args)
    }

    #[test]
    fn help_and_empty_print_usage() {
        let usage = Ok(CliCommand::usage(UsageTopic::Main));

        assert_eq!(parse(&[]), usage);
        assert_eq!(parse(&["help"]), usage);
        assert_eq!(parse(&["lom"]), usage);
        assert_eq!(
            parse(&["fwupdate", "help"]),
            Ok(CliCommand::usage(UsageTopic::FwUpdate))
        );
    }

    #[test]
    fn lom_ports() {
        assert_eq!(parse(&["lom", "mac"]), Ok(CliCommand::LomMac(None)));
        assert_eq!(
            parse(&["lom", "mac", "2"]),
            Ok(CliCommand::LomMac(Some(LomPort::TWO)))
        );
        assert!(matches!(
            parse(&["lom", "mac", "3"]),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse(&["lom", "mac", "eth0"]),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn malformed_values_are_errors() {
        for args in [
            ["fwupdate", "set", "transport", "ftp"],
            ["fwupdate", "set", "retry", "256"],
            ["fwupdate", "set", "retry", "-1"],
            ["fwupdate", "set", "type", "cpld"],
        ] {
            assert!(
                matches!(parse(&args), Err(CliError::InvalidArgument(_))),
                "{args:?}"
            );
        }
    }

    #[test]
    fn unknown_option_prints_usage() {
        assert!(matches!(
            parse(&["fwupdate", "set", "gateway", "10.0.0.1"]),
            Ok(CliCommand::Usage {
                topic: UsageTopic::FwUpdate,
                notice: Some(_)
            })
        ));
    }

    #[test]
    fn start_arguments() {
        assert_eq!(
            parse(&["fwupdate", "start", "preserve-config=YES"]),
            Ok(CliCommand::FwUpdateStart {
                preserve_config: true,
                unrecognized: None
            })
        );
        assert_eq!(
            parse(&["fwupdate", "start", "keep"]),
            Ok(CliCommand::FwUpdateStart {
                preserve_config: false,
                unrecognized: Some("keep".to_string())
            })
        );
    }

    #[test]
    fn capability_requirements() {
        let retry = parse(&["fwupdate", "set", "retry", "3"]).unwrap();
        let filename = parse(&["fwupdate", "set", "filename", "bios.rom"]).unwrap();

        assert_eq!(retry.required_capabilities(), Capabilities::FW_EXTENDED);
        assert_eq!(filename.required_capabilities(), Capabilities::FW_CONFIG);
    }
}
