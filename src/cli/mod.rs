//! The `tploem` command line: argument parsing and dispatch.
//!
//! Every invocation is independent. Commands are executed one request at
//! a time and stop at the first failure.

mod command;
pub use command::CliCommand;

mod error;
pub use error::CliError;

mod usage;
pub use usage::{usage, UsageTopic};

use crate::{
    connection::IpmiConnection,
    fwupdate::{
        FirmwareType, FwUpdateInfo, FwUpdateParameter, FwUpdateParameterResponse,
        GetFwUpdateParameter, GetFwUpdateStatus, SetFwUpdateParameter, StartFwUpdate,
        StatusError,
    },
    lom::{GetLomMac, LomPort},
    Capabilities, Ipmi, IpmiError, LogOutput, Logger,
};

/// Executes command lines against a BMC.
pub struct Cli {
    capabilities: Capabilities,
    output: LogOutput,
}

impl Cli {
    /// Create a new `Cli` that prints command output to `output` and only
    /// executes commands in `capabilities`.
    pub fn new(capabilities: Capabilities, output: LogOutput) -> Self {
        Self {
            capabilities,
            output,
        }
    }

    /// Parse and execute `args` (without the program name).
    pub fn run<CON, S>(&self, ipmi: &mut Ipmi<CON>, args: &[S]) -> Result<(), CliError>
    where
        CON: IpmiConnection,
        S: AsRef<str>,
    {
        let command = CliCommand::parse(args).map_err(|e| {
            log::error!("{e}");
            e
        })?;

        self.execute(ipmi, command)
    }

    /// Print the usage text if `command` is a usage request, or is not
    /// supported by the configured capabilities.
    ///
    /// Returns `true` if nothing is left to execute, in which case no
    /// connection to the BMC is needed.
    pub fn handle_offline(&self, command: &CliCommand) -> bool {
        if let CliCommand::Usage { topic, notice } = command {
            if let Some(notice) = notice {
                self.output.print(notice);
            }
            self.print_usage(*topic);
            return true;
        }

        let required = command.required_capabilities();
        if !self.capabilities.contains(required) {
            log::debug!("{command:?} requires {required:?}, have {:?}", self.capabilities);

            let topic = match command {
                CliCommand::LomMac(_) => UsageTopic::Main,
                _ => UsageTopic::FwUpdate,
            };

            self.output
                .print("This command is not supported by the selected command set");
            self.print_usage(topic);
            return true;
        }

        false
    }

    pub fn execute<CON>(&self, ipmi: &mut Ipmi<CON>, command: CliCommand) -> Result<(), CliError>
    where
        CON: IpmiConnection,
    {
        if self.handle_offline(&command) {
            return Ok(());
        }

        match command {
            CliCommand::Usage { .. } => Ok(()),
            CliCommand::LomMac(Some(port)) => self.lom_mac(ipmi, port),
            CliCommand::LomMac(None) => LomPort::ALL
                .into_iter()
                .try_for_each(|port| self.lom_mac(ipmi, port)),
            CliCommand::FwUpdateSet(value) => {
                let command = match value.parameter() {
                    Some(parameter) => format!("set firmware update {parameter}"),
                    None => "set firmware update transport protocol".to_string(),
                };

                ipmi.send_recv(SetFwUpdateParameter::new(value))
                    .map_err(|e| CliError::communication(&command, e))
            }
            CliCommand::FwUpdateInfo => self.fwupdate_info(ipmi),
            CliCommand::FwUpdateStatus => {
                let report = ipmi.send_recv(GetFwUpdateStatus).map_err(|e| match e {
                    IpmiError::Command {
                        error: StatusError::InvalidStatus(status),
                        ..
                    } => {
                        log::error!("BMC reported unknown firmware update status {status}");
                        CliError::InvalidStatus(status)
                    }
                    e => CliError::communication("get firmware update status", e),
                })?;

                self.output.print(&report.to_string());
                Ok(())
            }
            CliCommand::FwUpdateStart {
                preserve_config,
                unrecognized,
            } => {
                if let Some(arg) = unrecognized {
                    self.output.print(&format!(
                        "Unknown argument {arg}, the configuration will not be preserved"
                    ));
                    self.print_usage(UsageTopic::FwUpdate);
                }

                ipmi.send_recv(StartFwUpdate::new(preserve_config))
                    .map_err(|e| CliError::communication("start firmware update", e))?;

                log::info!("Firmware update started (preserve configuration: {preserve_config})");
                Ok(())
            }
        }
    }

    fn print_usage(&self, topic: UsageTopic) {
        usage::print_usage(&self.output, topic, self.capabilities)
    }

    fn lom_mac<CON>(&self, ipmi: &mut Ipmi<CON>, port: LomPort) -> Result<(), CliError>
    where
        CON: IpmiConnection,
    {
        let mac = ipmi
            .send_recv(GetLomMac::new(port))
            .map_err(|e| CliError::communication("get lom mac", e))?;

        self.output.print(&mac.to_string());
        Ok(())
    }

    fn get_parameter<CON>(
        &self,
        ipmi: &mut Ipmi<CON>,
        parameter: FwUpdateParameter,
    ) -> Result<FwUpdateParameterResponse, CliError>
    where
        CON: IpmiConnection,
    {
        ipmi.send_recv(GetFwUpdateParameter::new(parameter))
            .map_err(|e| CliError::communication(&format!("get firmware update {parameter}"), e))
    }

    fn fwupdate_info<CON>(&self, ipmi: &mut Ipmi<CON>) -> Result<(), CliError>
    where
        CON: IpmiConnection,
    {
        let too_short = |parameter: FwUpdateParameter| {
            let command = format!("get firmware update {parameter}");
            log::error!("T-Platforms OEM {command} command failed: response too short");

            CliError::CommunicationFailure {
                command,
                reason: "response too short".to_string(),
            }
        };

        let mut info = FwUpdateInfo {
            server_address: self
                .get_parameter(ipmi, FwUpdateParameter::ServerAddress)?
                .as_string(),
            image_filename: self
                .get_parameter(ipmi, FwUpdateParameter::ImageFilename)?
                .as_string(),
            ..Default::default()
        };

        if self.capabilities.contains(Capabilities::FW_EXTENDED) {
            let retry = FwUpdateParameter::RetryCount;
            let retry_count = self
                .get_parameter(ipmi, retry)?
                .as_u8()
                .map_err(|_| too_short(retry))?;

            let ty = FwUpdateParameter::FirmwareType;
            let firmware_type = self
                .get_parameter(ipmi, ty)?
                .as_u8()
                .map_err(|_| too_short(ty))?;

            info.retry_count = Some(retry_count);
            info.firmware_type = Some(FirmwareType::from(firmware_type));
        }

        Logger::log(&self.output, &info);
        Ok(())
    }
}
