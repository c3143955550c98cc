use crate::IpmiError;

/// The ways a command line invocation can fail.
#[derive(Clone, Debug, PartialEq)]
pub enum CliError {
    /// An argument could not be parsed, or is out of range. Nothing was sent.
    InvalidArgument(String),
    /// The connection failed, the BMC returned a non-zero completion code,
    /// or the response could not be parsed.
    CommunicationFailure { command: String, reason: String },
    /// The BMC reported a firmware update status that does not exist.
    InvalidStatus(u8),
}

impl CliError {
    /// Log `error` as the failure of `command` and wrap it.
    pub(crate) fn communication<CON, P>(command: &str, error: IpmiError<CON, P>) -> Self
    where
        CON: core::fmt::Debug,
        P: core::fmt::Debug,
    {
        log::error!("T-Platforms OEM {command} command failed: {error}");

        Self::CommunicationFailure {
            command: command.to_string(),
            reason: error.to_string(),
        }
    }
}

impl core::fmt::Display for CliError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CliError::InvalidArgument(msg) => write!(f, "{msg}"),
            CliError::CommunicationFailure { command, reason } => {
                write!(f, "T-Platforms OEM {command} command failed: {reason}")
            }
            CliError::InvalidStatus(status) => {
                write!(f, "Invalid firmware update status: {status}")
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<CliError> for std::io::Error {
    fn from(value: CliError) -> Self {
        let kind = match value {
            CliError::InvalidArgument(_) => std::io::ErrorKind::InvalidInput,
            CliError::CommunicationFailure { .. } | CliError::InvalidStatus(_) => {
                std::io::ErrorKind::Other
            }
        };

        std::io::Error::new(kind, value)
    }
}
