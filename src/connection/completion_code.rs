macro_rules! completion_codes {
    ($($name:ident = $value:literal: $description:literal,)*) => {
        /// A non-zero IPMI completion code.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum CompletionErrorCode {
            $(
                #[doc = $description]
                $name,
            )*
            /// A device-specific (OEM) code in `0x01..=0x7E`.
            Oem(u8),
            /// A command-specific code in `0x80..=0xBE`.
            CommandSpecific(u8),
            Reserved(u8),
        }

        impl CompletionErrorCode {
            fn generic(value: u8) -> Option<Self> {
                match value {
                    $($value => Some(Self::$name),)*
                    _ => None,
                }
            }

            /// The raw value of this completion code.
            pub fn value(&self) -> u8 {
                match self {
                    $(Self::$name => $value,)*
                    Self::Oem(v) | Self::CommandSpecific(v) | Self::Reserved(v) => *v,
                }
            }

            /// A short description of this completion code.
            pub fn description(&self) -> &'static str {
                match self {
                    $(Self::$name => $description,)*
                    Self::Oem(_) => "Device specific (OEM) completion code",
                    Self::CommandSpecific(_) => "Command specific completion code",
                    Self::Reserved(_) => "Unknown (reserved) completion code",
                }
            }
        }
    };
}

completion_codes! {
    NodeBusy = 0xC0: "Node busy",
    InvalidCommand = 0xC1: "Invalid command",
    InvalidCommandForLun = 0xC2: "Invalid command on LUN",
    ProcessingTimeout = 0xC3: "Timeout",
    OutOfSpace = 0xC4: "Out of space",
    ReservationCancelledOrInvalidId = 0xC5: "Reservation cancelled or invalid",
    RequestDataTruncated = 0xC6: "Request data truncated",
    RequestDataLenInvalid = 0xC7: "Request data length invalid",
    RequestDataLengthLimitExceeded = 0xC8: "Request data field length limit exceeded",
    ParameterOutOfRange = 0xC9: "Parameter out of range",
    CannotReturnNumOfRequestedBytes = 0xCA: "Cannot return number of requested data bytes",
    RequestedDatapointNotPresent = 0xCB: "Requested sensor, data, or record not found",
    InvalidDataFieldInRequest = 0xCC: "Invalid data field in request",
    CommandIllegalForSensorOrRecord = 0xCD: "Command illegal for specified sensor or record type",
    ResponseUnavailable = 0xCE: "Command response could not be provided",
    CannotExecuteDuplicateRequest = 0xCF: "Cannot execute duplicated request",
    SdrRepositoryInUpdate = 0xD0: "SDR repository in update mode",
    DeviceInFirmwareUpdate = 0xD1: "Device firmware in update mode",
    BmcInitializing = 0xD2: "BMC initialization in progress",
    DestinationUnavailable = 0xD3: "Destination unavailable",
    InsufficientPrivilege = 0xD4: "Insufficient privilege level",
    CannotExecuteCommandInCurrentState = 0xD5: "Command not supported in present state",
    SubFunctionDisabled = 0xD6: "Cannot execute command, command disabled",
    Unspecified = 0xFF: "Unspecified error",
}

impl TryFrom<u8> for CompletionErrorCode {
    type Error = ();

    /// Fails for `0`, which indicates success.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(());
        }

        let code = Self::generic(value).unwrap_or(match value {
            0x01..=0x7E => Self::Oem(value),
            0x80..=0xBE => Self::CommandSpecific(value),
            _ => Self::Reserved(value),
        });

        Ok(code)
    }
}

impl core::fmt::Display for CompletionErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (0x{:02X})", self.description(), self.value())
    }
}

#[test]
fn generic_and_ranged_codes() {
    assert!(CompletionErrorCode::try_from(0).is_err());

    let in_update = CompletionErrorCode::try_from(0xD1).unwrap();
    assert_eq!(in_update, CompletionErrorCode::DeviceInFirmwareUpdate);
    assert_eq!(in_update.value(), 0xD1);

    assert_eq!(
        CompletionErrorCode::try_from(0x80),
        Ok(CompletionErrorCode::CommandSpecific(0x80))
    );
    assert_eq!(
        CompletionErrorCode::try_from(0xE0),
        Ok(CompletionErrorCode::Reserved(0xE0))
    );
}

#[test]
fn display_includes_description() {
    assert_eq!(
        CompletionErrorCode::InvalidCommand.to_string(),
        "Invalid command (0xC1)"
    );
    assert_eq!(
        CompletionErrorCode::Oem(0x42).to_string(),
        "Device specific (OEM) completion code (0x42)"
    );
}
