use crate::{commands::FW_STRING_LEN, connection::NotEnoughData};

/// The protocol the BMC uses to download the firmware image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportProtocol {
    Http,
    Tftp,
}

impl TransportProtocol {
    pub fn value(&self) -> u8 {
        match self {
            TransportProtocol::Http => 0,
            TransportProtocol::Tftp => 1,
        }
    }
}

impl core::str::FromStr for TransportProtocol {
    type Err = ();

    /// Case-insensitive. `https` is downloaded through the HTTP transport.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" | "https" => Ok(Self::Http),
            "tftp" => Ok(Self::Tftp),
            _ => Err(()),
        }
    }
}

impl core::fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransportProtocol::Http => write!(f, "HTTP"),
            TransportProtocol::Tftp => write!(f, "TFTP"),
        }
    }
}

/// The firmware that is updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirmwareType {
    Bmc,
    Bios,
    Other(u8),
}

impl From<u8> for FirmwareType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Bmc,
            1 => Self::Bios,
            v => Self::Other(v),
        }
    }
}

impl From<FirmwareType> for u8 {
    fn from(value: FirmwareType) -> Self {
        match value {
            FirmwareType::Bmc => 0,
            FirmwareType::Bios => 1,
            FirmwareType::Other(v) => v,
        }
    }
}

impl core::str::FromStr for FirmwareType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bmc" => Ok(Self::Bmc),
            "bios" => Ok(Self::Bios),
            _ => Err(()),
        }
    }
}

impl core::fmt::Display for FirmwareType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FirmwareType::Bmc => write!(f, "BMC"),
            FirmwareType::Bios => write!(f, "BIOS"),
            FirmwareType::Other(v) => write!(f, "Unknown (0x{v:02X})"),
        }
    }
}

/// The firmware update parameters that can be read and written
/// with the Get/Set Firmware Update Parameter commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FwUpdateParameter {
    /// Address of the server the image is downloaded from.
    ServerAddress,
    /// Path of the image on the server.
    ImageFilename,
    /// How often the download is retried.
    RetryCount,
    /// Which firmware the image contains.
    FirmwareType,
}

impl FwUpdateParameter {
    /// Get the raw parameter selector value.
    pub fn value(&self) -> u8 {
        match self {
            FwUpdateParameter::ServerAddress => 1,
            FwUpdateParameter::ImageFilename => 2,
            FwUpdateParameter::RetryCount => 3,
            FwUpdateParameter::FirmwareType => 4,
        }
    }

    /// Parse the response data of a Get Firmware Update Parameter command.
    pub fn parse(&self, data: &[u8]) -> Result<FwUpdateParameterValue, NotEnoughData> {
        let value = match self {
            FwUpdateParameter::ServerAddress => {
                FwUpdateParameterValue::ServerAddress(decode_string(data))
            }
            FwUpdateParameter::ImageFilename => {
                FwUpdateParameterValue::ImageFilename(decode_string(data))
            }
            FwUpdateParameter::RetryCount => {
                FwUpdateParameterValue::RetryCount(*data.first().ok_or(NotEnoughData)?)
            }
            FwUpdateParameter::FirmwareType => {
                FwUpdateParameterValue::FirmwareType(FirmwareType::from(
                    *data.first().ok_or(NotEnoughData)?,
                ))
            }
        };

        Ok(value)
    }
}

/// A firmware update configuration value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FwUpdateParameterValue {
    TransportProtocol(TransportProtocol),
    ServerAddress(String),
    ImageFilename(String),
    RetryCount(u8),
    FirmwareType(FirmwareType),
}

impl core::fmt::Display for FwUpdateParameter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FwUpdateParameter::ServerAddress => write!(f, "server IP address"),
            FwUpdateParameter::ImageFilename => write!(f, "image filename"),
            FwUpdateParameter::RetryCount => write!(f, "retry count"),
            FwUpdateParameter::FirmwareType => write!(f, "firmware type"),
        }
    }
}

impl FwUpdateParameterValue {
    /// The parameter selector of this value, or `None` for the transport
    /// protocol, which has a command of its own.
    pub fn parameter(&self) -> Option<FwUpdateParameter> {
        match self {
            FwUpdateParameterValue::TransportProtocol(_) => None,
            FwUpdateParameterValue::ServerAddress(_) => Some(FwUpdateParameter::ServerAddress),
            FwUpdateParameterValue::ImageFilename(_) => Some(FwUpdateParameter::ImageFilename),
            FwUpdateParameterValue::RetryCount(_) => Some(FwUpdateParameter::RetryCount),
            FwUpdateParameterValue::FirmwareType(_) => Some(FwUpdateParameter::FirmwareType),
        }
    }
}

/// Encode `value` into the fixed-size, zero padded string field.
///
/// Strings longer than [`FW_STRING_LEN`] bytes are truncated.
pub(crate) fn encode_string(value: &str) -> [u8; FW_STRING_LEN] {
    let bytes = value.as_bytes();

    if bytes.len() > FW_STRING_LEN {
        log::warn!(
            "Truncating '{value}' ({} bytes) to {FW_STRING_LEN} bytes",
            bytes.len()
        );
    }

    let len = bytes.len().min(FW_STRING_LEN);
    let mut field = [0u8; FW_STRING_LEN];
    field[..len].copy_from_slice(&bytes[..len]);
    field
}

/// Decode a NUL-terminated string. Data without a terminator is used as a whole.
pub(crate) fn decode_string(data: &[u8]) -> String {
    let end = data.iter().position(|b| *b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).into_owned()
}
