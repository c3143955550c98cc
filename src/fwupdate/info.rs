use crate::{fmt::LogItem, log_vec, Loggable};

use super::{FirmwareType, TransportProtocol};

/// A summary of the firmware update configuration.
///
/// Fields the BMC cannot report are `None`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FwUpdateInfo {
    pub transport: Option<TransportProtocol>,
    pub server_address: String,
    pub image_filename: String,
    pub retry_count: Option<u8>,
    pub firmware_type: Option<FirmwareType>,
}

fn or_unknown<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

impl Loggable for FwUpdateInfo {
    fn as_log(&self) -> Vec<LogItem> {
        log_vec![
            (0, "Firmware update configuration"),
            (1, "Transport protocol", or_unknown(&self.transport)),
            (1, "Server IP address", &self.server_address),
            (1, "Image filename", &self.image_filename),
            (1, "Max. retry count", or_unknown(&self.retry_count)),
            (1, "Firmware type", or_unknown(&self.firmware_type)),
        ]
    }
}

#[test]
fn unknown_fields() {
    let info = FwUpdateInfo {
        server_address: "10.0.0.1".to_string(),
        image_filename: "bmc.img".to_string(),
        firmware_type: Some(FirmwareType::Bmc),
        ..Default::default()
    };

    assert_eq!(
        crate::Logger::render(&info.as_log()),
        vec![
            "Firmware update configuration",
            "  Transport protocol: UNKNOWN",
            "  Server IP address:  10.0.0.1",
            "  Image filename:     bmc.img",
            "  Max. retry count:   UNKNOWN",
            "  Firmware type:      BMC",
        ]
    );
}
