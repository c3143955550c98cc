use crate::{
    commands::OemCommand,
    connection::{IpmiCommand, Message, NotEnoughData},
};

use super::{parameter::encode_string, FwUpdateParameter, FwUpdateParameterValue};

/// The Set Firmware Update Parameter command.
///
/// The transport protocol is written with the dedicated Set Firmware
/// Update Transport command; all other values use the parameter selector.
#[derive(Clone, Debug)]
pub struct SetFwUpdateParameter {
    value: FwUpdateParameterValue,
}

impl SetFwUpdateParameter {
    pub fn new(value: FwUpdateParameterValue) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &FwUpdateParameterValue {
        &self.value
    }
}

impl From<SetFwUpdateParameter> for Message {
    fn from(value: SetFwUpdateParameter) -> Self {
        use FwUpdateParameterValue::*;

        let string = |parameter: FwUpdateParameter, string: &str| {
            let field = encode_string(string);
            let mut data = Vec::with_capacity(1 + field.len());
            data.push(parameter.value());
            data.extend_from_slice(&field);
            OemCommand::SetFwUpdateString.message(data)
        };

        let scalar = |parameter: FwUpdateParameter, value: u8| {
            OemCommand::SetFwUpdateScalar.message(vec![parameter.value(), value])
        };

        match value.value {
            TransportProtocol(transport) => {
                OemCommand::SetFwUpdateTransport.message(vec![transport.value()])
            }
            ServerAddress(address) => string(FwUpdateParameter::ServerAddress, &address),
            ImageFilename(filename) => string(FwUpdateParameter::ImageFilename, &filename),
            RetryCount(count) => scalar(FwUpdateParameter::RetryCount, count),
            FirmwareType(ty) => scalar(FwUpdateParameter::FirmwareType, ty.into()),
        }
    }
}

impl IpmiCommand for SetFwUpdateParameter {
    type Output = ();
    type Error = NotEnoughData;

    fn parse_success_response(_: &[u8]) -> Result<Self::Output, Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        commands::FW_STRING_LEN,
        fwupdate::{FirmwareType, TransportProtocol},
    };

    fn message(value: FwUpdateParameterValue) -> Message {
        SetFwUpdateParameter::new(value).into()
    }

    #[test]
    fn transport_uses_its_own_command() {
        let http = message(FwUpdateParameterValue::TransportProtocol(
            TransportProtocol::Http,
        ));
        let tftp = message(FwUpdateParameterValue::TransportProtocol(
            TransportProtocol::Tftp,
        ));

        assert_eq!(http.cmd(), 0x8B);
        assert_eq!(http.data(), &[0x00]);
        assert_eq!(tftp.data(), &[0x01]);
    }

    #[test]
    fn server_address_fills_fixed_field() {
        let message = message(FwUpdateParameterValue::ServerAddress(
            "192.168.1.10".to_string(),
        ));

        assert_eq!(message.netfn().request_value(), 0x32);
        assert_eq!(message.cmd(), 0x89);
        assert_eq!(message.data().len(), 1 + FW_STRING_LEN);
        assert_eq!(message.data()[0], 0x01);
        assert_eq!(&message.data()[1..13], b"192.168.1.10");
        assert!(message.data()[13..].iter().all(|b| *b == 0));
    }

    #[test]
    fn overlong_filename_is_truncated() {
        let name = "x".repeat(FW_STRING_LEN + 1);
        let message = message(FwUpdateParameterValue::ImageFilename(name));

        assert_eq!(message.data().len(), 1 + FW_STRING_LEN);
        assert_eq!(message.data()[0], 0x02);
        assert!(message.data()[1..].iter().all(|b| *b == b'x'));
    }

    #[test]
    fn scalars_are_selector_and_value() {
        let retry = message(FwUpdateParameterValue::RetryCount(3));
        let ty = message(FwUpdateParameterValue::FirmwareType(FirmwareType::Bios));

        assert_eq!(retry.cmd(), 0x89);
        assert_eq!(retry.data(), &[0x03, 0x03]);
        assert_eq!(ty.data(), &[0x04, 0x01]);
    }
}
