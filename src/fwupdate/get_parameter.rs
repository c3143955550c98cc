use crate::{
    commands::OemCommand,
    connection::{IpmiCommand, Message, NotEnoughData},
};

use super::{parameter::decode_string, FwUpdateParameter, FwUpdateParameterValue};

/// The Get Firmware Update Parameter command.
#[derive(Clone, Copy, Debug)]
pub struct GetFwUpdateParameter {
    parameter: FwUpdateParameter,
}

impl GetFwUpdateParameter {
    pub fn new(parameter: FwUpdateParameter) -> Self {
        Self { parameter }
    }
}

impl From<GetFwUpdateParameter> for Message {
    fn from(value: GetFwUpdateParameter) -> Self {
        OemCommand::GetFwUpdateParameter.message(vec![value.parameter.value()])
    }
}

impl IpmiCommand for GetFwUpdateParameter {
    type Output = FwUpdateParameterResponse;
    type Error = NotEnoughData;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, Self::Error> {
        Ok(FwUpdateParameterResponse {
            data: data.to_vec(),
        })
    }
}

/// Raw firmware update parameter response data.
///
/// The response does not echo the selector, so it is parsed with
/// the parameter that was requested.
#[derive(Clone, Debug, PartialEq)]
pub struct FwUpdateParameterResponse {
    pub data: Vec<u8>,
}

impl FwUpdateParameterResponse {
    /// The data as a NUL-terminated string.
    pub fn as_string(&self) -> String {
        decode_string(&self.data)
    }

    /// The first data byte.
    pub fn as_u8(&self) -> Result<u8, NotEnoughData> {
        self.data.first().copied().ok_or(NotEnoughData)
    }

    pub fn parse(
        &self,
        parameter: FwUpdateParameter,
    ) -> Result<FwUpdateParameterValue, NotEnoughData> {
        parameter.parse(&self.data)
    }
}

#[test]
fn request_is_single_selector_byte() {
    let message: Message = GetFwUpdateParameter::new(FwUpdateParameter::ImageFilename).into();

    assert_eq!(message.netfn().request_value(), 0x32);
    assert_eq!(message.cmd(), 0x8A);
    assert_eq!(message.data(), &[0x02]);
}
