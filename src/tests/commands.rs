use super::{MockBmc, MockError, Reply};
use crate::{
    commands::{OemCommand, FW_STRING_LEN},
    connection::{CompletionErrorCode, Message, NetFn},
    fwupdate::{
        FwUpdateParameter, FwUpdateParameterValue, FwUpdateStatus, GetFwUpdateParameter,
        GetFwUpdateStatus, SetFwUpdateParameter, StartFwUpdate, StatusError, TransportProtocol,
    },
    lom::{GetLomMac, LomPort},
    IpmiError,
};

#[test]
fn builders_agree_with_command_table() {
    let built: Vec<(OemCommand, Message)> = vec![
        (
            OemCommand::SetFwUpdateTransport,
            SetFwUpdateParameter::new(FwUpdateParameterValue::TransportProtocol(
                TransportProtocol::Tftp,
            ))
            .into(),
        ),
        (
            OemCommand::GetFwUpdateParameter,
            GetFwUpdateParameter::new(FwUpdateParameter::RetryCount).into(),
        ),
        (
            OemCommand::SetFwUpdateString,
            SetFwUpdateParameter::new(FwUpdateParameterValue::ImageFilename("a".into())).into(),
        ),
        (
            OemCommand::SetFwUpdateScalar,
            SetFwUpdateParameter::new(FwUpdateParameterValue::RetryCount(1)).into(),
        ),
        (OemCommand::GetFwUpdateStatus, GetFwUpdateStatus.into()),
        (OemCommand::StartFwUpdate, StartFwUpdate::new(true).into()),
        (OemCommand::GetLomMac, GetLomMac::new(LomPort::ONE).into()),
    ];

    for (command, message) in built {
        assert_eq!(message.netfn(), command.netfn(), "{command:?}");
        assert_eq!(message.cmd(), command.cmd(), "{command:?}");
        assert_eq!(
            message.data().len(),
            command.payload_shape().data_len(),
            "{command:?}"
        );
    }
}

#[test]
fn server_address_round_trip() {
    for address in [
        String::new(),
        "10.0.0.1".to_string(),
        "fw.example.com".to_string(),
        "9".repeat(FW_STRING_LEN),
    ] {
        let set = SetFwUpdateParameter::new(FwUpdateParameterValue::ServerAddress(address.clone()));
        let mut ipmi = MockBmc::new([Reply::Data(vec![])]);
        ipmi.send_recv(set).unwrap();

        // Let the BMC answer with the stored field (including the padding).
        let (_, _, stored) = ipmi.inner_mut().requests.remove(0);
        let mut ipmi = MockBmc::new([Reply::Data(stored[1..].to_vec())]);

        let parameter = FwUpdateParameter::ServerAddress;
        let response = ipmi.send_recv(GetFwUpdateParameter::new(parameter)).unwrap();

        assert_eq!(
            response.parse(parameter),
            Ok(FwUpdateParameterValue::ServerAddress(address))
        );
    }
}

#[test]
fn non_zero_completion_code_is_failure() {
    let mut ipmi = MockBmc::new([Reply::CompletionCode(0xC1)]);

    let result = ipmi.send_recv(GetFwUpdateStatus);

    assert!(matches!(
        result,
        Err(IpmiError::Failed {
            netfn: NetFn::Firmware,
            cmd: 0x88,
            completion_code: CompletionErrorCode::InvalidCommand,
            ..
        })
    ));
}

#[test]
fn missing_response_is_connection_error() {
    let mut ipmi = MockBmc::new([Reply::NoResponse]);

    let result = ipmi.send_recv(GetLomMac::new(LomPort::ONE));

    assert_eq!(result, Err(IpmiError::Connection(MockError::NoResponse)));
}

#[test]
fn mismatched_response_is_rejected() {
    let mut ipmi = MockBmc::new([Reply::WrongCommand]);

    let result = ipmi.send_recv(StartFwUpdate::default());

    assert!(matches!(
        result,
        Err(IpmiError::UnexpectedResponse {
            cmd_sent: 0x87,
            cmd_recvd: 0x88,
            ..
        })
    ));
}

#[test]
fn invalid_status_is_reported() {
    let mut ipmi = MockBmc::new([Reply::Data(vec![20])]);

    let result = ipmi.send_recv(GetFwUpdateStatus);

    assert!(matches!(
        result,
        Err(IpmiError::Command {
            error: StatusError::InvalidStatus(20),
            ..
        })
    ));
}

#[test]
fn status_is_decoded() {
    let mut ipmi = MockBmc::new([Reply::Data(vec![11, 99])]);

    let report = ipmi.send_recv(GetFwUpdateStatus).unwrap();

    assert_eq!(report.status, FwUpdateStatus::ImageVerificationInProgress);
    assert_eq!(report.progress, Some(99));
}

#[test]
fn every_request_is_answered() {
    let mut ipmi = MockBmc::new([Reply::Data(vec![0]), Reply::Data(vec![0])]);

    ipmi.send_recv(GetFwUpdateStatus).unwrap();
    assert_eq!(ipmi.inner_mut().pending, None);
    ipmi.send_recv(GetFwUpdateStatus).unwrap();

    assert_eq!(ipmi.release().requests.len(), 2);
}
