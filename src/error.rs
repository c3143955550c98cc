use crate::connection::{CompletionErrorCode, NetFn};

/// An error that occurred while sending a command and parsing its response.
#[derive(Clone, Debug, PartialEq)]
pub enum IpmiError<CON, P> {
    /// The netfn or command of the response did not match the request.
    UnexpectedResponse {
        netfn_sent: NetFn,
        netfn_recvd: NetFn,
        cmd_sent: u8,
        cmd_recvd: u8,
    },
    /// The BMC answered with a non-zero completion code.
    Failed {
        netfn: NetFn,
        cmd: u8,
        completion_code: CompletionErrorCode,
        data: Vec<u8>,
    },
    /// The response was successful, but could not be parsed.
    Command {
        error: P,
        netfn: NetFn,
        cmd: u8,
        data: Vec<u8>,
    },
    /// The connection failed to deliver the request or a response.
    Connection(CON),
}

impl<CON, P> From<CON> for IpmiError<CON, P> {
    fn from(value: CON) -> Self {
        Self::Connection(value)
    }
}

impl<CON, P> core::fmt::Display for IpmiError<CON, P>
where
    CON: core::fmt::Debug,
    P: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IpmiError::UnexpectedResponse {
                netfn_sent,
                netfn_recvd,
                cmd_sent,
                cmd_recvd,
            } => write!(
                f,
                "unexpected response: sent {netfn_sent}/0x{cmd_sent:02X}, received {netfn_recvd}/0x{cmd_recvd:02X}"
            ),
            IpmiError::Failed {
                completion_code, ..
            } => write!(f, "completion code {completion_code}"),
            IpmiError::Command { error, data, .. } => {
                write!(f, "invalid response data {data:02X?}: {error:?}")
            }
            IpmiError::Connection(e) => write!(f, "connection error: {e:?}"),
        }
    }
}
