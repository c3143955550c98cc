//! Wire-level types and the connection abstraction the OEM commands are sent over.

mod completion_code;
pub use completion_code::CompletionErrorCode;

#[cfg(feature = "unix-file")]
mod file;
#[cfg(feature = "unix-file")]
pub use file::File;

mod netfn;
pub use netfn::NetFn;

mod request;
pub use request::Request;

mod response;
pub use response::Response;

/// A transport that delivers [`Request`]s to a BMC and returns its
/// [`Response`]s.
///
/// Implementations own everything below the message level: sessions,
/// sequencing, retransmission and timeouts.
pub trait IpmiConnection {
    type SendError: core::fmt::Debug;
    type RecvError: core::fmt::Debug;
    type Error: core::fmt::Debug + From<Self::SendError> + From<Self::RecvError>;

    fn send(&mut self, request: &mut Request) -> Result<(), Self::SendError>;

    fn recv(&mut self) -> Result<Response, Self::RecvError>;

    /// Send `request` and wait for the response to it.
    fn send_recv(&mut self, request: &mut Request) -> Result<Response, Self::Error>;
}

/// An outgoing command: netfn, command number and request data.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    netfn: NetFn,
    cmd: u8,
    data: Vec<u8>,
}

impl Message {
    pub fn new(netfn: NetFn, cmd: u8, data: Vec<u8>) -> Self {
        Self { netfn, cmd, data }
    }

    pub fn netfn(&self) -> NetFn {
        self.netfn
    }

    pub fn cmd(&self) -> u8 {
        self.cmd
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// The response did not contain enough data to be parsed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotEnoughData;

/// A command that can be sent with [`Ipmi::send_recv`](crate::Ipmi::send_recv).
pub trait IpmiCommand: Into<Message> {
    type Output;
    type Error;

    /// Parse the data of a response whose completion code indicates success.
    fn parse_success_response(data: &[u8]) -> Result<Self::Output, Self::Error>;
}
