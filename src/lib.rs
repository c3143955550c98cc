//! IPMI-rs T-Platforms OEM extensions.
//!
//! This library provides serialization and deserialization of the T-Platforms
//! OEM commands (in the [`lom`] and [`fwupdate`] modules), the command table
//! they are built from (in [`commands`]), and a command line front-end
//! (in [`cli`]). Commands are sent over any [`connection::IpmiConnection`].

pub mod cli;

pub mod commands;

pub mod connection;

mod capabilities;
pub use capabilities::Capabilities;

mod error;
pub use error::IpmiError;

pub mod fwupdate;

pub mod lom;

#[macro_use]
mod fmt;
pub use fmt::{LogItem, LogOutput, Loggable, Logger};

#[cfg(test)]
mod tests;

use connection::{CompletionErrorCode, IpmiCommand, IpmiConnection, Message, Request, Response};

/// A BMC reachable over `CON`.
///
/// Every command gets a fresh sequence number, and every response is
/// checked against the request before it is parsed.
pub struct Ipmi<CON> {
    inner: CON,
    seq: i64,
}

impl<CON> Ipmi<CON> {
    pub fn new(inner: CON) -> Self {
        Self { inner, seq: 0 }
    }

    pub fn inner_mut(&mut self) -> &mut CON {
        &mut self.inner
    }

    pub fn release(self) -> CON {
        self.inner
    }
}

impl<CON> Ipmi<CON>
where
    CON: IpmiConnection,
{
    /// Send `command` and parse the response to it.
    pub fn send_recv<CMD>(
        &mut self,
        command: CMD,
    ) -> Result<CMD::Output, IpmiError<CON::Error, CMD::Error>>
    where
        CMD: IpmiCommand,
    {
        let message: Message = command.into();
        let (netfn, cmd) = (message.netfn(), message.cmd());

        self.seq = self.seq.wrapping_add(1);
        let mut request = Request::new(message, self.seq);

        log::debug!("Sending {netfn}, cmd 0x{cmd:02X}, data {:02X?}", request.data());

        let response = self.inner.send_recv(&mut request)?;

        log::trace!(
            "Received completion code 0x{:02X}, data {:02X?}",
            response.cc(),
            response.data()
        );

        check_response(&response, netfn, cmd)?;

        CMD::parse_success_response(response.data()).map_err(|error| IpmiError::Command {
            error,
            netfn,
            cmd,
            data: response.data().to_vec(),
        })
    }
}

/// Reject responses to other commands and responses with a non-zero
/// completion code.
fn check_response<CON, P>(
    response: &Response,
    netfn: connection::NetFn,
    cmd: u8,
) -> Result<(), IpmiError<CON, P>> {
    if (response.netfn(), response.cmd()) != (netfn, cmd) {
        return Err(IpmiError::UnexpectedResponse {
            netfn_sent: netfn,
            netfn_recvd: response.netfn(),
            cmd_sent: cmd,
            cmd_recvd: response.cmd(),
        });
    }

    match CompletionErrorCode::try_from(response.cc()) {
        Ok(completion_code) => Err(IpmiError::Failed {
            netfn,
            cmd,
            completion_code,
            data: response.data().to_vec(),
        }),
        Err(()) => Ok(()),
    }
}
