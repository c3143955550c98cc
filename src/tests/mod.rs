use std::collections::VecDeque;

use crate::{
    connection::{IpmiConnection, NetFn, Request, Response},
    Ipmi,
};

mod commands;

/// A canned reply of [`MockBmc`].
#[derive(Clone, Debug)]
pub enum Reply {
    /// Completion code 0 and the given data.
    Data(Vec<u8>),
    /// A non-zero completion code.
    CompletionCode(u8),
    /// A response for a different command.
    WrongCommand,
    /// The connection does not deliver a response.
    NoResponse,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MockError {
    NoResponse,
    NoRequestPending,
    OutOfReplies,
}

/// A BMC that records all requests and answers them from a queue.
#[derive(Default)]
pub struct MockBmc {
    pub requests: Vec<(NetFn, u8, Vec<u8>)>,
    replies: VecDeque<Reply>,
    pending: Option<(NetFn, u8, i64)>,
}

impl MockBmc {
    pub fn new<I: IntoIterator<Item = Reply>>(replies: I) -> Ipmi<Self> {
        Ipmi::new(Self {
            replies: replies.into_iter().collect(),
            ..Default::default()
        })
    }
}

impl IpmiConnection for MockBmc {
    type SendError = MockError;
    type RecvError = MockError;
    type Error = MockError;

    fn send(&mut self, request: &mut Request) -> Result<(), Self::SendError> {
        self.requests
            .push((request.netfn(), request.cmd(), request.data().to_vec()));
        self.pending = Some((request.netfn(), request.cmd(), request.seq()));
        Ok(())
    }

    fn recv(&mut self) -> Result<Response, Self::RecvError> {
        let (netfn, cmd, seq) = self.pending.take().ok_or(MockError::NoRequestPending)?;
        let reply = self.replies.pop_front().ok_or(MockError::OutOfReplies)?;

        let (cmd, data) = match reply {
            Reply::Data(data) => (cmd, std::iter::once(0x00).chain(data).collect::<Vec<u8>>()),
            Reply::CompletionCode(cc) => (cmd, vec![cc]),
            Reply::WrongCommand => (cmd.wrapping_add(1), vec![0x00]),
            Reply::NoResponse => return Err(MockError::NoResponse),
        };

        Ok(Response::new(netfn.response_value(), cmd, data, seq).unwrap())
    }

    fn send_recv(&mut self, request: &mut Request) -> Result<Response, Self::Error> {
        self.send(request)?;
        self.recv()
    }
}
