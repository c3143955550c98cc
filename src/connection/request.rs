use super::{Message, NetFn};

/// A [`Message`] tagged with a sequence number, as handed to an
/// [`IpmiConnection`](super::IpmiConnection).
#[derive(Clone, Debug)]
pub struct Request {
    netfn: NetFn,
    cmd: u8,
    seq: i64,
    data: Vec<u8>,
}

impl Request {
    pub fn new(message: Message, seq: i64) -> Self {
        Self {
            netfn: message.netfn(),
            cmd: message.cmd(),
            seq,
            data: message.into_data(),
        }
    }

    pub fn netfn(&self) -> NetFn {
        self.netfn
    }

    /// The netfn as it goes on the wire (always a request value).
    pub fn netfn_raw(&self) -> u8 {
        self.netfn.request_value()
    }

    pub fn cmd(&self) -> u8 {
        self.cmd
    }

    /// Used as the message ID by connections that support one.
    pub fn seq(&self) -> i64 {
        self.seq
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Connections that hand the data to the kernel need a mutable buffer.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
