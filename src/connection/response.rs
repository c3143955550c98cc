use super::NetFn;

/// A response as delivered by an [`IpmiConnection`](super::IpmiConnection).
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    seq: i64,
    netfn: NetFn,
    cmd: u8,
    cc: u8,
    data: Vec<u8>,
}

impl Response {
    /// Split a raw response into its completion code and data.
    ///
    /// `raw_netfn` must be a response netfn, and `raw_data` must hold at
    /// least the completion code; otherwise this returns `None`.
    pub fn new(raw_netfn: u8, cmd: u8, mut raw_data: Vec<u8>, seq: i64) -> Option<Self> {
        let netfn = NetFn::from(raw_netfn);

        if netfn.response_value() != raw_netfn || raw_data.is_empty() {
            return None;
        }

        let cc = raw_data.remove(0);

        Some(Self {
            seq,
            netfn,
            cmd,
            cc,
            data: raw_data,
        })
    }

    pub fn netfn(&self) -> NetFn {
        self.netfn
    }

    pub fn cmd(&self) -> u8 {
        self.cmd
    }

    /// The sequence number (message ID) of the request this answers.
    pub fn seq(&self) -> i64 {
        self.seq
    }

    /// The completion code. `0` indicates success.
    pub fn cc(&self) -> u8 {
        self.cc
    }

    /// The response data following the completion code.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[test]
fn response_requires_completion_code_and_response_netfn() {
    assert!(Response::new(0x33, 0x88, vec![], 0).is_none());
    assert!(Response::new(0x32, 0x88, vec![0x00], 0).is_none());

    let response = Response::new(0x33, 0x88, vec![0x00, 0x04, 0x2A], 7).unwrap();
    assert_eq!(response.netfn(), NetFn::Firmware);
    assert_eq!(response.cc(), 0);
    assert_eq!(response.data(), &[0x04, 0x2A]);
    assert_eq!(response.seq(), 7);
}
