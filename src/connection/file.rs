//! Local BMC access through the OpenIPMI character device.

use std::{
    io,
    os::fd::AsRawFd,
    path::Path,
    time::{Duration, Instant},
};

use crate::{log_vec, LogItem, LogOutput, Loggable, Logger};

use super::{IpmiConnection, Request, Response};

/// Mirrors of the structures in `linux/ipmi.h`.
mod sys {
    #[repr(C)]
    #[derive(Debug)]
    pub struct IpmiMsg {
        pub netfn: u8,
        pub cmd: u8,
        pub data_len: u16,
        pub data: *mut u8,
    }

    #[repr(C)]
    #[derive(Debug)]
    pub struct IpmiReq {
        pub addr: *mut u8,
        pub addr_len: u32,
        pub msgid: i64,
        pub msg: IpmiMsg,
    }

    #[repr(C)]
    #[derive(Debug)]
    pub struct IpmiRecv {
        pub recv_type: i32,
        pub addr: *mut u8,
        pub addr_len: u32,
        pub msgid: i64,
        pub msg: IpmiMsg,
    }

    #[repr(C)]
    #[derive(Clone, Copy, Debug)]
    pub struct IpmiSystemInterfaceAddr {
        pub addr_type: i32,
        pub channel: i16,
        pub lun: u8,
    }

    impl IpmiSystemInterfaceAddr {
        pub const fn bmc() -> Self {
            Self {
                addr_type: 0x0C,
                channel: 0x0F,
                lun: 0,
            }
        }
    }

    const IPMI_IOC_MAGIC: u8 = b'i';

    nix::ioctl_readwrite!(receive_msg_trunc, IPMI_IOC_MAGIC, 11, IpmiRecv);
    nix::ioctl_read!(send_command, IPMI_IOC_MAGIC, 13, IpmiReq);
}

impl sys::IpmiMsg {
    fn data(&self) -> &[u8] {
        if self.data.is_null() {
            return &[];
        }

        // SAFETY: `data` points to a buffer of at least `data_len` bytes
        // that outlives this message (see `File::send` and `File::recv`).
        unsafe { core::slice::from_raw_parts(self.data, self.data_len as usize) }
    }
}

impl Loggable for sys::IpmiMsg {
    fn as_log(&self) -> Vec<LogItem> {
        log_vec![
            (0, "IPMI message"),
            (1, "NetFn", format!("0x{:02X}", self.netfn)),
            (1, "Command", format!("0x{:02X}", self.cmd)),
            (1, "Data", format!("{:02X?}", self.data())),
        ]
    }
}

/// A connection to the local BMC through the OpenIPMI character device
/// (usually `/dev/ipmi0`).
///
/// The kernel driver takes care of the system interface, so every request
/// is addressed to the BMC on LUN 0.
pub struct File {
    device: std::fs::File,
    recv_timeout: Duration,
}

impl File {
    pub fn new(path: impl AsRef<Path>, recv_timeout: Duration) -> io::Result<Self> {
        Ok(Self {
            device: std::fs::File::open(path)?,
            recv_timeout,
        })
    }

    fn trace(msg: &sys::IpmiMsg) {
        if log::log_enabled!(log::Level::Trace) {
            Logger::log(&LogOutput::Log(log::Level::Trace), msg);
        }
    }
}

impl IpmiConnection for File {
    type SendError = io::Error;
    type RecvError = io::Error;
    type Error = io::Error;

    fn send(&mut self, request: &mut Request) -> io::Result<()> {
        let mut addr = sys::IpmiSystemInterfaceAddr::bmc();

        let (netfn, cmd, msgid) = (request.netfn_raw(), request.cmd(), request.seq());
        let data = request.data_mut();

        let mut req = sys::IpmiReq {
            addr: &mut addr as *mut _ as *mut u8,
            addr_len: core::mem::size_of_val(&addr) as u32,
            msgid,
            msg: sys::IpmiMsg {
                netfn,
                cmd,
                data_len: data.len() as u16,
                data: data.as_mut_ptr(),
            },
        };

        log::debug!("Sending request with message ID {msgid}");
        Self::trace(&req.msg);

        // SAFETY: `req` has the layout expected by IPMICTL_SEND_COMMAND, and
        // `addr` and `data` outlive the call.
        unsafe { sys::send_command(self.device.as_raw_fd(), &mut req) }?;

        Ok(())
    }

    fn recv(&mut self) -> io::Result<Response> {
        let mut addr = sys::IpmiSystemInterfaceAddr::bmc();
        let mut buffer = [0u8; 1024];

        let start = Instant::now();

        let recv = loop {
            let mut recv = sys::IpmiRecv {
                recv_type: 0,
                addr: &mut addr as *mut _ as *mut u8,
                addr_len: core::mem::size_of_val(&addr) as u32,
                msgid: 0,
                msg: sys::IpmiMsg {
                    netfn: 0,
                    cmd: 0,
                    data_len: buffer.len() as u16,
                    data: buffer.as_mut_ptr(),
                },
            };

            // SAFETY: `recv` has the layout expected by
            // IPMICTL_RECEIVE_MSG_TRUNC, and `addr` and `buffer` outlive the
            // call.
            match unsafe { sys::receive_msg_trunc(self.device.as_raw_fd(), &mut recv) } {
                Ok(_) => break recv,
                Err(e) if start.elapsed() > self.recv_timeout => {
                    log::warn!(
                        "No response after waiting for {} ms: {e}",
                        start.elapsed().as_millis()
                    );
                    return Err(e.into());
                }
                Err(_) => std::thread::sleep(Duration::from_millis(1)),
            }
        };

        log::debug!(
            "Received response to message ID {} after {} ms",
            recv.msgid,
            start.elapsed().as_millis()
        );
        Self::trace(&recv.msg);

        let (netfn, cmd) = (recv.msg.netfn, recv.msg.cmd);
        let data = recv.msg.data().to_vec();

        Response::new(netfn, cmd, data, recv.msgid).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid response (netfn 0x{netfn:02X}, cmd 0x{cmd:02X})"),
            )
        })
    }

    fn send_recv(&mut self, request: &mut Request) -> io::Result<Response> {
        self.send(request)?;
        self.recv()
    }
}
