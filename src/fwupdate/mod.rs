//! Remote firmware update commands.
//!
//! The BMC downloads the image itself. These commands configure where it
//! downloads from, start the update and report its progress.

mod get_parameter;
mod get_status;
mod info;
mod parameter;
mod set_parameter;
mod start;

pub use get_parameter::{FwUpdateParameterResponse, GetFwUpdateParameter};
pub use get_status::{FwUpdateStatus, FwUpdateStatusReport, GetFwUpdateStatus, StatusError};
pub use info::FwUpdateInfo;
pub use parameter::{FirmwareType, FwUpdateParameter, FwUpdateParameterValue, TransportProtocol};
pub use set_parameter::SetFwUpdateParameter;
pub use start::StartFwUpdate;
