//! The T-Platforms OEM command table.
//!
//! Every request built by this crate gets its netfn and command code from
//! [`OemCommand`]; changes to the wire layout are made here only.

use crate::connection::{Message, NetFn};

/// Size of the string field of the server address and image filename parameters.
pub const FW_STRING_LEN: usize = 200;

/// The layout of the request data of an [`OemCommand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadShape {
    /// No request data.
    None,
    /// A single byte.
    SingleByteSelector,
    /// A selector byte followed by a single value byte.
    SelectorPlusValue,
    /// A selector byte followed by a [`FW_STRING_LEN`] byte, zero padded string.
    FixedString200,
}

impl PayloadShape {
    /// The exact number of request data bytes for this shape.
    pub const fn data_len(&self) -> usize {
        match self {
            PayloadShape::None => 0,
            PayloadShape::SingleByteSelector => 1,
            PayloadShape::SelectorPlusValue => 2,
            PayloadShape::FixedString200 => 1 + FW_STRING_LEN,
        }
    }
}

/// All OEM commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OemCommand {
    /// Select the protocol used to download the firmware image.
    SetFwUpdateTransport,
    /// Read a firmware update parameter.
    GetFwUpdateParameter,
    /// Write a string firmware update parameter (server address, filename).
    SetFwUpdateString,
    /// Write a scalar firmware update parameter (retry count, firmware type).
    SetFwUpdateScalar,
    /// Read the progress of the firmware update.
    GetFwUpdateStatus,
    /// Kick off the firmware update.
    StartFwUpdate,
    /// Read the MAC address of a LOM port.
    GetLomMac,
}

impl OemCommand {
    pub const fn netfn(&self) -> NetFn {
        match self {
            OemCommand::GetLomMac => NetFn::Lom,
            _ => NetFn::Firmware,
        }
    }

    pub const fn cmd(&self) -> u8 {
        match self {
            OemCommand::SetFwUpdateTransport => 0x8B,
            OemCommand::GetFwUpdateParameter => 0x8A,
            OemCommand::SetFwUpdateString | OemCommand::SetFwUpdateScalar => 0x89,
            OemCommand::GetFwUpdateStatus => 0x88,
            OemCommand::StartFwUpdate => 0x87,
            OemCommand::GetLomMac => 0x44,
        }
    }

    pub const fn payload_shape(&self) -> PayloadShape {
        match self {
            OemCommand::GetFwUpdateStatus => PayloadShape::None,
            OemCommand::SetFwUpdateTransport | OemCommand::GetFwUpdateParameter => {
                PayloadShape::SingleByteSelector
            }
            OemCommand::SetFwUpdateScalar | OemCommand::StartFwUpdate | OemCommand::GetLomMac => {
                PayloadShape::SelectorPlusValue
            }
            OemCommand::SetFwUpdateString => PayloadShape::FixedString200,
        }
    }

    /// Build the request message for this command.
    ///
    /// `data` must match [`OemCommand::payload_shape`].
    pub fn message(&self, data: Vec<u8>) -> Message {
        debug_assert_eq!(data.len(), self.payload_shape().data_len(), "{self:?}");
        Message::new(self.netfn(), self.cmd(), data)
    }
}
