/// The network functions used by the T-Platforms OEM command set.
///
/// Both live in the OEM/group range (0x30-0x3F) of the IPMI specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetFn {
    /// Remote firmware update procedures (0x32).
    Firmware,
    /// Lan-On-Mainboard queries (0x3A).
    Lom,
    /// Any other network function, stored as its request value.
    Unknown(u8),
}

impl NetFn {
    const FIRMWARE: u8 = 0x32;
    const LOM: u8 = 0x3A;

    /// The (even) value of this netfn used in requests.
    pub const fn request_value(&self) -> u8 {
        match self {
            NetFn::Firmware => Self::FIRMWARE,
            NetFn::Lom => Self::LOM,
            NetFn::Unknown(value) => *value & !1,
        }
    }

    /// The (odd) value of this netfn used in responses.
    pub const fn response_value(&self) -> u8 {
        self.request_value() | 1
    }
}

impl From<u8> for NetFn {
    fn from(value: u8) -> Self {
        match value & !1 {
            Self::FIRMWARE => Self::Firmware,
            Self::LOM => Self::Lom,
            v => Self::Unknown(v),
        }
    }
}

impl core::fmt::Display for NetFn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NetFn::Firmware => write!(f, "Firmware (0x{:02X})", self.request_value()),
            NetFn::Lom => write!(f, "LOM (0x{:02X})", self.request_value()),
            NetFn::Unknown(v) => write!(f, "Unknown (0x{v:02X})"),
        }
    }
}

#[test]
fn request_and_response_values_map_to_same_netfn() {
    assert_eq!(NetFn::from(0x32), NetFn::Firmware);
    assert_eq!(NetFn::from(0x33), NetFn::Firmware);
    assert_eq!(NetFn::from(0x3B), NetFn::Lom);
    assert_eq!(NetFn::from(0x07), NetFn::Unknown(0x06));

    assert_eq!(NetFn::Lom.request_value(), 0x3A);
    assert_eq!(NetFn::Lom.response_value(), 0x3B);
    assert_eq!(NetFn::Unknown(0x07).request_value(), 0x06);
}
