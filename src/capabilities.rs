use bitflags::bitflags;

bitflags! {
    /// The OEM command groups supported by a BMC firmware.
    ///
    /// Older firmware only knows about the LOM MAC query and the
    /// addressing part of the firmware update configuration.
    pub struct Capabilities: u8 {
        /// `lom mac`
        const LOM_MAC = 0b0000_0001;
        /// `fwupdate set transport|server-ip|filename` and `fwupdate info`
        const FW_CONFIG = 0b0000_0010;
        /// `fwupdate set retry|type`, `fwupdate status` and `fwupdate start`
        const FW_EXTENDED = 0b0000_0100;

        const BASIC = Self::LOM_MAC.bits | Self::FW_CONFIG.bits;
        const EXTENDED = Self::BASIC.bits | Self::FW_EXTENDED.bits;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::EXTENDED
    }
}

#[test]
fn extended_is_superset_of_basic() {
    assert!(Capabilities::EXTENDED.contains(Capabilities::BASIC));
    assert!(!Capabilities::BASIC.contains(Capabilities::FW_EXTENDED));
    assert_eq!(Capabilities::default(), Capabilities::all());
}
