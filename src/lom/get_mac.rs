use crate::{
    commands::OemCommand,
    connection::{IpmiCommand, Message, NotEnoughData},
};

/// A LOM port number. Only ports 1 and 2 exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LomPort(u8);

impl LomPort {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);

    /// Both ports, in query order.
    pub const ALL: [Self; 2] = [Self::ONE, Self::TWO];

    /// Create a new `LomPort`.
    ///
    /// This function returns `None` if `value` is not 1 or 2.
    pub fn new(value: u8) -> Option<Self> {
        match value {
            1 | 2 => Some(Self(value)),
            _ => None,
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for LomPort {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// MAC address representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    fn from_slice(data: &[u8]) -> Result<Self, NotEnoughData> {
        data.get(..6)
            .and_then(|octets| octets.try_into().ok())
            .map(MacAddress)
            .ok_or(NotEnoughData)
    }
}

impl core::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

/// The Get LOM MAC Address command.
#[derive(Clone, Copy, Debug)]
pub struct GetLomMac {
    port: LomPort,
}

impl GetLomMac {
    /// Subcommand selecting the MAC address query.
    const MAC_ADDRESS: u8 = 1;

    pub fn new(port: LomPort) -> Self {
        Self { port }
    }
}

impl From<GetLomMac> for Message {
    fn from(value: GetLomMac) -> Self {
        OemCommand::GetLomMac.message(vec![value.port.value(), GetLomMac::MAC_ADDRESS])
    }
}

impl IpmiCommand for GetLomMac {
    type Output = MacAddress;
    type Error = NotEnoughData;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, Self::Error> {
        MacAddress::from_slice(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ports_one_and_two_exist() {
        for value in 0..=u8::MAX {
            assert_eq!(LomPort::new(value).is_some(), value == 1 || value == 2);
        }
    }

    #[test]
    fn request_layout() {
        let message: Message = GetLomMac::new(LomPort::TWO).into();

        assert_eq!(message.netfn().request_value(), 0x3A);
        assert_eq!(message.cmd(), 0x44);
        assert_eq!(message.data(), &[0x02, 0x01]);
    }

    #[test]
    fn mac_is_formatted_upper_case() {
        let data = hex::decode("001e67a4bc0f").unwrap();
        let mac = GetLomMac::parse_success_response(&data).unwrap();

        assert_eq!(mac.to_string(), "00:1E:67:A4:BC:0F");
    }

    #[test]
    fn mac_format_shape() {
        for raw in ["000000000000", "ffffffffffff", "0a1b2c3d4e5f"] {
            let data = hex::decode(raw).unwrap();
            let mac = GetLomMac::parse_success_response(&data).unwrap().to_string();

            let octets: Vec<&str> = mac.split(':').collect();
            assert_eq!(octets.len(), 6, "{mac}");
            assert!(octets.iter().all(|o| o.len() == 2
                && o.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))));
        }
    }

    #[test]
    fn short_response_is_rejected() {
        assert_eq!(
            GetLomMac::parse_success_response(&[0x00, 0x1E, 0x67]),
            Err(NotEnoughData)
        );
    }
}
