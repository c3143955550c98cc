//! Lan-On-Mainboard (LOM) commands.

mod get_mac;
pub use get_mac::{GetLomMac, LomPort, MacAddress};
