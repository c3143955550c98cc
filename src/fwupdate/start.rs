use crate::{
    commands::OemCommand,
    connection::{IpmiCommand, Message, NotEnoughData},
};

/// The Start Firmware Update command.
#[derive(Clone, Copy, Debug, Default)]
pub struct StartFwUpdate {
    preserve_config: bool,
}

impl StartFwUpdate {
    /// Start an update. If `preserve_config` is `false`, the
    /// configuration of the updated firmware is cleared.
    pub fn new(preserve_config: bool) -> Self {
        Self { preserve_config }
    }

    pub fn preserve_config(&self) -> bool {
        self.preserve_config
    }
}

impl From<StartFwUpdate> for Message {
    fn from(value: StartFwUpdate) -> Self {
        OemCommand::StartFwUpdate.message(vec![0x00, value.preserve_config as u8])
    }
}

impl IpmiCommand for StartFwUpdate {
    type Output = ();
    type Error = NotEnoughData;

    fn parse_success_response(_: &[u8]) -> Result<Self::Output, Self::Error> {
        Ok(())
    }
}

#[test]
fn request_layout() {
    let clear: Message = StartFwUpdate::default().into();
    let preserve: Message = StartFwUpdate::new(true).into();

    assert_eq!(clear.cmd(), 0x87);
    assert_eq!(clear.data(), &[0x00, 0x00]);
    assert_eq!(preserve.data(), &[0x00, 0x01]);
}
