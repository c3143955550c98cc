use crate::{Capabilities, LogOutput};

/// Which usage text to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageTopic {
    Main,
    FwUpdate,
}

const LOM: &[&str] = &[
    "   - lom mac [port]",
    "      Get LOM (Lan-On-Mainboard) MAC address.",
    "      Optional [port] value specifies the LOM port number (1 or 2).",
];

const FWUPDATE: &[&str] = &[
    "   - fwupdate <subcommand> [option...]",
    "      Firmware update group of commands. Use \"fwupdate help\" to get more info.",
];

const FWUPDATE_CONFIG: &[&str] = &[
    "   - info",
    "      Get firmware update configuration summary.",
    "   - set <option> <value>",
    "      Set firmware update configuration. Valid options are:",
    "         - transport <http|tftp>",
    "            Set transport protocol to download the firmware image.",
    "            Supported protocols are http and tftp.",
    "         - server-ip <ip>",
    "            Set the server IP address to download the firmware image from.",
    "         - filename <name>",
    "            Set firmware image filename and path on the server.",
];

const FWUPDATE_EXTENDED_SET: &[&str] = &[
    "         - retry <count>",
    "            Set retry count for downloading the firmware image.",
    "            Default is 0.",
    "         - type <bios|bmc>",
    "            Set the firmware type to update. Valid values are bios and bmc.",
];

const FWUPDATE_EXTENDED: &[&str] = &[
    "   - status",
    "      Get the current firmware update status.",
    "   - start [preserve-config=yes|no]",
    "      Start the firmware update. The configuration is cleared",
    "      unless preserve-config=yes is given.",
];

/// The usage text for `topic`, listing only the commands in `capabilities`.
pub fn usage(topic: UsageTopic, capabilities: Capabilities) -> Vec<&'static str> {
    let mut lines = Vec::new();

    match topic {
        UsageTopic::Main => {
            lines.extend(["Usage: tploem <command> [option...]", "", "Commands:"]);

            if capabilities.contains(Capabilities::LOM_MAC) {
                lines.extend(LOM);
            }

            if capabilities.contains(Capabilities::FW_CONFIG) {
                lines.extend(FWUPDATE);
            }
        }
        UsageTopic::FwUpdate => {
            lines.extend([
                "Usage: tploem fwupdate <subcommand> [option...]",
                "",
                "Subcommands:",
            ]);

            if capabilities.contains(Capabilities::FW_CONFIG) {
                lines.extend(FWUPDATE_CONFIG);

                if capabilities.contains(Capabilities::FW_EXTENDED) {
                    lines.extend(FWUPDATE_EXTENDED_SET);
                    lines.extend(FWUPDATE_EXTENDED);
                }
            }
        }
    }

    lines.push("");
    lines
}

pub fn print_usage(output: &LogOutput, topic: UsageTopic, capabilities: Capabilities) {
    usage(topic, capabilities)
        .into_iter()
        .for_each(|line| output.print(line));
}

#[test]
fn basic_command_set_hides_extended_commands() {
    let basic = usage(UsageTopic::FwUpdate, Capabilities::BASIC);
    let extended = usage(UsageTopic::FwUpdate, Capabilities::EXTENDED);

    assert!(basic.iter().any(|l| l.contains("server-ip")));
    assert!(!basic.iter().any(|l| l.contains("retry")));
    assert!(extended.iter().any(|l| l.contains("preserve-config")));

    let lom_only = usage(UsageTopic::Main, Capabilities::LOM_MAC);
    assert!(!lom_only.iter().any(|l| l.contains("fwupdate")));
}
