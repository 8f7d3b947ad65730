//! Per device class command parameters.

use crate::catalog::pid;
use crate::effect::{self, EffectCommand};
use crate::error::Error;
use crate::report::{self, ReportBuffer};

const COMMAND_CLASS_LIGHTING: u8 = 0x0F;
const COMMAND_ID_SET_EFFECT: u8 = 0x02;
const PAYLOAD_SIZE: u8 = 9;

const MOUSE_TRANSACTION_ID: u8 = 0x1F;
const KEYBOARD_WIRED_TRANSACTION_ID: u8 = 0x3F;
const KEYBOARD_WIRELESS_TRANSACTION_ID: u8 = 0x9F;

const LED_SCROLL_WHEEL: u8 = 0x01;
const LED_BACKLIGHT: u8 = 0x05;

/// Constants needed to address one product.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub(crate) struct DeviceClassProfile {
    pub transaction_id: u8,
    pub command_class: u8,
    pub command_id: u8,
    pub payload_size: u8,
    pub led_id: u8,
}

impl DeviceClassProfile {
    const fn mouse() -> Self {
        Self {
            transaction_id: MOUSE_TRANSACTION_ID,
            command_class: COMMAND_CLASS_LIGHTING,
            command_id: COMMAND_ID_SET_EFFECT,
            payload_size: PAYLOAD_SIZE,
            led_id: LED_SCROLL_WHEEL,
        }
    }

    const fn keyboard(transaction_id: u8) -> Self {
        Self {
            transaction_id,
            command_class: COMMAND_CLASS_LIGHTING,
            command_id: COMMAND_ID_SET_EFFECT,
            payload_size: PAYLOAD_SIZE,
            led_id: LED_BACKLIGHT,
        }
    }

    /// Encode an effect for this device class.
    pub(crate) fn build_report(&self, effect: &EffectCommand) -> Result<ReportBuffer, Error> {
        let args = effect::arguments_for(effect, self.led_id);
        report::build_report(
            self.transaction_id,
            self.command_class,
            self.command_id,
            self.payload_size,
            &args,
        )
    }
}

const KEYBOARD_WIRED: DeviceClassProfile =
    DeviceClassProfile::keyboard(KEYBOARD_WIRED_TRANSACTION_ID);
const KEYBOARD_WIRELESS: DeviceClassProfile =
    DeviceClassProfile::keyboard(KEYBOARD_WIRELESS_TRANSACTION_ID);

/// Profile of every supported product.
///
/// Only the wired BlackWidow V3 Pro uses the wired keyboard transaction ID.
static PROFILES: [(u16, DeviceClassProfile); 7] = [
    (pid::BASILISK_V3_X_HYPERSPEED, DeviceClassProfile::mouse()),
    (pid::DEATHADDER_CHROMA, DeviceClassProfile::mouse()),
    (pid::MAMBA_CHROMA, DeviceClassProfile::mouse()),
    (pid::BLACKWIDOW_V3_PRO_WIRED, KEYBOARD_WIRED),
    (pid::BLACKWIDOW_V3_PRO_WIRELESS, KEYBOARD_WIRELESS),
    (pid::CYNOSA_CHROMA, KEYBOARD_WIRELESS),
    (pid::TARTARUS_CHROMA, KEYBOARD_WIRELESS),
];

/// Resolve the command parameters for a product.
pub(crate) fn class_profile_for(product_id: u16) -> Result<DeviceClassProfile, Error> {
    PROFILES
        .iter()
        .find(|(pid, _)| *pid == product_id)
        .map(|(_, profile)| *profile)
        .ok_or(Error::DeviceNotSupported(product_id))
}
