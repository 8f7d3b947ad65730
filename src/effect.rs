//! Lighting effects and their argument layout.

use bytes::{BufMut, Bytes, BytesMut};
use clap::ValueEnum;

use crate::Rgb;

/// Store the effect in persistent memory.
const VARSTORE: u8 = 0x01;

const EFFECT_RESET: u8 = 0x00;
const EFFECT_STATIC: u8 = 0x01;
const EFFECT_BREATHING: u8 = 0x02;
const EFFECT_WAVE: u8 = 0x03;
const EFFECT_REACTIVE: u8 = 0x04;

/// Wave direction.
#[derive(ValueEnum, Default, PartialEq, Eq, Debug, Copy, Clone)]
pub(crate) enum Direction {
    /// Left to right.
    #[default]
    Forward,
    /// Right to left.
    Reverse,
}

impl Direction {
    fn as_byte(self) -> u8 {
        match self {
            Self::Forward => 0,
            Self::Reverse => 1,
        }
    }
}

/// Lighting effect with its parameters.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub(crate) enum EffectCommand {
    Static(Rgb),
    Breathing { base: Rgb, pulse: Rgb, speed: u8 },
    Wave { speed: u8, direction: Direction },
    Reactive { color: Rgb, duration: u8 },
    Reset,
}

impl EffectCommand {
    /// Effect code understood by the firmware.
    pub(crate) fn code(&self) -> u8 {
        match self {
            Self::Static(_) => EFFECT_STATIC,
            Self::Breathing { .. } => EFFECT_BREATHING,
            Self::Wave { .. } => EFFECT_WAVE,
            Self::Reactive { .. } => EFFECT_REACTIVE,
            Self::Reset => EFFECT_RESET,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Static(_) => "static",
            Self::Breathing { .. } => "breathing",
            Self::Wave { .. } => "wave",
            Self::Reactive { .. } => "reactive",
            Self::Reset => "reset",
        }
    }
}

/// Command arguments for an effect on one LED zone.
///
/// Devices read these bytes positionally, the order must not change.
pub(crate) fn arguments_for(effect: &EffectCommand, led_id: u8) -> Bytes {
    let mut buf = BytesMut::with_capacity(13);

    // Common header.
    buf.put_slice(&[VARSTORE, led_id, effect.code(), 0x00, 0x00, 0x01]);

    match *effect {
        EffectCommand::Static(color) => put_rgb(&mut buf, color),
        EffectCommand::Breathing { base, pulse, speed } => {
            put_rgb(&mut buf, base);
            put_rgb(&mut buf, pulse);
            buf.put_u8(speed);
        },
        EffectCommand::Wave { speed, direction } => {
            buf.put_u8(speed);
            buf.put_u8(direction.as_byte());
        },
        EffectCommand::Reactive { color, duration } => {
            put_rgb(&mut buf, color);
            buf.put_u8(duration);
        },
        EffectCommand::Reset => (),
    }

    buf.freeze()
}

#[inline]
fn put_rgb(buf: &mut BytesMut, color: Rgb) {
    buf.put_u8(color.r);
    buf.put_u8(color.g);
    buf.put_u8(color.b);
}
