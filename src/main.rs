//! Razer Chroma lighting CLI tool
//!
//! Lighting effects are applied by writing 90 byte vendor feature reports to
//! every HID interface of the selected device, see [`report`] for the layout.

use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::process;
use std::str::FromStr;

use clap::builder::EnumValueParser;
use clap::{
    crate_description, crate_name, crate_version, value_parser, Arg, ArgMatches, Command, ValueEnum,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::backend::HidApiBackend;
use crate::discovery::DeviceDescriptor;
use crate::effect::{Direction, EffectCommand};
use crate::error::Error;
use crate::transport::Session;

mod backend;
mod catalog;
mod discovery;
mod effect;
mod error;
mod profile;
mod report;
mod transport;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "razerctl=warn";

/// Lighting effect.
#[derive(ValueEnum, Default, PartialEq, Eq, Debug, Copy, Clone)]
enum Effect {
    #[default]
    Static,
    Breathing,
    Wave,
    Reactive,
    Reset,
}

impl Effect {
    /// Whether the effect takes a primary color.
    fn has_color(self) -> bool {
        matches!(self, Self::Static | Self::Breathing | Self::Reactive)
    }
}

/// RGB color.
#[derive(Default, PartialEq, Eq, Debug, Copy, Clone)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const WHITE: Self = Self { r: 0xff, g: 0xff, b: 0xff };
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Rgb, String> {
        let invalid = || format!("color '{s}' does not match format 0xRRGGBB");

        let chars = match s.strip_prefix("0x") {
            Some(chars) if chars.len() == 6 => chars,
            _ => return Err(invalid()),
        };

        match u32::from_str_radix(chars, 16) {
            Ok(mut color) => {
                let b = (color & 0xff) as u8;
                color >>= 8;
                let g = (color & 0xff) as u8;
                color >>= 8;
                let r = color as u8;
                Ok(Rgb { r, g, b })
            },
            Err(_) => Err(invalid()),
        }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Animation speed.
#[derive(PartialEq, Eq, Copy, Clone)]
struct Speed(u8);

impl Default for Speed {
    fn default() -> Self {
        Self(128)
    }
}

impl FromStr for Speed {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Speed(u8::from_str(s)?))
    }
}

impl Display for Speed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reactive effect duration.
#[derive(PartialEq, Eq, Copy, Clone)]
struct Duration(u8);

impl Default for Duration {
    fn default() -> Self {
        Self(50)
    }
}

impl FromStr for Duration {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Duration(u8::from_str(s)?))
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delay between opening an interface and writing to it, in milliseconds.
#[derive(PartialEq, Eq, Copy, Clone)]
struct SettleTime(u64);

impl Default for SettleTime {
    fn default() -> Self {
        Self(transport::SETTLE_DELAY.as_millis() as u64)
    }
}

impl FromStr for SettleTime {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SettleTime(u64::from_str(s)?))
    }
}

impl Display for SettleTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// New lighting config.
struct Config {
    device: Option<String>,
    effect: Effect,
    color: Option<Rgb>,
    pulse_color: Rgb,
    speed: Speed,
    direction: Direction,
    duration: Duration,
    settle_time: SettleTime,
    interactive: bool,
}

impl Config {
    fn from_cli(effect: Effect, matches: &ArgMatches) -> Self {
        let mut config = Config { effect, ..Config::default() };

        config.device = cli_value(matches, "device");
        config.color = cli_value(matches, "color");

        replace_from_cli(&mut config.pulse_color, matches, "pulse-color");
        replace_from_cli(&mut config.speed, matches, "speed");
        replace_from_cli(&mut config.duration, matches, "duration");
        replace_from_cli(&mut config.direction, matches, "direction");
        replace_from_cli(&mut config.settle_time, matches, "settle-ms");

        config
    }

    /// Read required parameters missing from the CLI.
    fn complete<R: BufRead>(&mut self, input: &mut R) -> Result<(), Error> {
        if self.effect.has_color() && self.color.is_none() {
            self.color = Some(prompt_color(input, "color")?);
            self.interactive = true;
        }

        Ok(())
    }

    /// Primary color, white unless configured.
    fn color(&self) -> Rgb {
        self.color.unwrap_or(Rgb::WHITE)
    }

    /// Effect with its parameters.
    fn effect_command(&self) -> EffectCommand {
        match self.effect {
            Effect::Static => EffectCommand::Static(self.color()),
            Effect::Breathing => EffectCommand::Breathing {
                base: self.color(),
                pulse: self.pulse_color,
                speed: self.speed.0,
            },
            Effect::Wave => EffectCommand::Wave { speed: self.speed.0, direction: self.direction },
            Effect::Reactive => {
                EffectCommand::Reactive { color: self.color(), duration: self.duration.0 }
            },
            Effect::Reset => EffectCommand::Reset,
        }
    }

    fn settle_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.settle_time.0)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: Default::default(),
            pulse_color: Default::default(),
            interactive: Default::default(),
            settle_time: Default::default(),
            direction: Default::default(),
            duration: Default::default(),
            device: Default::default(),
            effect: Default::default(),
            speed: Default::default(),
        }
    }
}

impl Display for Config {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate_name!())?;

        if let Some(device) = &self.device {
            write!(f, " \\\n  --device {}", device)?;
        }

        if self.settle_time != SettleTime::default() {
            write!(f, " \\\n  --settle-ms {}", self.settle_time)?;
        }

        write!(f, " \\\n  {}", effect_name(self.effect))?;

        match self.effect {
            Effect::Static => write!(f, " \\\n  --color {}", self.color()),
            Effect::Breathing => write!(
                f,
                " \\\n  --color {} \\\n  --pulse-color {} \\\n  --speed {}",
                self.color(),
                self.pulse_color,
                self.speed,
            ),
            Effect::Wave => write!(
                f,
                " \\\n  --speed {} \\\n  --direction {}",
                self.speed,
                direction_name(self.direction),
            ),
            Effect::Reactive => write!(
                f,
                " \\\n  --color {} \\\n  --duration {}",
                self.color(),
                self.duration,
            ),
            Effect::Reset => Ok(()),
        }
    }
}

fn main() {
    init_logging();

    let matches = cli();
    let result = match matches.subcommand() {
        Some(("static", submatches)) => apply(Effect::Static, submatches),
        Some(("breathing", submatches)) => apply(Effect::Breathing, submatches),
        Some(("wave", submatches)) => apply(Effect::Wave, submatches),
        Some(("reactive", submatches)) => apply(Effect::Reactive, submatches),
        Some(("reset", submatches)) => apply(Effect::Reset, submatches),
        _ => list(),
    };

    match result {
        Ok(()) => (),
        Err(Error::NoDevicesFound) => println!("No Razer devices found."),
        Err(err) => {
            eprintln!("\x1b[31mError:\x1b[0m {err}");
            process::exit(1);
        },
    }
}

/// Install the stderr log subscriber.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Print all supported devices.
fn list() -> Result<(), Error> {
    let mut backend = HidApiBackend::new()?;
    let devices = discovery::scan(&mut backend);

    if devices.is_empty() {
        return Err(Error::NoDevicesFound);
    }

    for (i, device) in devices.iter().enumerate() {
        println!("  [{}] {}", i, device);
    }

    Ok(())
}

/// Apply a lighting effect.
fn apply(effect: Effect, matches: &ArgMatches) -> Result<(), Error> {
    let mut config = Config::from_cli(effect, matches);

    let mut backend = HidApiBackend::new()?;
    let devices = discovery::scan(&mut backend);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    // Only query missing parameters once there is a device to apply them to.
    let device = select_device(devices, &mut config, &mut input)?;
    config.complete(&mut input)?;

    // Reject unknown products before encoding anything.
    let profile = profile::class_profile_for(device.product_id)?;
    let effect = config.effect_command();
    let report = profile.build_report(&effect)?;

    debug!(
        "Encoded {} effect for {} (checksum 0x{:02X}): {:?}",
        effect.name(),
        device.name,
        report.checksum(),
        report
    );

    // Print CLI example to skip manual configuration.
    if config.interactive {
        println!("\x1b[32mConfiguration successful.\x1b[0m\n");
        println!("To reapply this config, you can run the following command:\n\n{}\n", config);
    }

    let session = Session::new(&backend).with_settle_delay(config.settle_delay());
    if !session.send(&device, &report) {
        return Err(Error::SendFailed(device.name));
    }

    info!("Applied {} effect to {}", effect.name(), device.name);
    println!("\x1b[32mSuccessfully applied {} effect to {}.\x1b[0m", effect.name(), device.name);

    Ok(())
}

/// Pick the target device from the CLI selector or `input`.
fn select_device<R: BufRead>(
    mut devices: Vec<DeviceDescriptor>,
    config: &mut Config,
    input: &mut R,
) -> Result<DeviceDescriptor, Error> {
    if devices.is_empty() {
        return Err(Error::NoDevicesFound);
    }

    if let Some(selector) = &config.device {
        return find_device(&devices, selector)
            .map(|index| devices.swap_remove(index))
            .ok_or_else(|| Error::DeviceNotFound(selector.clone()));
    }

    // Skip the prompt if there is nothing to choose from.
    if devices.len() == 1 {
        return Ok(devices.remove(0));
    }

    config.interactive = true;

    loop {
        println!("[device] Please select a number:");
        for (i, device) in devices.iter().enumerate() {
            println!("  [{}] {}", i, device);
        }
        print!(" > ");
        let _ = io::stdout().flush();

        let line = next_line(input, "device")?;

        match usize::from_str(&line).ok().filter(|index| *index < devices.len()) {
            Some(index) => {
                println!();
                config.device = Some(index.to_string());
                return Ok(devices.swap_remove(index));
            },
            // Query again if the device is not valid.
            _ => println!("\x1b[31mDevice '{}' does not exist, please try again.\x1b[0m\n", line),
        }
    }
}

/// Resolve a device selector, either a list index or a `0x` prefixed PID.
fn find_device(devices: &[DeviceDescriptor], selector: &str) -> Option<usize> {
    match selector.strip_prefix("0x").or_else(|| selector.strip_prefix("0X")) {
        Some(pid) => {
            let pid = u16::from_str_radix(pid, 16).ok()?;
            devices.iter().position(|device| device.product_id == pid)
        },
        None => usize::from_str(selector).ok().filter(|index| *index < devices.len()),
    }
}

/// Subcommand name of an effect.
fn effect_name(effect: Effect) -> String {
    effect.to_possible_value().map(|value| value.get_name().to_owned()).unwrap_or_default()
}

/// CLI name of a wave direction.
fn direction_name(direction: Direction) -> String {
    direction.to_possible_value().map(|value| value.get_name().to_owned()).unwrap_or_default()
}

/// Get clap CLI parameters.
fn cli() -> ArgMatches {
    command().get_matches()
}

/// CLI definition.
fn command() -> Command {
    let color = Arg::new("color")
        .help("LED color in RGB [0xRRGGBB]")
        .long("color")
        .short('c')
        .value_parser(value_parser!(Rgb));
    let speed = Arg::new("speed")
        .help("Animation speed [possible values: 0..=255, default: 128]")
        .long("speed")
        .short('s')
        .value_parser(value_parser!(Speed));

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("device")
                .help("Device list index or product ID [0xPPPP]")
                .long("device")
                .short('d')
                .global(true),
        )
        .arg(
            Arg::new("settle-ms")
                .help("Delay between opening an interface and writing to it in milliseconds")
                .long("settle-ms")
                .global(true)
                .value_parser(value_parser!(SettleTime)),
        )
        .subcommand(Command::new("list").about("List supported devices"))
        .subcommand(Command::new("static").about("Set a static color").arg(color.clone()))
        .subcommand(
            Command::new("breathing")
                .about("Pulse between two colors")
                .arg(color.clone())
                .arg(
                    Arg::new("pulse-color")
                        .help("Secondary LED color in RGB [0xRRGGBB, default: 0x000000]")
                        .long("pulse-color")
                        .short('p')
                        .value_parser(value_parser!(Rgb)),
                )
                .arg(speed.clone()),
        )
        .subcommand(
            Command::new("wave").about("Color wave animation").arg(speed).arg(
                Arg::new("direction")
                    .help("Wave direction")
                    .long("direction")
                    .ignore_case(true)
                    .value_parser(EnumValueParser::<Direction>::new()),
            ),
        )
        .subcommand(
            Command::new("reactive").about("Light up on key or button press").arg(color).arg(
                Arg::new("duration")
                    .help("Afterglow duration [possible values: 0..=255, default: 50]")
                    .long("duration")
                    .value_parser(value_parser!(Duration)),
            ),
        )
        .subcommand(Command::new("reset").about("Turn off the running effect"))
}

/// Typed CLI option, `None` if absent or not defined for the subcommand.
#[inline]
fn cli_value<T>(matches: &ArgMatches, name: &str) -> Option<T>
where
    T: Clone + Send + Sync + 'static,
{
    matches.try_get_one::<T>(name).ok().flatten().cloned()
}

/// Replace config value with the CLI parameter if it is present.
#[inline]
fn replace_from_cli<T>(option: &mut T, matches: &ArgMatches, name: &str)
where
    T: Clone + Send + Sync + 'static,
{
    if let Some(value) = cli_value(matches, name) {
        *option = value;
    }
}

/// Prompt for a color until a valid one is entered.
fn prompt_color<R: BufRead>(input: &mut R, name: &'static str) -> Result<Rgb, Error> {
    loop {
        // Query the user for the option.
        print!("Please select a {} (format: 0xRRGGBB):\n > ", name);
        let _ = io::stdout().flush();

        let line = next_line(input, name)?;

        match Rgb::from_str(&line) {
            Ok(color) => {
                println!();
                break Ok(color);
            },
            Err(err) => eprintln!("\x1b[31mInvalid {}: {}, please try again.\x1b[0m\n", name, err),
        }
    }
}

/// Read next trimmed line, failing once the input is closed.
fn next_line<R: BufRead>(input: &mut R, name: &'static str) -> Result<String, Error> {
    let mut line = String::new();

    match input.read_line(&mut line) {
        Ok(0) => Err(Error::InputClosed(name)),
        Ok(_) => Ok(line.trim().to_string()),
        Err(err) => Err(Error::Input(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use clap::error::ErrorKind;

    use super::*;
    use crate::discovery::InterfaceRef;

    fn device(name: &'static str, product_id: u16) -> DeviceDescriptor {
        DeviceDescriptor {
            name,
            product_id,
            serial_number: None,
            product_string: None,
            interfaces: vec![InterfaceRef {
                path: CString::new(format!("/dev/hidraw-{product_id:04x}")).unwrap(),
                interface_number: 0,
            }],
        }
    }

    fn devices() -> Vec<DeviceDescriptor> {
        vec![
            device("Razer Mamba Chroma", catalog::pid::MAMBA_CHROMA),
            device("Razer Cynosa Chroma", catalog::pid::CYNOSA_CHROMA),
        ]
    }

    /// Parse a command line into the config of its effect subcommand.
    fn config_from(args: &[&str]) -> Config {
        let matches = command().try_get_matches_from(args).unwrap();
        let (name, submatches) = matches.subcommand().unwrap();
        let effect = Effect::from_str(name, true).unwrap();
        Config::from_cli(effect, submatches)
    }

    #[test]
    fn cli_definition() {
        command().debug_assert();
    }

    #[test]
    fn parse_color() {
        assert_eq!(Rgb::from_str("0x0a141e"), Ok(Rgb { r: 10, g: 20, b: 30 }));
        assert_eq!(Rgb::from_str("0xFFFFFF"), Ok(Rgb::WHITE));
        assert!(Rgb::from_str("ffffff").is_err());
        assert!(Rgb::from_str("0xfffff").is_err());
        assert!(Rgb::from_str("0xgggggg").is_err());
        assert_eq!(Rgb { r: 1, g: 2, b: 255 }.to_string(), "0x0102ff");
    }

    #[test]
    fn invalid_cli_values_are_rejected() {
        let invalid: [&[&str]; 6] = [
            &["razerctl", "wave", "--speed", "300"],
            &["razerctl", "breathing", "--speed", "fast"],
            &["razerctl", "reactive", "--duration", "256"],
            &["razerctl", "static", "--color", "red"],
            &["razerctl", "breathing", "--pulse-color", "0x12345"],
            &["razerctl", "reset", "--settle-ms=-1"],
        ];

        for args in invalid {
            let err = command().try_get_matches_from(args).err();
            assert_eq!(err.map(|err| err.kind()), Some(ErrorKind::ValueValidation), "{args:?}");
        }
    }

    #[test]
    fn cli_values_are_applied() {
        let config = config_from(&[
            "razerctl",
            "-d",
            "0",
            "wave",
            "--speed",
            "20",
            "--direction",
            "reverse",
        ]);
        assert_eq!(config.device.as_deref(), Some("0"));
        assert_eq!(
            config.effect_command(),
            EffectCommand::Wave { speed: 20, direction: Direction::Reverse }
        );

        let config = config_from(&[
            "razerctl",
            "breathing",
            "--color",
            "0x010203",
            "--pulse-color",
            "0x040506",
            "--speed",
            "0",
        ]);
        assert_eq!(
            config.effect_command(),
            EffectCommand::Breathing {
                base: Rgb { r: 1, g: 2, b: 3 },
                pulse: Rgb { r: 4, g: 5, b: 6 },
                speed: 0
            }
        );

        // Global options are accepted after the subcommand.
        let config = config_from(&[
            "razerctl",
            "reactive",
            "--color",
            "0x0a141e",
            "--duration",
            "7",
            "--settle-ms",
            "0",
        ]);
        assert_eq!(config.settle_time.0, 0);
        assert_eq!(
            config.effect_command(),
            EffectCommand::Reactive { color: Rgb { r: 10, g: 20, b: 30 }, duration: 7 }
        );
    }

    #[test]
    fn missing_color_is_queried() {
        let mut config = config_from(&["razerctl", "static"]);
        assert_eq!(config.color, None);

        let mut input = &b"red\n0x0a141e\n"[..];
        config.complete(&mut input).unwrap();

        assert_eq!(config.effect_command(), EffectCommand::Static(Rgb { r: 10, g: 20, b: 30 }));
        assert!(config.interactive);
    }

    #[test]
    fn closed_input_aborts_color_query() {
        let mut config = config_from(&["razerctl", "reactive"]);

        let mut input = &b""[..];
        assert_eq!(config.complete(&mut input), Err(Error::InputClosed("color")));

        let mut input = &b"nope\n"[..];
        assert_eq!(config.complete(&mut input), Err(Error::InputClosed("color")));
    }

    #[test]
    fn configured_color_skips_query() {
        let mut config = config_from(&["razerctl", "static", "-c", "0x00ff00"]);

        let mut input = &b""[..];
        config.complete(&mut input).unwrap();

        assert_eq!(config.effect_command(), EffectCommand::Static(Rgb { r: 0, g: 255, b: 0 }));
        assert!(!config.interactive);

        let mut config = config_from(&["razerctl", "wave"]);
        assert_eq!(config.complete(&mut input), Ok(()));
    }

    #[test]
    fn find_device_by_index_or_pid() {
        let devices = devices();

        assert_eq!(find_device(&devices, "1"), Some(1));
        assert_eq!(find_device(&devices, "0x0a01"), Some(0));
        assert_eq!(find_device(&devices, "0X0A02"), Some(1));
        assert_eq!(find_device(&devices, "2"), None);
        assert_eq!(find_device(&devices, "0x0a03"), None);
        assert_eq!(find_device(&devices, "mamba"), None);
    }

    #[test]
    fn select_device_from_cli() {
        let mut input = &b""[..];

        let mut config = Config { device: Some("0x0a02".into()), ..Config::default() };
        let selected = select_device(devices(), &mut config, &mut input).unwrap();
        assert_eq!(selected.name, "Razer Cynosa Chroma");

        let mut config = Config { device: Some("7".into()), ..Config::default() };
        let err = select_device(devices(), &mut config, &mut input).unwrap_err();
        assert_eq!(err, Error::DeviceNotFound("7".into()));
    }

    #[test]
    fn select_device_from_input() {
        let mut config = Config::default();
        let mut input = &b"9\n1\n"[..];

        let selected = select_device(devices(), &mut config, &mut input).unwrap();

        assert_eq!(selected.name, "Razer Cynosa Chroma");
        assert_eq!(config.device.as_deref(), Some("1"));
        assert!(config.interactive);
    }

    #[test]
    fn closed_input_aborts_device_selection() {
        let mut config = Config::default();
        let mut input = &b""[..];

        let err = select_device(devices(), &mut config, &mut input).unwrap_err();
        assert_eq!(err, Error::InputClosed("device"));
    }

    #[test]
    fn select_device_without_devices() {
        let mut config = config_from(&["razerctl", "static"]);
        let mut input = &b"0x0a141e\n"[..];

        let err = select_device(Vec::new(), &mut config, &mut input).unwrap_err();
        assert_eq!(err, Error::NoDevicesFound);

        // Nothing was read, the color query never happens without a device.
        assert_eq!(input, &b"0x0a141e\n"[..]);
        assert_eq!(config.color, None);
    }

    #[test]
    fn select_single_device_without_prompt() {
        let mut config = Config::default();
        let mut input = &b""[..];

        let selected =
            select_device(vec![device("Razer Mamba Chroma", 0x0A01)], &mut config, &mut input);

        assert_eq!(selected.unwrap().product_id, 0x0A01);
        assert!(!config.interactive);
    }

    #[test]
    fn config_effect_commands() {
        let color = Rgb { r: 10, g: 20, b: 30 };
        let config = Config { color: Some(color), ..Config::default() };

        assert_eq!(
            Config { effect: Effect::Reactive, ..config }.effect_command(),
            EffectCommand::Reactive { color, duration: 50 }
        );
        assert_eq!(
            Config { effect: Effect::Breathing, speed: Speed(3), ..Config::default() }
                .effect_command(),
            EffectCommand::Breathing { base: Rgb::WHITE, pulse: Rgb::default(), speed: 3 }
        );
        assert_eq!(
            Config { effect: Effect::Wave, direction: Direction::Reverse, ..Config::default() }
                .effect_command(),
            EffectCommand::Wave { speed: 128, direction: Direction::Reverse }
        );
        assert_eq!(
            Config { effect: Effect::Reset, ..Config::default() }.effect_command(),
            EffectCommand::Reset
        );
    }

    #[test]
    fn reapply_command_line() {
        let config = Config {
            device: Some("0".into()),
            effect: Effect::Wave,
            speed: Speed(20),
            direction: Direction::Reverse,
            ..Config::default()
        };

        assert_eq!(
            config.to_string(),
            "razerctl \\\n  --device 0 \\\n  wave \\\n  --speed 20 \\\n  --direction reverse"
        );

        let config =
            Config { effect: Effect::Reset, settle_time: SettleTime(0), ..Config::default() };
        assert_eq!(config.to_string(), "razerctl \\\n  --settle-ms 0 \\\n  reset");
    }
}
