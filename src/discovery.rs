//! Device discovery.
//!
//! A single Razer product usually exposes several HID interfaces. Interfaces
//! sharing serial number, product string and product ID are grouped into one
//! [`DeviceDescriptor`], since the lighting command is only accepted by some
//! of them and which one differs between models.

use std::ffi::CString;
use std::fmt::{self, Display, Formatter};

use tracing::debug;

use crate::backend::{HidBackend, RawInterface};
use crate::catalog;

/// Single HID interface of a device.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct InterfaceRef {
    pub path: CString,
    /// Interface number, `-1` if unknown.
    pub interface_number: i32,
}

/// Physical device with all of its HID interfaces.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct DeviceDescriptor {
    pub name: &'static str,
    pub product_id: u16,
    pub serial_number: Option<String>,
    pub product_string: Option<String>,
    pub interfaces: Vec<InterfaceRef>,
}

impl DeviceDescriptor {
    /// Grouping key.
    pub(crate) fn key(&self) -> (Option<&str>, Option<&str>, u16) {
        (self.serial_number.as_deref(), self.product_string.as_deref(), self.product_id)
    }

    fn matches(&self, raw: &RawInterface) -> bool {
        self.key() == (raw.serial_number.as_deref(), raw.product_string.as_deref(), raw.product_id)
    }
}

impl Display for DeviceDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (PID: 0x{:04X}", self.name, self.product_id)?;

        match self.interfaces.len() {
            1 => write!(f, ", 1 interface)"),
            count => write!(f, ", {count} interfaces)"),
        }
    }
}

/// List all supported Razer devices.
///
/// Devices are returned in the order their first interface was enumerated.
/// Enumeration failures result in an empty list.
pub(crate) fn scan<B: HidBackend>(backend: &mut B) -> Vec<DeviceDescriptor> {
    match backend.enumerate(catalog::VENDOR_ID) {
        Ok(interfaces) => group(interfaces),
        Err(_) => Vec::new(),
    }
}

/// Group raw interfaces by physical device.
fn group(interfaces: Vec<RawInterface>) -> Vec<DeviceDescriptor> {
    let mut devices: Vec<DeviceDescriptor> = Vec::new();

    for raw in interfaces {
        let name = match catalog::name_for(raw.product_id) {
            Some(name) => name,
            None => continue,
        };

        if raw.path.as_bytes().is_empty() {
            debug!("Dropping interface of PID 0x{:04X} without path", raw.product_id);
            continue;
        }

        let interface =
            InterfaceRef { path: raw.path.clone(), interface_number: raw.interface_number };

        match devices.iter_mut().find(|device| device.matches(&raw)) {
            Some(device) => device.interfaces.push(interface),
            None => devices.push(DeviceDescriptor {
                name,
                product_id: raw.product_id,
                serial_number: raw.serial_number,
                product_string: raw.product_string,
                interfaces: vec![interface],
            }),
        }
    }

    devices
}
