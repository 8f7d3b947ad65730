//! HID access abstraction.

use std::ffi::{CStr, CString};

use hidapi::{HidApi, HidDevice};
use tracing::{debug, warn};

use crate::error::Error;

/// Interface record reported by the HID layer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct RawInterface {
    pub product_id: u16,
    pub path: CString,
    /// Interface number, `-1` if unknown.
    pub interface_number: i32,
    pub serial_number: Option<String>,
    pub product_string: Option<String>,
}

/// Platform HID layer.
pub(crate) trait HidBackend {
    /// Open interface handle, closed when dropped.
    type Interface: FeatureReportWriter;

    /// List all interfaces of a vendor.
    fn enumerate(&mut self, vendor_id: u16) -> Result<Vec<RawInterface>, Error>;

    /// Open an interface by its platform path.
    fn open(&self, path: &CStr) -> Result<Self::Interface, Error>;
}

/// HID interface accepting feature reports.
pub(crate) trait FeatureReportWriter {
    /// Write a feature report, returning the number of bytes written.
    fn send_feature_report(&self, data: &[u8]) -> Result<usize, Error>;
}

/// [`HidBackend`] backed by the system hidapi library.
pub(crate) struct HidApiBackend {
    api: HidApi,
}

impl HidApiBackend {
    pub(crate) fn new() -> Result<Self, Error> {
        let api =
            HidApi::new().map_err(|err| Error::Hid(format!("unable to access HID: {err}")))?;
        Ok(Self { api })
    }
}

impl HidBackend for HidApiBackend {
    type Interface = HidDevice;

    fn enumerate(&mut self, vendor_id: u16) -> Result<Vec<RawInterface>, Error> {
        if let Err(err) = self.api.refresh_devices() {
            warn!("HID enumeration for VID 0x{vendor_id:04X} failed: {err}");
            return Err(err.into());
        }

        let interfaces: Vec<_> = self
            .api
            .device_list()
            .filter(|info| info.vendor_id() == vendor_id)
            .map(|info| RawInterface {
                product_id: info.product_id(),
                path: info.path().to_owned(),
                interface_number: info.interface_number(),
                serial_number: info.serial_number().map(str::to_owned),
                product_string: info.product_string().map(str::to_owned),
            })
            .collect();

        debug!("Enumerated {} HID interfaces for VID 0x{vendor_id:04X}", interfaces.len());

        Ok(interfaces)
    }

    fn open(&self, path: &CStr) -> Result<HidDevice, Error> {
        self.api.open_path(path).map_err(|err| Error::InterfaceOpenFailed {
            path: path.to_string_lossy().into_owned(),
            reason: err.to_string(),
        })
    }
}

impl FeatureReportWriter for HidDevice {
    fn send_feature_report(&self, data: &[u8]) -> Result<usize, Error> {
        // hidapi only reports failure, success means the whole frame was accepted.
        HidDevice::send_feature_report(self, data)?;
        Ok(data.len())
    }
}
