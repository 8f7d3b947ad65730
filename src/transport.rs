//! Report delivery.

use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::backend::{FeatureReportWriter, HidBackend};
use crate::discovery::{DeviceDescriptor, InterfaceRef};
use crate::error::Error;
use crate::report::{ReportBuffer, FRAME_LEN};

/// Delay between opening an interface and writing to it.
///
/// Some units drop reports written immediately after the interface was opened.
pub(crate) const SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Sends reports to every interface of a device.
pub(crate) struct Session<'a, B> {
    backend: &'a B,
    settle_delay: Duration,
}

impl<'a, B: HidBackend> Session<'a, B> {
    pub(crate) fn new(backend: &'a B) -> Self {
        Self { backend, settle_delay: SETTLE_DELAY }
    }

    pub(crate) fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    /// Write a report to all interfaces of a device.
    ///
    /// Returns `true` if at least one interface accepted the report.
    pub(crate) fn send(&self, device: &DeviceDescriptor, report: &ReportBuffer) -> bool {
        let frame = report.to_frame();
        debug!("Sending to {}: {:02X?}", device.name, &frame[..]);

        let mut success = false;
        for interface in &device.interfaces {
            match self.send_to_interface(interface, &frame) {
                Ok(()) => {
                    info!(
                        "Interface {} ({}) accepted report",
                        interface.path.to_string_lossy(),
                        interface.interface_number
                    );
                    success = true;
                },
                Err(err) => warn!("Skipping interface: {err}"),
            }
        }

        success
    }

    /// Open, write and close a single interface.
    fn send_to_interface(&self, interface: &InterfaceRef, frame: &[u8]) -> Result<(), Error> {
        let device = self.backend.open(&interface.path)?;

        if !self.settle_delay.is_zero() {
            thread::sleep(self.settle_delay);
        }

        let written = device.send_feature_report(frame);

        // Close before reporting the outcome.
        drop(device);

        match written? {
            FRAME_LEN => Ok(()),
            written => Err(Error::WriteMismatch {
                path: interface.path.to_string_lossy().into_owned(),
                expected: FRAME_LEN,
                written,
            }),
        }
    }
}
