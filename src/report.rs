//! Razer feature report encoding.
//!
//! Every command is a fixed 90 byte report:
//!
//! | offset | field                          |
//! |--------|--------------------------------|
//! | 0      | report ID placeholder (0x00)   |
//! | 1      | transaction ID                 |
//! | 2..4   | status and remaining packets   |
//! | 4      | protocol type                  |
//! | 5      | payload size                   |
//! | 6      | command class                  |
//! | 7      | command ID                     |
//! | 8..88  | arguments                      |
//! | 88     | checksum                       |
//! | 89     | reserved                       |

use std::fmt::{self, Debug, Formatter};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Error;

/// Length of an encoded report.
pub(crate) const REPORT_LEN: usize = 90;

/// Length of a report on the wire, including the leading report ID.
pub(crate) const FRAME_LEN: usize = REPORT_LEN + 1;

/// Maximum number of argument bytes.
pub(crate) const MAX_ARGS: usize = 80;

const CHECKSUM_OFFSET: usize = 88;

/// Encoded feature report.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) struct ReportBuffer([u8; REPORT_LEN]);

impl ReportBuffer {
    pub(crate) fn as_bytes(&self) -> &[u8; REPORT_LEN] {
        &self.0
    }

    pub(crate) fn checksum(&self) -> u8 {
        self.0[CHECKSUM_OFFSET]
    }

    /// Feature report frame with the zero report ID prepended.
    pub(crate) fn to_frame(&self) -> Bytes {
        let mut frame = BytesMut::with_capacity(FRAME_LEN);
        frame.put_u8(0x00);
        frame.put_slice(&self.0);
        frame.freeze()
    }
}

impl Debug for ReportBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ReportBuffer({:02X?})", &self.0[..])
    }
}

/// XOR of bytes 2 through 87.
pub(crate) fn checksum(report: &[u8; REPORT_LEN]) -> u8 {
    report[2..CHECKSUM_OFFSET].iter().fold(0, |crc, byte| crc ^ byte)
}

/// Encode a command into a feature report.
pub(crate) fn build_report(
    transaction_id: u8,
    command_class: u8,
    command_id: u8,
    payload_size: u8,
    args: &[u8],
) -> Result<ReportBuffer, Error> {
    if args.len() > MAX_ARGS {
        return Err(Error::ArgumentsTooLong { len: args.len(), max: MAX_ARGS });
    }

    let mut report = [0u8; REPORT_LEN];

    let mut buf = &mut report[..CHECKSUM_OFFSET];

    // Report ID.
    buf.put_u8(0x00);

    buf.put_u8(transaction_id);

    // Status and remaining packets.
    buf.put_slice(&[0x00; 2]);

    // Protocol type.
    buf.put_u8(0x00);

    buf.put_u8(payload_size);
    buf.put_u8(command_class);
    buf.put_u8(command_id);
    buf.put_slice(args);

    report[CHECKSUM_OFFSET] = checksum(&report);

    Ok(ReportBuffer(report))
}
