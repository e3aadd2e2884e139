//! # Device Channel
//!
//! Setup of the serial link and the background worker that owns it. The
//! rest of the application only ever sees typed events in the queue; no
//! device state is shared across threads.

mod worker;

pub use worker::Worker;

use std::io::{Read, Write};

use log::info;
use serialport::SerialPort;

use crate::core::config::ResolvedConfig;

/// Byte-stream handle to the device. The worker needs read/write plus
/// `Send` and nothing else; production hands it an opened serial port,
/// tests hand it an in-memory cursor.
pub trait Channel: Read + Write + Send {}

impl<T: Read + Write + Send> Channel for T {}

/// Open and configure the device node. Failure here is fatal and happens
/// before any terminal state is touched.
pub fn open(config: &ResolvedConfig) -> Result<Box<dyn SerialPort>, serialport::Error> {
    info!(
        "opening serial connection to {} at {} baud",
        config.device_path, config.baud_rate
    );

    let port = serialport::new(&config.device_path, config.baud_rate)
        .timeout(config.read_timeout)
        .open()?;

    info!("serial connection established on {}", config.device_path);
    Ok(port)
}
