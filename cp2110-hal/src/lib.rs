#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod driver;
mod error;
pub mod protocol;
pub mod transport;
mod version;

pub use constants::{CP2110_PID, SILABS_VID};
pub use driver::{CP2110, DeviceSelector};
pub use error::{DecodeError, Error};
pub use transport::HidTransport;
pub use version::VersionInfo;
