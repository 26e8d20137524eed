//! Domain models for the public IP report.
//!
//! - [`Device`] - a managed device from the controller's inventory
//! - [`RawInterface`] - wire shape of one interface entry
//! - [`InterfaceRecord`] - a reportable interface with a validated public address

mod device;
mod interface;

pub use device::Device;
pub use interface::{InterfaceRecord, RawInterface};
