//! Record processing logic.
//!
//! - [`filter`] - ignore-list filtering of interface records
//! - [`public_ip`] - IPv4 parsing and public-address classification

mod filter;
mod public_ip;

pub use filter::filter_ignored;
pub use public_ip::{is_public_ipv4, parse_interface_ip};
