//! vManage REST API interaction.
//!
//! - [`client`] - session login and inventory queries

mod client;

pub use client::{
    parse_device_list, parse_interface_list, records_from_response, Session, VmanageClient,
};
