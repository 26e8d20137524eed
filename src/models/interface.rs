//! Interface inventory models.

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::Device;

/// Wire shape of one entry from `/dataservice/device/interface`.
///
/// Every field is optional: loopback and system interfaces routinely omit the
/// address, and some entries carry no name at all.
#[derive(Deserialize, Debug, Clone)]
pub struct RawInterface {
    /// Interface name, e.g. "ge0/0.22".
    #[serde(default)]
    pub ifname: Option<String>,
    /// Assigned address, possibly with a "/mask" suffix.
    #[serde(rename = "ip-address", default)]
    pub ip_address: Option<String>,
    /// Administrative status ("Up" / "Down").
    #[serde(rename = "if-admin-status", default)]
    pub admin_status: Option<String>,
    /// Operational status ("Up" / "Down").
    #[serde(rename = "if-oper-status", default)]
    pub oper_status: Option<String>,
}

/// A reportable interface: device columns plus a validated public address.
/// Never mutated after creation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub system_ip: String,
    pub host_name: String,
    pub site_id: String,
    pub reachability: String,
    pub version: String,
    pub ifname: String,
    pub public_ip: Ipv4Addr,
    pub admin_status: String,
    pub oper_status: String,
}

impl InterfaceRecord {
    /// Build a record from a device and one raw interface entry.
    ///
    /// The caller has already validated `public_ip`; statuses default to
    /// "N/A" when the controller omits them.
    pub fn new(device: &Device, ifname: String, public_ip: Ipv4Addr, raw: &RawInterface) -> Self {
        InterfaceRecord {
            system_ip: device.system_ip.clone(),
            host_name: device.host_name.clone(),
            site_id: device.site_id.clone(),
            reachability: device.reachability.clone(),
            version: device.version.clone(),
            ifname,
            public_ip,
            admin_status: raw.admin_status.clone().unwrap_or_else(|| "N/A".to_string()),
            oper_status: raw.oper_status.clone().unwrap_or_else(|| "N/A".to_string()),
        }
    }

    /// Report cells in column order.
    pub fn cells(&self) -> [String; 7] {
        [
            self.system_ip.clone(),
            self.host_name.clone(),
            self.reachability.clone(),
            self.version.clone(),
            self.site_id.clone(),
            self.ifname.clone(),
            self.public_ip.to_string(),
        ]
    }
}
