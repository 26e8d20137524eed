//! vManage device inventory model.

use serde::{Deserialize, Serialize};

fn na() -> String {
    "N/A".to_string()
}

/// One device from the `/dataservice/device` inventory.
///
/// Optional inventory fields default to `"N/A"` so report cells never go
/// blank when the controller omits them. Read-only after parsing.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Device {
    /// System IP, the device identifier used for interface queries.
    #[serde(rename = "system-ip")]
    pub system_ip: String,
    /// Configured hostname.
    #[serde(rename = "host-name", default = "na")]
    pub host_name: String,
    /// Site the device is assigned to.
    #[serde(rename = "site-id", default = "na")]
    pub site_id: String,
    /// Controller-side reachability state ("reachable" / "unreachable").
    #[serde(default = "na")]
    pub reachability: String,
    /// Software version reported by the device.
    #[serde(default = "na")]
    pub version: String,
    /// Chassis UUID (not present on all device classes).
    #[serde(default)]
    pub uuid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_entry() {
        let json = r#"{
            "system-ip": "10.255.0.11",
            "host-name": "branch-11",
            "site-id": "11",
            "reachability": "reachable",
            "version": "20.6.3",
            "uuid": "a1b2c3d4-0000-1111-2222-333344445555",
            "device-type": "vedge"
        }"#;
        let device: Device = serde_json::from_str(json).expect("Error parsing device");
        assert_eq!(device.system_ip, "10.255.0.11");
        assert_eq!(device.host_name, "branch-11");
        assert_eq!(device.site_id, "11");
        assert_eq!(device.reachability, "reachable");
        assert_eq!(device.version, "20.6.3");
        assert!(device.uuid.is_some());
    }

    #[test]
    fn test_missing_fields_default_to_na() {
        let json = r#"{"system-ip": "10.255.0.12"}"#;
        let device: Device = serde_json::from_str(json).expect("Error parsing device");
        assert_eq!(device.host_name, "N/A");
        assert_eq!(device.site_id, "N/A");
        assert_eq!(device.reachability, "N/A");
        assert_eq!(device.version, "N/A");
        assert_eq!(device.uuid, None);
    }

    #[test]
    fn test_missing_system_ip_is_an_error() {
        let json = r#"{"host-name": "orphan"}"#;
        let result: Result<Device, _> = serde_json::from_str(json);
        assert!(result.is_err(), "system-ip is required");
    }
}
