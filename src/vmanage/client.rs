//! vManage session login and inventory queries.

use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use crate::config;
use crate::creds::Credential;
use crate::error::Error;
use crate::models::{Device, InterfaceRecord, RawInterface};
use crate::processing::{is_public_ipv4, parse_interface_ip};

/// Envelope around the device inventory payload.
#[derive(Deserialize, Debug, Default)]
struct DeviceListResponse {
    #[serde(default)]
    data: Vec<Device>,
}

/// Envelope around the interface inventory payload.
#[derive(Deserialize, Debug, Default)]
struct InterfaceListResponse {
    #[serde(default)]
    data: Vec<RawInterface>,
}

/// Session handle returned by a successful login.
///
/// The JSESSIONID cookie lives in the client's cookie store; the CSRF token
/// (absent on older controller releases) rides along for request headers.
#[derive(Debug, Clone)]
pub struct Session {
    token: Option<String>,
}

/// HTTPS client bound to one controller address.
pub struct VmanageClient {
    base_url: String,
    http: reqwest::Client,
}

impl VmanageClient {
    /// Build a client for `https://{address}:8443`.
    ///
    /// Certificate verification is disabled: vManage controllers commonly
    /// present private-CA certificates.
    pub fn new(address: &str) -> Result<Self, Error> {
        let base_url = format!("https://{address}:{port}", port = config::VMANAGE_PORT);
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .cookie_store(true)
            .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Api {
                url: base_url.clone(),
                reason: format!("building HTTP client: {e}"),
            })?;
        Ok(VmanageClient { base_url, http })
    }

    /// Log in against the controller's session endpoint.
    ///
    /// A successful login answers 2xx with an empty body and sets the session
    /// cookie; a body carrying the HTML login page means the credentials were
    /// rejected.
    pub async fn authenticate(&self, credential: &Credential) -> Result<Session, Error> {
        let url = format!("{}/j_security_check", self.base_url);
        log::info!("Logging in to {url} as {username}", username = credential.username);

        let auth_error = |reason: String| Error::Authentication {
            url: url.clone(),
            reason,
        };

        let response = self
            .http
            .post(&url)
            .form(&[
                ("j_username", credential.username.as_str()),
                ("j_password", credential.password()),
            ])
            .send()
            .await
            .map_err(|e| auth_error(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| auth_error(e.to_string()))?;
        if let Some(reason) = login_failure(status, &body) {
            return Err(auth_error(reason));
        }

        let token = self.fetch_csrf_token().await;
        log::info!("Session established (csrf token: {})", token.is_some());
        Ok(Session { token })
    }

    /// Best-effort CSRF token fetch. Releases since 19.2 serve one; older
    /// controllers answer 404, which is not a failure.
    async fn fetch_csrf_token(&self) -> Option<String> {
        let url = format!("{}/dataservice/client/token", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => response
                .text()
                .await
                .ok()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty() && !t.contains("<html")),
            Ok(response) => {
                log::debug!("No CSRF token from {url}: {status}", status = response.status());
                None
            }
            Err(e) => {
                log::debug!("No CSRF token from {url}: {e}");
                None
            }
        }
    }

    /// Fetch the device inventory.
    pub async fn list_devices(&self, session: &Session) -> Result<Vec<Device>, Error> {
        let url = format!("{}/dataservice/device", self.base_url);
        let body = self.get_text(session, &url).await?;
        let devices = parse_device_list(&body).map_err(|reason| Error::Api { url, reason })?;
        log::info!(
            "Fetched {count} devices from the vManage server",
            count = devices.len()
        );
        Ok(devices)
    }

    /// Fetch one device's interfaces and keep the entries carrying a public
    /// IPv4 address. Entries without one are skipped, never an error.
    pub async fn list_interfaces(
        &self,
        session: &Session,
        device: &Device,
    ) -> Result<Vec<InterfaceRecord>, Error> {
        let url = format!(
            "{}/dataservice/device/interface?deviceId={}",
            self.base_url, device.system_ip
        );
        let body = self.get_text(session, &url).await?;
        let interfaces =
            parse_interface_list(&body).map_err(|reason| Error::Api { url, reason })?;
        Ok(records_from_response(device, interfaces))
    }

    /// Authenticated GET returning the raw body.
    async fn get_text(&self, session: &Session, url: &str) -> Result<String, Error> {
        let api_error = |reason: String| Error::Api {
            url: url.to_string(),
            reason,
        };

        let mut request = self.http.get(url);
        if let Some(token) = &session.token {
            request = request.header("X-XSRF-TOKEN", token);
        }

        let response = request.send().await.map_err(|e| api_error(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(api_error(format!("unexpected status {status}")));
        }
        response.text().await.map_err(|e| api_error(e.to_string()))
    }
}

/// Decide whether a login response means the session was refused.
///
/// Success is a 2xx answer with an empty body; the controller signals bad
/// credentials by serving the HTML login page back, still with a 200.
fn login_failure(status: StatusCode, body: &str) -> Option<String> {
    if !status.is_success() {
        return Some(format!("login endpoint returned {status}"));
    }
    if body.contains("<html") {
        return Some("credentials rejected by controller".to_string());
    }
    None
}

/// Parse the `{"data": [...]}` device inventory payload.
///
/// On a shape mismatch the error names the JSON path that failed.
pub fn parse_device_list(body: &str) -> Result<Vec<Device>, String> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let envelope: DeviceListResponse = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| {
            log::error!("PAYLOAD START:\n\n{body}\n\nPAYLOAD END\n");
            format!("unexpected device payload: path={path} error={e}", path = e.path())
        })?;
    Ok(envelope.data)
}

/// Parse the `{"data": [...]}` interface inventory payload.
pub fn parse_interface_list(body: &str) -> Result<Vec<RawInterface>, String> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let envelope: InterfaceListResponse = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| {
            log::error!("PAYLOAD START:\n\n{body}\n\nPAYLOAD END\n");
            format!(
                "unexpected interface payload: path={path} error={e}",
                path = e.path()
            )
        })?;
    Ok(envelope.data)
}

/// Convert raw interface entries into report records for one device.
///
/// Skips entries with no name, no address, a non-IPv4 address, or a
/// non-public address.
pub fn records_from_response(
    device: &Device,
    interfaces: Vec<RawInterface>,
) -> Vec<InterfaceRecord> {
    let mut records = Vec::new();
    for interface in interfaces {
        let Some(ifname) = interface.ifname.clone() else {
            continue;
        };
        let Some(raw_ip) = interface.ip_address.as_deref() else {
            log::debug!("\t{ifname} carries no address. Skipping.");
            continue;
        };
        let Some(ip) = parse_interface_ip(raw_ip) else {
            log::debug!("\t{ifname} address {raw_ip} is not IPv4. Skipping.");
            continue;
        };
        if !is_public_ipv4(ip) {
            log::info!("\t{ifname} has a private IP: {ip} Skipping.");
            continue;
        }
        log::info!("\t{ifname} has a public IP: {ip} Adding to the list");
        records.push(InterfaceRecord::new(device, ifname, ip, &interface));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_device() -> Device {
        serde_json::from_str(
            r#"{"system-ip": "10.255.0.11", "host-name": "branch-11", "site-id": "11"}"#,
        )
        .expect("Error parsing device")
    }

    #[test]
    fn test_login_rejected_when_body_is_the_login_page() {
        let body = "<html>\n<head><title>vmanage</title></head>\n<body>login</body>\n</html>";
        let reason = login_failure(StatusCode::OK, body).expect("Login page means rejection");
        assert!(reason.contains("rejected"), "Unexpected reason: {reason}");
    }

    #[test]
    fn test_login_rejected_on_error_status() {
        let reason = login_failure(StatusCode::FORBIDDEN, "").expect("403 means rejection");
        assert!(reason.contains("403"), "Unexpected reason: {reason}");
    }

    #[test]
    fn test_login_accepted_on_empty_body() {
        assert_eq!(login_failure(StatusCode::OK, ""), None);
    }

    #[test]
    fn test_parse_device_list() {
        let body = r#"{
            "header": {"generatedOn": 1700000000000},
            "data": [
                {"system-ip": "10.255.0.11", "host-name": "branch-11", "site-id": "11"},
                {"system-ip": "10.255.0.12"}
            ]
        }"#;
        let devices = parse_device_list(body).expect("Error parsing device list");
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].host_name, "branch-11");
        assert_eq!(devices[1].host_name, "N/A");
    }

    #[test]
    fn test_parse_device_list_without_data_key() {
        let devices = parse_device_list("{}").expect("Error parsing device list");
        assert!(devices.is_empty());
    }

    #[test]
    fn test_parse_device_list_bad_shape_names_path() {
        let body = r#"{"data": [{"system-ip": ["not", "a", "string"]}]}"#;
        let err = parse_device_list(body).expect_err("Shape mismatch must fail");
        assert!(err.contains("path="), "Error should carry the JSON path: {err}");
    }

    #[test]
    fn test_parse_interface_list_not_json() {
        let err = parse_interface_list("<html>login</html>").expect_err("HTML must fail");
        assert!(err.contains("unexpected interface payload"));
    }

    #[test]
    fn test_records_keep_only_public_entries() {
        let device = sample_device();
        let body = r#"{"data": [
            {"ifname": "ge0/0", "ip-address": "66.170.10.2/30", "if-admin-status": "Up", "if-oper-status": "Up"},
            {"ifname": "ge0/1", "ip-address": "10.1.1.1/24"},
            {"ifname": "system", "ip-address": "10.255.0.11/32"},
            {"ifname": "loopback0"},
            {"ifname": "ge0/2", "ip-address": "-"},
            {"ip-address": "66.170.10.6/30"}
        ]}"#;
        let interfaces = parse_interface_list(body).expect("Error parsing interface list");
        let records = records_from_response(&device, interfaces);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ifname, "ge0/0");
        assert_eq!(records[0].public_ip.to_string(), "66.170.10.2");
        assert_eq!(records[0].host_name, "branch-11");
        assert_eq!(records[0].admin_status, "Up");
    }

    #[test]
    fn test_records_preserve_payload_order() {
        let device = sample_device();
        let body = r#"{"data": [
            {"ifname": "ge0/3", "ip-address": "81.2.69.142"},
            {"ifname": "ge0/0", "ip-address": "66.170.10.2"}
        ]}"#;
        let interfaces = parse_interface_list(body).expect("Error parsing interface list");
        let records = records_from_response(&device, interfaces);
        let names: Vec<&str> = records.iter().map(|r| r.ifname.as_str()).collect();
        assert_eq!(names, vec!["ge0/3", "ge0/0"]);
    }
}
