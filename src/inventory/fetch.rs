//! Inventory API client.
//!
//! A single blocking GET per run; the body is decoded into [`HostRecord`]s.

use crate::error::{Error, Result};
use crate::models::HostRecord;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Fetch the host inventory from `api_url`.
///
/// The request carries `Accept: application/json` and has no timeout.
/// A non-success status is logged and the body is still decoded.
///
/// # Returns
/// * `Ok(Vec<HostRecord>)` - hosts in API order
/// * `Err(Error::Fetch)` - connection or transfer failure
/// * `Err(Error::Decode)` - body is not the expected JSON array
pub fn fetch_inventory(api_url: &str) -> Result<Vec<HostRecord>> {
    log::debug!("GET {api_url}");

    let client = reqwest::blocking::Client::builder()
        .timeout(None::<Duration>)
        .build()?;
    let response = client
        .get(api_url)
        .header(ACCEPT, "application/json")
        .send()?;

    let status = response.status();
    if status.is_success() {
        log::debug!("API responded {status}");
    } else {
        log::warn!("API responded {status} for {api_url}");
    }

    let body = response.text()?;
    log::debug!("API body length: {}", body.len());
    decode_inventory(&body)
}

/// Decode an inventory JSON document.
///
/// Errors name the JSON path of the offending value, e.g. `[2].status`.
pub fn decode_inventory(body: &str) -> Result<Vec<HostRecord>> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| Error::Decode {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_inventory() {
        let body = r#"[
            {"hostname": "web1", "status": "online", "ips": [{"ip": {"ip": "10.0.0.5"}}]},
            {"hostname": "db1", "status": "offline", "ips": []}
        ]"#;
        let hosts = decode_inventory(body).unwrap();
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].hostname.as_deref(), Some("web1"));
        assert_eq!(hosts[0].addresses().collect::<Vec<_>>(), vec![Some("10.0.0.5")]);
        assert!(!hosts[1].is_online());
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_inventory("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_error_has_path() {
        let body = r#"[{"hostname": "a", "status": "online"}, {"hostname": "b"}]"#;
        match decode_inventory(body) {
            Err(Error::Decode { path, message }) => {
                assert!(path.starts_with("[1]"), "{path}");
                assert!(message.contains("status"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_decode_accepts_loose_offline_records() {
        let body = r#"[
            {"hostname": "web1", "status": "online", "ips": [{"ip": {"ip": "10.0.0.5"}}]},
            {"status": "offline", "ips": null},
            {"hostname": "old", "status": "offline", "ips": [{"ip": null}]}
        ]"#;
        let hosts = decode_inventory(body).unwrap();
        assert_eq!(hosts.len(), 3);
        assert_eq!(hosts[1].hostname, None);
        assert_eq!(hosts[2].addresses().collect::<Vec<_>>(), vec![None]);
    }

    #[test]
    fn test_decode_not_an_array() {
        assert!(matches!(
            decode_inventory(r#"{"servers": []}"#),
            Err(Error::Decode { .. })
        ));
        assert!(matches!(
            decode_inventory("<html>502</html>"),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_fetch_invalid_url() {
        assert!(matches!(
            fetch_inventory("not a url"),
            Err(Error::Fetch(_))
        ));
    }
}
