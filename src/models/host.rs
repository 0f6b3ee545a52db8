//! Inventory host data model.
//!
//! Only `status` is required on every record. `hostname` and the `ips` entries
//! are checked when an online host is classified, so an offline record of any
//! shape never fails a run.

use serde::Deserialize;
use serde_json::Value;

/// Status value that marks a host as eligible for classification.
pub const ONLINE_STATUS: &str = "online";

/// One server entry as returned by the inventory API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HostRecord {
    /// Server hostname.
    pub hostname: Option<String>,
    /// Lifecycle status, only `online` hosts are classified.
    pub status: String,
    /// Address entries shaped `{"ip": {"ip": "10.0.0.5"}}`, in API order.
    pub ips: Option<Vec<Value>>,
}

impl HostRecord {
    pub fn is_online(&self) -> bool {
        self.status == ONLINE_STATUS
    }

    /// Address strings of this host, in API order.
    ///
    /// `None` marks an entry without a string at `ip.ip`.
    pub fn addresses(&self) -> impl Iterator<Item = Option<&str>> {
        self.ips
            .iter()
            .flatten()
            .map(|entry| entry.pointer("/ip/ip").and_then(Value::as_str))
    }
}

#[cfg(test)]
impl HostRecord {
    pub fn new(hostname: &str, status: &str, ips: &[&str]) -> HostRecord {
        HostRecord {
            hostname: Some(hostname.to_string()),
            status: status.to_string(),
            ips: Some(
                ips.iter()
                    .map(|ip| serde_json::json!({ "ip": { "ip": ip } }))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_ips() {
        let json = r#"{"hostname":"web1","status":"online","ips":[{"ip":{"ip":"10.0.0.5"}},{"ip":{"ip":"10.0.1.5"}}],"rack":"r1"}"#;
        let host: HostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(host, HostRecord::new("web1", "online", &["10.0.0.5", "10.0.1.5"]));
        assert!(host.is_online());
        assert_eq!(
            host.addresses().collect::<Vec<_>>(),
            vec![Some("10.0.0.5"), Some("10.0.1.5")]
        );
    }

    #[test]
    fn test_missing_fields_decode_as_none() {
        let host: HostRecord = serde_json::from_str(r#"{"status":"offline"}"#).unwrap();
        assert_eq!(host.hostname, None);
        assert_eq!(host.ips, None);
        assert_eq!(host.addresses().count(), 0);

        let host: HostRecord =
            serde_json::from_str(r#"{"hostname":null,"status":"offline","ips":null}"#).unwrap();
        assert_eq!(host.hostname, None);
        assert!(!host.is_online());
    }

    #[test]
    fn test_odd_ip_entries_are_none() {
        let json = r#"{"hostname":"x","status":"online","ips":[{"ip":null},{"ip":{"ip":4}},"10.0.0.1",{"ip":{"ip":"10.0.0.2"}}]}"#;
        let host: HostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            host.addresses().collect::<Vec<_>>(),
            vec![None, None, None, Some("10.0.0.2")]
        );
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert!(!HostRecord::new("a", "Online", &[]).is_online());
    }
}
