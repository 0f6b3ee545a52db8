//! INI file parsing.
//!
//! Accepts the dialect written for the tool: `[section]` headers, `key = value`
//! or `key: value` options, `#`/`;` full-line comments and a `[DEFAULT]`
//! section inherited by every other section.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Section holding the tool's settings.
pub const CONFIG_SECTION: &str = "config";

const DEFAULT_SECTION: &str = "DEFAULT";

/// Flat key/value mapping of one section.
pub type ConfigMap = HashMap<String, String>;

static SECTION_REGEX: OnceLock<Regex> = OnceLock::new();
static OPTION_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_section_regex() -> &'static Regex {
    SECTION_REGEX.get_or_init(|| Regex::new(r"^\[([^\]]+)\]$").expect("Invalid Regex"))
}

fn get_option_regex() -> &'static Regex {
    OPTION_REGEX.get_or_init(|| Regex::new(r"^([^=:\s][^=:]*?)\s*[=:]\s*(.*)$").expect("Invalid Regex"))
}

/// Read the `[config]` section of an INI file.
///
/// # Returns
/// * `Ok(ConfigMap)` - keys lower-cased, values trimmed, `[DEFAULT]` merged in
/// * `Err(Error::ConfigNotFound)` - if the file does not exist
/// * `Err` - if the file is unreadable, malformed or has no `[config]` section
pub fn load_config(path: &Path) -> Result<ConfigMap> {
    if !path.exists() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }
    log::debug!("Loading Configuration from: {}", path.display());

    let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sections = parse_ini(&text)?;
    sections
        .remove(CONFIG_SECTION)
        .ok_or_else(|| Error::MissingSection(CONFIG_SECTION.to_string()))
}

/// Parse INI text into sections, with `[DEFAULT]` options copied into each
/// named section that does not set them itself.
pub fn parse_ini(text: &str) -> Result<HashMap<String, ConfigMap>> {
    let mut sections: HashMap<String, ConfigMap> = HashMap::new();
    let mut current: Option<String> = None;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(caps) = get_section_regex().captures(line) {
            let name = caps[1].trim().to_string();
            if sections.contains_key(&name) {
                return Err(Error::ConfigSyntax {
                    line: line_no,
                    reason: format!("duplicate section [{name}]"),
                });
            }
            sections.insert(name.clone(), ConfigMap::new());
            current = Some(name);
            continue;
        }

        let Some(caps) = get_option_regex().captures(line) else {
            return Err(Error::ConfigSyntax {
                line: line_no,
                reason: format!("expected [section] or key = value, got '{line}'"),
            });
        };
        let Some(section) = current.as_ref() else {
            return Err(Error::ConfigSyntax {
                line: line_no,
                reason: "option before any [section] header".to_string(),
            });
        };

        let key = caps[1].trim().to_lowercase();
        let value = caps[2].trim().to_string();
        let options = sections.entry(section.clone()).or_default();
        if options.contains_key(&key) {
            return Err(Error::ConfigSyntax {
                line: line_no,
                reason: format!("duplicate key '{key}' in [{section}]"),
            });
        }
        log::trace!("ini [{section}] {key}={value}");
        options.insert(key, value);
    }

    if let Some(defaults) = sections.remove(DEFAULT_SECTION) {
        for options in sections.values_mut() {
            for (key, value) in &defaults {
                options
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
        }
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic_section() {
        let text = "\
# inventory
[config]
api_url = http://inventory.local/api/servers
subnet: 10.0.0.0/24
NEW_PREFIX=26
";
        let sections = parse_ini(text).unwrap();
        let config = &sections[CONFIG_SECTION];
        assert_eq!(config["api_url"], "http://inventory.local/api/servers");
        assert_eq!(config["subnet"], "10.0.0.0/24");
        assert_eq!(config["new_prefix"], "26");
    }

    #[test]
    fn test_url_with_equals_sign_is_kept_whole() {
        let sections = parse_ini("[config]\napi_url = http://h/api?status=online\n").unwrap();
        assert_eq!(sections["config"]["api_url"], "http://h/api?status=online");
    }

    #[test]
    fn test_default_section_is_inherited() {
        let text = "[DEFAULT]\nnew_prefix = 28\nsubnet = 10.0.0.0/16\n[config]\nsubnet = 10.1.0.0/16\n";
        let sections = parse_ini(text).unwrap();
        assert!(!sections.contains_key("DEFAULT"));
        assert_eq!(sections["config"]["new_prefix"], "28");
        assert_eq!(sections["config"]["subnet"], "10.1.0.0/16");
    }

    #[test]
    fn test_syntax_errors_report_line() {
        match parse_ini("api_url = x\n") {
            Err(Error::ConfigSyntax { line, .. }) => assert_eq!(line, 1),
            other => panic!("unexpected {other:?}"),
        }
        match parse_ini("[config]\n\njust words\n") {
            Err(Error::ConfigSyntax { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected {other:?}"),
        }
        match parse_ini("[config]\nsubnet = a\nSubnet = b\n") {
            Err(Error::ConfigSyntax { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("duplicate"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_section_is_rejected() {
        let text = "[config]\nsubnet = 10.0.0.0/24\n\n[config]\nnew_prefix = 26\n";
        match parse_ini(text) {
            Err(Error::ConfigSyntax { line, reason }) => {
                assert_eq!(line, 4);
                assert_eq!(reason, "duplicate section [config]");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/dir/parser.ini")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
        assert_eq!(
            err.to_string(),
            "Config file /nonexistent/dir/parser.ini does not exist or not accessible"
        );
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[config]\napi_url = http://localhost/api\nsubnet = 10.0.0.0/24\nnew_prefix = 26").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.len(), 3);
        assert_eq!(config["new_prefix"], "26");
    }

    #[test]
    fn test_load_config_without_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[other]\nkey = value").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(Error::MissingSection(s)) if s == "config"
        ));
    }
}
