//! Script catalog: the configured entries, the tab order, and the default tab.
//!
//! The catalog is built once at startup from three raw settings and is
//! read-only afterwards. Entries are not validated beyond the
//! shape of the JSON array: a missing field becomes an empty string and an
//! unknown `type` is only rejected when the script is run.

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Setting key holding the JSON array of script entries.
pub const SCRIPTS_KEY: &str = "SCRIPTS_JSON";

/// Setting key holding the comma-separated group list.
pub const GROUPS_KEY: &str = "GROUPS";

/// Setting key holding the default group name.
pub const DEFAULT_TAB_KEY: &str = "ACTIVE_TAB";

/// One launchable script as configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptEntry {
    /// Button text.
    pub label: String,
    /// Filesystem path handed to the interpreter. Not checked at load time.
    pub path: String,
    /// Raw runtime identifier (the `type` key), resolved to a `ScriptType`
    /// at run time.
    pub kind: String,
    /// Group (tab) the entry is listed under.
    pub group: String,
}

impl ScriptEntry {
    /// Build an entry from a JSON object, defaulting absent fields to `""`.
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            label: string_field(obj, "label"),
            path: string_field(obj, "path"),
            kind: string_field(obj, "type"),
            group: string_field(obj, "group"),
        }
    }
}

/// Read a field as text. Strings are taken as-is, other scalars use their
/// JSON rendering, and `null` or a missing key yields an empty string.
fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Immutable script catalog shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Entries in configuration order.
    pub scripts: Vec<ScriptEntry>,
    /// Tab order. Never empty.
    pub groups: Vec<String>,
    /// Tab shown when a request does not name one.
    pub default_tab: String,
}

impl Catalog {
    /// Build a catalog from the three raw settings.
    ///
    /// Each value is `None` when the setting is absent. Absent or blank
    /// values fail with [`ConfigError::Missing`]; a scripts value that is not
    /// a JSON array fails with [`ConfigError::Malformed`].
    pub fn from_settings(
        scripts_json: Option<&str>,
        groups: Option<&str>,
        default_tab: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let scripts_json = require(SCRIPTS_KEY, scripts_json)?;
        let groups_raw = require(GROUPS_KEY, groups)?;
        let default_tab = require(DEFAULT_TAB_KEY, default_tab)?;

        let scripts = parse_scripts(scripts_json)?;

        let groups = parse_groups(groups_raw);
        if groups.is_empty() {
            return Err(ConfigError::Missing { key: GROUPS_KEY });
        }

        Ok(Self {
            scripts,
            groups,
            default_tab: default_tab.trim().to_string(),
        })
    }

    /// Pick the tab to render: the requested one if any, else the default.
    ///
    /// The requested tab is not checked against `groups`; an unknown tab
    /// simply matches no scripts.
    pub fn resolve_tab<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.default_tab)
    }

    /// Entries whose group equals `tab`, in catalog order.
    pub fn scripts_in<'a>(
        &'a self,
        tab: &'a str,
    ) -> impl Iterator<Item = &'a ScriptEntry> + 'a {
        self.scripts.iter().filter(move |s| s.group == tab)
    }
}

fn require<'a>(key: &'static str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing { key }),
    }
}

/// Parse the scripts setting into entries.
///
/// The value must be a JSON array. Array elements that are not objects are
/// skipped with a warning.
pub fn parse_scripts(raw: &str) -> Result<Vec<ScriptEntry>, ConfigError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ConfigError::Malformed {
        key: SCRIPTS_KEY,
        reason: e.to_string(),
    })?;

    let Value::Array(items) = value else {
        return Err(ConfigError::Malformed {
            key: SCRIPTS_KEY,
            reason: "SCRIPTS_JSON must be a JSON array of objects".to_string(),
        });
    };

    let mut scripts = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Object(obj) => scripts.push(ScriptEntry::from_object(obj)),
            other => {
                tracing::warn!(
                    index,
                    value = %other,
                    "Skipping script entry that is not an object"
                );
            }
        }
    }
    Ok(scripts)
}

/// Split a comma-separated group list, trimming each name and dropping
/// empty segments. Order and duplicates are preserved.
pub fn parse_groups(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Group name as shown on its tab: underscores become spaces.
pub fn display_name(group: &str) -> String {
    group.replace('_', " ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const SCRIPTS: &str = r#"[
        {"label": "Backup", "path": "/opt/backup.py", "type": "python", "group": "maintenance"},
        {"label": "Report", "path": "C:/r.ps1", "type": "powershell", "group": "daily_tasks"},
        {"label": "Cleanup", "path": "/opt/clean.py", "type": "python", "group": "maintenance"}
    ]"#;

    fn catalog() -> Catalog {
        Catalog::from_settings(
            Some(SCRIPTS),
            Some("maintenance, daily_tasks"),
            Some("maintenance"),
        )
        .expect("valid catalog")
    }

    #[test]
    fn loads_all_three_settings() {
        let catalog = catalog();
        assert_eq!(catalog.scripts.len(), 3);
        assert_eq!(catalog.groups, vec!["maintenance", "daily_tasks"]);
        assert_eq!(catalog.default_tab, "maintenance");
        assert_eq!(catalog.scripts[1].kind, "powershell");
    }

    #[test]
    fn missing_scripts_is_fatal() {
        let err = Catalog::from_settings(None, Some("a"), Some("a")).unwrap_err();
        assert_matches!(err, ConfigError::Missing { key: SCRIPTS_KEY });
    }

    #[test]
    fn blank_default_tab_is_fatal() {
        let err = Catalog::from_settings(Some("[]"), Some("a"), Some("   ")).unwrap_err();
        assert_matches!(err, ConfigError::Missing { key: DEFAULT_TAB_KEY });
    }

    #[test]
    fn empty_groups_is_fatal() {
        let err = Catalog::from_settings(Some("[]"), Some(""), Some("a")).unwrap_err();
        assert_matches!(err, ConfigError::Missing { key: GROUPS_KEY });

        let err = Catalog::from_settings(Some("[]"), Some(" , ,"), Some("a")).unwrap_err();
        assert_matches!(err, ConfigError::Missing { key: GROUPS_KEY });
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = Catalog::from_settings(Some("[{"), Some("a"), Some("a")).unwrap_err();
        assert_matches!(err, ConfigError::Malformed { key: SCRIPTS_KEY, .. });
    }

    #[test]
    fn non_array_json_is_malformed() {
        let err = parse_scripts(r#"{"label": "x"}"#).unwrap_err();
        assert_matches!(
            err,
            ConfigError::Malformed { key: SCRIPTS_KEY, ref reason } if reason.contains("array")
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let scripts = parse_scripts(r#"[{"label": "Only label"}]"#).unwrap();
        assert_eq!(
            scripts,
            vec![ScriptEntry {
                label: "Only label".to_string(),
                ..ScriptEntry::default()
            }]
        );
    }

    #[test]
    fn non_string_scalars_use_json_text() {
        let scripts = parse_scripts(r#"[{"label": 42, "group": true, "path": null}]"#).unwrap();
        assert_eq!(scripts[0].label, "42");
        assert_eq!(scripts[0].group, "true");
        assert_eq!(scripts[0].path, "");
    }

    #[test]
    fn non_object_elements_are_skipped() {
        let scripts = parse_scripts(r#"[1, "two", {"label": "three"}]"#).unwrap();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].label, "three");
    }

    #[test]
    fn groups_are_trimmed_ordered_and_not_deduplicated() {
        assert_eq!(
            parse_groups(" b ,a,, b ,"),
            vec!["b".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn resolve_tab_prefers_request() {
        let catalog = catalog();
        assert_eq!(catalog.resolve_tab(None), "maintenance");
        assert_eq!(catalog.resolve_tab(Some("daily_tasks")), "daily_tasks");
        assert_eq!(catalog.resolve_tab(Some("nope")), "nope");
    }

    #[test]
    fn scripts_in_keeps_catalog_order() {
        let catalog = catalog();
        let labels: Vec<_> = catalog
            .scripts_in("maintenance")
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Backup", "Cleanup"]);
        assert_eq!(catalog.scripts_in("unknown").count(), 0);
    }

    #[test]
    fn display_name_replaces_underscores() {
        assert_eq!(display_name("daily_tasks_am"), "daily tasks am");
        assert_eq!(display_name("plain"), "plain");
    }
}
