use crate::error::{SecretsError, SecretsResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// How a document value becomes source text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Encoding {
    /// Emitted verbatim as a literal of the declared type (`1883`).
    #[serde(rename = "raw")]
    RawConstant,
    /// Emitted as a double-quoted, escaped C string literal.
    #[serde(rename = "string")]
    StringLiteral,
    /// The value names a PEM certificate file whose lines are embedded.
    #[serde(rename = "pem")]
    PemCertificate,
}

/// One expected key of the secrets document.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaEntry {
    /// Declared C++ type, e.g. `const char*` or `uint16_t`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Key name, also used as the C++ identifier.
    pub name: String,
    /// Value written by the template writer.
    #[serde(default = "empty_string")]
    pub default: Value,
    /// Rendering strategy.
    pub encoding: Encoding,
}

fn empty_string() -> Value {
    Value::String(String::new())
}

impl SchemaEntry {
    /// Convenience constructor.
    pub fn new(ty: &str, name: &str, default: impl Into<Value>, encoding: Encoding) -> Self {
        Self {
            ty: ty.to_owned(),
            name: name.to_owned(),
            default: default.into(),
            encoding,
        }
    }
}

/// Ordered list of expected keys. Order drives template key order.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
}

impl Schema {
    /// Builds a schema, rejecting duplicate names and names that are not C
    /// identifiers.
    pub fn new(entries: Vec<SchemaEntry>) -> SecretsResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_identifier(&entry.name) {
                return Err(SecretsError::InvalidSchema(format!(
                    "'{}' is not a valid C identifier",
                    entry.name
                )));
            }
            if entry.ty.trim().is_empty() {
                return Err(SecretsError::InvalidSchema(format!(
                    "key '{}' has an empty type",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(SecretsError::InvalidSchema(format!(
                    "key '{}' is declared twice",
                    entry.name
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// Looks up an entry by key name.
    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Key names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

impl Default for Schema {
    /// The gateway firmware's secrets: device identity, MQTT broker, Wi-Fi
    /// credentials, and the CA certificate used for TLS.
    fn default() -> Self {
        use Encoding::{PemCertificate, RawConstant, StringLiteral};
        Self {
            entries: vec![
                SchemaEntry::new("const char*", "device_name", "mate", StringLiteral),
                SchemaEntry::new("const char*", "friendly_name", "MATE Gateway", StringLiteral),
                SchemaEntry::new("const char*", "mqtt_server", "example.com", StringLiteral),
                SchemaEntry::new("uint16_t", "mqtt_port", 1883, RawConstant),
                SchemaEntry::new("const char*", "mqtt_username", "", StringLiteral),
                SchemaEntry::new("const char*", "mqtt_password", "", StringLiteral),
                SchemaEntry::new("const char*", "wifi_ssid", "", StringLiteral),
                SchemaEntry::new("const char*", "wifi_pw", "", StringLiteral),
                SchemaEntry::new("const char*", "ca_root_cert", "", PemCertificate),
            ],
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_keeps_declaration_order() {
        let schema = Schema::default();
        let names: Vec<&str> = schema.names().collect();
        assert_eq!(names.first(), Some(&"device_name"));
        assert_eq!(names.last(), Some(&"ca_root_cert"));
        assert_eq!(names.len(), 9);
        assert_eq!(
            schema.get("mqtt_port").map(|entry| entry.encoding),
            Some(Encoding::RawConstant)
        );
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let error = Schema::new(vec![
            SchemaEntry::new("int", "port", 1, Encoding::RawConstant),
            SchemaEntry::new("int", "port", 2, Encoding::RawConstant),
        ])
        .unwrap_err();
        assert!(matches!(error, SecretsError::InvalidSchema(message) if message.contains("twice")));
    }

    #[test]
    fn new_rejects_non_identifiers() {
        let error = Schema::new(vec![SchemaEntry::new(
            "int",
            "mqtt-port",
            1,
            Encoding::RawConstant,
        )])
        .unwrap_err();
        assert!(matches!(error, SecretsError::InvalidSchema(_)));
    }

    #[test]
    fn encoding_uses_short_names() {
        let entry: SchemaEntry = serde_json::from_str(
            r#"{"type": "const char*", "name": "ca", "encoding": "pem"}"#,
        )
        .expect("deserialise entry");
        assert_eq!(entry.encoding, Encoding::PemCertificate);
        assert_eq!(entry.default, Value::String(String::new()));
    }
}
