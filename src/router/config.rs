use crate::domain::{RouterError, Severity};
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Parsed router configuration.
///
/// Only `separate` is interpreted here; the rest of the blob (filename,
/// rotation parameters, unknown fields) is retained verbatim and forwarded
/// to every output the router creates.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    fields: Map<String, Value>,
    separate: Vec<String>,
}

#[derive(Deserialize)]
struct SeparateField {
    #[serde(default)]
    separate: Vec<String>,
}

impl RouterConfig {
    /// Parse a JSON configuration blob.
    ///
    /// The blob must be a JSON object; a malformed blob or a `separate`
    /// field that is not an array of strings is `InvalidConfig`.
    pub fn parse(blob: &str) -> Result<Self, RouterError> {
        let value: Value = serde_json::from_str(blob)
            .map_err(|e| RouterError::InvalidConfig(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(RouterError::InvalidConfig(
                "expected a JSON object".to_string(),
            ));
        };

        let separate = SeparateField::deserialize(Value::Object(fields.clone()))
            .map_err(|e| RouterError::InvalidConfig(format!("separate: {e}")))?
            .separate;

        Ok(Self { fields, separate })
    }

    /// Severity names requested for dedicated outputs, as configured.
    /// May contain names matching no canonical severity; those create
    /// nothing.
    pub fn separate(&self) -> &[String] {
        &self.separate
    }

    /// Whether a dedicated output was requested for `severity`
    /// (case-sensitive exact match against the canonical name).
    pub fn wants_dedicated(&self, severity: Severity) -> bool {
        self.separate.iter().any(|name| name == severity.name())
    }

    /// The configuration for the full output: the input blob, verbatim.
    pub fn full_config(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// The configuration for a dedicated output: the input blob with
    /// `filename` replaced by the derived name and `level` pinned to the
    /// severity's rank. `base` and `suffix` are the full output's reported
    /// name decomposition.
    pub fn dedicated_config(&self, base: &str, suffix: &str, severity: Severity) -> Value {
        let mut fields = self.fields.clone();
        fields.insert(
            "filename".to_string(),
            Value::String(derive_filename(base, suffix, severity)),
        );
        fields.insert("level".to_string(), json!(severity.rank()));
        Value::Object(fields)
    }
}

/// Dedicated filename for a severity: the severity name inserted between the
/// full output's base name and its suffix (`app` + `.log` + `error` →
/// `app.error.log`).
pub fn derive_filename(base: &str, suffix: &str, severity: Severity) -> String {
    format!("{base}.{}{suffix}", severity.name())
}
