use crate::models::error::RegistryError;
use camino::Utf8Path;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;

pub struct Json;

impl Json {
    /// Serializes `data` with 4-space indentation and overwrites `path`.
    pub fn write_pretty<T: Serialize>(path: &Utf8Path, data: &T) -> Result<(), RegistryError> {
        std::fs::write(path, Self::to_pretty_string(data)?)?;
        Ok(())
    }

    pub fn to_pretty_string<T: Serialize>(data: &T) -> Result<String, RegistryError> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        data.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| RegistryError::ParseError(e.to_string()))
    }

    /// Best-effort read: a missing, unreadable, or malformed file yields `None`.
    pub fn try_read(path: &Utf8Path) -> Option<Value> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                debug!("Optional file {path} not read: {e}");
                return None;
            }
        };

        serde_json::from_str(&text)
            .map_err(|e| debug!("Optional file {path} is not valid JSON: {e}"))
            .ok()
    }
}

/// Whether a manifest value counts as given. Null, `false`, zero, and empty strings do not.
pub fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
