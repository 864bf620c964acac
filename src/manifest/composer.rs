//! `composer.json` reading and rewriting

use crate::error::{BumpError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

const INDENT: &[u8] = b"    ";

/// Returns the top-level `version` string, if the manifest has one.
pub fn read_version(content: &str) -> Result<Option<String>> {
    let json: Value = serde_json::from_str(content)?;
    Ok(json
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string))
}

/// Sets `version` and re-serializes the manifest.
///
/// Key order of every other field is kept. Output uses a four-space indent
/// and ends with a newline.
pub fn set_version(content: &str, new_version: &str) -> Result<String> {
    let mut json: Value = serde_json::from_str(content)?;
    let Some(object) = json.as_object_mut() else {
        return Err(BumpError::manifest("composer.json is not a JSON object"));
    };
    object.insert("version".to_string(), Value::String(new_version.to_string()));

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    json.serialize(&mut serializer)?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| BumpError::manifest(e.to_string()))
}
