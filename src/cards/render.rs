//! JSON text emission.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::core::config::RenderConfig;
use crate::core::error::{CardError, Result};

/// Render a built document as JSON text.
///
/// Non-ASCII characters are written verbatim, never `\u` escaped.
pub(crate) fn to_json_text(doc: &Value, config: &RenderConfig) -> Result<String> {
    let Some(width) = config.indent else {
        return Ok(serde_json::to_string(doc)?);
    };

    let indent = vec![b' '; width];
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    doc.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| CardError::Serialization(serde_json::Error::custom(e)))
}
