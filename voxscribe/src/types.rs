use std::borrow::Cow;
use std::fmt;

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;

/// Shown for a segment without a start or end time.
pub const MISSING_TIME: &str = "N/A";

/// Shown when the response carries no text.
pub const NO_TRANSCRIPTION: &str = "No transcription found";

/// A transcript segment (sentence/phrase).
///
/// Fields are kept as raw JSON so that times print exactly as the service
/// sent them (`0.0`, `1.5`) and an unexpected type never fails the parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub start: Option<Value>,
    #[serde(default)]
    pub end: Option<Value>,
    #[serde(default)]
    pub text: Option<Value>,
}

impl Segment {
    pub fn start(&self) -> Cow<'_, str> {
        self.start.as_ref().map_or(Cow::Borrowed(MISSING_TIME), value_str)
    }

    pub fn end(&self) -> Cow<'_, str> {
        self.end.as_ref().map_or(Cow::Borrowed(MISSING_TIME), value_str)
    }

    pub fn text(&self) -> Cow<'_, str> {
        self.text.as_ref().map_or(Cow::Borrowed(""), value_str)
    }
}

/// `[start s - end s]: text`
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}s - {}s]: {}", self.start(), self.end(), self.text())
    }
}

/// Transcription response as returned by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub text: Option<Value>,
    /// Raw `segments` value. `None` only when the key is absent; an explicit
    /// `null` is kept as `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub segments: Option<Value>,
}

impl Transcript {
    /// Parse a response body. Anything but a JSON object is rejected.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        expect_object(&value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Full text, or the "No transcription found" placeholder.
    pub fn text(&self) -> Cow<'_, str> {
        self.text
            .as_ref()
            .map_or(Cow::Borrowed(NO_TRANSCRIPTION), value_str)
    }

    /// Segments in service order, or `None` when the response has none.
    ///
    /// Fails when `segments` is not an array of objects (including `null`).
    pub fn segments(&self) -> Result<Option<Vec<Segment>>> {
        let Some(raw) = &self.segments else {
            return Ok(None);
        };
        let Value::Array(items) = raw else {
            return Err(serde_json::Error::invalid_type(unexpected(raw), &"an array of segments").into());
        };

        let mut segments = Vec::with_capacity(items.len());
        for item in items {
            expect_object(item)?;
            segments.push(Segment::deserialize(item)?);
        }
        Ok(Some(segments))
    }

    /// Format for the terminal, one line per entry, each ending in a newline.
    ///
    /// With `timestamps` and a segments collection in the response, every
    /// segment gets its own line. Otherwise the full text is printed.
    pub fn render(&self, timestamps: bool) -> Result<String> {
        let mut out = String::new();
        match timestamps.then(|| self.segments()).transpose()?.flatten() {
            Some(segments) => {
                for seg in &segments {
                    out.push_str(&seg.to_string());
                    out.push('\n');
                }
            }
            None => {
                out.push_str(&self.text());
                out.push('\n');
            }
        }
        Ok(out)
    }
}

/// Wraps any present value (including `null`) in `Some`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn expect_object(value: &Value) -> Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(serde_json::Error::invalid_type(unexpected(value), &"a JSON object").into())
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Strings print bare, everything else as compact JSON.
fn value_str(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
