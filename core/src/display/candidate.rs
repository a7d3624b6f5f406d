use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A value that may end up on screen as a label.
///
/// Values arrive from the data store with no static type guarantee, so every
/// shape a JSON decoder can produce has a variant and a string rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayCandidate {
    Absent,
    Text(String),
    Number(Number),
    Bool(bool),
    Other(Value),
}

impl DisplayCandidate {
    /// String form of the candidate. `None` only for `Absent`.
    pub fn to_display_string(&self) -> Option<String> {
        match self {
            DisplayCandidate::Absent => None,
            DisplayCandidate::Text(s) => Some(s.clone()),
            DisplayCandidate::Number(n) => Some(render_number(n)),
            DisplayCandidate::Bool(b) => Some(b.to_string()),
            DisplayCandidate::Other(v) => Some(render_value(v)),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DisplayCandidate::Absent)
    }
}

fn render_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // Whole floats print without a fraction: 1.0 -> "1".
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i128),
        _ => n.to_string(),
    }
}

fn render_value(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        // serde_json's Display for Value cannot fail.
        Value::Object(_) => v.to_string(),
    }
}

impl From<Value> for DisplayCandidate {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => DisplayCandidate::Absent,
            Value::String(s) => DisplayCandidate::Text(s),
            Value::Number(n) => DisplayCandidate::Number(n),
            Value::Bool(b) => DisplayCandidate::Bool(b),
            other => DisplayCandidate::Other(other),
        }
    }
}

impl From<&Value> for DisplayCandidate {
    fn from(v: &Value) -> Self {
        DisplayCandidate::from(v.clone())
    }
}

impl From<&str> for DisplayCandidate {
    fn from(s: &str) -> Self {
        DisplayCandidate::Text(s.to_string())
    }
}

impl From<String> for DisplayCandidate {
    fn from(s: String) -> Self {
        DisplayCandidate::Text(s)
    }
}

impl From<&String> for DisplayCandidate {
    fn from(s: &String) -> Self {
        DisplayCandidate::Text(s.clone())
    }
}

impl From<bool> for DisplayCandidate {
    fn from(b: bool) -> Self {
        DisplayCandidate::Bool(b)
    }
}

impl From<i64> for DisplayCandidate {
    fn from(n: i64) -> Self {
        DisplayCandidate::Number(n.into())
    }
}

impl From<u64> for DisplayCandidate {
    fn from(n: u64) -> Self {
        DisplayCandidate::Number(n.into())
    }
}

impl From<i32> for DisplayCandidate {
    fn from(n: i32) -> Self {
        DisplayCandidate::Number(n.into())
    }
}

impl From<f64> for DisplayCandidate {
    fn from(f: f64) -> Self {
        // NaN and infinities have no JSON number; keep their textual form.
        match Number::from_f64(f) {
            Some(n) => DisplayCandidate::Number(n),
            None => DisplayCandidate::Text(f.to_string()),
        }
    }
}

impl<T: Into<DisplayCandidate>> From<Option<T>> for DisplayCandidate {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => DisplayCandidate::Absent,
        }
    }
}
