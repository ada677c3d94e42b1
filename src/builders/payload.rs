use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The nested request body a builder accumulates.
///
/// A payload is a JSON object whose keys keep their insertion order. Paths
/// are slices of keys (`&["TxnTaxDetail", "TxnTaxCodeRef", "value"]`);
/// setting a path creates the intermediate objects it needs and replaces any
/// non-object value standing in the way.
///
/// # Example
///
/// ```rust
/// use quickbooks_api::builders::Payload;
/// use serde_json::json;
///
/// let mut payload = Payload::new();
/// payload.set(&["CustomerRef", "value"], "58");
/// payload.push(&["Line"], json!({"Amount": 100.0}));
/// payload.push(&["Line"], json!({"Amount": 25.0}));
///
/// assert_eq!(payload.get(&["CustomerRef", "value"]), Some(&json!("58")));
/// assert_eq!(payload.get(&["Line", "1", "Amount"]), Some(&json!(25.0)));
/// assert_eq!(
///     serde_json::to_value(&payload).unwrap(),
///     json!({"CustomerRef": {"value": "58"}, "Line": [{"Amount": 100.0}, {"Amount": 25.0}]})
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` at `path`, replacing whatever was there.
    ///
    /// An empty path leaves the payload unchanged.
    pub fn set(&mut self, path: &[&str], value: impl Into<Value>) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        self.object_at(parents)
            .insert((*last).to_string(), value.into());
    }

    /// Appends `value` to the sequence at `path`, creating it if needed.
    ///
    /// A non-sequence value at `path` is replaced by a new sequence.
    pub fn push(&mut self, path: &[&str], value: impl Into<Value>) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let slot = self
            .object_at(parents)
            .entry((*last).to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        ensure_array(slot).push(value.into());
    }

    /// Returns the value at `path`.
    ///
    /// Numeric segments index into sequences.
    #[must_use]
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| step(value, key))
    }

    /// Removes and returns the value at `path`, keeping the order of its
    /// siblings.
    pub fn remove(&mut self, path: &[&str]) -> Option<Value> {
        let (last, parents) = path.split_last()?;
        let mut map = &mut self.0;
        for key in parents {
            map = map.get_mut(*key)?.as_object_mut()?;
        }
        map.shift_remove(*last)
    }

    /// Returns `true` if nothing has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the top-level map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the payload, returning it as a JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    fn object_at(&mut self, path: &[&str]) -> &mut Map<String, Value> {
        let mut map = &mut self.0;
        for key in path {
            let slot = map
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            map = ensure_object(slot);
        }
        map
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        payload.into_value()
    }
}

impl TryFrom<Value> for Payload {
    type Error = Value;

    /// Accepts a JSON object; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

fn step<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Array(items) => items.get(key.parse::<usize>().ok()?),
        _ => value.get(key),
    }
}

fn ensure_object(slot: &mut Value) -> &mut Map<String, Value> {
    match slot {
        Value::Object(map) => map,
        other => {
            *other = Value::Object(Map::new());
            ensure_object(other)
        }
    }
}

fn ensure_array(slot: &mut Value) -> &mut Vec<Value> {
    match slot {
        Value::Array(items) => items,
        other => {
            *other = Value::Array(Vec::new());
            ensure_array(other)
        }
    }
}
