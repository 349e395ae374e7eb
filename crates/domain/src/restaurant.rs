use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a restaurant as it appears in the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantId(String);

impl RestaurantId {
    pub fn parse(s: String) -> Result<RestaurantId, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("A restaurant id cannot be blank.".to_string());
        }
        if trimmed.chars().any(|c| c.is_control()) {
            return Err(format!("{trimmed:?} is not a valid restaurant id."));
        }

        Ok(Self(trimmed.to_owned()))
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for RestaurantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A restaurant record, passed through exactly as the store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Restaurant(Map<String, Value>);

impl Restaurant {
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Restaurant {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}
