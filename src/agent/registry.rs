//! Named capability registry
//!
//! Agents resolve "tools" through a registry of named capabilities instead of
//! carrying plain callables. A capability is a pure function over structured
//! values with a declared name and description, registered at
//! agent-construction time.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::protocol::ExchangeError;

/// Handler signature for a capability
pub type CapabilityFn = fn(&Value) -> Result<Value, ExchangeError>;

/// A named capability with a declared input/output contract
#[derive(Clone)]
pub struct Capability {
    /// Capability name, unique within a registry
    pub name: String,

    /// Human-readable description of inputs and outputs
    pub description: String,

    handler: CapabilityFn,
}

impl Capability {
    /// Create a new capability
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: CapabilityFn,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler,
        }
    }
}

impl std::fmt::Debug for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Registry mapping capability names to their handlers
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    capabilities: HashMap<String, Capability>,
}

impl CapabilityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability, replacing any existing one with the same name
    pub fn register(&mut self, capability: Capability) -> &mut Self {
        self.capabilities
            .insert(capability.name.clone(), capability);
        self
    }

    /// Look up a capability by name
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.capabilities.get(name)
    }

    /// Invoke a capability by name
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::UnknownCapability`] when no capability is
    /// registered under `name`.
    pub fn invoke(&self, name: &str, input: &Value) -> Result<Value, ExchangeError> {
        let capability = self
            .capabilities
            .get(name)
            .ok_or_else(|| ExchangeError::UnknownCapability(name.to_string()))?;

        tracing::debug!(capability = %name, "invoking capability");
        (capability.handler)(input)
    }

    /// Names of all registered capabilities
    pub fn names(&self) -> Vec<&str> {
        self.capabilities.keys().map(String::as_str).collect()
    }
}

/// Mock weather lookup capability
///
/// Input: `{"city": string}`. The city is lower-cased and stripped of spaces
/// before lookup. Output: `{"status": "success", "report": string}` for known
/// cities, or `{"status": "error", "error_message": string}` otherwise.
pub fn weather_capability() -> Capability {
    Capability::new(
        "get_weather",
        "Retrieves the current weather report for a specified city",
        get_weather,
    )
}

fn get_weather(input: &Value) -> Result<Value, ExchangeError> {
    let city = input
        .get("city")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ExchangeError::invalid_field("city"))?;

    let normalized: String = city
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let report = match normalized.as_str() {
        "newyork" => "The weather in New York is sunny with a temperature of 25°C.",
        "london" => "It's cloudy in London with a temperature of 15°C.",
        "tokyo" => "Tokyo is experiencing light rain and a temperature of 18°C.",
        _ => {
            return Ok(json!({
                "status": "error",
                "error_message": format!("Sorry, I don't have weather information for '{city}'."),
            }))
        }
    };

    Ok(json!({"status": "success", "report": report}))
}
