//! Data Model: StateValue, AxisValue, Combination
use crate::software::SoftwareId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of one axis inside a single combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateValue {
    Off,
    On,
    /// Pinned to a specific version string
    Version(String),
}

impl StateValue {
    pub fn version(v: impl Into<String>) -> Self {
        Self::Version(v.into())
    }

    pub fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    pub fn as_version(&self) -> Option<&str> {
        match self {
            Self::Version(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("OFF"),
            Self::On => f.write_str("ON"),
            Self::Version(v) => f.write_str(v),
        }
    }
}

/// A (software, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisValue {
    pub id: SoftwareId,
    pub state: StateValue,
}

impl AxisValue {
    pub fn new(id: SoftwareId, state: StateValue) -> Self {
        Self { id, state }
    }

    pub fn off(id: SoftwareId) -> Self {
        Self::new(id, StateValue::Off)
    }

    pub fn on(id: SoftwareId) -> Self {
        Self::new(id, StateValue::On)
    }

    pub fn version(id: SoftwareId, v: impl Into<String>) -> Self {
        Self::new(id, StateValue::version(v))
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.id, self.state)
    }
}

/// Mutually exclusive states one axis may take, all sharing one id.
pub type AxisSequence = Vec<AxisValue>;

/// One selected value per participating axis, in axis order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination(Vec<AxisValue>);

impl Combination {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, value: AxisValue) {
        self.0.push(value);
    }

    pub fn values(&self) -> &[AxisValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AxisValue> {
        self.0.iter()
    }

    /// State selected for `id`, or `None` when the axis does not take part.
    pub fn state_of(&self, id: SoftwareId) -> Option<&StateValue> {
        self.0.iter().find(|v| v.id == id).map(|v| &v.state)
    }

    pub fn into_inner(self) -> Vec<AxisValue> {
        self.0
    }
}

impl From<Vec<AxisValue>> for Combination {
    fn from(values: Vec<AxisValue>) -> Self {
        Self(values)
    }
}

impl FromIterator<AxisValue> for Combination {
    fn from_iter<I: IntoIterator<Item = AxisValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = &'a AxisValue;
    type IntoIter = std::slice::Iter<'a, AxisValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Ordered list of combinations.
pub type CombinationMatrix = Vec<Combination>;
