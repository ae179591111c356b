use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

use crate::Value;

/// Named values that outlive the line that wrote them. Rebinding may change the type.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Vars {
    names: HashMap<String, Value>,
}

impl Vars {
    pub fn read(&self, name: impl AsRef<str>) -> Option<&Value> {
        self.names.get(name.as_ref())
    }

    /// Returns the binding this replaced, if any.
    pub fn write(&mut self, name: impl ToString, value: Value) -> Option<Value> {
        self.names.insert(name.to_string(), value)
    }

    pub fn as_map(&self) -> &HashMap<String, Value> {
        &self.names
    }

    pub fn sorted(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.names.iter().sorted_by(|(a, _), (b, _)| a.cmp(b))
    }
}

impl fmt::Display for Vars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.sorted()
                .map(|(name, value)| format!("{name}: {value}"))
                .join(", ")
        )
    }
}
