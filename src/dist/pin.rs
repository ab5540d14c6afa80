use serde::{Deserialize, Serialize};
use std::fmt;

/// One pinned external dependency: a package name bound to a single exact
/// version. Pins are exact by construction; there is no range syntax, so
/// an install driven by the record is reproducible.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pin {
    pub name: String,
    pub version: String,
}

impl Pin {
    pub fn new(name: &str, version: &str) -> Self {
        Pin {
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=={}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_renders_as_exact_requirement() {
        let pin = Pin::new("numpy", "1.21.5");
        assert_eq!(pin.to_string(), "numpy==1.21.5");
    }

    #[test]
    fn test_pin_equality() {
        assert_eq!(Pin::new("numpy", "1.21.5"), Pin::new("numpy", "1.21.5"));
        assert_ne!(Pin::new("numpy", "1.21.5"), Pin::new("numpy", "1.21.6"));
        assert_ne!(Pin::new("numpy", "1.21.5"), Pin::new("pandas", "1.21.5"));
    }
}
