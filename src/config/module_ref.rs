//! Opaque references to transform functions resolved by the training engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A module-qualified symbol reference, written `module.path:symbol`.
///
/// The training engine resolves the symbol through its own loader; this crate
/// only carries the identifier pair and never dereferences it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    /// Dotted module path
    pub module: String,
    /// Symbol name inside the module
    pub name: String,
}

impl ModuleRef {
    /// Construct a reference from its two parts.
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Parse the `module.path:symbol` form.
    pub fn parse(spec: &str) -> std::result::Result<Self, String> {
        let (module, name) = spec.split_once(':').ok_or_else(|| {
            format!("Invalid module reference: {spec}. Expected form: module.path:symbol")
        })?;
        if module.is_empty() || name.is_empty() {
            return Err(format!(
                "Invalid module reference: {spec}. Module and symbol must be non-empty"
            ));
        }
        Ok(Self::new(module, name))
    }
}

impl FromStr for ModuleRef {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.name)
    }
}
