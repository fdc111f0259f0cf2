//! Game titles a contest can be played in.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::ids::GameTitleId;

/// A game title such as "Street Fighter 6"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTitle {
    pub id: GameTitleId,
    pub name: String,
}

impl GameTitle {
    /// Create a game title with a fresh identity
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: GameTitleId::new(),
            name: validate_name(name, "game title name")?,
        })
    }

    /// Change the display name
    pub fn rename(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_name(name, "game title name")?;
        Ok(())
    }
}

/// Reject names that are empty once surrounding whitespace is trimmed.
///
/// The stored name keeps the caller's original spelling minus the trim.
pub(crate) fn validate_name(name: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankName { field });
    }
    Ok(trimmed.to_string())
}
