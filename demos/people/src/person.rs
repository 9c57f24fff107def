use crate::EmotionalState;

use rowbind::Result;

use std::fmt;

/// A person as stored in the `PEOPLE` table.
#[derive(Debug, Clone, PartialEq, Eq, rowbind::Record)]
pub struct Person {
    id: Option<i64>,
    name: String,
    emotional_state: i32,
}

impl Person {
    /// A person that has not been stored yet, and so has no id.
    pub fn new(name: impl Into<String>, state: EmotionalState) -> Self {
        Self {
            id: None,
            name: name.into(),
            emotional_state: state.code(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emotional_state(&self) -> i32 {
        self.emotional_state
    }

    /// Decodes the stored emotional state code.
    pub fn state(&self) -> Result<EmotionalState> {
        EmotionalState::from_code(self.emotional_state)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Person[id=")?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => f.write_str("null")?,
        }
        write!(
            f,
            ", name={}, emotionalState={}]",
            self.name, self.emotional_state
        )
    }
}
