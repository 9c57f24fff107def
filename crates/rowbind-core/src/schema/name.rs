use std::fmt;

/// A column or field name reduced to its matching key: lowercased, with every
/// underscore removed. `emotional_state`, `EmotionalState` and
/// `EMOTIONAL_STATE` all share the key `emotionalstate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(src: &str) -> Self {
        Self(
            src.chars()
                .filter(|c| *c != '_')
                .flat_map(char::to_lowercase)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}
