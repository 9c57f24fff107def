use rowbind::{Error, Primitive, Result, Type, Value};

use std::{fmt, str::FromStr};

/// How a person feels, stored as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionalState {
    Sad,
    Happy,
    Neutral,
}

impl EmotionalState {
    pub const ALL: [EmotionalState; 3] = [Self::Sad, Self::Happy, Self::Neutral];

    /// The code stored in the `emotional_state` column.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sad => -1,
            Self::Happy => 1,
            Self::Neutral => 0,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            -1 => Ok(Self::Sad),
            1 => Ok(Self::Happy),
            0 => Ok(Self::Neutral),
            _ => Err(Error::unknown_discriminant("EmotionalState", code)),
        }
    }
}

impl From<EmotionalState> for i32 {
    fn from(state: EmotionalState) -> i32 {
        state.code()
    }
}

impl From<EmotionalState> for Value {
    fn from(state: EmotionalState) -> Value {
        Value::I32(state.code())
    }
}

impl TryFrom<i32> for EmotionalState {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Self::from_code(code)
    }
}

impl Primitive for EmotionalState {
    const TYPE: Type = Type::I32;

    fn load(value: Value) -> Result<Self> {
        Self::from_code(i32::load(value)?)
    }
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sad => "sad",
            Self::Happy => "happy",
            Self::Neutral => "neutral",
        })
    }
}

impl FromStr for EmotionalState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| rowbind::err!("unknown emotional state `{s}`; expected sad, happy or neutral"))
    }
}
