use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormationError {
    #[error("Unknown formation: {0}")]
    Unknown(String),
}

/// The fixed set of formations a board can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormationTemplate {
    #[default]
    Gk321,
    Gk231,
    Gk331,
    Gk222,
}

impl FormationTemplate {
    pub const ALL: [FormationTemplate; 4] = [Self::Gk321, Self::Gk231, Self::Gk331, Self::Gk222];

    pub fn key(self) -> &'static str {
        match self {
            Self::Gk321 => "GK-3-2-1",
            Self::Gk231 => "GK-2-3-1",
            Self::Gk331 => "GK-3-3-1",
            Self::Gk222 => "GK-2-2-2",
        }
    }

    /// Row sizes from the goalkeeper line forwards.
    pub fn rows(self) -> &'static [usize] {
        match self {
            Self::Gk321 => &[1, 3, 2, 1],
            Self::Gk231 => &[1, 2, 3, 1],
            Self::Gk331 => &[1, 3, 3, 1],
            Self::Gk222 => &[1, 2, 2, 2],
        }
    }

    pub fn total_slots(self) -> usize {
        self.rows().iter().sum()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl FromStr for FormationTemplate {
    type Err = FormationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| FormationError::Unknown(s.to_string()))
    }
}

impl fmt::Display for FormationTemplate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
