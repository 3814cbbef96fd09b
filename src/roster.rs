#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RosterError {
    #[error("Player name is empty")]
    EmptyName,
    #[error("Player already on roster: {0}")]
    Duplicate(String),
}

pub const DEFAULT_PLAYERS: [&str; 13] = [
    "Rowan", "Evan", "Bailey", "Finley", "Teddy", "Sophie", "Isaac", "Raiden", "Josh", "Griff",
    "Rhys", "Max", "Archie",
];

/// Known player names in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self::from_names(DEFAULT_PLAYERS)
    }

    /// Build a roster, skipping blank and repeated names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            if let Err(e) = roster.add(name.as_ref()) {
                log::debug!("skipping roster entry: {}", e);
            }
        }
        roster
    }

    /// Add a trimmed name, returning it as stored.
    pub fn add(&mut self, name: &str) -> Result<String, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(name) {
            return Err(RosterError::Duplicate(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(name.to_string())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
