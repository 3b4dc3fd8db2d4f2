use serde::Serialize;

/// Whether a habit is something to build up or something to give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitType {
    Start,
    Cut,
}

impl HabitType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            HabitType::Start => "start",
            HabitType::Cut => "cut",
        }
    }

    /// Convert DB string → enum.
    /// Exact match only: "Start" or " cut" are not recognized.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(HabitType::Start),
            "cut" => Some(HabitType::Cut),
            _ => None,
        }
    }
}
