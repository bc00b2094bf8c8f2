// src/model.rs
use std::fmt;
use strum_macros::EnumIter;

use crate::icons::IconId;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, EnumIter)]
pub enum Difficulty {
    #[default]
    Low,
    Medium,
    High,
}

// Parse user/CLI text into a Difficulty
impl TryFrom<&str> for Difficulty {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "low" => Ok(Difficulty::Low),
            "medium" => Ok(Difficulty::Medium),
            "high" => Ok(Difficulty::High),
            _ => anyhow::bail!("Invalid difficulty: {}", value),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Low => write!(f, "Low"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::High => write!(f, "High"),
        }
    }
}

/// A single workout entry. Records are never edited in place; the store only
/// ever appends new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub duration: String, // Free-form label, e.g. "45 minutes"
    pub difficulty: Difficulty,
    pub icon_id: IconId,
}

impl WorkoutRecord {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
        difficulty: Difficulty,
        icon_id: IconId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            duration: duration.into(),
            difficulty,
            icon_id,
        }
    }
}

/// The four workouts a fresh store starts with when seeding is enabled.
pub fn sample_records() -> Vec<WorkoutRecord> {
    vec![
        WorkoutRecord::new(
            1,
            "Intense Cardio",
            "High-intensity cardiovascular exercises to build endurance",
            "45 minutes",
            Difficulty::High,
            IconId::new("directions"),
        ),
        WorkoutRecord::new(
            2,
            "Total Strength",
            "Strength training for every muscle group",
            "60 minutes",
            Difficulty::Medium,
            IconId::new("manage"),
        ),
        WorkoutRecord::new(
            3,
            "Relaxing Yoga",
            "Yoga session for flexibility and mental relaxation",
            "30 minutes",
            Difficulty::Low,
            IconId::new("gallery"),
        ),
        WorkoutRecord::new(
            4,
            "Extreme HIIT",
            "High-intensity interval training to burn calories",
            "25 minutes",
            Difficulty::High,
            IconId::new("rotate"),
        ),
    ]
}
