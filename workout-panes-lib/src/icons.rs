// src/icons.rs
use std::fmt;

/// Opaque reference to an icon resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconId(String);

impl IconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDescriptor {
    pub icon_id: IconId,
    pub label: String,
    pub usage_hint: String,
}

impl IconDescriptor {
    fn new(icon_id: &str, label: &str, usage_hint: &str) -> Self {
        Self {
            icon_id: IconId::new(icon_id),
            label: label.to_string(),
            usage_hint: usage_hint.to_string(),
        }
    }
}

/// Stateless catalog of the icons a workout can be tagged with.
pub struct IconCatalog;

impl IconCatalog {
    /// Builds the full catalog. The order is fixed; the first entry is the
    /// default for new records and the fallback for unknown ids.
    pub fn all() -> Vec<IconDescriptor> {
        vec![
            IconDescriptor::new(
                "directions",
                "Cardio/Running",
                "For cardiovascular work and running",
            ),
            IconDescriptor::new("manage", "Strength/Weights", "For strength and weight training"),
            IconDescriptor::new("rotate", "Circuit/HIIT", "For circuit and interval workouts"),
            IconDescriptor::new("compass", "Navigation/Outdoor", "For outdoor activities"),
            IconDescriptor::new("gallery", "Yoga/Stretching", "For yoga, pilates and flexibility"),
            IconDescriptor::new("mylocation", "Location/GPS", "For exercises with GPS tracking"),
            IconDescriptor::new("send", "Speed/Sprint", "For speed training"),
            IconDescriptor::new("today", "Daily Routine", "For scheduled workouts"),
            IconDescriptor::new("preferences", "Custom", "For custom workouts"),
            IconDescriptor::new("view", "Visualization", "For tracking progress"),
            IconDescriptor::new("upload", "Growth/Progress", "For measuring your progress"),
            IconDescriptor::new("set_as", "Goal/Target", "For goal-driven workouts"),
        ]
    }

    /// Never fails: an unknown id resolves to the first catalog entry.
    pub fn find_by_id(icon_id: &IconId) -> IconDescriptor {
        let mut icons = Self::all();
        match icons.iter().position(|icon| &icon.icon_id == icon_id) {
            Some(index) => icons.swap_remove(index),
            None => icons.swap_remove(0),
        }
    }

    pub fn default_icon() -> IconDescriptor {
        Self::all().swap_remove(0)
    }
}
