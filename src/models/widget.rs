//! Dashboard widget descriptors and the built-in default layout.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    Workout,
    WorkoutSession,
    Meditation,
    Hydration,
    Cardio,
    Fasting,
    Goals,
    Quote,
    Timer,
    RecentActivity,
}

impl WidgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::Workout => "workout",
            WidgetType::WorkoutSession => "workout-session",
            WidgetType::Meditation => "meditation",
            WidgetType::Hydration => "hydration",
            WidgetType::Cardio => "cardio",
            WidgetType::Fasting => "fasting",
            WidgetType::Goals => "goals",
            WidgetType::Quote => "quote",
            WidgetType::Timer => "timer",
            WidgetType::RecentActivity => "recent-activity",
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
}

impl WidgetSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
        }
    }

    /// Width in columns used when rendering progress bars.
    pub fn bar_width(&self) -> usize {
        match self {
            WidgetSize::Small => 10,
            WidgetSize::Medium => 20,
            WidgetSize::Large => 30,
        }
    }
}

/// Per-type widget settings. The tag must agree with the owning widget's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WidgetConfig {
    Workout { exercises: Vec<String> },
    WorkoutSession { show_history: bool },
    Meditation { goal_minutes: f64 },
    Hydration { goal_oz: f64 },
    Cardio { goal_minutes: f64 },
    Fasting { target_hours: u32 },
    Goals { trend_measurement: String },
    Quote { seed: u32 },
    Timer { rest_seconds: u32 },
    RecentActivity { limit: usize },
}

impl WidgetConfig {
    pub fn widget_type(&self) -> WidgetType {
        match self {
            WidgetConfig::Workout { .. } => WidgetType::Workout,
            WidgetConfig::WorkoutSession { .. } => WidgetType::WorkoutSession,
            WidgetConfig::Meditation { .. } => WidgetType::Meditation,
            WidgetConfig::Hydration { .. } => WidgetType::Hydration,
            WidgetConfig::Cardio { .. } => WidgetType::Cardio,
            WidgetConfig::Fasting { .. } => WidgetType::Fasting,
            WidgetConfig::Goals { .. } => WidgetType::Goals,
            WidgetConfig::Quote { .. } => WidgetType::Quote,
            WidgetConfig::Timer { .. } => WidgetType::Timer,
            WidgetConfig::RecentActivity { .. } => WidgetType::RecentActivity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WidgetType,
    pub title: String,
    pub enabled: bool,
    pub position: u32,
    pub size: WidgetSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<WidgetConfig>,
}

/// Partial update applied by `WidgetLayout::update_widget`.
/// `id`, `type` and `position` are not patchable.
#[derive(Debug, Clone, Default)]
pub struct WidgetPatch {
    pub title: Option<String>,
    pub enabled: Option<bool>,
    pub size: Option<WidgetSize>,
    pub config: Option<WidgetConfig>,
}

struct WidgetTemplate {
    id: &'static str,
    kind: WidgetType,
    title: &'static str,
    enabled: bool,
    size: WidgetSize,
}

/// Default layout, in position order.
const DEFAULT_LAYOUT: [WidgetTemplate; 10] = [
    WidgetTemplate {
        id: "workout",
        kind: WidgetType::Workout,
        title: "Daily Workouts",
        enabled: true,
        size: WidgetSize::Large,
    },
    WidgetTemplate {
        id: "workout-session",
        kind: WidgetType::WorkoutSession,
        title: "Workout Timer",
        enabled: true,
        size: WidgetSize::Medium,
    },
    WidgetTemplate {
        id: "hydration",
        kind: WidgetType::Hydration,
        title: "Hydration",
        enabled: true,
        size: WidgetSize::Medium,
    },
    WidgetTemplate {
        id: "meditation",
        kind: WidgetType::Meditation,
        title: "Meditation",
        enabled: true,
        size: WidgetSize::Medium,
    },
    WidgetTemplate {
        id: "fasting",
        kind: WidgetType::Fasting,
        title: "Fasting",
        enabled: true,
        size: WidgetSize::Medium,
    },
    WidgetTemplate {
        id: "goals",
        kind: WidgetType::Goals,
        title: "Goals",
        enabled: true,
        size: WidgetSize::Medium,
    },
    WidgetTemplate {
        id: "cardio",
        kind: WidgetType::Cardio,
        title: "Cardio",
        enabled: false,
        size: WidgetSize::Medium,
    },
    WidgetTemplate {
        id: "quote",
        kind: WidgetType::Quote,
        title: "Daily Quote",
        enabled: true,
        size: WidgetSize::Small,
    },
    WidgetTemplate {
        id: "timer",
        kind: WidgetType::Timer,
        title: "Rest Timer",
        enabled: false,
        size: WidgetSize::Small,
    },
    WidgetTemplate {
        id: "recent-activity",
        kind: WidgetType::RecentActivity,
        title: "Recent Activity",
        enabled: false,
        size: WidgetSize::Large,
    },
];

/// Rest interval of the timer widget when none is configured.
pub const DEFAULT_REST_SECONDS: u32 = 90;

fn default_config(kind: WidgetType) -> Option<WidgetConfig> {
    match kind {
        WidgetType::Timer => Some(WidgetConfig::Timer {
            rest_seconds: DEFAULT_REST_SECONDS,
        }),
        _ => None,
    }
}

/// Fresh, owned copy of the default layout.
pub fn default_widgets() -> Vec<WidgetDescriptor> {
    DEFAULT_LAYOUT
        .iter()
        .enumerate()
        .map(|(i, t)| WidgetDescriptor {
            id: t.id.to_string(),
            kind: t.kind,
            title: t.title.to_string(),
            enabled: t.enabled,
            position: i as u32,
            size: t.size,
            config: default_config(t.kind),
        })
        .collect()
}
