use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One performed set: a rep count and the weight moved, in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub reps: u32,
    pub weight: f64,
}

impl SetEntry {
    /// Training volume contributed by this set (reps x weight). Bodyweight
    /// sets (weight 0) contribute zero.
    pub fn volume(&self) -> f64 {
        self.reps as f64 * self.weight
    }
}

/// One exercise performed on one date, with its ordered sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: u64,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub sets: Vec<SetEntry>,
}

impl ExerciseLog {
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(SetEntry::volume).sum()
    }
}

/// Persisted application data: every exercise log plus one body-weight
/// observation per date. The map key enforces at most one weight per day,
/// so a second write for the same date is an upsert.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub exercises: Vec<ExerciseLog>,
    #[serde(default)]
    pub body_weights: BTreeMap<String, f64>,
}

impl AppData {
    pub fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn exercises_on(&self, date: &str) -> Vec<ExerciseLog> {
        self.exercises
            .iter()
            .filter(|log| log.date == date)
            .cloned()
            .collect()
    }
}

/// A date with everything recorded on it. Derived per request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutDay {
    pub date: String,
    pub exercises: Vec<ExerciseLog>,
    pub body_weight: Option<f64>,
}

// ---- derived series points -------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumePoint {
    pub date: String,
    pub total_volume: f64,
    pub exercise_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub name: String,
    pub count: u64,
}

/// Per-date metrics for one exercise name. Max and average ignore sets with
/// no weight on the bar; volume and reps count every set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: String,
    pub max_weight: f64,
    pub avg_weight: f64,
    pub total_volume: f64,
    pub total_reps: u64,
    pub sets: usize,
}

/// Which metric of a [`ProgressPoint`] a chart or trend is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    MaxWeight,
    AvgWeight,
    TotalVolume,
}

impl Metric {
    pub fn of(&self, point: &ProgressPoint) -> f64 {
        match self {
            Metric::MaxWeight => point.max_weight,
            Metric::AvgWeight => point.avg_weight,
            Metric::TotalVolume => point.total_volume,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Flat,
}

/// Percent change of a metric from the first charted point to the last.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    pub percent_change: f64,
    pub direction: TrendDirection,
    pub label: String,
}

impl Trend {
    pub fn from_percent(percent_change: f64) -> Self {
        let direction = if percent_change > 0.0 {
            TrendDirection::Improving
        } else if percent_change < 0.0 {
            TrendDirection::Declining
        } else {
            TrendDirection::Flat
        };
        let label = format!("{percent_change:+.1}%");
        Self {
            percent_change,
            direction,
            label,
        }
    }
}

// ---- request / response shapes --------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LogExerciseRequest {
    pub date: String,
    pub name: String,
    pub sets: Vec<SetEntry>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateExerciseRequest {
    pub name: String,
    pub sets: Vec<SetEntry>,
}

#[derive(Debug, Deserialize)]
pub struct UpsertWeightRequest {
    pub date: String,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub exercises: Vec<ExerciseLog>,
    pub body_weight: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub window_days: i64,
    pub weight_series: Vec<WeightPoint>,
    pub volume_series: Vec<VolumePoint>,
    pub exercise_frequency: Vec<FrequencyEntry>,
}

#[derive(Debug, Serialize)]
pub struct ExerciseProgressResponse {
    pub name: String,
    pub metric: Metric,
    pub points: Vec<ProgressPoint>,
    pub trend: Option<Trend>,
}

/// Built-in exercise names offered by the picker alongside everything the
/// user has already logged.
pub const PRESET_EXERCISES: &[&str] = &[
    "Press Inclinado con Mancuernas",
    "Press plano en maquina",
    "Peck deck",
    "Elevaciones laterales en polea",
    "Elevaciones Laterales sentado con mancuerna",
    "Pajaros con mancuerna",
    "Press Frances",
    "Extension de Triceps en Polea Alta",
    "Dominadas",
    "Remo en polea",
    "Jalon al Pecho",
    "Pull Over en Polea",
    "Press Inclinado en maquina",
    "Press plano con mancuerna",
    "Cruces en polea",
    "Elevaciones laterales con mancuerna",
    "Extension de Triceps en Polea Baja",
    "Extension de Triceps en Polea Alta unilateral",
    "Sentadilla",
    "Sentadilla Hack en Maquina",
    "Bulgaras",
    "Extension de Cuadriceps",
    "Curl Femoral",
    "Aduptores",
    "Pantorrilla",
    "Abdominales con rueda",
    "Plancha Abdominal",
    "Encogimiento Abdominal",
];
