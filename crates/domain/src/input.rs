use std::{fmt, slice::Iter, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::{InputError, VariationSeed};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutInputs {
    pub time_minutes: TimeBudget,
    pub location: Location,
    pub equipment: Equipment,
    pub experience: Experience,
    pub energy: Energy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitations: Option<String>,
    pub is_free_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_style: Option<WorkoutStyle>,
}

impl WorkoutInputs {
    #[must_use]
    pub fn with_seed(&self, seed: i64) -> Self {
        Self {
            variation_seed: Some(seed),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn normalize(&self) -> NormalizedInputs {
        let time = clamp_time(self.is_free_user, self.time_minutes);
        let equipment = clamp_equipment(self.is_free_user, self.equipment);
        let requested_style = self.workout_style.unwrap_or_default();
        let style = resolve_style(requested_style, self.is_free_user, equipment);
        let limitations = self
            .limitations
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let knee_safety = limitations.to_lowercase().contains("knee");

        if time != self.time_minutes || equipment != self.equipment {
            debug!(
                "clamped free tier request from {} min/{} to {} min/{}",
                self.time_minutes,
                self.equipment.name(),
                time,
                equipment.name()
            );
        }
        if style != requested_style {
            debug!(
                "resolved style {} to {}",
                requested_style.name(),
                style.name()
            );
        }

        NormalizedInputs {
            time,
            location: self.location,
            equipment,
            experience: self.experience,
            energy: self.energy,
            limitations,
            knee_safety,
            is_free_user: self.is_free_user,
            seed: self.variation_seed.map(VariationSeed::from),
            style,
        }
    }

    /// Explains how the free tier will restrict this request, if at all.
    #[must_use]
    pub fn cap_notice(&self) -> Option<&'static str> {
        if !self.is_free_user {
            return None;
        }

        let capped_time = self.time_minutes > TimeBudget::Min20;
        let capped_equipment = self.equipment != Equipment::None;

        match (capped_time, capped_equipment) {
            (true, true) => Some("Free caps to 20 min and bodyweight."),
            (true, false) => Some("Free caps to 20 min."),
            (false, true) => Some("Free uses bodyweight only."),
            (false, false) => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        let limitations = match self.limitations.as_deref() {
            Some(text) if !text.is_empty() => format!("limitations: {text}"),
            _ => "no limitations".to_string(),
        };

        [
            format!("{} min", self.time_minutes),
            self.location.name().to_string(),
            self.equipment.name().to_string(),
            self.experience.name().to_string(),
            format!("{} energy", self.energy.name()),
            limitations,
            format!("style: {}", self.workout_style.unwrap_or_default().name()),
            if self.is_free_user { "free" } else { "pro" }.to_string(),
        ]
        .join(" · ")
    }
}

impl Default for WorkoutInputs {
    fn default() -> Self {
        Self {
            time_minutes: TimeBudget::Min20,
            location: Location::Home,
            equipment: Equipment::None,
            experience: Experience::Beginner,
            energy: Energy::Medium,
            limitations: Some(String::new()),
            is_free_user: true,
            variation_seed: None,
            workout_style: Some(WorkoutStyle::Balanced),
        }
    }
}

/// A request with all optional fields defaulted and the tier restrictions applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInputs {
    pub time: TimeBudget,
    pub location: Location,
    pub equipment: Equipment,
    pub experience: Experience,
    pub energy: Energy,
    pub limitations: String,
    pub knee_safety: bool,
    pub is_free_user: bool,
    pub seed: Option<VariationSeed>,
    pub style: WorkoutStyle,
}

impl NormalizedInputs {
    #[must_use]
    pub fn has_limitations(&self) -> bool {
        !self.limitations.is_empty()
    }

    #[must_use]
    pub fn has_barbell_access(&self) -> bool {
        !self.is_free_user && self.equipment.includes_barbell()
    }
}

#[must_use]
pub fn clamp_time(is_free_user: bool, time: TimeBudget) -> TimeBudget {
    if is_free_user && time > TimeBudget::Min20 {
        TimeBudget::Min20
    } else {
        time
    }
}

#[must_use]
pub fn clamp_equipment(is_free_user: bool, equipment: Equipment) -> Equipment {
    if is_free_user {
        Equipment::None
    } else {
        equipment
    }
}

/// Powerlifting is only offered to paid users with a real barbell.
#[must_use]
pub fn resolve_style(
    requested: WorkoutStyle,
    is_free_user: bool,
    equipment: Equipment,
) -> WorkoutStyle {
    if requested == WorkoutStyle::Powerlifting && (is_free_user || !equipment.includes_barbell())
    {
        WorkoutStyle::Strength
    } else {
        requested
    }
}

pub trait Property: Clone + Copy + Sized + FromStr + 'static {
    const FIELD: &'static str;

    fn iter() -> Iter<'static, Self>;

    #[must_use]
    fn name(self) -> &'static str;

    fn parse(value: &str) -> Result<Self, InputError> {
        Self::from_str(value).map_err(|_| InputError::unknown(Self::FIELD, value))
    }
}

#[derive(Serialize, Deserialize, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Location {
    Home,
    Hotel,
    Gym,
}

impl Property for Location {
    const FIELD: &'static str = "location";

    fn iter() -> Iter<'static, Location> {
        static LOCATION: [Location; 3] = [Location::Home, Location::Hotel, Location::Gym];
        LOCATION.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Location::Home => "home",
            Location::Hotel => "hotel",
            Location::Gym => "gym",
        }
    }
}

/// Equipment levels, where `FullGym` includes every lower level.
#[derive(Serialize, Deserialize, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    None,
    Dumbbells,
    Barbell,
    FullGym,
}

impl Equipment {
    #[must_use]
    pub fn includes_dumbbells(self) -> bool {
        matches!(self, Equipment::Dumbbells | Equipment::FullGym)
    }

    #[must_use]
    pub fn includes_barbell(self) -> bool {
        matches!(self, Equipment::Barbell | Equipment::FullGym)
    }
}

impl Property for Equipment {
    const FIELD: &'static str = "equipment";

    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 4] = [
            Equipment::None,
            Equipment::Dumbbells,
            Equipment::Barbell,
            Equipment::FullGym,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::None => "none",
            Equipment::Dumbbells => "dumbbells",
            Equipment::Barbell => "barbell",
            Equipment::FullGym => "full_gym",
        }
    }
}

#[derive(Serialize, Deserialize, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Experience {
    const FIELD: &'static str = "experience";

    fn iter() -> Iter<'static, Experience> {
        static EXPERIENCE: [Experience; 3] = [
            Experience::Beginner,
            Experience::Intermediate,
            Experience::Advanced,
        ];
        EXPERIENCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        }
    }
}

#[derive(Serialize, Deserialize, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Energy {
    Low,
    Medium,
    High,
}

impl Energy {
    #[must_use]
    pub fn focus(self) -> &'static str {
        match self {
            Energy::Low => "Gentle Full Body",
            Energy::Medium => "Balanced Full Body",
            Energy::High => "Full Body Power",
        }
    }
}

impl Property for Energy {
    const FIELD: &'static str = "energy";

    fn iter() -> Iter<'static, Energy> {
        static ENERGY: [Energy; 3] = [Energy::Low, Energy::Medium, Energy::High];
        ENERGY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Energy::Low => "low",
            Energy::Medium => "medium",
            Energy::High => "high",
        }
    }
}

#[derive(Serialize, Deserialize, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkoutStyle {
    #[default]
    Balanced,
    Strength,
    Conditioning,
    Powerlifting,
}

impl Property for WorkoutStyle {
    const FIELD: &'static str = "workout style";

    fn iter() -> Iter<'static, WorkoutStyle> {
        static WORKOUT_STYLE: [WorkoutStyle; 4] = [
            WorkoutStyle::Balanced,
            WorkoutStyle::Strength,
            WorkoutStyle::Conditioning,
            WorkoutStyle::Powerlifting,
        ];
        WORKOUT_STYLE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WorkoutStyle::Balanced => "balanced",
            WorkoutStyle::Strength => "strength",
            WorkoutStyle::Conditioning => "conditioning",
            WorkoutStyle::Powerlifting => "powerlifting",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeBudget {
    Min10,
    Min20,
    Min30,
    Min45,
    Min60,
}

impl TimeBudget {
    #[must_use]
    pub fn iter() -> Iter<'static, TimeBudget> {
        static TIME_BUDGET: [TimeBudget; 5] = [
            TimeBudget::Min10,
            TimeBudget::Min20,
            TimeBudget::Min30,
            TimeBudget::Min45,
            TimeBudget::Min60,
        ];
        TIME_BUDGET.iter()
    }

    #[must_use]
    pub fn minutes(self) -> u32 {
        match self {
            TimeBudget::Min10 => 10,
            TimeBudget::Min20 => 20,
            TimeBudget::Min30 => 30,
            TimeBudget::Min45 => 45,
            TimeBudget::Min60 => 60,
        }
    }
}

impl TryFrom<u32> for TimeBudget {
    type Error = InputError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        TimeBudget::iter()
            .find(|t| t.minutes() == value)
            .copied()
            .ok_or(InputError::InvalidTime(value))
    }
}

impl TryFrom<&str> for TimeBudget {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(minutes) => TimeBudget::try_from(minutes),
            Err(_) => Err(InputError::unknown("time", value)),
        }
    }
}

impl From<TimeBudget> for u32 {
    fn from(value: TimeBudget) -> Self {
        value.minutes()
    }
}

impl fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}
