use std::fmt;

use derive_more::{Display, Into};

use crate::{Energy, TimeBudget, WorkoutStyle};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockLabel {
    Rounds,
    Amrap,
    Emom,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlanTemplate {
    pub label: BlockLabel,
    pub rounds: u32,
    pub moves: usize,
}

impl PlanTemplate {
    const fn new(label: BlockLabel, rounds: u32, moves: usize) -> Self {
        Self {
            label,
            rounds,
            moves,
        }
    }

    /// Prefix put in front of every line of the block.
    #[must_use]
    pub fn prefix(&self) -> Prefix {
        Prefix(*self)
    }
}

pub struct Prefix(PlanTemplate);

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.label {
            BlockLabel::Rounds => write!(f, "Rounds {}", self.0.rounds),
            BlockLabel::Amrap => write!(f, "AMRAP"),
            BlockLabel::Emom => write!(f, "EMOM"),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seconds(u32);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VolumePrescription {
    pub reps: Reps,
    pub seconds: Seconds,
}

impl VolumePrescription {
    const MIN_REPS: u32 = 6;
    const MIN_SECONDS: u32 = 15;

    const fn new(reps: u32, seconds: u32) -> Self {
        Self {
            reps: Reps(reps),
            seconds: Seconds(seconds),
        }
    }

    fn reduced(self) -> Self {
        Self::new(
            self.reps.0.saturating_sub(2).max(Self::MIN_REPS),
            self.seconds.0.saturating_sub(10).max(Self::MIN_SECONDS),
        )
    }

    fn increased(self) -> Self {
        Self::new(self.reps.0 + 2, self.seconds.0 + 5)
    }
}

/// Block structure for one style and time budget.
///
/// Powerlifting sessions are composed without a template; they share the strength table so the
/// lookup stays total.
#[must_use]
pub fn plan_for_style(style: WorkoutStyle, time: TimeBudget) -> PlanTemplate {
    use BlockLabel::{Amrap, Emom, Rounds};

    match (style, time) {
        (WorkoutStyle::Strength | WorkoutStyle::Powerlifting, TimeBudget::Min10) => {
            PlanTemplate::new(Rounds, 3, 2)
        }
        (WorkoutStyle::Strength | WorkoutStyle::Powerlifting, TimeBudget::Min20) => {
            PlanTemplate::new(Rounds, 3, 3)
        }
        (WorkoutStyle::Strength | WorkoutStyle::Powerlifting, TimeBudget::Min30) => {
            PlanTemplate::new(Rounds, 4, 3)
        }
        (
            WorkoutStyle::Strength | WorkoutStyle::Powerlifting,
            TimeBudget::Min45 | TimeBudget::Min60,
        ) => PlanTemplate::new(Rounds, 5, 4),
        (WorkoutStyle::Conditioning | WorkoutStyle::Balanced, TimeBudget::Min10) => {
            PlanTemplate::new(Emom, 1, 3)
        }
        (WorkoutStyle::Conditioning | WorkoutStyle::Balanced, TimeBudget::Min20) => {
            PlanTemplate::new(Amrap, 1, 4)
        }
        (WorkoutStyle::Conditioning, TimeBudget::Min30) => PlanTemplate::new(Amrap, 1, 4),
        (WorkoutStyle::Conditioning, TimeBudget::Min45 | TimeBudget::Min60) => {
            PlanTemplate::new(Amrap, 1, 5)
        }
        (WorkoutStyle::Balanced, TimeBudget::Min30) => PlanTemplate::new(Rounds, 4, 4),
        (WorkoutStyle::Balanced, TimeBudget::Min45) => PlanTemplate::new(Rounds, 5, 4),
        (WorkoutStyle::Balanced, TimeBudget::Min60) => PlanTemplate::new(Rounds, 6, 4),
    }
}

/// Reps and hold time for every line of a block.
///
/// Low energy and limitations trigger the same single reduction.
#[must_use]
pub fn volume_for(style: WorkoutStyle, energy: Energy, has_limitations: bool) -> VolumePrescription {
    let base = match style {
        WorkoutStyle::Strength | WorkoutStyle::Powerlifting => VolumePrescription::new(6, 20),
        WorkoutStyle::Conditioning => VolumePrescription::new(14, 40),
        WorkoutStyle::Balanced => VolumePrescription::new(10, 30),
    };

    if energy == Energy::Low || has_limitations {
        base.reduced()
    } else if energy == Energy::High {
        base.increased()
    } else {
        base
    }
}
