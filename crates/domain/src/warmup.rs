use std::fmt;

use log::debug;

use crate::{NormalizedInputs, Property, WorkoutStyle, random};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmupMove {
    Reps(&'static str, u32),
    Seconds(&'static str, u32),
}

impl fmt::Display for WarmupMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarmupMove::Reps(name, reps) => write!(f, "- {name}: {reps} reps"),
            WarmupMove::Seconds(name, seconds) => write!(f, "- {name}: {seconds}s"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmupTemplate {
    pub label: &'static str,
    pub minutes: u32,
    pub moves: &'static [WarmupMove],
    pub uses_barbell: bool,
    pub no_jump: bool,
    pub knee_safe: bool,
}

impl WarmupTemplate {
    const fn new(label: &'static str, minutes: u32, moves: &'static [WarmupMove]) -> Self {
        Self {
            label,
            minutes,
            moves,
            uses_barbell: false,
            no_jump: true,
            knee_safe: true,
        }
    }

    fn is_allowed(&self, inputs: &NormalizedInputs) -> bool {
        if inputs.knee_safety && !self.knee_safe {
            return false;
        }
        if inputs.is_free_user && !self.no_jump {
            return false;
        }
        !self.uses_barbell || inputs.has_barbell_access()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.moves.iter().map(ToString::to_string).collect()
    }
}

const MARCH: WarmupMove = WarmupMove::Seconds("March in place", 30);
const ARM_CIRCLES: WarmupMove = WarmupMove::Seconds("Arm circles", 20);
const PLANK: WarmupMove = WarmupMove::Seconds("Plank", 20);
const HIP_HINGE: WarmupMove = WarmupMove::Reps("Hip hinge", 8);
const GLUTE_BRIDGE: WarmupMove = WarmupMove::Reps("Glute bridge", 8);
const PUSH_UP: WarmupMove = WarmupMove::Reps("Push-up", 6);
const DEAD_BUG: WarmupMove = WarmupMove::Reps("Dead bug", 6);
const WALL_PUSH_UP: WarmupMove = WarmupMove::Reps("Wall push-up", 8);

static STRENGTH: [WarmupTemplate; 3] = [
    WarmupTemplate::new("Activate", 3, &[MARCH, HIP_HINGE, GLUTE_BRIDGE, PLANK]),
    WarmupTemplate::new("Prep", 4, &[MARCH, GLUTE_BRIDGE, DEAD_BUG, PLANK]),
    WarmupTemplate::new(
        "Get loose",
        4,
        &[
            ARM_CIRCLES,
            HIP_HINGE,
            WALL_PUSH_UP,
            WarmupMove::Reps("Calf raise", 10),
        ],
    ),
];

static CONDITIONING: [WarmupTemplate; 4] = [
    WarmupTemplate::new(
        "Wake up",
        3,
        &[
            MARCH,
            WarmupMove::Seconds("Mountain climber", 20),
            HIP_HINGE,
            PLANK,
        ],
    ),
    WarmupTemplate::new("Quick prep", 4, &[MARCH, PUSH_UP, DEAD_BUG, PLANK]),
    WarmupTemplate::new("Get loose", 4, &[ARM_CIRCLES, HIP_HINGE, GLUTE_BRIDGE, PLANK]),
    WarmupTemplate::new(
        "Activate",
        5,
        &[MARCH, GLUTE_BRIDGE, PUSH_UP, DEAD_BUG, PLANK],
    ),
];

static POWERLIFTING: [WarmupTemplate; 3] = [
    WarmupTemplate {
        uses_barbell: true,
        knee_safe: false,
        ..WarmupTemplate::new(
            "Barbell prep",
            4,
            &[
                WarmupMove::Reps("Barbell warm-up set", 8),
                WarmupMove::Reps("Barbell warm-up set", 5),
                WarmupMove::Reps("Hip hinge", 6),
                PLANK,
            ],
        )
    },
    WarmupTemplate::new("Activate", 3, &[MARCH, HIP_HINGE, GLUTE_BRIDGE, PLANK]),
    WarmupTemplate::new("Prep", 4, &[ARM_CIRCLES, HIP_HINGE, GLUTE_BRIDGE, DEAD_BUG]),
];

static BALANCED: [WarmupTemplate; 4] = [
    WarmupTemplate::new("Activate", 3, &[MARCH, HIP_HINGE, PUSH_UP, PLANK]),
    WarmupTemplate::new("Prep", 4, &[MARCH, GLUTE_BRIDGE, PUSH_UP, DEAD_BUG]),
    WarmupTemplate::new("Get loose", 4, &[ARM_CIRCLES, HIP_HINGE, WALL_PUSH_UP, PLANK]),
    WarmupTemplate::new(
        "Wake up",
        5,
        &[MARCH, HIP_HINGE, GLUTE_BRIDGE, PUSH_UP, PLANK],
    ),
];

#[must_use]
pub fn templates_for_style(style: WorkoutStyle) -> &'static [WarmupTemplate] {
    match style {
        WorkoutStyle::Balanced => &BALANCED,
        WorkoutStyle::Strength => &STRENGTH,
        WorkoutStyle::Conditioning => &CONDITIONING,
        WorkoutStyle::Powerlifting => &POWERLIFTING,
    }
}

#[must_use]
pub fn select_warmup(style: WorkoutStyle, inputs: &NormalizedInputs) -> &'static WarmupTemplate {
    let chosen = select_from(templates_for_style(style), inputs);

    debug!("selected warm-up {} for {} style", chosen.label, style.name());

    chosen
}

/// Picks the first allowed template in seeded order, then the first knee-safe template usable
/// with the available equipment, then the first template.
fn select_from(
    templates: &'static [WarmupTemplate],
    inputs: &NormalizedInputs,
) -> &'static WarmupTemplate {
    let shuffled =
        random::shuffle_if_seeded(templates.iter().collect::<Vec<_>>(), inputs.seed, 3);

    shuffled
        .into_iter()
        .find(|t| t.is_allowed(inputs))
        .or_else(|| {
            templates
                .iter()
                .find(|t| t.knee_safe && (!t.uses_barbell || inputs.has_barbell_access()))
        })
        .unwrap_or(&templates[0])
}
