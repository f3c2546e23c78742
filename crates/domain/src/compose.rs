use std::cmp::Reverse;

use log::debug;

use crate::{
    Experience, ExercisePool, NormalizedInputs, TimeBudget, WorkoutStyle, catalog::Exercise,
    plan_for_style, random, volume_for,
};

/// Tags ranked first when picking powerlifting accessories.
pub const ACCESSORY_PREFERRED_TAGS: &[&str] = &["row", "hinge", "core", "carry", "upper"];

/// Main workout lines and the style whose warm-up goes with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub style: WorkoutStyle,
    pub lines: Vec<String>,
}

#[must_use]
pub fn compose(inputs: &NormalizedInputs, pool: &ExercisePool) -> Composition {
    if inputs.style == WorkoutStyle::Powerlifting {
        if let Some(lines) = compose_powerlifting(inputs, pool) {
            return Composition {
                style: WorkoutStyle::Powerlifting,
                lines,
            };
        }
        debug!("no main lift available, falling back to strength session");
        return Composition {
            style: WorkoutStyle::Strength,
            lines: compose_general(WorkoutStyle::Strength, inputs, pool),
        };
    }

    Composition {
        style: inputs.style,
        lines: compose_general(inputs.style, inputs, pool),
    }
}

/// Takes the first exercises of the pool as prescribed by the plan template.
#[must_use]
pub fn compose_general(
    style: WorkoutStyle,
    inputs: &NormalizedInputs,
    pool: &ExercisePool,
) -> Vec<String> {
    let plan = plan_for_style(style, inputs.time);
    let volume = volume_for(style, inputs.energy, inputs.has_limitations());
    let prefix = plan.prefix();

    pool.iter()
        .take(plan.moves)
        .map(|e| {
            if e.is_hold() {
                format!("- {prefix}: {}: {}s", e.name, volume.seconds)
            } else {
                format!("- {prefix}: {}: {} reps", e.name, volume.reps)
            }
        })
        .collect()
}

/// One main lift followed by accessories, or `None` if the pool holds no main lift.
#[must_use]
pub fn compose_powerlifting(inputs: &NormalizedInputs, pool: &ExercisePool) -> Option<Vec<String>> {
    let candidates = pool
        .iter()
        .copied()
        .filter(|e| e.is_main_lift())
        .collect::<Vec<_>>();
    let main_lift = *random::shuffle_if_seeded(candidates, inputs.seed, 0).first()?;
    let (sets, reps) = main_lift_prescription(inputs.experience);

    let mut accessories = pool
        .iter()
        .copied()
        .filter(|e| e.name != main_lift.name)
        .collect::<Vec<_>>();
    accessories.sort_by_key(|e| Reverse(e.has_any_tag(ACCESSORY_PREFERRED_TAGS)));
    let accessories = random::shuffle_if_seeded(accessories, inputs.seed, 1);

    debug!("selected main lift {}", main_lift.name);

    Some(
        std::iter::once(format!(
            "- {}: {sets}x{reps} (rest 2-3 min)",
            main_lift.name
        ))
        .chain(
            accessories
                .into_iter()
                .take(accessory_count(inputs.time))
                .map(accessory_line),
        )
        .collect(),
    )
}

/// Sets and reps of the main lift.
#[must_use]
pub fn main_lift_prescription(experience: Experience) -> (u32, u32) {
    match experience {
        Experience::Beginner => (3, 5),
        Experience::Intermediate => (5, 5),
        Experience::Advanced => (5, 3),
    }
}

#[must_use]
pub fn accessory_count(time: TimeBudget) -> usize {
    if time <= TimeBudget::Min20 { 1 } else { 2 }
}

fn accessory_line(exercise: &Exercise) -> String {
    if exercise.is_hold() {
        format!("- {}: 30s", exercise.name)
    } else {
        format!("- {}: 3x8", exercise.name)
    }
}
