use std::cmp::Reverse;

use log::debug;

use crate::{Equipment, NormalizedInputs, catalog, catalog::Movement, random};

/// Tags of movements that stress the knees.
pub const KNEE_RISK_TAGS: &[&str] = &["jump", "run", "lunge", "squat", "step-up"];
/// Tags of movements preferred while knee safety is active.
pub const KNEE_PREFERRED_TAGS: &[&str] = &["upper", "core", "hinge", "carry"];
/// Tags excluded from free tier sessions to keep them simple.
pub const FREE_EXCLUDED_TAGS: &[&str] = &["lunge", "jump"];

/// Candidate exercises for one request, in selection order.
pub type ExercisePool = Vec<&'static catalog::Exercise>;

#[must_use]
pub fn allowed_movements(equipment: Equipment) -> Vec<Movement> {
    let mut movements = vec![Movement::Bodyweight];
    if equipment.includes_dumbbells() {
        movements.push(Movement::Dumbbell);
    }
    if equipment.includes_barbell() {
        movements.push(Movement::Barbell);
    }
    movements
}

#[must_use]
pub fn build_pool(inputs: &NormalizedInputs) -> ExercisePool {
    let equipment = inputs.equipment;

    let mut pool = allowed_movements(equipment)
        .into_iter()
        .flat_map(Movement::exercises)
        .filter(|e| e.locations.contains(&inputs.location))
        .filter(|e| e.equipment.contains(&equipment) || equipment == Equipment::FullGym)
        .filter(|e| !inputs.knee_safety || !e.has_any_tag(KNEE_RISK_TAGS))
        .filter(|e| !inputs.is_free_user || !e.has_any_tag(FREE_EXCLUDED_TAGS))
        .collect::<ExercisePool>();

    if inputs.knee_safety {
        pool.sort_by_key(|e| Reverse(e.has_any_tag(KNEE_PREFERRED_TAGS)));
    }

    let pool = random::shuffle_if_seeded(pool, inputs.seed, 0);

    debug!("built pool of {} exercises", pool.len());

    pool
}
