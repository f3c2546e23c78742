use std::slice::Iter;

use crate::{Equipment, Location};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub locations: &'static [Location],
    pub equipment: &'static [Equipment],
    pub movement: Movement,
    pub tags: &'static [&'static str],
}

impl Exercise {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    #[must_use]
    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        self.tags.iter().any(|t| tags.contains(t))
    }

    /// Planks are prescribed as a hold instead of reps.
    #[must_use]
    pub fn is_hold(&self) -> bool {
        self.name == PLANK
    }

    #[must_use]
    pub fn is_main_lift(&self) -> bool {
        self.has_tag(MAIN_LIFT)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Movement {
    Bodyweight,
    Dumbbell,
    Barbell,
}

impl Movement {
    #[must_use]
    pub fn iter() -> Iter<'static, Movement> {
        static MOVEMENT: [Movement; 3] =
            [Movement::Bodyweight, Movement::Dumbbell, Movement::Barbell];
        MOVEMENT.iter()
    }

    #[must_use]
    pub fn exercises(self) -> &'static [Exercise] {
        match self {
            Movement::Bodyweight => &BODYWEIGHT,
            Movement::Dumbbell => &DUMBBELL,
            Movement::Barbell => &BARBELL,
        }
    }
}

pub const PLANK: &str = "Plank";
pub const MAIN_LIFT: &str = "main_lift";

const ANYWHERE: &[Location] = &[Location::Home, Location::Hotel, Location::Gym];
const GYM: &[Location] = &[Location::Gym];

const BODYWEIGHT_EQUIPMENT: &[Equipment] = &[Equipment::None];
const DUMBBELL_EQUIPMENT: &[Equipment] = &[Equipment::Dumbbells, Equipment::FullGym];
const BARBELL_EQUIPMENT: &[Equipment] = &[Equipment::Barbell, Equipment::FullGym];

const fn bodyweight(name: &'static str, tags: &'static [&'static str]) -> Exercise {
    Exercise {
        name,
        locations: ANYWHERE,
        equipment: BODYWEIGHT_EQUIPMENT,
        movement: Movement::Bodyweight,
        tags,
    }
}

const fn dumbbell(name: &'static str, tags: &'static [&'static str]) -> Exercise {
    Exercise {
        name,
        locations: ANYWHERE,
        equipment: DUMBBELL_EQUIPMENT,
        movement: Movement::Dumbbell,
        tags,
    }
}

const fn barbell(name: &'static str, tags: &'static [&'static str]) -> Exercise {
    Exercise {
        name,
        locations: GYM,
        equipment: BARBELL_EQUIPMENT,
        movement: Movement::Barbell,
        tags,
    }
}

static BODYWEIGHT: [Exercise; 10] = [
    bodyweight("Squat", &["lower", "squat"]),
    bodyweight("Push-up", &["upper"]),
    bodyweight("Reverse lunge", &["lower", "lunge"]),
    bodyweight("Glute bridge", &["hinge", "glute"]),
    bodyweight(PLANK, &["core"]),
    bodyweight("Dead bug", &["core"]),
    bodyweight("Mountain climber", &["core", "cardio"]),
    bodyweight("Step-back lunge", &["lower", "lunge"]),
    bodyweight("Hip hinge", &["hinge"]),
    bodyweight("Standing calf raise", &["lower"]),
];

static DUMBBELL: [Exercise; 7] = [
    dumbbell("Dumbbell squat", &["lower", "squat"]),
    dumbbell("Dumbbell row", &["upper", "row"]),
    dumbbell("Dumbbell deadlift", &["hinge"]),
    dumbbell("Dumbbell press", &["upper"]),
    dumbbell("Dumbbell lunge", &["lower", "lunge"]),
    dumbbell("Dumbbell shoulder press", &["upper"]),
    dumbbell("Farmer carry", &["carry", "core"]),
];

static BARBELL: [Exercise; 5] = [
    barbell("Barbell squat", &["lower", "squat", MAIN_LIFT]),
    barbell("Barbell bench press", &["upper", "bench", MAIN_LIFT]),
    barbell("Barbell deadlift", &["hinge", "deadlift", MAIN_LIFT]),
    barbell("Barbell row", &["upper", "row"]),
    barbell("Barbell overhead press", &["upper"]),
];
