use std::fmt;

use crate::{TimeBudget, WorkoutInputs, build_pool, compose, select_warmup};

/// A generated session, rendered as plain text by its `Display` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub focus: &'static str,
    pub warmup_label: &'static str,
    pub warmup_minutes: u32,
    pub warmup: Vec<String>,
    pub time: TimeBudget,
    pub workout: Vec<String>,
}

impl fmt::Display for WorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Today's Focus: {}", self.focus)?;
        writeln!(f, "{} ({} min):", self.warmup_label, self.warmup_minutes)?;
        for line in &self.warmup {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Workout ({} min):", self.time)?;
        for line in &self.workout {
            writeln!(f, "{line}")?;
        }
        write!(f, "Rest as needed. Start now.")
    }
}

#[must_use]
pub fn generate_plan(inputs: &WorkoutInputs) -> WorkoutPlan {
    let inputs = inputs.normalize();
    let pool = build_pool(&inputs);
    let composition = compose(&inputs, &pool);
    let warmup = select_warmup(composition.style, &inputs);

    WorkoutPlan {
        focus: inputs.energy.focus(),
        warmup_label: warmup.label,
        warmup_minutes: warmup.minutes,
        warmup: warmup.lines(),
        time: inputs.time,
        workout: composition.lines,
    }
}

/// Generates the text of a workout plan.
///
/// The result only depends on `inputs`: the same request with the same variation seed always
/// yields the same text, and a request without a seed uses the catalog order.
#[must_use]
pub fn generate_workout(inputs: &WorkoutInputs) -> String {
    generate_plan(inputs).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        Energy, Equipment, Experience, Location, Property, WorkoutStyle, catalog::Movement,
        pool::KNEE_RISK_TAGS,
    };

    fn workout_lines(output: &str) -> Vec<&str> {
        output
            .lines()
            .skip_while(|l| !l.starts_with("Workout ("))
            .skip(1)
            .take_while(|l| l.starts_with("- "))
            .collect()
    }

    fn exercise_name(line: &str) -> &str {
        let line = line.trim_start_matches("- ");
        let parts = line.split(": ").collect::<Vec<_>>();
        if parts.len() == 3 { parts[1] } else { parts[0] }
    }

    #[rstest]
    #[case::free_user_clamped(
        WorkoutInputs {
            time_minutes: TimeBudget::Min20,
            location: Location::Home,
            equipment: Equipment::Dumbbells,
            experience: Experience::Beginner,
            energy: Energy::Low,
            limitations: Some(String::new()),
            is_free_user: true,
            variation_seed: Some(42),
            workout_style: None,
        },
        "Today's Focus: Gentle Full Body\n\
         Wake up (5 min):\n\
         - March in place: 30s\n\
         - Hip hinge: 8 reps\n\
         - Glute bridge: 8 reps\n\
         - Push-up: 6 reps\n\
         - Plank: 20s\n\
         Workout (20 min):\n\
         - AMRAP: Glute bridge: 8 reps\n\
         - AMRAP: Standing calf raise: 8 reps\n\
         - AMRAP: Push-up: 8 reps\n\
         - AMRAP: Squat: 8 reps\n\
         Rest as needed. Start now."
    )]
    #[case::powerlifting(
        WorkoutInputs {
            time_minutes: TimeBudget::Min45,
            location: Location::Gym,
            equipment: Equipment::Barbell,
            experience: Experience::Advanced,
            energy: Energy::High,
            limitations: Some(String::new()),
            is_free_user: false,
            variation_seed: Some(7),
            workout_style: Some(WorkoutStyle::Powerlifting),
        },
        "Today's Focus: Full Body Power\n\
         Barbell prep (4 min):\n\
         - Barbell warm-up set: 8 reps\n\
         - Barbell warm-up set: 5 reps\n\
         - Hip hinge: 6 reps\n\
         - Plank: 20s\n\
         Workout (45 min):\n\
         - Barbell deadlift: 5x3 (rest 2-3 min)\n\
         - Barbell overhead press: 3x8\n\
         - Barbell squat: 3x8\n\
         Rest as needed. Start now."
    )]
    #[case::balanced_emom(
        WorkoutInputs {
            time_minutes: TimeBudget::Min10,
            workout_style: Some(WorkoutStyle::Balanced),
            ..WorkoutInputs::default()
        },
        "Today's Focus: Balanced Full Body\n\
         Activate (3 min):\n\
         - March in place: 30s\n\
         - Hip hinge: 8 reps\n\
         - Push-up: 6 reps\n\
         - Plank: 20s\n\
         Workout (10 min):\n\
         - EMOM: Squat: 10 reps\n\
         - EMOM: Push-up: 10 reps\n\
         - EMOM: Glute bridge: 10 reps\n\
         Rest as needed. Start now."
    )]
    #[case::knee_pain(
        WorkoutInputs {
            time_minutes: TimeBudget::Min30,
            location: Location::Hotel,
            equipment: Equipment::None,
            experience: Experience::Intermediate,
            energy: Energy::Medium,
            limitations: Some("knee pain".into()),
            is_free_user: false,
            variation_seed: None,
            workout_style: None,
        },
        "Today's Focus: Balanced Full Body\n\
         Activate (3 min):\n\
         - March in place: 30s\n\
         - Hip hinge: 8 reps\n\
         - Push-up: 6 reps\n\
         - Plank: 20s\n\
         Workout (30 min):\n\
         - Rounds 4: Push-up: 8 reps\n\
         - Rounds 4: Glute bridge: 8 reps\n\
         - Rounds 4: Plank: 20s\n\
         - Rounds 4: Dead bug: 8 reps\n\
         Rest as needed. Start now."
    )]
    #[case::powerlifting_unseeded(
        WorkoutInputs {
            time_minutes: TimeBudget::Min45,
            location: Location::Gym,
            equipment: Equipment::Barbell,
            experience: Experience::Advanced,
            energy: Energy::High,
            limitations: None,
            is_free_user: false,
            variation_seed: None,
            workout_style: Some(WorkoutStyle::Powerlifting),
        },
        "Today's Focus: Full Body Power\n\
         Barbell prep (4 min):\n\
         - Barbell warm-up set: 8 reps\n\
         - Barbell warm-up set: 5 reps\n\
         - Hip hinge: 6 reps\n\
         - Plank: 20s\n\
         Workout (45 min):\n\
         - Barbell squat: 5x3 (rest 2-3 min)\n\
         - Barbell bench press: 3x8\n\
         - Barbell deadlift: 3x8\n\
         Rest as needed. Start now."
    )]
    #[case::powerlifting_without_main_lift(
        WorkoutInputs {
            time_minutes: TimeBudget::Min20,
            location: Location::Home,
            equipment: Equipment::Barbell,
            experience: Experience::Intermediate,
            energy: Energy::Medium,
            limitations: None,
            is_free_user: false,
            variation_seed: None,
            workout_style: Some(WorkoutStyle::Powerlifting),
        },
        "Today's Focus: Balanced Full Body\n\
         Activate (3 min):\n\
         - March in place: 30s\n\
         - Hip hinge: 8 reps\n\
         - Glute bridge: 8 reps\n\
         - Plank: 20s\n\
         Workout (20 min):\n\
         Rest as needed. Start now."
    )]
    #[case::conditioning_knee(
        WorkoutInputs {
            time_minutes: TimeBudget::Min60,
            location: Location::Gym,
            equipment: Equipment::FullGym,
            experience: Experience::Intermediate,
            energy: Energy::Low,
            limitations: Some("Knee".into()),
            is_free_user: false,
            variation_seed: Some(3),
            workout_style: Some(WorkoutStyle::Conditioning),
        },
        "Today's Focus: Gentle Full Body\n\
         Activate (5 min):\n\
         - March in place: 30s\n\
         - Glute bridge: 8 reps\n\
         - Push-up: 6 reps\n\
         - Dead bug: 6 reps\n\
         - Plank: 20s\n\
         Workout (60 min):\n\
         - AMRAP: Standing calf raise: 12 reps\n\
         - AMRAP: Barbell row: 12 reps\n\
         - AMRAP: Farmer carry: 12 reps\n\
         - AMRAP: Dumbbell deadlift: 12 reps\n\
         - AMRAP: Barbell deadlift: 12 reps\n\
         Rest as needed. Start now."
    )]
    #[case::conditioning_emom(
        WorkoutInputs {
            time_minutes: TimeBudget::Min10,
            location: Location::Hotel,
            equipment: Equipment::None,
            experience: Experience::Beginner,
            energy: Energy::High,
            limitations: None,
            is_free_user: true,
            variation_seed: Some(2024),
            workout_style: Some(WorkoutStyle::Conditioning),
        },
        "Today's Focus: Full Body Power\n\
         Get loose (4 min):\n\
         - Arm circles: 20s\n\
         - Hip hinge: 8 reps\n\
         - Glute bridge: 8 reps\n\
         - Plank: 20s\n\
         Workout (10 min):\n\
         - EMOM: Standing calf raise: 16 reps\n\
         - EMOM: Squat: 16 reps\n\
         - EMOM: Push-up: 16 reps\n\
         Rest as needed. Start now."
    )]
    #[case::strength_dumbbells(
        WorkoutInputs {
            time_minutes: TimeBudget::Min60,
            location: Location::Home,
            equipment: Equipment::Dumbbells,
            experience: Experience::Intermediate,
            energy: Energy::Medium,
            limitations: Some("  ".into()),
            is_free_user: false,
            variation_seed: Some(99),
            workout_style: Some(WorkoutStyle::Strength),
        },
        "Today's Focus: Balanced Full Body\n\
         Activate (3 min):\n\
         - March in place: 30s\n\
         - Hip hinge: 8 reps\n\
         - Glute bridge: 8 reps\n\
         - Plank: 20s\n\
         Workout (60 min):\n\
         - Rounds 5: Dumbbell press: 6 reps\n\
         - Rounds 5: Farmer carry: 6 reps\n\
         - Rounds 5: Dumbbell squat: 6 reps\n\
         - Rounds 5: Dumbbell shoulder press: 6 reps\n\
         Rest as needed. Start now."
    )]
    #[case::powerlifting_free_user(
        WorkoutInputs {
            time_minutes: TimeBudget::Min30,
            location: Location::Gym,
            equipment: Equipment::FullGym,
            experience: Experience::Intermediate,
            energy: Energy::High,
            limitations: None,
            is_free_user: true,
            variation_seed: None,
            workout_style: Some(WorkoutStyle::Powerlifting),
        },
        "Today's Focus: Full Body Power\n\
         Activate (3 min):\n\
         - March in place: 30s\n\
         - Hip hinge: 8 reps\n\
         - Glute bridge: 8 reps\n\
         - Plank: 20s\n\
         Workout (20 min):\n\
         - Rounds 3: Squat: 8 reps\n\
         - Rounds 3: Push-up: 8 reps\n\
         - Rounds 3: Glute bridge: 8 reps\n\
         Rest as needed. Start now."
    )]
    #[case::powerlifting_knee(
        WorkoutInputs {
            time_minutes: TimeBudget::Min20,
            location: Location::Gym,
            equipment: Equipment::FullGym,
            experience: Experience::Beginner,
            energy: Energy::Medium,
            limitations: Some("knee".into()),
            is_free_user: false,
            variation_seed: Some(1_700_000_000_123),
            workout_style: Some(WorkoutStyle::Powerlifting),
        },
        "Today's Focus: Balanced Full Body\n\
         Prep (4 min):\n\
         - Arm circles: 20s\n\
         - Hip hinge: 8 reps\n\
         - Glute bridge: 8 reps\n\
         - Dead bug: 6 reps\n\
         Workout (20 min):\n\
         - Barbell deadlift: 3x5 (rest 2-3 min)\n\
         - Dumbbell shoulder press: 3x8\n\
         Rest as needed. Start now."
    )]
    fn test_generate_workout(#[case] inputs: WorkoutInputs, #[case] expected: &str) {
        assert_eq!(generate_workout(&inputs), expected);
    }

    #[test]
    fn test_generate_plan() {
        let plan = generate_plan(&WorkoutInputs {
            time_minutes: TimeBudget::Min10,
            ..WorkoutInputs::default()
        });

        assert_eq!(
            plan,
            WorkoutPlan {
                focus: "Balanced Full Body",
                warmup_label: "Activate",
                warmup_minutes: 3,
                warmup: vec![
                    "- March in place: 30s".to_string(),
                    "- Hip hinge: 8 reps".to_string(),
                    "- Push-up: 6 reps".to_string(),
                    "- Plank: 20s".to_string(),
                ],
                time: TimeBudget::Min10,
                workout: vec![
                    "- EMOM: Squat: 10 reps".to_string(),
                    "- EMOM: Push-up: 10 reps".to_string(),
                    "- EMOM: Glute bridge: 10 reps".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_generate_workout_deterministic() {
        let inputs = WorkoutInputs {
            time_minutes: TimeBudget::Min60,
            location: Location::Gym,
            equipment: Equipment::FullGym,
            is_free_user: false,
            ..WorkoutInputs::default()
        };

        for seed in [0, 1, 42, -7, 1_700_000_000_000] {
            let inputs = inputs.with_seed(seed);
            assert_eq!(generate_workout(&inputs), generate_workout(&inputs));
        }
    }

    #[test]
    fn test_generate_workout_restart() {
        let inputs = WorkoutInputs {
            time_minutes: TimeBudget::Min60,
            location: Location::Gym,
            equipment: Equipment::FullGym,
            is_free_user: false,
            ..WorkoutInputs::default()
        };

        let outputs = (0..10)
            .map(|seed| generate_workout(&inputs.with_seed(seed)))
            .collect::<std::collections::HashSet<_>>();

        assert!(outputs.len() > 1);
    }

    #[test]
    fn test_generate_workout_free_user() {
        let bodyweight = Movement::Bodyweight
            .exercises()
            .iter()
            .map(|e| e.name)
            .collect::<Vec<_>>();

        for time in TimeBudget::iter() {
            for equipment in Equipment::iter() {
                for style in WorkoutStyle::iter() {
                    for seed in 0..5 {
                        let output = generate_workout(&WorkoutInputs {
                            time_minutes: *time,
                            location: Location::Gym,
                            equipment: *equipment,
                            is_free_user: true,
                            variation_seed: Some(seed),
                            workout_style: Some(*style),
                            ..WorkoutInputs::default()
                        });

                        let expected_time = if *time > TimeBudget::Min20 {
                            TimeBudget::Min20
                        } else {
                            *time
                        };
                        assert!(output.contains(&format!("Workout ({expected_time} min):")));
                        for line in workout_lines(&output) {
                            assert!(
                                bodyweight.contains(&exercise_name(line)),
                                "unexpected line {line}"
                            );
                            assert!(
                                line.starts_with("- Rounds")
                                    || *style != WorkoutStyle::Powerlifting
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_generate_workout_knee_safety() {
        let risky = Movement::iter()
            .flat_map(|m| m.exercises().iter())
            .filter(|e| e.has_any_tag(KNEE_RISK_TAGS))
            .map(|e| e.name)
            .collect::<Vec<_>>();

        for location in Location::iter() {
            for equipment in Equipment::iter() {
                for style in WorkoutStyle::iter() {
                    for seed in [None, Some(1), Some(2), Some(3)] {
                        let output = generate_workout(&WorkoutInputs {
                            time_minutes: TimeBudget::Min60,
                            location: *location,
                            equipment: *equipment,
                            limitations: Some("Left KNEE".into()),
                            is_free_user: false,
                            variation_seed: seed,
                            workout_style: Some(*style),
                            ..WorkoutInputs::default()
                        });

                        for line in output.lines().filter(|l| l.starts_with("- ")) {
                            assert!(!risky.contains(&exercise_name(line)), "risky line {line}");
                        }
                    }
                }
            }
        }
    }

    #[rstest]
    #[case(Equipment::None)]
    #[case(Equipment::Dumbbells)]
    fn test_generate_workout_powerlifting_without_barbell(#[case] equipment: Equipment) {
        for seed in 0..10 {
            let output = generate_workout(&WorkoutInputs {
                time_minutes: TimeBudget::Min45,
                location: Location::Gym,
                equipment,
                is_free_user: false,
                variation_seed: Some(seed),
                workout_style: Some(WorkoutStyle::Powerlifting),
                ..WorkoutInputs::default()
            });

            let lines = workout_lines(&output);
            assert_eq!(lines.len(), 4);
            assert!(lines.iter().all(|l| l.starts_with("- Rounds 5: ")));
            assert!(!output.contains("(rest 2-3 min)"));
        }
    }

    #[rstest]
    #[case(Equipment::Barbell)]
    #[case(Equipment::FullGym)]
    fn test_generate_workout_powerlifting(#[case] equipment: Equipment) {
        for seed in 0..10 {
            let output = generate_workout(&WorkoutInputs {
                time_minutes: TimeBudget::Min30,
                location: Location::Gym,
                equipment,
                experience: Experience::Intermediate,
                is_free_user: false,
                variation_seed: Some(seed),
                workout_style: Some(WorkoutStyle::Powerlifting),
                ..WorkoutInputs::default()
            });

            let lines = workout_lines(&output);
            assert_eq!(lines.len(), 3);
            assert!(lines[0].starts_with("- Barbell "));
            assert!(lines[0].ends_with(": 5x5 (rest 2-3 min)"));
        }
    }

    #[test]
    fn test_generate_workout_balanced_emom() {
        for seed in [None, Some(1), Some(10), Some(100)] {
            let output = generate_workout(&WorkoutInputs {
                time_minutes: TimeBudget::Min10,
                variation_seed: seed,
                workout_style: Some(WorkoutStyle::Balanced),
                ..WorkoutInputs::default()
            });

            let lines = workout_lines(&output);
            assert_eq!(lines.len(), 3);
            assert!(lines.iter().all(|l| l.starts_with("- EMOM: ")));
        }
    }
}
