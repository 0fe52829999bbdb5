//! Rule-based coaching recommendations for a single logged day.
//!
//! Four independent rules (water, calories, activity, food) are
//! evaluated against the entry being saved, plus a fixed four-item plan
//! for the next day. Everything here is a pure function over the entry
//! and the optional profile; with no profile, the calorie and food
//! rules degrade to informational output instead of failing.

use crate::{compute_bmr, compute_tdee, DailyEntry, FitnessGoal, Profile};
use serde::{Deserialize, Serialize};

/// Daily water intake goal in millilitres
pub const WATER_GOAL_ML: u32 = 2000;

/// Daily step goal
pub const STEPS_GOAL: u32 = 10_000;

/// Daily active-minutes goal
pub const ACTIVITY_GOAL_MINUTES: u32 = 30;

/// Fraction of a goal that earns a warning rather than a danger tier,
/// shared by the water and activity rules
pub const WARNING_RATIO: f64 = 0.7;

/// kcal below TDEE targeted when the goal is weight loss
pub const WEIGHT_LOSS_DEFICIT: u32 = 500;

/// kcal above TDEE targeted when the goal is muscle gain
pub const MUSCLE_GAIN_SURPLUS: u32 = 300;

/// Tolerated distance from TDEE when the goal is maintenance
pub const MAINTENANCE_BAND: u32 = 200;

/// How strongly a recommendation calls for attention
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

/// Which metric a recommendation is about
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Water,
    Calories,
    Activity,
    Food,
}

/// One coaching card: a message plus optional concrete tips
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recommendation {
    pub topic: Topic,
    pub severity: Severity,
    pub message: String,
    pub tips: Vec<String>,
}

/// The full output for one saved day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub tomorrow_plan: Vec<String>,
}

/// Evaluate all rules for the entry being saved
pub fn recommend(entry: &DailyEntry, profile: Option<&Profile>) -> RecommendationSet {
    let recommendations = vec![
        water_recommendation(entry),
        calorie_recommendation(entry, profile),
        activity_recommendation(entry),
        food_recommendation(profile),
    ];

    RecommendationSet {
        recommendations,
        tomorrow_plan: tomorrow_plan(entry, profile),
    }
}

fn at_warning_tier(value: u32, goal: u32) -> bool {
    f64::from(value) >= f64::from(goal) * WARNING_RATIO
}

fn water_recommendation(entry: &DailyEntry) -> Recommendation {
    let water = entry.water_ml;
    let remaining = WATER_GOAL_ML.saturating_sub(water);

    if water >= WATER_GOAL_ML {
        Recommendation {
            topic: Topic::Water,
            severity: Severity::Success,
            message: format!(
                "You drank {water} ml of water. Goal reached — keep it up!"
            ),
            tips: vec![],
        }
    } else if at_warning_tier(water, WATER_GOAL_ML) {
        Recommendation {
            topic: Topic::Water,
            severity: Severity::Warning,
            message: format!(
                "You drank {water} ml out of {WATER_GOAL_ML} ml. {remaining} ml left to the goal."
            ),
            tips: vec![format!(
                "Try to drink at least {WATER_GOAL_ML} ml of water tomorrow"
            )],
        }
    } else {
        Recommendation {
            topic: Topic::Water,
            severity: Severity::Danger,
            message: format!(
                "You drank only {water} ml. That is {remaining} ml short of the goal."
            ),
            tips: vec![
                format!("Make sure to drink at least {WATER_GOAL_ML} ml of water tomorrow"),
                "Set a reminder every hour".into(),
                "Keep a bottle of water within reach".into(),
            ],
        }
    }
}

fn calorie_recommendation(entry: &DailyEntry, profile: Option<&Profile>) -> Recommendation {
    let intake = entry.calories;

    let info_only = |intake: u32| Recommendation {
        topic: Topic::Calories,
        severity: Severity::Info,
        message: format!("You consumed {intake} kcal today."),
        tips: vec![],
    };

    let Some(profile) = profile else {
        return info_only(intake);
    };

    let bmr = compute_bmr(Some(profile));
    let tdee = compute_tdee(bmr, Some(profile.activity_level));

    match profile.goal {
        FitnessGoal::WeightLoss => {
            let target = tdee.saturating_sub(WEIGHT_LOSS_DEFICIT);
            if intake <= target {
                Recommendation {
                    topic: Topic::Calories,
                    severity: Severity::Success,
                    message: format!(
                        "You consumed {intake} kcal. Your weight-loss target is {target} kcal — right in range!"
                    ),
                    tips: vec![
                        "Keep it up".into(),
                        "Watch your protein, fat and carb balance".into(),
                    ],
                }
            } else {
                let excess = intake - target;
                Recommendation {
                    topic: Topic::Calories,
                    severity: Severity::Warning,
                    message: format!(
                        "You consumed {intake} kcal, {excess} kcal over the weight-loss target of {target} kcal."
                    ),
                    tips: vec![
                        format!("Try to stay within {target} kcal tomorrow"),
                        "Reduce portions by about 20%".into(),
                        "Cut back on sweets and fried food".into(),
                        "Add more vegetables and protein".into(),
                    ],
                }
            }
        }

        FitnessGoal::MuscleGain => {
            let target = tdee + MUSCLE_GAIN_SURPLUS;
            if intake >= target {
                Recommendation {
                    topic: Topic::Calories,
                    severity: Severity::Success,
                    message: format!(
                        "You consumed {intake} kcal. Your muscle-gain target is {target} kcal — target reached!"
                    ),
                    tips: vec![
                        "Aim for 2 g of protein per kg of body weight".into(),
                        "Eat every 3-4 hours".into(),
                    ],
                }
            } else {
                let deficit = target - intake;
                Recommendation {
                    topic: Topic::Calories,
                    severity: Severity::Warning,
                    message: format!(
                        "You consumed {intake} kcal, {deficit} kcal under the muscle-gain target of {target} kcal."
                    ),
                    tips: vec![
                        format!("Try to eat {target} kcal tomorrow"),
                        "Add a snack with nuts or a protein shake".into(),
                        "Increase portions by 15-20%".into(),
                        "Eat more complex carbs and protein".into(),
                    ],
                }
            }
        }

        FitnessGoal::Maintenance => {
            if intake.abs_diff(tdee) <= MAINTENANCE_BAND {
                Recommendation {
                    topic: Topic::Calories,
                    severity: Severity::Success,
                    message: format!(
                        "You consumed {intake} kcal. Your maintenance level is {tdee} kcal — great balance!"
                    ),
                    tips: vec![
                        "Hold this level".into(),
                        "Keep an eye on food quality".into(),
                    ],
                }
            } else if intake > tdee + MAINTENANCE_BAND {
                Recommendation {
                    topic: Topic::Calories,
                    severity: Severity::Warning,
                    message: format!(
                        "You consumed {intake} kcal, above your maintenance level of {tdee} kcal."
                    ),
                    tips: vec![
                        format!("Bring intake back down to about {tdee} kcal tomorrow"),
                        "Add some extra activity".into(),
                    ],
                }
            } else {
                Recommendation {
                    topic: Topic::Calories,
                    severity: Severity::Info,
                    message: format!(
                        "You consumed {intake} kcal, a mild deficit against your maintenance level of {tdee} kcal."
                    ),
                    tips: vec![format!("Try to eat around {tdee} kcal tomorrow")],
                }
            }
        }

        // No calorie target is defined for endurance training
        FitnessGoal::Endurance => info_only(intake),
    }
}

fn activity_recommendation(entry: &DailyEntry) -> Recommendation {
    let steps = entry.steps;
    let minutes = entry.activity_minutes;

    if steps >= STEPS_GOAL && minutes >= ACTIVITY_GOAL_MINUTES {
        Recommendation {
            topic: Topic::Activity,
            severity: Severity::Success,
            message: format!(
                "You walked {steps} steps and were active for {minutes} minutes. All goals met!"
            ),
            tips: vec![
                "Great work today!".into(),
                "Keep that pace going!".into(),
            ],
        }
    } else if at_warning_tier(steps, STEPS_GOAL)
        || at_warning_tier(minutes, ACTIVITY_GOAL_MINUTES)
    {
        let mut tips = Vec::new();
        if steps < STEPS_GOAL {
            tips.push(format!("Try to walk at least {STEPS_GOAL} steps tomorrow"));
        }
        if minutes < ACTIVITY_GOAL_MINUTES {
            tips.push(format!(
                "Add {} more minutes of activity",
                ACTIVITY_GOAL_MINUTES - minutes
            ));
        }
        Recommendation {
            topic: Topic::Activity,
            severity: Severity::Warning,
            message: format!(
                "You walked {steps} steps and were active for {minutes} minutes."
            ),
            tips,
        }
    } else {
        Recommendation {
            topic: Topic::Activity,
            severity: Severity::Danger,
            message: format!(
                "You walked only {steps} steps and were active for {minutes} minutes. That is well below the recommended level."
            ),
            tips: vec![
                format!("Walk at least {STEPS_GOAL} steps tomorrow"),
                "Do a 15-minute morning routine".into(),
                "Take a walk during your lunch break".into(),
                "Use the stairs instead of the elevator".into(),
            ],
        }
    }
}

fn food_recommendation(profile: Option<&Profile>) -> Recommendation {
    let Some(profile) = profile else {
        return Recommendation {
            topic: Topic::Food,
            severity: Severity::Info,
            message: "Keep your macronutrients balanced.".into(),
            tips: vec![],
        };
    };

    let tips: Vec<String> = match profile.goal {
        FitnessGoal::WeightLoss => vec![
            "Increase protein intake (chicken, fish, eggs)".into(),
            "Add more vegetables and fiber".into(),
            "Cut down on simple carbs (sugar, white bread)".into(),
            "Drink water before meals".into(),
        ],
        FitnessGoal::MuscleGain => vec![
            "Eat 2 g of protein per kg of body weight (meat, cottage cheese, protein powder)".into(),
            "Add complex carbs (rice, buckwheat, oats)".into(),
            "Do not skip healthy fats (nuts, avocado)".into(),
            "Eat 5-6 small meals a day".into(),
        ],
        FitnessGoal::Maintenance => vec![
            "Keep your protein, fat and carb balance".into(),
            "Eat a varied diet".into(),
            "Avoid overeating".into(),
            "Watch your portion sizes".into(),
        ],
        FitnessGoal::Endurance => vec!["Keep your macronutrients balanced".into()],
    };

    Recommendation {
        topic: Topic::Food,
        severity: Severity::Info,
        message: "Tips based on your goal:".into(),
        tips,
    }
}

/// Always exactly four items: water, calories, steps, workout.
fn tomorrow_plan(entry: &DailyEntry, profile: Option<&Profile>) -> Vec<String> {
    let mut plan = Vec::with_capacity(4);

    if entry.water_ml < WATER_GOAL_ML {
        plan.push(format!("Drink at least {WATER_GOAL_ML} ml of water"));
    } else {
        plan.push(format!("Keep drinking {WATER_GOAL_ML}+ ml of water"));
    }

    match profile {
        Some(p) => {
            let tdee = compute_tdee(compute_bmr(Some(p)), Some(p.activity_level));
            match p.goal {
                FitnessGoal::WeightLoss => plan.push(format!(
                    "Eat {} kcal (deficit for weight loss)",
                    tdee.saturating_sub(WEIGHT_LOSS_DEFICIT)
                )),
                FitnessGoal::MuscleGain => plan.push(format!(
                    "Eat {} kcal (surplus for muscle gain)",
                    tdee + MUSCLE_GAIN_SURPLUS
                )),
                FitnessGoal::Maintenance | FitnessGoal::Endurance => {
                    plan.push(format!("Eat around {tdee} kcal (maintenance)"));
                }
            }
        }
        None => plan.push("Log your calorie intake".into()),
    }

    if entry.steps < STEPS_GOAL {
        plan.push(format!("Walk at least {STEPS_GOAL} steps"));
    } else {
        plan.push(format!("Keep your activity at {STEPS_GOAL}+ steps"));
    }

    if entry.workout.is_none() {
        plan.push(format!(
            "Do a workout of at least {ACTIVITY_GOAL_MINUTES} minutes"
        ));
    } else {
        plan.push("Keep up the regular workouts".into());
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityLevel, Workout};
    use chrono::Utc;

    fn test_profile(goal: FitnessGoal) -> Profile {
        Profile {
            name: "Sam".into(),
            age: 30,
            height_cm: 175,
            weight_kg: 70.0,
            goal_weight_kg: 65.0,
            goal,
            activity_level: ActivityLevel::Medium,
            created_at: Utc::now(),
        }
    }

    fn test_entry() -> DailyEntry {
        DailyEntry {
            date: "2024-01-05".parse().unwrap(),
            weight_kg: Some(70.0),
            water_ml: 2000,
            food: String::new(),
            calories: 2000,
            steps: 10_000,
            activity_minutes: 30,
            workout: None,
            recorded_at: Utc::now(),
        }
    }

    fn card(set: &RecommendationSet, topic: Topic) -> &Recommendation {
        set.recommendations
            .iter()
            .find(|r| r.topic == topic)
            .unwrap()
    }

    #[test]
    fn test_water_tier_boundaries() {
        let mut entry = test_entry();

        entry.water_ml = 2000;
        let rec = water_recommendation(&entry);
        assert_eq!(rec.severity, Severity::Success);
        assert!(rec.tips.is_empty());

        entry.water_ml = 1400; // exactly 70% of goal
        let rec = water_recommendation(&entry);
        assert_eq!(rec.severity, Severity::Warning);
        assert_eq!(rec.tips.len(), 1);

        entry.water_ml = 1399;
        let rec = water_recommendation(&entry);
        assert_eq!(rec.severity, Severity::Danger);
        assert_eq!(rec.tips.len(), 3);
        assert!(rec.message.contains("601 ml short"));
    }

    #[test]
    fn test_weight_loss_calorie_rule() {
        // BMR 1649, TDEE 2556, target 2056
        let profile = test_profile(FitnessGoal::WeightLoss);
        let mut entry = test_entry();

        entry.calories = 2000;
        let rec = calorie_recommendation(&entry, Some(&profile));
        assert_eq!(rec.severity, Severity::Success);
        assert!(rec.message.contains("2056 kcal"));

        entry.calories = 2200;
        let rec = calorie_recommendation(&entry, Some(&profile));
        assert_eq!(rec.severity, Severity::Warning);
        assert!(rec.message.contains("144 kcal over"));
        assert_eq!(rec.tips.len(), 4);
    }

    #[test]
    fn test_muscle_gain_calorie_rule() {
        // TDEE 2556, target 2856
        let profile = test_profile(FitnessGoal::MuscleGain);
        let mut entry = test_entry();

        entry.calories = 2900;
        let rec = calorie_recommendation(&entry, Some(&profile));
        assert_eq!(rec.severity, Severity::Success);

        entry.calories = 2600;
        let rec = calorie_recommendation(&entry, Some(&profile));
        assert_eq!(rec.severity, Severity::Warning);
        assert!(rec.message.contains("256 kcal under"));
    }

    #[test]
    fn test_maintenance_calorie_band() {
        // TDEE 2556
        let profile = test_profile(FitnessGoal::Maintenance);
        let mut entry = test_entry();

        entry.calories = 2556 + 200;
        let rec = calorie_recommendation(&entry, Some(&profile));
        assert_eq!(rec.severity, Severity::Success);

        entry.calories = 2556 + 201;
        let rec = calorie_recommendation(&entry, Some(&profile));
        assert_eq!(rec.severity, Severity::Warning);

        entry.calories = 2556 - 300;
        let rec = calorie_recommendation(&entry, Some(&profile));
        assert_eq!(rec.severity, Severity::Info);
    }

    #[test]
    fn test_no_profile_is_informational_only() {
        let entry = test_entry();
        let set = recommend(&entry, None);

        assert_eq!(card(&set, Topic::Calories).severity, Severity::Info);
        assert!(card(&set, Topic::Calories).tips.is_empty());
        assert_eq!(card(&set, Topic::Food).severity, Severity::Info);
        assert!(card(&set, Topic::Food).tips.is_empty());
    }

    #[test]
    fn test_endurance_goal_has_no_calorie_target() {
        let profile = test_profile(FitnessGoal::Endurance);
        let entry = test_entry();

        let rec = calorie_recommendation(&entry, Some(&profile));
        assert_eq!(rec.severity, Severity::Info);
        assert!(!rec.message.contains("target"));

        let food = food_recommendation(Some(&profile));
        assert_eq!(food.tips.len(), 1);
    }

    #[test]
    fn test_activity_tiers() {
        let mut entry = test_entry();

        entry.steps = 10_000;
        entry.activity_minutes = 30;
        assert_eq!(
            activity_recommendation(&entry).severity,
            Severity::Success
        );

        // One metric at 70% of goal is enough for the warning tier
        entry.steps = 7000;
        entry.activity_minutes = 0;
        let rec = activity_recommendation(&entry);
        assert_eq!(rec.severity, Severity::Warning);
        assert_eq!(rec.tips.len(), 2);

        entry.steps = 6999;
        entry.activity_minutes = 20;
        let rec = activity_recommendation(&entry);
        assert_eq!(rec.severity, Severity::Danger);
        assert_eq!(rec.tips.len(), 4);
    }

    #[test]
    fn test_food_tip_sets_have_four_items() {
        for goal in [
            FitnessGoal::WeightLoss,
            FitnessGoal::MuscleGain,
            FitnessGoal::Maintenance,
        ] {
            let rec = food_recommendation(Some(&test_profile(goal)));
            assert_eq!(rec.tips.len(), 4, "{:?}", goal);
        }
    }

    #[test]
    fn test_tomorrow_plan_always_has_four_items() {
        let mut entry = test_entry();
        let profile = test_profile(FitnessGoal::WeightLoss);

        assert_eq!(tomorrow_plan(&entry, Some(&profile)).len(), 4);
        assert_eq!(tomorrow_plan(&entry, None).len(), 4);

        entry.workout = Some(Workout {
            name: "Swim".into(),
            duration_minutes: 45,
            intensity: "high".into(),
            calories: 400,
        });
        let plan = tomorrow_plan(&entry, Some(&profile));
        assert_eq!(plan.len(), 4);
        assert!(plan[3].contains("Keep up"));
    }

    #[test]
    fn test_recommendation_order_is_stable() {
        let entry = test_entry();
        let set = recommend(&entry, Some(&test_profile(FitnessGoal::Maintenance)));

        let topics: Vec<_> = set.recommendations.iter().map(|r| r.topic).collect();
        assert_eq!(
            topics,
            vec![Topic::Water, Topic::Calories, Topic::Activity, Topic::Food]
        );
    }
}
