//! Metabolic calculations: BMR and TDEE.

use crate::{ActivityLevel, Profile};

/// Activity multiplier applied to BMR. Missing level falls back to the
/// sedentary factor.
fn activity_factor(level: Option<ActivityLevel>) -> f64 {
    match level {
        Some(ActivityLevel::Medium) => 1.55,
        Some(ActivityLevel::High) => 1.725,
        Some(ActivityLevel::Low) | None => 1.2,
    }
}

/// Basal metabolic rate in kcal/day, rounded to the nearest kcal.
///
/// Mifflin-St Jeor: `10*weight + 6.25*height - 5*age + 5`. This is the
/// single-formula approximation the journal has always used (it does
/// not branch on sex); kept as-is for behavioral parity.
///
/// Returns 0 when no profile exists. Never errors.
pub fn compute_bmr(profile: Option<&Profile>) -> u32 {
    let Some(p) = profile else {
        return 0;
    };

    let bmr =
        10.0 * p.weight_kg + 6.25 * f64::from(p.height_cm) - 5.0 * f64::from(p.age) + 5.0;
    bmr.round().max(0.0) as u32
}

/// Total daily energy expenditure: BMR scaled by the activity factor,
/// rounded to the nearest kcal.
///
/// The already-rounded BMR is what gets scaled, so the result is stable
/// for a given profile.
pub fn compute_tdee(bmr: u32, level: Option<ActivityLevel>) -> u32 {
    (f64::from(bmr) * activity_factor(level)).round() as u32
}
