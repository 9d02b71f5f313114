use crate::food::models::UserProfile;
use log::warn;

/// Builds the session profile from `AURA_USER_NAME`, `AURA_CALORIE_GOAL` and
/// `AURA_SCORE`, falling back to the defaults for anything unset or unparsable.
pub fn profile_from_env() -> UserProfile {
    profile_from_lookup(|key| std::env::var(key).ok())
}

pub(crate) fn profile_from_lookup<F>(lookup: F) -> UserProfile
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = UserProfile::default();

    let name = lookup("AURA_USER_NAME")
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or(defaults.name);

    let daily_calorie_goal = match lookup("AURA_CALORIE_GOAL") {
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(goal) if goal > 0.0 => goal,
            _ => {
                warn!("Ignoring invalid AURA_CALORIE_GOAL value: {}", raw);
                defaults.daily_calorie_goal
            }
        },
        None => defaults.daily_calorie_goal,
    };

    let aura_score = match lookup("AURA_SCORE") {
        Some(raw) => match raw.trim().parse::<u8>() {
            Ok(score) if score <= 100 => score,
            _ => {
                warn!("Ignoring invalid AURA_SCORE value: {}", raw);
                defaults.aura_score
            }
        },
        None => defaults.aura_score,
    };

    UserProfile {
        name,
        daily_calorie_goal,
        aura_score,
    }
}
