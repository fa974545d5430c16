use std::{env, str::FromStr};

use hatfinder_common::models::GameParams;
use tracing::warn;

pub const WIDTH_VAR: &str = "HATFINDER_WIDTH";
pub const HEIGHT_VAR: &str = "HATFINDER_HEIGHT";
pub const DIFFICULTY_VAR: &str = "HATFINDER_DIFFICULTY";

/// Game parameters from the process environment, defaulting to a 10x10 hard board
pub fn params_from_env() -> GameParams {
    params_from_lookup(|key| env::var(key).ok())
}

/// Resolves game parameters through `lookup`. Missing or malformed values fall back
/// to the defaults.
pub fn params_from_lookup<F>(lookup: F) -> GameParams
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = GameParams::default();

    GameParams {
        width: read_var(&lookup, WIDTH_VAR, defaults.width, |width| *width > 0),
        height: read_var(&lookup, HEIGHT_VAR, defaults.height, |height| *height > 0),
        difficulty: read_var(&lookup, DIFFICULTY_VAR, defaults.difficulty, |_| true),
    }
}

fn read_var<F, T>(lookup: &F, key: &str, default: T, valid: impl Fn(&T) -> bool) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            warn!("Ignoring {}={:?}, using {}", key, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use hatfinder_common::models::Difficulty;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        assert_eq!(params_from_lookup(lookup(&[])), GameParams::default());
        assert_eq!(
            GameParams::default(),
            GameParams {
                width: 10,
                height: 10,
                difficulty: Difficulty::Hard
            }
        );
    }

    #[test]
    fn test_environment_overrides() {
        let params = params_from_lookup(lookup(&[
            (WIDTH_VAR, "5"),
            (HEIGHT_VAR, " 7 "),
            (DIFFICULTY_VAR, "Medium"),
        ]));

        assert_eq!(params.width, 5);
        assert_eq!(params.height, 7);
        assert_eq!(params.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let params = params_from_lookup(lookup(&[
            (WIDTH_VAR, "0"),
            (HEIGHT_VAR, "tall"),
            (DIFFICULTY_VAR, "nightmare"),
        ]));

        assert_eq!(params, GameParams::default());
    }
}
