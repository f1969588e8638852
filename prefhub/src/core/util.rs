use std::collections::{HashMap as StdHashMap, HashSet as StdHashSet};
use std::sync::OnceLock;

use ahash::RandomState;
use parking_lot::Mutex;

pub type HashMap<K, V> = StdHashMap<K, V, RandomState>;
pub type HashSet<K> = StdHashSet<K, RandomState>;

/// `ternary!(cond, true_case, false_case)`
#[macro_export]
macro_rules! ternary {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition { $_true } else { $_false }
    };
}

/// Logs a warning exactly once per distinct message for the lifetime of the
/// process. Used in hot read paths (translations, value coercion) where the
/// same fallback would otherwise spam the log on every render.
#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        if $crate::core::util::first_occurrence(&message) {
            ::log::warn!("{}", message);
        }
    }};
}

pub fn first_occurrence(message: &str) -> bool {
    static SEEN: OnceLock<Mutex<StdHashSet<String>>> = OnceLock::new();
    SEEN.get_or_init(|| Mutex::new(StdHashSet::new()))
        .lock()
        .insert(message.to_string())
}

pub fn bool_to_f64(cond: bool) -> f64 {
    ternary!(cond, 1.0, 0.0)
}

/// Linear interpolation between two values. Returns a value between `start`
/// and `end` based on the interpolation parameter `t` (typically 0.0 to 1.0).
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Formats a number the way a widget displays it: integral values without a
/// fractional part, everything else with Rust's shortest float representation.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
