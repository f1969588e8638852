//! Slider geometry: tick marks, the label datalist, and the value bubble
//! that follows the handle.

use crate::core::util::{format_number, lerp};

/// The label datalist always holds between 2 and 10 entries, independent of
/// how many ticks the step produces.
pub const MIN_LABELS: usize = 2;
pub const MAX_LABELS: usize = 10;

/// Tick positions at `step` increments across `[min, max]`. Degenerate
/// ranges produce no ticks.
pub fn tick_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || max <= min {
        return vec![];
    }
    let count = ((max - min) / step + 1e-9).floor() as usize;
    (0..=count).map(|i| min + i as f64 * step).collect()
}

/// Label positions distributed evenly across `[min, max]`, with the
/// requested count clamped to `[MIN_LABELS, MAX_LABELS]`.
pub fn label_values(min: f64, max: f64, requested: usize) -> Vec<f64> {
    let count = requested.clamp(MIN_LABELS, MAX_LABELS);
    (0..count)
        .map(|i| lerp(min, max, i as f64 / (count - 1) as f64))
        .collect()
}

/// Renders the datalist: static labels are consumed left-to-right, any
/// position beyond the supplied list falls back to the formatted value.
pub fn labels(
    min: f64,
    max: f64,
    requested: usize,
    static_labels: &[String],
) -> Vec<String> {
    label_values(min, max, requested)
        .iter()
        .enumerate()
        .map(|(i, value)| {
            static_labels
                .get(i)
                .cloned()
                .unwrap_or_else(|| format_number(*value))
        })
        .collect()
}

/// Horizontal position of the value bubble as a percentage of the track.
pub fn bubble_percent(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    let percent = (value - min) / (max - min) * 100.0;
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// What the bubble displays: the nearest static label when labels were
/// supplied, otherwise the formatted value itself.
pub fn bubble_text(
    value: f64,
    min: f64,
    max: f64,
    static_labels: &[String],
) -> String {
    if static_labels.is_empty() || max <= min || !value.is_finite() {
        return format_number(value);
    }
    let fraction = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let index = (fraction * (static_labels.len() - 1) as f64).round() as usize;
    static_labels[index].clone()
}
