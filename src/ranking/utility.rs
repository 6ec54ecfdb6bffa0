/// Normalizes a nullable provider value. Missing and non-finite values score as 0.
pub fn or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Clamps a raw score to 0–100 and rounds it, half away from zero.
pub fn clamp_score(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
