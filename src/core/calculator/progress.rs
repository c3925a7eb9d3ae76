/// Share of `goal` reached, capped at 100. Zero for a non-positive goal or a NaN result.
pub fn progress_percentage(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 || goal.is_nan() {
        return 0.0;
    }

    let pct = (value / goal) * 100.0;
    if pct.is_nan() { 0.0 } else { pct.min(100.0) }
}
