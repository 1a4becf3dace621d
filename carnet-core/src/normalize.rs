/// A coordinate with an absolute value above this threshold cannot be
/// a plain degree value and is assumed to be micro-degrees.
const MAX_PLAUSIBLE_DEG: f64 = 360.0;

const MICRO_DEG_PER_DEG: f64 = 1_000_000.0;

/// Best-effort repair of coordinate values coming back from the store.
///
/// The backing spreadsheet has historically lost the decimal point on
/// some writes, turning `48.857739` into `48857739`. Values whose
/// magnitude exceeds 360 are therefore interpreted as fixed-point
/// micro-degrees and scaled back. Unparseable values yield `None` and
/// are excluded downstream.
pub fn normalize_coord(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if value.abs() > MAX_PLAUSIBLE_DEG {
        Some(value / MICRO_DEG_PER_DEG)
    } else {
        Some(value)
    }
}
