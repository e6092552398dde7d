use std::time::Duration;

/// Default delay between two exploration steps.
pub const DEFAULT_VISIT_STEP: Duration = Duration::from_millis(10);
/// Default delay between two path steps.
pub const DEFAULT_PATH_STEP: Duration = Duration::from_millis(50);

/// Presentation timing for a replay.
///
/// Visit step *i* fires at `i * visit_step`. The path phase begins once every
/// visit step has had its slot, and path step *j* fires `j * path_step` after
/// that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayPolicy {
    pub visit_step: Duration,
    pub path_step: Duration,
}

impl Default for ReplayPolicy {
    fn default() -> Self {
        Self {
            visit_step: DEFAULT_VISIT_STEP,
            path_step: DEFAULT_PATH_STEP,
        }
    }
}

impl ReplayPolicy {
    /// Both steps scaled by `factor` (e.g. `0.5` plays twice as fast).
    pub fn scaled(self, factor: f64) -> Self {
        let factor = if factor.is_finite() { factor.max(0.0) } else { 1.0 };
        Self {
            visit_step: self.visit_step.mul_f64(factor),
            path_step: self.path_step.mul_f64(factor),
        }
    }
}
