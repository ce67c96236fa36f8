//! Progress notification port
//!
//! Defines the interface for reporting fetch progress to the user.

/// A fetch phase worth reporting on
///
/// `Collection` and `Detail` are single requests; `Borders` fans out one
/// lookup per neighbor code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collection,
    Detail,
    Borders,
}

impl Phase {
    /// Get the string identifier for this phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Collection => "collection",
            Phase::Detail => "detail",
            Phase::Borders => "borders",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates during fetches
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts, with the number of lookups it will make
    fn on_phase_start(&self, phase: Phase, total_lookups: usize);

    /// Called when a lookup settles within a phase
    fn on_lookup_complete(&self, phase: Phase, label: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: Phase, _total_lookups: usize) {}
    fn on_lookup_complete(&self, _phase: Phase, _label: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: Phase) {}
}
