/// Progress of one kind of API operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    NotStarted,
    Loading,
    Success,
    Error(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Status plus the generation of the most recently issued request.
///
/// Every request of an operation is stamped with a fresh generation; a
/// completion is only accepted while its generation is still the latest, so an
/// older response resolving late never overwrites a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationTracker {
    status: FetchStatus,
    generation: u64,
}

impl OperationTracker {
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Marks a new request as in flight and returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Records success; `false` if the generation was superseded.
    pub fn succeed(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.status = FetchStatus::Success;
        true
    }

    /// Records failure; `false` if the generation was superseded.
    pub fn fail(&mut self, generation: u64, message: &str) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.status = FetchStatus::Error(message.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_rejects_superseded_generation() {
        let mut tracker = OperationTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.succeed(first));
        assert!(tracker.is_loading());
        assert!(tracker.succeed(second));
        assert!(tracker.status().is_success());
    }

    #[test]
    fn test_tracker_failure_keeps_message() {
        let mut tracker = OperationTracker::default();
        let generation = tracker.begin();

        assert!(tracker.fail(generation, "boom"));
        assert_eq!(tracker.status().error(), Some("boom"));
        assert!(!tracker.is_loading());
    }
}
