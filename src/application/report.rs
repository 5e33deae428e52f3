//! Per-step outcomes of best-effort operations

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Info,
    Warning,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub status: StepStatus,
    pub message: String,
}

/// Ordered record of what an operation did, one entry per step.
///
/// A step that fails is recorded here and the operation moves on; only
/// failures that leave nothing to continue with are returned as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationReport {
    steps: Vec<StepOutcome>,
}

impl OperationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, status: StepStatus, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(?status, "{}", message);
        self.steps.push(StepOutcome { status, message });
    }

    pub fn done(&mut self, message: impl Into<String>) {
        self.push(StepStatus::Done, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(StepStatus::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(StepStatus::Warning, message);
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.push(StepStatus::Failed, message);
    }

    /// Append another report's steps after this one's.
    pub fn merge(&mut self, other: OperationReport) {
        self.steps.extend(other.steps);
    }

    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    pub fn count(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|s| s.status == status).count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(StepStatus::Failed) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Messages of the steps with the given status, in order.
    pub fn messages(&self, status: StepStatus) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.status == status)
            .map(|s| s.message.as_str())
            .collect()
    }
}
