use quiz_core::model::SessionSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummaryVm {
    pub correct: usize,
    pub total: usize,
}

impl From<&SessionSummary> for SessionSummaryVm {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            correct: summary.correct,
            total: summary.total,
        }
    }
}
