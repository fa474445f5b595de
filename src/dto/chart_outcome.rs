use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    Written(PathBuf),
    Skipped(String),
    Failed(String),
}

impl ChartOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ChartOutcome::Written(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ChartOutcome::Skipped(_))
    }
}

impl fmt::Display for ChartOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartOutcome::Written(path) => write!(f, "written to {}", path.display()),
            ChartOutcome::Skipped(reason) => write!(f, "skipped ({})", reason),
            ChartOutcome::Failed(cause) => write!(f, "failed ({})", cause),
        }
    }
}
