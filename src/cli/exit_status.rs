use std::process::ExitCode;

use crate::core::LintResult;

/// Process exit status of the `keylint` binary.
///
/// - `Success` (0): no findings, or only warnings below the threshold
/// - `Failure` (1): any error finding, or the warning threshold was reached
/// - `Error` (2): the run could not complete (configuration, paths, parse error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &LintResult) -> Self {
        if result.is_failed() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::{Finding, Rule, Severity};

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }

    #[test]
    fn status_from_result() {
        let clean = LintResult::new(Vec::new(), 0);
        assert_eq!(ExitStatus::from_result(&clean), ExitStatus::Success);

        let under_threshold = LintResult::new(
            vec![Finding::new("a", Rule::ZombieKeys, Severity::Warning)],
            5,
        );
        assert_eq!(ExitStatus::from_result(&under_threshold), ExitStatus::Success);

        let with_error = LintResult::new(
            vec![Finding::new("a", Rule::KeysOnViews, Severity::Error)],
            5,
        );
        assert_eq!(ExitStatus::from_result(&with_error), ExitStatus::Failure);
    }
}
