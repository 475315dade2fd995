/// Tunable parts of the eligibility rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityPolicy {
    /// Leave `synchronized` methods alone
    pub reject_synchronized: bool,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            reject_synchronized: true,
        }
    }
}
