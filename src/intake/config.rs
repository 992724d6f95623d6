//! Configuration for ticket intake.

/// Behaviour switches applied when new tickets are opened.
///
/// # Examples
///
/// ```
/// use helpdesk::intake::IntakeConfig;
///
/// let config = IntakeConfig::default();
/// assert!(config.classify_blank_department);
/// assert!(!config.apply_priority_sla);
///
/// let with_sla = IntakeConfig::with_priority_sla();
/// assert!(with_sla.apply_priority_sla);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Fill a blank department with the classifier's suggestion.
    pub classify_blank_department: bool,
    /// Give tickets without a deadline the resolution window of their
    /// priority.
    pub apply_priority_sla: bool,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            classify_blank_department: true,
            apply_priority_sla: false,
        }
    }
}

impl IntakeConfig {
    /// Default configuration plus priority-derived deadlines.
    #[must_use]
    pub fn with_priority_sla() -> Self {
        Self {
            apply_priority_sla: true,
            ..Self::default()
        }
    }

    /// Configuration that leaves requests untouched.
    #[must_use]
    pub const fn passthrough() -> Self {
        Self {
            classify_blank_department: false,
            apply_priority_sla: false,
        }
    }
}
