//! Keyword-scoring department classifier.

use crate::department::domain::{Department, KeywordTable, NormalizedText, department_key};
use std::sync::LazyLock;

/// Bonus for text that names the department outright.
const DIRECT_MENTION_BONUS: u32 = 3;

static BUILTIN: LazyLock<DepartmentClassifier> = LazyLock::new(DepartmentClassifier::default);

/// Suggests the department a ticket belongs to from its free text.
///
/// Classification is pure and deterministic: the same text and department
/// list always yield the same answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentClassifier {
    table: KeywordTable,
}

impl DepartmentClassifier {
    /// Creates a classifier over a custom keyword table.
    #[must_use]
    pub const fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    /// Returns the shared classifier using the built-in keyword table.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Returns the keyword table.
    #[must_use]
    pub const fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Picks the best-scoring department for the ticket text.
    ///
    /// Only departments whose normalized name appears in the keyword table
    /// are candidates. Ties go to the department listed first. Returns
    /// `None` when the text is blank, the list is empty, or no candidate
    /// scores above zero.
    #[must_use]
    pub fn classify<'a>(
        &self,
        title: &str,
        description: &str,
        departments: &'a [Department],
    ) -> Option<&'a Department> {
        if departments.is_empty() {
            return None;
        }
        let raw = format!("{title} {description}");
        if raw.trim().is_empty() {
            return None;
        }

        let text = NormalizedText::new(&raw);
        let mut best: Option<(&'a Department, u32)> = None;
        for department in departments {
            let Some(score) = self.score(&text, department) else {
                continue;
            };
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((department, score));
            }
        }

        best.filter(|(_, score)| *score > 0)
            .map(|(department, _)| department)
    }

    /// Scores one department against normalized text.
    ///
    /// Returns `None` when the department has no keyword table entry.
    #[must_use]
    pub fn score(&self, text: &NormalizedText, department: &Department) -> Option<u32> {
        let key = department_key(department.name());
        let entry = self.table.get(&key)?;
        let mention = if text.has_token(&key) {
            DIRECT_MENTION_BONUS
        } else {
            0
        };
        Some(entry.score(text) + mention)
    }
}

impl Default for DepartmentClassifier {
    fn default() -> Self {
        Self::new(KeywordTable::builtin())
    }
}

/// Classifies ticket text with the built-in keyword table.
#[must_use]
pub fn classify<'a>(
    title: &str,
    description: &str,
    departments: &'a [Department],
) -> Option<&'a Department> {
    DepartmentClassifier::builtin().classify(title, description, departments)
}
