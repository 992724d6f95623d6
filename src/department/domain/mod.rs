//! Domain model for department classification.

mod department;
mod keywords;
mod normalize;

pub use department::{Department, DepartmentId};
pub use keywords::{DepartmentKeywords, Keyword, KeywordTable};
pub use normalize::{NormalizedText, department_key, normalize_phrase};
