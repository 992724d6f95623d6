//! Classification services.

mod classifier;

pub use classifier::{DepartmentClassifier, classify};
