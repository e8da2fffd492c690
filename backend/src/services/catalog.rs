//! Catalog service - read-only access to the test catalog

use crate::error::ApiError;
use fitness_tests_shared::catalog::{self, TestCategory, TestDefinition};
use fitness_tests_shared::types::CategorySummary;

/// Catalog service for browsing test definitions
pub struct CatalogService;

impl CatalogService {
    /// All tests in catalog order, optionally narrowed to one category
    pub fn list_tests(category: Option<TestCategory>) -> Vec<&'static TestDefinition> {
        match category {
            Some(category) => catalog::get_by_category(category),
            None => catalog::all_tests().iter().collect(),
        }
    }

    pub fn list_categories() -> Vec<CategorySummary> {
        catalog::list_categories()
            .iter()
            .copied()
            .map(CategorySummary::for_category)
            .collect()
    }

    pub fn get_test(test_id: &str) -> Result<&'static TestDefinition, ApiError> {
        Ok(catalog::require(test_id)?)
    }
}
