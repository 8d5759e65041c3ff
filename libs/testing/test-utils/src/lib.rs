//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: migrated database for tests, in-memory SQLite or a
//!   Postgres container (feature: "postgres")
//! - `TestDataBuilder`: deterministic test data generation
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::sqlite().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let title = builder.name("task", "main");
//! }
//! ```

mod sqlite;

#[cfg(feature = "postgres")]
mod postgres;

pub use sqlite::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_task");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("task", "main"), "test-task-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Deterministic priority in `0..5`
    pub fn priority(&self) -> i32 {
        (self.seed % 5) as i32
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `keys` is sorted in the requested direction
    pub fn assert_sorted<K: Ord + std::fmt::Debug>(keys: &[K], ascending: bool, context: &str) {
        let sorted = keys.windows(2).all(|pair| {
            if ascending {
                pair[0] <= pair[1]
            } else {
                pair[0] >= pair[1]
            }
        });
        assert!(
            sorted,
            "{}: expected {} order, got {:?}",
            context,
            if ascending { "ascending" } else { "descending" },
            keys
        );
    }
}
