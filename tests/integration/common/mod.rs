//! Common utilities for integration tests.
//!
//! This module provides shared test infrastructure for LocalStack-based
//! integration testing, including client setup and test data upload.


pub use localstack::LocalStackTestContext;
