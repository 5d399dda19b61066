//! Property-based tests for registry lookups
