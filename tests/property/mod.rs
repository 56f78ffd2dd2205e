//! Property-based tests for formatting, poll predicates and run-start defaults
