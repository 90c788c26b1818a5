//! Property-based tests for the scalar rings.
