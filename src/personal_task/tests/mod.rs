//! Unit tests for the personal-task context.

mod domain_tests;
