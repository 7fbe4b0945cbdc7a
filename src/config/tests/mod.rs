//! Unit tests for chime configuration.
//!
//! This module contains tests organised into:
//! - [`helpers`] - Shared fixtures and helper functions
//! - [`types_tests`] - `Options` and `PartialOptions` type and serialisation tests
//! - [`loader_tests`] - `ConfigLoader` file handling and discovery tests
//! - [`validation`] - Volume validation across the loading pipeline
//! - [`layer_precedence_tests`] - defaults < file < command line precedence tests

mod helpers;
