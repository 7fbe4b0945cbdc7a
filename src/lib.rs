//! Command-line notification dispatcher.
//!
//! `chime` tells you that something finished. One invocation can play a sound
//! effect, speak a message aloud and raise a desktop notification, in any
//! combination. Which channels run, and with what sound file, volume and
//! message, is decided by layering command-line flags over an optional JSON
//! configuration file over built-in defaults.
//!
//! # Architecture
//!
//! A run is a straight pipeline: [`config::ConfigLoader`] produces the
//! configured [`config::Options`], [`config::resolve_options`] applies the
//! command-line overrides and validates the result, and
//! [`dispatch::Dispatcher`] runs the selected channels concurrently. Channel
//! failures come back as error strings; configuration problems only ever
//! produce warnings.
//!
//! # Modules
//!
//! - [`api`]: Orchestration of a complete run
//! - [`config`]: Options, configuration loading and command-line overrides
//! - [`dispatch`]: Concurrent fan-out to the notification channels
//! - [`error`]: Semantic error types for the application
//! - [`notify`]: Sound, voice and desktop notification channels
//! - [`paths`]: Tilde expansion and relative path anchoring
//! - [`platform`]: Host platform detection

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod notify;
pub mod paths;
pub mod platform;
