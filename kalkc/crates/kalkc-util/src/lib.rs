//! kalkc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the types shared by every phase of the Kalkyl
//! compiler: the compile error model, component identifiers and the presets
//! that control how source files are read.
//!
//! ERROR MODEL:
//! ------------
//! Every error belongs to a [`Phase`] and carries a two-digit issue code.
//! The public error number is `phase * 100 + issue` and must have a message
//! template; the displayed code joins the phase abbreviation and the issue,
//! e.g. `S.13` for number 213.
//!
//! ```text
//! Phase      digit  abbr  issues
//! Warning      0     W    -
//! Building     1     B    01-04 command line, 21-25 project directory
//! Parsing      2     S    01-10 limits, 11-28 lexical analysis
//! Resolving    3     N    -
//! Analyzing    4     A    -
//! Running      5     R    -
//! ```
//!
//! Errors are collected, never thrown: a pass reports into an [`ErrorSink`]
//! and keeps going. Only asking for an unregistered code fails, and it fails
//! at construction.

pub mod component;
pub mod diagnostic;
pub mod error;
pub mod presets;

pub use component::ComponentId;
pub use diagnostic::{
    CompileError, ErrorLocation, ErrorSink, Locations, Phase, SyntaxIssue,
};
pub use error::{DiagnosticError, DiagnosticResult, PresetError, PresetResult};
pub use presets::{Indentation, Presets};
