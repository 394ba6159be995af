//! Tests for the depth-of-field engine
//!
//! Tests are organized by topic:
//! - `optics` - Closed-form formulas and their edge cases
//! - `evaluate` - Parameter sets, overrides and axis binding
//! - `sweep` - Domain construction, series layout and axis clamping
//! - `format` - Length labels

mod sweep;
