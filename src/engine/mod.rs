//! Case-progress validation engine.
//!
//! Everything in here is a pure function of an immutable `CaseSnapshot` and the
//! learner's submitted actions, so it is safe to call from any number of
//! concurrent requests. Credit recording lives outside, in `logic`.

pub mod bacterium;
pub mod groups;
pub mod hints;
pub mod samples;
pub mod sequence;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bacterium::bacterium_matches;
pub use samples::check_samples;
pub use sequence::{check_tests, parse_test_submission};
