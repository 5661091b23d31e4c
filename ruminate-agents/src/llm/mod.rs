//! Text generators for driving agents.
//!
//! Production models live behind [`ruminate_core::TextGenerator`]; this
//! module ships the scripted [`FakeListGenerator`] used to replay recorded
//! completions deterministically.

mod fake;

pub use fake::{FakeListGenerator, GeneratorCall};
