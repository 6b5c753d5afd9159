//! Test Module
//!
//! Cross-component test suite for the LyricScore engine.
//!
//! ## Test Categories
//! - `scoring_tests`: tokenizer, syllables, rhyme, emotion, aggregation, classification
//! - `integration_tests`: full analysis workflows, wire format, shared lexicon use
