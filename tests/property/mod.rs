//! Property-based tests for quiz generation and scoring

mod generation;
mod scoring;
