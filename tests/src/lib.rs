//! Integration tests for the full record-to-report pipeline.

#[cfg(test)]
mod integration;
