//! Cross-engine tests for sortvis-core
