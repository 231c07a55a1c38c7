//! Shared test utilities for lore-db unit tests.
