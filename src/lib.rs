//! Host package for workspace-level integration tests; see `tests/`.
