//! Workspace-level integration tests for rackcalc live under `tests/`.
