//! Workspace test shell — the cross-crate golden tests live in `tests/`.
