//! Integration tests exercising the public library surface.

mod api;
mod determinism;
