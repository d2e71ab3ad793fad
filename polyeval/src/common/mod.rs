/// tracing subscriber setup for the binary
pub mod trace;
