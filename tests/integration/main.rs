//! Integration tests: drive the full command loop over in-memory I/O.

mod transcript;
