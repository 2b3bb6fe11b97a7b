//! Browser implementations of the core's I/O seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends requests with `fetch` and `storage` keeps the session
//! token in `localStorage`. Without the `csr` feature both compile to inert
//! stubs so the crate still builds and tests natively.

pub mod storage;
pub mod transport;
