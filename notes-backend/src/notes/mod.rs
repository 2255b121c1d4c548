//! Notes system — in-memory note records served over the REST API
//!
//! Notes live only for the lifetime of the process. The store is built once
//! in `main` and shared with every request handler through `AppState`.

pub mod store;

pub use store::NoteStore;
