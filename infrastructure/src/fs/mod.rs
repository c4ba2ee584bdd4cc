//! Local file system adapters.
//!
//! Provides [`LocalDocumentStore`], which implements the
//! [`ChatDocumentPort`](transcripty_application::ChatDocumentPort) port.

mod local_store;

pub use local_store::LocalDocumentStore;
