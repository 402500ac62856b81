//! State Management
//!
//! Session context and the browser adapters it is built from.

pub mod session;
pub mod storage;

pub use session::{provide_session_context, use_session, SessionContext};
pub use storage::LocalStorageStore;
