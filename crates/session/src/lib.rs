//! `schoolhub-session`: session & access model.
//!
//! Holds the signed-in principal, persists it to client-local storage, and
//! answers "what may the current principal see and do" by delegating to the
//! policy in `schoolhub-auth`.

pub mod config;
pub mod error;
pub mod events;
pub mod session;
pub mod storage;

pub use config::SessionConfig;
pub use error::{SessionError, StorageError};
pub use events::{SessionEvent, SessionEventKind};
pub use session::{Session, SessionStatus};
pub use storage::{FileStorage, InMemoryStorage, SessionStorage, default_storage_path};
