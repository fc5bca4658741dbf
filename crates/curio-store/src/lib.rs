//! Key-value backing store for Curio.
//!
//! A local, synchronous analog of browser local storage: string keys,
//! JSON payloads, with a typed API on top.
//!
//! # Example
//!
//! ```
//! use curio_store::{Session, Store};
//!
//! let store = Store::in_memory();
//! store.set("greeting", &"hello").unwrap();
//! let value: Option<String> = store.get("greeting").unwrap();
//! assert_eq!(value.as_deref(), Some("hello"));
//!
//! // Session reads never fail; they degrade to defaults.
//! let session = Session::new(store);
//! let missing: Vec<String> = session.restore("nothing here");
//! assert!(missing.is_empty());
//! ```

pub mod backend;
mod error;
mod session;
mod store;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::StoreError;
pub use session::{Session, CART_KEY, CURRENT_USER_KEY, PURCHASES_KEY};
pub use store::Store;
