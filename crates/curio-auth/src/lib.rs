//! Mock authentication for Curio.
//!
//! Accept-anything login/signup with a durable current-user record.
//! Authentication security is explicitly out of scope; this exists so
//! the storefront has a signed-in identity to hang carts and purchases
//! on.

mod service;
mod user;

pub use service::{AuthService, SignupProfile};
pub use user::User;
