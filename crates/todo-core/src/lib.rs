pub mod auth;
pub mod config;
pub mod error;
pub mod input;
pub mod result;

pub use auth::{Authenticator, LocalSession};
pub use config::AppConfig;
pub use error::TodoError;
pub use input::InputState;
pub use result::TodoResult;
