pub mod actions;
mod app_state;
pub mod bubble;
mod chat_session;
pub mod clipboard;
pub mod events;
mod progress;
mod scroll;
mod transcript;

pub use app_state::*;
pub use bubble::Bubble;
pub use chat_session::*;
pub use progress::*;
pub use scroll::*;
pub use transcript::*;
