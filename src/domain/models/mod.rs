mod action;
mod attachment;
mod author;
mod classification;
mod classifier;
mod event;
mod message;
mod progress;
mod slash_commands;
mod textarea;
mod theme;

pub use action::*;
pub use attachment::*;
pub use author::*;
pub use classification::*;
pub use classifier::*;
pub use event::*;
pub use message::*;
pub use progress::*;
pub use slash_commands::*;
pub use textarea::*;
pub use theme::*;
