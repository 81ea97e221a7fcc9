mod action;
mod author;
mod event;
mod layout;
mod loading;
mod message;
mod product;
mod storage;
mod textarea;
mod webhook;

pub use action::*;
pub use author::*;
pub use event::*;
pub use layout::*;
pub use loading::*;
pub use message::*;
pub use product::*;
pub use storage::*;
pub use textarea::*;
pub use webhook::*;
