pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
pub mod events;
mod exchange;
mod scroll;
mod session_identity;
mod storefront;
mod widget_shell;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use exchange::*;
pub use scroll::*;
pub use session_identity::*;
pub use storefront::*;
pub use widget_shell::*;
