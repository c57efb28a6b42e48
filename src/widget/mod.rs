//! Content trait and ready-made contents.
//!
//! Anything implementing [`Content`] can be wrapped in a layout leaf. This
//! module also ships a few contents that are handy for building screens:
//! static [`Text`], a three-section [`StatusBar`] and a scrolling [`LogView`].

mod log_view;
mod status_bar;
mod text;
mod traits;

pub use log_view::LogView;
pub use status_bar::StatusBar;
pub use text::Text;
pub use traits::{AsAny, Content};
