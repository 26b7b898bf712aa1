//! Playback control core: the widget state machine, the handle seam it drives,
//! and the playlist identifier it is configured with.
//! Nothing in here touches the DOM, so all of it runs under native tests.

mod error;
mod handle;
mod playlist;
mod status;
mod widget;

pub use error::*;
pub use handle::*;
pub use playlist::*;
pub use status::*;
pub use widget::*;
