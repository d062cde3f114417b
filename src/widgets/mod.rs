//! Widget components shared by the pages.
//!
//! - [`button`]: rounded, labelled, clickable rectangles
//! - [`input`]: the single-line question field
//! - [`text`]: word wrapping and multi-line centered text
//!
//! Every widget draws through a generic [`DrawTarget`](embedded_graphics::draw_target::DrawTarget)
//! so the fortune card can route it through the fade adapter. Draw results are
//! discarded with `.ok()`; the simulator display is infallible.

mod button;
mod input;
mod text;

pub use button::Button;
pub use input::draw_text_input;
pub use text::{draw_wrapped, wrap_lines};
