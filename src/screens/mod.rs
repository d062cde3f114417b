//! Screen modules for the boot splash, the two routes and the debug view.
//!
//! # Boot Sequence
//!
//! 1. **Splash** ([`splash`]): Title and the slowly folding teller
//! 2. Landing page (routed by [`crate::app::App`])
//!
//! # Routes
//!
//! - **Home** ([`home`]): Illustration with fallback and the call to action
//! - **Fortune** ([`fortune`]): Question form, color picks, animations and answer
//!
//! # Runtime Screens
//!
//! - **Debug Page** ([`debug`]): Frame timing, app state and the debug log terminal (`F1` from any route)
//!
//! # Event Handling
//!
//! The splash returns `false` if the window is closed, allowing the application
//! to exit cleanly without entering the main loop. Pages consume
//! [`crate::input::InputEvent`]s and answer with the route to navigate to.

mod debug;
mod fortune;
mod home;
mod splash;

pub use debug::{AppStatus, draw_debug_page};
pub use fortune::FortunePage;
pub use home::{HomePage, IMAGE_SLOT};
pub use splash::{draw_splash, run_splash_screen};
