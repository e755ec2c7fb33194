//! Dioxus components.
//!
//! [`drawer::Drawer`] is the public widget; [`button::DrawerButton`] renders
//! its footer actions.

pub mod button;    // Footer action button
pub mod drawer;    // Slide-in panel
