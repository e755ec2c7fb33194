//! A slide-in drawer panel for Dioxus.
//!
//! ```ignore
//! rsx! {
//!     Drawer {
//!         visible: open(),
//!         placement: Placement::Left,
//!         size: "medium",
//!         on_visible_change: move |v| open.set(v),
//!         "Drawer body"
//!     }
//! }
//! ```

pub mod action;
pub mod config;
pub mod dom;
pub mod events;
pub mod render;
pub mod style;
mod ui;

pub use action::{ButtonOptions, ButtonTheme, FooterButton};
pub use config::{ConfigProvider, DrawerConfig, GlobalConfig, load_config, use_drawer_config};
pub use events::{CloseContext, Trigger};
pub use render::Region;
pub use style::{DrawerMode, DrawerSize, Placement};
pub use ui::drawer::{Drawer, DrawerInput, DrawerProps};
