//! Presentation derivations for the drawer.
//!
//! Everything here is a plain function of the drawer's configuration and is
//! recomputed on every render. Nothing is cached between renders.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Class prefix shared by every drawer class.
pub const NAME: &str = "t-drawer";
/// Class added to `document.body` while a drawer blocks page scrolling.
pub const LOCK_CLASS: &str = "t-drawer--lock";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Left => "left",
            Placement::Right => "right",
            Placement::Top => "top",
            Placement::Bottom => "bottom",
        }
    }

    /// Left and right drawers size their width, top and bottom their height.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Placement::Left | Placement::Right)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerMode {
    /// The panel floats above the page.
    #[default]
    Overlay,
    /// The panel shifts its parent element out of the way.
    Push,
}

/// Drawer size: a named preset or an explicit CSS length.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawerSize {
    #[default]
    Small,
    Medium,
    Large,
    Px(f64),
    Literal(String),
}

impl DrawerSize {
    /// The CSS length this size resolves to.
    pub fn css_value(&self) -> String {
        match self {
            DrawerSize::Small => "300px".to_string(),
            DrawerSize::Medium => "500px".to_string(),
            DrawerSize::Large => "760px".to_string(),
            DrawerSize::Px(n) => format!("{n}px"),
            DrawerSize::Literal(s) => s.clone(),
        }
    }
}

impl FromStr for DrawerSize {
    type Err = Infallible;

    /// Never fails: unknown values are kept as a literal CSS length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = match s.trim() {
            "small" => DrawerSize::Small,
            "medium" => DrawerSize::Medium,
            "large" => DrawerSize::Large,
            "" => DrawerSize::Px(0.0),
            t => match t.parse::<f64>() {
                Ok(n) if n.is_finite() => DrawerSize::Px(n),
                _ => DrawerSize::Literal(s.to_string()),
            },
        };
        Ok(size)
    }
}

impl From<&str> for DrawerSize {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(size) => size,
            Err(never) => match never {},
        }
    }
}

impl From<String> for DrawerSize {
    fn from(s: String) -> Self {
        DrawerSize::from(s.as_str())
    }
}

impl From<f64> for DrawerSize {
    fn from(n: f64) -> Self {
        DrawerSize::Px(n)
    }
}

impl From<u32> for DrawerSize {
    fn from(n: u32) -> Self {
        DrawerSize::Px(f64::from(n))
    }
}

impl fmt::Display for DrawerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_value())
    }
}

/// Footer action buttons, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    Confirm,
    Cancel,
}

/// The slice of drawer configuration the class and style derivations read.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerLook {
    pub placement: Placement,
    pub size: DrawerSize,
    pub visible: bool,
    pub show_overlay: bool,
    pub show_in_attached_element: bool,
}

impl DrawerLook {
    pub fn root_class(&self) -> String {
        let mut classes = vec![NAME.to_string(), format!("{NAME}--{}", self.placement)];
        if self.visible {
            classes.push(format!("{NAME}--open"));
        }
        if self.show_in_attached_element {
            classes.push(format!("{NAME}--attach"));
        }
        if !self.show_overlay {
            classes.push(format!("{NAME}--without-mask"));
        }
        classes.join(" ")
    }

    pub fn root_style(z_index: Option<i32>) -> String {
        z_index.map(|z| format!("z-index: {z};")).unwrap_or_default()
    }

    pub fn wrapper_class(&self) -> String {
        format!(
            "{NAME}__content-wrapper {NAME}__content-wrapper--{}",
            self.placement
        )
    }

    /// Inline style of the sliding panel.
    ///
    /// The open transform cancels the placement's off-screen translation.
    pub fn wrapper_style(&self) -> String {
        let mut style = String::new();
        if self.visible {
            style.push_str("transform: translateX(0);");
        }
        let dimension = if self.placement.is_horizontal() {
            "width"
        } else {
            "height"
        };
        style.push_str(&format!(" {dimension}: {};", self.size.css_value()));
        style.trim_start().to_string()
    }

    pub fn footer_style(&self) -> String {
        let justify = if self.placement == Placement::Right {
            "flex-start"
        } else {
            "flex-end"
        };
        format!("display: flex; justify-content: {justify};")
    }

    pub fn footer_order(&self) -> [FooterAction; 2] {
        if self.placement == Placement::Right {
            [FooterAction::Confirm, FooterAction::Cancel]
        } else {
            [FooterAction::Cancel, FooterAction::Confirm]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn look(placement: Placement, size: DrawerSize, visible: bool) -> DrawerLook {
        DrawerLook {
            placement,
            size,
            visible,
            show_overlay: true,
            show_in_attached_element: false,
        }
    }

    #[test]
    fn presets_resolve_to_fixed_lengths() {
        assert_eq!(DrawerSize::from("small").css_value(), "300px");
        assert_eq!(DrawerSize::from("medium").css_value(), "500px");
        assert_eq!(DrawerSize::from("large").css_value(), "760px");
    }

    #[test]
    fn numeric_sizes_get_px_units() {
        assert_eq!(DrawerSize::from("420").css_value(), "420px");
        assert_eq!(DrawerSize::from(" 12.5 ").css_value(), "12.5px");
        assert_eq!(DrawerSize::from(640u32).css_value(), "640px");
        assert_eq!(DrawerSize::from(99.0).css_value(), "99px");
        assert_eq!(DrawerSize::from("").css_value(), "0px");
        assert_eq!(DrawerSize::from("  ").css_value(), "0px");
    }

    #[test]
    fn other_strings_pass_through() {
        assert_eq!(DrawerSize::from("40%").css_value(), "40%");
        assert_eq!(DrawerSize::from("20rem").css_value(), "20rem");
        assert_eq!(DrawerSize::from("Infinity").css_value(), "Infinity");
    }

    #[test]
    fn size_applies_to_width_or_height_by_placement() {
        for placement in [Placement::Left, Placement::Right] {
            let style = look(placement, DrawerSize::Medium, false).wrapper_style();
            assert_eq!(style, "width: 500px;");
        }
        for placement in [Placement::Top, Placement::Bottom] {
            let style = look(placement, DrawerSize::Large, false).wrapper_style();
            assert_eq!(style, "height: 760px;");
        }
    }

    #[test]
    fn open_panel_resets_transform() {
        let style = look(Placement::Left, DrawerSize::Small, true).wrapper_style();
        assert_eq!(style, "transform: translateX(0); width: 300px;");
    }

    #[test]
    fn root_class_reflects_state() {
        let mut l = look(Placement::Top, DrawerSize::Small, false);
        assert_eq!(l.root_class(), "t-drawer t-drawer--top");

        l.visible = true;
        l.show_overlay = false;
        l.show_in_attached_element = true;
        assert_eq!(
            l.root_class(),
            "t-drawer t-drawer--top t-drawer--open t-drawer--attach t-drawer--without-mask"
        );
    }

    #[test]
    fn footer_order_depends_on_placement() {
        let right = look(Placement::Right, DrawerSize::Small, true);
        assert_eq!(right.footer_order(), [FooterAction::Confirm, FooterAction::Cancel]);
        assert!(right.footer_style().contains("flex-start"));

        for placement in [Placement::Left, Placement::Top, Placement::Bottom] {
            let l = look(placement, DrawerSize::Small, true);
            assert_eq!(l.footer_order(), [FooterAction::Cancel, FooterAction::Confirm]);
            assert!(l.footer_style().contains("flex-end"));
        }
    }

    #[test]
    fn z_index_is_optional() {
        assert_eq!(DrawerLook::root_style(None), "");
        assert_eq!(DrawerLook::root_style(Some(2500)), "z-index: 2500;");
    }
}
