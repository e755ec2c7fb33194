//! DOM side effects owned by a drawer.
//!
//! A drawer writes outside its own subtree in three places: the parent
//! element's `margin` and `transition` in push mode, the body scroll-lock
//! class, and the attach target. [`DomState`] describes what should be in
//! place after a render; diffing two states yields the [`DomCommand`]s to
//! run. Commands are turned into small scripts evaluated by the renderer.

use serde_json::Value;

use crate::{
    events::DrawerEvent,
    style::{DrawerMode, LOCK_CLASS, Placement},
};

/// Transition installed on the parent so margin changes animate.
pub const MARGIN_TRANSITION: &str = "margin 300ms cubic-bezier(0.7, 0.3, 0.1, 1) 0s";

/// Attribute marking the parent whose style slots a drawer owns.
pub const OWNER_ATTR: &str = "data-drawer-owner";

#[derive(Debug, Clone, PartialEq)]
pub enum DomCommand {
    SetParentStyle {
        property: &'static str,
        value: String,
    },
    RemoveParentStyle {
        property: &'static str,
    },
    AddBodyClass(&'static str),
    RemoveBodyClass(&'static str),
    /// Move the drawer root under the element matching `selector`.
    Attach {
        selector: String,
    },
}

fn js_str(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

impl DomCommand {
    /// A self-contained script applying this command to the drawer rendered
    /// with element id `root_id`. Missing elements make the script a no-op.
    pub fn script(&self, root_id: &str) -> String {
        let root = js_str(root_id);
        let owned = js_str(&format!("[{OWNER_ATTR}=\"{root_id}\"]"));
        let parent = format!(
            "const root = document.getElementById({root}); \
             const parent = root && root.parentElement ? root.parentElement : document.querySelector({owned});"
        );
        match self {
            DomCommand::SetParentStyle { property, value } => format!(
                "(() => {{ {parent} if (!parent) return; \
                 parent.setAttribute({}, {root}); \
                 parent.style.setProperty({}, {}); }})();",
                js_str(OWNER_ATTR),
                js_str(property),
                js_str(value),
            ),
            DomCommand::RemoveParentStyle { property } => format!(
                "(() => {{ {parent} if (!parent) return; \
                 parent.style.removeProperty({}); }})();",
                js_str(property),
            ),
            DomCommand::AddBodyClass(class) => {
                format!("document.body.classList.add({});", js_str(class))
            }
            DomCommand::RemoveBodyClass(class) => {
                format!("document.body.classList.remove({});", js_str(class))
            }
            DomCommand::Attach { selector } => format!(
                "(() => {{ const root = document.getElementById({root}); \
                 const target = document.querySelector({}); \
                 if (root && target && root.parentElement !== target) target.appendChild(root); }})();",
                js_str(selector),
            ),
        }
    }
}

/// Joins the scripts of `commands` into one evaluation.
pub fn batch_script(root_id: &str, commands: &[DomCommand]) -> String {
    commands
        .iter()
        .map(|c| c.script(root_id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parent margin that makes room for a pushed drawer.
pub fn push_margin(placement: Placement, size: &str) -> String {
    match placement {
        Placement::Left => format!("0 0 0 {size}"),
        Placement::Right => format!("0 0 0 -{size}"),
        Placement::Top => format!("{size} 0 0 0"),
        Placement::Bottom => format!("-{size} 0 0 0"),
    }
}

/// External DOM state a drawer should have in place after a render.
#[derive(Debug, Clone, PartialEq)]
pub struct DomState {
    pub mode: DrawerMode,
    pub placement: Placement,
    /// Resolved CSS length.
    pub size: String,
    pub visible: bool,
    pub prevent_scroll_through: bool,
    pub show_in_attached_element: bool,
    pub attach: Option<String>,
    /// False while `destroy_on_close` keeps the drawer out of the DOM.
    pub rendered: bool,
}

impl DomState {
    pub fn body_locked(&self) -> bool {
        self.prevent_scroll_through && self.visible && !self.show_in_attached_element
    }

    fn parent_margin(&self) -> Option<String> {
        (self.mode == DrawerMode::Push && self.visible)
            .then(|| push_margin(self.placement, &self.size))
    }

    /// True when this state shows a drawer that `prev` did not.
    pub fn became_visible(&self, prev: Option<&DomState>) -> bool {
        self.visible && !prev.is_some_and(|p| p.visible)
    }

    /// True when the drawer's root exists now but did not under `prev`.
    pub fn mounted(&self, prev: Option<&DomState>) -> bool {
        self.rendered && !prev.is_some_and(|p| p.rendered)
    }

    /// Lifecycle notifications for this update, in order.
    ///
    /// `Opened` and `Closed` are reported here only when the root appears or
    /// disappears with no slide transition to report them.
    pub fn lifecycle<E>(&self, prev: Option<&DomState>) -> Vec<DrawerEvent<E>> {
        let mut events = vec![];
        if self.became_visible(prev) {
            events.push(DrawerEvent::Open);
        }
        if self.visible && self.mounted(prev) {
            events.push(DrawerEvent::Opened);
        }
        if !self.rendered && prev.is_some_and(|p| p.rendered && p.visible) {
            events.push(DrawerEvent::Closed);
        }
        events
    }

    /// Commands moving the page from `prev` (nothing applied yet when `None`)
    /// to `self`.
    ///
    /// The transition is written before any margin so the margin animates.
    /// Margins live in a single style slot, so repeating a state never stacks
    /// declarations.
    ///
    /// Writes that need the root element (attach, the push transition) wait
    /// until the root is rendered and are repeated each time it is recreated.
    pub fn diff(&self, prev: Option<&DomState>) -> Vec<DomCommand> {
        let mut commands = vec![];
        let mounted = self.mounted(prev);

        if let Some(selector) = &self.attach
            && self.rendered
            && (mounted || prev.is_none_or(|p| p.attach.as_ref() != Some(selector)))
        {
            commands.push(DomCommand::Attach {
                selector: selector.clone(),
            });
        }

        let was_push = prev.is_some_and(|p| p.mode == DrawerMode::Push);
        if self.mode == DrawerMode::Push {
            let layout_changed =
                prev.is_none_or(|p| p.mode != self.mode || p.placement != self.placement);
            if mounted || (self.rendered && layout_changed) {
                commands.push(DomCommand::SetParentStyle {
                    property: "transition",
                    value: MARGIN_TRANSITION.to_string(),
                });
            }
        } else if was_push {
            commands.push(DomCommand::RemoveParentStyle { property: "margin" });
            commands.push(DomCommand::RemoveParentStyle {
                property: "transition",
            });
        }

        if self.mode == DrawerMode::Push {
            let before = prev.and_then(|p| p.parent_margin());
            match (before, self.parent_margin()) {
                (before, Some(margin)) if before.as_ref() != Some(&margin) => {
                    commands.push(DomCommand::SetParentStyle {
                        property: "margin",
                        value: margin,
                    });
                }
                (Some(_), None) => {
                    commands.push(DomCommand::RemoveParentStyle { property: "margin" });
                }
                _ => {}
            }
        }

        let was_locked = prev.is_some_and(|p| p.body_locked());
        match (was_locked, self.body_locked()) {
            (false, true) => commands.push(DomCommand::AddBodyClass(LOCK_CLASS)),
            (true, false) => commands.push(DomCommand::RemoveBodyClass(LOCK_CLASS)),
            _ => {}
        }

        commands
    }

    /// Commands releasing everything this state holds, run on unmount.
    pub fn release(&self) -> Vec<DomCommand> {
        let mut commands = vec![];
        if self.mode == DrawerMode::Push {
            commands.push(DomCommand::RemoveParentStyle { property: "margin" });
            commands.push(DomCommand::RemoveParentStyle {
                property: "transition",
            });
        }
        if self.body_locked() {
            commands.push(DomCommand::RemoveBodyClass(LOCK_CLASS));
        }
        commands
    }
}
