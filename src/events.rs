//! Translation of user interactions into outward drawer notifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What asked the drawer to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trigger {
    CloseBtn,
    Overlay,
    Esc,
    Cancel,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::CloseBtn => "close-btn",
            Trigger::Overlay => "overlay",
            Trigger::Esc => "esc",
            Trigger::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Passed to close handlers together with the input event that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseContext<E> {
    pub trigger: Trigger,
    pub event: E,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Interaction<E> {
    OverlayClick(E),
    CloseBtnClick(E),
    KeyDown { escape: bool, event: E },
    ConfirmClick(E),
    CancelClick(E),
}

/// The behaviour flags that decide whether an interaction closes the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Behavior {
    pub close_on_overlay_click: bool,
    pub close_on_esc_keydown: bool,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            close_on_overlay_click: true,
            close_on_esc_keydown: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawerEvent<E> {
    Open,
    Opened,
    Closed,
    OverlayClick(E),
    CloseBtnClick(E),
    EscKeydown(E),
    Confirm(E),
    Cancel(E),
    Close(CloseContext<E>),
    /// Two-way binding update; the owner holds the actual flag.
    VisibleChange(bool),
}

fn close<E>(events: &mut Vec<DrawerEvent<E>>, trigger: Trigger, event: E) {
    events.push(DrawerEvent::Close(CloseContext { trigger, event }));
    events.push(DrawerEvent::VisibleChange(false));
}

/// Notifications an interaction produces, in emission order.
pub fn respond<E: Clone>(interaction: Interaction<E>, behavior: Behavior) -> Vec<DrawerEvent<E>> {
    let mut events = vec![];
    match interaction {
        Interaction::OverlayClick(e) => {
            events.push(DrawerEvent::OverlayClick(e.clone()));
            if behavior.close_on_overlay_click {
                close(&mut events, Trigger::Overlay, e);
            }
        }
        Interaction::CloseBtnClick(e) => {
            events.push(DrawerEvent::CloseBtnClick(e.clone()));
            close(&mut events, Trigger::CloseBtn, e);
        }
        Interaction::KeyDown { escape, event } => {
            if escape && behavior.close_on_esc_keydown {
                events.push(DrawerEvent::EscKeydown(event.clone()));
                close(&mut events, Trigger::Esc, event);
            }
        }
        Interaction::ConfirmClick(e) => events.push(DrawerEvent::Confirm(e)),
        Interaction::CancelClick(e) => {
            events.push(DrawerEvent::Cancel(e.clone()));
            close(&mut events, Trigger::Cancel, e);
        }
    }
    events
}

/// Lifecycle notification for a `transitionend` on the panel.
///
/// Only the panel's own slide counts; transitions bubbling up from content
/// animate other properties.
pub fn transition_end<E>(property: &str, visible: bool) -> Option<DrawerEvent<E>> {
    if property != "transform" {
        return None;
    }
    Some(if visible {
        DrawerEvent::Opened
    } else {
        DrawerEvent::Closed
    })
}
