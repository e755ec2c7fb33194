use dioxus::prelude::*;

use crate::action::ResolvedButton;

/// Runs the drawer's own click handling, then the caller's extra handler.
pub(crate) fn press<T: Clone + 'static>(
    drawer: EventHandler<T>,
    extra: Option<EventHandler<T>>,
    event: T,
) {
    drawer.call(event.clone());
    if let Some(h) = extra {
        h.call(event);
    }
}

#[component]
pub fn DrawerButton(button: ResolvedButton, onclick: EventHandler<MouseEvent>) -> Element {
    let class = button.class_list();
    let disabled = if button.disabled { Some(true) } else { None };
    let extra = button.on_click;
    rsx! {
        button {
            r#type: "button",
            class,
            disabled,
            onclick: move |e: Event<MouseData>| press(onclick, extra, e),
            "{button.content}"
        }
    }
}
