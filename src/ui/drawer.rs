//! The drawer component.
//!
//! Rendering reads only the props; anything outside the drawer's own subtree
//! (parent margin, body scroll lock, attach target) is diffed in
//! [`DomState`] and written after the render commits.

use std::{
    cell::RefCell,
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

use dioxus::{
    logger::tracing::{debug, warn},
    prelude::*,
};

use crate::{
    action::{FooterButton, arrange_footer, resolve_cancel_btn, resolve_confirm_btn},
    config::use_drawer_config,
    dom::{DomCommand, DomState, batch_script},
    events::{Behavior, CloseContext, DrawerEvent, Interaction, respond, transition_end},
    render::Region,
    style::{DrawerLook, DrawerMode, DrawerSize, FooterAction, NAME, Placement},
    ui::button::DrawerButton,
};

const CLOSE_ICON: Asset = asset!("/assets/close.svg");
const DRAWER_CSS: Asset = asset!("/assets/drawer.css");

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// The input event behind a drawer notification.
#[derive(Clone)]
pub enum DrawerInput {
    Mouse(MouseEvent),
    Keyboard(KeyboardEvent),
}

#[derive(Props, Clone, PartialEq)]
pub struct DrawerProps {
    /// Owned by the caller; update it from `on_visible_change`.
    #[props(default)]
    pub visible: bool,
    #[props(default)]
    pub placement: Placement,
    #[props(default, into)]
    pub size: DrawerSize,
    #[props(default)]
    pub mode: DrawerMode,
    #[props(default = true)]
    pub show_overlay: bool,
    #[props(default)]
    pub show_in_attached_element: bool,
    #[props(default, into)]
    pub close_btn: Region,
    #[props(default = Region::Hidden, into)]
    pub header: Region,
    /// Replaces `children` unless left at [`Region::Default`].
    #[props(default, into)]
    pub body: Region,
    #[props(default, into)]
    pub footer: Region,
    pub confirm_btn: Option<FooterButton>,
    pub cancel_btn: Option<FooterButton>,
    #[props(default = true)]
    pub close_on_overlay_click: bool,
    #[props(default = true)]
    pub close_on_esc_keydown: bool,
    #[props(default = true)]
    pub prevent_scroll_through: bool,
    #[props(default)]
    pub destroy_on_close: bool,
    pub z_index: Option<i32>,
    /// CSS selector of the element the drawer moves itself under.
    pub attach: Option<String>,

    pub on_open: Option<EventHandler<()>>,
    pub on_close: Option<EventHandler<CloseContext<DrawerInput>>>,
    pub on_opened: Option<EventHandler<()>>,
    pub on_closed: Option<EventHandler<()>>,
    pub on_visible_change: Option<EventHandler<bool>>,
    pub on_overlay_click: Option<EventHandler<DrawerInput>>,
    pub on_close_btn_click: Option<EventHandler<DrawerInput>>,
    pub on_esc_keydown: Option<EventHandler<DrawerInput>>,
    pub on_confirm: Option<EventHandler<DrawerInput>>,
    pub on_cancel: Option<EventHandler<DrawerInput>>,

    pub children: Element,
}

#[derive(Clone, Copy)]
struct Handlers {
    on_open: Option<EventHandler<()>>,
    on_close: Option<EventHandler<CloseContext<DrawerInput>>>,
    on_opened: Option<EventHandler<()>>,
    on_closed: Option<EventHandler<()>>,
    on_visible_change: Option<EventHandler<bool>>,
    on_overlay_click: Option<EventHandler<DrawerInput>>,
    on_close_btn_click: Option<EventHandler<DrawerInput>>,
    on_esc_keydown: Option<EventHandler<DrawerInput>>,
    on_confirm: Option<EventHandler<DrawerInput>>,
    on_cancel: Option<EventHandler<DrawerInput>>,
}

fn call<T>(handler: Option<EventHandler<T>>, value: T) {
    if let Some(h) = handler {
        h.call(value);
    }
}

impl Handlers {
    fn new(props: &DrawerProps) -> Self {
        Self {
            on_open: props.on_open,
            on_close: props.on_close,
            on_opened: props.on_opened,
            on_closed: props.on_closed,
            on_visible_change: props.on_visible_change,
            on_overlay_click: props.on_overlay_click,
            on_close_btn_click: props.on_close_btn_click,
            on_esc_keydown: props.on_esc_keydown,
            on_confirm: props.on_confirm,
            on_cancel: props.on_cancel,
        }
    }

    fn emit(&self, event: DrawerEvent<DrawerInput>) {
        match event {
            DrawerEvent::Open => call(self.on_open, ()),
            DrawerEvent::Opened => call(self.on_opened, ()),
            DrawerEvent::Closed => call(self.on_closed, ()),
            DrawerEvent::OverlayClick(e) => call(self.on_overlay_click, e),
            DrawerEvent::CloseBtnClick(e) => call(self.on_close_btn_click, e),
            DrawerEvent::EscKeydown(e) => call(self.on_esc_keydown, e),
            DrawerEvent::Confirm(e) => call(self.on_confirm, e),
            DrawerEvent::Cancel(e) => call(self.on_cancel, e),
            DrawerEvent::Close(ctx) => {
                debug!("drawer closing: {}", ctx.trigger);
                call(self.on_close, ctx)
            }
            DrawerEvent::VisibleChange(v) => call(self.on_visible_change, v),
        }
    }

    fn dispatch(&self, interaction: Interaction<DrawerInput>, behavior: Behavior) {
        for event in respond(interaction, behavior) {
            self.emit(event);
        }
    }
}

fn run_commands(root_id: &str, commands: &[DomCommand]) {
    if commands.is_empty() {
        return;
    }
    debug!("{root_id}: {commands:?}");
    let eval = document::eval(&batch_script(root_id, commands));
    // Outlives the drawer's scope so unmount cleanup is still reported.
    spawn_forever(async move {
        if let Err(e) = eval.await {
            warn!("drawer DOM update failed: {e:?}");
        }
    });
}

#[component]
pub fn Drawer(props: DrawerProps) -> Element {
    let root_id = use_hook(|| format!("{NAME}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)));
    let global = use_drawer_config();
    let handlers = Handlers::new(&props);
    let behavior = Behavior {
        close_on_overlay_click: props.close_on_overlay_click,
        close_on_esc_keydown: props.close_on_esc_keydown,
    };

    let desired = DomState {
        mode: props.mode,
        placement: props.placement,
        size: props.size.css_value(),
        visible: props.visible,
        prevent_scroll_through: props.prevent_scroll_through,
        show_in_attached_element: props.show_in_attached_element,
        attach: props.attach.clone(),
        rendered: !(props.destroy_on_close && !props.visible),
    };
    let applied = use_hook(|| Rc::new(RefCell::new(None::<DomState>)));

    let effect_applied = applied.clone();
    let effect_root = root_id.clone();
    use_effect(use_reactive((&desired,), move |(desired,)| {
        let prev = effect_applied.borrow_mut().replace(desired.clone());
        run_commands(&effect_root, &desired.diff(prev.as_ref()));
        for event in desired.lifecycle(prev.as_ref()) {
            handlers.emit(event);
        }
    }));

    let drop_applied = applied.clone();
    let drop_root = root_id.clone();
    use_drop(move || {
        if let Some(state) = drop_applied.borrow().as_ref() {
            run_commands(&drop_root, &state.release());
        }
    });

    if props.destroy_on_close && !props.visible {
        return rsx! {};
    }

    let look = DrawerLook {
        placement: props.placement,
        size: props.size.clone(),
        visible: props.visible,
        show_overlay: props.show_overlay,
        show_in_attached_element: props.show_in_attached_element,
    };
    let visible = props.visible;

    let header = props.header.project(|| rsx! {});
    let close_btn = props.close_btn.project(|| {
        rsx! {
            img { class: "{NAME}__close-icon", src: CLOSE_ICON }
        }
    });
    let body = props.body.project(|| props.children.clone());
    let footer = props.footer.project(|| {
        let confirm = resolve_confirm_btn(
            props.confirm_btn.as_ref(),
            Some(global.confirm.as_str()),
            &format!("{NAME}__confirm"),
        );
        let cancel = resolve_cancel_btn(
            props.cancel_btn.as_ref(),
            Some(global.cancel.as_str()),
            &format!("{NAME}__cancel"),
        );
        let buttons = arrange_footer(look.footer_order(), confirm, cancel);
        rsx! {
            div { style: look.footer_style(),
                for (action, button) in buttons {
                    DrawerButton {
                        key: "{action:?}",
                        button,
                        onclick: move |e: MouseEvent| {
                            let input = DrawerInput::Mouse(e);
                            let interaction = match action {
                                FooterAction::Confirm => Interaction::ConfirmClick(input),
                                FooterAction::Cancel => Interaction::CancelClick(input),
                            };
                            handlers.dispatch(interaction, behavior);
                        },
                    }
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: DRAWER_CSS }
        div {
            id: root_id,
            class: look.root_class(),
            style: DrawerLook::root_style(props.z_index),
            tabindex: "-1",
            onkeydown: move |e: KeyboardEvent| {
                let escape = e.key() == Key::Escape;
                handlers.dispatch(Interaction::KeyDown { escape, event: DrawerInput::Keyboard(e) }, behavior);
            },
            if props.show_overlay {
                div {
                    class: "{NAME}__mask",
                    onclick: move |e: MouseEvent| {
                        handlers.dispatch(Interaction::OverlayClick(DrawerInput::Mouse(e)), behavior);
                    },
                }
            }
            div {
                class: look.wrapper_class(),
                style: look.wrapper_style(),
                ontransitionend: move |e: TransitionEvent| {
                    if let Some(event) = transition_end(&e.property_name(), visible) {
                        handlers.emit(event);
                    }
                },
                if props.header.is_shown() {
                    div { class: "{NAME}__header", {header} }
                }
                if props.close_btn.is_shown() {
                    div {
                        class: "{NAME}__close-btn",
                        onclick: move |e: MouseEvent| {
                            handlers.dispatch(Interaction::CloseBtnClick(DrawerInput::Mouse(e)), behavior);
                        },
                        {close_btn}
                    }
                }
                div { class: "{NAME}__body narrow-scrollbar", {body} }
                if props.footer.is_shown() {
                    div { class: "{NAME}__footer", {footer} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{action::ButtonOptions, ui::button::press};

    thread_local! {
        static CLICKS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle} not rendered in {html}"))
    }

    #[test]
    fn hidden_drawer_destroyed_on_close_renders_nothing() {
        fn app() -> Element {
            rsx! {
                Drawer { destroy_on_close: true, header: "Title", "Body text" }
            }
        }
        let html = render(app);
        assert!(!html.contains(NAME), "{html}");
        assert!(!html.contains("Title"));
        assert!(!html.contains("Body text"));
    }

    #[test]
    fn hidden_drawer_stays_mounted_by_default() {
        fn app() -> Element {
            rsx! {
                Drawer { "Body text" }
            }
        }
        let html = render(app);
        assert!(html.contains("t-drawer__mask"));
        assert!(html.contains("t-drawer__body"));
        assert!(html.contains("Body text"));
        assert!(!html.contains("t-drawer--open"));
    }

    #[test]
    fn right_footer_renders_confirm_first() {
        fn app() -> Element {
            rsx! {
                Drawer { visible: true, placement: Placement::Right, "Body" }
            }
        }
        let html = render(app);
        assert!(position(&html, "t-drawer__confirm") < position(&html, "t-drawer__cancel"));
        assert!(html.contains("justify-content: flex-start"));
    }

    #[test]
    fn left_footer_renders_cancel_first() {
        fn app() -> Element {
            rsx! {
                Drawer { visible: true, placement: Placement::Left, "Body" }
            }
        }
        let html = render(app);
        assert!(position(&html, "t-drawer__cancel") < position(&html, "t-drawer__confirm"));
        assert!(html.contains("justify-content: flex-end"));
    }

    #[test]
    fn disabled_confirm_is_not_rendered() {
        fn app() -> Element {
            rsx! {
                Drawer { visible: true, confirm_btn: FooterButton::Show(false), "Body" }
            }
        }
        let html = render(app);
        assert!(!html.contains("t-drawer__confirm"));
        assert!(html.contains("t-drawer__cancel"));
    }

    #[test]
    fn confirm_options_reach_the_button() {
        fn app() -> Element {
            rsx! {
                Drawer {
                    visible: true,
                    confirm_btn: FooterButton::Options(ButtonOptions {
                        content: Some("OK".to_string()),
                        class: Some("wide".to_string()),
                        ..Default::default()
                    }),
                    "Body"
                }
            }
        }
        let html = render(app);
        assert!(html.contains("t-button--theme-primary t-drawer__confirm wide"));
        assert!(html.contains(">OK<"));
    }

    #[test]
    fn confirm_runs_extra_handler_without_closing() {
        fn app() -> Element {
            use_hook(|| {
                let drawer = EventHandler::new(|e: &'static str| {
                    for event in respond(Interaction::ConfirmClick(e), Behavior::default()) {
                        CLICKS.with(|c| c.borrow_mut().push(format!("{event:?}")));
                    }
                });
                let extra = EventHandler::new(|e: &'static str| {
                    CLICKS.with(|c| c.borrow_mut().push(format!("extra {e}")));
                });
                press(drawer, Some(extra), "click");
            });
            rsx! {}
        }
        CLICKS.with(|c| c.borrow_mut().clear());
        render(app);
        let clicks = CLICKS.with(|c| c.borrow().clone());
        assert_eq!(clicks, ["Confirm(\"click\")", "extra click"]);
    }
}
