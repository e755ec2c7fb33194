use dioxus::{
    logger::tracing::{Level, info, warn},
    prelude::*,
};

use tdrawer::{
    ButtonOptions, ButtonTheme, ConfigProvider, Drawer, DrawerMode, FooterButton, GlobalConfig,
    Placement, Region, load_config,
};

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_resource(|| async {
        match load_config().await {
            Ok(c) => c,
            Err(e) => {
                warn!("Could not load config: {e:?}");
                GlobalConfig::default()
            }
        }
    });
    let Some(config) = config() else {
        return rsx! { "Loading..." };
    };
    rsx! {
        ConfigProvider { config,
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/push")]
    Push {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        nav { style: "display: flex; gap: 1rem; padding: 1rem;",
            Link { to: Route::Home {}, "Placements" }
            Link { to: Route::Push {}, "Push mode" }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let mut open = use_signal(|| false);
    let mut placement = use_signal(|| Placement::Right);
    let mut last_event = use_signal(String::new);

    rsx! {
        div { style: "padding: 1rem;",
            for p in [Placement::Left, Placement::Right, Placement::Top, Placement::Bottom] {
                button {
                    key: "{p}",
                    onclick: move |_| {
                        placement.set(p);
                        open.set(true);
                    },
                    "Open {p}"
                }
            }
            p { "Last event: {last_event}" }
        }
        Drawer {
            visible: open(),
            placement: placement(),
            size: "medium",
            header: "Drawer",
            confirm_btn: FooterButton::Options(ButtonOptions {
                content: Some("Save".to_string()),
                theme: Some(ButtonTheme::Success),
                ..Default::default()
            }),
            on_visible_change: move |v| open.set(v),
            on_confirm: move |_| last_event.set("confirm".to_string()),
            on_close: move |ctx: tdrawer::CloseContext<tdrawer::DrawerInput>| {
                info!("closed by {}", ctx.trigger);
                last_event.set(format!("close ({})", ctx.trigger));
            },
            p { "Press Escape, click the mask or use the footer buttons." }
        }
    }
}

#[component]
fn Push() -> Element {
    let mut open = use_signal(|| false);
    let mut opened = use_signal(|| 0u32);

    rsx! {
        div { style: "padding: 1rem;",
            button { onclick: move |_| open.toggle(), "Toggle" }
            p { "Opened {opened} times." }
            Drawer {
                visible: open(),
                placement: Placement::Left,
                mode: DrawerMode::Push,
                size: 240u32,
                show_overlay: false,
                close_btn: Region::Hidden,
                footer: Region::Hidden,
                destroy_on_close: true,
                on_opened: move |_| *opened.write() += 1,
                on_visible_change: move |v| open.set(v),
                "The page content moves aside while this drawer is open."
            }
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}
