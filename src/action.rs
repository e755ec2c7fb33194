//! Confirm/cancel footer button resolution.
//!
//! A button comes from, in order: the drawer's own prop, the global default
//! label, or nowhere when the resolved value is empty or `false`.

use dioxus::prelude::*;

use crate::style::FooterAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonTheme {
    #[default]
    Default,
    Primary,
    Danger,
    Warning,
    Success,
}

impl ButtonTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonTheme::Default => "default",
            ButtonTheme::Primary => "primary",
            ButtonTheme::Danger => "danger",
            ButtonTheme::Warning => "warning",
            ButtonTheme::Success => "success",
        }
    }
}

/// Caller-supplied options merged onto the default button.
#[derive(Clone, PartialEq, Default)]
pub struct ButtonOptions {
    /// Label; falls back to the global default when `None`.
    pub content: Option<String>,
    pub theme: Option<ButtonTheme>,
    /// Extra classes appended after the drawer's own.
    pub class: Option<String>,
    pub disabled: bool,
    /// Runs after the drawer has handled the click.
    pub on_click: Option<EventHandler<MouseEvent>>,
}

/// A footer button prop.
#[derive(Clone, PartialEq)]
pub enum FooterButton {
    Show(bool),
    Label(String),
    Options(ButtonOptions),
}

impl From<bool> for FooterButton {
    fn from(show: bool) -> Self {
        FooterButton::Show(show)
    }
}

impl From<&str> for FooterButton {
    fn from(label: &str) -> Self {
        FooterButton::Label(label.to_string())
    }
}

impl From<String> for FooterButton {
    fn from(label: String) -> Self {
        FooterButton::Label(label)
    }
}

impl From<ButtonOptions> for FooterButton {
    fn from(options: ButtonOptions) -> Self {
        FooterButton::Options(options)
    }
}

/// Everything needed to render one footer button.
#[derive(Clone, PartialEq)]
pub struct ResolvedButton {
    pub content: String,
    pub theme: ButtonTheme,
    pub class: String,
    pub disabled: bool,
    pub on_click: Option<EventHandler<MouseEvent>>,
}

impl ResolvedButton {
    pub fn class_list(&self) -> String {
        format!("t-button t-button--theme-{} {}", self.theme.as_str(), self.class)
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}

pub fn resolve_button(
    spec: Option<&FooterButton>,
    global: Option<&str>,
    theme: ButtonTheme,
    class: &str,
) -> Option<ResolvedButton> {
    let plain = |content: String| ResolvedButton {
        content,
        theme,
        class: class.to_string(),
        disabled: false,
        on_click: None,
    };
    match spec {
        None | Some(FooterButton::Show(true)) => non_empty(global).map(plain),
        Some(FooterButton::Show(false)) => None,
        Some(FooterButton::Label(label)) => non_empty(Some(label.as_str())).map(plain),
        Some(FooterButton::Options(options)) => {
            let content = non_empty(options.content.as_deref())
                .or_else(|| non_empty(global))
                .unwrap_or_default();
            let class = match &options.class {
                Some(extra) => format!("{class} {extra}"),
                None => class.to_string(),
            };
            Some(ResolvedButton {
                content,
                theme: options.theme.unwrap_or(theme),
                class,
                disabled: options.disabled,
                on_click: options.on_click,
            })
        }
    }
}

pub fn resolve_confirm_btn(
    spec: Option<&FooterButton>,
    global: Option<&str>,
    class: &str,
) -> Option<ResolvedButton> {
    resolve_button(spec, global, ButtonTheme::Primary, class)
}

pub fn resolve_cancel_btn(
    spec: Option<&FooterButton>,
    global: Option<&str>,
    class: &str,
) -> Option<ResolvedButton> {
    resolve_button(spec, global, ButtonTheme::Default, class)
}

/// Orders the resolved footer buttons, dropping the omitted ones.
pub fn arrange_footer(
    order: [FooterAction; 2],
    confirm: Option<ResolvedButton>,
    cancel: Option<ResolvedButton>,
) -> Vec<(FooterAction, ResolvedButton)> {
    order
        .into_iter()
        .filter_map(|action| {
            let button = match action {
                FooterAction::Confirm => confirm.clone(),
                FooterAction::Cancel => cancel.clone(),
            };
            button.map(|b| (action, b))
        })
        .collect()
}
