//! Content projection for the drawer's named regions.

use dioxus::prelude::*;

/// Content of a named region (header, body, footer or close button).
#[derive(Clone, PartialEq, Default)]
pub enum Region {
    /// The region and its wrapper are not rendered.
    Hidden,
    /// The region renders the content its owner supplies as default.
    #[default]
    Default,
    Text(String),
    Custom(Element),
}

impl Region {
    pub fn is_shown(&self) -> bool {
        !matches!(self, Region::Hidden)
    }

    /// Resolves the region, calling `default` only for [`Region::Default`].
    pub fn project(&self, default: impl FnOnce() -> Element) -> Element {
        match self {
            Region::Hidden => rsx! {},
            Region::Default => default(),
            Region::Text(text) => rsx! { "{text}" },
            Region::Custom(el) => el.clone(),
        }
    }
}

impl From<bool> for Region {
    fn from(shown: bool) -> Self {
        if shown { Region::Default } else { Region::Hidden }
    }
}

impl From<&str> for Region {
    fn from(text: &str) -> Self {
        Region::Text(text.to_string())
    }
}

impl From<String> for Region {
    fn from(text: String) -> Self {
        Region::Text(text)
    }
}

impl From<Element> for Region {
    fn from(el: Element) -> Self {
        Region::Custom(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_toggle_the_default() {
        assert!(Region::from(true) == Region::Default);
        assert!(Region::from(false) == Region::Hidden);
        assert!(!Region::Hidden.is_shown());
        assert!(Region::from("Title").is_shown());
    }

    #[test]
    fn default_is_only_built_when_needed() {
        let mut calls = 0;
        let _ = Region::Text("x".into()).project(|| {
            calls += 1;
            rsx! {}
        });
        let _ = Region::Hidden.project(|| {
            calls += 1;
            rsx! {}
        });
        assert_eq!(calls, 0);

        let _ = Region::Default.project(|| {
            calls += 1;
            rsx! {}
        });
        assert_eq!(calls, 1);
    }
}
