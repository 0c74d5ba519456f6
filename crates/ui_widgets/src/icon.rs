//! Centralized icon catalog.
//!
//! Widgets render glyphs through [`Icon`] with a semantic [`IconName`] instead of embedding raw
//! SVG snippets. Paths follow the Fluent UI System Icons regular 24px set.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by the widgets.
pub enum IconName {
    /// Expand/open chevron.
    ChevronDown,
    /// Forward chevron.
    ChevronRight,
    /// Dismiss/close.
    Dismiss,
    /// Checkmark.
    Checkmark,
    /// Add/plus, used by the speed dial trigger.
    Plus,
    /// Opening quotation mark.
    Quote,
    /// Information circle.
    Info,
    /// Warning triangle, used by field errors.
    Warning,
    /// Circular arrows, spun while a step is loading.
    ArrowSync,
    /// Share.
    Share,
    /// Printer.
    Print,
    /// Copy.
    Copy,
    /// Envelope.
    Mail,
    /// Star.
    Star,
    /// Magnifier.
    Search,
    /// Person silhouette.
    Person,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::ChevronRight => "chevron-right",
            Self::Dismiss => "dismiss",
            Self::Checkmark => "checkmark",
            Self::Plus => "plus",
            Self::Quote => "quote",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::ArrowSync => "arrow-sync",
            Self::Share => "share",
            Self::Print => "print",
            Self::Copy => "copy",
            Self::Mail => "mail",
            Self::Star => "star",
            Self::Search => "search",
            Self::Person => "person",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::ChevronDown => {
                r#"<path d="M4.22 8.47c.3-.3.77-.3 1.06 0L12 15.19l6.72-6.72a.75.75 0 1 1 1.06 1.06l-7.25 7.25c-.3.3-.77.3-1.06 0L4.22 9.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22c-.3.3-.3.77 0 1.06L15.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25c.3-.3.3-.77 0-1.06L9.53 4.22a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::Plus => {
                r#"<path d="M11.75 3a.75.75 0 0 1 .74.65l.01.1v7.5h7.5a.75.75 0 0 1 .1 1.5h-7.6v7.5a.75.75 0 0 1-1.5.1v-7.6H3.76a.75.75 0 0 1-.1-1.5H11V3.75a.75.75 0 0 1 .75-.75Z"/>"#
            }
            Self::Quote => {
                r#"<path d="M4 17.25A2.75 2.75 0 0 0 6.75 20h1.5A2.75 2.75 0 0 0 11 17.25v-3.5A2.75 2.75 0 0 0 8.25 11H5.6c.3-2.16 1.7-3.72 3.95-4.5a.75.75 0 1 0-.5-1.42C5.92 6.2 4 8.74 4 12.5v4.75Zm9 0A2.75 2.75 0 0 0 15.75 20h1.5A2.75 2.75 0 0 0 20 17.25v-3.5A2.75 2.75 0 0 0 17.25 11H14.6c.3-2.16 1.7-3.72 3.95-4.5a.75.75 0 0 0-.5-1.42C14.92 6.2 13 8.74 13 12.5v4.75Z"/>"#
            }
            Self::Info => {
                r#"<path d="M12 1.5a10.5 10.5 0 1 1 0 21 10.5 10.5 0 0 1 0-21ZM12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18Zm0 7.25a.75.75 0 0 1 .74.65l.01.1v6.5a.75.75 0 0 1-1.5.1V11a.75.75 0 0 1 .75-.75Zm0-3.5a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
            }
            Self::Warning => {
                r#"<path d="M10.91 2.78a2.25 2.25 0 0 1 3.18.9l7.5 13.5A2.25 2.25 0 0 1 19.62 20.5H4.38a2.25 2.25 0 0 1-1.97-3.33l7.5-13.5c.21-.37.52-.68.9-.89Zm1.87 1.62a.75.75 0 0 0-1.31 0l-7.5 13.5a.75.75 0 0 0 .66 1.1h15.24a.75.75 0 0 0 .66-1.1l-7.75-13.5ZM12 15.5a1 1 0 1 1 0 2 1 1 0 0 1 0-2Zm0-7a.75.75 0 0 1 .74.65l.01.1v4.5a.75.75 0 0 1-1.5.1v-4.6A.75.75 0 0 1 12 8.5Z"/>"#
            }
            Self::ArrowSync => {
                r#"<path d="M16.06 2.22a.75.75 0 0 0-1.06 1.06L16.2 4.5H12a8 8 0 0 0-4.62 14.53.75.75 0 1 0 .87-1.22A6.5 6.5 0 0 1 12 6h4.2L15 7.22a.75.75 0 1 0 1.06 1.06l2.5-2.5c.3-.3.3-.77 0-1.06l-2.5-2.5Zm.57 2.75a.75.75 0 0 0 0 0ZM16.62 5a.75.75 0 0 0-.87 1.22A6.5 6.5 0 0 1 12 18H7.8L9 16.78a.75.75 0 1 0-1.06-1.06l-2.5 2.5c-.3.3-.3.77 0 1.06l2.5 2.5A.75.75 0 0 0 9 20.72L7.8 19.5H12a8 8 0 0 0 4.62-14.53Z"/>"#
            }
            Self::Share => {
                r#"<path d="M6.75 4.5A2.25 2.25 0 0 0 4.5 6.75v10.5c0 1.24 1 2.25 2.25 2.25h10.5c1.24 0 2.25-1 2.25-2.25v-.5a.75.75 0 0 1 1.5 0v.5A3.75 3.75 0 0 1 17.25 21H6.75A3.75 3.75 0 0 1 3 17.25V6.75A3.75 3.75 0 0 1 6.75 3h3a.75.75 0 0 1 0 1.5h-3Zm6.5-.75c0-.41.34-.75.75-.75h6.25c.41 0 .75.34.75.75V10a.75.75 0 0 1-1.5 0V5.56l-6.22 6.22a.75.75 0 1 1-1.06-1.06l6.22-6.22H14a.75.75 0 0 1-.75-.75Z"/>"#
            }
            Self::Print => {
                r#"<path d="M15.75 3C16.99 3 18 4 18 5.25V6h.75A3.25 3.25 0 0 1 22 9.25v6.5c0 .97-.78 1.75-1.75 1.75H18v1.25C18 19.99 17 21 15.75 21h-7.5C7.01 21 6 20 6 18.75V17.5H3.75C2.78 17.5 2 16.72 2 15.75v-6.5A3.25 3.25 0 0 1 5.25 6H6v-.75C6 4.01 7 3 8.25 3h7.5Zm0 10.5h-7.5a.75.75 0 0 0-.75.75v4.5c0 .41.34.75.75.75h7.5c.41 0 .75-.34.75-.75v-4.5a.75.75 0 0 0-.75-.75Zm3-6H5.25c-.97 0-1.75.78-1.75 1.75v6.5c0 .14.11.25.25.25H6v-1.75C6 13.01 7 12 8.25 12h7.5c1.24 0 2.25 1 2.25 2.25V16h2.25c.14 0 .25-.11.25-.25v-6.5c0-.97-.78-1.75-1.75-1.75Zm-3-3h-7.5a.75.75 0 0 0-.75.75V6h9v-.75a.75.75 0 0 0-.75-.75Z"/>"#
            }
            Self::Copy => {
                r#"<path d="M5.5 4.63V17.25c0 1.8 1.46 3.25 3.25 3.25h8.62c-.31.88-1.15 1.5-2.13 1.5h-6.5A4.75 4.75 0 0 1 4 17.25v-10.5c0-.98.63-1.81 1.5-2.12ZM17.75 2C18.99 2 20 3 20 4.25v13c0 1.24-1 2.25-2.25 2.25h-9c-1.24 0-2.25-1-2.25-2.25v-13C6.5 3.01 7.5 2 8.75 2h9Zm0 1.5h-9a.75.75 0 0 0-.75.75v13c0 .41.34.75.75.75h9c.41 0 .75-.34.75-.75v-13a.75.75 0 0 0-.75-.75Z"/>"#
            }
            Self::Mail => {
                r#"<path d="M5.25 4h13.5a3.25 3.25 0 0 1 3.24 3.06l.01.19v9.5a3.25 3.25 0 0 1-3.06 3.24l-.19.01H5.25a3.25 3.25 0 0 1-3.24-3.06L2 16.75v-9.5a3.25 3.25 0 0 1 3.06-3.24L5.25 4h13.5-13.5ZM20.5 9.37l-8.15 4.3a.75.75 0 0 1-.6.04l-.1-.05L3.5 9.37v7.38c0 .92.7 1.67 1.6 1.74l.15.01h13.5c.92 0 1.67-.7 1.74-1.6l.01-.15V9.37ZM18.75 5.5H5.25c-.92 0-1.67.7-1.74 1.6l-.01.15v.43l8.5 4.5 8.5-4.5v-.43c0-.92-.7-1.67-1.6-1.74l-.15-.01Z"/>"#
            }
            Self::Star => {
                r#"<path d="M10.79 3.1c.5-1 1.92-1 2.42 0l2.36 4.78 5.27.77c1.1.16 1.55 1.52.75 2.3l-3.82 3.72.9 5.25a1.35 1.35 0 0 1-1.96 1.42L12 18.86l-4.71 2.48a1.35 1.35 0 0 1-1.96-1.42l.9-5.25-3.81-3.72c-.8-.78-.36-2.14.75-2.3l5.27-.77 2.35-4.78Zm1.21.94L9.74 8.6c-.2.4-.58.68-1.02.74l-5.05.74 3.66 3.56c.32.3.46.76.39 1.2l-.87 5.02 4.52-2.37c.4-.2.86-.2 1.26 0l4.51 2.37-.86-5.03c-.07-.43.07-.88.39-1.2l3.65-3.55-5.05-.74a1.35 1.35 0 0 1-1.01-.74L12 4.04Z"/>"#
            }
            Self::Search => {
                r#"<path d="M10 2.75a7.25 7.25 0 0 1 5.63 11.82l4.9 4.9a.75.75 0 0 1-.98 1.13l-.08-.07-4.9-4.9A7.25 7.25 0 1 1 10 2.75Zm0 1.5a5.75 5.75 0 1 0 0 11.5 5.75 5.75 0 0 0 0-11.5Z"/>"#
            }
            Self::Person => {
                r#"<path d="M17.75 14C19 14 20 15 20 16.25v.57c0 .9-.32 1.76-.9 2.44C17.53 21.1 15.15 22 12 22c-3.15 0-5.53-.9-7.1-2.74a3.75 3.75 0 0 1-.9-2.43v-.58C4 15.01 5.01 14 6.25 14h11.5Zm0 1.5H6.25a.75.75 0 0 0-.75.75v.58c0 .53.2 1.05.54 1.46C7.3 19.76 9.26 20.5 12 20.5c2.74 0 4.7-.74 5.96-2.21.35-.41.54-.93.54-1.47v-.57a.75.75 0 0 0-.75-.75ZM12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (badges, dismiss controls).
    Xs,
    /// 16px standard icon.
    #[default]
    Sm,
    /// 20px medium icon.
    Md,
    /// 24px large icon.
    Lg,
    /// 32px display icon (quote marks).
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 32,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an inline SVG from the centralized icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Extra classes, typically state-driven rotation or animation utilities.
    #[prop(optional, into)]
    state_class: MaybeSignal<String>,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class=move || {
                let state_class = state_class.get();
                if state_class.is_empty() {
                    "ui-icon shrink-0".to_string()
                } else {
                    format!("ui-icon shrink-0 {state_class}")
                }
            }
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_a_path_body() {
        let icons = [
            IconName::ChevronDown,
            IconName::ChevronRight,
            IconName::Dismiss,
            IconName::Checkmark,
            IconName::Plus,
            IconName::Quote,
            IconName::Info,
            IconName::Warning,
            IconName::ArrowSync,
            IconName::Share,
            IconName::Print,
            IconName::Copy,
            IconName::Mail,
            IconName::Star,
            IconName::Search,
            IconName::Person,
        ];
        for icon in icons {
            assert!(icon.svg_body().starts_with("<path d=\""), "{}", icon.token());
            assert!(icon.svg_body().ends_with("\"/>"), "{}", icon.token());
        }
    }

    #[test]
    fn sizes_are_ordered() {
        assert!(IconSize::Xs.px() < IconSize::Sm.px());
        assert!(IconSize::Lg.px() < IconSize::Xl.px());
        assert_eq!(IconSize::default(), IconSize::Sm);
    }
}
