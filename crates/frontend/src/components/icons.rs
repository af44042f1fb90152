//! Icon set
//!
//! Every icon the site uses is registered here once and referenced by
//! [`IconKind`], so pages never embed raw SVG paths.

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Home,
    User,
    Briefcase,
    Mail,
    Lock,
    Logout,
    Clock,
}

impl IconKind {
    /// Outline path data on a 24x24 grid
    const fn path_data(self) -> &'static [&'static str] {
        match self {
            Self::Home => &["M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"],
            Self::User => &["M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"],
            Self::Briefcase => &["M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"],
            Self::Mail => &["M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"],
            Self::Lock => &["M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z"],
            Self::Logout => &["M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1"],
            Self::Clock => &["M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z"],
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or(classes!("w-4", "h-4"))]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} fill="none" stroke="currentColor" viewBox="0 0 24 24">
            { for props.kind.path_data().iter().map(|d| html! {
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*d}></path>
            }) }
        </svg>
    }
}
