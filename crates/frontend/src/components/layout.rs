//! Page chrome: header navigation and footer

use super::{Icon, IconKind};
use crate::app::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

const SITE_NAME: &str = "Folio";

/// `AboutMe` -> `About Me`
fn humanize(name: &str) -> String {
    let mut title = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            title.push(' ');
        }
        title.push(c);
    }
    title
}

/// Browser tab title for `route`
fn document_title(route: Option<&AppRoute>) -> String {
    route.and_then(AppRoute::page).map_or_else(
        || format!("Not found | {SITE_NAME}"),
        |page| format!("{} | {SITE_NAME}", humanize(page.entry().name)),
    )
}

const NAV_ITEMS: &[(AppRoute, &str, IconKind)] = &[
    (AppRoute::Home, "Home", IconKind::Home),
    (AppRoute::AboutMe, "About me", IconKind::User),
    (AppRoute::Projects, "Projects", IconKind::Briefcase),
    (AppRoute::Contact, "Contact", IconKind::Mail),
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current = use_route::<AppRoute>();

    use_effect_with(current.clone(), |route| {
        gloo::utils::document().set_title(&document_title(route.as_ref()));
    });

    let nav_link = |(route, label, icon): &(AppRoute, &str, IconKind)| {
        let class = if current.as_ref() == Some(route) {
            "text-blue-600 border-b-2 border-blue-600"
        } else {
            "text-gray-600 hover:text-gray-900"
        };
        html! {
            <Link<AppRoute> to={route.clone()} classes={classes!("px-4", "py-3", "text-sm", "font-medium", "flex", "items-center", "gap-2", class)}>
                <Icon kind={*icon} />
                {*label}
            </Link<AppRoute>>
        }
    };

    html! {
        <div class="min-h-screen flex flex-col">
            <header class="bg-white border-b border-gray-200">
                <nav class="max-w-5xl mx-auto flex items-center justify-between px-4">
                    <div class="flex">
                        { for NAV_ITEMS.iter().map(nav_link) }
                    </div>
                    <Link<AppRoute> to={AppRoute::AdminDashboard} classes="text-gray-400 hover:text-gray-700 p-2">
                        <Icon kind={IconKind::Lock} />
                    </Link<AppRoute>>
                </nav>
            </header>
            <main class="flex-1 max-w-5xl w-full mx-auto px-4 py-10">
                { props.children.clone() }
            </main>
            <footer class="text-center text-xs text-gray-400 py-6">
                {"Built with Rust and Yew"}
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(document_title(Some(&AppRoute::Home)), "Home | Folio");
        assert_eq!(document_title(Some(&AppRoute::AboutMe)), "About Me | Folio");
        assert_eq!(
            document_title(Some(&AppRoute::AdminDashboard)),
            "Admin Dashboard | Folio"
        );
        assert_eq!(document_title(Some(&AppRoute::NotFound)), "Not found | Folio");
        assert_eq!(document_title(None), "Not found | Folio");
    }
}
