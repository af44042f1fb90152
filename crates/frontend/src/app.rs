use crate::components::Layout;
use crate::config::{self, ConfigContext};
use crate::pages::{
    AboutMe, AdminDashboard, AdminLogin, Contact, Home, NotFound, Projects,
};
use crate::storage::BrowserStorage;
use folio_core::{Decision, NavigationGuard, Page, SiteConfig, SystemClock};
use tracing::warn;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum AppRoute {
    #[at("/")]
    Home,
    #[at("/about-me")]
    AboutMe,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[at("/admin-login")]
    AdminLogin,
    #[at("/admin")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl AppRoute {
    pub const fn page(&self) -> Option<Page> {
        match self {
            Self::Home => Some(Page::Home),
            Self::AboutMe => Some(Page::AboutMe),
            Self::Projects => Some(Page::Projects),
            Self::Contact => Some(Page::Contact),
            Self::AdminLogin => Some(Page::AdminLogin),
            Self::AdminDashboard => Some(Page::AdminDashboard),
            Self::NotFound => None,
        }
    }

    pub const fn from_page(page: Page) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::AboutMe => Self::AboutMe,
            Page::Projects => Self::Projects,
            Page::Contact => Self::Contact,
            Page::AdminLogin => Self::AdminLogin,
            Page::AdminDashboard => Self::AdminDashboard,
        }
    }

    /// Route registered at `path`, falling back to the not-found page
    pub fn from_path(path: &str) -> Self {
        folio_core::resolve(path).map_or(Self::NotFound, |entry| Self::from_page(entry.page))
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let site_config: ConfigContext = use_memo((), |_| config::load());

    let render = {
        let site_config = site_config.clone();
        move |route: AppRoute| switch(&route, &site_config)
    };

    html! {
        <ContextProvider<ConfigContext> context={site_config}>
            <BrowserRouter>
                <Layout>
                    <Switch<AppRoute> render={render} />
                </Layout>
            </BrowserRouter>
        </ContextProvider<ConfigContext>>
    }
}

/// Run the navigation guard, then render the page or the redirect it asks for
fn switch(route: &AppRoute, site_config: &SiteConfig) -> Html {
    let Some(page) = route.page() else {
        return html! { <NotFound /> };
    };

    let guard = NavigationGuard::new(BrowserStorage, SystemClock, site_config);
    match guard.evaluate(page.entry()) {
        Decision::Proceed => render_page(page),
        Decision::Redirect(path) => {
            let to = AppRoute::from_path(&path);
            if to == AppRoute::NotFound {
                warn!(%path, "Guard redirected to an unknown route");
            }
            html! { <Redirect<AppRoute> {to} /> }
        }
    }
}

fn render_page(page: Page) -> Html {
    match page {
        Page::Home => html! { <Home /> },
        Page::AboutMe => html! { <AboutMe /> },
        Page::Projects => html! { <Projects /> },
        Page::Contact => html! { <Contact /> },
        Page::AdminLogin => html! { <AdminLogin /> },
        Page::AdminDashboard => html! { <AdminDashboard /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ROUTES;

    #[test]
    fn test_router_paths_match_route_table() {
        for entry in ROUTES {
            let route = AppRoute::from_page(entry.page);
            assert_eq!(route.to_path(), entry.path);
            assert_eq!(route.page(), Some(entry.page));
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::AdminDashboard);
        assert_eq!(AppRoute::from_path("/admin-login/"), AppRoute::AdminLogin);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::NotFound.page(), None);
    }
}
