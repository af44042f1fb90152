//! Static route table

/// Pages the site can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    AboutMe,
    Projects,
    Contact,
    AdminLogin,
    AdminDashboard,
}

/// One row of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
    /// Only reachable with a live admin token
    pub requires_auth: bool,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        name: "Home",
        page: Page::Home,
        requires_auth: false,
    },
    RouteEntry {
        path: "/about-me",
        name: "AboutMe",
        page: Page::AboutMe,
        requires_auth: false,
    },
    RouteEntry {
        path: "/projects",
        name: "Projects",
        page: Page::Projects,
        requires_auth: false,
    },
    RouteEntry {
        path: "/contact",
        name: "Contact",
        page: Page::Contact,
        requires_auth: false,
    },
    RouteEntry {
        path: "/admin-login",
        name: "AdminLogin",
        page: Page::AdminLogin,
        requires_auth: false,
    },
    RouteEntry {
        path: "/admin",
        name: "AdminDashboard",
        page: Page::AdminDashboard,
        requires_auth: true,
    },
];

impl Page {
    /// Table row for this page
    pub fn entry(self) -> &'static RouteEntry {
        match self {
            Self::Home => &ROUTES[0],
            Self::AboutMe => &ROUTES[1],
            Self::Projects => &ROUTES[2],
            Self::Contact => &ROUTES[3],
            Self::AdminLogin => &ROUTES[4],
            Self::AdminDashboard => &ROUTES[5],
        }
    }

    pub fn path(self) -> &'static str {
        self.entry().path
    }
}

/// Strip a single trailing slash from anything but the root path
pub fn normalize_path(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// Look up the route registered for `path`
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize_path(path);
    ROUTES.iter().find(|entry| entry.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_entries_match_table() {
        for entry in ROUTES {
            assert_eq!(entry.page.entry(), entry);
        }
    }

    #[test]
    fn test_only_dashboard_requires_auth() {
        let protected: Vec<_> = ROUTES.iter().filter(|e| e.requires_auth).collect();
        assert_eq!(protected.len(), 1);
        assert_eq!(protected[0].path, "/admin");
        assert_eq!(protected[0].page, Page::AdminDashboard);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("/").map(|e| e.page), Some(Page::Home));
        assert_eq!(resolve("/about-me").map(|e| e.page), Some(Page::AboutMe));
        assert_eq!(resolve("/projects/").map(|e| e.page), Some(Page::Projects));
        assert_eq!(resolve("/contact").map(|e| e.name), Some("Contact"));
        assert_eq!(
            resolve("/admin-login").map(|e| e.page),
            Some(Page::AdminLogin)
        );
        assert_eq!(resolve("/admin").map(|e| e.page), Some(Page::AdminDashboard));
        assert_eq!(resolve("/admin/settings"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/admin/"), "/admin");
        assert_eq!(normalize_path("/admin"), "/admin");
    }
}
