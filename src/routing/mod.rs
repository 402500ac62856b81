//! Route Guard
//!
//! Decides what is actually rendered for a requested destination given the
//! current authentication status. Pure: no navigation happens here, the UI
//! router carries out the returned [`RouteDecision`].

use std::fmt;

use crate::session::AuthStatus;

/// Logical navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Login,
    Dashboard,
    Analytics,
    /// `/` and anything unmapped; never rendered directly
    Root,
}

impl Destination {
    /// Where authenticated users land by default
    pub const DEFAULT_AUTHENTICATED: Destination = Destination::Dashboard;

    /// Protected destinations shown in the navigation bar
    pub const NAVIGABLE: [Destination; 2] = [Destination::Dashboard, Destination::Analytics];

    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Dashboard => "/dashboard",
            Destination::Analytics => "/analytics",
            Destination::Root => "/",
        }
    }

    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/login" => Destination::Login,
            "/dashboard" => Destination::Dashboard,
            "/analytics" => Destination::Analytics,
            _ => Destination::Root,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Destination::Login => "Login",
            Destination::Dashboard => "Dashboard",
            Destination::Analytics => "Analytics",
            Destination::Root => "Home",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Destination::Dashboard | Destination::Analytics)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of a guard evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Storage has not been consulted yet; render nothing decisive
    Defer,
    /// Replace the current location with another destination
    Redirect(Destination),
    Render(Destination),
}

/// Evaluate the guard for `requested` under `status`
pub fn resolve(status: AuthStatus, requested: Destination) -> RouteDecision {
    match (status, requested) {
        (AuthStatus::Initializing, _) => RouteDecision::Defer,
        (AuthStatus::Authenticated, Destination::Root | Destination::Login) => {
            RouteDecision::Redirect(Destination::DEFAULT_AUTHENTICATED)
        }
        (AuthStatus::Unauthenticated, Destination::Root) => {
            RouteDecision::Redirect(Destination::Login)
        }
        (AuthStatus::Unauthenticated, dest) if dest.requires_auth() => {
            RouteDecision::Redirect(Destination::Login)
        }
        (_, dest) => RouteDecision::Render(dest),
    }
}

/// The navigation bar is only shown to signed-in users
pub fn show_navigation(status: AuthStatus) -> bool {
    status.is_authenticated()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Destination; 4] = [
        Destination::Login,
        Destination::Dashboard,
        Destination::Analytics,
        Destination::Root,
    ];

    #[test]
    fn test_initializing_defers_everything() {
        for dest in ALL {
            assert_eq!(resolve(AuthStatus::Initializing, dest), RouteDecision::Defer);
        }
    }

    #[test]
    fn test_protected_redirects_to_login() {
        for dest in [Destination::Dashboard, Destination::Analytics] {
            assert_eq!(
                resolve(AuthStatus::Unauthenticated, dest),
                RouteDecision::Redirect(Destination::Login)
            );
            assert_eq!(
                resolve(AuthStatus::Authenticated, dest),
                RouteDecision::Render(dest)
            );
        }
    }

    #[test]
    fn test_login_page() {
        assert_eq!(
            resolve(AuthStatus::Unauthenticated, Destination::Login),
            RouteDecision::Render(Destination::Login)
        );
        assert_eq!(
            resolve(AuthStatus::Authenticated, Destination::Login),
            RouteDecision::Redirect(Destination::Dashboard)
        );
    }

    #[test]
    fn test_root_always_redirects() {
        assert_eq!(
            resolve(AuthStatus::Authenticated, Destination::Root),
            RouteDecision::Redirect(Destination::Dashboard)
        );
        assert_eq!(
            resolve(AuthStatus::Unauthenticated, Destination::Root),
            RouteDecision::Redirect(Destination::Login)
        );
        for status in [AuthStatus::Authenticated, AuthStatus::Unauthenticated] {
            assert!(!matches!(
                resolve(status, Destination::Root),
                RouteDecision::Render(_)
            ));
        }
    }

    #[test]
    fn test_path_round_trip() {
        for dest in ALL {
            assert_eq!(Destination::from_path(dest.path()), dest);
        }
    }

    #[test]
    fn test_unmapped_paths_are_root() {
        assert_eq!(Destination::from_path("/settings"), Destination::Root);
        assert_eq!(Destination::from_path(""), Destination::Root);
        assert_eq!(Destination::from_path("/analytics/"), Destination::Analytics);
        assert_eq!(Destination::from_path("/login?next=/analytics"), Destination::Login);
    }

    #[test]
    fn test_navigation_visibility() {
        assert!(show_navigation(AuthStatus::Authenticated));
        assert!(!show_navigation(AuthStatus::Unauthenticated));
        assert!(!show_navigation(AuthStatus::Initializing));
    }
}
