//! Route table and navigation guard

pub mod guard;
mod guarded;

pub use guard::{before_each, GuardDecision};
pub use guarded::{switch, GuardedRoute};

use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Routable)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/products")]
    Products,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Every route, in table order
    pub const ALL: [Route; 5] = [
        Route::Root,
        Route::Login,
        Route::Dashboard,
        Route::Products,
        Route::NotFound,
    ];

    /// Route name, `None` for pure redirect records
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Route::Root => None,
            Route::Login => Some("login"),
            Route::Dashboard => Some("dashboard"),
            Route::Products => Some("products"),
            Route::NotFound => Some("not-found"),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Products)
    }

    /// Static redirect applied before any guard check
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Route::Root => Some(Route::Dashboard),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_table() {
        assert_eq!(Route::Root.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::Products.to_path(), "/products");
    }

    #[test]
    fn recognizes_paths() {
        assert_eq!(Route::recognize("/products"), Some(Route::Products));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }

    #[test]
    fn only_dashboard_and_products_are_protected() {
        let protected: Vec<_> = Route::ALL.iter().filter(|r| r.requires_auth()).collect();
        assert_eq!(protected, [&Route::Dashboard, &Route::Products]);
    }

    #[test]
    fn root_redirects_to_dashboard() {
        assert_eq!(Route::Root.redirect(), Some(Route::Dashboard));
        assert_eq!(Route::Root.name(), None);
        assert!(Route::ALL[1..].iter().all(|r| r.redirect().is_none()));
    }
}
