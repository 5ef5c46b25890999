//! Tests for the routing system
//!
//! Validates the route table paths, names and which routes the navigation
//! guard protects.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use shared::{GuardedRoute, LoginState, Navigation, NavigationGuard, RecordKind};
    use strum::IntoEnumIterator;
    use test_case::test_case;
    use yew_router::Routable;

    type Guard = NavigationGuard<crate::api::RmsClient>;

    fn customers() -> MainRoute {
        MainRoute::master_data(RecordKind::Customers)
    }

    /// Tests the path and name of every route
    #[test_case(MainRoute::Home, "/", "home" ; "home")]
    #[test_case(MainRoute::Login, "/login", "login" ; "login")]
    #[test_case(MainRoute::Requests, "/requests", "requests" ; "requests")]
    #[test_case(MainRoute::Stickers, "/stickers", "stickers" ; "stickers")]
    #[test_case(customers(), "/master-data/customers", "master-data" ; "master data")]
    #[test_case(MainRoute::About, "/about", "about" ; "about")]
    #[test_case(MainRoute::NotFound, "/404", "not-found" ; "not found")]
    fn test_route_paths(route: MainRoute, path: &str, name: &str) {
        assert_eq!(route.to_path(), path);
        assert_eq!(route.name(), name);
    }

    /// Tests that paths resolve back to their routes
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/requests"), Some(MainRoute::Requests));
        assert_eq!(
            MainRoute::recognize("/master-data/areas"),
            Some(MainRoute::MasterData {
                record_name: "areas".to_string()
            })
        );
        assert_eq!(MainRoute::not_found_route(), Some(MainRoute::NotFound));
    }

    /// Tests which routes need a signed-in user
    #[test_case(MainRoute::Home, true ; "home")]
    #[test_case(MainRoute::Login, false ; "login")]
    #[test_case(MainRoute::Requests, true ; "requests")]
    #[test_case(MainRoute::Stickers, true ; "stickers")]
    #[test_case(customers(), true ; "master data")]
    #[test_case(MainRoute::About, true ; "about")]
    #[test_case(MainRoute::NotFound, false ; "not found")]
    fn test_requires_auth(route: MainRoute, expected: bool) {
        assert_eq!(route.requires_auth(), expected);
    }

    /// Tests that protected routes redirect to login when signed out
    #[test]
    fn test_signed_out_redirects_to_login() {
        for route in MainRoute::iter() {
            let decision = Guard::decide(&route, LoginState::LoggedOut);
            if route.requires_auth() {
                assert_eq!(decision, Navigation::Redirect(MainRoute::Login), "{route:?}");
            } else {
                assert_eq!(decision, Navigation::Proceed, "{route:?}");
            }
        }
    }

    /// Tests that every route opens once signed in
    #[test]
    fn test_signed_in_proceeds() {
        for route in MainRoute::iter() {
            assert_eq!(Guard::decide(&route, LoginState::LoggedIn), Navigation::Proceed);
        }
    }

    /// Tests the header links and their labels
    #[test]
    fn test_header_routes() {
        let routes = MainRoute::header_routes();
        assert_eq!(routes.first(), Some(&MainRoute::Home));
        assert_eq!(routes.last(), Some(&MainRoute::About));
        assert!(!routes.contains(&MainRoute::Login));

        let titles: Vec<String> = routes.iter().map(MainRoute::title).collect();
        assert!(titles.contains(&"Sales Persons".to_string()));
        assert_eq!(
            MainRoute::MasterData {
                record_name: "invoices".to_string()
            }
            .title(),
            "invoices"
        );
    }
}
