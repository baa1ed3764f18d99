use super::*;
use crate::util::credentials::MemoryCredentials;
use crate::state::session::SessionStore;

const ALL_ROUTES: [AppRoute; 10] = [
    AppRoute::Root,
    AppRoute::AuthHome,
    AppRoute::Login,
    AppRoute::Register,
    AppRoute::AdminDashboard,
    AppRoute::CarList,
    AppRoute::CarDetails(1),
    AppRoute::AddCar,
    AppRoute::EditCar(1),
    AppRoute::NotFound,
];

fn redirect(to: &'static str) -> RouteDecision {
    RouteDecision::Redirect { to, notice: None }
}

fn admin_required() -> RouteDecision {
    RouteDecision::Redirect { to: "/cars", notice: Some("Admin access required") }
}

fn evaluate_at(path: &str, state: SessionState) -> RouteDecision {
    evaluate(AppRoute::parse(path), state)
}

fn session() -> SessionStore<MemoryCredentials> {
    SessionStore::new(MemoryCredentials::new(), |_: &str| {})
}

// =============================================================
// Loading dominates
// =============================================================

#[test]
fn loading_blocks_every_route() {
    for route in ALL_ROUTES {
        assert_eq!(evaluate(route, SessionState::starting()), RouteDecision::Loading);
    }
}

// =============================================================
// Signed out
// =============================================================

#[test]
fn signed_out_protected_routes_redirect_to_auth() {
    let state = SessionState::signed_out();
    for route in [
        AppRoute::AdminDashboard,
        AppRoute::CarList,
        AppRoute::CarDetails(3),
        AppRoute::AddCar,
        AppRoute::EditCar(3),
    ] {
        assert_eq!(evaluate(route, state), redirect("/auth"));
    }
}

#[test]
fn signed_out_guest_routes_render() {
    let state = SessionState::signed_out();
    for route in [AppRoute::AuthHome, AppRoute::Login, AppRoute::Register] {
        assert_eq!(evaluate(route, state), RouteDecision::Render);
    }
}

#[test]
fn signed_out_root_redirects_to_auth() {
    assert_eq!(evaluate(AppRoute::Root, SessionState::signed_out()), redirect("/auth"));
}

// =============================================================
// Regular user
// =============================================================

#[test]
fn regular_user_renders_car_views() {
    let state = SessionState::signed_in(false);
    assert_eq!(evaluate(AppRoute::CarList, state), RouteDecision::Render);
    assert_eq!(evaluate(AppRoute::CarDetails(2), state), RouteDecision::Render);
}

#[test]
fn regular_user_admin_routes_redirect_with_notice() {
    let state = SessionState::signed_in(false);
    for route in [AppRoute::AdminDashboard, AppRoute::AddCar, AppRoute::EditCar(2)] {
        assert_eq!(evaluate(route, state), admin_required());
    }
}

#[test]
fn regular_user_guest_routes_redirect_to_cars() {
    let state = SessionState::signed_in(false);
    for route in [AppRoute::Root, AppRoute::AuthHome, AppRoute::Login, AppRoute::Register] {
        assert_eq!(evaluate(route, state), redirect("/cars"));
    }
}

// =============================================================
// Admin
// =============================================================

#[test]
fn admin_renders_every_protected_route() {
    let state = SessionState::signed_in(true);
    for route in [
        AppRoute::AdminDashboard,
        AppRoute::CarList,
        AppRoute::CarDetails(2),
        AppRoute::AddCar,
        AppRoute::EditCar(2),
    ] {
        assert_eq!(evaluate(route, state), RouteDecision::Render);
    }
}

#[test]
fn admin_guest_routes_redirect_to_admin() {
    let state = SessionState::signed_in(true);
    for route in [AppRoute::Root, AppRoute::AuthHome, AppRoute::Login, AppRoute::Register] {
        assert_eq!(evaluate(route, state), redirect("/admin"));
    }
}

// =============================================================
// Misc
// =============================================================

#[test]
fn unknown_paths_redirect_to_root() {
    for state in [SessionState::signed_out(), SessionState::signed_in(false), SessionState::signed_in(true)] {
        assert_eq!(evaluate_at("/nowhere", state), redirect("/"));
        assert_eq!(evaluate_at("/cars/not-a-number", state), redirect("/"));
    }
}

#[test]
fn landing_path_follows_role() {
    assert_eq!(landing_path(SessionState::signed_out()), "/auth");
    assert_eq!(landing_path(SessionState::signed_in(false)), "/cars");
    assert_eq!(landing_path(SessionState::signed_in(true)), "/admin");
}

#[test]
fn evaluation_is_idempotent() {
    let states = [
        SessionState::starting(),
        SessionState::signed_out(),
        SessionState::signed_in(false),
        SessionState::signed_in(true),
    ];
    for state in states {
        for route in ALL_ROUTES {
            assert_eq!(evaluate(route, state), evaluate(route, state));
        }
    }
}

#[test]
fn redirect_targets_are_stable_under_reevaluation() {
    let states = [SessionState::signed_out(), SessionState::signed_in(false), SessionState::signed_in(true)];
    for state in states {
        for route in ALL_ROUTES {
            let mut decision = evaluate(route, state);
            let mut hops = 0;
            while let RouteDecision::Redirect { to, .. } = decision {
                decision = evaluate_at(to, state);
                hops += 1;
                assert!(hops <= 3, "redirect loop from {route:?}");
            }
            assert_eq!(decision, RouteDecision::Render);
        }
    }
}

// =============================================================
// Session-driven scenarios
// =============================================================

#[test]
fn admin_login_then_add_car_renders() {
    let store = session();
    store.login("t", true);
    assert_eq!(evaluate_at("/cars/add", store.state()), RouteDecision::Render);
}

#[test]
fn regular_login_then_admin_redirects_with_notice() {
    let store = session();
    store.login("t", false);
    assert_eq!(evaluate_at("/admin", store.state()), admin_required());
}

#[test]
fn logout_locks_every_protected_route() {
    let store = session();
    store.login("t", true);
    store.logout();
    for path in ["/admin", "/cars", "/cars/1", "/cars/add", "/cars/edit/1"] {
        assert_eq!(evaluate_at(path, store.state()), redirect("/auth"));
    }
}

#[test]
fn stored_token_for_regular_user_scenario() {
    let store = SessionStore::new(MemoryCredentials::with_token("abc"), |_: &str| {});
    let state = futures::executor::block_on(store.initialize(|token| async move {
        assert_eq!(token, "abc");
        Ok(crate::net::types::CurrentUser { id: 2, username: "sam".to_owned(), is_admin: false })
    }));
    assert_eq!(state, SessionState::signed_in(false));
    assert_eq!(evaluate_at("/admin", state), admin_required());
}

#[test]
fn admin_login_scenario_normalizes_login_route() {
    let store = session();
    let response = crate::net::types::LoginResponse { access_token: "t1".to_owned(), is_admin: true };
    store.login(&response.access_token, response.is_admin);
    assert_eq!(evaluate_at("/login", store.state()), redirect("/admin"));
}

// =============================================================
// Decisions are bound to the wrapped route
// =============================================================

#[test]
fn admin_dashboard_never_renders_for_non_admin_sessions() {
    for state in [SessionState::starting(), SessionState::signed_out(), SessionState::signed_in(false)] {
        assert_ne!(evaluate(AppRoute::AdminDashboard, state), RouteDecision::Render);
    }
}

#[test]
fn admin_redirect_target_does_not_unlock_the_admin_route() {
    let state = SessionState::signed_in(false);
    let RouteDecision::Redirect { to, .. } = evaluate(AppRoute::AdminDashboard, state) else {
        panic!("regular user must be redirected away from the dashboard");
    };
    assert_eq!(evaluate_at(to, state), RouteDecision::Render);
    assert_eq!(evaluate(AppRoute::AdminDashboard, state), admin_required());
}

#[test]
fn login_route_stays_redirecting_after_sign_in() {
    let store = session();
    store.login("t1", false);
    for _ in 0..2 {
        assert_eq!(evaluate(AppRoute::Login, store.state()), redirect("/cars"));
    }
}

#[test]
fn admin_only_routes_never_render_for_regular_users() {
    for route in ALL_ROUTES.into_iter().filter(|r| r.access() == Access::Admin) {
        assert_ne!(evaluate(route, SessionState::signed_in(false)), RouteDecision::Render);
        assert_ne!(evaluate(route, SessionState::signed_out()), RouteDecision::Render);
    }
}
