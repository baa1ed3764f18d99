//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the one `BrowserSession` for the page, mirrors its snapshot into a
//! reactive signal, starts credential validation, and mounts every route
//! behind `Guarded`.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::guard::{Guarded, Redirecting, use_car_route};
use crate::components::navbar::Navbar;
use crate::components::notice_tray::NoticeTray;
use crate::config::ClientConfig;
use crate::route::AppRoute;
use crate::pages::{
    admin_dashboard::AdminDashboardPage,
    auth_home::AuthHomePage,
    car_details::CarDetailsPage,
    car_form::{AddCarPage, EditCarPage},
    car_list::CarListPage,
    login::LoginPage,
    register::RegisterPage,
};
use crate::state::notice::NoticeState;
use crate::state::session::{BrowserSession, SessionState};
use crate::util::credentials::LocalStorageCredentials;
use crate::util::navigation::hard_redirect;

/// Root application component.
///
/// Provides config, session and notice contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let session = BrowserSession::new(LocalStorageCredentials::new(config.storage_key.clone()), hard_redirect);
    let session_state = RwSignal::new(session.state());
    let notices = RwSignal::new(NoticeState::with_timeout(config.notice_timeout_ms));

    session.subscribe(move |state: SessionState| session_state.set(state));

    provide_context(config.clone());
    provide_context(session.clone());
    provide_context(session_state);
    provide_context(notices);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let state = session
            .initialize(move |token| async move { crate::net::api::fetch_current_user(&config, &token).await })
            .await;
        log::debug!("session initialized: {state:?}");
    });
    #[cfg(not(feature = "csr"))]
    let _ = (config, session);

    view! {
        <Stylesheet id="leptos" href="/pkg/car-inventory-client.css"/>
        <Title text="Car Management System"/>

        <Router>
            <div class="app">
                <Navbar/>
                <NoticeTray/>
                <main class="app__main">
                    <Routes fallback=|| view! { <Guarded route=AppRoute::NotFound><Redirecting/></Guarded> }>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <Guarded route=AppRoute::Root><Redirecting/></Guarded> }
                        />
                        <Route
                            path=StaticSegment("auth")
                            view=|| view! { <Guarded route=AppRoute::AuthHome><AuthHomePage/></Guarded> }
                        />
                        <Route
                            path=StaticSegment("login")
                            view=|| view! { <Guarded route=AppRoute::Login><LoginPage/></Guarded> }
                        />
                        <Route
                            path=StaticSegment("register")
                            view=|| view! { <Guarded route=AppRoute::Register><RegisterPage/></Guarded> }
                        />
                        <Route
                            path=StaticSegment("admin")
                            view=|| view! { <Guarded route=AppRoute::AdminDashboard><AdminDashboardPage/></Guarded> }
                        />
                        <Route
                            path=StaticSegment("cars")
                            view=|| view! { <Guarded route=AppRoute::CarList><CarListPage/></Guarded> }
                        />
                        <Route
                            path=(StaticSegment("cars"), StaticSegment("add"))
                            view=|| view! { <Guarded route=AppRoute::AddCar><AddCarPage/></Guarded> }
                        />
                        <Route
                            path=(StaticSegment("cars"), StaticSegment("edit"), ParamSegment("id"))
                            view=|| {
                                view! {
                                    <Guarded route=use_car_route(AppRoute::EditCar)>
                                        <EditCarPage/>
                                    </Guarded>
                                }
                            }
                        />
                        <Route
                            path=(StaticSegment("cars"), ParamSegment("id"))
                            view=|| {
                                view! {
                                    <Guarded route=use_car_route(AppRoute::CarDetails)>
                                        <CarDetailsPage/>
                                    </Guarded>
                                }
                            }
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
