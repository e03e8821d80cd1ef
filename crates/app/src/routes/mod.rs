pub mod admin;
pub mod dashboard;
pub mod doctor;
pub mod login;
pub mod not_found;
pub mod role_dashboard;
pub mod staff;
pub mod unauthorized;

use crate::auth::use_session;
use dioxus::prelude::*;
use shared_types::{route_table, GuardDecision, Redirect, UserRole, View};
use shared_ui::LoadingPlaceholder;

use admin::AdminDashboard;
use dashboard::Dashboard;
use doctor::DoctorDashboard;
use login::Login;
use not_found::NotFound;
use staff::StaffDashboard;
use unauthorized::Unauthorized;

/// Application routes.
///
/// Every route sits under [`RouteGate`], which consults the shared route
/// table before anything renders.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RouteGate)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/doctor/dashboard")]
        DoctorDashboard {},
        #[route("/staff/dashboard")]
        StaffDashboard {},
        #[route("/unauthorized")]
        Unauthorized {},
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

impl Route {
    /// The view this route renders, if any.
    pub fn view(&self) -> Option<View> {
        match self {
            Route::Login {} => Some(View::Login),
            Route::Dashboard {} => Some(View::Dashboard),
            Route::AdminDashboard {} => Some(View::AdminDashboard),
            Route::DoctorDashboard {} => Some(View::DoctorDashboard),
            Route::StaffDashboard {} => Some(View::StaffDashboard),
            Route::Unauthorized {} => Some(View::Unauthorized),
            Route::Root {} | Route::NotFound { .. } => None,
        }
    }

    /// A role's own dashboard, when it has one.
    pub fn home_for(role: UserRole) -> Option<Route> {
        match role {
            UserRole::Admin => Some(Route::AdminDashboard {}),
            UserRole::Doctor => Some(Route::DoctorDashboard {}),
            UserRole::Staff => Some(Route::StaffDashboard {}),
            UserRole::User => None,
        }
    }
}

impl From<Redirect> for Route {
    fn from(target: Redirect) -> Self {
        match target {
            Redirect::Login => Route::Login {},
            Redirect::Dashboard => Route::Dashboard {},
            Redirect::Unauthorized => Route::Unauthorized {},
        }
    }
}

/// Layout that evaluates the route table for the current path.
///
/// Redirects replace the current history entry so the back button never
/// returns to a page the visitor was bounced from.
#[component]
fn RouteGate() -> Element {
    let route: Route = use_route();
    let session = use_session().session();
    let path = route.to_string();

    match route_table::dispatch(&path, &session) {
        GuardDecision::ShowLoadingPlaceholder => rsx! { LoadingPlaceholder {} },
        GuardDecision::RedirectTo(target) => {
            tracing::debug!(from = %path, to = target.path(), "route guard redirect");
            navigator().replace(Route::from(target));
            rsx! { LoadingPlaceholder { label: "Redirecting..." } }
        }
        GuardDecision::RenderChildren => rsx! { Outlet::<Route> {} },
    }
}

/// `/` never renders; the gate always redirects it.
#[component]
fn Root() -> Element {
    rsx! {}
}
