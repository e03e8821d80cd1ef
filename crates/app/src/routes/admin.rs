use dioxus::prelude::*;
use shared_types::UserRole;

use super::role_dashboard::{RoleDashboard, ADMIN_FEATURES};

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RoleDashboard { role: UserRole::Admin, features: ADMIN_FEATURES.to_vec() }
    }
}
