use dioxus::prelude::*;
use shared_types::UserRole;

use super::role_dashboard::{RoleDashboard, STAFF_FEATURES};

#[component]
pub fn StaffDashboard() -> Element {
    rsx! {
        RoleDashboard { role: UserRole::Staff, features: STAFF_FEATURES.to_vec() }
    }
}
