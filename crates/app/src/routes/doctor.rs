use dioxus::prelude::*;
use shared_types::UserRole;

use super::role_dashboard::{RoleDashboard, DOCTOR_FEATURES};

#[component]
pub fn DoctorDashboard() -> Element {
    rsx! {
        RoleDashboard { role: UserRole::Doctor, features: DOCTOR_FEATURES.to_vec() }
    }
}
