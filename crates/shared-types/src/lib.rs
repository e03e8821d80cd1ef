//! Types shared by the HealthDesk server and UI.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Roles, the signed-in user, login/register and enquiry DTOs |
//! | [`session`] | Client-side authentication snapshot |
//! | [`access`] | Protected / public-only guard decisions |
//! | [`route_table`] | Path → access rules and the generic dispatcher |
//! | [`error`] | Structured error carried through server functions |
//! | [`config`], [`feature_flags`] | `config.toml` layout |

pub mod access;
pub mod config;
pub mod error;
pub mod feature_flags;
pub mod models;
pub mod route_table;
pub mod session;

pub use access::{GuardDecision, Redirect};
pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use route_table::{Access, RouteEntry, View};
pub use session::*;
