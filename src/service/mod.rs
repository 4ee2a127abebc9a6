//! Automarker REST Service
//!
//! ## Endpoints
//!
//! - `POST /api/unlock` - Check the access code, set the session cookie
//! - `POST /api/mark` - Mark an answer (session required)
//! - `GET /api/config` - Question, template and links for the front end
//! - `GET /health` - Service health with rubric fingerprint
//! - `GET /health/live` - Liveness probe

pub mod middleware;
pub mod routes;
pub mod state;

pub use middleware::{metrics_middleware, record_mark, record_session_check, require_session};
pub use routes::{create_router, SESSION_COOKIE};
pub use state::ServiceState;
