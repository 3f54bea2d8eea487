//! post-board/crates/pb-api/src/middleware.rs Middleware
//!
//! Logging and CORS wrappers applied by the binary.

use actix_cors::Cors;
use actix_web::middleware::Logger;

// Returns the access logger for the Post-Board API.
pub fn standard_middleware() -> Logger {
    // We use the 'default' logger which outputs:
    // remote-ip "request-line" status-code response-size "referrer" "user-agent"
    Logger::default()
}

// Configures CORS (Cross-Origin Resource Sharing) for browser clients
// served from another origin.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
        .allow_any_header()
        .max_age(3600)
}
