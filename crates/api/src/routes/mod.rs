pub mod functions;
pub mod health;
pub mod instagram_accounts;
pub mod projects;
pub mod session;
pub mod strategies;
pub mod studios;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /session                                         start session (POST)
/// /session/{pin}                                   current step (GET)
/// /session/{pin}/advance                           advance one step (POST)
///
/// /studios                                         upsert studio (POST, JSON)
/// /studios/logo                                    upsert studio + logo (POST, multipart)
/// /studios/by-pin/{pin}                            latest studio for PIN (GET)
///
/// /projects                                        upsert project (POST)
/// /projects/by-studio/{studio_id}                  latest project (GET, ?pin=)
/// /projects/{id}/files                             upload batch (POST, multipart), list (GET, ?phase=)
/// /projects/{id}/document                          upload document (POST, multipart)
///
/// /instagram-accounts                              upsert account snapshot (POST)
/// /instagram-accounts/{id}/competitors             upsert (POST), list (GET)
///
/// /strategies                                      upsert content strategy (POST)
/// /strategies/by-project/{project_id}              get (GET, ?pin=)
///
/// /functions/ai-strategy                           strategy document (POST)
/// /functions/analyze-instagram                     analysis report (POST)
/// /functions/instagram-api                         profile/posts/competitors (POST)
/// /functions/pinterest-api                         boards/pins (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/session", session::router())
        .nest("/studios", studios::router())
        .nest("/projects", projects::router())
        .nest("/instagram-accounts", instagram_accounts::router())
        .nest("/strategies", strategies::router())
        .nest("/functions", functions::router())
}
