/**
 * Landing Page
 *
 * `GET /` sends signed-in visitors straight to `/dashboard` and everyone
 * else to a static page with Sign Up and Login links. The token is read
 * the same way as on protected API routes; an invalid token counts as
 * signed out.
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::backend::middleware::authenticate_headers;
use crate::shared::AppConfig;

/// Where authenticated visitors are sent
pub const DASHBOARD_PATH: &str = "/dashboard";

const LANDING_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>UCSB CONNECT</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <section class="landing">
    <div class="dark-overlay">
      <div class="landing-inner">
        <h1 class="x-large">UCSB CONNECT</h1>
        <p class="lead">Network with other students, find your community</p>
        <div class="buttons">
          <a href="/register" class="btn btn-primary">Sign Up</a>
          <a href="/login" class="btn btn-light">Login</a>
        </div>
      </div>
    </div>
  </section>
</body>
</html>
"#;

/// Landing page handler
pub async fn landing(State(config): State<Arc<AppConfig>>, headers: HeaderMap) -> Response {
    match authenticate_headers(&headers, &config) {
        Ok(user) => {
            tracing::debug!("Redirecting signed-in user {} to dashboard", user.user_id);
            Redirect::to(DASHBOARD_PATH).into_response()
        }
        Err(_) => Html(LANDING_HTML).into_response(),
    }
}
