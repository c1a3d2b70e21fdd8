use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use askama::Template;
use serde::Deserialize;
use tower_cookies::{Cookie, Cookies};

use super::{notifications::READ_COOKIE, render};
use crate::{
    error::AppError,
    middleware::{get_current_user, AUTH_COOKIE},
    state::AppState,
    utils::create_token,
};

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: String,
    email: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}

pub async fn login_page(cookies: Cookies, State(state): State<AppState>) -> Result<Response, AppError> {
    if get_current_user(cookies, &state).is_some() {
        return Ok(Redirect::to("/dashboard").into_response());
    }

    let template = LoginTemplate {
        error: String::new(),
        email: String::new(),
    };
    Ok(render(&template)?.into_response())
}

pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    // Stand-in for the round trip to an identity provider.
    tokio::time::sleep(state.config.login_delay).await;

    let user = match state.users.authenticate(&form.email, &form.password)? {
        Some(user) => user,
        None => {
            log::warn!("failed login for {}", form.email.trim());
            let template = LoginTemplate {
                error: "Invalid email or password".to_string(),
                email: form.email,
            };
            return Ok((StatusCode::UNAUTHORIZED, render(&template)?).into_response());
        }
    };

    let token = create_token(&user, &state.config.jwt_secret, state.config.session_hours)?;

    let cookie = Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::hours(state.config.session_hours))
        .build();
    cookies.add(cookie);

    log::info!("{} signed in as {}", user.email, user.role.as_str());
    Ok(Redirect::to("/dashboard").into_response())
}

pub async fn logout(cookies: Cookies) -> impl IntoResponse {
    for name in [AUTH_COOKIE, READ_COOKIE] {
        cookies.remove(Cookie::build(name).path("/").build());
    }
    Redirect::to("/login")
}
