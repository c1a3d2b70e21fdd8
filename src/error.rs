use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A page was requested without a valid session.
    #[error("login required")]
    LoginRequired,
    /// An API call was made without a valid session.
    #[error("unauthorized")]
    Unauthorized,
    #[error("missing permission {0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::LoginRequired => StatusCode::SEE_OTHER,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Template(_) | Self::Token(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::LoginRequired => Redirect::to("/login").into_response(),
            Self::Unauthorized | Self::BadRequest(_) => {
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
            Self::Forbidden(_) | Self::NotFound(_) => {
                log::debug!("{}", self);
                (status, Html(format!("<h1>{}</h1><p>{}</p>", status, self))).into_response()
            }
            Self::Template(_) | Self::Token(_) | Self::PasswordHash(_) => {
                log::error!("{}", self);
                (status, Html("<h1>Something went wrong</h1>".to_string())).into_response()
            }
        }
    }
}
