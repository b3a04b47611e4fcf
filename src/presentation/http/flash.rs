// src/presentation/http/flash.rs
//! One-shot flash messages carried across a redirect in a short-lived cookie.
use axum::{
    extract::FromRequestParts,
    http::{header::SET_COOKIE, request::Parts},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use cookie::{Cookie, SameSite, time::Duration};
use headers::HeaderMapExt;
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "board.flash";
const FLASH_MAX_AGE_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMessage {
    RegSuccess,
    ModSuccess,
    DelSuccess,
}

impl FlashMessage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RegSuccess => "regSuccess",
            Self::ModSuccess => "modSuccess",
            Self::DelSuccess => "delSuccess",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "regSuccess" => Some(Self::RegSuccess),
            "modSuccess" => Some(Self::ModSuccess),
            "delSuccess" => Some(Self::DelSuccess),
            _ => None,
        }
    }

    pub const fn notice(self) -> &'static str {
        match self {
            Self::RegSuccess => "The article was registered.",
            Self::ModSuccess => "The article was modified.",
            Self::DelSuccess => "The article was deleted.",
        }
    }

    fn cookie(self) -> Cookie<'static> {
        Cookie::build((FLASH_COOKIE, self.as_str()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(FLASH_MAX_AGE_SECS))
            .build()
    }
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}

/// Flash message sent by the previous response, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomingFlash(pub Option<FlashMessage>);

impl IncomingFlash {
    pub fn msg(&self) -> &'static str {
        self.0.map_or("", FlashMessage::as_str)
    }

    pub fn notice(&self) -> &'static str {
        self.0.map_or("", FlashMessage::notice)
    }

    /// Clears the flash cookie on `response` when a message was shown.
    pub fn consume(&self, response: impl IntoResponse) -> Response {
        if self.0.is_none() {
            return response.into_response();
        }
        (
            AppendHeaders([(SET_COOKIE, removal_cookie().to_string())]),
            response,
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let message = parts
            .headers
            .typed_get::<headers::Cookie>()
            .and_then(|cookies| cookies.get(FLASH_COOKIE).and_then(FlashMessage::parse));
        Ok(Self(message))
    }
}

/// `303 See Other` that leaves a flash message for the next page.
#[derive(Debug)]
pub struct FlashRedirect {
    location: &'static str,
    message: FlashMessage,
}

impl FlashRedirect {
    pub const fn to(location: &'static str, message: FlashMessage) -> Self {
        Self { location, message }
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        (
            AppendHeaders([(SET_COOKIE, self.message.cookie().to_string())]),
            Redirect::to(self.location),
        )
            .into_response()
    }
}
