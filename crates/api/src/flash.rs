//! One-shot flash messages carried in a cookie.
//!
//! Handlers push message codes before redirecting; the list view takes them
//! and clears the cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

/// Cookie holding pending flash codes.
pub const FLASH_COOKIE: &str = "flash";

const SEPARATOR: char = '|';

/// A message shown once on the next page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// Record created.
    Inserted,
    /// Record updated.
    Updated,
    /// Record deleted.
    Deleted,
    /// Object store credentials missing or rejected.
    CredentialsUnavailable,
}

impl Flash {
    /// Cookie representation.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::CredentialsUnavailable => "credentials_unavailable",
        }
    }

    /// Parse a cookie code.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "inserted" => Some(Self::Inserted),
            "updated" => Some(Self::Updated),
            "deleted" => Some(Self::Deleted),
            "credentials_unavailable" => Some(Self::CredentialsUnavailable),
            _ => None,
        }
    }

    /// Text shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Inserted => "Data Inserted Successfully",
            Self::Updated => "Data Updated Successfully",
            Self::Deleted => "Data Deleted Successfully",
            Self::CredentialsUnavailable => "AWS credentials not available.",
        }
    }

    /// Display category.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::CredentialsUnavailable => "error",
            Self::Inserted | Self::Updated | Self::Deleted => "success",
        }
    }
}

/// Flash message as rendered in the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    /// `success` or `error`.
    pub category: &'static str,
    /// Message text.
    pub message: &'static str,
}

impl From<Flash> for FlashMessage {
    fn from(flash: Flash) -> Self {
        Self {
            category: flash.category(),
            message: flash.message(),
        }
    }
}

fn pending(jar: &CookieJar) -> Vec<Flash> {
    jar.get(FLASH_COOKIE)
        .map(|cookie| {
            cookie
                .value()
                .split(SEPARATOR)
                .filter_map(Flash::parse)
                .collect()
        })
        .unwrap_or_default()
}

/// Queue a flash message for the next page view.
#[must_use]
pub fn push(jar: CookieJar, flash: Flash) -> CookieJar {
    let mut codes: Vec<&str> = pending(&jar).into_iter().map(Flash::code).collect();
    codes.push(flash.code());

    let cookie = Cookie::build((FLASH_COOKIE, codes.join(&SEPARATOR.to_string())))
        .path("/")
        .http_only(true);
    jar.add(cookie)
}

/// Take all pending flash messages and clear the cookie.
#[must_use]
pub fn take(jar: CookieJar) -> (CookieJar, Vec<FlashMessage>) {
    let messages = pending(&jar).into_iter().map(FlashMessage::from).collect();
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, messages)
}
