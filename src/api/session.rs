use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue},
    response::Response,
};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "movie_catalog_session";

/// 浏览器会话，用 cookie 里的 UUID 标识
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    fresh: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fresh: true,
        }
    }

    pub fn existing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fresh: false,
        }
    }

    /// 是否为本次请求新建的会话
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// 新会话需要下发 cookie
    pub fn attach(&self, mut response: Response) -> Response {
        if !self.fresh {
            return response;
        }

        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.id);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("Failed to build session cookie: {}", e),
        }
        response
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Cookie 头中找出会话 ID
fn session_from_cookies(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
        .map(|uuid| uuid.to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(session_from_cookies(parts)
            .map(Session::existing)
            .unwrap_or_default())
    }
}
