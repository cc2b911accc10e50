use axum::{
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::session::Session;
use crate::models::{Operation, Outcome};
use crate::services::FlashStore;

/// 浏览器模式下所有操作结束后跳转的首页
pub const INDEX_PATH: &str = "/frontend/";

/// 响应模式：JSON 或 浏览器跳转
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    #[default]
    Api,
    Browser,
}

impl ResponseMode {
    /// 只有 `frontend=yes` 选择浏览器模式
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("yes") => ResponseMode::Browser,
            _ => ResponseMode::Api,
        }
    }
}

/// 查询参数：`?id=...&frontend=yes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModeParams {
    pub id: Option<String>,
    pub frontend: Option<String>,
}

impl ModeParams {
    pub fn mode(&self) -> ResponseMode {
        ResponseMode::from_flag(self.frontend.as_deref())
    }
}

/// 统一的状态响应体
#[derive(Debug, Serialize, PartialEq)]
pub struct StatusBody {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusBody {
    pub fn ok() -> Self {
        Self {
            status: true,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
        }
    }
}

impl IntoResponse for StatusBody {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// 浏览器模式：写入提示消息并跳转到首页
pub fn flash_redirect(flash: &FlashStore, session: &Session, message: &str) -> Response {
    flash.put(&session.id, message);
    session.attach(Redirect::to(INDEX_PATH).into_response())
}

/// 根据模式把操作结果转换为响应
///
/// API 模式下 HTTP 状态码始终是 200，失败只体现在响应体里。
pub fn dispatch(
    outcome: Outcome,
    operation: Operation,
    mode: ResponseMode,
    flash: &FlashStore,
    session: &Session,
) -> Response {
    match mode {
        ResponseMode::Api => match outcome {
            Outcome::Success(None) => StatusBody::ok().into_response(),
            Outcome::Success(Some(payload)) => Json(payload).into_response(),
            Outcome::Failure(failure) => StatusBody::failed(failure.to_string()).into_response(),
        },
        ResponseMode::Browser => {
            let message = match outcome {
                Outcome::Success(_) => operation.success_message().to_string(),
                Outcome::Failure(failure) => failure.to_string(),
            };
            flash_redirect(flash, session, &message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Failure, Movie, MovieDocument, Payload, ValidationError};
    use axum::{body::to_bytes, http::{header, StatusCode}};

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn api(outcome: Outcome) -> Response {
        dispatch(outcome, Operation::Add, ResponseMode::Api, &FlashStore::default(), &Session::new())
    }

    #[test]
    fn test_mode_flag() {
        assert_eq!(ResponseMode::from_flag(Some("yes")), ResponseMode::Browser);
        assert_eq!(ResponseMode::from_flag(Some("no")), ResponseMode::Api);
        assert_eq!(ResponseMode::from_flag(None), ResponseMode::Api);
    }

    #[tokio::test]
    async fn test_api_success_without_payload() {
        let response = api(Outcome::done());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!({ "status": true }));
    }

    #[tokio::test]
    async fn test_api_failure_keeps_ok_status() {
        let response = api(Outcome::failure(ValidationError::Duration));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "status": false, "message": "Invalid duration" })
        );
    }

    #[tokio::test]
    async fn test_api_payload_is_bare() {
        let document = MovieDocument {
            id: "id-1".to_string(),
            movie: Movie::sample(),
        };
        let response = api(Outcome::with_payload(Payload::Movie(document)));
        let body = json_body(response).await;

        assert_eq!(body["_id"], "id-1");
        assert!(body.get("status").is_none());
    }

    #[test]
    fn test_browser_mode_flashes_and_redirects() {
        let flash = FlashStore::default();
        let session = Session::existing("s1");

        let response = dispatch(Outcome::done(), Operation::Update, ResponseMode::Browser, &flash, &session);
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), INDEX_PATH);
        assert_eq!(flash.take("s1"), Some("Movie successfully updated".to_string()));

        dispatch(Outcome::failure(Failure::NotFound), Operation::Delete, ResponseMode::Browser, &flash, &session);
        assert_eq!(flash.take("s1"), Some("Object with the given ID was not found".to_string()));
    }

    #[test]
    fn test_browser_mode_sets_cookie_for_new_session() {
        let flash = FlashStore::default();
        let session = Session::new();

        let response = dispatch(Outcome::done(), Operation::Add, ResponseMode::Browser, &flash, &session);
        assert!(response.headers().get(header::SET_COOKIE).is_some());
        assert_eq!(flash.take(&session.id), Some("Movie successfully added".to_string()));
    }
}
