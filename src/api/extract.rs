use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};

use super::error::ApiError;
use crate::models::MovieSubmission;

/// 请求体无法解析时返回给调用方的消息，解析细节只写日志
pub const MALFORMED_BODY: &str = "Request body could not be parsed";

/// 添加 / 更新请求体，支持表单和 JSON 两种格式
#[derive(Debug, Clone, Default)]
pub struct Submission(pub MovieSubmission);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

fn malformed(detail: String) -> ApiError {
    tracing::warn!("Rejected submission body: {}", detail);
    ApiError::BadRequest(MALFORMED_BODY.to_string())
}

#[async_trait]
impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(submission) = Json::<MovieSubmission>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            Ok(Submission(submission))
        } else {
            let Form(submission) = Form::<MovieSubmission>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            Ok(Submission(submission))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldValue, ListValue};
    use axum::body::Body;

    async fn extract(content_type: &str, body: &str) -> Result<Submission, ApiError> {
        let req = Request::builder()
            .method("POST")
            .uri("/add/")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        Submission::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_form_body() {
        let Submission(submission) = extract(
            "application/x-www-form-urlencoded",
            "title=Heat&duration=100&isAvailable=true&genre=Crime%2C+Drama",
        )
        .await
        .unwrap();

        assert_eq!(submission.title.as_deref(), Some("Heat"));
        assert_eq!(submission.duration, Some(FieldValue::Text("100".to_string())));
        assert_eq!(submission.is_available, Some(FieldValue::Text("true".to_string())));
        assert_eq!(submission.genre, Some(ListValue::from("Crime, Drama")));
        assert!(submission.actors.is_none());
    }

    #[tokio::test]
    async fn test_json_body() {
        let Submission(submission) = extract(
            "application/json",
            r#"{"id": "abc", "duration": 100, "isAvailable": true}"#,
        )
        .await
        .unwrap();

        assert_eq!(submission.id.as_deref(), Some("abc"));
        assert_eq!(submission.duration.and_then(|d| d.as_integer()), Some(100));
        assert_eq!(submission.is_available, Some(FieldValue::Flag(true)));
    }

    #[tokio::test]
    async fn test_json_lists_and_odd_values() {
        let Submission(submission) = extract(
            "application/json",
            r#"{"genre": ["Drama"], "actors": [], "duration": [1], "title": 12}"#,
        )
        .await
        .unwrap();

        assert_eq!(submission.genre, Some(ListValue::Items(vec!["Drama".to_string()])));
        assert_eq!(submission.actors, Some(ListValue::Items(Vec::new())));
        assert_eq!(submission.duration.and_then(|d| d.as_integer()), None);
        assert_eq!(submission.title.as_deref(), Some("12"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let result = extract("application/json", "{not json").await;
        assert!(matches!(result, Err(ApiError::BadRequest(ref msg)) if msg == MALFORMED_BODY));
    }
}
