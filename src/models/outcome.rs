use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::movie::MovieDocument;
use super::validation::ValidationError;

/// 操作失败原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("id of the object needs to be provided")]
    MissingId,

    #[error("Object with the given ID was not found")]
    NotFound,
}

/// 成功时携带的数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Movie(MovieDocument),
    Movies(Vec<MovieDocument>),
    /// ID → 标题
    Titles(BTreeMap<String, String>),
}

/// 单次操作的结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Option<Payload>),
    Failure(Failure),
}

impl Outcome {
    pub fn done() -> Self {
        Outcome::Success(None)
    }

    pub fn with_payload(payload: Payload) -> Self {
        Outcome::Success(Some(payload))
    }

    pub fn failure(reason: impl Into<Failure>) -> Self {
        Outcome::Failure(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// 操作类型，决定浏览器模式下的成功提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    View,
    ViewAll,
    List,
    Delete,
}

impl Operation {
    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::Add => "Movie successfully added",
            Operation::Update => "Movie successfully updated",
            Operation::View => "Movie successfully retrieved",
            Operation::ViewAll | Operation::List => "Movies successfully retrieved",
            Operation::Delete => "Item successfully deleted",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "Add"),
            Operation::Update => write!(f, "Update"),
            Operation::View => write!(f, "View"),
            Operation::ViewAll => write!(f, "View all"),
            Operation::List => write!(f, "List entries"),
            Operation::Delete => write!(f, "Delete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages() {
        assert_eq!(Failure::MissingId.to_string(), "id of the object needs to be provided");
        assert_eq!(Failure::NotFound.to_string(), "Object with the given ID was not found");
        assert_eq!(
            Failure::from(ValidationError::Genre).to_string(),
            "Genre is mandatory"
        );
    }

    #[test]
    fn test_titles_payload_serializes_as_bare_map() {
        let mut titles = BTreeMap::new();
        titles.insert("id-1".to_string(), "X".to_string());
        let value = serde_json::to_value(Payload::Titles(titles)).unwrap();
        assert_eq!(value, serde_json::json!({ "id-1": "X" }));
    }
}
