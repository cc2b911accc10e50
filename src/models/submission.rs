// 原始提交数据 → 待校验电影数据
//
// 表单提交的所有字段都是字符串；JSON 提交可能带数字或布尔值。

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::movie::MovieCandidate;
use super::validation::ValidationError;

/// 单个原始字段值
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    /// 数组、对象、null 等无法转换的值
    Other(serde_json::Value),
}

impl FieldValue {
    /// 整数转换，失败返回 None
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => n.as_i64(),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Flag(_) | FieldValue::Other(_) => None,
        }
    }

    /// 浮点数转换，失败返回 None
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Flag(_) | FieldValue::Other(_) => None,
        }
    }

    /// 文本形式；数字和布尔值按字面转换
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Flag(flag) => Some(flag.to_string()),
            FieldValue::Other(_) => None,
        }
    }
}

/// 列表字段：逗号分隔的文本或 JSON 字符串数组
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListValue {
    Text(String),
    Items(Vec<String>),
    /// 其他形状一律视为空列表
    Other(serde_json::Value),
}

impl From<&str> for ListValue {
    fn from(text: &str) -> Self {
        ListValue::Text(text.to_string())
    }
}

/// 文本字段宽松解析：非字符串的标量按字面转换，其余视为缺失
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(FieldValue::deserialize(deserializer)?.into_text())
}

/// 提交错误（不属于字段校验）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Field '{0}' is required when updating a movie")]
    MissingListField(&'static str),
}

/// 列表字段缺失时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPolicy {
    /// 新增：缺失视为空列表
    DefaultEmpty,
    /// 更新：列表字段必须存在
    Required,
}

/// 添加 / 更新请求的原始数据
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieSubmission {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    pub duration: Option<FieldValue>,
    pub production_year: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub production_country: Option<String>,
    pub actors: Option<ListValue>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cover_image: Option<String>,
    pub audio_languages: Option<ListValue>,
    pub genre: Option<ListValue>,
    pub imdb_rating: Option<FieldValue>,
    #[serde(rename = "isAvailable")]
    pub is_available: Option<FieldValue>,
}

/// 已转换的数值字段
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypedFields {
    pub duration: i64,
    pub production_year: i32,
    pub imdb_rating: f64,
}

impl MovieSubmission {
    /// 数值字段转换
    ///
    /// 顺序：duration → production_year → imdb_rating。
    /// 转换失败（包括字段缺失）按该字段的校验错误处理。
    pub fn coerce(&self) -> Result<TypedFields, ValidationError> {
        let duration = self
            .duration
            .as_ref()
            .and_then(FieldValue::as_integer)
            .ok_or(ValidationError::Duration)?;

        let production_year = self
            .production_year
            .as_ref()
            .and_then(FieldValue::as_integer)
            .and_then(|year| i32::try_from(year).ok())
            .ok_or(ValidationError::ProductionYear)?;

        let imdb_rating = self
            .imdb_rating
            .as_ref()
            .and_then(FieldValue::as_float)
            .ok_or(ValidationError::ImdbRating)?;

        Ok(TypedFields {
            duration,
            production_year,
            imdb_rating,
        })
    }

    /// 组装待校验数据，列表字段缺失时视为空列表
    pub fn normalize(&self, typed: TypedFields) -> MovieCandidate {
        MovieCandidate {
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            duration: typed.duration,
            production_year: typed.production_year,
            production_country: self.production_country.clone().unwrap_or_default(),
            actors: split_list(self.actors.as_ref()),
            cover_image: self.cover_image.clone(),
            audio_languages: split_list(self.audio_languages.as_ref()),
            genre: split_list(self.genre.as_ref()),
            imdb_rating: typed.imdb_rating,
            is_available: Some(coerce_flag(self.is_available.as_ref())),
        }
    }

    /// 检查列表字段是否齐全（仅更新路径要求）
    pub fn check_list_fields(&self, policy: ListPolicy) -> Result<(), SubmissionError> {
        if policy == ListPolicy::DefaultEmpty {
            return Ok(());
        }

        let fields = [
            ("genre", &self.genre),
            ("audio_languages", &self.audio_languages),
            ("actors", &self.actors),
        ];
        for (name, value) in fields {
            if value.is_none() {
                return Err(SubmissionError::MissingListField(name));
            }
        }

        Ok(())
    }

    /// 非空的 ID
    pub fn object_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// 布尔字段转换：只有字符串 "true" 或布尔值 true 为真，其余一律为假
pub fn coerce_flag(value: Option<&FieldValue>) -> bool {
    match value {
        Some(FieldValue::Flag(flag)) => *flag,
        Some(FieldValue::Text(text)) => text == "true",
        _ => false,
    }
}

/// 按逗号拆分，去除每项首尾空白，保持原顺序
///
/// 数组形式的值不再拆分，只去除首尾空白。
pub fn split_list(raw: Option<&ListValue>) -> Vec<String> {
    match raw {
        Some(ListValue::Text(text)) if !text.is_empty() => {
            text.split(',').map(|item| item.trim().to_string()).collect()
        }
        Some(ListValue::Items(items)) => items.iter().map(|item| item.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Option<FieldValue> {
        Some(FieldValue::Text(value.to_string()))
    }

    fn list(value: &str) -> Option<ListValue> {
        Some(ListValue::from(value))
    }

    fn full_submission() -> MovieSubmission {
        MovieSubmission {
            id: None,
            title: Some("X".to_string()),
            description: Some("Y".to_string()),
            duration: text("100"),
            production_year: text("2000"),
            production_country: Some("US".to_string()),
            actors: list(" Ann , Bob,Cid "),
            cover_image: Some("http://img".to_string()),
            audio_languages: list("sv, en"),
            genre: list("Drama"),
            imdb_rating: text("5.0"),
            is_available: text("true"),
        }
    }

    #[test]
    fn test_split_list_trims_and_keeps_order() {
        assert_eq!(split_list(list(" Ann , Bob,Cid ").as_ref()), vec!["Ann", "Bob", "Cid"]);
        assert_eq!(split_list(list("a,,b").as_ref()), vec!["a", "", "b"]);
        assert!(split_list(list("").as_ref()).is_empty());
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn test_split_list_accepts_arrays() {
        let items = ListValue::Items(vec![" Drama ".to_string(), "Crime, Noir".to_string()]);
        assert_eq!(split_list(Some(&items)), vec!["Drama", "Crime, Noir"]);

        let other = ListValue::Other(serde_json::json!(5));
        assert!(split_list(Some(&other)).is_empty());
    }

    #[test]
    fn test_json_record_shape_is_accepted() {
        let submission: MovieSubmission = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "X",
            "production_country": ["US"],
            "genre": ["Drama"],
            "actors": "Ann, Bob",
            "audio_languages": {"lang": "en"},
            "duration": [1],
            "production_year": null,
            "imdb_rating": 5.0
        }))
        .unwrap();

        assert_eq!(submission.id.as_deref(), Some("7"));
        assert_eq!(submission.production_country, None);
        assert_eq!(submission.genre, Some(ListValue::Items(vec!["Drama".to_string()])));
        assert_eq!(submission.actors, list("Ann, Bob"));
        assert!(matches!(submission.audio_languages, Some(ListValue::Other(_))));
        assert_eq!(submission.coerce(), Err(ValidationError::Duration));
    }

    #[test]
    fn test_coerce_flag_is_two_branch() {
        assert!(coerce_flag(text("true").as_ref()));
        assert!(coerce_flag(Some(&FieldValue::Flag(true))));

        assert!(!coerce_flag(text("True").as_ref()));
        assert!(!coerce_flag(text("yes").as_ref()));
        assert!(!coerce_flag(text("1").as_ref()));
        assert!(!coerce_flag(Some(&FieldValue::Number(1.into()))));
        assert!(!coerce_flag(Some(&FieldValue::Flag(false))));
        assert!(!coerce_flag(None));
    }

    #[test]
    fn test_coerce_numbers() {
        let typed = full_submission().coerce().unwrap();
        assert_eq!(typed.duration, 100);
        assert_eq!(typed.production_year, 2000);
        assert_eq!(typed.imdb_rating, 5.0);
    }

    #[test]
    fn test_coerce_accepts_json_numbers() {
        let submission: MovieSubmission = serde_json::from_value(serde_json::json!({
            "duration": 90,
            "production_year": 1999,
            "imdb_rating": 7,
            "isAvailable": true
        }))
        .unwrap();

        let typed = submission.coerce().unwrap();
        assert_eq!(typed.duration, 90);
        assert_eq!(typed.production_year, 1999);
        assert_eq!(typed.imdb_rating, 7.0);
        assert_eq!(submission.is_available, Some(FieldValue::Flag(true)));
    }

    #[test]
    fn test_coerce_failures_map_to_field_messages() {
        let mut submission = full_submission();
        submission.duration = text("1.5");
        assert_eq!(submission.coerce(), Err(ValidationError::Duration));

        let mut submission = full_submission();
        submission.production_year = text("two thousand");
        assert_eq!(submission.coerce(), Err(ValidationError::ProductionYear));

        let mut submission = full_submission();
        submission.imdb_rating = text("");
        assert_eq!(submission.coerce(), Err(ValidationError::ImdbRating));

        let mut submission = full_submission();
        submission.imdb_rating = None;
        assert_eq!(submission.coerce(), Err(ValidationError::ImdbRating));
    }

    #[test]
    fn test_coerce_reports_first_bad_number() {
        let mut submission = full_submission();
        submission.imdb_rating = text("x");
        submission.production_year = text("y");
        assert_eq!(submission.coerce(), Err(ValidationError::ProductionYear));
    }

    #[test]
    fn test_normalize_builds_candidate() {
        let submission = full_submission();
        let candidate = submission.normalize(submission.coerce().unwrap());

        assert_eq!(candidate.actors, vec!["Ann", "Bob", "Cid"]);
        assert_eq!(candidate.audio_languages, vec!["sv", "en"]);
        assert_eq!(candidate.genre, vec!["Drama"]);
        assert_eq!(candidate.is_available, Some(true));
        assert_eq!(candidate.cover_image.as_deref(), Some("http://img"));
    }

    #[test]
    fn test_normalize_defaults_missing_lists() {
        let mut submission = full_submission();
        submission.actors = None;
        submission.audio_languages = None;
        submission.is_available = None;

        let candidate = submission.normalize(submission.coerce().unwrap());
        assert!(candidate.actors.is_empty());
        assert!(candidate.audio_languages.is_empty());
        assert_eq!(candidate.is_available, Some(false));
    }

    #[test]
    fn test_list_fields_required_only_for_update() {
        let mut submission = full_submission();
        submission.audio_languages = None;

        assert_eq!(submission.check_list_fields(ListPolicy::DefaultEmpty), Ok(()));
        assert_eq!(
            submission.check_list_fields(ListPolicy::Required),
            Err(SubmissionError::MissingListField("audio_languages"))
        );
    }

    #[test]
    fn test_object_id_ignores_empty() {
        let mut submission = full_submission();
        assert_eq!(submission.object_id(), None);
        submission.id = Some(String::new());
        assert_eq!(submission.object_id(), None);
        submission.id = Some("abc".to_string());
        assert_eq!(submission.object_id(), Some("abc"));
    }
}
