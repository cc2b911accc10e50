use serde::{Deserialize, Serialize};

use super::validation::{validate_movie, Clock, ValidationError};

/// 电影记录（已通过校验的规范形态）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub description: String,
    pub duration: i64, // 毫秒
    pub production_year: i32,
    pub production_country: String,
    pub actors: Vec<String>,
    pub cover_image: Option<String>,
    pub audio_languages: Vec<String>,
    pub genre: Vec<String>,
    pub imdb_rating: f64,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
}

/// 存储中的文档：记录 + 存储分配的 ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub movie: Movie,
}

/// 待校验的电影数据
///
/// `is_available` 为 `None` 表示原始值不是真正的布尔值。
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCandidate {
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub production_year: i32,
    pub production_country: String,
    pub actors: Vec<String>,
    pub cover_image: Option<String>,
    pub audio_languages: Vec<String>,
    pub genre: Vec<String>,
    pub imdb_rating: f64,
    pub is_available: Option<bool>,
}

impl MovieCandidate {
    /// 校验并转换为电影记录
    pub fn into_movie(self, clock: &dyn Clock) -> Result<Movie, ValidationError> {
        validate_movie(&self, clock)?;
        let is_available = self.is_available.ok_or(ValidationError::IsAvailable)?;

        Ok(Movie {
            title: self.title,
            description: self.description,
            duration: self.duration,
            production_year: self.production_year,
            production_country: self.production_country,
            actors: self.actors,
            cover_image: self.cover_image,
            audio_languages: self.audio_languages,
            genre: self.genre,
            imdb_rating: self.imdb_rating,
            is_available,
        })
    }
}

impl From<Movie> for MovieCandidate {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            description: movie.description,
            duration: movie.duration,
            production_year: movie.production_year,
            production_country: movie.production_country,
            actors: movie.actors,
            cover_image: movie.cover_image,
            audio_languages: movie.audio_languages,
            genre: movie.genre,
            imdb_rating: movie.imdb_rating,
            is_available: Some(movie.is_available),
        }
    }
}

impl Movie {
    /// 默认示例电影，用于 /add_default/
    pub fn sample() -> Self {
        Self {
            title: "The Huntsman: Winter's War".to_string(),
            description: "Den elaka drottningen Ravenna förvandlar sin syster Freyas hjärta till is. \
                          Detta svek väcker en isande kraft inom Freya och hindrar henne från att älska. \
                          Ett krig bryter ut mellan systrarna. Jägaren Eric och hans följeslagare Sara \
                          måste hjälpa Freya att besegra sin syster så att inte den ondskefulla Ravenna \
                          härskar för all framtid."
                .to_string(),
            duration: 6_540_000,
            production_year: 2016,
            production_country: "USA".to_string(),
            actors: vec![
                "Charlize Theron".to_string(),
                "Emily Blunt".to_string(),
                "Nick Frost".to_string(),
                "Jessica Chastain".to_string(),
                "Chris Hemsworth".to_string(),
            ],
            cover_image: Some(
                "https://i-viaplay-com.akamaized.net/scandi/Viaplay_Prod_-_Scandi/1001/108/\
                 1470751577-a216d10d96055ba93e8ec4a3b2e745a3019614dc.jpg?width=199&height=298&token=4559b1eb"
                    .to_string(),
            ),
            audio_languages: ["sv", "en", "no", "da", "fi"].iter().map(|s| s.to_string()).collect(),
            genre: vec!["Drama".to_string(), "Action".to_string()],
            imdb_rating: 6.1,
            is_available: true,
        }
    }
}
