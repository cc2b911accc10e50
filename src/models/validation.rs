use chrono::Datelike;
use thiserror::Error;

use super::movie::MovieCandidate;

/// 最早的电影年份（1888 年，Roundhay Garden Scene）
pub const OLDEST_MOVIE_YEAR: i32 = 1888;

pub const MIN_IMDB_RATING: f64 = 1.0;
pub const MAX_IMDB_RATING: f64 = 10.0;

/// 验证错误类型
///
/// 每个字段只有一条固定的提示信息，直接展示给用户。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is mandatory")]
    Title,

    #[error("Description is mandatory")]
    Description,

    #[error("Invalid duration")]
    Duration,

    #[error("Invalid production year")]
    ProductionYear,

    #[error("Production country is mandatory")]
    ProductionCountry,

    #[error("Invalid IMDB rating, needs to be in scale of 1 to 10")]
    ImdbRating,

    #[error("Genre is mandatory")]
    Genre,

    #[error("isAvailable has to be a boolean")]
    IsAvailable,
}

/// 时钟接口，年份校验依赖当前日期
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// 系统时钟（本地时间）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// 固定年份时钟，测试用
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// 验证电影数据
///
/// 按固定顺序检查，遇到第一个错误立即返回：
/// title → description → duration → production_year → production_country
/// → imdb_rating → genre → isAvailable。
/// actors、cover_image、audio_languages 目前不做任何校验。
pub fn validate_movie(candidate: &MovieCandidate, clock: &dyn Clock) -> Result<(), ValidationError> {
    if candidate.title.is_empty() {
        return Err(ValidationError::Title);
    }

    if candidate.description.is_empty() {
        return Err(ValidationError::Description);
    }

    if candidate.duration < 0 {
        return Err(ValidationError::Duration);
    }

    let current_year = clock.current_year();
    if candidate.production_year < OLDEST_MOVIE_YEAR || candidate.production_year > current_year {
        return Err(ValidationError::ProductionYear);
    }

    if candidate.production_country.is_empty() {
        return Err(ValidationError::ProductionCountry);
    }

    // NaN 也会被拒绝
    if !(MIN_IMDB_RATING..=MAX_IMDB_RATING).contains(&candidate.imdb_rating) {
        return Err(ValidationError::ImdbRating);
    }

    if candidate.genre.is_empty() {
        return Err(ValidationError::Genre);
    }

    if candidate.is_available.is_none() {
        return Err(ValidationError::IsAvailable);
    }

    Ok(())
}
