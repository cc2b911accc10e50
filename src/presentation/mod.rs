// 页面渲染接口
//
// 模板渲染属于外部协作者，这里只定义最小接口和一个基于 minijinja 的 HTML 实现。

pub mod html;

use anyhow::Result;
use serde::Serialize;

use crate::models::MovieDocument;

pub use html::HtmlRenderer;

/// 编辑表单数据，列表字段已用 ", " 拼接
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: i64,
    pub production_year: i32,
    pub production_country: String,
    pub actors: String,
    pub cover_image: String,
    pub audio_languages: String,
    pub genre: String,
    pub imdb_rating: f64,
    pub is_available: bool,
}

impl From<MovieDocument> for MovieForm {
    fn from(document: MovieDocument) -> Self {
        let movie = document.movie;
        Self {
            id: document.id,
            title: movie.title,
            description: movie.description,
            duration: movie.duration,
            production_year: movie.production_year,
            production_country: movie.production_country,
            actors: movie.actors.join(", "),
            cover_image: movie.cover_image.unwrap_or_default(),
            audio_languages: movie.audio_languages.join(", "),
            genre: movie.genre.join(", "),
            imdb_rating: movie.imdb_rating,
            is_available: movie.is_available,
        }
    }
}

/// 渲染器接口
pub trait Renderer: Send + Sync {
    /// 首页：全部电影 + 可选的状态提示
    fn render_index(&self, movies: &[MovieDocument], status: Option<&str>) -> Result<String>;

    /// 单部电影的编辑表单
    fn render_update_form(&self, form: &MovieForm) -> Result<String>;
}
