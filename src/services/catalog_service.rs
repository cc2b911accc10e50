use std::sync::Arc;
use anyhow::Result;

use crate::database::MovieRepository;
use crate::models::{
    Clock, Failure, ListPolicy, Movie, MovieDocument, MovieSubmission, Outcome, Payload,
};

/// 电影目录服务层，负责每个操作的处理顺序
///
/// 校验和“未找到”类失败以 `Outcome::Failure` 返回；
/// 存储错误通过 `Err` 向上传递，不在这里吞掉。
pub struct CatalogService {
    repository: Arc<dyn MovieRepository>,
    clock: Arc<dyn Clock>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn MovieRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 数值转换 → 组装 → 校验
    fn prepare(&self, submission: &MovieSubmission) -> Result<Movie, Failure> {
        let typed = submission.coerce()?;
        let movie = submission.normalize(typed).into_movie(self.clock.as_ref())?;
        Ok(movie)
    }

    /// 新增电影
    ///
    /// 成功时只返回 `{status: true}`，新 ID 只写日志；调用方需通过列表接口取得 ID。
    pub async fn add(&self, submission: MovieSubmission) -> Result<Outcome> {
        let movie = match self.prepare(&submission) {
            Ok(movie) => movie,
            Err(failure) => return Ok(Outcome::failure(failure)),
        };

        let id = self.repository.insert_movie(&movie).await?;
        tracing::info!("Movie added: {} ({})", movie.title, id);

        Ok(Outcome::done())
    }

    /// 插入默认示例电影
    pub async fn add_sample(&self) -> Result<Outcome> {
        let id = self.repository.insert_movie(&Movie::sample()).await?;
        tracing::info!("Sample movie added: {}", id);

        Ok(Outcome::done())
    }

    /// 整体替换电影
    ///
    /// 替换计数为 0 时按“未找到”处理。
    pub async fn update(&self, submission: MovieSubmission) -> Result<Outcome> {
        let Some(id) = submission.object_id().map(str::to_string) else {
            return Ok(Outcome::failure(Failure::MissingId));
        };

        let movie = match self.prepare(&submission) {
            Ok(movie) => movie,
            Err(failure) => return Ok(Outcome::failure(failure)),
        };

        submission.check_list_fields(ListPolicy::Required)?;

        let modified = self.repository.replace_movie(&id, &movie).await?;
        if modified < 1 {
            return Ok(Outcome::failure(Failure::NotFound));
        }

        tracing::info!("Movie updated: {}", id);
        Ok(Outcome::done())
    }

    /// 查看单部电影
    pub async fn view(&self, id: Option<&str>) -> Result<Outcome> {
        let Some(id) = non_empty(id) else {
            return Ok(Outcome::failure(Failure::MissingId));
        };

        match self.repository.find_movie(id).await? {
            Some(document) => Ok(Outcome::with_payload(Payload::Movie(document))),
            None => Ok(Outcome::failure(Failure::NotFound)),
        }
    }

    /// 查看全部电影（完整记录）
    pub async fn view_all(&self) -> Result<Outcome> {
        let movies = self.repository.find_all_movies().await?;
        Ok(Outcome::with_payload(Payload::Movies(movies)))
    }

    /// 列出全部电影（ID → 标题）
    pub async fn list(&self) -> Result<Outcome> {
        let titles = self
            .repository
            .find_all_movies()
            .await?
            .into_iter()
            .map(|document| (document.id, document.movie.title))
            .collect();

        Ok(Outcome::with_payload(Payload::Titles(titles)))
    }

    /// 删除电影
    pub async fn delete(&self, id: Option<&str>) -> Result<Outcome> {
        let Some(id) = non_empty(id) else {
            return Ok(Outcome::failure(Failure::MissingId));
        };

        let deleted = self.repository.delete_movie(id).await?;
        if deleted < 1 {
            return Ok(Outcome::failure(Failure::NotFound));
        }

        tracing::info!("Movie deleted: {}", id);
        Ok(Outcome::done())
    }

    /// 前端首页使用的全部记录
    pub async fn all_movies(&self) -> Result<Vec<MovieDocument>> {
        self.repository.find_all_movies().await
    }

    /// 编辑表单使用的记录
    ///
    /// ID 缺失、格式错误或不存在时统一返回 `MissingId`。
    pub async fn movie_for_form(&self, id: Option<&str>) -> Result<Result<MovieDocument, Failure>> {
        let Some(id) = non_empty(id) else {
            return Ok(Err(Failure::MissingId));
        };

        Ok(self.repository.find_movie(id).await?.ok_or(Failure::MissingId))
    }

    pub async fn count(&self) -> Result<i64> {
        self.repository.count_movies().await
    }
}

fn non_empty(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}
