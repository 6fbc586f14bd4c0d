//! News client
//!
//! Club news CRUD and the comment thread under each item. Pagination uses
//! the backend's skip/limit convention with its defaults.

use std::sync::Arc;

use super::models::{
    Comment, CommentCreate, MessageResponse, NewsCreate, NewsItem, NewsUpdate,
};
use crate::common::{Result, Validator};
use crate::session::SessionManager;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone)]
pub struct NewsClient {
    api: Arc<SessionManager>,
}

impl NewsClient {
    pub fn new(api: Arc<SessionManager>) -> Self {
        Self { api }
    }

    pub async fn list(&self, club_id: i64, skip: u32, limit: u32) -> Result<Vec<NewsItem>> {
        self.api
            .get(&format!(
                "/clubes/{}/noticias?skip={}&limit={}",
                club_id, skip, limit
            ))
            .await
    }

    pub async fn get(&self, club_id: i64, news_id: i64) -> Result<NewsItem> {
        self.api
            .get(&format!("/clubes/{}/noticias/{}", club_id, news_id))
            .await
    }

    pub async fn create(&self, club_id: i64, request: NewsCreate) -> Result<NewsItem> {
        request.validate().into_result()?;
        self.api
            .post(&format!("/clubes/{}/noticias", club_id), &request)
            .await
    }

    pub async fn update(&self, club_id: i64, news_id: i64, update: NewsUpdate) -> Result<NewsItem> {
        self.api
            .put(&format!("/clubes/{}/noticias/{}", club_id, news_id), &update)
            .await
    }

    pub async fn delete(&self, club_id: i64, news_id: i64) -> Result<MessageResponse> {
        self.api
            .delete(&format!("/clubes/{}/noticias/{}", club_id, news_id))
            .await
    }

    pub async fn comments(&self, club_id: i64, news_id: i64) -> Result<Vec<Comment>> {
        self.api
            .get(&format!(
                "/clubes/{}/noticias/{}/comentarios",
                club_id, news_id
            ))
            .await
    }

    pub async fn post_comment(&self, club_id: i64, news_id: i64, content: &str) -> Result<Comment> {
        let request = CommentCreate {
            content: content.to_string(),
        };
        request.validate().into_result()?;
        self.api
            .post(
                &format!("/clubes/{}/noticias/{}/comentarios", club_id, news_id),
                &request,
            )
            .await
    }

    pub async fn delete_comment(
        &self,
        club_id: i64,
        news_id: i64,
        comment_id: i64,
    ) -> Result<MessageResponse> {
        self.api
            .delete(&format!(
                "/clubes/{}/noticias/{}/comentarios/{}",
                club_id, news_id, comment_id
            ))
            .await
    }
}
