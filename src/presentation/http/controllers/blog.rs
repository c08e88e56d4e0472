// src/presentation/http/controllers/blog.rs
use crate::application::{dto::BlogPageDto, queries::articles::ListArticlesQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BlogPageParams {
    #[serde(default)]
    pub publishable_only: bool,
}

pub async fn blog_page(
    Extension(state): Extension<HttpState>,
    Query(params): Query<BlogPageParams>,
) -> HttpResult<Json<BlogPageDto>> {
    let page = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            publishable_only: params.publishable_only,
        })
        .await
        .into_http()?;

    Ok(Json(page))
}
