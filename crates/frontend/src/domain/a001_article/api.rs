use crate::shared::api_client::{require_data, ApiClient, ApiError};
use crate::shared::api_utils::encode_segment;
use contracts::domain::a001_article::aggregate::{Article, ArticleDto, ArticleStats};
use contracts::shared::envelope::ListPage;
use contracts::shared::list_query::ListQuery;
use serde_json::Value;

fn article_path(id: &str) -> String {
    format!("/articles/{}", encode_segment(id))
}

pub async fn fetch_articles(client: ApiClient, query: ListQuery) -> Result<ListPage<Article>, ApiError> {
    Ok(client
        .get_with_query::<_, Vec<Article>>("/articles", &query)
        .await?
        .into_list_page())
}

pub async fn fetch_article(client: ApiClient, id: String) -> Result<Article, ApiError> {
    require_data(client.get::<Article>(&article_path(&id)).await?)
}

pub async fn create_article(client: ApiClient, dto: ArticleDto) -> Result<(), ApiError> {
    client.post::<_, Value>("/articles", &dto).await.map(|_| ())
}

pub async fn update_article(client: ApiClient, id: String, dto: ArticleDto) -> Result<(), ApiError> {
    client
        .put::<_, Value>(&article_path(&id), &dto)
        .await
        .map(|_| ())
}

pub async fn delete_article(client: ApiClient, id: String) -> Result<(), ApiError> {
    client
        .delete::<Value>(&article_path(&id))
        .await
        .map(|_| ())
}

pub async fn fetch_stats(client: ApiClient) -> Result<ArticleStats, ApiError> {
    require_data(client.get::<ArticleStats>("/articles/stats").await?)
}
