use crate::domain::a001_article::api as articles;
use crate::shared::api_client::{ApiClient, ApiError};
use crate::system::users::api as users;
use contracts::domain::a001_article::aggregate::Article;
use contracts::shared::list_query::{FilterSet, ListQuery, SortSpec};
use contracts::system::users::count_active;

pub const RECENT_ARTICLES: u32 = 6;

/// Newest articles first, one short page.
pub fn recent_query() -> ListQuery {
    ListQuery::new(FilterSet::default(), SortSpec::default(), 1, RECENT_ARTICLES)
}

pub async fn fetch_recent_articles(client: ApiClient) -> Result<Vec<Article>, ApiError> {
    Ok(articles::fetch_articles(client, recent_query()).await?.rows)
}

pub async fn fetch_active_member_count(client: ApiClient) -> Result<usize, ApiError> {
    Ok(count_active(&users::fetch_users(client).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_query() {
        let qs = serde_qs::to_string(&recent_query()).unwrap();
        assert_eq!(qs, "sortBy=created_at&order=desc&page=1&limit=6");
    }
}
