use serde::{Deserialize, Serialize};

/// Single cost line of an article (fabric meterage, embroidery, stitching...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RateLine {
    /// Rate category name, one of the catalog's `rateCategories` keys.
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
}

/// Production SKU (aggregate a001) as returned by `/articles`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(alias = "_id")]
    pub id: String,
    pub article_no: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub fabric_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub sales_rate: f64,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub rates: Vec<RateLine>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl Article {
    /// Last two characters of the article number, used as a compact avatar.
    pub fn short_code(&self) -> String {
        let chars: Vec<char> = self.article_no.chars().collect();
        let start = chars.len().saturating_sub(2);
        chars[start..].iter().collect()
    }
}

/// Create/update payload for `POST /articles` and `PUT /articles/:id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticleDto {
    pub article_no: String,
    pub season: String,
    pub size: String,
    pub category: String,
    pub fabric_type: String,
    pub description: String,
    pub quantity: Option<f64>,
    pub sales_rate: f64,
    pub rates: Vec<RateLine>,
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            article_no: article.article_no.clone(),
            season: article.season.clone(),
            size: article.size.clone(),
            category: article.category.clone(),
            fabric_type: article.fabric_type.clone(),
            description: article.description.clone().unwrap_or_default(),
            quantity: article.quantity,
            sales_rate: article.sales_rate,
            rates: article.rates.clone(),
        }
    }
}

/// `GET /articles/stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStats {
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub summary: ArticleStatsSummary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStatsSummary {
    #[serde(default)]
    pub avg_profit_margin: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_accepts_mongo_style_id() {
        let body = r#"{
            "_id": "65f0c1",
            "article_no": "AT-1042",
            "season": "Summer",
            "sales_rate": 4500,
            "total_cost": 3100.5,
            "rates": [{"category": "fabric", "title": "Lawn", "price": 1800}],
            "createdAt": "2024-03-15T14:02:26.123Z"
        }"#;
        let article: Article = serde_json::from_str(body).unwrap();
        assert_eq!(article.id, "65f0c1");
        assert_eq!(article.rates.len(), 1);
        assert_eq!(article.created_at.as_deref(), Some("2024-03-15T14:02:26.123Z"));
        assert_eq!(article.short_code(), "42");
    }

    #[test]
    fn test_short_code_of_short_numbers() {
        let article = Article {
            article_no: "7".into(),
            ..Default::default()
        };
        assert_eq!(article.short_code(), "7");
    }

    #[test]
    fn test_stats_shape() {
        let stats: ArticleStats =
            serde_json::from_str(r#"{"totalArticles": 12, "summary": {"avgProfitMargin": 31.25}}"#)
                .unwrap();
        assert_eq!(stats.total_articles, 12);
        assert_eq!(stats.summary.avg_profit_margin, 31.25);
    }
}
