use crate::shared::api_client::{require_data, ApiClient, ApiError};
use crate::shared::api_utils::encode_segment;
use contracts::system::config::{AppConfig, OptionList, OptionMutation, OptionsCatalog};
use serde_json::Value;

pub async fn fetch_config(client: ApiClient) -> Result<AppConfig, ApiError> {
    require_data(client.get::<AppConfig>("/config").await?)
}

pub async fn fetch_options(client: ApiClient) -> Result<OptionsCatalog, ApiError> {
    require_data(client.get::<OptionsCatalog>("/options").await?)
}

/// `/options/{type}` or `/options/rateCategories/{category}`.
pub fn option_path(list: &OptionList) -> String {
    match list.category() {
        Some(category) => format!("/options/{}/{}", list.type_key(), encode_segment(category)),
        None => format!("/options/{}", list.type_key()),
    }
}

pub async fn update_options(
    client: ApiClient,
    list: OptionList,
    mutation: OptionMutation,
) -> Result<(), ApiError> {
    client
        .post::<_, Value>(&option_path(&list), &mutation)
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_path() {
        assert_eq!(option_path(&OptionList::Seasons), "/options/seasons");
        assert_eq!(
            option_path(&OptionList::Rate("fabric".into())),
            "/options/rateCategories/fabric"
        );
        assert_eq!(
            option_path(&OptionList::Rate("hand work".into())),
            "/options/rateCategories/hand%20work"
        );
    }
}
