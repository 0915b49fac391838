use crate::shared::api_client::{require_data, ApiClient, ApiError};
use crate::shared::api_utils::encode_segment;
use contracts::system::users::{ProfileUpdate, User, UserDto};
use serde_json::Value;

pub async fn fetch_users(client: ApiClient) -> Result<Vec<User>, ApiError> {
    Ok(client.get::<Vec<User>>("/users").await?.data.unwrap_or_default())
}

pub async fn create_user(client: ApiClient, dto: UserDto) -> Result<(), ApiError> {
    client.post::<_, Value>("/users", &dto).await.map(|_| ())
}

pub async fn update_user(client: ApiClient, id: String, dto: UserDto) -> Result<(), ApiError> {
    client
        .put::<_, Value>(&format!("/users/{}", encode_segment(&id)), &dto)
        .await
        .map(|_| ())
}

pub async fn delete_user(client: ApiClient, id: String) -> Result<(), ApiError> {
    client
        .delete::<Value>(&format!("/users/{}", encode_segment(&id)))
        .await
        .map(|_| ())
}

/// Profile of the signed-in operator.
pub async fn fetch_current_user(client: ApiClient) -> Result<User, ApiError> {
    require_data(client.get::<User>("/auth/me").await?)
}

pub async fn update_profile(client: ApiClient, update: ProfileUpdate) -> Result<(), ApiError> {
    client
        .put::<_, Value>("/auth/profile", &update)
        .await
        .map(|_| ())
}

pub async fn logout(client: ApiClient) -> Result<(), ApiError> {
    client
        .post::<_, Value>("/auth/logout", &Value::Null)
        .await
        .map(|_| ())
}
