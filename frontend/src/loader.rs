//! One function per backend endpoint.

use web_sys::FormData;

use shared::constants::{API_CHECK_AUTH, API_LOGIN, API_LOGOUT, API_OUTFITS, API_RATINGS, API_SIGNUP};
use shared::error::ApiError;
use shared::types::{AuthResponse, Category, Identity, LoginRequest, Outfit, OutfitsResponse, RatingRequest};
use shared::utils::{outfit_path, search_path, user_outfits_path};

use crate::connect_fetch::{connect_form, connect_form_send, connect_json, connect_json_data, connect_send, Method};
use crate::utils::encode_component;

pub async fn check_auth() -> Result<Option<Identity>, ApiError> {
    let data: AuthResponse = connect_json(Method::Get, API_CHECK_AUTH).await?;
    Ok(data.user)
}

pub async fn login(request: &LoginRequest) -> Result<Identity, ApiError> {
    let data: AuthResponse = connect_json_data(Method::Post, API_LOGIN, request).await?;
    data.user.ok_or_else(|| ApiError::Decode("login response without user".to_string()))
}

pub async fn logout() -> Result<(), ApiError> {
    connect_send::<()>(Method::Post, API_LOGOUT, None).await
}

pub async fn signup(form: FormData) -> Result<Identity, ApiError> {
    let data: AuthResponse = connect_form(Method::Post, API_SIGNUP, form).await?;
    data.user.ok_or_else(|| ApiError::Decode("signup response without user".to_string()))
}

// ===

pub async fn outfits_all() -> Result<Vec<Outfit>, ApiError> {
    let data: OutfitsResponse = connect_json(Method::Get, API_OUTFITS).await?;
    Ok(data.outfits)
}

pub async fn outfit_get(id: i64) -> Result<Outfit, ApiError> {
    connect_json(Method::Get, &outfit_path(id)).await
}

pub async fn outfit_create(form: FormData) -> Result<Outfit, ApiError> {
    connect_form(Method::Post, API_OUTFITS, form).await
}

pub async fn outfit_update(id: i64, form: FormData) -> Result<(), ApiError> {
    connect_form_send(Method::Put, &outfit_path(id), form).await
}

pub async fn outfit_delete(id: i64) -> Result<(), ApiError> {
    connect_send::<()>(Method::Delete, &outfit_path(id), None).await
}

pub async fn outfits_search(query: &str) -> Result<Vec<Outfit>, ApiError> {
    let data: OutfitsResponse = connect_json(Method::Get, &search_path(&encode_component(query))).await?;
    Ok(data.outfits)
}

pub async fn outfits_by_user(user_id: i64, category: Option<Category>) -> Result<Vec<Outfit>, ApiError> {
    connect_json(Method::Get, &user_outfits_path(user_id, category)).await
}

// ===

pub async fn rating_submit(request: &RatingRequest) -> Result<(), ApiError> {
    connect_send(Method::Post, API_RATINGS, Some(request)).await
}
