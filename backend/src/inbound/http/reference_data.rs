//! Reference data HTTP handlers.
//!
//! ```text
//! GET    /api/v1/tags
//! POST   /api/v1/tags
//! GET    /api/v1/tags/{tagId}
//! DELETE /api/v1/tags/{tagId}
//! GET    /api/v1/locations
//! POST   /api/v1/locations
//! GET    /api/v1/locations/{locationId}
//! PUT    /api/v1/locations/{locationId}
//! DELETE /api/v1/locations/{locationId}
//! GET    /api/v1/social-media-platforms
//! POST   /api/v1/social-media-platforms
//! GET    /api/v1/social-media-platforms/{platformId}
//! DELETE /api/v1/social-media-platforms/{platformId}
//! ```
//!
//! Deleting an entry still referenced by a food truck answers 409.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::models::{
    CreateLocationModel, CreateSocialMediaPlatformModel, CreateTagModel, LocationResponse,
    SocialMediaPlatformResponse, TagResponse, UpdateLocationModel,
};
use crate::inbound::http::state::HttpState;

#[get("/tags")]
pub async fn list_tags(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TagResponse>>> {
    let tags = state.reference_data_query.list_tags().await?;
    Ok(web::Json(tags.iter().map(Into::into).collect()))
}

#[get("/tags/{tag_id}")]
pub async fn get_tag(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<TagResponse>> {
    let tag = state
        .reference_data_query
        .get_tag(path.into_inner().into())
        .await?;
    Ok(web::Json(TagResponse::from(&tag)))
}

#[post("/tags")]
pub async fn create_tag(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTagModel>,
) -> ApiResult<HttpResponse> {
    let tag = state
        .reference_data
        .create_tag(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(TagResponse::from(&tag)))
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .reference_data
        .delete_tag(path.into_inner().into())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/locations")]
pub async fn list_locations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<LocationResponse>>> {
    let locations = state.reference_data_query.list_locations().await?;
    Ok(web::Json(locations.iter().map(Into::into).collect()))
}

#[get("/locations/{location_id}")]
pub async fn get_location(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<LocationResponse>> {
    let location = state
        .reference_data_query
        .get_location(path.into_inner().into())
        .await?;
    Ok(web::Json(LocationResponse::from(&location)))
}

#[post("/locations")]
pub async fn create_location(
    state: web::Data<HttpState>,
    payload: web::Json<CreateLocationModel>,
) -> ApiResult<HttpResponse> {
    let location = state
        .reference_data
        .create_location(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(LocationResponse::from(&location)))
}

#[put("/locations/{location_id}")]
pub async fn update_location(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateLocationModel>,
) -> ApiResult<web::Json<LocationResponse>> {
    let mut model = payload.into_inner();
    model.location_id = path.into_inner();
    let location = state.reference_data.update_location(model.into()).await?;
    Ok(web::Json(LocationResponse::from(&location)))
}

#[delete("/locations/{location_id}")]
pub async fn delete_location(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .reference_data
        .delete_location(path.into_inner().into())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/social-media-platforms")]
pub async fn list_social_media_platforms(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<SocialMediaPlatformResponse>>> {
    let platforms = state
        .reference_data_query
        .list_social_media_platforms()
        .await?;
    Ok(web::Json(platforms.iter().map(Into::into).collect()))
}

#[get("/social-media-platforms/{platform_id}")]
pub async fn get_social_media_platform(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<SocialMediaPlatformResponse>> {
    let platform = state
        .reference_data_query
        .get_social_media_platform(path.into_inner().into())
        .await?;
    Ok(web::Json(SocialMediaPlatformResponse::from(&platform)))
}

#[post("/social-media-platforms")]
pub async fn create_social_media_platform(
    state: web::Data<HttpState>,
    payload: web::Json<CreateSocialMediaPlatformModel>,
) -> ApiResult<HttpResponse> {
    let platform = state
        .reference_data
        .create_social_media_platform(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(SocialMediaPlatformResponse::from(&platform)))
}

#[delete("/social-media-platforms/{platform_id}")]
pub async fn delete_social_media_platform(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .reference_data
        .delete_social_media_platform(path.into_inner().into())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register every reference data route on `config`.
pub fn configure(config: &mut web::ServiceConfig) {
    config
        .service(list_tags)
        .service(create_tag)
        .service(get_tag)
        .service(delete_tag)
        .service(list_locations)
        .service(create_location)
        .service(get_location)
        .service(update_location)
        .service(delete_location)
        .service(list_social_media_platforms)
        .service(create_social_media_platform)
        .service(get_social_media_platform)
        .service(delete_social_media_platform);
}
