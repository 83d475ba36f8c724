//! Food truck HTTP handlers.
//!
//! ```text
//! GET    /api/v1/food-trucks
//! POST   /api/v1/food-trucks
//! GET    /api/v1/food-trucks/{foodTruckId}
//! PUT    /api/v1/food-trucks/{foodTruckId}
//! DELETE /api/v1/food-trucks/{foodTruckId}
//! POST   /api/v1/food-trucks/{foodTruckId}/tags
//! DELETE /api/v1/food-trucks/{foodTruckId}/tags/{tagId}
//! POST   /api/v1/food-trucks/{foodTruckId}/schedules
//! PUT    /api/v1/food-trucks/{foodTruckId}/schedules/{scheduleId}
//! DELETE /api/v1/food-trucks/{foodTruckId}/schedules/{scheduleId}
//! POST   /api/v1/food-trucks/{foodTruckId}/reviews
//! DELETE /api/v1/food-trucks/{foodTruckId}/reviews/{reviewId}
//! POST   /api/v1/food-trucks/{foodTruckId}/social-media-accounts
//! DELETE /api/v1/food-trucks/{foodTruckId}/social-media-accounts/{accountId}
//! GET    /api/v1/food-trucks/{foodTruckId}/social-media-urls/{platformId}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Error, FoodTruck};
use crate::domain::commands::{
    DeleteFoodTruckCommand, RemoveFoodTruckReviewCommand, RemoveFoodTruckScheduleCommand,
    RemoveFoodTruckTagCommand, RemoveSocialMediaAccountCommand,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::models::{
    AddFoodTruckTagModel, AddSocialMediaAccountModel, CreateFoodTruckModel,
    CreateFoodTruckReviewModel, CreateFoodTruckScheduleModel, FoodTruckResponse,
    RescheduleFoodTruckScheduleModel, SocialMediaUrlResponse, UpdateFoodTruckModel,
};
use crate::inbound::http::state::HttpState;

fn created(food_truck: &FoodTruck) -> HttpResponse {
    HttpResponse::Created().json(FoodTruckResponse::from(food_truck))
}

fn ok(food_truck: &FoodTruck) -> web::Json<FoodTruckResponse> {
    web::Json(FoodTruckResponse::from(food_truck))
}

#[get("/food-trucks")]
pub async fn list_food_trucks(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<FoodTruckResponse>>> {
    let trucks = state.food_trucks_query.list_food_trucks().await?;
    Ok(web::Json(trucks.iter().map(Into::into).collect()))
}

#[get("/food-trucks/{food_truck_id}")]
pub async fn get_food_truck(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<FoodTruckResponse>> {
    let truck = state
        .food_trucks_query
        .get_food_truck(path.into_inner().into())
        .await?;
    Ok(ok(&truck))
}

#[post("/food-trucks")]
pub async fn create_food_truck(
    state: web::Data<HttpState>,
    payload: web::Json<CreateFoodTruckModel>,
) -> ApiResult<HttpResponse> {
    let truck = state
        .food_trucks
        .create_food_truck(payload.into_inner().into())
        .await?;
    Ok(created(&truck))
}

#[put("/food-trucks/{food_truck_id}")]
pub async fn update_food_truck(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateFoodTruckModel>,
) -> ApiResult<web::Json<FoodTruckResponse>> {
    let mut model = payload.into_inner();
    model.food_truck_id = path.into_inner();
    let truck = state.food_trucks.update_food_truck(model.into()).await?;
    Ok(ok(&truck))
}

#[delete("/food-trucks/{food_truck_id}")]
pub async fn delete_food_truck(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .food_trucks
        .delete_food_truck(DeleteFoodTruckCommand {
            food_truck_id: path.into_inner().into(),
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/food-trucks/{food_truck_id}/tags")]
pub async fn add_food_truck_tag(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<AddFoodTruckTagModel>,
) -> ApiResult<HttpResponse> {
    let mut model = payload.into_inner();
    model.food_truck_id = path.into_inner();
    let truck = state.food_trucks.add_tag(model.into()).await?;
    Ok(created(&truck))
}

#[delete("/food-trucks/{food_truck_id}/tags/{tag_id}")]
pub async fn remove_food_truck_tag(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<web::Json<FoodTruckResponse>> {
    let (food_truck_id, tag_id) = path.into_inner();
    let truck = state
        .food_trucks
        .remove_tag(RemoveFoodTruckTagCommand {
            food_truck_id: food_truck_id.into(),
            tag_id: tag_id.into(),
        })
        .await?;
    Ok(ok(&truck))
}

#[post("/food-trucks/{food_truck_id}/schedules")]
pub async fn create_food_truck_schedule(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<CreateFoodTruckScheduleModel>,
) -> ApiResult<HttpResponse> {
    let mut model = payload.into_inner();
    model.food_truck_id = path.into_inner();
    let truck = state.food_trucks.add_schedule(model.into()).await?;
    Ok(created(&truck))
}

#[put("/food-trucks/{food_truck_id}/schedules/{schedule_id}")]
pub async fn reschedule_food_truck_schedule(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
    payload: web::Json<RescheduleFoodTruckScheduleModel>,
) -> ApiResult<web::Json<FoodTruckResponse>> {
    let (food_truck_id, schedule_id) = path.into_inner();
    let mut model = payload.into_inner();
    model.food_truck_id = food_truck_id;
    model.schedule_id = schedule_id;
    let truck = state.food_trucks.reschedule(model.into()).await?;
    Ok(ok(&truck))
}

#[delete("/food-trucks/{food_truck_id}/schedules/{schedule_id}")]
pub async fn remove_food_truck_schedule(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<web::Json<FoodTruckResponse>> {
    let (food_truck_id, schedule_id) = path.into_inner();
    let truck = state
        .food_trucks
        .remove_schedule(RemoveFoodTruckScheduleCommand {
            food_truck_id: food_truck_id.into(),
            schedule_id: schedule_id.into(),
        })
        .await?;
    Ok(ok(&truck))
}

#[post("/food-trucks/{food_truck_id}/reviews")]
pub async fn create_food_truck_review(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<CreateFoodTruckReviewModel>,
) -> ApiResult<HttpResponse> {
    let mut model = payload.into_inner();
    model.food_truck_id = path.into_inner();
    let truck = state.food_trucks.add_review(model.into()).await?;
    Ok(created(&truck))
}

#[delete("/food-trucks/{food_truck_id}/reviews/{review_id}")]
pub async fn remove_food_truck_review(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<web::Json<FoodTruckResponse>> {
    let (food_truck_id, review_id) = path.into_inner();
    let truck = state
        .food_trucks
        .remove_review(RemoveFoodTruckReviewCommand {
            food_truck_id: food_truck_id.into(),
            review_id: review_id.into(),
        })
        .await?;
    Ok(ok(&truck))
}

#[post("/food-trucks/{food_truck_id}/social-media-accounts")]
pub async fn add_social_media_account(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<AddSocialMediaAccountModel>,
) -> ApiResult<HttpResponse> {
    let mut model = payload.into_inner();
    model.food_truck_id = path.into_inner();
    let truck = state
        .food_trucks
        .add_social_media_account(model.into())
        .await?;
    Ok(created(&truck))
}

#[delete("/food-trucks/{food_truck_id}/social-media-accounts/{account_id}")]
pub async fn remove_social_media_account(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<web::Json<FoodTruckResponse>> {
    let (food_truck_id, account_id) = path.into_inner();
    let truck = state
        .food_trucks
        .remove_social_media_account(RemoveSocialMediaAccountCommand {
            food_truck_id: food_truck_id.into(),
            social_media_account_id: account_id.into(),
        })
        .await?;
    Ok(ok(&truck))
}

#[get("/food-trucks/{food_truck_id}/social-media-urls/{platform_id}")]
pub async fn get_social_media_url(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<web::Json<SocialMediaUrlResponse>> {
    let (food_truck_id, platform_id) = path.into_inner();
    let truck = state
        .food_trucks_query
        .get_food_truck(food_truck_id.into())
        .await?;
    let platform = state
        .reference_data_query
        .get_social_media_platform(platform_id.into())
        .await?;
    let url = truck.social_media_url(&platform).ok_or_else(|| {
        Error::not_found(format!(
            "food truck {food_truck_id} has no account on platform {platform_id}"
        ))
    })?;
    Ok(web::Json(SocialMediaUrlResponse { platform_id, url }))
}

/// Register every food truck route on `config`.
pub fn configure(config: &mut web::ServiceConfig) {
    config
        .service(list_food_trucks)
        .service(create_food_truck)
        .service(get_food_truck)
        .service(update_food_truck)
        .service(delete_food_truck)
        .service(add_food_truck_tag)
        .service(remove_food_truck_tag)
        .service(create_food_truck_schedule)
        .service(reschedule_food_truck_schedule)
        .service(remove_food_truck_schedule)
        .service(create_food_truck_review)
        .service(remove_food_truck_review)
        .service(add_social_media_account)
        .service(remove_social_media_account)
        .service(get_social_media_url);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{
        MockFoodTruckCommand, MockFoodTruckQuery, MockReferenceDataCommand, MockReferenceDataQuery,
    };
    use crate::domain::{FoodTruckId, SocialMediaPlatform, SocialMediaPlatformId};
    use crate::inbound::http::test_utils::state_with;

    #[rstest]
    #[actix_web::test]
    async fn path_id_overrides_body_id() {
        let mut commands = MockFoodTruckCommand::new();
        commands
            .expect_update_food_truck()
            .withf(|command| command.food_truck_id == FoodTruckId::new(12))
            .return_once(|command| {
                FoodTruck::new(command.name, command.description, command.website)
                    .map_err(Error::from)
            });
        let state = state_with(Arc::new(commands), Arc::new(MockFoodTruckQuery::new()));
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let response = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/food-trucks/12")
                .set_json(json!({ "foodTruckId": 99, "name": "Renamed" }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["name"], "Renamed");
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_truck_maps_to_404() {
        let mut queries = MockFoodTruckQuery::new();
        queries
            .expect_get_food_truck()
            .return_once(|id| Err(Error::not_found(format!("food truck {id} not found"))));
        let state = state_with(Arc::new(MockFoodTruckCommand::new()), Arc::new(queries));
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/food-trucks/3").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["code"], "not_found");
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_returns_no_content() {
        let mut commands = MockFoodTruckCommand::new();
        commands
            .expect_delete_food_truck()
            .withf(|command| command.food_truck_id == FoodTruckId::new(5))
            .return_once(|_| Ok(()));
        let state = state_with(Arc::new(commands), Arc::new(MockFoodTruckQuery::new()));
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let response = test::call_service(
            &app,
            test::TestRequest::delete().uri("/food-trucks/5").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    fn instagram() -> SocialMediaPlatform {
        SocialMediaPlatform::from_persisted(
            SocialMediaPlatformId::new(4),
            "Instagram".to_owned(),
            "https://instagram.com/{0}".to_owned(),
        )
    }

    fn url_state(truck: FoodTruck) -> web::Data<HttpState> {
        let mut queries = MockFoodTruckQuery::new();
        queries
            .expect_get_food_truck()
            .withf(|id| *id == FoodTruckId::new(8))
            .return_once(move |_| Ok(truck));
        let mut reference = MockReferenceDataQuery::new();
        reference
            .expect_get_social_media_platform()
            .withf(|id| *id == SocialMediaPlatformId::new(4))
            .return_once(|_| Ok(instagram()));
        web::Data::new(HttpState {
            food_trucks: Arc::new(MockFoodTruckCommand::new()),
            food_trucks_query: Arc::new(queries),
            reference_data: Arc::new(MockReferenceDataCommand::new()),
            reference_data_query: Arc::new(reference),
        })
    }

    #[rstest]
    #[actix_web::test]
    async fn social_media_url_renders_platform_template() {
        let mut truck = FoodTruck::new("Bao Down", None, None).expect("valid truck");
        truck
            .add_social_media_account(&instagram(), "baodown")
            .expect("account added");
        let app =
            test::init_service(App::new().app_data(url_state(truck)).configure(configure)).await;

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri("/food-trucks/8/social-media-urls/4")
                .to_request(),
        )
        .await;

        assert_eq!(body["platformId"], 4);
        assert_eq!(body["url"], "https://instagram.com/baodown");
    }

    #[rstest]
    #[actix_web::test]
    async fn social_media_url_without_account_is_404() {
        let truck = FoodTruck::new("Bao Down", None, None).expect("valid truck");
        let app =
            test::init_service(App::new().app_data(url_state(truck)).configure(configure)).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/food-trucks/8/social-media-urls/4")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
