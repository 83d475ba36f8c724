//! Unit tests for the food truck command and query services.

use std::sync::Arc;

use chrono::{DateTime, Days, TimeZone, Utc};
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ports::{
    MockFoodTruckRepository, MockLocationRepository, MockSocialMediaPlatformRepository,
    MockTagRepository,
};
use crate::domain::{ErrorCode, LocationId, Tag, TagId};
use crate::test_support::MutableClock;

type Service = FoodTruckCommandService<
    MockFoodTruckRepository,
    MockTagRepository,
    MockLocationRepository,
    MockSocialMediaPlatformRepository,
>;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 2, 15, 0, 0)
        .single()
        .expect("valid timestamp")
}

struct Mocks {
    food_trucks: MockFoodTruckRepository,
    tags: MockTagRepository,
    locations: MockLocationRepository,
    platforms: MockSocialMediaPlatformRepository,
}

impl Mocks {
    fn into_service(self) -> Service {
        FoodTruckCommandService::new(
            Arc::new(self.food_trucks),
            Arc::new(self.tags),
            Arc::new(self.locations),
            Arc::new(self.platforms),
            Arc::new(MutableClock::new(now())),
        )
    }
}

#[fixture]
fn mocks() -> Mocks {
    Mocks {
        food_trucks: MockFoodTruckRepository::new(),
        tags: MockTagRepository::new(),
        locations: MockLocationRepository::new(),
        platforms: MockSocialMediaPlatformRepository::new(),
    }
}

fn stored_truck(id: i32) -> FoodTruck {
    let mut truck = FoodTruck::new("Taco Loco", None, None).expect("valid truck");
    truck
        .assign_id(FoodTruckId::new(id))
        .expect("fresh truck has no id");
    truck
}

fn expect_load(mocks: &mut Mocks, truck: FoodTruck) {
    mocks
        .food_trucks
        .expect_load_by_id()
        .return_once(move |_| Ok(truck));
}

fn expect_save_echo(mocks: &mut Mocks) {
    mocks
        .food_trucks
        .expect_save()
        .times(1)
        .returning(|truck| Ok(truck.clone()));
}

#[rstest]
#[tokio::test]
async fn create_saves_new_truck(mut mocks: Mocks) {
    mocks
        .food_trucks
        .expect_save()
        .withf(|truck| truck.id().is_none() && truck.name() == "Taco Loco")
        .times(1)
        .returning(|truck| {
            let mut saved = truck.clone();
            saved.assign_id(FoodTruckId::new(1)).expect("unsaved truck");
            Ok(saved)
        });
    let service = mocks.into_service();

    let saved = service
        .create_food_truck(CreateFoodTruckCommand {
            name: "Taco Loco".to_owned(),
            description: None,
            website: None,
        })
        .await
        .expect("create succeeds");

    assert_eq!(saved.id(), Some(FoodTruckId::new(1)));
}

#[rstest]
#[tokio::test]
async fn create_rejects_blank_name_without_saving(mut mocks: Mocks) {
    mocks.food_trucks.expect_save().never();
    let service = mocks.into_service();

    let err = service
        .create_food_truck(CreateFoodTruckCommand {
            name: "  ".to_owned(),
            description: None,
            website: None,
        })
        .await
        .expect_err("blank name is invalid");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.details(), Some(&json!({ "code": "empty_name" })));
}

#[rstest]
#[tokio::test]
async fn update_is_all_or_nothing(mut mocks: Mocks) {
    expect_load(&mut mocks, stored_truck(4));
    mocks.food_trucks.expect_save().never();
    let service = mocks.into_service();

    let err = service
        .update_food_truck(UpdateFoodTruckCommand {
            food_truck_id: FoodTruckId::new(4),
            name: "Renamed".to_owned(),
            description: None,
            website: Some(String::new()),
        })
        .await
        .expect_err("blank website is invalid");

    assert_eq!(err.details(), Some(&json!({ "code": "empty_website" })));
}

#[rstest]
#[tokio::test]
async fn update_surfaces_concurrency_conflict(mut mocks: Mocks) {
    expect_load(&mut mocks, stored_truck(4));
    mocks
        .food_trucks
        .expect_save()
        .return_once(|_| Err(RepositoryError::concurrency_conflict("food truck", 4)));
    let service = mocks.into_service();

    let err = service
        .update_food_truck(UpdateFoodTruckCommand {
            food_truck_id: FoodTruckId::new(4),
            name: "Renamed".to_owned(),
            description: None,
            website: None,
        })
        .await
        .expect_err("stale write");

    assert_eq!(err.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn add_tag_links_loaded_tag(mut mocks: Mocks) {
    mocks
        .tags
        .expect_load_by_id()
        .withf(|id| *id == TagId::new(9))
        .return_once(|id| Ok(Tag::from_persisted(id, "Vegan".to_owned())));
    expect_load(&mut mocks, stored_truck(2));
    expect_save_echo(&mut mocks);
    let service = mocks.into_service();

    let saved = service
        .add_tag(AddFoodTruckTagCommand {
            food_truck_id: FoodTruckId::new(2),
            tag_id: TagId::new(9),
        })
        .await
        .expect("tag added");

    assert!(saved.has_tag(TagId::new(9)));
    assert_eq!(saved.tags()[0].food_truck_id(), Some(FoodTruckId::new(2)));
}

#[rstest]
#[tokio::test]
async fn add_tag_twice_is_rejected(mut mocks: Mocks) {
    let tag = Tag::from_persisted(TagId::new(9), "Vegan".to_owned());
    let mut truck = stored_truck(2);
    truck.add_tag(&tag).expect("first link");
    mocks.tags.expect_load_by_id().return_once(move |_| Ok(tag));
    expect_load(&mut mocks, truck);
    mocks.food_trucks.expect_save().never();
    let service = mocks.into_service();

    let err = service
        .add_tag(AddFoodTruckTagCommand {
            food_truck_id: FoodTruckId::new(2),
            tag_id: TagId::new(9),
        })
        .await
        .expect_err("duplicate link");

    assert_eq!(err.details(), Some(&json!({ "code": "duplicate_tag" })));
}

#[rstest]
#[tokio::test]
async fn schedule_at_unknown_location_is_not_found(mut mocks: Mocks) {
    mocks
        .locations
        .expect_load_by_id()
        .return_once(|id| Err(RepositoryError::not_found("location", id.value())));
    mocks.food_trucks.expect_load_by_id().never();
    let service = mocks.into_service();

    let err = service
        .add_schedule(CreateFoodTruckScheduleCommand {
            food_truck_id: FoodTruckId::new(2),
            location_id: LocationId::new(77),
            scheduled_start: now(),
            scheduled_end: now() + chrono::Duration::hours(3),
        })
        .await
        .expect_err("unknown location");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "location 77 not found");
}

#[rstest]
#[tokio::test]
async fn review_dated_tomorrow_is_rejected(mut mocks: Mocks) {
    expect_load(&mut mocks, stored_truck(2));
    mocks.food_trucks.expect_save().never();
    let service = mocks.into_service();
    let tomorrow = now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .expect("valid date");

    let err = service
        .add_review(CreateFoodTruckReviewCommand {
            food_truck_id: FoodTruckId::new(2),
            review_date: tomorrow,
            rating: 5,
            details: "Early".to_owned(),
        })
        .await
        .expect_err("future review");

    assert_eq!(
        err.details(),
        Some(&json!({ "code": "review_date_in_future" }))
    );
}

#[rstest]
#[tokio::test]
async fn review_dated_today_is_saved(mut mocks: Mocks) {
    expect_load(&mut mocks, stored_truck(2));
    expect_save_echo(&mut mocks);
    let service = mocks.into_service();

    let saved = service
        .add_review(CreateFoodTruckReviewCommand {
            food_truck_id: FoodTruckId::new(2),
            review_date: now().date_naive(),
            rating: 4,
            details: "Great".to_owned(),
        })
        .await
        .expect("review saved");

    assert_eq!(saved.average_rating(), Some(4.0));
}

#[rstest]
#[tokio::test]
async fn delete_missing_truck_is_not_found(mut mocks: Mocks) {
    mocks
        .food_trucks
        .expect_delete()
        .return_once(|id| Err(RepositoryError::not_found("food truck", id.value())));
    let service = mocks.into_service();

    let err = service
        .delete_food_truck(DeleteFoodTruckCommand {
            food_truck_id: FoodTruckId::new(8),
        })
        .await
        .expect_err("missing truck");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn query_maps_connection_failures() {
    let mut repo = MockFoodTruckRepository::new();
    repo.expect_load_all()
        .return_once(|| Err(RepositoryError::connection("pool timed out")));
    let service = FoodTruckQueryService::new(Arc::new(repo));

    let err = service
        .list_food_trucks()
        .await
        .expect_err("connection failure");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[case(RepositoryError::not_found("tag", 1), ErrorCode::NotFound)]
#[case(RepositoryError::concurrency_conflict("food truck", 1), ErrorCode::Conflict)]
#[case(RepositoryError::reference_in_use("location 1"), ErrorCode::Conflict)]
#[case(RepositoryError::missing_reference("location 1"), ErrorCode::NotFound)]
#[case(RepositoryError::duplicate("tags.tag_name"), ErrorCode::Conflict)]
#[case(RepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(RepositoryError::query("syntax"), ErrorCode::InternalError)]
fn repository_errors_map_to_codes(#[case] error: RepositoryError, #[case] code: ErrorCode) {
    assert_eq!(map_repository_error(error).code(), code);
}
