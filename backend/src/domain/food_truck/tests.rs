//! Behaviour of the FoodTruck aggregate.

use chrono::{Days, TimeZone};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::{SocialMediaPlatformId, TagId};
use crate::test_support::MutableClock;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 12, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn clock() -> MutableClock {
    MutableClock::new(at(12))
}

#[fixture]
fn truck() -> FoodTruck {
    FoodTruck::new(
        "Taco Loco",
        Some("Street tacos".to_owned()),
        Some("https://tacoloco.example".to_owned()),
    )
    .expect("valid truck")
}

#[fixture]
fn saved_truck() -> FoodTruck {
    FoodTruck::from_persisted(PersistedFoodTruck {
        id: FoodTruckId::new(10),
        name: "Taco Loco".to_owned(),
        description: None,
        website: None,
        version: 3,
        tags: vec![FoodTruckTag::from_persisted(
            crate::domain::FoodTruckTagId::new(1),
            FoodTruckId::new(10),
            TagId::new(5),
        )],
        schedules: vec![Schedule::from_persisted(
            ScheduleId::new(2),
            FoodTruckId::new(10),
            LocationId::new(4),
            at(9),
            at(14),
        )],
        reviews: vec![Review::from_persisted(
            ReviewId::new(3),
            FoodTruckId::new(10),
            at(12).date_naive(),
            4,
            "Solid".to_owned(),
        )],
        social_media_accounts: vec![SocialMediaAccount::from_persisted(
            SocialMediaAccountId::new(6),
            FoodTruckId::new(10),
            SocialMediaPlatformId::new(1),
            "tacoloco".to_owned(),
        )],
    })
}

fn stored_tag(id: i32, text: &str) -> Tag {
    Tag::from_persisted(TagId::new(id), text.to_owned())
}

fn stored_platform(id: i32) -> SocialMediaPlatform {
    SocialMediaPlatform::from_persisted(
        SocialMediaPlatformId::new(id),
        "Instagram".to_owned(),
        "https://instagram.com/{0}".to_owned(),
    )
}

#[rstest]
fn new_truck_has_no_id_or_children(truck: FoodTruck) {
    assert_eq!(truck.id(), None);
    assert_eq!(truck.name(), "Taco Loco");
    assert_eq!(truck.description(), Some("Street tacos"));
    assert_eq!(truck.website(), Some("https://tacoloco.example"));
    assert_eq!(truck.version(), INITIAL_VERSION);
    assert!(truck.tags().is_empty());
    assert!(truck.schedules().is_empty());
    assert!(truck.reviews().is_empty());
    assert!(truck.social_media_accounts().is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_name_is_rejected(#[case] name: &str) {
    assert_eq!(
        FoodTruck::new(name, None, None),
        Err(ValidationError::EmptyName)
    );
}

#[rstest]
fn blank_website_is_rejected() {
    assert_eq!(
        FoodTruck::new("Taco Loco", None, Some(" ".to_owned())),
        Err(ValidationError::EmptyWebsite)
    );
}

#[rstest]
fn failed_rename_leaves_truck_unchanged(mut truck: FoodTruck) {
    let before = truck.clone();
    assert_eq!(truck.rename(""), Err(ValidationError::EmptyName));
    assert_eq!(truck, before);
}

#[rstest]
fn update_details_replaces_both_fields(mut truck: FoodTruck) {
    truck
        .update_details(None, Some("https://new.example".to_owned()))
        .expect("valid details");
    assert_eq!(truck.description(), None);
    assert_eq!(truck.website(), Some("https://new.example"));
}

#[rstest]
fn add_tag_rejects_duplicates(mut truck: FoodTruck) {
    let tacos = stored_tag(1, "Tacos");
    truck.add_tag(&tacos).expect("first add");
    assert_eq!(
        truck.add_tag(&tacos),
        Err(ValidationError::DuplicateTag { tag_id: 1 })
    );
    assert_eq!(truck.tags().len(), 1);
    assert!(truck.has_tag(TagId::new(1)));
}

#[rstest]
fn add_tag_requires_saved_tag(mut truck: FoodTruck) {
    let tag = Tag::new("Vegan").expect("valid tag");
    assert_eq!(
        truck.add_tag(&tag),
        Err(ValidationError::UnsavedReference { entity: "tag" })
    );
}

#[rstest]
fn remove_missing_tag_is_distinguishable(mut truck: FoodTruck) {
    assert_eq!(
        truck.remove_tag(TagId::new(99)),
        Err(ValidationError::UnknownChild {
            kind: ChildKind::Tag,
            id: 99
        })
    );
}

#[rstest]
fn remove_tag_unlinks(mut saved_truck: FoodTruck) {
    saved_truck.remove_tag(TagId::new(5)).expect("linked tag");
    assert!(!saved_truck.has_tag(TagId::new(5)));
}

#[rstest]
fn invalid_schedule_is_not_added(mut truck: FoodTruck) {
    assert_eq!(
        truck.add_schedule(LocationId::new(1), at(14), at(9)),
        Err(ValidationError::InvalidTimeRange)
    );
    assert!(truck.schedules().is_empty());
}

#[rstest]
fn schedule_added_to_saved_truck_is_attached(mut saved_truck: FoodTruck) {
    saved_truck
        .add_schedule(LocationId::new(1), at(15), at(18))
        .expect("valid schedule");
    let added = saved_truck.schedules().last().expect("schedule added");
    assert_eq!(added.food_truck_id(), Some(FoodTruckId::new(10)));
    assert_eq!(added.id(), None);
}

#[rstest]
fn reschedule_moves_window(mut saved_truck: FoodTruck) {
    saved_truck
        .reschedule(ScheduleId::new(2), at(10), at(16))
        .expect("valid window");
    assert_eq!(saved_truck.schedules()[0].scheduled_end(), at(16));

    assert_eq!(
        saved_truck.reschedule(ScheduleId::new(2), at(16), at(10)),
        Err(ValidationError::InvalidTimeRange)
    );
    assert_eq!(saved_truck.schedules()[0].scheduled_start(), at(10));
}

#[rstest]
fn reschedule_rejects_unknown_id(mut saved_truck: FoodTruck) {
    assert_eq!(
        saved_truck.reschedule(ScheduleId::new(77), at(10), at(16)),
        Err(ValidationError::UnknownChild {
            kind: ChildKind::Schedule,
            id: 77,
        })
    );
}

#[rstest]
fn remove_schedule_rejects_unknown_id(mut saved_truck: FoodTruck) {
    assert_eq!(
        saved_truck.remove_schedule(ScheduleId::new(77)),
        Err(ValidationError::UnknownChild {
            kind: ChildKind::Schedule,
            id: 77
        })
    );
    saved_truck
        .remove_schedule(ScheduleId::new(2))
        .expect("known schedule");
    assert!(saved_truck.schedules().is_empty());
}

#[rstest]
fn review_in_future_is_rejected(mut truck: FoodTruck, clock: MutableClock) {
    let tomorrow = at(12)
        .date_naive()
        .checked_add_days(Days::new(1))
        .expect("valid date");
    assert_eq!(
        truck.add_review(tomorrow, 5, "", &clock),
        Err(ValidationError::ReviewDateInFuture)
    );
    assert!(truck.reviews().is_empty());
}

#[rstest]
fn average_rating_tracks_reviews(mut saved_truck: FoodTruck, clock: MutableClock) {
    saved_truck
        .add_review(at(12).date_naive(), 1, "Cold fries", &clock)
        .expect("valid review");
    assert_eq!(saved_truck.average_rating(), Some(2.5));

    saved_truck
        .remove_review(ReviewId::new(3))
        .expect("known review");
    assert_eq!(saved_truck.average_rating(), Some(1.0));
}

#[rstest]
fn unreviewed_truck_has_no_average(truck: FoodTruck) {
    assert_eq!(truck.average_rating(), None);
}

#[rstest]
fn one_account_per_platform(mut truck: FoodTruck) {
    let platform = stored_platform(1);
    truck
        .add_social_media_account(&platform, "tacoloco")
        .expect("first account");
    assert_eq!(
        truck.add_social_media_account(&platform, "tacoloco2"),
        Err(ValidationError::DuplicateSocialMediaAccount { platform_id: 1 })
    );
    assert_eq!(
        truck.social_media_url(&platform).as_deref(),
        Some("https://instagram.com/tacoloco")
    );
}

#[rstest]
fn social_media_url_is_none_without_account(truck: FoodTruck) {
    assert_eq!(truck.social_media_url(&stored_platform(2)), None);
}

#[rstest]
fn remove_social_media_account_by_id(mut saved_truck: FoodTruck) {
    saved_truck
        .remove_social_media_account(SocialMediaAccountId::new(6))
        .expect("known account");
    assert!(saved_truck.social_media_accounts().is_empty());
    assert!(matches!(
        saved_truck.remove_social_media_account(SocialMediaAccountId::new(6)),
        Err(ValidationError::UnknownChild {
            kind: ChildKind::SocialMediaAccount,
            ..
        })
    ));
}

#[rstest]
fn assign_id_attaches_children_and_is_single_use(mut truck: FoodTruck, clock: MutableClock) {
    truck
        .add_tag(&stored_tag(1, "Tacos"))
        .expect("valid tag");
    truck
        .add_review(at(8).date_naive(), 5, "Great", &clock)
        .expect("valid review");

    truck.assign_id(FoodTruckId::new(42)).expect("first assignment");

    assert_eq!(truck.tags()[0].food_truck_id(), Some(FoodTruckId::new(42)));
    assert_eq!(
        truck.reviews()[0].food_truck_id(),
        Some(FoodTruckId::new(42))
    );
    assert_eq!(
        truck.assign_id(FoodTruckId::new(43)),
        Err(ValidationError::IdAlreadyAssigned)
    );
}
