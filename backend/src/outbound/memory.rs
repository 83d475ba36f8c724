//! In-memory repository adapters.
//!
//! All four repositories share one [`InMemoryStore`] so they can apply the
//! same rules the relational schema enforces: serial id assignment per
//! table, cascade of owned children with their food truck, restrict-delete
//! of referenced tags, locations and platforms, unique tag text, and the
//! `row_version` check on food truck updates. Used by tests and by the
//! server when no database URL is configured.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    FoodTruckRepository, LocationRepository, RepositoryError, SocialMediaPlatformRepository,
    TagRepository,
};
use crate::domain::{
    FoodTruck, FoodTruckId, FoodTruckTagId, INITIAL_VERSION, Location, LocationId, ReviewId,
    ScheduleId, SocialMediaAccountId, SocialMediaPlatform, SocialMediaPlatformId, Tag, TagId,
};

#[derive(Debug, Default)]
struct Sequences {
    food_truck: i32,
    tag: i32,
    food_truck_tag: i32,
    location: i32,
    schedule: i32,
    review: i32,
    platform: i32,
    account: i32,
}

fn next(sequence: &mut i32) -> i32 {
    *sequence += 1;
    *sequence
}

#[derive(Debug, Default)]
struct StoreState {
    sequences: Sequences,
    food_trucks: BTreeMap<i32, FoodTruck>,
    tags: BTreeMap<i32, Tag>,
    locations: BTreeMap<i32, Location>,
    platforms: BTreeMap<i32, SocialMediaPlatform>,
}

impl StoreState {
    fn check_references(&self, food_truck: &FoodTruck) -> Result<(), RepositoryError> {
        for link in food_truck.tags() {
            if !self.tags.contains_key(&link.tag_id().value()) {
                return Err(RepositoryError::missing_reference(
                    "food_truck_tags_tag_id_fkey",
                ));
            }
        }
        for schedule in food_truck.schedules() {
            if !self.locations.contains_key(&schedule.location_id().value()) {
                return Err(RepositoryError::missing_reference(
                    "schedules_location_id_fkey",
                ));
            }
        }
        for account in food_truck.social_media_accounts() {
            if !self.platforms.contains_key(&account.platform_id().value()) {
                return Err(RepositoryError::missing_reference(
                    "social_media_accounts_platform_id_fkey",
                ));
            }
        }
        Ok(())
    }

    fn assign_child_ids(&mut self, food_truck: &mut FoodTruck) -> Result<(), RepositoryError> {
        let sequences = &mut self.sequences;
        for link in food_truck.tags_mut() {
            if link.id().is_none() {
                link.assign_id(FoodTruckTagId::new(next(&mut sequences.food_truck_tag)))
                    .map_err(invariant_breach)?;
            }
        }
        for schedule in food_truck.schedules_mut() {
            if schedule.id().is_none() {
                schedule
                    .assign_id(ScheduleId::new(next(&mut sequences.schedule)))
                    .map_err(invariant_breach)?;
            }
        }
        for review in food_truck.reviews_mut() {
            if review.id().is_none() {
                review
                    .assign_id(ReviewId::new(next(&mut sequences.review)))
                    .map_err(invariant_breach)?;
            }
        }
        for account in food_truck.social_media_accounts_mut() {
            if account.id().is_none() {
                account
                    .assign_id(SocialMediaAccountId::new(next(&mut sequences.account)))
                    .map_err(invariant_breach)?;
            }
        }
        Ok(())
    }
}

fn invariant_breach(error: crate::domain::ValidationError) -> RepositoryError {
    RepositoryError::query(error.to_string())
}

/// Shared state behind the in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn food_trucks(&self) -> InMemoryFoodTruckRepository {
        InMemoryFoodTruckRepository {
            store: self.clone(),
        }
    }

    pub fn tags(&self) -> InMemoryTagRepository {
        InMemoryTagRepository {
            store: self.clone(),
        }
    }

    pub fn locations(&self) -> InMemoryLocationRepository {
        InMemoryLocationRepository {
            store: self.clone(),
        }
    }

    pub fn social_media_platforms(&self) -> InMemorySocialMediaPlatformRepository {
        InMemorySocialMediaPlatformRepository {
            store: self.clone(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::connection("in-memory store lock poisoned"))
    }
}

/// In-memory `FoodTruckRepository`.
#[derive(Debug, Clone)]
pub struct InMemoryFoodTruckRepository {
    store: InMemoryStore,
}

#[async_trait]
impl FoodTruckRepository for InMemoryFoodTruckRepository {
    async fn load_by_id(&self, id: FoodTruckId) -> Result<FoodTruck, RepositoryError> {
        let state = self.store.lock()?;
        state
            .food_trucks
            .get(&id.value())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("food truck", id.value()))
    }

    async fn load_all(&self) -> Result<Vec<FoodTruck>, RepositoryError> {
        let state = self.store.lock()?;
        Ok(state.food_trucks.values().cloned().collect())
    }

    async fn save(&self, food_truck: &FoodTruck) -> Result<FoodTruck, RepositoryError> {
        let mut state = self.store.lock()?;
        state.check_references(food_truck)?;

        let mut saved = food_truck.clone();
        match food_truck.id() {
            None => {
                let id = FoodTruckId::new(next(&mut state.sequences.food_truck));
                saved.assign_id(id).map_err(invariant_breach)?;
                saved.set_version(INITIAL_VERSION);
            }
            Some(id) => {
                let stored = state
                    .food_trucks
                    .get(&id.value())
                    .ok_or_else(|| RepositoryError::not_found("food truck", id.value()))?;
                if stored.version() != food_truck.version() {
                    return Err(RepositoryError::concurrency_conflict(
                        "food truck",
                        id.value(),
                    ));
                }
                saved.set_version(food_truck.version() + 1);
            }
        }
        state.assign_child_ids(&mut saved)?;

        let id = saved.id().map_or(0, FoodTruckId::value);
        debug!(food_truck_id = id, row_version = saved.version(), "food truck saved");
        state.food_trucks.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: FoodTruckId) -> Result<(), RepositoryError> {
        let mut state = self.store.lock()?;
        state
            .food_trucks
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("food truck", id.value()))
    }
}

/// In-memory `TagRepository`.
#[derive(Debug, Clone)]
pub struct InMemoryTagRepository {
    store: InMemoryStore,
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn load_by_id(&self, id: TagId) -> Result<Tag, RepositoryError> {
        let state = self.store.lock()?;
        state
            .tags
            .get(&id.value())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("tag", id.value()))
    }

    async fn load_all(&self) -> Result<Vec<Tag>, RepositoryError> {
        let state = self.store.lock()?;
        Ok(state.tags.values().cloned().collect())
    }

    async fn save(&self, tag: &Tag) -> Result<Tag, RepositoryError> {
        let mut state = self.store.lock()?;
        let clash = state
            .tags
            .values()
            .any(|other| other.text() == tag.text() && other.id() != tag.id());
        if clash {
            return Err(RepositoryError::duplicate("tags_tag_name_key"));
        }

        let mut saved = tag.clone();
        let id = match tag.id() {
            None => {
                let id = TagId::new(next(&mut state.sequences.tag));
                saved.assign_id(id).map_err(invariant_breach)?;
                id
            }
            Some(id) if state.tags.contains_key(&id.value()) => id,
            Some(id) => return Err(RepositoryError::not_found("tag", id.value())),
        };
        state.tags.insert(id.value(), saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: TagId) -> Result<(), RepositoryError> {
        let mut state = self.store.lock()?;
        if state.food_trucks.values().any(|truck| truck.has_tag(id)) {
            return Err(RepositoryError::reference_in_use(
                "food_truck_tags_tag_id_fkey",
            ));
        }
        state
            .tags
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("tag", id.value()))
    }
}

/// In-memory `LocationRepository`.
#[derive(Debug, Clone)]
pub struct InMemoryLocationRepository {
    store: InMemoryStore,
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn load_by_id(&self, id: LocationId) -> Result<Location, RepositoryError> {
        let state = self.store.lock()?;
        state
            .locations
            .get(&id.value())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("location", id.value()))
    }

    async fn load_all(&self) -> Result<Vec<Location>, RepositoryError> {
        let state = self.store.lock()?;
        Ok(state.locations.values().cloned().collect())
    }

    async fn save(&self, location: &Location) -> Result<Location, RepositoryError> {
        let mut state = self.store.lock()?;
        let mut saved = location.clone();
        let id = match location.id() {
            None => {
                let id = LocationId::new(next(&mut state.sequences.location));
                saved.assign_id(id).map_err(invariant_breach)?;
                id
            }
            Some(id) if state.locations.contains_key(&id.value()) => id,
            Some(id) => return Err(RepositoryError::not_found("location", id.value())),
        };
        state.locations.insert(id.value(), saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: LocationId) -> Result<(), RepositoryError> {
        let mut state = self.store.lock()?;
        let in_use = state.food_trucks.values().any(|truck| {
            truck
                .schedules()
                .iter()
                .any(|schedule| schedule.location_id() == id)
        });
        if in_use {
            return Err(RepositoryError::reference_in_use(
                "schedules_location_id_fkey",
            ));
        }
        state
            .locations
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("location", id.value()))
    }
}

/// In-memory `SocialMediaPlatformRepository`.
#[derive(Debug, Clone)]
pub struct InMemorySocialMediaPlatformRepository {
    store: InMemoryStore,
}

#[async_trait]
impl SocialMediaPlatformRepository for InMemorySocialMediaPlatformRepository {
    async fn load_by_id(
        &self,
        id: SocialMediaPlatformId,
    ) -> Result<SocialMediaPlatform, RepositoryError> {
        let state = self.store.lock()?;
        state
            .platforms
            .get(&id.value())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("social media platform", id.value()))
    }

    async fn load_all(&self) -> Result<Vec<SocialMediaPlatform>, RepositoryError> {
        let state = self.store.lock()?;
        Ok(state.platforms.values().cloned().collect())
    }

    async fn save(
        &self,
        platform: &SocialMediaPlatform,
    ) -> Result<SocialMediaPlatform, RepositoryError> {
        let mut state = self.store.lock()?;
        let mut saved = platform.clone();
        let id = match platform.id() {
            None => {
                let id = SocialMediaPlatformId::new(next(&mut state.sequences.platform));
                saved.assign_id(id).map_err(invariant_breach)?;
                id
            }
            Some(id) if state.platforms.contains_key(&id.value()) => id,
            Some(id) => {
                return Err(RepositoryError::not_found(
                    "social media platform",
                    id.value(),
                ));
            }
        };
        state.platforms.insert(id.value(), saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: SocialMediaPlatformId) -> Result<(), RepositoryError> {
        let mut state = self.store.lock()?;
        let in_use = state.food_trucks.values().any(|truck| {
            truck
                .social_media_accounts()
                .iter()
                .any(|account| account.platform_id() == id)
        });
        if in_use {
            return Err(RepositoryError::reference_in_use(
                "social_media_accounts_platform_id_fkey",
            ));
        }
        state
            .platforms
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("social media platform", id.value()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::LocationDraft;

    #[fixture]
    fn store() -> InMemoryStore {
        InMemoryStore::new()
    }

    fn draft(name: &str) -> LocationDraft {
        LocationDraft {
            name: name.to_owned(),
            street_address: "1 Main St".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip_code: "62701".to_owned(),
        }
    }

    async fn saved_location(store: &InMemoryStore) -> Location {
        store
            .locations()
            .save(&Location::new(draft("Market")).expect("valid location"))
            .await
            .expect("location saved")
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_assigned_per_table(store: InMemoryStore) {
        let first = store
            .tags()
            .save(&Tag::new("Tacos").expect("valid"))
            .await
            .expect("saved");
        let second = store
            .tags()
            .save(&Tag::new("Vegan").expect("valid"))
            .await
            .expect("saved");
        let truck = store
            .food_trucks()
            .save(&FoodTruck::new("Bao Down", None, None).expect("valid"))
            .await
            .expect("saved");

        assert_eq!(first.id(), Some(TagId::new(1)));
        assert_eq!(second.id(), Some(TagId::new(2)));
        assert_eq!(truck.id(), Some(FoodTruckId::new(1)));
        assert_eq!(truck.version(), INITIAL_VERSION);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_tag_text_is_rejected(store: InMemoryStore) {
        store
            .tags()
            .save(&Tag::new("Tacos").expect("valid"))
            .await
            .expect("saved");
        let err = store
            .tags()
            .save(&Tag::new("Tacos").expect("valid"))
            .await
            .expect_err("text clash");
        assert!(matches!(err, RepositoryError::Duplicate { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn stale_version_is_a_conflict(store: InMemoryStore) {
        let repo = store.food_trucks();
        let saved = repo
            .save(&FoodTruck::new("Bao Down", None, None).expect("valid"))
            .await
            .expect("saved");
        let mut first = saved.clone();
        first.rename("Bao Up").expect("valid name");
        repo.save(&first).await.expect("first writer wins");

        let mut second = saved;
        second.rename("Bao Sideways").expect("valid name");
        let err = repo.save(&second).await.expect_err("stale writer");

        assert!(matches!(err, RepositoryError::ConcurrencyConflict { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn referenced_location_cannot_be_deleted(store: InMemoryStore) {
        let location = saved_location(&store).await;
        let location_id = location.id().expect("saved location");
        let mut truck = FoodTruck::new("Bao Down", None, None).expect("valid");
        let start = Utc
            .with_ymd_and_hms(2026, 6, 1, 11, 0, 0)
            .single()
            .expect("valid");
        truck
            .add_schedule(location_id, start, start + Duration::hours(4))
            .expect("valid window");
        let saved = store.food_trucks().save(&truck).await.expect("saved");
        assert!(saved.schedules()[0].id().is_some());

        let err = store
            .locations()
            .delete(location_id)
            .await
            .expect_err("location in use");
        assert!(matches!(err, RepositoryError::ReferenceInUse { .. }));

        store
            .food_trucks()
            .delete(saved.id().expect("saved truck"))
            .await
            .expect("truck deleted");
        store
            .locations()
            .delete(location_id)
            .await
            .expect("location free after cascade");
    }

    #[rstest]
    #[tokio::test]
    async fn schedules_reload_in_insertion_order(store: InMemoryStore) {
        let location_id = saved_location(&store).await.id().expect("saved location");
        let at = |hour| {
            Utc.with_ymd_and_hms(2026, 6, 1, hour, 0, 0)
                .single()
                .expect("valid")
        };
        let mut truck = FoodTruck::new("Bao Down", None, None).expect("valid");
        truck
            .add_schedule(location_id, at(14), at(16))
            .expect("afternoon window");
        truck
            .add_schedule(location_id, at(10), at(12))
            .expect("morning window");
        let saved = store.food_trucks().save(&truck).await.expect("saved");

        let reloaded = store
            .food_trucks()
            .load_by_id(saved.id().expect("saved truck"))
            .await
            .expect("reloaded");
        let starts: Vec<_> = reloaded
            .schedules()
            .iter()
            .map(|schedule| schedule.scheduled_start())
            .collect();
        assert_eq!(starts, vec![at(14), at(10)]);
    }

    #[rstest]
    #[tokio::test]
    async fn schedule_at_unknown_location_is_rejected(store: InMemoryStore) {
        let mut truck = FoodTruck::new("Bao Down", None, None).expect("valid");
        let start = Utc
            .with_ymd_and_hms(2026, 6, 1, 11, 0, 0)
            .single()
            .expect("valid");
        truck
            .add_schedule(LocationId::new(40), start, start + Duration::hours(1))
            .expect("valid window");

        let err = store
            .food_trucks()
            .save(&truck)
            .await
            .expect_err("dangling location");
        assert!(matches!(err, RepositoryError::MissingReference { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_rows_are_not_found(store: InMemoryStore) {
        let err = store
            .food_trucks()
            .delete(FoodTruckId::new(5))
            .await
            .expect_err("nothing stored");
        assert_eq!(err, RepositoryError::not_found("food truck", 5));

        let err = store
            .social_media_platforms()
            .load_by_id(SocialMediaPlatformId::new(2))
            .await
            .expect_err("nothing stored");
        assert_eq!(err, RepositoryError::not_found("social media platform", 2));
    }
}
