//! PostgreSQL-backed `FoodTruckRepository`.
//!
//! Saves the whole aggregate in one transaction: the root row first, then
//! each child collection is brought in line with the in-memory aggregate.
//! Updates are guarded by `row_version`; a stale version fails with
//! `RepositoryError::ConcurrencyConflict` and rolls everything back.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{FoodTruckRepository, RepositoryError};
use crate::domain::{FoodTruck, FoodTruckId};

use super::diesel_error_mapping::{dangling_reference, map_diesel_error, map_pool_error};
use super::models::{
    FoodTruckGraph, FoodTruckRow, FoodTruckTagRow, FoodTruckUpdate, NewFoodTruckRow,
    NewFoodTruckTagRow, NewReviewRow, NewScheduleRow, NewSocialMediaAccountRow, ReviewRow,
    ScheduleRow, ScheduleWindowUpdate, SocialMediaAccountRow,
};
use super::pool::DbPool;
use super::schema::{food_truck_tags, food_trucks, reviews, schedules, social_media_accounts};

const ENTITY: &str = "food truck";

/// Diesel-backed food truck aggregate repository.
#[derive(Clone)]
pub struct DieselFoodTruckRepository {
    pool: DbPool,
}

impl DieselFoodTruckRepository {
    /// Create a repository over the shared pool.
    ///
    /// ```rust,no_run
    /// use backend::outbound::persistence::{DbPool, DieselFoodTruckRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/trucks")).await?;
    /// let repository = DieselFoodTruckRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodTruckRepository for DieselFoodTruckRepository {
    async fn load_by_id(&self, id: FoodTruckId) -> Result<FoodTruck, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let root = food_trucks::table
            .find(id.value())
            .select(FoodTruckRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))?;

        let mut graphs = load_graphs(&mut conn, vec![root]).await?;
        graphs
            .pop()
            .map(FoodTruck::from)
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))
    }

    async fn load_all(&self) -> Result<Vec<FoodTruck>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let roots = food_trucks::table
            .order(food_trucks::food_truck_id)
            .select(FoodTruckRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let graphs = load_graphs(&mut conn, roots).await?;
        Ok(graphs.into_iter().map(FoodTruck::from).collect())
    }

    async fn save(&self, food_truck: &FoodTruck) -> Result<FoodTruck, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let graph = conn
            .transaction::<_, RepositoryError, _>(|conn| {
                async move {
                    let id = match food_truck.id() {
                        None => insert_root(conn, food_truck).await?,
                        Some(id) => {
                            update_root(conn, id, food_truck).await?;
                            id
                        }
                    };
                    sync_tags(conn, id, food_truck).await?;
                    sync_schedules(conn, id, food_truck).await?;
                    sync_reviews(conn, id, food_truck).await?;
                    sync_social_media_accounts(conn, id, food_truck).await?;

                    let root = food_trucks::table
                        .find(id.value())
                        .select(FoodTruckRow::as_select())
                        .first(conn)
                        .await?;
                    let mut graphs = load_graphs(conn, vec![root]).await?;
                    graphs
                        .pop()
                        .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))
                }
                .scope_boxed()
            })
            .await
            .map_err(dangling_reference)?;

        debug!(
            food_truck_id = graph.root.food_truck_id,
            row_version = graph.root.row_version,
            "food truck saved"
        );
        Ok(FoodTruck::from(graph))
    }

    async fn delete(&self, id: FoodTruckId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(food_trucks::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if deleted == 0 {
            return Err(RepositoryError::not_found(ENTITY, id.value()));
        }
        Ok(())
    }
}

async fn insert_root(
    conn: &mut AsyncPgConnection,
    food_truck: &FoodTruck,
) -> Result<FoodTruckId, RepositoryError> {
    let id = diesel::insert_into(food_trucks::table)
        .values(&NewFoodTruckRow::from_domain(food_truck))
        .returning(food_trucks::food_truck_id)
        .get_result::<i32>(conn)
        .await?;
    Ok(FoodTruckId::new(id))
}

/// Write the root row if nobody else has bumped its version since load.
async fn update_root(
    conn: &mut AsyncPgConnection,
    id: FoodTruckId,
    food_truck: &FoodTruck,
) -> Result<(), RepositoryError> {
    let expected = food_truck.version();
    let updated = diesel::update(
        food_trucks::table
            .filter(food_trucks::food_truck_id.eq(id.value()))
            .filter(food_trucks::row_version.eq(expected)),
    )
    .set(&FoodTruckUpdate::from_domain(food_truck, expected + 1))
    .execute(conn)
    .await?;

    if updated == 1 {
        return Ok(());
    }

    let exists = diesel::select(diesel::dsl::exists(
        food_trucks::table.filter(food_trucks::food_truck_id.eq(id.value())),
    ))
    .get_result::<bool>(conn)
    .await?;
    if exists {
        Err(RepositoryError::concurrency_conflict(ENTITY, id.value()))
    } else {
        Err(RepositoryError::not_found(ENTITY, id.value()))
    }
}

async fn sync_tags(
    conn: &mut AsyncPgConnection,
    id: FoodTruckId,
    food_truck: &FoodTruck,
) -> Result<(), RepositoryError> {
    let kept: Vec<i32> = food_truck
        .tags()
        .iter()
        .filter_map(|tag| tag.id().map(|tag_id| tag_id.value()))
        .collect();
    diesel::delete(
        food_truck_tags::table
            .filter(food_truck_tags::food_truck_id.eq(id.value()))
            .filter(food_truck_tags::food_truck_tag_id.ne_all(kept)),
    )
    .execute(conn)
    .await?;

    let added: Vec<NewFoodTruckTagRow> = food_truck
        .tags()
        .iter()
        .filter(|tag| tag.id().is_none())
        .map(|tag| NewFoodTruckTagRow::from_domain(id, tag))
        .collect();
    if !added.is_empty() {
        diesel::insert_into(food_truck_tags::table)
            .values(&added)
            .execute(conn)
            .await?;
    }
    Ok(())
}

async fn sync_schedules(
    conn: &mut AsyncPgConnection,
    id: FoodTruckId,
    food_truck: &FoodTruck,
) -> Result<(), RepositoryError> {
    let kept: Vec<i32> = food_truck
        .schedules()
        .iter()
        .filter_map(|schedule| schedule.id().map(|schedule_id| schedule_id.value()))
        .collect();
    diesel::delete(
        schedules::table
            .filter(schedules::food_truck_id.eq(id.value()))
            .filter(schedules::schedule_id.ne_all(kept)),
    )
    .execute(conn)
    .await?;

    let mut added = Vec::new();
    for schedule in food_truck.schedules() {
        match schedule.id() {
            Some(schedule_id) => {
                diesel::update(
                    schedules::table
                        .filter(schedules::schedule_id.eq(schedule_id.value()))
                        .filter(schedules::food_truck_id.eq(id.value())),
                )
                .set(&ScheduleWindowUpdate {
                    start_time: schedule.scheduled_start(),
                    end_time: schedule.scheduled_end(),
                })
                .execute(conn)
                .await?;
            }
            None => added.push(NewScheduleRow::from_domain(id, schedule)),
        }
    }
    if !added.is_empty() {
        diesel::insert_into(schedules::table)
            .values(&added)
            .execute(conn)
            .await?;
    }
    Ok(())
}

async fn sync_reviews(
    conn: &mut AsyncPgConnection,
    id: FoodTruckId,
    food_truck: &FoodTruck,
) -> Result<(), RepositoryError> {
    let kept: Vec<i32> = food_truck
        .reviews()
        .iter()
        .filter_map(|review| review.id().map(|review_id| review_id.value()))
        .collect();
    diesel::delete(
        reviews::table
            .filter(reviews::food_truck_id.eq(id.value()))
            .filter(reviews::review_id.ne_all(kept)),
    )
    .execute(conn)
    .await?;

    let added: Vec<NewReviewRow<'_>> = food_truck
        .reviews()
        .iter()
        .filter(|review| review.id().is_none())
        .map(|review| NewReviewRow::from_domain(id, review))
        .collect();
    if !added.is_empty() {
        diesel::insert_into(reviews::table)
            .values(&added)
            .execute(conn)
            .await?;
    }
    Ok(())
}

async fn sync_social_media_accounts(
    conn: &mut AsyncPgConnection,
    id: FoodTruckId,
    food_truck: &FoodTruck,
) -> Result<(), RepositoryError> {
    let kept: Vec<i32> = food_truck
        .social_media_accounts()
        .iter()
        .filter_map(|account| account.id().map(|account_id| account_id.value()))
        .collect();
    diesel::delete(
        social_media_accounts::table
            .filter(social_media_accounts::food_truck_id.eq(id.value()))
            .filter(social_media_accounts::social_media_account_id.ne_all(kept)),
    )
    .execute(conn)
    .await?;

    let added: Vec<NewSocialMediaAccountRow<'_>> = food_truck
        .social_media_accounts()
        .iter()
        .filter(|account| account.id().is_none())
        .map(|account| NewSocialMediaAccountRow::from_domain(id, account))
        .collect();
    if !added.is_empty() {
        diesel::insert_into(social_media_accounts::table)
            .values(&added)
            .execute(conn)
            .await?;
    }
    Ok(())
}

/// Load the children of `roots` with one query per child table.
async fn load_graphs(
    conn: &mut AsyncPgConnection,
    roots: Vec<FoodTruckRow>,
) -> Result<Vec<FoodTruckGraph>, RepositoryError> {
    let ids: Vec<i32> = roots.iter().map(|root| root.food_truck_id).collect();

    let tags = food_truck_tags::table
        .filter(food_truck_tags::food_truck_id.eq_any(&ids))
        .order(food_truck_tags::food_truck_tag_id)
        .select(FoodTruckTagRow::as_select())
        .load(conn)
        .await?;
    let schedule_rows = schedules_of(&ids)
        .select(ScheduleRow::as_select())
        .load(conn)
        .await?;
    let review_rows = reviews::table
        .filter(reviews::food_truck_id.eq_any(&ids))
        .order(reviews::review_id)
        .select(ReviewRow::as_select())
        .load(conn)
        .await?;
    let account_rows = social_media_accounts::table
        .filter(social_media_accounts::food_truck_id.eq_any(&ids))
        .order(social_media_accounts::social_media_account_id)
        .select(SocialMediaAccountRow::as_select())
        .load(conn)
        .await?;

    Ok(assemble_graphs(
        roots,
        tags,
        schedule_rows,
        review_rows,
        account_rows,
    ))
}

/// Schedules of the given trucks in insertion (key) order.
fn schedules_of(ids: &[i32]) -> schedules::BoxedQuery<'_, Pg> {
    schedules::table
        .filter(schedules::food_truck_id.eq_any(ids))
        .order(schedules::schedule_id)
        .into_boxed()
}

/// Distribute child rows to their roots, preserving the order of both.
fn assemble_graphs(
    roots: Vec<FoodTruckRow>,
    tags: Vec<FoodTruckTagRow>,
    schedule_rows: Vec<ScheduleRow>,
    review_rows: Vec<ReviewRow>,
    account_rows: Vec<SocialMediaAccountRow>,
) -> Vec<FoodTruckGraph> {
    let mut graphs: Vec<FoodTruckGraph> = roots
        .into_iter()
        .map(|root| FoodTruckGraph {
            root,
            tags: Vec::new(),
            schedules: Vec::new(),
            reviews: Vec::new(),
            social_media_accounts: Vec::new(),
        })
        .collect();
    let index: HashMap<i32, usize> = graphs
        .iter()
        .enumerate()
        .map(|(position, graph)| (graph.root.food_truck_id, position))
        .collect();

    for row in tags {
        if let Some(&position) = index.get(&row.food_truck_id) {
            graphs[position].tags.push(row);
        }
    }
    for row in schedule_rows {
        if let Some(&position) = index.get(&row.food_truck_id) {
            graphs[position].schedules.push(row);
        }
    }
    for row in review_rows {
        if let Some(&position) = index.get(&row.food_truck_id) {
            graphs[position].reviews.push(row);
        }
    }
    for row in account_rows {
        if let Some(&position) = index.get(&row.food_truck_id) {
            graphs[position].social_media_accounts.push(row);
        }
    }
    graphs
}
