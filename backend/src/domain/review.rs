//! Customer review entity.

use chrono::NaiveDate;
use mockable::Clock;

use super::ids::assign_once;
use super::{FoodTruckId, Rating, ReviewId, ValidationError};

/// A rated review left for a food truck.
///
/// ## Invariants
/// - `rating` lies within [`Rating::MIN`]..=[`Rating::MAX`].
/// - `review_date` is not after today (UTC) at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: Option<ReviewId>,
    food_truck_id: Option<FoodTruckId>,
    review_date: NaiveDate,
    rating: Rating,
    details: String,
}

impl Review {
    /// Create a detached review, validating rating bounds and date.
    pub fn new(
        review_date: NaiveDate,
        rating: i32,
        details: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        let rating = Rating::new(rating)?;
        if review_date > clock.utc().date_naive() {
            return Err(ValidationError::ReviewDateInFuture);
        }
        Ok(Self {
            id: None,
            food_truck_id: None,
            review_date,
            rating,
            details: details.into(),
        })
    }

    /// Rebuild a stored review. Stored rows are trusted: a review written
    /// yesterday must still load even though "today" has moved on.
    pub(crate) fn from_persisted(
        id: ReviewId,
        food_truck_id: FoodTruckId,
        review_date: NaiveDate,
        rating: i32,
        details: String,
    ) -> Self {
        Self {
            id: Some(id),
            food_truck_id: Some(food_truck_id),
            review_date,
            rating: Rating::from_persisted(rating),
            details,
        }
    }

    /// Store-assigned key, if saved.
    pub fn id(&self) -> Option<ReviewId> {
        self.id
    }

    /// Reviewed food truck, once the owner has been saved.
    pub fn food_truck_id(&self) -> Option<FoodTruckId> {
        self.food_truck_id
    }

    /// Day the review was written.
    pub fn review_date(&self) -> NaiveDate {
        self.review_date
    }

    /// Score.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Free-text body.
    pub fn details(&self) -> &str {
        self.details.as_str()
    }

    pub(crate) fn assign_id(&mut self, id: ReviewId) -> Result<(), ValidationError> {
        assign_once(&mut self.id, id)
    }

    pub(crate) fn attach_to(&mut self, food_truck_id: FoodTruckId) {
        self.food_truck_id = Some(food_truck_id);
    }
}
