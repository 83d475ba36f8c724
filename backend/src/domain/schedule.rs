//! Schedule entity: a food truck parked at a location for a time window.

use chrono::{DateTime, Utc};

use super::ids::assign_once;
use super::{FoodTruckId, LocationId, ScheduleId, ValidationError};

/// A planned stop of a food truck at a [`crate::domain::Location`].
///
/// ## Invariants
/// - `scheduled_start < scheduled_end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    id: Option<ScheduleId>,
    food_truck_id: Option<FoodTruckId>,
    location_id: LocationId,
    scheduled_start: DateTime<Utc>,
    scheduled_end: DateTime<Utc>,
}

impl Schedule {
    /// Create a detached schedule, validating the time window.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{LocationId, Schedule, ValidationError};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let nine = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
    /// let two = Utc.with_ymd_and_hms(2026, 5, 1, 14, 0, 0).unwrap();
    /// assert!(Schedule::new(LocationId::new(7), nine, two).is_ok());
    /// assert_eq!(
    ///     Schedule::new(LocationId::new(7), two, nine),
    ///     Err(ValidationError::InvalidTimeRange)
    /// );
    /// ```
    pub fn new(
        location_id: LocationId,
        scheduled_start: DateTime<Utc>,
        scheduled_end: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        validate_window(scheduled_start, scheduled_end)?;
        Ok(Self {
            id: None,
            food_truck_id: None,
            location_id,
            scheduled_start,
            scheduled_end,
        })
    }

    pub(crate) fn from_persisted(
        id: ScheduleId,
        food_truck_id: FoodTruckId,
        location_id: LocationId,
        scheduled_start: DateTime<Utc>,
        scheduled_end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            food_truck_id: Some(food_truck_id),
            location_id,
            scheduled_start,
            scheduled_end,
        }
    }

    /// Store-assigned key, if saved.
    pub fn id(&self) -> Option<ScheduleId> {
        self.id
    }

    /// Owning food truck, once the owner has been saved.
    pub fn food_truck_id(&self) -> Option<FoodTruckId> {
        self.food_truck_id
    }

    /// Where the truck will be.
    pub fn location_id(&self) -> LocationId {
        self.location_id
    }

    /// Start of the window (inclusive).
    pub fn scheduled_start(&self) -> DateTime<Utc> {
        self.scheduled_start
    }

    /// End of the window (exclusive).
    pub fn scheduled_end(&self) -> DateTime<Utc> {
        self.scheduled_end
    }

    pub(crate) fn reschedule(
        &mut self,
        scheduled_start: DateTime<Utc>,
        scheduled_end: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        validate_window(scheduled_start, scheduled_end)?;
        self.scheduled_start = scheduled_start;
        self.scheduled_end = scheduled_end;
        Ok(())
    }

    pub(crate) fn assign_id(&mut self, id: ScheduleId) -> Result<(), ValidationError> {
        assign_once(&mut self.id, id)
    }

    pub(crate) fn attach_to(&mut self, food_truck_id: FoodTruckId) {
        self.food_truck_id = Some(food_truck_id);
    }
}

fn validate_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), ValidationError> {
    if end <= start {
        return Err(ValidationError::InvalidTimeRange);
    }
    Ok(())
}
