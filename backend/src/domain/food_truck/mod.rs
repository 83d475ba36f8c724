//! FoodTruck aggregate root.
//!
//! A food truck owns its tag links, schedules, reviews and social media
//! accounts. Those children are only reachable for mutation through the
//! methods here, so every invariant that spans the collection (one link per
//! tag, one account per platform) is checked in one place.

use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

use super::ids::assign_once;
use super::validation::{ChildKind, require_text};
use super::{
    FoodTruckId, FoodTruckTag, LocationId, Review, ReviewId, Schedule, ScheduleId,
    SocialMediaAccount, SocialMediaAccountId, SocialMediaPlatform, Tag, TagId, ValidationError,
};

/// Row version given to a truck that has never been stored.
pub const INITIAL_VERSION: i32 = 0;

/// Stored state used to rebuild a [`FoodTruck`] without re-validation.
#[derive(Debug, Clone)]
pub(crate) struct PersistedFoodTruck {
    pub id: FoodTruckId,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub version: i32,
    pub tags: Vec<FoodTruckTag>,
    pub schedules: Vec<Schedule>,
    pub reviews: Vec<Review>,
    pub social_media_accounts: Vec<SocialMediaAccount>,
}

/// A mobile food vendor listed in the directory.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `website`, when present, is non-empty once trimmed.
/// - At most one tag link per [`TagId`].
/// - At most one social media account per platform.
/// - `id` is assigned at most once.
///
/// # Examples
/// ```
/// use backend::domain::FoodTruck;
///
/// let mut truck = FoodTruck::new("Taco Loco", None, None).expect("valid truck");
/// truck.rename("Taco Loco Express").expect("valid name");
/// assert_eq!(truck.name(), "Taco Loco Express");
/// assert!(truck.rename("  ").is_err());
/// assert_eq!(truck.name(), "Taco Loco Express");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FoodTruck {
    id: Option<FoodTruckId>,
    name: String,
    description: Option<String>,
    website: Option<String>,
    version: i32,
    tags: Vec<FoodTruckTag>,
    schedules: Vec<Schedule>,
    reviews: Vec<Review>,
    social_media_accounts: Vec<SocialMediaAccount>,
}

impl FoodTruck {
    /// Create an unsaved food truck with no children.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        website: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        require_text(&name, ValidationError::EmptyName)?;
        validate_website(website.as_deref())?;
        Ok(Self {
            id: None,
            name,
            description,
            website,
            version: INITIAL_VERSION,
            tags: Vec::new(),
            schedules: Vec::new(),
            reviews: Vec::new(),
            social_media_accounts: Vec::new(),
        })
    }

    pub(crate) fn from_persisted(persisted: PersistedFoodTruck) -> Self {
        let PersistedFoodTruck {
            id,
            name,
            description,
            website,
            version,
            tags,
            schedules,
            reviews,
            social_media_accounts,
        } = persisted;
        Self {
            id: Some(id),
            name,
            description,
            website,
            version,
            tags,
            schedules,
            reviews,
            social_media_accounts,
        }
    }

    /// Store-assigned key, if saved.
    pub fn id(&self) -> Option<FoodTruckId> {
        self.id
    }

    /// Trading name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Optional marketing blurb.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Optional website URL.
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Row version observed when the truck was loaded.
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Tag links, in insertion order.
    pub fn tags(&self) -> &[FoodTruckTag] {
        &self.tags
    }

    /// Planned stops, in insertion order.
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Customer reviews, in insertion order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Social media accounts, in insertion order.
    pub fn social_media_accounts(&self) -> &[SocialMediaAccount] {
        &self.social_media_accounts
    }

    /// Replace the trading name.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        require_text(&name, ValidationError::EmptyName)?;
        self.name = name;
        Ok(())
    }

    /// Replace description and website together.
    pub fn update_details(
        &mut self,
        description: Option<String>,
        website: Option<String>,
    ) -> Result<(), ValidationError> {
        validate_website(website.as_deref())?;
        self.description = description;
        self.website = website;
        Ok(())
    }

    /// Link a stored tag to this truck.
    ///
    /// Adding a tag that is already linked is rejected with
    /// [`ValidationError::DuplicateTag`].
    pub fn add_tag(&mut self, tag: &Tag) -> Result<(), ValidationError> {
        let tag_id = tag
            .id()
            .ok_or(ValidationError::UnsavedReference { entity: "tag" })?;
        if self.has_tag(tag_id) {
            return Err(ValidationError::DuplicateTag {
                tag_id: tag_id.value(),
            });
        }
        self.tags.push(FoodTruckTag::new(self.id, tag_id));
        Ok(())
    }

    /// Unlink a tag.
    pub fn remove_tag(&mut self, tag_id: TagId) -> Result<(), ValidationError> {
        let index = self
            .tags
            .iter()
            .position(|link| link.tag_id() == tag_id)
            .ok_or(ValidationError::UnknownChild {
                kind: ChildKind::Tag,
                id: tag_id.value(),
            })?;
        self.tags.remove(index);
        Ok(())
    }

    /// Whether `tag_id` is linked to this truck.
    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tags.iter().any(|link| link.tag_id() == tag_id)
    }

    /// Plan a stop at `location_id`.
    pub fn add_schedule(
        &mut self,
        location_id: LocationId,
        scheduled_start: DateTime<Utc>,
        scheduled_end: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        let mut schedule = Schedule::new(location_id, scheduled_start, scheduled_end)?;
        if let Some(id) = self.id {
            schedule.attach_to(id);
        }
        self.schedules.push(schedule);
        Ok(())
    }

    /// Cancel a stored schedule.
    pub fn remove_schedule(&mut self, schedule_id: ScheduleId) -> Result<(), ValidationError> {
        let index = self.schedule_index(schedule_id)?;
        self.schedules.remove(index);
        Ok(())
    }

    /// Move a stored schedule to a new time window.
    pub fn reschedule(
        &mut self,
        schedule_id: ScheduleId,
        scheduled_start: DateTime<Utc>,
        scheduled_end: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        self.schedules
            .iter_mut()
            .find(|schedule| schedule.id() == Some(schedule_id))
            .ok_or(ValidationError::UnknownChild {
                kind: ChildKind::Schedule,
                id: schedule_id.value(),
            })?
            .reschedule(scheduled_start, scheduled_end)
    }

    fn schedule_index(&self, schedule_id: ScheduleId) -> Result<usize, ValidationError> {
        self.schedules
            .iter()
            .position(|schedule| schedule.id() == Some(schedule_id))
            .ok_or(ValidationError::UnknownChild {
                kind: ChildKind::Schedule,
                id: schedule_id.value(),
            })
    }

    /// Record a customer review dated no later than today per `clock`.
    pub fn add_review(
        &mut self,
        review_date: NaiveDate,
        rating: i32,
        details: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<(), ValidationError> {
        let mut review = Review::new(review_date, rating, details, clock)?;
        if let Some(id) = self.id {
            review.attach_to(id);
        }
        self.reviews.push(review);
        Ok(())
    }

    /// Delete a stored review.
    pub fn remove_review(&mut self, review_id: ReviewId) -> Result<(), ValidationError> {
        let index = self
            .reviews
            .iter()
            .position(|review| review.id() == Some(review_id))
            .ok_or(ValidationError::UnknownChild {
                kind: ChildKind::Review,
                id: review_id.value(),
            })?;
        self.reviews.remove(index);
        Ok(())
    }

    /// Mean review score, or `None` when unreviewed.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let (total, count) = self
            .reviews
            .iter()
            .fold((0.0_f64, 0.0_f64), |(total, count), review| {
                (total + f64::from(review.rating().value()), count + 1.0)
            });
        Some(total / count)
    }

    /// Add this truck's handle on a stored platform.
    pub fn add_social_media_account(
        &mut self,
        platform: &SocialMediaPlatform,
        account_name: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let platform_id = platform.id().ok_or(ValidationError::UnsavedReference {
            entity: "social media platform",
        })?;
        if self
            .social_media_accounts
            .iter()
            .any(|account| account.platform_id() == platform_id)
        {
            return Err(ValidationError::DuplicateSocialMediaAccount {
                platform_id: platform_id.value(),
            });
        }
        let mut account = SocialMediaAccount::new(platform_id, account_name)?;
        if let Some(id) = self.id {
            account.attach_to(id);
        }
        self.social_media_accounts.push(account);
        Ok(())
    }

    /// Drop a stored social media account.
    pub fn remove_social_media_account(
        &mut self,
        account_id: SocialMediaAccountId,
    ) -> Result<(), ValidationError> {
        let index = self
            .social_media_accounts
            .iter()
            .position(|account| account.id() == Some(account_id))
            .ok_or(ValidationError::UnknownChild {
                kind: ChildKind::SocialMediaAccount,
                id: account_id.value(),
            })?;
        self.social_media_accounts.remove(index);
        Ok(())
    }

    /// Profile URL of this truck's account on `platform`, if it has one.
    pub fn social_media_url(&self, platform: &SocialMediaPlatform) -> Option<String> {
        let platform_id = platform.id()?;
        self.social_media_accounts
            .iter()
            .find(|account| account.platform_id() == platform_id)
            .map(|account| platform.account_url(account.account_name()))
    }

    pub(crate) fn assign_id(&mut self, id: FoodTruckId) -> Result<(), ValidationError> {
        assign_once(&mut self.id, id)?;
        for link in &mut self.tags {
            link.attach_to(id);
        }
        for schedule in &mut self.schedules {
            schedule.attach_to(id);
        }
        for review in &mut self.reviews {
            review.attach_to(id);
        }
        for account in &mut self.social_media_accounts {
            account.attach_to(id);
        }
        Ok(())
    }

    pub(crate) fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    pub(crate) fn tags_mut(&mut self) -> &mut [FoodTruckTag] {
        &mut self.tags
    }

    pub(crate) fn schedules_mut(&mut self) -> &mut [Schedule] {
        &mut self.schedules
    }

    pub(crate) fn reviews_mut(&mut self) -> &mut [Review] {
        &mut self.reviews
    }

    pub(crate) fn social_media_accounts_mut(&mut self) -> &mut [SocialMediaAccount] {
        &mut self.social_media_accounts
    }
}

fn validate_website(website: Option<&str>) -> Result<(), ValidationError> {
    match website {
        Some(value) => require_text(value, ValidationError::EmptyWebsite),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests;
