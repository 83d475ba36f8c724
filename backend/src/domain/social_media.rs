//! Social media platforms and the accounts food trucks hold on them.

use super::ids::assign_once;
use super::validation::require_text;
use super::{
    FoodTruckId, SocialMediaAccountId, SocialMediaPlatformId, UrlTemplate, ValidationError,
};

/// A social network a food truck may advertise on (e.g. Instagram).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialMediaPlatform {
    id: Option<SocialMediaPlatformId>,
    name: String,
    url_template: UrlTemplate,
}

impl SocialMediaPlatform {
    /// Create an unsaved platform.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::SocialMediaPlatform;
    ///
    /// let platform = SocialMediaPlatform::new("Instagram", "https://instagram.com/{0}")
    ///     .expect("valid platform");
    /// assert_eq!(platform.account_url("tacotime"), "https://instagram.com/tacotime");
    /// ```
    pub fn new(
        name: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        require_text(&name, ValidationError::EmptyPlatformName)?;
        let url_template = UrlTemplate::new(url_template)?;
        Ok(Self {
            id: None,
            name,
            url_template,
        })
    }

    pub(crate) fn from_persisted(
        id: SocialMediaPlatformId,
        name: String,
        url_template: String,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            url_template: UrlTemplate::from_persisted(url_template),
        }
    }

    /// Store-assigned key, if saved.
    pub fn id(&self) -> Option<SocialMediaPlatformId> {
        self.id
    }

    /// Platform display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Profile URL pattern.
    pub fn url_template(&self) -> &UrlTemplate {
        &self.url_template
    }

    /// Profile URL for `account_name` on this platform.
    pub fn account_url(&self, account_name: &str) -> String {
        self.url_template.render(account_name)
    }

    pub(crate) fn assign_id(&mut self, id: SocialMediaPlatformId) -> Result<(), ValidationError> {
        assign_once(&mut self.id, id)
    }
}

/// A food truck's handle on one [`SocialMediaPlatform`].
///
/// The account points at its platform; platforms keep no list of accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialMediaAccount {
    id: Option<SocialMediaAccountId>,
    food_truck_id: Option<FoodTruckId>,
    platform_id: SocialMediaPlatformId,
    account_name: String,
}

impl SocialMediaAccount {
    /// Create a detached account for `platform_id`.
    pub fn new(
        platform_id: SocialMediaPlatformId,
        account_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let account_name = account_name.into();
        require_text(&account_name, ValidationError::EmptyAccountName)?;
        Ok(Self {
            id: None,
            food_truck_id: None,
            platform_id,
            account_name,
        })
    }

    pub(crate) fn from_persisted(
        id: SocialMediaAccountId,
        food_truck_id: FoodTruckId,
        platform_id: SocialMediaPlatformId,
        account_name: String,
    ) -> Self {
        Self {
            id: Some(id),
            food_truck_id: Some(food_truck_id),
            platform_id,
            account_name,
        }
    }

    /// Store-assigned key, if saved.
    pub fn id(&self) -> Option<SocialMediaAccountId> {
        self.id
    }

    /// Owning food truck, once the owner has been saved.
    pub fn food_truck_id(&self) -> Option<FoodTruckId> {
        self.food_truck_id
    }

    /// Platform the account lives on.
    pub fn platform_id(&self) -> SocialMediaPlatformId {
        self.platform_id
    }

    /// Handle on the platform.
    pub fn account_name(&self) -> &str {
        self.account_name.as_str()
    }

    pub(crate) fn assign_id(&mut self, id: SocialMediaAccountId) -> Result<(), ValidationError> {
        assign_once(&mut self.id, id)
    }

    pub(crate) fn attach_to(&mut self, food_truck_id: FoodTruckId) {
        self.food_truck_id = Some(food_truck_id);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "https://x.com/{0}", ValidationError::EmptyPlatformName)]
    #[case("  ", "https://x.com/{0}", ValidationError::EmptyPlatformName)]
    #[case("X", "https://x.com/", ValidationError::MissingUrlPlaceholder)]
    fn platform_rejects_invalid_input(
        #[case] name: &str,
        #[case] template: &str,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(SocialMediaPlatform::new(name, template), Err(expected));
    }

    #[rstest]
    fn platform_renders_account_url() {
        let platform =
            SocialMediaPlatform::new("Facebook", "https://facebook.com/{0}").expect("valid");
        assert_eq!(platform.name(), "Facebook");
        assert_eq!(
            platform.account_url("chowwagon"),
            "https://facebook.com/chowwagon"
        );
    }

    #[rstest]
    fn account_requires_name() {
        assert_eq!(
            SocialMediaAccount::new(SocialMediaPlatformId::new(1), " "),
            Err(ValidationError::EmptyAccountName)
        );
    }

    #[rstest]
    fn account_exposes_platform() {
        let account =
            SocialMediaAccount::new(SocialMediaPlatformId::new(2), "chowwagon").expect("valid");
        assert_eq!(account.platform_id(), SocialMediaPlatformId::new(2));
        assert_eq!(account.account_name(), "chowwagon");
        assert_eq!(account.food_truck_id(), None);
    }
}
