//! Resource validation, merge, and query logic.

use super::error::ResourceError;
use super::types::{CreateResourceInput, Resource, UpdateResourceInput};

/// Resource service for business logic.
pub struct ResourceService;

impl ResourceService {
    /// Validate input for creating a resource.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::EmptyName` if the name is blank,
    /// `ResourceError::InvalidEmail` if an email is missing an `@`, and
    /// `ResourceError::EmptyPrimarySkill` if the primary skill is blank.
    pub fn validate_create(input: &CreateResourceInput) -> Result<(), ResourceError> {
        Self::validate_name(&input.name)?;
        Self::validate_email(&input.email)?;
        if let Some(client_email) = &input.client_email {
            Self::validate_email(client_email)?;
        }
        Self::validate_primary_skill(&input.primary_skill)
    }

    /// Validate a partial update. Only fields present in the patch are checked.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Self::validate_create`].
    pub fn validate_update(patch: &UpdateResourceInput) -> Result<(), ResourceError> {
        if let Some(name) = &patch.name {
            Self::validate_name(name)?;
        }
        if let Some(email) = &patch.email {
            Self::validate_email(email)?;
        }
        if let Some(Some(client_email)) = &patch.client_email {
            Self::validate_email(client_email)?;
        }
        if let Some(skill) = &patch.primary_skill {
            Self::validate_primary_skill(skill)?;
        }
        Ok(())
    }

    /// Merge a partial update over a resource.
    ///
    /// The merge is shallow: fields absent from the patch are retained, and
    /// `secondary_skills` is replaced wholesale when present.
    pub fn apply_update(resource: &mut Resource, patch: UpdateResourceInput) {
        if let Some(name) = patch.name {
            resource.name = name;
        }
        if let Some(email) = patch.email {
            resource.email = email;
        }
        if let Some(date_of_joining) = patch.date_of_joining {
            resource.date_of_joining = date_of_joining;
        }
        if let Some(contact_number) = patch.contact_number {
            resource.contact_number = contact_number;
        }
        if let Some(address) = patch.address {
            resource.address = address;
        }
        if let Some(city) = patch.city {
            resource.city = city;
        }
        if let Some(country) = patch.country {
            resource.country = country;
        }
        if let Some(primary_skill) = patch.primary_skill {
            resource.primary_skill = primary_skill;
        }
        if let Some(secondary_skills) = patch.secondary_skills {
            resource.secondary_skills = secondary_skills;
        }
        if let Some(total_experience) = patch.total_experience {
            resource.total_experience = total_experience;
        }
        if let Some(availability) = patch.availability {
            resource.availability = availability;
        }
        if let Some(status) = patch.status {
            resource.status = status;
        }
        if let Some(resource_type) = patch.resource_type {
            resource.resource_type = resource_type;
        }
        if let Some(client_email) = patch.client_email {
            resource.client_email = client_email;
        }
    }

    /// Case-insensitive substring search over name and primary skill.
    #[must_use]
    pub fn search<'a>(resources: &'a [Resource], query: &str) -> Vec<&'a Resource> {
        let needle = query.to_lowercase();
        resources
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.primary_skill.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn validate_name(name: &str) -> Result<(), ResourceError> {
        if name.trim().is_empty() {
            return Err(ResourceError::EmptyName);
        }
        Ok(())
    }

    fn validate_email(email: &str) -> Result<(), ResourceError> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(ResourceError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    fn validate_primary_skill(skill: &str) -> Result<(), ResourceError> {
        if skill.trim().is_empty() {
            return Err(ResourceError::EmptyPrimarySkill);
        }
        Ok(())
    }
}
