//! Form input validation — the boundary that guards [`ProjectRegistry`].
//!
//! The registry trusts its callers; everything typed into the project form
//! passes through [`ProjectForm::gather`] first.
//!
//! [`ProjectRegistry`]: crate::ProjectRegistry

use crate::error::ValidationError;
use crate::types::NewProject;

pub const DESCRIPTION_MIN_LENGTH: usize = 5;
pub const PEOPLE_MIN: i64 = 1;
pub const PEOPLE_MAX: i64 = 5;

/// One raw field value plus the rules it must satisfy.
#[derive(Debug, Clone, Default)]
pub struct Validatable<'a> {
    pub value: &'a str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

/// Check every rule set on `input`. Lengths count characters of the trimmed
/// value; numeric rules fail on anything that is not a whole number.
pub fn validate(input: &Validatable<'_>) -> bool {
    let trimmed = input.value.trim();
    let length = trimmed.chars().count();

    if input.required && length == 0 {
        return false;
    }
    if input.min_length.is_some_and(|min| length < min) {
        return false;
    }
    if input.max_length.is_some_and(|max| length > max) {
        return false;
    }
    if input.min.is_none() && input.max.is_none() {
        return true;
    }

    let Ok(number) = trimmed.parse::<i64>() else {
        return false;
    };
    input.min.map_or(true, |min| number >= min) && input.max.map_or(true, |max| number <= max)
}

/// Raw values of the project form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectForm {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Validate all three fields and produce registry-ready input.
    ///
    /// Returns the first failing field in form order.
    pub fn gather(&self) -> Result<NewProject, ValidationError> {
        let title = Validatable {
            required: true,
            ..Validatable::new(&self.title)
        };
        let description = Validatable {
            required: true,
            min_length: Some(DESCRIPTION_MIN_LENGTH),
            ..Validatable::new(&self.description)
        };
        let people = Validatable {
            required: true,
            min: Some(PEOPLE_MIN),
            max: Some(PEOPLE_MAX),
            ..Validatable::new(&self.people)
        };

        if !validate(&title) {
            return Err(ValidationError::Title);
        }
        if !validate(&description) {
            return Err(ValidationError::Description {
                min_length: DESCRIPTION_MIN_LENGTH,
            });
        }
        if !validate(&people) {
            return Err(ValidationError::People {
                min: PEOPLE_MIN,
                max: PEOPLE_MAX,
            });
        }

        let people = self
            .people
            .trim()
            .parse::<u8>()
            .map_err(|_| ValidationError::People {
                min: PEOPLE_MIN,
                max: PEOPLE_MAX,
            })?;

        Ok(NewProject {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rules_always_pass() {
        assert!(validate(&Validatable::new("")));
    }

    #[test]
    fn max_length_is_enforced() {
        let input = Validatable {
            max_length: Some(3),
            ..Validatable::new("four")
        };
        assert!(!validate(&input));
    }

    #[test]
    fn numeric_rules_reject_non_numbers() {
        let input = Validatable {
            min: Some(1),
            ..Validatable::new("two")
        };
        assert!(!validate(&input));
    }

    #[test]
    fn gather_keeps_raw_text() {
        let form = ProjectForm::new("Build site", "Build a landing page", " 3 ");
        let project = form.gather().expect("valid");
        assert_eq!(project.title, "Build site");
        assert_eq!(project.people, 3);
    }

    #[test]
    fn clear_empties_all_fields() {
        let mut form = ProjectForm::new("a", "b", "1");
        form.clear();
        assert_eq!(form, ProjectForm::default());
    }
}
