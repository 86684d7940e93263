//! Input-boundary rules for the project form.

use rstest::rstest;
use tracker_core::{ProjectForm, ValidationError};

#[rstest]
#[case::one_person("1")]
#[case::five_people("5")]
fn people_bounds_are_inclusive(#[case] people: &str) {
    let form = ProjectForm::new("Title", "Long enough", people);
    assert!(form.gather().is_ok());
}

#[rstest]
#[case::empty_title("", "Long enough", "3", ValidationError::Title)]
#[case::blank_title("   ", "Long enough", "3", ValidationError::Title)]
#[case::short_description("Title", "four", "3", ValidationError::Description { min_length: 5 })]
#[case::padded_short_description("Title", "  abc  ", "3", ValidationError::Description { min_length: 5 })]
#[case::zero_people("Title", "Long enough", "0", ValidationError::People { min: 1, max: 5 })]
#[case::six_people("Title", "Long enough", "6", ValidationError::People { min: 1, max: 5 })]
#[case::text_people("Title", "Long enough", "abc", ValidationError::People { min: 1, max: 5 })]
#[case::fractional_people("Title", "Long enough", "2.5", ValidationError::People { min: 1, max: 5 })]
#[case::empty_people("Title", "Long enough", "", ValidationError::People { min: 1, max: 5 })]
fn invalid_input_is_rejected(
    #[case] title: &str,
    #[case] description: &str,
    #[case] people: &str,
    #[case] expected: ValidationError,
) {
    let form = ProjectForm::new(title, description, people);
    assert_eq!(form.gather(), Err(expected));
}

#[test]
fn first_failing_field_wins() {
    let form = ProjectForm::new("", "x", "9");
    assert_eq!(form.gather(), Err(ValidationError::Title));
}

#[test]
fn description_of_exactly_five_chars_passes() {
    let form = ProjectForm::new("Title", "abcde", "2");
    let project = form.gather().expect("valid");
    assert_eq!(project.description, "abcde");
    assert_eq!(project.people, 2);
}

#[test]
fn error_messages_name_the_field() {
    assert!(ValidationError::Title.to_string().contains("title"));
    assert!(ValidationError::Description { min_length: 5 }
        .to_string()
        .contains("5 characters"));
    assert!(ValidationError::People { min: 1, max: 5 }
        .to_string()
        .contains("between 1 and 5"));
}
