use staff_directory::commands::ListQuery;
use staff_directory::domain::{Category, CategoryKind, Index, SkillSet, ValidationError};
use staff_directory::error::ParseError;
use staff_directory::matching::ListFilters;
use staff_directory::models::CategoryChange;
use staff_directory::parser::syntax::{PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE};
use staff_directory::{parse_command, Command};

#[test]
fn test_add_requires_name_phone_email() {
    for line in [
        "add_employee p/123 e/a@example.com",
        "add_employee n/Amy e/a@example.com",
        "add_employee n/Amy p/123",
    ] {
        assert!(
            matches!(parse_command(line), Err(ParseError::InvalidCommandFormat { .. })),
            "{line}"
        );
    }
}

#[test]
fn test_add_duplicate_prefixes_listed_in_order() {
    let err = parse_command("add_employee n/A n/B p/1 p/2 e/a@example.com e/b@example.com").unwrap_err();
    assert_eq!(
        err,
        ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL])
    );
    assert_eq!(
        err.to_string(),
        "Multiple values specified for the following single-valued field(s): n/ p/ e/"
    );
}

#[test]
fn test_add_repeated_skills_allowed() {
    let Ok(Command::Add(person)) =
        parse_command("add_employee n/Amy p/123 e/amy@example.com s/java s/python s/JAVA")
    else {
        panic!("expected add");
    };
    assert_eq!(person.skills().len(), 2);
}

#[test]
fn test_invalid_email_message() {
    let err = parse_command("add_employee n/Amy p/123 e/not-an-email").unwrap_err();
    assert!(matches!(err, ParseError::Validation(ValidationError::InvalidEmail(_))));
    assert!(err.to_string().starts_with("Emails should be of the format local-part@domain"));
}

#[test]
fn test_edit_reset_versus_unchanged() {
    let Ok(Command::Edit { index, update }) = parse_command("edit 3 s/ c/ v/") else {
        panic!("expected edit");
    };
    assert_eq!(index, Index::from_zero_based(2));
    assert_eq!(update.skills, Some(SkillSet::new()));
    assert!(matches!(update.categories, Some(CategoryChange::Replace(ref set)) if set.is_empty()));

    let Ok(Command::Edit { update, .. }) = parse_command("edit 3 n/New Name") else {
        panic!("expected edit");
    };
    assert_eq!(update.skills, None);
    assert_eq!(update.categories, None);
}

#[test]
fn test_edit_and_update_not_edited_messages() {
    assert_eq!(
        parse_command("edit 1").unwrap_err().to_string(),
        "At least one field to edit must be provided."
    );
    assert!(parse_command("update_employee 1")
        .unwrap_err()
        .to_string()
        .starts_with("No fields specified to update."));
}

#[test]
fn test_invalid_index_shows_usage() {
    let err = parse_command("delete -2").unwrap_err();
    assert!(err.to_string().starts_with("Invalid command format! \ndelete:"));
}

#[test]
fn test_list_forms() {
    assert_eq!(parse_command("list"), Ok(Command::List(ListQuery::All)));
    assert_eq!(
        parse_command("list c/Alpha"),
        Ok(Command::List(ListQuery::Combined(ListFilters::new(
            &[],
            &["alpha".to_string()]
        ))))
    );
    assert!(matches!(
        parse_command("list skills/java"),
        Ok(Command::List(ListQuery::Exact(_)))
    ));
}

#[test]
fn test_assign_capitalizes_category() {
    assert_eq!(
        parse_command("assign 1 c/department v/Human Resources"),
        Ok(Command::Assign {
            index: Index::from_zero_based(0),
            category: Category::of_kind(CategoryKind::Department, "Human Resources").unwrap(),
        })
    );
}
