//! `list` and `listbycategory`.

use super::CommandOutcome;
use crate::domain::CategoryKind;
use crate::error::{CommandError, CommandResult};
use crate::matching::{ListFilters, PersonFilter, SkillOrCategoryExact};
use crate::models::Person;
use crate::roster::Roster;
use std::collections::BTreeMap;

pub const LIST_COMMAND_WORD: &str = "list";
pub const LIST_BY_CATEGORY_COMMAND_WORD: &str = "listbycategory";

pub const LIST_USAGE: &str = "list: Shows persons, optionally filtered by skills and categories.\n\
Parameters: [s/SKILL]... [c/CATEGORY]...\n\
A person is shown if some skill contains one of the SKILL keywords and some category \
contains one of the CATEGORY keywords; an absent dimension matches everyone.\n\
CATEGORY keywords are matched against both the category name and its value \
(\"Department: Engineering\"), so c/department lists everyone with a department.\n\
Examples:\n  list\n  list s/java s/python\n  list s/java c/engineering";

pub const LIST_BY_CATEGORY_USAGE: &str = "listbycategory: Lists persons grouped by the specified category.\n\
Parameters: c/CATEGORY\n\
Valid categories: role, team, department\n\
Example: listbycategory c/role";

pub const LIST_ALL_SUCCESS: &str = "Listed all persons";

const UNSPECIFIED: &str = "(unspecified)";

/// What `list` filters by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    All,
    /// Legacy `skills/` form: exact skill or category value
    Exact(SkillOrCategoryExact),
    /// `s/` and `c/` substring filters
    Combined(ListFilters),
}

pub fn execute(roster: &mut Roster, query: ListQuery) -> CommandResult<CommandOutcome> {
    let filter = match query {
        ListQuery::All => return Ok(show_all(roster)),
        ListQuery::Combined(filters) if filters.is_unconstrained() => {
            return Ok(show_all(roster));
        }
        ListQuery::Combined(filters) => {
            let missing = missing_skills(roster.persons(), filters.skill_keywords());
            if !missing.is_empty() {
                return Err(CommandError::SkillNotFound(missing));
            }
            PersonFilter::List(filters)
        }
        ListQuery::Exact(predicate) => PersonFilter::SkillOrCategory(predicate),
    };

    roster.set_filter(filter);
    Ok(CommandOutcome::listing(format!(
        "{} persons listed!",
        roster.filtered_len()
    )))
}

fn show_all(roster: &mut Roster) -> CommandOutcome {
    roster.show_all();
    CommandOutcome::listing(LIST_ALL_SUCCESS)
}

/// Skill keywords not contained in any skill of any person.
fn missing_skills(persons: &[Person], keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| {
            !persons
                .iter()
                .flat_map(|p| p.skills().iter())
                .any(|skill| skill.normalized().contains(keyword.as_str()))
        })
        .cloned()
        .collect()
}

/// Count the filtered view by the value each person holds on `kind`.
///
/// Groups are keyed case-insensitively and shown with the first spelling
/// seen. They are sorted by that key, and persons without the category
/// are counted last under `(unspecified)`.
pub fn execute_by_category(roster: &mut Roster, kind: CategoryKind) -> CommandResult<CommandOutcome> {
    let mut groups: BTreeMap<String, (String, usize)> = BTreeMap::new();
    let mut unspecified = 0usize;

    for person in roster.filtered() {
        match person.category_value(kind) {
            Some(value) => {
                groups
                    .entry(value.to_lowercase())
                    .or_insert_with(|| (value.to_string(), 0))
                    .1 += 1;
            }
            None => unspecified += 1,
        }
    }

    let mut feedback = format!("Listing by {}:\n", kind.keyword());
    for (label, count) in groups.values() {
        feedback.push_str(&format!("- {label}: {count} member(s)\n"));
    }
    if unspecified > 0 {
        feedback.push_str(&format!("- {UNSPECIFIED}: {unspecified} member(s)\n"));
    }
    Ok(CommandOutcome::unchanged(feedback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategorySet, Email, Name, Phone, Skill, SkillSet};

    fn person(name: &str, team: Option<&str>, skills: &[&str]) -> Person {
        let categories: CategorySet = team
            .map(|t| Category::of_kind(CategoryKind::Team, t).unwrap())
            .into_iter()
            .collect();
        let skills: SkillSet = skills.iter().map(|s| Skill::new(*s).unwrap()).collect();
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(format!("9{}", name.len() * 1111)).unwrap(),
            Email::new(format!("{}@example.com", name.to_lowercase())).unwrap(),
            categories,
            skills,
        )
    }

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    fn roster() -> Roster {
        Roster::from_persons(vec![
            person("A", Some("Alpha"), &["java"]),
            person("Bb", Some("bravo"), &["sql"]),
            person("Ccc", Some("alpha"), &["python"]),
            person("Dddd", None, &["java"]),
            person("Eeeee", Some("Alpha"), &[]),
            person("Ffffff", Some("Bravo"), &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_list_usage_explains_category_matching() {
        assert!(LIST_USAGE.contains("category name and its value"));
    }

    #[test]
    fn test_list_by_category_counts_and_order() {
        let mut roster = roster();
        let outcome = execute_by_category(&mut roster, CategoryKind::Team).unwrap();
        assert_eq!(
            outcome.feedback,
            "Listing by team:\n- Alpha: 3 member(s)\n- bravo: 2 member(s)\n- (unspecified): 1 member(s)\n"
        );
        assert!(!outcome.mutated);
    }

    #[test]
    fn test_list_by_category_uses_filtered_view() {
        let mut roster = roster();
        execute(&mut roster, ListQuery::Combined(ListFilters::new(&words(&["java"]), &[]))).unwrap();
        let outcome = execute_by_category(&mut roster, CategoryKind::Team).unwrap();
        assert_eq!(
            outcome.feedback,
            "Listing by team:\n- Alpha: 1 member(s)\n- (unspecified): 1 member(s)\n"
        );
    }

    #[test]
    fn test_list_empty_filters_show_all() {
        let mut roster = roster();
        roster.set_filter(PersonFilter::CategoryValue(CategoryKind::Team, "Alpha".into()));

        let outcome = execute(&mut roster, ListQuery::Combined(ListFilters::new(&[], &[]))).unwrap();
        assert_eq!(outcome.feedback, LIST_ALL_SUCCESS);
        assert_eq!(roster.filtered_len(), roster.len());
    }

    #[test]
    fn test_list_combined_is_idempotent() {
        let mut roster = roster();
        let query = ListQuery::Combined(ListFilters::new(&words(&["a"]), &words(&["alpha"])));

        execute(&mut roster, query.clone()).unwrap();
        let once: Vec<Person> = roster.filtered().into_iter().cloned().collect();
        execute(&mut roster, query).unwrap();
        let twice: Vec<Person> = roster.filtered().into_iter().cloned().collect();

        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
    }

    #[test]
    fn test_list_unknown_skill_fails() {
        let mut roster = roster();
        let query = ListQuery::Combined(ListFilters::new(&words(&["java", "cobol"]), &[]));
        assert_eq!(
            execute(&mut roster, query),
            Err(CommandError::SkillNotFound(vec!["cobol".to_string()]))
        );
        assert_eq!(roster.filter(), &PersonFilter::ShowAll);
    }

    #[test]
    fn test_list_exact_filter() {
        let mut roster = roster();
        let outcome = execute(
            &mut roster,
            ListQuery::Exact(SkillOrCategoryExact::new(&words(&["JAVA"]))),
        )
        .unwrap();
        assert_eq!(outcome.feedback, "2 persons listed!");
    }
}
