//! Shared fixtures for integration tests.

#![allow(dead_code)]

use staff_directory::domain::{Category, CategorySet, Email, Name, Phone, Skill, SkillSet};
use staff_directory::Person;

/// Build a person from literal parts.
pub fn person(
    name: &str,
    phone: &str,
    email: &str,
    categories: &[(&str, &str)],
    skills: &[&str],
) -> Person {
    let categories: CategorySet = categories
        .iter()
        .map(|(n, v)| Category::new(*n, *v).unwrap())
        .collect();
    let skills: SkillSet = skills.iter().map(|s| Skill::new(*s).unwrap()).collect();
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(email).unwrap(),
        categories,
        skills,
    )
}

/// Three Alpha members, two Bravo members and one without a team.
pub fn team_roster() -> Vec<Person> {
    vec![
        person(
            "Alice Tan",
            "91000001",
            "alice@example.com",
            &[("Department", "Engineering"), ("Team", "Alpha")],
            &["Java", "SQL"],
        ),
        person(
            "Bob Lim",
            "91000002",
            "bob@example.com",
            &[("Department", "Engineering"), ("Team", "Bravo")],
            &["SQL"],
        ),
        person(
            "Carol Ng",
            "91000003",
            "carol@example.com",
            &[("Department", "Marketing"), ("Team", "alpha")],
            &["java"],
        ),
        person(
            "Dan Goh",
            "91000004",
            "dan@example.com",
            &[("Team", "Bravo")],
            &["python"],
        ),
        person(
            "Eve Ho",
            "91000005",
            "eve@example.com",
            &[("Team", "Alpha"), ("Role", "Lead")],
            &[],
        ),
        person("Fay Ong", "91000006", "fay@example.com", &[], &["rust"]),
    ]
}

/// Names of persons, in order.
pub fn names<'a>(persons: impl IntoIterator<Item = &'a Person>) -> Vec<String> {
    persons
        .into_iter()
        .map(|p| p.name().as_str().to_string())
        .collect()
}
