//! Plain-text rendering of the displayed list.

use crate::models::Person;
use crate::roster::Roster;
use std::fmt::Write;

const EMPTY_VIEW: &str = "(no persons to display)";

/// One numbered card per person in the filtered view.
pub fn render_roster(roster: &Roster) -> String {
    let persons = roster.filtered();
    if persons.is_empty() {
        return format!("{EMPTY_VIEW}\n");
    }

    let mut out = String::new();
    for (i, person) in persons.iter().enumerate() {
        render_card(&mut out, i + 1, person);
    }
    out
}

fn render_card(out: &mut String, number: usize, person: &Person) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{number}. {}", person.name());
    let _ = writeln!(out, "   Phone: {}", person.phone());
    let _ = writeln!(out, "   Email: {}", person.email());
    if !person.categories().is_empty() {
        let categories: Vec<String> = person.categories().iter().map(|c| c.to_string()).collect();
        let _ = writeln!(out, "   Categories: {}", categories.join(", "));
    }
    if !person.skills().is_empty() {
        let skills: Vec<&str> = person.skills().iter().map(|s| s.as_str()).collect();
        let _ = writeln!(out, "   Skills: {}", skills.join(", "));
    }
}
