//! `add_employee`

use super::CommandOutcome;
use crate::error::CommandResult;
use crate::models::Person;
use crate::roster::Roster;

pub const COMMAND_WORD: &str = "add_employee";

pub const USAGE: &str = "add_employee: Adds an employee to the directory. \
Parameters: n/NAME p/PHONE e/EMAIL [d/DEPARTMENT] [t/TEAM] [r/ROLE] [s/SKILL]...\n\
Example: add_employee n/John Doe p/98765432 e/johnd@example.com d/Engineering t/Alpha r/Software Engineer s/python s/java";

pub fn execute(roster: &mut Roster, person: Person) -> CommandResult<CommandOutcome> {
    let feedback = format!("Employee added: {person}");
    roster.add(person)?;
    Ok(CommandOutcome::mutated(feedback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategorySet, Email, Name, Phone, SkillSet};
    use crate::error::CommandError;

    fn person(name: &str, phone: &str, email: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new(email).unwrap(),
            CategorySet::new(),
            SkillSet::new(),
        )
    }

    #[test]
    fn test_add_success_and_duplicate() {
        let mut roster = Roster::new();
        let amy = person("Amy Bee", "11111111", "amy@example.com");

        let outcome = execute(&mut roster, amy.clone()).unwrap();
        assert!(outcome.mutated);
        assert_eq!(
            outcome.feedback,
            "Employee added: Amy Bee; Phone: 11111111; Email: amy@example.com"
        );

        assert_eq!(execute(&mut roster, amy), Err(CommandError::DuplicatePerson));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_add_differing_in_one_identity_field_succeeds() {
        let mut roster = Roster::new();
        execute(&mut roster, person("Amy Bee", "11111111", "amy@example.com")).unwrap();

        execute(&mut roster, person("Amy Cee", "11111111", "amy@example.com")).unwrap();
        execute(&mut roster, person("Amy Bee", "22222222", "amy@example.com")).unwrap();
        execute(&mut roster, person("Amy Bee", "11111111", "amy2@example.com")).unwrap();
        assert_eq!(roster.len(), 4);
    }
}
