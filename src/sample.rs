//! Sample roster used on first start.

use crate::domain::{Category, CategoryKind, CategorySet, Email, Name, Phone, Skill, SkillSet};
use crate::models::Person;

struct SampleRecord {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    department: &'static str,
    team: &'static str,
    role: &'static str,
    skills: &'static [&'static str],
}

const SAMPLES: [SampleRecord; 6] = [
    SampleRecord {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        department: "Engineering",
        team: "Alpha",
        role: "Software Engineer",
        skills: &["python", "java"],
    },
    SampleRecord {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        department: "Engineering",
        team: "Alpha",
        role: "Project Manager",
        skills: &["java"],
    },
    SampleRecord {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        department: "Human Resources",
        team: "Bravo",
        role: "HR Executive",
        skills: &["csharp"],
    },
    SampleRecord {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        department: "Marketing",
        team: "Bravo",
        role: "Marketing Executive",
        skills: &["csharp"],
    },
    SampleRecord {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        department: "Engineering",
        team: "Alpha",
        role: "QA Tester",
        skills: &["sql"],
    },
    SampleRecord {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        department: "Finance",
        team: "Charlie",
        role: "Accountant",
        skills: &["sql"],
    },
];

impl SampleRecord {
    // Sample values are literals known to satisfy every constraint.
    fn build(&self) -> Option<Person> {
        let categories: CategorySet = [
            Category::of_kind(CategoryKind::Department, self.department).ok()?,
            Category::of_kind(CategoryKind::Team, self.team).ok()?,
            Category::of_kind(CategoryKind::Role, self.role).ok()?,
        ]
        .into_iter()
        .collect();
        let skills = self
            .skills
            .iter()
            .map(|s| Skill::new(*s).ok())
            .collect::<Option<SkillSet>>()?;

        Some(Person::new(
            Name::new(self.name).ok()?,
            Phone::new(self.phone).ok()?,
            Email::new(self.email).ok()?,
            categories,
            skills,
        ))
    }
}

/// The six sample employees, in display order.
pub fn sample_persons() -> Vec<Person> {
    SAMPLES.iter().filter_map(SampleRecord::build).collect()
}
