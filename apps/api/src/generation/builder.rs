//! Resume record builder. Assembles one `ResumeRecord` per call.
//!
//! Structured fields (contact details, education, positions, skills) are drawn
//! independently from the static pools with the caller's RNG. Free text
//! (summary, bullets) comes from the configured `ContentStrategy`.
//!
//! The current year is fixed at construction so a seeded RNG reproduces the
//! same records for the lifetime of the builder.

use std::sync::Arc;

use chrono::Datelike;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::generation::content::ContentStrategy;
use crate::generation::pools::{
    CITIES, COMPANIES, DEGREES, EMAIL_DOMAINS, FIRST_NAMES, JOB_TITLES, LAST_NAMES, MAJORS, SKILLS,
    STREET_NAMES, UNIVERSITIES,
};
use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeRecord};

pub const MIN_SKILLS: usize = 8;
pub const MAX_SKILLS: usize = 15;
pub const MIN_POSITIONS: usize = 1;
pub const MAX_POSITIONS: usize = 4;
pub const MIN_GPA: f32 = 2.5;
pub const MAX_GPA: f32 = 4.0;
pub const FIRST_GRADUATION_YEAR: i32 = 2015;
pub const LAST_GRADUATION_YEAR: i32 = 2024;

pub struct ResumeBuilder {
    strategy: Arc<dyn ContentStrategy>,
    current_year: i32,
}

impl ResumeBuilder {
    pub fn new(strategy: Arc<dyn ContentStrategy>) -> Self {
        Self::with_year(strategy, chrono::Utc::now().year())
    }

    pub fn with_year(strategy: Arc<dyn ContentStrategy>, current_year: i32) -> Self {
        Self {
            strategy,
            current_year,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.strategy.backend()
    }

    /// Builds one complete record. Never fails: strategies recover internally.
    pub async fn build(&self, rng: &mut StdRng) -> ResumeRecord {
        let first = pick(rng, FIRST_NAMES);
        let last = pick(rng, LAST_NAMES);

        let personal = PersonalInfo {
            name: format!("{first} {last}"),
            email: random_email(rng, first, last),
            phone: random_phone(rng),
            address: random_address(rng),
        };

        let education = vec![random_education(rng)];
        let positions = random_positions(rng, self.current_year);

        let mut experience = Vec::with_capacity(positions.len());
        for position in positions {
            let bullets = self
                .strategy
                .job_bullets(position.title, position.company, rng)
                .await;
            experience.push(ExperienceEntry {
                title: position.title.to_string(),
                company: position.company.to_string(),
                start_year: position.start_year,
                end_year: position.end_year,
                bullets,
            });
        }

        let skills = random_skills(rng);

        let target_role = experience
            .first()
            .map(|e| e.title.as_str())
            .unwrap_or("professional");
        let summary = self
            .strategy
            .summary(&personal.name, target_role, rng)
            .await;

        ResumeRecord {
            personal,
            summary,
            education,
            experience,
            skills,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field samplers
// ────────────────────────────────────────────────────────────────────────────

fn pick(rng: &mut StdRng, pool: &'static [&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn random_email(rng: &mut StdRng, first: &str, last: &str) -> String {
    let domain = pick(rng, EMAIL_DOMAINS);
    format!(
        "{}.{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        domain
    )
}

fn random_phone(rng: &mut StdRng) -> String {
    format!(
        "({}) {}-{}",
        rng.gen_range(100..=999),
        rng.gen_range(100..=999),
        rng.gen_range(1000..=9999)
    )
}

fn random_address(rng: &mut StdRng) -> String {
    let number = rng.gen_range(100..=9999);
    let street = pick(rng, STREET_NAMES);
    let (city, state) = CITIES.choose(rng).copied().unwrap_or(("Chicago", "IL"));
    let zip = rng.gen_range(10000..=99999);
    format!("{number} {street}, {city}, {state} {zip}")
}

fn random_education(rng: &mut StdRng) -> EducationEntry {
    let raw_gpa: f32 = rng.gen_range(MIN_GPA..=MAX_GPA);
    EducationEntry {
        degree: pick(rng, DEGREES).to_string(),
        major: pick(rng, MAJORS).to_string(),
        institution: pick(rng, UNIVERSITIES).to_string(),
        gpa: ((raw_gpa * 100.0).round() / 100.0).clamp(MIN_GPA, MAX_GPA),
        graduation_year: rng.gen_range(FIRST_GRADUATION_YEAR..=LAST_GRADUATION_YEAR),
    }
}

struct Position {
    title: &'static str,
    company: &'static str,
    start_year: i32,
    end_year: i32,
}

/// 1..=4 positions, most recent first. The first ends this year and lasts
/// 1..=5 years; each earlier one ends when the next began and lasts 1..=3.
fn random_positions(rng: &mut StdRng, current_year: i32) -> Vec<Position> {
    let count = rng.gen_range(MIN_POSITIONS..=MAX_POSITIONS);
    let mut positions: Vec<Position> = Vec::with_capacity(count);

    for _ in 0..count {
        let title = pick(rng, JOB_TITLES);
        let company = pick(rng, COMPANIES);
        let (start_year, end_year) = match positions.last() {
            None => (current_year - rng.gen_range(1..=5), current_year),
            Some(previous) => {
                let end = previous.start_year;
                (end - rng.gen_range(1..=3), end)
            }
        };
        positions.push(Position {
            title,
            company,
            start_year,
            end_year,
        });
    }
    positions
}

fn random_skills(rng: &mut StdRng) -> Vec<String> {
    let count = rng.gen_range(MIN_SKILLS..=MAX_SKILLS);
    SKILLS
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
