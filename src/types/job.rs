// src/types/job.rs
//! Job postings, candidate profiles and the match score computed between them

use anyhow::Result;
use serde::{Deserialize, Serialize};

// ===== Job Posting =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JobRecord")]
pub struct Job {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
}

impl Job {
    pub fn new(title: &str, description: &str, company: &str) -> Result<Self> {
        if title.trim().is_empty() {
            anyhow::bail!("Job title cannot be empty");
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            company: company.to_string(),
            location: None,
            salary_range: None,
        })
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_salary_range(mut self, salary_range: SalaryRange) -> Self {
        self.salary_range = Some(salary_range);
        self
    }
}

#[derive(Deserialize)]
struct JobRecord {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    salary_range: Option<SalaryRange>,
}

impl TryFrom<JobRecord> for Job {
    type Error = anyhow::Error;

    fn try_from(record: JobRecord) -> Result<Self> {
        let mut job = Job::new(&record.title, &record.description, &record.company)?;
        if let Some(location) = record.location {
            job = job.with_location(&location);
        }
        if let Some(salary_range) = record.salary_range {
            job = job.with_salary_range(salary_range);
        }
        Ok(job)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SalaryRecord")]
pub struct SalaryRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl SalaryRange {
    pub fn new(min: Option<u32>, max: Option<u32>, currency: Option<String>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                anyhow::bail!("Salary minimum {} exceeds maximum {}", min, max);
            }
        }
        Ok(Self { min, max, currency })
    }
}

#[derive(Deserialize)]
struct SalaryRecord {
    #[serde(default)]
    min: Option<u32>,
    #[serde(default)]
    max: Option<u32>,
    #[serde(default)]
    currency: Option<String>,
}

impl TryFrom<SalaryRecord> for SalaryRange {
    type Error = anyhow::Error;

    fn try_from(record: SalaryRecord) -> Result<Self> {
        SalaryRange::new(record.min, record.max, record.currency)
    }
}

// ===== Candidate Profile =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub employment_history: Vec<EmploymentEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: Option<SkillLevel>,
}

impl Skill {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentEntry {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub institution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    pub fn is_early_career(self) -> bool {
        matches!(self, ExperienceLevel::Entry | ExperienceLevel::Junior)
    }
}

// ===== Match Result =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub overall_score: u8,
    pub skills_score: u8,
    pub experience_score: u8,
    pub education_score: u8,
    pub location_score: u8,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
}
