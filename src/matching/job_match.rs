// src/matching/job_match.rs
use super::keywords::{extract_keywords, extract_keywords_from, jaccard_score, keyword_sequence};
use crate::types::{Job, MatchScore, Profile};
use crate::utils::{normalize_location, primary_location_segment};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

const STRENGTH_THRESHOLD: u8 = 70;
const GAP_THRESHOLD: u8 = 50;
const MISSING_SKILLS_GAP: usize = 5;
const SUGGESTED_SKILLS: usize = 5;
const SENIOR_TITLE_WORDS: [&str; 5] = ["senior", "lead", "principal", "staff", "head"];

/// Weight of each sub-score in the overall score. Must sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.35,
            education: 0.15,
            location: 0.10,
        }
    }
}

impl MatchWeights {
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("location", self.location),
        ];

        for (name, weight) in weights {
            if !(0.0..=1.0).contains(&weight) {
                anyhow::bail!("Match weight '{}' must be within 0.0..=1.0, got {}", name, weight);
            }
        }

        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        if (total - 1.0).abs() > 1e-6 {
            anyhow::bail!("Match weights must sum to 1.0, got {:.3}", total);
        }

        Ok(())
    }
}

pub struct JobMatcher {
    weights: MatchWeights,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }
}

impl JobMatcher {
    pub fn new(weights: MatchWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn score(&self, job: &Job, profile: &Profile) -> MatchScore {
        let requirement_sequence = keyword_sequence(&job.description);
        let requirement_keywords: BTreeSet<String> =
            requirement_sequence.iter().cloned().collect();
        let job_keywords = extract_keywords(&format!("{} {}", job.title, job.description));

        let skill_keywords =
            extract_keywords_from(profile.skills.iter().map(|skill| skill.name.as_str()));
        let experience_keywords =
            extract_keywords_from(profile.employment_history.iter().flat_map(|entry| {
                [
                    entry.title.as_str(),
                    entry.description.as_deref().unwrap_or_default(),
                ]
            }));
        let education_keywords = extract_keywords_from(profile.education.iter().flat_map(|entry| {
            [
                entry.degree.as_str(),
                entry.field.as_deref().unwrap_or_default(),
            ]
        }));

        let skills_score = jaccard_score(&skill_keywords, &requirement_keywords);
        let experience_score = jaccard_score(&experience_keywords, &job_keywords);
        let education_score = jaccard_score(&education_keywords, &job_keywords);
        let location_score = location_score(job.location.as_deref(), profile.location.as_deref());

        let overall = f64::from(skills_score) * self.weights.skills
            + f64::from(experience_score) * self.weights.experience
            + f64::from(education_score) * self.weights.education
            + f64::from(location_score) * self.weights.location;
        let overall_score = overall.round().clamp(0.0, 100.0) as u8;

        let missing_skills: Vec<&String> = requirement_sequence
            .iter()
            .filter(|keyword| !skill_keywords.contains(*keyword))
            .collect();

        let mut strengths = Vec::new();
        if skills_score >= STRENGTH_THRESHOLD {
            strengths.push("Strong skill match".to_string());
        }
        if experience_score >= STRENGTH_THRESHOLD {
            strengths.push("Relevant work experience".to_string());
        }
        if education_score >= STRENGTH_THRESHOLD {
            strengths.push("Education aligns with the role".to_string());
        }
        if location_score >= STRENGTH_THRESHOLD {
            strengths.push("Location is a good fit".to_string());
        }

        let mut gaps = Vec::new();
        if missing_skills.len() > MISSING_SKILLS_GAP {
            gaps.push(format!(
                "Missing {} keywords from the job description",
                missing_skills.len()
            ));
        }
        if skills_score < GAP_THRESHOLD {
            gaps.push("Limited overlap with the required skills".to_string());
        }
        if experience_score < GAP_THRESHOLD {
            gaps.push("Work history does not closely match this role".to_string());
        }
        if education_score < GAP_THRESHOLD {
            gaps.push("Education differs from what this role usually asks for".to_string());
        }

        let mut recommendations = Vec::new();
        if !missing_skills.is_empty() && skills_score < STRENGTH_THRESHOLD {
            let suggested: Vec<&str> = missing_skills
                .iter()
                .take(SUGGESTED_SKILLS)
                .map(|keyword| keyword.as_str())
                .collect();
            recommendations.push(format!("Consider strengthening: {}", suggested.join(", ")));
        }
        if is_senior_title(&job.title)
            && profile
                .experience_level
                .is_some_and(|level| level.is_early_career())
        {
            recommendations.push(
                "This role targets a more senior level than your current experience".to_string(),
            );
        }
        recommendations.push(closing_recommendation(overall_score).to_string());

        debug!(
            "Match for '{}': overall {} (skills {}, experience {}, education {}, location {})",
            job.title,
            overall_score,
            skills_score,
            experience_score,
            education_score,
            location_score
        );

        MatchScore {
            overall_score,
            skills_score,
            experience_score,
            education_score,
            location_score,
            strengths,
            gaps,
            recommendations,
        }
    }
}

pub fn calculate_job_match(job: &Job, profile: &Profile) -> MatchScore {
    JobMatcher::default().score(job, profile)
}

/// Remote roles and exact matches score 100, same city 75, anything else is neutral.
pub fn location_score(job_location: Option<&str>, profile_location: Option<&str>) -> u8 {
    let job = job_location
        .map(normalize_location)
        .filter(|location| !location.is_empty());
    let profile = profile_location
        .map(normalize_location)
        .filter(|location| !location.is_empty());

    match (job, profile) {
        (Some(job), _) if job.contains("remote") => 100,
        (Some(job), Some(profile)) if job == profile => 100,
        (Some(job), Some(profile))
            if primary_location_segment(&job) == primary_location_segment(&profile) =>
        {
            75
        }
        _ => 50,
    }
}

fn is_senior_title(title: &str) -> bool {
    let keywords = extract_keywords(title);
    SENIOR_TITLE_WORDS
        .iter()
        .any(|word| keywords.contains(*word))
}

fn closing_recommendation(overall_score: u8) -> &'static str {
    match overall_score {
        80.. => "Excellent match - apply with confidence",
        60..=79 => "Good match - tailor your resume to the role's keywords",
        40..=59 => "Moderate match - address the gaps in your cover letter",
        _ => "Low match - consider building experience before applying",
    }
}
