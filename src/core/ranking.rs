//! Client-side ordering of search results by how well each candidate's
//! experience fits the requested range.

use crate::core::experience::{experience_similarity, parse_experience_text};
use crate::domain::model::{ExperienceCategory, ExperienceRange};
use crate::domain::search::CandidateSummary;
use serde::Serialize;

/// Minimum score for an out-of-range candidate to count as similar.
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceMatch {
    Exact,
    Similar,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub candidate: CandidateSummary,
    pub experience_years: f64,
    pub category: ExperienceCategory,
    pub score: f64,
    pub matched: ExperienceMatch,
}

/// Score of `years` against `range`: 1.0 inside, otherwise the similarity
/// to the nearer bound.
pub fn range_fit(years: f64, range: &ExperienceRange) -> f64 {
    let min = range.min_experience.to_decimal();
    let max = range.max_experience.to_decimal();
    if years < min {
        experience_similarity(years, min)
    } else if years > max {
        experience_similarity(years, max)
    } else {
        1.0
    }
}

/// Keeps candidates inside the range, plus near misses when
/// `include_similar` is set, best score first. Ties keep input order.
pub fn rank_by_experience(
    candidates: Vec<CandidateSummary>,
    range: &ExperienceRange,
    include_similar: bool,
) -> Vec<RankedCandidate> {
    let total = candidates.len();
    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let years = candidate
                .experience
                .as_deref()
                .map(parse_experience_text)
                .unwrap_or(0.0);
            let score = range_fit(years, range);
            let matched = if score >= 1.0 {
                ExperienceMatch::Exact
            } else if include_similar && score >= SIMILARITY_THRESHOLD {
                ExperienceMatch::Similar
            } else {
                return None;
            };
            Some(RankedCandidate {
                candidate,
                experience_years: years,
                category: ExperienceCategory::classify(years),
                score,
                matched,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    tracing::debug!(
        kept = ranked.len(),
        dropped = total - ranked.len(),
        "ranked candidates by experience"
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExperienceDuration;

    fn candidate(id: i64, experience: &str) -> CandidateSummary {
        CandidateSummary {
            id,
            first_name: format!("Candidate{}", id),
            experience: Some(experience.to_string()),
            ..Default::default()
        }
    }

    fn range(min: i32, max: i32) -> ExperienceRange {
        ExperienceRange::new(ExperienceDuration::years(min), ExperienceDuration::years(max))
    }

    #[test]
    fn test_range_fit() {
        let r = range(4, 6);
        assert_eq!(range_fit(5.0, &r), 1.0);
        assert_eq!(range_fit(4.0, &r), 1.0);
        assert!(range_fit(6.5, &r) > range_fit(9.0, &r));
        assert!(range_fit(3.5, &r) < 1.0);
    }

    #[test]
    fn test_exact_only_without_similar() {
        let ranked = rank_by_experience(
            vec![candidate(1, "3 years"), candidate(2, "5 years"), candidate(3, "6.5 years")],
            &range(4, 6),
            false,
        );
        let ids: Vec<i64> = ranked.iter().map(|r| r.candidate.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(ranked[0].matched, ExperienceMatch::Exact);
        assert_eq!(ranked[0].category, ExperienceCategory::MidLevel);
    }

    #[test]
    fn test_similar_candidates_follow_exact_matches() {
        let ranked = rank_by_experience(
            vec![
                candidate(1, "6 years 6 months"),
                candidate(2, "15 years"),
                candidate(3, "4"),
                candidate(4, "5 years"),
            ],
            &range(4, 6),
            true,
        );
        let ids: Vec<i64> = ranked.iter().map(|r| r.candidate.id).collect();
        // 6.5 vs 6: diff 0.5, base 1 - 0.5/6.5, weight 1.0
        assert_eq!(ids, vec![3, 4, 1]);
        assert_eq!(ranked[2].matched, ExperienceMatch::Similar);
    }

    #[test]
    fn test_missing_experience_counts_as_zero() {
        let mut no_experience = candidate(9, "");
        no_experience.experience = None;
        let ranked = rank_by_experience(vec![no_experience], &range(0, 1), false);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].experience_years, 0.0);
    }
}
