use crate::domain::search::{
    passing_year_span, ActiveFilter, Bounds, CandidateFilters, FilterKey, SearchFilterPayload,
    SkillMatchType, CURRENT_CTC_SPAN, EXPECTED_CTC_SPAN,
};

fn non_empty_list<T: Clone>(values: &[T]) -> Option<Vec<T>> {
    (!values.is_empty()).then(|| values.to_vec())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

/// Bounds covering the whole span are the same as no bounds.
fn narrowed<T: PartialOrd + Copy>(bounds: Option<Bounds<T>>, span: Bounds<T>) -> Option<Bounds<T>> {
    bounds.filter(|b| b.min > span.min || b.max < span.max)
}

fn format_bounds<T: std::fmt::Display>(bounds: &Bounds<T>) -> String {
    format!("{} - {}", bounds.min, bounds.max)
}

impl CandidateFilters {
    /// Flattens the set filters into the API's `filters` object.
    pub fn to_payload(&self) -> SearchFilterPayload {
        let current_ctc = self.effective_current_ctc();
        let expected_ctc = self.effective_expected_ctc();
        let passing_year = self.effective_passing_year();
        SearchFilterPayload {
            locations: non_empty_list(&self.current_locations),
            primary_skills: non_empty_list(&self.primary_skills),
            secondary_skills: non_empty_list(&self.secondary_skills),
            experience_level: non_empty_list(&self.experience_level),
            notice_period: non_empty_list(&self.notice_period),
            employment_types: non_empty_list(&self.employment_types),
            degree: non_empty_list(&self.degree),
            specialization: non_blank(&self.specialization),
            education_gap: non_empty_list(&self.education_gap),
            employment_history: non_empty_list(&self.employment_history),
            application_status: non_empty_list(&self.status),
            experience: self
                .experience
                .map(|range| range.to_filter_payload(self.include_similar_experience)),
            min_current_ctc: current_ctc.map(|b| b.min),
            max_current_ctc: current_ctc.map(|b| b.max),
            min_expected_ctc: expected_ctc.map(|b| b.min),
            max_expected_ctc: expected_ctc.map(|b| b.max),
            company: non_blank(&self.company),
            profile: non_blank(&self.profile),
            skill_match_type: (self.skill_match_type != SkillMatchType::Any)
                .then_some(self.skill_match_type),
            min_passing_year: passing_year.map(|b| b.min),
            max_passing_year: passing_year.map(|b| b.max),
            exclude_duplicates: flag(self.exclude_duplicates),
            exclude_blocked: flag(self.exclude_blocked),
            verified_only: flag(self.verified_only),
        }
    }

    pub fn effective_current_ctc(&self) -> Option<Bounds<f64>> {
        narrowed(self.current_ctc, CURRENT_CTC_SPAN)
    }

    pub fn effective_expected_ctc(&self) -> Option<Bounds<f64>> {
        narrowed(self.expected_ctc, EXPECTED_CTC_SPAN)
    }

    pub fn effective_passing_year(&self) -> Option<Bounds<i32>> {
        narrowed(self.passing_year, passing_year_span())
    }

    pub fn is_empty(&self) -> bool {
        self.active_filters().is_empty()
    }

    /// Whether a search with this free-text query is worth sending.
    pub fn has_active_filters(&self, query: &str) -> bool {
        !query.trim().is_empty() || !self.is_empty()
    }

    /// Resets one filter to its unset value.
    pub fn clear(&mut self, key: FilterKey) {
        match key {
            FilterKey::CurrentLocations => self.current_locations.clear(),
            FilterKey::Experience => {
                self.experience = None;
                self.include_similar_experience = false;
            }
            FilterKey::ExperienceLevel => self.experience_level.clear(),
            FilterKey::NoticePeriod => self.notice_period.clear(),
            FilterKey::EmploymentTypes => self.employment_types.clear(),
            FilterKey::PrimarySkills => self.primary_skills.clear(),
            FilterKey::SecondarySkills => self.secondary_skills.clear(),
            FilterKey::SkillMatchType => self.skill_match_type = SkillMatchType::Any,
            FilterKey::Degree => self.degree.clear(),
            FilterKey::Specialization => self.specialization.clear(),
            FilterKey::PassingYear => self.passing_year = None,
            FilterKey::EducationGap => self.education_gap.clear(),
            FilterKey::EmploymentHistory => self.employment_history.clear(),
            FilterKey::Status => self.status.clear(),
            FilterKey::Company => self.company.clear(),
            FilterKey::Profile => self.profile.clear(),
            FilterKey::CurrentCtc => self.current_ctc = None,
            FilterKey::ExpectedCtc => self.expected_ctc = None,
            FilterKey::ExcludeDuplicates => self.exclude_duplicates = false,
            FilterKey::ExcludeBlocked => self.exclude_blocked = false,
            FilterKey::VerifiedOnly => self.verified_only = false,
        }
    }

    /// One chip per set filter, in display order.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        let mut push = |key: FilterKey, category: &'static str, value: Option<String>| {
            if let Some(value) = value {
                active.push(ActiveFilter {
                    key,
                    category,
                    value,
                });
            }
        };
        let joined = |values: &[String]| (!values.is_empty()).then(|| values.join(", "));

        push(
            FilterKey::CurrentLocations,
            "Current Location",
            joined(&self.current_locations),
        );
        push(
            FilterKey::ExperienceLevel,
            "Experience Level",
            joined(&self.experience_level),
        );
        push(
            FilterKey::Experience,
            "Experience",
            self.experience.map(|range| {
                let mut value = format!("{} to {}", range.min_experience, range.max_experience);
                if self.include_similar_experience {
                    value.push_str(" (+ similar)");
                }
                value
            }),
        );
        push(FilterKey::NoticePeriod, "Notice Period", joined(&self.notice_period));
        push(
            FilterKey::EmploymentTypes,
            "Employment Type",
            joined(&self.employment_types),
        );
        push(FilterKey::PrimarySkills, "Primary Skills", joined(&self.primary_skills));
        push(
            FilterKey::SecondarySkills,
            "Secondary Skills",
            joined(&self.secondary_skills),
        );
        push(
            FilterKey::SkillMatchType,
            "Skill Match",
            (self.skill_match_type == SkillMatchType::All).then(|| "All skills".to_string()),
        );
        push(FilterKey::Degree, "Degree", joined(&self.degree));
        push(FilterKey::Specialization, "Specialization", non_blank(&self.specialization));
        push(
            FilterKey::PassingYear,
            "Passing Year",
            self.effective_passing_year().as_ref().map(format_bounds),
        );
        push(FilterKey::EducationGap, "Education Gap", joined(&self.education_gap));
        push(
            FilterKey::EmploymentHistory,
            "Employment History",
            joined(&self.employment_history),
        );
        push(FilterKey::Company, "Company", non_blank(&self.company));
        push(FilterKey::Profile, "Profile", non_blank(&self.profile));
        push(
            FilterKey::CurrentCtc,
            "Current CTC",
            self.effective_current_ctc().as_ref().map(format_bounds),
        );
        push(
            FilterKey::ExpectedCtc,
            "Expected CTC",
            self.effective_expected_ctc().as_ref().map(format_bounds),
        );
        push(
            FilterKey::Status,
            "Status",
            (!self.status.is_empty()).then(|| {
                self.status
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
        );
        push(
            FilterKey::ExcludeDuplicates,
            "Filter",
            self.exclude_duplicates.then(|| "Exclude Duplicates".to_string()),
        );
        push(
            FilterKey::ExcludeBlocked,
            "Filter",
            self.exclude_blocked.then(|| "Exclude Blocked".to_string()),
        );
        push(
            FilterKey::VerifiedOnly,
            "Filter",
            self.verified_only.then(|| "Verified Only".to_string()),
        );

        active
    }
}
