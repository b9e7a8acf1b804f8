use crate::domain::model::{ExperienceDuration, ExperienceRange};
use crate::domain::search::{CandidateStatus, SkillMatchType, SortOption};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "candidate-search")]
#[command(about = "Experience filters and advanced candidate search for the HR console")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert years and months to decimal years
    ToDecimal(DurationArgs),
    /// Split decimal years into years and months
    FromDecimal { decimal: f64 },
    /// Render years and months for display
    Format(DurationArgs),
    /// Experience band of a decimal value
    Classify { decimal: f64 },
    /// Closeness score of two decimal experience values
    Similarity { a: f64, b: f64 },
    /// List the named experience ranges
    Presets,
    /// Build the API experience filter for a range
    BuildFilter {
        #[command(flatten)]
        range: RangeArgs,
        /// Also match candidates slightly outside the range
        #[arg(long)]
        include_similar: bool,
    },
    /// Read an experience range back from a filter JSON object
    ParseFilter {
        /// JSON such as '{"minExperience":"2.00","maxExperience":"5.00"}'
        json: String,
    },
    /// Check that a range is ordered and non-negative
    ValidateRange(RangeArgs),
    /// Run an advanced candidate search against the API
    Search(SearchArgs),
    /// Manage saved searches
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct DurationArgs {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub years: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub months: i32,
}

impl DurationArgs {
    pub fn duration(&self) -> ExperienceDuration {
        ExperienceDuration::new(self.years, self.months)
    }
}

#[derive(Debug, Clone, Copy, Args)]
pub struct RangeArgs {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min_years: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min_months: i32,
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub max_years: i32,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub max_months: i32,
}

impl RangeArgs {
    pub fn range(&self) -> ExperienceRange {
        ExperienceRange::new(
            ExperienceDuration::new(self.min_years, self.min_months),
            ExperienceDuration::new(self.max_years, self.max_months),
        )
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Relevance,
    Latest,
    ExperienceHigh,
    ExperienceLow,
    SalaryHigh,
    Name,
}

impl From<SortArg> for SortOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortOption::Relevance,
            SortArg::Latest => SortOption::Latest,
            SortArg::ExperienceHigh => SortOption::ExperienceHigh,
            SortArg::ExperienceLow => SortOption::ExperienceLow,
            SortArg::SalaryHigh => SortOption::SalaryHigh,
            SortArg::Name => SortOption::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pending,
    Interested,
    NotInterested,
    TellLater,
    Contacted,
    Offered,
    Hired,
}

impl From<StatusArg> for CandidateStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => CandidateStatus::Pending,
            StatusArg::Interested => CandidateStatus::Interested,
            StatusArg::NotInterested => CandidateStatus::NotInterested,
            StatusArg::TellLater => CandidateStatus::TellLater,
            StatusArg::Contacted => CandidateStatus::Contacted,
            StatusArg::Offered => CandidateStatus::Offered,
            StatusArg::Hired => CandidateStatus::Hired,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Free-text query
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Load filters and query from a saved search first
    #[arg(long)]
    pub saved: Option<i64>,

    #[arg(long, value_delimiter = ',')]
    pub locations: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub skills: Vec<String>,

    /// Require every listed skill instead of any
    #[arg(long)]
    pub all_skills: bool,

    #[arg(long, value_delimiter = ',')]
    pub status: Vec<StatusArg>,

    #[arg(long)]
    pub company: Option<String>,

    /// Minimum experience, e.g. 2y6m as --min-years 2 --min-months 6
    #[arg(long)]
    pub min_years: Option<i32>,
    #[arg(long, default_value_t = 0)]
    pub min_months: i32,
    #[arg(long)]
    pub max_years: Option<i32>,
    #[arg(long, default_value_t = 0)]
    pub max_months: i32,

    /// Also match candidates slightly outside the experience range
    #[arg(long)]
    pub include_similar: bool,

    /// Re-rank returned candidates by experience fit
    #[arg(long)]
    pub rank: bool,

    #[arg(long)]
    pub sort: Option<SortArg>,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long)]
    pub size: Option<u32>,
}

impl SearchArgs {
    pub fn skill_match_type(&self) -> SkillMatchType {
        if self.all_skills {
            SkillMatchType::All
        } else {
            SkillMatchType::Any
        }
    }

    /// `None` when neither bound was given on the command line.
    pub fn experience_range(&self) -> Option<ExperienceRange> {
        if self.min_years.is_none() && self.max_years.is_none() {
            return None;
        }
        let defaults = ExperienceRange::default();
        let min = self
            .min_years
            .map(|y| ExperienceDuration::new(y, self.min_months))
            .unwrap_or(defaults.min_experience);
        let max = self
            .max_years
            .map(|y| ExperienceDuration::new(y, self.max_months))
            .unwrap_or(defaults.max_experience);
        Some(ExperienceRange::new(min, max))
    }
}

#[derive(Debug, Subcommand)]
pub enum SavedAction {
    List,
    Show { id: i64 },
    /// Save a search under a name
    Save {
        name: String,
        #[command(flatten)]
        search: SearchArgs,
    },
    Delete { id: i64 },
    /// Flip the favorite mark
    Favorite { id: i64 },
}
