use candidate_search::config::cli::{CliConfig, Command, SavedAction, SearchArgs};
use candidate_search::core::ranking::rank_by_experience;
use candidate_search::domain::search::CandidateFilters;
use candidate_search::utils::error::{ErrorSeverity, Result, SearchError};
use candidate_search::utils::{logger, validation::Validate};
use candidate_search::{
    build_experience_filters, decimal_to_years_months, experience_presets, experience_similarity,
    format_experience, parse_experience_filter_report, validate_experience_range, AppConfig,
    ExperienceCategory, ExperienceFilterInput, HttpSearchClient, JsonFileStore,
    SavedSearchRepository, SearchSession,
};
use clap::Parser;
use serde::Serialize;
use serde_json::json;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.logging.json {
        logger::init_json_logger(&config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn load_config(path: Option<&str>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(command: Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::ToDecimal(args) => {
            println!("{}", args.duration().to_decimal());
        }
        Command::FromDecimal { decimal } => {
            print_json(&decimal_to_years_months(decimal))?;
        }
        Command::Format(args) => {
            println!("{}", format_experience(args.years, args.months));
        }
        Command::Classify { decimal } => {
            println!("{}", ExperienceCategory::classify(decimal));
        }
        Command::Similarity { a, b } => {
            println!("{:.4}", experience_similarity(a, b));
        }
        Command::Presets => {
            print_json(&experience_presets())?;
        }
        Command::BuildFilter {
            range,
            include_similar,
        } => {
            let range = range.range();
            if !range.is_valid() {
                tracing::warn!("experience range is inverted or negative");
            }
            print_json(&build_experience_filters(&range, include_similar))?;
        }
        Command::ParseFilter { json } => {
            let input: ExperienceFilterInput = serde_json::from_str(&json)?;
            print_json(&parse_experience_filter_report(&input))?;
        }
        Command::ValidateRange(args) => {
            let range = args.range();
            let valid = validate_experience_range(&range.min_experience, &range.max_experience);
            print_json(&json!({ "valid": valid }))?;
            if !valid {
                return Err(SearchError::ValidationError {
                    message: format!(
                        "{} to {} is not a valid experience range",
                        range.min_experience, range.max_experience
                    ),
                });
            }
        }
        Command::Search(args) => run_search(args, config).await?,
        Command::Saved { action } => run_saved(action, config)?,
    }
    Ok(())
}

fn saved_repository(config: &AppConfig) -> SavedSearchRepository<JsonFileStore> {
    SavedSearchRepository::new(JsonFileStore::new(&config.storage.saved_searches_path))
}

/// Applies command-line filters on top of `base`.
fn filters_from_args(args: &SearchArgs, mut filters: CandidateFilters) -> CandidateFilters {
    if !args.locations.is_empty() {
        filters.current_locations = args.locations.clone();
    }
    if !args.skills.is_empty() {
        filters.primary_skills = args.skills.clone();
        filters.skill_match_type = args.skill_match_type();
    }
    if !args.status.is_empty() {
        filters.status = args.status.iter().map(|s| (*s).into()).collect();
    }
    if let Some(company) = &args.company {
        filters.company = company.clone();
    }
    if let Some(range) = args.experience_range() {
        filters.experience = Some(range);
    }
    if args.include_similar {
        filters.include_similar_experience = true;
    }
    filters
}

async fn run_search(args: SearchArgs, config: &AppConfig) -> Result<()> {
    let (base_query, base_filters) = match args.saved {
        Some(id) => {
            let saved = saved_repository(config).get(id)?;
            tracing::info!(id, name = %saved.name, "loaded saved search");
            (saved.query, saved.filters)
        }
        None => (String::new(), CandidateFilters::default()),
    };

    let filters = filters_from_args(&args, base_filters);
    if let Some(range) = filters.experience {
        if !range.is_valid() {
            return Err(SearchError::ValidationError {
                message: format!(
                    "minimum experience {} exceeds maximum {}",
                    range.min_experience, range.max_experience
                ),
            });
        }
    }
    let query = if args.query.is_empty() {
        base_query
    } else {
        args.query.clone()
    };

    let client = HttpSearchClient::new(config)?;
    tracing::info!(endpoint = client.endpoint(), "searching candidates");

    let session = SearchSession::with_settings(
        client,
        args.size.unwrap_or(config.search.page_size),
        config.debounce(),
    );
    if let Some(size) = args.size {
        session.set_page_size(size).await?;
    }
    session.set_query(&query).await;
    session.set_filters(filters.clone()).await;
    session
        .set_sort(args.sort.map(Into::into).unwrap_or(config.search.sort_by))
        .await;
    session.set_page(args.page).await?;

    if !session.should_search().await {
        return Err(SearchError::ValidationError {
            message: "give a query or at least one filter".to_string(),
        });
    }

    let response = session.search().await?;

    match (args.rank, filters.experience) {
        (true, Some(range)) => {
            let ranked = rank_by_experience(
                response.results,
                &range,
                filters.include_similar_experience,
            );
            print_json(&json!({
                "results": ranked,
                "totalCount": response.total_count,
                "totalPages": response.total_pages,
            }))?;
        }
        (true, None) => {
            tracing::warn!("--rank needs an experience range; printing results unranked");
            print_json(&response)?;
        }
        _ => print_json(&response)?,
    }
    Ok(())
}

fn run_saved(action: SavedAction, config: &AppConfig) -> Result<()> {
    let repository = saved_repository(config);
    match action {
        SavedAction::List => {
            let searches = repository.list()?;
            if searches.is_empty() {
                println!("No saved searches.");
            }
            for search in searches {
                let marker = if search.is_favorite { "★" } else { " " };
                let chips: Vec<String> = search
                    .filters
                    .active_filters()
                    .into_iter()
                    .map(|f| format!("{}: {}", f.category, f.value))
                    .collect();
                println!(
                    "{} {}  {}  [{}] {}",
                    marker,
                    search.id,
                    search.name,
                    search.query,
                    chips.join("; ")
                );
            }
        }
        SavedAction::Show { id } => print_json(&repository.get(id)?)?,
        SavedAction::Save { name, search } => {
            let filters = filters_from_args(&search, CandidateFilters::default());
            let saved = repository.save(&name, &search.query, &filters)?;
            println!("Saved search {} ({})", saved.id, saved.name);
        }
        SavedAction::Delete { id } => {
            repository.delete(id)?;
            println!("Deleted saved search {}", id);
        }
        SavedAction::Favorite { id } => {
            let saved = repository.toggle_favorite(id)?;
            println!(
                "{} is {}a favorite",
                saved.name,
                if saved.is_favorite { "" } else { "no longer " }
            );
        }
    }
    Ok(())
}
