mod cli;

use clap::Parser;
use leadscope::catalog::Catalog;
use leadscope::error::{LeadscopeError, Result};
use leadscope::report::{self, OutputFormat};
use leadscope::scoring::{self, profile::ProfileTable};
use leadscope::types::assessment::{Assessment, RaterType};
use leadscope::types::config::{LeadscopeConfig, ScoringSettings};
use leadscope::types::question::Section;
use leadscope::{config, intake, logging};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct Context {
    config: LeadscopeConfig,
    catalog: Catalog,
}

impl Context {
    fn load(cli: &cli::Cli) -> Result<Self> {
        let config = config::load_config(&cli.config_dir)?.unwrap_or_default();
        logging::init(
            logging::cli_level(cli.verbose, cli.quiet),
            config.log_level(),
        )?;

        let catalog = match config.catalog_path() {
            Some(path) if path.is_absolute() => Catalog::load(path)?,
            Some(path) => Catalog::load(&cli.config_dir.join(path))?,
            None => Catalog::builtin(),
        };
        tracing::debug!(
            version = catalog.version(),
            fingerprint = catalog.fingerprint(),
            "using catalog"
        );
        Ok(Self { config, catalog })
    }

    fn settings(&self, table: Option<cli::TableChoice>) -> ScoringSettings {
        let mut settings = self.config.settings();
        if let Some(table) = table {
            settings.profile_table = profile_table(table);
        }
        settings
    }
}

fn profile_table(choice: cli::TableChoice) -> ProfileTable {
    match choice {
        cli::TableChoice::Archetype => ProfileTable::Archetype,
        cli::TableChoice::Achiever => ProfileTable::Achiever,
    }
}

fn rater_type(choice: cli::RaterChoice) -> RaterType {
    match choice {
        cli::RaterChoice::SelfRater => RaterType::SelfRater,
        cli::RaterChoice::Rater1 => RaterType::Rater1,
        cli::RaterChoice::Rater2 => RaterType::Rater2,
    }
}

fn output_format(format: cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    let ctx = Context::load(&cli)?;

    match &cli.command {
        cli::Commands::Score(cmd) => {
            let settings = ctx.settings(cmd.table);
            let files = intake::discover(&cmd.path)?;
            if files.is_empty() {
                eprintln!("warning: no assessment files under {}", cmd.path.display());
                return Ok(exit_code::WARNINGS);
            }

            let mut has_notices = false;
            for (index, file) in files.iter().enumerate() {
                let assessment = intake::load_assessment(file)?;
                let score_report = scoring::score_assessment(&assessment, &ctx.catalog, &settings);
                has_notices |= score_report.has_notices();
                if index > 0 {
                    println!("---");
                }
                println!("{}", report::render(&score_report, output_format(cmd.format))?);
            }

            if has_notices {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Rater(cmd) => {
            let settings = ctx.settings(cmd.table);
            let assessment = intake::load_assessment(&cmd.path)?;
            let wanted = rater_type(cmd.rater);
            let rater = assessment
                .rater(wanted)
                .ok_or(LeadscopeError::RaterMissing(wanted))?;
            let score_report = scoring::score_rater(&assessment, rater, &ctx.catalog, &settings);
            println!("{}", report::render(&score_report, output_format(cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Classify(cmd) => {
            let table = ctx.settings(cmd.table).profile_table;
            let scores = [
                cmd.esteem,
                cmd.trust,
                cmd.driver,
                cmd.adaptability,
                cmd.problem_resolution,
            ];
            println!("{}", table.classify(&scores));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            if let Some(path) = &cmd.export {
                std::fs::write(path, ctx.catalog.to_json()?)?;
                println!(
                    "exported catalog {} ({} questions) to {}",
                    ctx.catalog.version(),
                    ctx.catalog.all().len(),
                    path.display()
                );
                return Ok(exit_code::SUCCESS);
            }

            let questions = match &cmd.section {
                Some(name) => {
                    let section = Section::parse(name).ok_or_else(|| {
                        LeadscopeError::Catalog(format!("unknown section: {name}"))
                    })?;
                    ctx.catalog.by_section(section)
                }
                None => ctx.catalog.all().iter().collect(),
            };

            println!(
                "catalog {} (sha256 {})",
                ctx.catalog.version(),
                ctx.catalog.fingerprint()
            );
            for question in questions {
                println!(
                    "- {} [{}/{}] {}",
                    question.id, question.section, question.sub_section, question.text
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Status(cmd) => {
            let assessment = intake::load_assessment(&cmd.path)?;
            let total = ctx.catalog.all().len();
            println!(
                "assessment {} for {}: {}",
                assessment.code,
                assessment.self_rater_name,
                if assessment.completed { "complete" } else { "in progress" }
            );
            for rater in &assessment.raters {
                let missing = rater.missing_questions(&ctx.catalog).len();
                println!(
                    "- {} {}: {}/{} answered{}",
                    rater.rater_type,
                    rater.name,
                    total - missing,
                    total,
                    if rater.completed { ", complete" } else { "" }
                );
            }
            if assessment.completed {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::New(cmd) => {
            if cmd.no_overwrite && cmd.path.exists() {
                return Err(LeadscopeError::AlreadyExists(
                    cmd.path.display().to_string(),
                ));
            }
            let assessment = Assessment::start(&cmd.email, &cmd.name, chrono::Utc::now());
            intake::save_assessment(&cmd.path, &assessment)?;
            println!("assessment code: {}", assessment.code);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Answer(cmd) => {
            let mut assessment = intake::load_assessment(&cmd.path)?;
            let wanted = rater_type(cmd.rater);
            let now = chrono::Utc::now();

            if assessment.rater(wanted).is_none() && wanted.is_external() {
                match (&cmd.email, &cmd.name) {
                    (Some(email), Some(name)) => {
                        assessment.add_rater(wanted, email, name, now)?;
                        tracing::info!(rater = %wanted, "added rater");
                    }
                    _ => return Err(LeadscopeError::RaterMissing(wanted)),
                }
            }

            assessment.record_response(&ctx.catalog, wanted, &cmd.question, cmd.score, now)?;
            intake::save_assessment(&cmd.path, &assessment)?;

            if let Some(rater) = assessment.rater(wanted) {
                let missing = rater.missing_questions(&ctx.catalog).len();
                println!(
                    "recorded {} = {} for {}; {} question(s) left",
                    cmd.question, cmd.score, wanted, missing
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
