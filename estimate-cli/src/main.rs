use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use estimate_cli::config::Settings;
use estimate_cli::interactive::Prompter;
use estimate_cli::logging::{enable_file_logging, init_logging, set_log_level};
use estimate_cli::processing::{self, Processing, processing_pause};
use estimate_cli::utils::parse_decimal;
use estimate_cli::{csv_loader, report};
use estimate_core::format::format_range;
use estimate_core::messaging::{GENERIC_OPENER, QuickReply, estimate_message};
use estimate_core::wizard::EstimateWizard;
use estimate_core::{
    EstimateInput, EstimateResult, FinishLevel, LeadInfo, PricingEngine, ProjectType, Scope,
    TimelinePreference,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

/// Interior design cost estimates from project details.
#[derive(Parser, Debug)]
#[command(name = "interior-estimate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level or EnvFilter directive (overrides the settings file)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate one project described by flags
    Quote(QuoteArgs),

    /// Estimate every project in a CSV file
    Batch {
        /// CSV file with one project per row
        #[arg(short, long)]
        file: PathBuf,

        /// Write the results to this CSV file as well
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a chat link with a message already typed in
    Chat {
        /// Canned opener: home, office, shop, architecture or expert
        #[arg(short, long, conflicts_with = "message")]
        topic: Option<QuickReply>,

        /// Custom message text
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Print the rate tables
    Rates,

    /// Answer the estimate questions step by step
    Wizard,
}

#[derive(Args, Debug)]
struct QuoteArgs {
    #[arg(long, default_value_t = ProjectType::Home)]
    project_type: ProjectType,

    #[arg(long, default_value = "Apartment")]
    property_type: String,

    /// Defaults to the configured location
    #[arg(long)]
    location: Option<String>,

    /// Built-up area in square feet
    #[arg(long, value_parser = parse_decimal, allow_hyphen_values = true)]
    area: Decimal,

    #[arg(long)]
    kitchen: bool,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    bedrooms: i32,

    #[arg(long)]
    living_dining: bool,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    wardrobes: i32,

    #[arg(long)]
    false_ceiling: bool,

    #[arg(long)]
    flooring_upgrade: bool,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    workstations: i32,

    #[arg(long)]
    display_units: bool,

    #[arg(long, default_value_t = FinishLevel::Premium)]
    finish_level: FinishLevel,

    #[arg(long, default_value_t = TimelinePreference::Standard)]
    timeline: TimelinePreference,

    /// Reject negative area and counts
    #[arg(long)]
    strict: bool,

    /// Print JSON instead of the report
    #[arg(long)]
    json: bool,

    /// Skip the processing pause
    #[arg(long)]
    no_delay: bool,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    mobile: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    city: Option<String>,
}

impl QuoteArgs {
    fn to_input(
        &self,
        default_location: &str,
    ) -> EstimateInput {
        EstimateInput {
            project_type: self.project_type,
            property_type: self.property_type.clone(),
            location: self
                .location
                .clone()
                .unwrap_or_else(|| default_location.to_string()),
            area: self.area,
            scope: Scope {
                kitchen: self.kitchen,
                bedrooms: self.bedrooms,
                living_dining: self.living_dining,
                wardrobes: self.wardrobes,
                false_ceiling: self.false_ceiling,
                flooring_upgrade: self.flooring_upgrade,
                workstations: self.workstations,
                display_units: self.display_units,
            },
            finish_level: self.finish_level,
            timeline: self.timeline,
        }
    }

    /// Contact details, if any were given. Missing ones are left empty so
    /// validation names them.
    fn lead(&self) -> Option<LeadInfo> {
        let fields = [&self.name, &self.mobile, &self.email, &self.city];
        if fields.iter().all(|f| f.is_none()) {
            return None;
        }
        Some(LeadInfo {
            name: self.name.clone().unwrap_or_default(),
            mobile: self.mobile.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
        })
    }
}

#[derive(Serialize)]
struct QuoteJson<'a> {
    input: &'a EstimateInput,
    result: &'a EstimateResult,
    range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    chat_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("info");

    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref()).with_context(|| {
        match &cli.config {
            Some(path) => format!("Failed to load settings: {}", path.display()),
            None => "Failed to load default settings".to_string(),
        }
    })?;

    if std::env::var_os("RUST_LOG").is_none() {
        let level = cli.log_level.as_deref().unwrap_or(settings.log_level.as_str());
        set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        enable_file_logging(path)?;
    }
    debug!(?settings, "settings loaded");

    match cli.command {
        Command::Quote(args) => quote(&args, &settings).await,
        Command::Batch { file, output } => batch(&file, output.as_deref(), &settings).await,
        Command::Chat { topic, message } => {
            let url = match (topic, message) {
                (_, Some(message)) => settings.messaging.url_for(&message),
                (Some(topic), None) => settings.messaging.url_for_quick_reply(topic),
                (None, None) => settings.messaging.url_for(GENERIC_OPENER),
            };
            println!("{url}");
            Ok(())
        }
        Command::Rates => {
            print!("{}", report::render_rates());
            Ok(())
        }
        Command::Wizard => wizard(&settings).await,
    }
}

async fn quote(
    args: &QuoteArgs,
    settings: &Settings,
) -> Result<()> {
    let engine = if args.strict {
        PricingEngine::strict()
    } else {
        settings.engine()
    };

    let input = args.to_input(&settings.default_location);
    let result = engine
        .calculate(&input)
        .context("Failed to calculate estimate")?;

    let chat_url = match args.lead() {
        Some(lead) => {
            lead.validate().context("Invalid contact details")?;
            Some(
                settings
                    .messaging
                    .url_for(&estimate_message(&input, &result, &lead)),
            )
        }
        None => None,
    };

    if !args.no_delay && !reveal(settings).await {
        return Ok(());
    }

    if args.json {
        let json = QuoteJson {
            input: &input,
            result: &result,
            range: format_range(result.min, result.max),
            chat_url,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&json).context("Failed to serialize estimate")?
        );
    } else {
        print!("{}", report::render_estimate(&input, &result));
        if let Some(url) = chat_url {
            println!("\nContinue on chat: {url}");
        }
    }

    Ok(())
}

async fn batch(
    file: &Path,
    output: Option<&Path>,
    settings: &Settings,
) -> Result<()> {
    let inputs = csv_loader::load_from_file(file)
        .with_context(|| format!("Failed to load CSV: {}", file.display()))?;
    info!(rows = inputs.len(), file = %file.display(), "loaded batch");

    let rows = csv_loader::price_all(&settings.engine(), inputs)
        .with_context(|| format!("Failed to price: {}", file.display()))?;

    if !reveal(settings).await {
        return Ok(());
    }

    for (idx, (input, result)) in rows.iter().enumerate() {
        println!("{}", report::render_summary_line(idx + 1, input, result));
    }

    if let Some(path) = output {
        let out = File::create(path)
            .with_context(|| format!("Failed to create: {}", path.display()))?;
        csv_loader::write_results(BufWriter::new(out), &rows)
            .with_context(|| format!("Failed to write results: {}", path.display()))?;
        println!("Wrote {} estimates to {}", rows.len(), path.display());
    }

    Ok(())
}

async fn wizard(settings: &Settings) -> Result<()> {
    let mut wizard = EstimateWizard::new(settings.engine());
    wizard.set_location(settings.default_location.as_str());

    Prompter::new(io::stdin().lock(), io::stdout().lock()).run(&mut wizard)?;

    let Some(result) = wizard.result().copied() else {
        anyhow::bail!("the wizard finished without an estimate");
    };

    if !reveal(settings).await {
        return Ok(());
    }

    println!();
    print!("{}", report::render_estimate(wizard.input(), &result));
    let message = estimate_message(wizard.input(), &result, wizard.lead());
    println!("\nContinue on chat: {}", settings.messaging.url_for(&message));

    Ok(())
}

/// Runs the processing pause. Returns false if it was cancelled.
async fn reveal(settings: &Settings) -> bool {
    match processing_pause(settings.processing_delay(), processing::ctrl_c()).await {
        Processing::Completed => true,
        Processing::Cancelled => {
            info!("estimate cancelled before it was shown");
            false
        }
    }
}
