//! humanbench-admin CLI entry point.

use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;
use humanbench_admin::cli::{
    self, Cli, Commands, Global, MaintenanceAction, Parsed, SeedAction, SeoAction,
};
use humanbench_admin::commands::{maintenance, personality, ranks, seo, status, trials, web_settings};
use humanbench_admin::output::{aprintln, p_b, p_c, p_g, p_y, pretty};
use humanbench_admin::{storage, Config};
use humanbench_core::seo::SEO_CONFIG;
use humanbench_core::storage::DocumentStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(Parsed::Run(cli)) => cli,
        Ok(Parsed::MaintenanceUsage) => {
            return match cli::print_maintenance_help() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(err) => err.exit(),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.global.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let policy = cli.command.failure_policy();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            policy.exit_code()
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let global = cli.global;

    let command = match cli.command {
        Commands::Seo(seo_cmd) => {
            run_seo(seo_cmd.action);
            return Ok(());
        }
        command => command,
    };

    let config = Config::from_env().with_data_file(global.data_file.clone());
    let store = storage::open(&config).await?;
    tracing::debug!(store = %store.target_display(), "store opened");

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), store.target_display());
        aprintln!();
    }

    match command {
        Commands::Maintenance(maintenance_cmd) => {
            run_maintenance(maintenance_cmd.action, &store, &global).await
        }
        Commands::Seed(seed_cmd) => run_seed(seed_cmd.action, &store, &global).await,
        Commands::Seo(_) => Ok(()),
    }
}

async fn run_maintenance(
    action: Option<MaintenanceAction>,
    store: &dyn DocumentStore,
    global: &Global,
) -> Result<()> {
    let Some(action) = action else {
        cli::print_maintenance_help()?;
        return Ok(());
    };

    match action {
        MaintenanceAction::Enable { message } => {
            let flag = maintenance::enable(store, message, Utc::now()).await?;
            if !global.is_silent() {
                aprintln!("{}", p_g(&pretty::format_maintenance_flag(&flag)));
            }
        }
        MaintenanceAction::Disable => {
            let flag = maintenance::disable(store, Utc::now()).await?;
            if !global.is_silent() {
                aprintln!("{}", p_g(&pretty::format_maintenance_flag(&flag)));
            }
        }
        MaintenanceAction::Status => {
            let status = maintenance::status(store).await?;
            if !global.is_silent() {
                aprintln!("{}", pretty::format_maintenance_status(&status));
            }
        }
    }

    Ok(())
}

async fn run_seed(action: SeedAction, store: &dyn DocumentStore, global: &Global) -> Result<()> {
    match action {
        SeedAction::Trials(args) => {
            if !global.is_silent() {
                aprintln!("{}", p_y("Seeding decision-making trials..."));
            }
            let report = trials::seed_trials(store, args.key_strategy()).await?;
            if !global.is_silent() {
                aprintln!(
                    "{}",
                    p_g(&pretty::format_load_report("decision trials", &report))
                );
            }
        }
        SeedAction::Personality(args) => {
            if !global.is_silent() {
                aprintln!("{}", p_y("Setting up personality quiz data..."));
            }
            let seed = personality::seed_personality(store, args.key_strategy()).await?;
            if !global.is_silent() {
                aprintln!(
                    "{}",
                    p_g(&pretty::format_load_report("questions", &seed.questions))
                );
                aprintln!("{}", pretty::format_personality_seed(&seed));
            }
        }
        SeedAction::Ranks => {
            let seed = ranks::seed_ranks(store, Utc::now()).await?;
            if !global.is_silent() {
                match seed.mode {
                    ranks::RanksMode::Created => {
                        aprintln!("{}", p_g("Ranks created"));
                    }
                    ranks::RanksMode::Updated { existing } => {
                        aprintln!(
                            "{}",
                            p_y(&format!("Ranks collection had {} documents", existing))
                        );
                        aprintln!("{}", p_g("Ranks updated"));
                    }
                }
                aprintln!();
                aprintln!("{}", pretty::format_ranks(&seed.stored));
            }
        }
        SeedAction::WebSettings => {
            let seed = web_settings::seed_web_settings(store, Utc::now()).await?;
            if !global.is_silent() {
                let verb = if seed.replaced { "updated" } else { "created" };
                aprintln!("{}", p_g(&format!("Web settings {}", verb)));
                aprintln!(
                    "  {} {}",
                    p_b("webGameEnabled:"),
                    p_c(&seed.settings.web_game_enabled.to_string())
                );
                aprintln!(
                    "  {} {}",
                    p_b("playStoreLink:"),
                    p_c(&seed.settings.play_store_link)
                );
            }
        }
        SeedAction::Status => {
            let statuses = status::seed_status(store).await?;
            if !global.is_silent() {
                aprintln!("{}", pretty::format_collection_status(&statuses));
            }
        }
    }

    Ok(())
}

fn run_seo(action: SeoAction) {
    match action {
        SeoAction::Pages => {
            for key in seo::page_keys() {
                aprintln!("{}", key);
            }
        }
        SeoAction::Render { page } => {
            if !seo::is_known_page(&page) {
                tracing::warn!(page = %page, "unknown page, rendering site defaults");
            }
            aprintln!("{}", seo::render_head(&SEO_CONFIG, &page).to_html());
        }
        SeoAction::Config => {
            aprintln!("{:#}", SEO_CONFIG.to_json());
        }
    }
}
