use std::{
    io::{self, Write},
    path::PathBuf,
    str::FromStr,
};

use anyhow::Result;
use chrono::Month;
use clap::{Parser, Subcommand};

use crate::{
    app::{App, AppConfig},
    db::PROFILE_KEY,
    models::RegistrationInput,
    screens::Route,
};

#[derive(Parser, Debug)]
#[command(name = "farmassist")]
#[command(about = "Farm advisory assistant: registration, chat and pest/price alerts")]
pub struct Cli {
    /// Directory holding the local store and settings
    #[arg(long, env = "FARMASSIST_DATA_DIR", default_value = ".farmassist")]
    pub data_dir: PathBuf,

    /// Directory holding the JSON fixtures (overrides settings)
    #[arg(long, env = "FARMASSIST_FIXTURES_DIR")]
    pub fixtures_dir: Option<PathBuf>,

    /// Answer as if it were this month (e.g. "june")
    #[arg(long, value_parser = parse_month)]
    pub month: Option<Month>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register (or re-register) the farmer
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        crop: Option<String>,
    },
    /// Chat with the assistant
    Chat {
        /// Ask one question and exit
        #[arg(long)]
        ask: Option<String>,
    },
    /// Pest alerts and market prices for the registered district
    Notifications,
    /// Show or change stored settings
    Settings {
        /// Persist a new fixtures directory
        #[arg(long)]
        set_fixtures_dir: Option<PathBuf>,
        /// Delete the stored farmer profile
        #[arg(long)]
        forget_profile: bool,
    },
}

fn parse_month(value: &str) -> Result<Month, String> {
    Month::from_str(value.trim()).map_err(|_| format!("unknown month '{value}'"))
}

impl Cli {
    fn app_config(&self) -> AppConfig {
        AppConfig {
            data_dir: self.data_dir.clone(),
            fixtures_dir: self.fixtures_dir.clone(),
            month: self.month,
        }
    }
}

pub async fn dispatch(cli: Cli) -> Result<()> {
    let app = App::open(cli.app_config())?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => {
            let start = if app.db().has_item(PROFILE_KEY).await? {
                Route::Chat
            } else {
                Route::Register
            };
            app.navigate(start, RegistrationInput::default(), &mut input, &mut out)
                .await
        }
        Some(Command::Register {
            name,
            district,
            crop,
        }) => {
            let prefill = RegistrationInput {
                name: name.unwrap_or_default(),
                district: district.unwrap_or_default(),
                crop: crop.unwrap_or_default(),
            };
            app.navigate(Route::Register, prefill, &mut input, &mut out)
                .await
        }
        Some(Command::Chat { ask: Some(question) }) => {
            writeln!(out, "{}", app.ask(&question).await?)?;
            Ok(())
        }
        Some(Command::Chat { ask: None }) => {
            app.navigate(Route::Chat, RegistrationInput::default(), &mut input, &mut out)
                .await
        }
        Some(Command::Notifications) => {
            app.navigate(
                Route::Notifications,
                RegistrationInput::default(),
                &mut input,
                &mut out,
            )
            .await
        }
        Some(Command::Settings {
            set_fixtures_dir,
            forget_profile,
        }) => show_settings(&app, set_fixtures_dir, forget_profile, &mut out).await,
    }
}

async fn show_settings<W: Write>(
    app: &App,
    set_fixtures_dir: Option<PathBuf>,
    forget_profile: bool,
    out: &mut W,
) -> Result<()> {
    if let Some(dir) = set_fixtures_dir {
        let mut fixtures = app.settings().fixtures();
        fixtures.dir = Some(dir);
        app.settings().update_fixtures(fixtures)?;
        writeln!(out, "Saved settings to {}", app.settings().path().display())?;
    }
    if forget_profile {
        if app.db().remove_item(PROFILE_KEY).await? {
            writeln!(out, "Removed the stored farmer profile")?;
        } else {
            writeln!(out, "No farmer profile was stored")?;
        }
    }

    let fixtures = app.settings().fixtures();
    writeln!(out, "Data directory:   {}", app.data_dir().display())?;
    writeln!(out, "Local store:      {}", app.db().path().display())?;
    writeln!(out, "Settings file:    {}", app.settings().path().display())?;
    writeln!(out, "Fixtures in use:  {}", app.loader().dir().display())?;
    writeln!(
        out,
        "Fixture files:    {}, {}, {}",
        fixtures.soil_file, fixtures.calendar_file, fixtures.alerts_file
    )?;

    match app.db().get_item(PROFILE_KEY).await? {
        Some(item) => writeln!(
            out,
            "Registered:       yes (saved {})",
            item.updated_at.format("%Y-%m-%d %H:%M UTC")
        )?,
        None => writeln!(out, "Registered:       no")?,
    }
    writeln!(out, "Stored keys:      {}", app.db().storage_keys().await?.join(", "))?;

    Ok(())
}
