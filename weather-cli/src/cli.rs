use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::Password;
use tracing::debug;
use weather_core::{
    AddOutcome, Config, CurrentWeather, FavoritesStore, WeatherProvider, compute_alerts,
    provider_from_config,
};

use crate::{menu, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    /// OpenWeather API key; overrides the key saved by `weather configure`.
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather and alerts for a city.
    Current {
        /// City name, e.g. "Paris" or "New York".
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Also add the city to favorites.
        #[arg(long)]
        save: bool,
    },

    /// Show the 5-day daily forecast for a city.
    Forecast {
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Manage favorite cities.
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },

    /// Store an OpenWeather API key in the config file.
    Configure,

    /// Interactive menu.
    Menu,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List saved cities.
    List,

    /// Add a city.
    Add {
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Show current weather for every saved city.
    Show,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        let app = App {
            config,
            api_key: self.api_key,
            json: self.json,
        };

        match self.command.unwrap_or(Command::Menu) {
            Command::Current { city, save } => {
                let city = city.join(" ");
                let provider = app.provider()?;
                let found = app.show_current(provider.as_ref(), &city).await?;
                if save && found.is_some() {
                    app.add_favorite(&city)?;
                }
            }
            Command::Forecast { city } => {
                let provider = app.provider()?;
                app.show_forecast(provider.as_ref(), &city.join(" ")).await?;
            }
            Command::Favorites { action } => match action {
                FavoritesCommand::List => app.list_favorites()?,
                FavoritesCommand::Add { city } => app.add_favorite(&city.join(" "))?,
                FavoritesCommand::Show => {
                    let provider = app.provider()?;
                    app.show_favorites(provider.as_ref()).await?;
                }
            },
            Command::Configure => configure(app.config)?,
            Command::Menu => menu::run(&app).await?,
        }

        Ok(())
    }
}

/// Resolved settings shared by subcommands and the menu.
#[derive(Debug)]
pub struct App {
    config: Config,
    api_key: Option<String>,
    json: bool,
}

impl App {
    pub fn provider(&self) -> Result<Box<dyn WeatherProvider>> {
        provider_from_config(&self.config, self.api_key.as_deref())
    }

    pub fn favorites(&self) -> Result<FavoritesStore> {
        let store = FavoritesStore::from_config(&self.config)?;
        debug!(path = %store.path().display(), "using favorites file");
        Ok(store)
    }

    /// Prints current conditions, returning them when the fetch succeeded.
    pub async fn show_current(
        &self,
        provider: &dyn WeatherProvider,
        city: &str,
    ) -> Result<Option<CurrentWeather>> {
        let cw = match provider.current(city).await {
            Ok(cw) => cw,
            Err(err) => {
                debug!(city, error = %err, "current weather unavailable");
                println!("⚠️ Could not fetch current weather. Check city/API key.");
                return Ok(None);
            }
        };

        let alerts = compute_alerts(cw.temp_c, &cw.description);
        if self.json {
            let value = serde_json::json!({ "weather": &cw, "alerts": alerts });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            print!("\n{}", render::current_weather(&cw, &alerts));
        }

        Ok(Some(cw))
    }

    pub async fn show_forecast(&self, provider: &dyn WeatherProvider, city: &str) -> Result<()> {
        let days = match provider.forecast(city).await {
            Ok(days) => days,
            Err(err) => {
                debug!(city, error = %err, "forecast unavailable");
                println!("⚠️ Could not fetch forecast. Check city/API key.");
                return Ok(());
            }
        };

        if self.json {
            let value = serde_json::json!({ "city": city, "days": days });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            print!("\n{}", render::forecast(city, &days));
        }
        Ok(())
    }

    pub async fn show_favorites(&self, provider: &dyn WeatherProvider) -> Result<()> {
        let cities = self.favorites()?.load()?;
        if cities.is_empty() {
            print!("{}", render::favorites_list(&cities));
            return Ok(());
        }

        let mut rows = Vec::with_capacity(cities.len());
        for city in &cities {
            let cw = provider.current(city).await.ok();
            rows.push((city, cw));
        }

        if self.json {
            let value: Vec<_> = rows
                .iter()
                .map(|(city, cw)| serde_json::json!({ "city": city, "weather": cw }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("\n=== Favorites (Current Weather) ===");
            for (city, cw) in &rows {
                println!("{}", render::favorite_line(city, cw.as_ref()));
            }
        }
        Ok(())
    }

    pub fn list_favorites(&self) -> Result<()> {
        let cities = self.favorites()?.list()?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&cities)?);
        } else {
            print!("{}", render::favorites_list(&cities));
        }
        Ok(())
    }

    pub fn add_favorite(&self, city: &str) -> Result<()> {
        match self.favorites()?.add(city)? {
            AddOutcome::Added => println!("Added to favorites."),
            AddOutcome::AlreadyPresent => println!("Already in favorites."),
        }
        Ok(())
    }
}

fn configure(mut config: Config) -> Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!(
        "Saved API key to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}
