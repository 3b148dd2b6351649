//! Interactive menu loop.

use std::fmt;

use anyhow::Result;
use inquire::{Confirm, InquireError, Select, Text};
use weather_core::FavoritesError;

use crate::cli::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    CurrentWeather,
    Forecast,
    ShowFavorites,
    AddFavorite,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::CurrentWeather,
        MenuItem::Forecast,
        MenuItem::ShowFavorites,
        MenuItem::AddFavorite,
        MenuItem::Exit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItem::CurrentWeather => "Current Weather by City",
            MenuItem::Forecast => "5-Day Forecast (Daily Summary)",
            MenuItem::ShowFavorites => "Favorites: Show All",
            MenuItem::AddFavorite => "Favorites: Add City",
            MenuItem::Exit => "Exit",
        })
    }
}

/// Runs until the user picks Exit or cancels the main prompt.
pub async fn run(app: &App) -> Result<()> {
    // Fail on a missing API key before showing anything.
    let provider = app.provider()?;

    loop {
        let choice = match Select::new("WEATHER CLI", MenuItem::ALL.to_vec()).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        match choice {
            MenuItem::CurrentWeather => {
                let Some(city) = ask_city()? else { continue };
                if app.show_current(provider.as_ref(), &city).await?.is_some()
                    && confirm("Add to favorites?")?
                {
                    add(app, &city)?;
                }
            }
            MenuItem::Forecast => {
                let Some(city) = ask_city()? else { continue };
                app.show_forecast(provider.as_ref(), &city).await?;
            }
            MenuItem::ShowFavorites => app.show_favorites(provider.as_ref()).await?,
            MenuItem::AddFavorite => {
                let Some(city) = ask_city()? else { continue };
                add(app, &city)?;
            }
            MenuItem::Exit => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// `None` when the prompt was cancelled or left empty.
fn ask_city() -> Result<Option<String>> {
    match Text::new("Enter city:").prompt() {
        Ok(city) if city.trim().is_empty() => {
            println!("Invalid city.");
            Ok(None)
        }
        Ok(city) => Ok(Some(city)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn confirm(message: &str) -> Result<bool> {
    match Confirm::new(message).with_default(false).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Like [`App::add_favorite`], but an unusable name only prints a message.
fn add(app: &App, city: &str) -> Result<()> {
    match app.add_favorite(city) {
        Err(err)
            if matches!(
                err.downcast_ref::<FavoritesError>(),
                Some(FavoritesError::InvalidName(_))
            ) =>
        {
            println!("Cannot save {city:?} as a favorite.");
            Ok(())
        }
        other => other,
    }
}
