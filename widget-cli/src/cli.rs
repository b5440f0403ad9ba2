use std::{fmt, process::ExitCode};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};
use tracing::debug;
use weather_widget_core::{
    Config, FileStore, HtmlView, OpenWeatherApi, ReqwestClient, SearchHistory, UiEvent, View,
    WeatherWidget, render::escape_html,
};

use crate::terminal::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Weather lookup widget")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the OpenWeather API key and which widget features are enabled.
    Configure,

    /// Look up one city and print the result.
    Show {
        /// City name, e.g. "London".
        city: String,

        /// Print the escaped HTML cards instead of plain text.
        #[arg(long)]
        html: bool,
    },

    /// Run the widget interactively: search, pick recent cities, clear history.
    Interactive,

    /// List recent searches, most recent first.
    History,

    /// Forget recent searches and the last city.
    ClearHistory,
}

impl Cli {
    /// Runs the command. A failed `show` lookup maps to a failure exit code.
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { city, html } => {
                if !show(&Config::load()?, &city, html).await? {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Command::Interactive => interactive().await?,
            Command::History => {
                let history = open_history(&Config::load()?)?;
                if history.entries().is_empty() {
                    println!("No recent searches.");
                }
                for city in history.entries() {
                    println!("{city}");
                }
            }
            Command::ClearHistory => {
                let mut history = open_history(&Config::load()?)?;
                history.clear().context("Failed to clear history")?;
                println!("History cleared.");
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load_file()?;

    let key = Password::new("OpenWeather API key (leave blank to keep current):")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;
    if !key.trim().is_empty() {
        config.api_key = Some(key.trim().to_string());
    }

    config.forecast = Confirm::new("Show the 5-day forecast?")
        .with_default(config.forecast)
        .prompt()?;
    config.history = Confirm::new("Remember recent searches?")
        .with_default(config.history)
        .prompt()?;

    config.save()?;
    println!("Saved {}", Config::config_file_path()?.display());
    Ok(())
}

/// Looks up `city` once and prints the result or the error message.
/// Returns whether the lookup succeeded.
async fn show(config: &Config, city: &str, html: bool) -> anyhow::Result<bool> {
    if !html {
        let mut widget = build_widget(config, TerminalView)?;
        return Ok(widget.submit_search(city).await.is_ok());
    }

    let mut widget = build_widget(config, HtmlView::new())?;
    let ok = widget.submit_search(city).await.is_ok();

    let view = widget.view();
    if ok {
        println!("{}", view.weather_html());
        println!("{}", view.forecast_html());
    } else {
        println!("<p class=\"error\">{}</p>", escape_html(view.error_text()));
    }
    Ok(ok)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuItem {
    Search,
    Recent(String),
    ClearHistory,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Search => f.write_str("Search for a city"),
            MenuItem::Recent(city) => write!(f, "  {city}"),
            MenuItem::ClearHistory => f.write_str("Clear history"),
            MenuItem::Quit => f.write_str("Quit"),
        }
    }
}

fn menu(recent: &[String]) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Search];
    items.extend(recent.iter().cloned().map(MenuItem::Recent));
    if !recent.is_empty() {
        items.push(MenuItem::ClearHistory);
    }
    items.push(MenuItem::Quit);
    items
}

async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut widget = build_widget(&config, TerminalView)?;
    widget.init().await;

    loop {
        println!();
        let choice = match Select::new("What next?", menu(widget.recent_searches())).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let event = match choice {
            MenuItem::Search => match Text::new("City:").prompt() {
                Ok(input) => UiEvent::Submit(input),
                Err(InquireError::OperationCanceled) => continue,
                Err(InquireError::OperationInterrupted) => break,
                Err(e) => return Err(e.into()),
            },
            MenuItem::Recent(city) => UiEvent::RecentSelected(city),
            MenuItem::ClearHistory => UiEvent::ClearHistory,
            MenuItem::Quit => break,
        };

        if let Err(err) = widget.handle(event).await {
            debug!(%err, "search failed");
        }
    }

    Ok(())
}

fn build_widget<V: View>(config: &Config, view: V) -> anyhow::Result<WeatherWidget<V>> {
    let options = config.widget_options();
    let api = OpenWeatherApi::new(&config.base_url, config.api_key()?);
    let widget = WeatherWidget::new(api, Box::new(ReqwestClient::new()), view)
        .with_forecast(options.forecast);

    if !options.history {
        return Ok(widget);
    }

    Ok(widget.with_history(Box::new(open_store(config)?)))
}

fn open_history(config: &Config) -> anyhow::Result<SearchHistory> {
    Ok(SearchHistory::load(Box::new(open_store(config)?)))
}

fn open_store(config: &Config) -> anyhow::Result<FileStore> {
    let path = config.store_file_path()?;
    FileStore::open(&path)
        .with_context(|| format!("Failed to open history store: {}", path.display()))
}
