use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use deskfolio::app::App;
use deskfolio::content::email::Mailer;
use deskfolio::content::github::GithubClient;
use deskfolio::content::loader::ContentSource;
use deskfolio::content::store::DataStore;
use deskfolio::event_loop::{ControlFlow, EventLoop};
use deskfolio::tracing_sub;

#[derive(Debug, Parser)]
#[command(name = "deskfolio", about = "Portfolio desktop in the terminal")]
struct Cli {
    /// Base URL of the portfolio data API.
    #[arg(long, default_value = "http://localhost:3000/api/db")]
    base_url: String,

    /// Repository hosting account to list projects from.
    #[arg(long, env = "GITHUB_USERNAME")]
    user: Option<String>,

    /// Comma-separated repository names whose READMEs are fetched and
    /// parsed into project sheets.
    #[arg(long, value_delimiter = ',')]
    featured: Vec<String>,

    /// Run on canned data, no network at all.
    #[arg(long)]
    demo: bool,

    /// Append debug logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Input poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    poll_ms: u64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init_file(cli.log_file.as_deref())?;

    let source = build_source(&cli).map_err(io::Error::other)?;
    let mailer = Mailer::from_env();
    let mut app = App::new(source, mailer);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = EventLoop::new(Duration::from_millis(cli.poll_ms)).run(|event| match event {
        Some(event) => Ok(app.on_event(&event)),
        None => {
            app.on_tick();
            terminal.draw(|frame| app.draw(frame))?;
            Ok(ControlFlow::Continue)
        }
    });

    terminal::disable_raw_mode()?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;

    result
}

fn build_source(cli: &Cli) -> Result<ContentSource, deskfolio::content::store::FetchError> {
    if cli.demo {
        return Ok(ContentSource::Demo);
    }
    let store = Arc::new(DataStore::new(cli.base_url.clone())?);
    let github = match cli.user.clone() {
        Some(user) => {
            let token = std::env::var("GITHUB_TOKEN").ok();
            Some(Arc::new(GithubClient::new(user, token, cli.featured.clone())?))
        }
        None => {
            tracing::info!("no hosting account configured, projects will be empty");
            None
        }
    };
    Ok(ContentSource::Remote { store, github })
}
