//! `render` command: produce the complete portfolio page as static HTML.

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::github::{curate, GithubClient, RepoSource};
use crate::page::{current_year, render_page, PageInput};
use crate::sections::{ContactForm, ProjectsState, RenderContext};
use crate::storage::FileStore;
use crate::theme::{AppearanceMode, DocumentRoot, ThemeContext, ThemeStore, THEME_ATTRIBUTE};
use crate::viewport::{BreakpointObserver, Viewport};

/// Render the portfolio page to HTML
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Target viewport width in pixels (omit for a width-less render)
    #[arg(short, long, value_name = "PX")]
    pub width: Option<u32>,

    /// Appearance mode (defaults to the saved preference)
    #[arg(long, value_enum)]
    pub theme: Option<AppearanceMode>,

    /// Skip the GitHub fetch and render an empty project listing
    #[arg(long)]
    pub offline: bool,
}

impl RenderArgs {
    /// Execute the render command
    pub async fn execute(&self) -> CliResult<()> {
        let config = Config::from_environment()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let projects = if self.offline {
            ProjectsState::Loaded(Vec::new())
        } else {
            fetch_projects(&config).await
        };

        let (theme, document) = self.resolve_theme()?;

        let viewport = match self.width {
            Some(width) => Viewport::new(width),
            None => Viewport::headless(),
        };
        let observer = BreakpointObserver::attach(&viewport);

        let form = ContactForm::new();
        let html = render_page(&PageInput {
            ctx: RenderContext::new(observer.current_class(), theme),
            document: &document,
            projects: &projects,
            github_user: &config.site.github_user,
            form: &form,
            year: current_year(),
        });

        self.write_output(&html)
    }

    /// Picks the mode from `--theme` or the persisted preference.
    ///
    /// An explicit `--theme` is a one-off and is not saved.
    fn resolve_theme(&self) -> CliResult<(ThemeContext, DocumentRoot)> {
        if let Some(mode) = self.theme {
            let mut document = DocumentRoot::default();
            document.set_attribute(THEME_ATTRIBUTE, mode.as_str());
            return Ok((ThemeContext::for_mode(mode), document));
        }

        let storage = FileStore::open_default()
            .map_err(|e| CliError::io(format!("Failed to open preferences: {e:#}")))?;
        let store = ThemeStore::initialize(storage);
        Ok((store.context(), store.document().clone()))
    }

    fn write_output(&self, html: &str) -> CliResult<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, html).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {}", path.display(), e))
                })?;
                info!("Wrote {} bytes to {}", html.len(), path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(html.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| CliError::io(format!("Failed to write output: {e}")))?;
            }
        }
        Ok(())
    }
}

/// Fetches and curates the repository listing, folding failures into
/// [`ProjectsState::Failed`].
pub async fn fetch_projects(config: &Config) -> ProjectsState {
    let client = match GithubClient::new() {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to build GitHub client: {e}");
            return ProjectsState::Failed;
        }
    };
    load_projects(&client, config).await
}

/// Loads the listing from any [`RepoSource`].
pub async fn load_projects(source: &dyn RepoSource, config: &Config) -> ProjectsState {
    let user = &config.site.github_user;
    match source.list_repositories(user).await {
        Ok(repos) => {
            let mut excluded = config.site.excluded_repos.clone();
            excluded.push(user.clone());
            let curated = curate(repos, &excluded);
            info!("Loaded {} repositories for {}", curated.len(), user);
            ProjectsState::Loaded(curated)
        }
        Err(e) => {
            warn!("Failed to fetch repositories for {user}: {e}");
            ProjectsState::Failed
        }
    }
}
