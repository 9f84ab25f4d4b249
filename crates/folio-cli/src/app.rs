//! The `folio` application: logging setup and command dispatch.

use crate::cli::{CliArgs, Command};
use crate::config::FolioConfig;
use crate::{config_handlers, handlers};
use folio_content::ContentStore;
use folio_core::traits::ConfigProvider;
use folio_core::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ============================================================================
// FolioCli
// ============================================================================

/// The CLI application, holding its loaded configuration.
pub struct FolioCli {
    name: String,
    config: Arc<FolioConfig>,
    version: String,
}

impl FolioCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = FolioConfig::load(args.config.as_deref())?;
        Ok(Self::new("folio", config))
    }

    pub fn new(name: impl Into<String>, config: FolioConfig) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
    /// `log` records from the library crates are forwarded to the same
    /// subscriber.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        let Some(command) = args.command else {
            println!("{} {}: use --help for usage", self.name, self.version);
            return Ok(());
        };
        tracing::debug!(?command, "dispatching");

        match command {
            Command::Version => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Command::Config(config_cmd) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            Command::Render { file, toc } => {
                handlers::handle_render(&file, toc, self.config.render.options()).await
            }
            Command::Mailto(mail) => handlers::handle_mailto(mail, &self.config.contact.recipient),
            Command::List(list) => {
                let store = self.load_content().await?;
                handlers::handle_list(&store, &list, self.config.listing.per_page)
            }
            Command::Filters { collection } => {
                let store = self.load_content().await?;
                handlers::handle_filters(&store, collection)
            }
            Command::Search(search) => {
                let store = self.load_content().await?;
                let delay = self.config.listing.search_debounce();
                handlers::handle_search(&store, &search, delay).await
            }
            Command::Skills { category } => {
                let store = self.load_content().await?;
                handlers::handle_skills(&store, category.as_deref())
            }
            Command::Playlist => {
                let store = self.load_content().await?;
                handlers::handle_playlist(&store)
            }
        }
    }

    async fn load_content(&self) -> Result<ContentStore> {
        let root = self.config.content_path("")?;
        tracing::info!(root = %root.display(), "loading content");
        ContentStore::from_config(&*self.config).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentConfig;
    use clap::Parser;
    use std::path::Path;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        std::fs::create_dir_all(content.join("blog")).unwrap();
        std::fs::write(
            content.join("projects.toml"),
            r#"
                [[projects]]
                id = "folio"
                title = "Folio"
                description = "Portfolio engine"
                tags = ["Rust"]
                date = "2024-01-01"
            "#,
        )
        .unwrap();
        std::fs::write(
            content.join("skills.toml"),
            "[[groups]]\nname = \"Languages\"\n[[groups.skills]]\nname = \"Rust\"\nlevel = 90\n",
        )
        .unwrap();
        std::fs::write(
            content.join("blog").join("hello.md"),
            "---\ntitle: Hello\ndate: 2024-02-02\n---\n# Hello\n",
        )
        .unwrap();
        dir
    }

    fn config_for(root: &Path) -> FolioConfig {
        FolioConfig {
            content: ContentConfig {
                path: Some(root.join("content").to_string_lossy().into_owned()),
            },
            ..Default::default()
        }
    }

    async fn run(root: &Path, argv: &[&str]) -> Result<()> {
        let cli = FolioCli::new("folio", config_for(root)).with_version("0.1.0");
        let mut full = vec!["folio"];
        full.extend_from_slice(argv);
        cli.run(CliArgs::parse_from(full)).await
    }

    #[test]
    fn test_folio_cli_new() {
        let cli = FolioCli::new("my-site", FolioConfig::default()).with_version("1.2.3");
        assert_eq!(cli.name, "my-site");
        assert_eq!(cli.version, "1.2.3");
        assert_eq!(cli.config().project_name(), "folio");
    }

    #[test]
    fn test_from_args_with_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "project_name = \"from-file\"\n").unwrap();

        let args = CliArgs::parse_from(["folio", "--config", path.to_str().unwrap()]);
        let cli = FolioCli::from_args(&args).unwrap();
        assert_eq!(cli.config().project_name(), "from-file");
    }

    #[test]
    fn test_init_logging_variants() {
        let cli = FolioCli::new("folio", FolioConfig::default());
        cli.init_logging(false, false);
        cli.init_logging(true, false);
        cli.init_logging(false, true);
    }

    #[tokio::test]
    async fn test_run_version_and_no_command() {
        let dir = site();
        assert!(run(dir.path(), &["version"]).await.is_ok());
        assert!(run(dir.path(), &[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_content_commands() {
        let dir = site();
        assert!(run(dir.path(), &["list", "projects"]).await.is_ok());
        assert!(run(dir.path(), &["list", "blog", "--json"]).await.is_ok());
        assert!(run(dir.path(), &["filters", "projects"]).await.is_ok());
        assert!(run(dir.path(), &["skills"]).await.is_ok());
        assert!(run(dir.path(), &["playlist"]).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_render_command() {
        let dir = site();
        let post = dir.path().join("content").join("blog").join("hello.md");
        let post = post.to_str().unwrap();
        assert!(run(dir.path(), &["render", post]).await.is_ok());
        assert!(run(dir.path(), &["render", post, "--toc"]).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_render_missing_file() {
        let dir = site();
        let result = run(dir.path(), &["render", "/nonexistent/post.md"]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_missing_content_dir() {
        let dir = TempDir::new().unwrap();
        let err = run(dir.path(), &["list", "projects"]).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_run_mailto_without_recipient() {
        let dir = site();
        let result = run(
            dir.path(),
            &["mailto", "--name", "Ada", "--email", "ada@example.com", "--message", "Hi"],
        )
        .await;
        assert!(result.is_err());

        let result = run(
            dir.path(),
            &[
                "mailto",
                "--name",
                "Ada",
                "--email",
                "ada@example.com",
                "--message",
                "Hi",
                "--to",
                "me@example.com",
            ],
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_config_path_dispatch() {
        let dir = site();
        assert!(run(dir.path(), &["config", "path"]).await.is_ok());
    }
}
