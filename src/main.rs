use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, net::SocketAddr, path::PathBuf, sync::Arc};

use photodeck::config::Config;
use photodeck::gallery::GalleryController;
use photodeck::host::{local::LocalHost, remote::RemoteHost, FolderHost};
use photodeck::model::{Model, RootPrompt};
use photodeck::viewer::Viewer;

mod app;
mod handlers;
mod messages;
mod services;
mod ui;
mod utils;

use messages::{AppMessage, ImagePreviewState};

/// Terminal photo gallery for local folders and photodeck servers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (photodeck-debug.log)
    #[arg(short, long, global = true)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse a folder in the terminal (default)
    Browse {
        /// Folder to open. Without it the root prompt is shown.
        root: Option<String>,

        /// Browse a photodeck server instead of the local filesystem
        #[arg(long)]
        remote: Option<String>,

        /// Enable vim keybindings (hjkl, gg/G)
        #[arg(long)]
        vim: bool,
    },
    /// Serve a folder over HTTP
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<String>,

        /// Folder to serve
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

pub struct App<F: FolderHost> {
    pub model: Model,
    pub gallery: GalleryController<F::Handle>,
    pub viewer: Viewer<ImagePreviewState>,
    /// Inline preview of the selected image, keyed by selection generation
    pub preview: Option<(u64, ImagePreviewState)>,

    host: Arc<F>,
    image_picker: Option<ratatui_image::picker::Picker>,
    msg_tx: tokio::sync::mpsc::UnboundedSender<AppMessage<F::Handle>>,
    msg_rx: tokio::sync::mpsc::UnboundedReceiver<AppMessage<F::Handle>>,
    /// Prefill for the root prompt
    root_hint: String,
    /// Browsing a photodeck server rather than the local filesystem
    remote: bool,
}

impl<F: FolderHost> App<F> {
    fn new(host: F, config: &Config, root_hint: String) -> Self {
        let (msg_tx, msg_rx) = tokio::sync::mpsc::unbounded_channel();

        let image_picker = if config.image_preview_enabled {
            let picker = build_picker(&config.image_protocol);
            let font_size = picker.font_size();
            log::debug!("Image font size: {}x{}", font_size.0, font_size.1);
            Some(picker)
        } else {
            log::debug!("Image preview disabled in config");
            None
        };

        let model = Model::new(config.vim_mode, config.image_preview_enabled);

        Self {
            model,
            gallery: GalleryController::new(),
            viewer: Viewer::new(),
            preview: None,
            host: Arc::new(host),
            image_picker,
            msg_tx,
            msg_rx,
            root_hint,
            remote: config.remote_url.is_some(),
        }
    }

    /// Show the root prompt prefilled with the last request
    pub fn open_root_prompt(&mut self) {
        self.model.ui.root_prompt = Some(RootPrompt::with_input(self.root_hint.clone()));
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key).await
    }
}

/// Detect the terminal graphics protocol, then apply the configured override
fn build_picker(protocol: &str) -> ratatui_image::picker::Picker {
    use ratatui_image::picker::{Picker, ProtocolType};

    let mut picker = match Picker::from_query_stdio() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("Image preview: Failed to detect terminal: {}", e);
            Picker::from_fontsize((8, 16))
        }
    };

    match protocol.to_lowercase().as_str() {
        "auto" => log::debug!("Image preview: Auto-detected protocol"),
        "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
        "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
        "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
        "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
        unknown => log::warn!(
            "Image preview: Unknown protocol '{}', using auto-detect",
            unknown
        ),
    }

    picker
}

/// Config file location: CLI flag, then platform config dir, then ./config.yaml.
/// `None` means run with defaults.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("photodeck").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// The TUI owns stdout, so browse logs go to a file; serve logs to stderr
fn init_logging(debug: bool, to_file: bool) -> Result<()> {
    let default_level = if debug {
        log::LevelFilter::Debug
    } else if to_file {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level).parse_default_env();

    if to_file {
        let log_path = utils::get_debug_log_path();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("cannot open log file {}", log_path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Browse {
        root: None,
        remote: None,
        vim: false,
    });

    let is_browse = matches!(command, Command::Browse { .. });
    init_logging(args.debug, is_browse)?;

    let config = match get_config_path(args.config)? {
        Some(path) => {
            log::debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    match command {
        Command::Serve { bind, root } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let addr: SocketAddr = bind
                .parse()
                .with_context(|| format!("invalid bind address: {}", bind))?;
            let root = root.unwrap_or_else(|| config.server.root.clone());
            photodeck::server::serve(addr, root).await?;
            Ok(())
        }
        Command::Browse { root, remote, vim } => {
            let mut config = config;
            if vim {
                config.vim_mode = true;
            }
            if remote.is_some() {
                config.remote_url = remote;
            }

            match config.remote_url.clone() {
                Some(url) => {
                    log::info!("Browsing remote gallery at {}", url);
                    let host = RemoteHost::new(url, config.root_label.clone());
                    browse(host, &config, root, "/").await
                }
                None => browse(LocalHost::new(), &config, root, ".").await,
            }
        }
    }
}

async fn browse<F: FolderHost>(
    host: F,
    config: &Config,
    root: Option<String>,
    default_hint: &str,
) -> Result<()> {
    let hint = root.clone().unwrap_or_else(|| default_hint.to_string());
    let mut app = App::new(host, config, hint);

    match root {
        Some(request) => app.pick_root(request),
        None => app.open_root_prompt(),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend, F: FolderHost>(
    terminal: &mut Terminal<B>,
    app: &mut App<F>,
) -> Result<()> {
    loop {
        // Clear terminal to remove sixel graphics if needed (brief flash but necessary)
        if app.model.ui.sixel_cleanup_frames > 0 {
            terminal.clear()?;
            app.model.ui.sixel_cleanup_frames = 0;
        }

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Results of background work (non-blocking)
        while let Ok(message) = app.msg_rx.try_recv() {
            handlers::handle_message(app, message);
        }

        // Keep the inline preview in step with the selection
        app.sync_preview();

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await?;
            }
        }
    }

    Ok(())
}
