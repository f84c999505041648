mod config;
mod consts;
mod data;
mod error;
mod export;
mod logging;
mod messages;
mod navigation;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};
use crate::error::VistaError;
use crate::export::{DateRange, ExportForm, ExportFormat};
use crate::logging::ActivityLog;
use crate::navigation::{Navigation, TabId};
use crate::ui::{DashboardState, UIConfig};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the VISTA dashboard
    Start {
        /// Tab to open once the dashboard is shown
        #[arg(long, value_enum, value_name = "TAB")]
        tab: Option<TabId>,

        /// Disable the dashboard background colour
        #[arg(long)]
        no_background_color: bool,
    },
    /// List the dashboard tabs in navigation order
    Tabs,
    /// Render the dashboard off-screen and print it as text
    Snapshot {
        /// Tab to render
        #[arg(long, value_enum, value_name = "TAB")]
        tab: Option<TabId>,

        /// Width of the off-screen terminal
        #[arg(long, default_value_t = SNAPSHOT_WIDTH)]
        width: u16,

        /// Height of the off-screen terminal
        #[arg(long, default_value_t = SNAPSHOT_HEIGHT)]
        height: u16,
    },
    /// Export dashboard sections
    Export {
        /// Export format
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Section to include; repeat for several. Defaults to overview, voice and interpretation.
        #[arg(long = "section", value_enum, value_name = "TAB")]
        sections: Vec<TabId>,

        /// Date range label attached to the export
        #[arg(long, value_enum)]
        range: Option<DateRange>,

        /// File or directory receiving the JSON document
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Update the saved dashboard settings in ~/.vista/config.json
    Config {
        /// Tab the dashboard opens on
        #[arg(long, value_enum, value_name = "TAB")]
        start_tab: Option<TabId>,

        /// Paint the dashboard background colour
        #[arg(long, value_name = "BOOL")]
        background_color: Option<bool>,

        /// Directory receiving exports triggered from the dashboard
        #[arg(long, value_name = "DIR")]
        export_dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let echo_stderr = !matches!(args.command, Command::Start { .. });
    let activity = logging::init(echo_stderr).map_err(VistaError::from)?;

    match args.command {
        Command::Start {
            tab,
            no_background_color,
        } => {
            let config = load_config()?;
            let ui_config = UIConfig::new(
                config.with_background_color && !no_background_color,
                tab.or(config.start_tab),
                config.export_dir,
            );
            start(ui_config, activity)?;
        }
        Command::Tabs => {
            for tab in Navigation::new().descriptors() {
                println!("{}\t{}", tab.id, tab.label);
            }
        }
        Command::Snapshot { tab, width, height } => {
            let config = load_config()?;
            let ui_config = UIConfig::new(false, tab.or(config.start_tab), config.export_dir);
            let state = DashboardState::new(ui_config, activity);
            println!("{}", ui::render_snapshot(&state, width, height)?);
        }
        Command::Export {
            format,
            sections,
            range,
            output,
        } => {
            let form = ExportForm::with(
                format.unwrap_or_default(),
                range.unwrap_or_default(),
                &sections,
            );
            let receipt = form
                .request()
                .and_then(|request| request.run(output.as_deref()))
                .inspect_err(|e| error!("Export failed: {}", e))
                .map_err(VistaError::from)?;
            messages::print_export_receipt(&receipt);
        }
        Command::Config {
            start_tab,
            background_color,
            export_dir,
        } => {
            let path = get_config_path()?;
            let mut config = Config::load_or_default(&path)?;
            if start_tab.is_some() {
                config.start_tab = start_tab;
            }
            if let Some(enabled) = background_color {
                config.with_background_color = enabled;
            }
            if export_dir.is_some() {
                config.export_dir = export_dir;
            }
            config.save(&path)?;
            info!("Saved configuration to {}", path.display());
            messages::print_config_saved(&path);
        }
    }
    Ok(())
}

/// Loads `~/.vista/config.json`, falling back to defaults when it does not exist.
fn load_config() -> Result<Config, VistaError> {
    let path = get_config_path()?;
    let config = Config::load_or_default(&path)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Starts the dashboard in the terminal.
///
/// # Arguments
/// * `ui_config` - Display settings and the tab to open.
/// * `activity` - Activity log shown in the dashboard footer.
fn start(ui_config: UIConfig, activity: ActivityLog) -> Result<(), VistaError> {
    info!(
        "Starting dashboard{}",
        ui_config
            .start_tab
            .map(|tab| format!(" on {}", tab))
            .unwrap_or_default()
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(ui_config, activity);
    let result = ui::run(&mut terminal, app);

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    messages::print_dashboard_exit();
    Ok(())
}
