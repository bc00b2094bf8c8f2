//src/main.rs
mod cli;

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use std::io::{self, stdout};
use tracing_subscriber::EnvFilter;

use workout_panes_lib::{
    Activation, AppService, CreationDialog, DetailPanel, Host, IconCatalog, LayoutCoordinator,
    PanelHost, PresentationMode, WorkoutRecord,
};

fn main() -> Result<()> {
    let cli_args = cli::parse_args();

    if let cli::Commands::Completions { shell } = cli_args.command {
        let mut cmd = cli::build_cli_command();
        let bin_name = cmd.get_name().to_string();

        eprintln!("Generating completion script for {}...", shell);
        clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout());
        return Ok(());
    }

    init_logging();

    let service = AppService::initialize().context("Failed to initialize application service")?;
    let header_color = service
        .config
        .header_color()
        .map(Color::from)
        .unwrap_or(Color::Green);

    match cli_args.command {
        cli::Commands::Completions { .. } => {
            unreachable!("Completion generation should have exited already");
        }
        cli::Commands::List => {
            let store = service.store();
            let store = store.borrow();
            if store.is_empty() {
                println!("No workouts found.");
            } else {
                print_record_table(store.records(), header_color);
            }
        }
        cli::Commands::Show { id } => {
            let detail = DetailPanel::new(id, service.store());
            let Some(view) = detail.view() else {
                bail!("No workout found with id {}", id);
            };
            println!("[{}]", view.icon.label);
            println!("{}", view.name);
            println!();
            println!("{}", view.description);
            println!();
            println!("{}", view.duration_line);
            println!("{}", view.difficulty_line);
        }
        cli::Commands::Icons => print_icon_table(header_color),
        cli::Commands::Layout { mode, steps } => {
            let mode = match mode {
                cli::ModeCli::Single => PresentationMode::SinglePane,
                cli::ModeCli::Dual => PresentationMode::DualPane,
            };
            replay_layout(&service, mode, &steps, header_color)?;
        }
    }

    Ok(())
}

// Logs go to stderr so table output stays pipeable
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

// --- Layout Replay ---

/// Drives a coordinator and an in-memory host through `steps`, printing the
/// mounted panels after startup and after every step.
fn replay_layout(
    service: &AppService,
    mode: PresentationMode,
    steps: &[cli::Step],
    header_color: Color,
) -> Result<()> {
    let mut host = PanelHost::new(mode);
    let mut coordinator = service.coordinator();
    let activation = Activation::fresh(&host);
    coordinator.activate(&mut host, activation);
    host.execute_pending();
    print_layout("start", &coordinator, &host, header_color);

    for step in steps {
        tracing::debug!(?step, "replaying step");
        let label = match step {
            cli::Step::Select(id) => {
                select_record(&mut coordinator, &mut host, *id)?;
                format!("select:{}", id)
            }
            cli::Step::Back => {
                if !coordinator.on_back(&mut host) {
                    println!("Nothing to go back to.");
                }
                "back".to_string()
            }
            cli::Step::Rotate => {
                let next = match PresentationMode::detect(&host) {
                    PresentationMode::SinglePane => PresentationMode::DualPane,
                    PresentationMode::DualPane => PresentationMode::SinglePane,
                };
                host.reconfigure(next);
                let activation = Activation::recreated(&host);
                coordinator.activate(&mut host, activation);
                format!("rotate to {}", next)
            }
            cli::Step::Add {
                name,
                description,
                duration,
            } => {
                let record = add_record(&coordinator, &host, name, description, duration)?;
                format!("add #{} {}", record.id, record.name)
            }
        };
        host.execute_pending();
        print_layout(&label, &coordinator, &host, header_color);
    }
    Ok(())
}

fn select_record(
    coordinator: &mut LayoutCoordinator,
    host: &mut PanelHost,
    id: i64,
) -> Result<()> {
    let Some(list) = coordinator.list_panel(&*host) else {
        bail!("Cannot select {}: the workout list is not mounted", id);
    };
    let event = list
        .rows()
        .iter()
        .position(|row| row.record_id == id)
        .and_then(|index| list.select_at(index));
    let Some(event) = event else {
        bail!("No workout found with id {}", id);
    };
    coordinator.on_select(host, event);
    Ok(())
}

fn add_record(
    coordinator: &LayoutCoordinator,
    host: &PanelHost,
    name: &str,
    description: &str,
    duration: &str,
) -> Result<WorkoutRecord> {
    let Some(list) = coordinator.list_panel(host) else {
        bail!("Cannot add '{}': the workout list is not mounted", name);
    };
    let mut dialog = CreationDialog::new();
    dialog.name = name.to_string();
    dialog.description = description.to_string();
    dialog.duration = duration.to_string();
    dialog
        .submit(list)
        .with_context(|| format!("Error adding workout '{}'", name))
}

// --- Table Printing Functions ---

fn print_layout(label: &str, coordinator: &LayoutCoordinator, host: &PanelHost, header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Slot").fg(header_color),
            Cell::new("Panel").fg(header_color),
            Cell::new("Kind").fg(header_color),
            Cell::new("Record").fg(header_color),
        ]);

    for mounted in host.mounted() {
        let record = mounted
            .panel
            .bound_record_id()
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        table.add_row(vec![
            Cell::new(mounted.slot.to_string()),
            Cell::new(mounted.id.to_string()),
            Cell::new(mounted.kind().to_string()),
            Cell::new(record),
        ]);
    }

    println!(
        "== {} ({:?}, history {}) ==",
        label,
        coordinator.state(),
        host.history_depth()
    );
    println!("{table}");
}

/// Prints workout records in a formatted table.
fn print_record_table(records: &[WorkoutRecord], header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(header_color),
            Cell::new("Name").fg(header_color),
            Cell::new("Duration").fg(header_color),
            Cell::new("Difficulty").fg(header_color),
            Cell::new("Icon").fg(header_color),
        ]);

    for record in records {
        table.add_row(vec![
            Cell::new(record.id.to_string()),
            Cell::new(&record.name).add_attribute(Attribute::Bold),
            Cell::new(&record.duration),
            Cell::new(record.difficulty.to_string()),
            Cell::new(IconCatalog::find_by_id(&record.icon_id).label),
        ]);
    }
    println!("{table}");
}

/// Prints the icon catalog in picker order.
fn print_icon_table(header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").fg(header_color),
            Cell::new("Icon").fg(header_color),
            Cell::new("Label").fg(header_color),
            Cell::new("Used For").fg(header_color),
        ]);

    for (index, icon) in IconCatalog::all().into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(index.to_string()),
            Cell::new(icon.icon_id.to_string()),
            Cell::new(icon.label),
            Cell::new(icon.usage_hint),
        ]);
    }
    println!("{table}");
}
