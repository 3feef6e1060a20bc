use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use employee_directory::config::Config;
use employee_directory::connect::Connector;
use employee_directory::directory::{
    add_employee, delete_employee, seed, set_current_page, set_search_term, set_view_mode,
    update_employee, Department, DirectoryStore, Employee, EmployeeId, Listing, ListingObserver,
    Position, RootReducer, ViewMode,
};
use employee_directory::logging;
use employee_directory::store::{FileStorage, KeyValueStorage};

#[derive(Parser, Debug)]
#[command(name = "employee-directory", version, about = "Manage the employee directory")]
struct Cli {
    /// Config file (default: platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the persisted state (overrides config).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Directory(DirectoryCommand),
    /// Forget the persisted state.
    Reset,
}

/// Commands that run against the store.
#[derive(Subcommand, Debug)]
enum DirectoryCommand {
    /// Show the current page.
    List,
    /// Show one employee.
    Show { id: String },
    /// Add an employee with a freshly generated id.
    Add(NewEmployee),
    /// Replace an employee record. Omitted fields keep their current value.
    Update {
        id: String,
        #[command(flatten)]
        fields: EmployeeChanges,
    },
    /// Delete an employee.
    Delete { id: String },
    /// Filter by name or email. An empty term clears the filter.
    Search {
        #[arg(default_value = "")]
        term: String,
    },
    /// Jump to a page.
    Page { page: u32 },
    /// Switch between table and list layout.
    View { mode: ViewMode },
}

#[derive(Args, Debug)]
struct NewEmployee {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    /// DD/MM/YYYY
    #[arg(long)]
    date_of_employment: String,
    /// DD/MM/YYYY
    #[arg(long)]
    date_of_birth: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    department: Department,
    #[arg(long)]
    position: Position,
}

#[derive(Args, Debug)]
struct EmployeeChanges {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    date_of_employment: Option<String>,
    #[arg(long)]
    date_of_birth: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    department: Option<Department>,
    #[arg(long)]
    position: Option<Position>,
}

impl NewEmployee {
    fn into_employee(self) -> Employee {
        Employee {
            id: EmployeeId::generate(),
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_employment: self.date_of_employment,
            date_of_birth: self.date_of_birth,
            phone: self.phone,
            email: self.email,
            department: self.department,
            position: self.position,
        }
    }
}

impl EmployeeChanges {
    /// Full replacement record built on top of `current`.
    fn apply_to(self, current: &Employee) -> Employee {
        Employee {
            id: current.id.clone(),
            first_name: self.first_name.unwrap_or_else(|| current.first_name.clone()),
            last_name: self.last_name.unwrap_or_else(|| current.last_name.clone()),
            date_of_employment: self
                .date_of_employment
                .unwrap_or_else(|| current.date_of_employment.clone()),
            date_of_birth: self
                .date_of_birth
                .unwrap_or_else(|| current.date_of_birth.clone()),
            phone: self.phone.unwrap_or_else(|| current.phone.clone()),
            email: self.email.unwrap_or_else(|| current.email.clone()),
            department: self.department.unwrap_or(current.department),
            position: self.position.unwrap_or(current.position),
        }
    }
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.storage.dir = Some(dir);
    }

    let storage = Arc::new(FileStorage::new(config.storage.resolved_dir()));

    match cli.command {
        Command::Reset => {
            storage
                .remove(&config.storage.key)
                .context("Failed to remove persisted state")?;
            println!("reset {}", storage.path_for(&config.storage.key).display());
            Ok(())
        }
        Command::Directory(command) => {
            let store = DirectoryStore::with_key(
                RootReducer::new(),
                seed::initial_state(config.seed.mock_employees),
                storage,
                config.storage.key.clone(),
            );
            run(&store, command, config.listing.page_size)
        }
    }
}

fn run(store: &DirectoryStore, command: DirectoryCommand, page_size: usize) -> Result<()> {
    let mut view = Connector::new(Arc::new(ListingObserver::new(page_size)));
    view.attach(store);

    match command {
        DirectoryCommand::List => {}
        DirectoryCommand::Show { id } => {
            let state = store.get_state();
            let Some(employee) = state.find_employee(&EmployeeId::new(id.as_str())) else {
                bail!("no employee with id '{}'", id);
            };
            print_card(employee);
            return Ok(());
        }
        DirectoryCommand::Add(fields) => {
            let employee = fields.into_employee();
            println!("added {}", employee.id);
            store.dispatch(add_employee(employee));
        }
        DirectoryCommand::Update { id, fields } => {
            let id = EmployeeId::new(id);
            let Some(current) = store.get_state().find_employee(&id).cloned() else {
                bail!("no employee with id '{}'", id);
            };
            store.dispatch(update_employee(fields.apply_to(&current)));
            println!("updated {}", id);
        }
        DirectoryCommand::Delete { id } => {
            let id = EmployeeId::new(id);
            if store.get_state().find_employee(&id).is_none() {
                println!("no employee with id '{}', nothing deleted", id);
            } else {
                store.dispatch(delete_employee(id.clone()));
                println!("deleted {}", id);
            }
        }
        DirectoryCommand::Search { term } => {
            store.dispatch(set_search_term(term));
        }
        DirectoryCommand::Page { page } => {
            if page == 0 {
                bail!("pages start at 1");
            }
            store.dispatch(set_current_page(page));
        }
        DirectoryCommand::View { mode } => {
            store.dispatch(set_view_mode(mode));
        }
    }

    print_listing(&view.consumer().latest());
    view.detach();
    Ok(())
}

fn print_listing(listing: &Listing) {
    if !listing.search_term.is_empty() {
        println!("search: \"{}\"", listing.search_term);
    }

    if listing.is_empty() {
        println!("no employees");
    } else {
        match listing.view_mode {
            ViewMode::Table => print_table(&listing.rows),
            ViewMode::List => listing.rows.iter().for_each(print_card),
        }
    }

    println!(
        "page {} of {} ({} matching)",
        listing.page,
        listing.total_pages.max(1),
        listing.total_matches
    );
}

fn print_table(rows: &[Employee]) {
    println!(
        "{:<38} {:<22} {:<12} {:<12} {:<20} {:<32} {:<10} {:<8}",
        "ID", "NAME", "EMPLOYED", "BORN", "PHONE", "EMAIL", "DEPT", "POSITION"
    );
    for e in rows {
        println!(
            "{:<38} {:<22} {:<12} {:<12} {:<20} {:<32} {:<10} {:<8}",
            e.id,
            e.full_name(),
            e.date_of_employment,
            e.date_of_birth,
            e.phone,
            e.email,
            e.department,
            e.position
        );
    }
}

fn print_card(e: &Employee) {
    println!("{} ({})", e.full_name(), e.id);
    println!("  {} / {}", e.department, e.position);
    println!("  employed {}, born {}", e.date_of_employment, e.date_of_birth);
    println!("  {} | {}", e.phone, e.email);
}
