use clap::{Parser, Subcommand};
use shared::error::{AppError, ErrorCategory};
use shared::models::{BoardState, Employee, EmployeeCreate};
use worksphere::core::session::parse_zone;
use worksphere::{AssignOutcome, BoardError, BoardSession, Config, print_banner, setup_environment};

#[derive(Debug, Parser)]
#[command(name = "worksphere")]
#[command(about = "Staff-to-zone assignment board")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
enum Command {
    /// Show zones with occupancy and the unassigned staff
    Board,
    /// Add an employee
    Add {
        name: String,
        /// manager, receptionist, technician, security, cleaner or other
        role: String,
        email: String,
        phone: String,
        #[arg(long)]
        photo: Option<String>,
        /// Past experience, repeatable
        #[arg(long = "experience", value_name = "TEXT")]
        experiences: Vec<String>,
    },
    /// Delete an unassigned employee
    Delete { id: i64 },
    /// Assign or move an employee to a zone
    Assign { id: i64, zone: String },
    /// Take an employee out of their zone
    Unassign { id: i64 },
    /// List unassigned employees allowed in a zone
    Eligible { zone: String },
    /// Drop the stored board and start over
    Reset,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Board => "board",
            Command::Add { .. } => "add",
            Command::Delete { .. } => "delete",
            Command::Assign { .. } => "assign",
            Command::Unassign { .. } => "unassign",
            Command::Eligible { .. } => "eligible",
            Command::Reset => "reset",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Board);

    // 1. Environment (dotenv, work dir, logging)
    let config = setup_environment()?;

    // 2. Open the board, 3. run one command
    let result = BoardSession::open_with_config(&config).and_then(|mut session| {
        tracing::debug!(work_dir = %config.work_dir, command = command.name(), "WorkSphere ready");
        run(&mut session, &config, command)
    });
    if let Err(e) = result {
        let e = report(e);
        std::process::exit(exit_code(&e));
    }
    Ok(())
}

fn run(session: &mut BoardSession, config: &Config, command: Command) -> Result<(), BoardError> {
    match command {
        Command::Board => print_board(session),
        Command::Add {
            name,
            role,
            email,
            phone,
            photo,
            experiences,
        } => {
            let mut data = EmployeeCreate::new(name, role, email, phone);
            if let Some(photo) = photo {
                data = data.with_photo(photo);
            }
            for experience in experiences {
                data = data.with_experience(experience);
            }
            let employee = session.add_employee(data)?;
            println!("added {}", card(&employee));
        }
        Command::Delete { id } => {
            let employee = session.delete_employee(id)?;
            println!("deleted {}", card(&employee));
        }
        Command::Assign { id, zone } => {
            let zone = parse_zone(&zone)?;
            match session.assign(id, zone)? {
                AssignOutcome::Assigned { from: Some(from) } => println!("moved {id}: {from} -> {zone}"),
                AssignOutcome::Assigned { from: None } => println!("assigned {id} to {zone}"),
                AssignOutcome::Unchanged => println!("{id} already in {zone}"),
            }
        }
        Command::Unassign { id } => match session.unassign(id)? {
            Some(from) => println!("unassigned {id} from {from}"),
            None => println!("{id} was not assigned"),
        },
        Command::Eligible { zone } => {
            let zone = parse_zone(&zone)?;
            for employee in session.list_eligible(zone) {
                println!("    {}", card(employee));
            }
        }
        Command::Reset => {
            let fresh = if config.seed_sample_staff {
                BoardState::with_sample_staff()
            } else {
                BoardState::with_default_zones()
            };
            session.reset(fresh)?;
            println!("board reset");
        }
    }
    Ok(())
}

/// One employee line: id, name, role label
fn card(employee: &Employee) -> String {
    format!("{:>20}  {} ({})", employee.id, employee.name, employee.role.label())
}

fn print_board(session: &BoardSession) {
    print_banner();
    for zone in session.zones() {
        let policy = match &zone.allowed_roles {
            None => "all roles".to_string(),
            Some(roles) if roles.is_empty() => "closed".to_string(),
            Some(roles) => roles
                .iter()
                .map(|r| r.label())
                .collect::<Vec<_>>()
                .join(", "),
        };
        println!("{:<16} {:>5}  [{policy}]", zone.name, zone.occupancy.to_string());
        if let Ok(occupants) = session.occupants(zone.id) {
            for employee in occupants {
                println!("    {}", card(employee));
            }
        }
    }

    let unassigned = session.list_unassigned();
    println!("Unassigned ({})", unassigned.len());
    for employee in unassigned {
        println!("    {}", card(employee));
    }
}

/// Print the error as `E0000: message` on stderr
fn report(e: BoardError) -> AppError {
    let e = AppError::from(e);
    eprintln!("{}: {}", e.code, e.message);
    e
}

/// 2 for bad input, 1 for everything else
fn exit_code(e: &AppError) -> i32 {
    match e.code.category() {
        ErrorCategory::General => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Option<Command> {
        Cli::try_parse_from(std::iter::once("worksphere").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_board() {
        assert_eq!(parse(&[]), None);
        assert_eq!(parse(&["board"]), Some(Command::Board));
    }

    #[test]
    fn test_add_with_photo_and_experiences() {
        let command = parse(&[
            "add",
            "Ana Lopez",
            "receptionist",
            "ana@worksphere.com",
            "0612345678",
            "--photo",
            "https://img/ana.png",
            "--experience",
            "Front desk",
            "--experience",
            "Switchboard",
        ]);
        assert_eq!(
            command,
            Some(Command::Add {
                name: "Ana Lopez".into(),
                role: "receptionist".into(),
                email: "ana@worksphere.com".into(),
                phone: "0612345678".into(),
                photo: Some("https://img/ana.png".into()),
                experiences: vec!["Front desk".into(), "Switchboard".into()],
            })
        );
    }

    #[test]
    fn test_add_without_optionals() {
        let Some(Command::Add {
            photo, experiences, ..
        }) = parse(&["add", "Sam", "security", "sam@worksphere.com", "0600000000"])
        else {
            panic!("expected add");
        };
        assert_eq!(photo, None);
        assert!(experiences.is_empty());
    }

    #[test]
    fn test_usage_errors() {
        for args in [
            vec!["worksphere", "assign", "12"],
            vec!["worksphere", "delete", "twelve"],
            vec!["worksphere", "add", "Ana", "manager"],
            vec!["worksphere", "teleport"],
        ] {
            assert!(Cli::try_parse_from(args).is_err());
        }
    }

    #[test]
    fn test_ids_and_zones() {
        assert_eq!(
            parse(&["assign", "42", "Reception"]),
            Some(Command::Assign {
                id: 42,
                zone: "Reception".into()
            })
        );
        assert_eq!(parse(&["unassign", "7"]), Some(Command::Unassign { id: 7 }));
        assert_eq!(
            parse(&["eligible", "server"]),
            Some(Command::Eligible {
                zone: "server".into()
            })
        );
    }

    #[test]
    fn test_card_uses_role_label() {
        let employee = Employee {
            id: 12,
            name: "Noor".into(),
            role: shared::models::Role::Technician,
            photo: String::new(),
            email: "noor@worksphere.com".into(),
            phone: "0".into(),
            zone: None,
            experiences: vec![],
        };
        let line = card(&employee);
        assert!(line.ends_with("Noor (IT Technician)"));
        assert!(line.trim_start().starts_with("12 "));
    }
}
