use clap::Parser;
use folio::application::init::init;
use folio::application::{
    create_project, create_tag, create_writeup, refresh_listings, remove_tag, remove_writeup,
    ConfigService, CreateProjectOptions, CreateTagOptions, CreateWriteupOptions,
    OperationReport, RemoveTagOptions, Site,
};
use folio::cli::{format_inventory, format_report, Cli, Commands};
use folio::error::FolioError;
use folio::infrastructure::FileSystemRepository;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ if cli.verbose => EnvFilter::new("debug"),
        _ => EnvFilter::new("warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn discover(directory: Option<&Path>) -> Result<FileSystemRepository, FolioError> {
    match directory {
        Some(dir) => FileSystemRepository::discover_from(dir),
        None => FileSystemRepository::discover(),
    }
}

fn open_site(directory: Option<&Path>) -> Result<Site, FolioError> {
    let (site, report) = Site::open(discover(directory)?)?;
    print!("{}", format_report(&report));
    Ok(site)
}

/// Print an operation's steps followed by the listing refresh that flushes it.
fn finish(site: &Site, mut report: OperationReport) {
    report.merge(refresh_listings(site));
    print!("{}", format_report(&report));
}

fn run(cli: Cli) -> Result<(), FolioError> {
    let directory = cli.directory.as_deref();

    match cli.command {
        Commands::Init { path, name } => {
            let path = match directory {
                Some(dir) => dir.join(path),
                None => path,
            };
            let report = init(&path, name)?;
            print!("{}", format_report(&report));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(discover(directory)?);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: folio config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    folio::application::manage_config::CONFIG_KEYS.join(", ")
                );
            }
            Ok(())
        }
        Commands::Tag {
            name,
            description,
            writeups,
        } => {
            let mut site = open_site(directory)?;
            let options = CreateTagOptions {
                name,
                description,
                writeup_titles: writeups,
            };
            let report = create_tag(&mut site, options)?;
            finish(&site, report);
            Ok(())
        }
        Commands::Writeup {
            title,
            tags,
            photo,
            created_date,
            updated_date,
            difficulty,
            os,
            ip,
        } => {
            let mut site = open_site(directory)?;
            let options = CreateWriteupOptions {
                title,
                tags,
                photo,
                created_date,
                updated_date,
                difficulty,
                os,
                ip,
            };
            let report = create_writeup(&mut site, options)?;
            finish(&site, report);
            Ok(())
        }
        Commands::Remove { title } => {
            let mut site = open_site(directory)?;
            let report = remove_writeup(&mut site, &title)?;
            print!("{}", format_report(&report));
            Ok(())
        }
        Commands::RemoveTag { name, from_writeups } => {
            let mut site = open_site(directory)?;
            let options = RemoveTagOptions {
                name,
                from_writeup_titles: Some(from_writeups),
            };
            let report = remove_tag(&mut site, options)?;
            finish(&site, report);
            Ok(())
        }
        Commands::Project {
            title,
            description,
            url,
            date,
        } => {
            let mut site = open_site(directory)?;
            let options = CreateProjectOptions {
                title,
                description,
                url,
                date,
            };
            let report = create_project(&mut site, options)?;
            finish(&site, report);
            Ok(())
        }
        Commands::List => {
            let site = open_site(directory)?;
            print!("{}", format_inventory(site.model()));
            Ok(())
        }
        Commands::Update => {
            let site = open_site(directory)?;
            print!("{}", format_report(&refresh_listings(&site)));
            Ok(())
        }
    }
}
