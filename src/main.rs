use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use skel::{
    api::{self, CreateOptions, FILES_SUMMARY, FILE_ITEMS, STRUCTURE_ITEMS, STRUCTURE_SUMMARY},
    preview::render_preview,
    OverwritePolicy,
};
use std::path::PathBuf;

fn creator_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("names")
                .help("names to create (defaults to the built-in list)")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-clobber")
                .long("no-clobber")
                .help("Fail instead of truncating a file that already exists")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be created without touching the filesystem")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("directory")
                .short('C')
                .long("directory")
                .help("Resolve names relative to this directory instead of the current one")
                .value_name("DIR"),
        )
}

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(creator_command(
            "structure",
            "Creates a file for every name containing a '.', a folder for every other name",
        ))
        .subcommand(creator_command(
            "files",
            "Creates an empty file for every name",
        ))
        .get_matches();

    skel::init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("structure", args)) => handle_structure(args)?,
        Some(("files", args)) => handle_files(args)?,
        _ => unreachable!(),
    }

    Ok(())
}

fn names_from(args: &ArgMatches, defaults: &[&str]) -> Vec<String> {
    match args.get_many::<String>("names") {
        Some(names) => names.cloned().collect(),
        None => defaults.iter().map(|name| name.to_string()).collect(),
    }
}

fn options_from(args: &ArgMatches) -> CreateOptions {
    let overwrite = if args.get_flag("no-clobber") {
        OverwritePolicy::Refuse
    } else {
        OverwritePolicy::Truncate
    };

    let root = args
        .get_one::<String>("directory")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    log::debug!("root: {}, overwrite: {:?}", root.display(), overwrite);

    CreateOptions { root, overwrite }
}

fn handle_structure(args: &ArgMatches) -> miette::Result<()> {
    let names = names_from(args, &STRUCTURE_ITEMS);

    if args.get_flag("dry-run") {
        print!("{}", render_preview(&api::plan_structure(names.as_slice())));
        return Ok(());
    }

    api::create_structure(names.as_slice(), &options_from(args), |entry| {
        println!("{}", entry.confirmation())
    })?;

    println!("{}", STRUCTURE_SUMMARY);

    Ok(())
}

fn handle_files(args: &ArgMatches) -> miette::Result<()> {
    let names = names_from(args, &FILE_ITEMS);

    if args.get_flag("dry-run") {
        print!("{}", render_preview(&api::plan_files(names.as_slice())));
        return Ok(());
    }

    api::create_files(names.as_slice(), &options_from(args), |entry| {
        println!("{}", entry.confirmation())
    })?;

    println!("{}", FILES_SUMMARY);

    Ok(())
}
