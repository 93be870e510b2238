mod cat;
mod dump;
mod filepath;
mod info;
mod list;

use std::io;

use clap::Parser;
use derive_more::Display;
use sdfat32::io::std::FileIO;
use sdfat32::FAT32;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("{_0}")]
    FAT32(#[from] sdfat32::error::Error<io::Error>),
    #[display("{_0}")]
    Stdout(io::Error),
    #[display("{_0}")]
    String(&'static str),
}

#[derive(Debug, clap::Args)]
struct List {
    /// Specify directory to list, default to root directory
    #[clap(default_value = "/")]
    path: String,
}

#[derive(Debug, clap::Args)]
struct Cat {
    /// Position of file in root directory, counting from 1
    ordinal: u32,
}

#[derive(Debug, clap::Args)]
struct Dump {
    /// Absolute sector number on device
    sector: u32,
}

#[derive(Debug, clap::Subcommand)]
enum Action {
    /// Print partition and volume geometry
    Info,
    /// List files in specified directory
    #[clap(name = "ls")]
    List(List),
    /// Print content of nth file in root directory on the standard output
    Cat(Cat),
    /// Hex dump a sector
    Dump(Dump),
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Disk image or block device with FAT32 on first partition
    #[clap(short, long)]
    device: String,
    #[clap(subcommand)]
    action: Action,
}

fn run(args: Args) -> Result<(), Error> {
    let io = FileIO::open(&args.device).map_err(sdfat32::error::Error::IO)?;
    let fat32 = FAT32::new(io)?;
    match args.action {
        Action::Info => info::info(&fat32),
        Action::List(args) => list::list(&fat32, &args.path),
        Action::Cat(args) => cat::cat(&fat32, args.ordinal),
        Action::Dump(args) => dump::dump(&fat32, args.sector),
    }
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stderr).init();

    if let Some(error) = run(args).err() {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
