//! pn: Place Navigator. Read place lists, and step through them
use clap::Parser;
use log::{debug, trace};
use places::prelude::*;
use std::io::Read;
use std::path::PathBuf;

/// PN: Read a list of places (from files, or from stdin when no files are
/// given), and report on it. With no query options, all places are listed.
#[derive(Parser, Debug)]
#[command(name = "pn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the place at this position
    #[arg(short, long, allow_negative_numbers = true)]
    index: Option<isize>,

    /// Print the place following the place with this id
    #[arg(short, long)]
    next: Option<String>,

    /// Print the place preceding the place with this id
    #[arg(short, long)]
    previous: Option<String>,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to read
    args: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("This is PN");
    debug!("{options:#?}");

    let provider = ProviderHandle::new(Minimal::new());
    let mut list = Vec::new();

    if options.args.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        list.extend(places::text::parse(&text, &provider)?);
    }

    for arg in &options.args {
        let path = locate(arg)?;
        debug!("Reading {}", path.display());
        list.extend(places::text::read(&path, &provider)?);
    }

    let source = PlaceCollection::new(list);
    let mut queried = false;

    if let Some(index) = options.index {
        queried = true;
        print(Some(source.get(index)?));
    }

    if let Some(id) = &options.next {
        queried = true;
        print(known(&source, id)?.and_then(|place| source.next(place)));
    }

    if let Some(id) = &options.previous {
        queried = true;
        print(known(&source, id)?.and_then(|place| source.previous(place)));
    }

    if !queried {
        println!("{}", source.count());
        for place in &source {
            print(Some(place));
        }
    }

    Ok(())
}

fn print(place: Option<&Place>) {
    match place {
        Some(place) => println!(
            "{}\t{}\t{}",
            place.id(),
            place.name(),
            place.coordinate()
        ),
        None => println!("-"),
    }
}

// Unknown ids are reported on stderr, but still answered with "no neighbour"
fn known<'a>(source: &'a PlaceCollection, id: &str) -> Result<Option<&'a Place>, places::Error> {
    let Some(index) = source.position(id) else {
        eprintln!("pn: no place with id '{id}'");
        return Ok(None);
    };
    source.get(index as isize).map(Some)
}

/// Files not found as given, are searched for in `./places`, then in the
/// `places` directory under the user's local data directory
fn locate(name: &str) -> Result<PathBuf, places::Error> {
    let given = PathBuf::from(name);
    if given.exists() {
        return Ok(given);
    }

    let mut paths: Vec<PathBuf> = vec![[".", "places"].iter().collect()];
    if let Some(mut userpath) = dirs::data_local_dir() {
        userpath.push("places");
        paths.push(userpath);
    }

    for mut path in paths {
        path.push(name);
        trace!("Trying {}", path.display());
        if path.exists() {
            return Ok(path);
        }
    }

    Err(places::Error::NotFound(
        name.to_string(),
        ": Place list".to_string(),
    ))
}
