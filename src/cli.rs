// src/cli.rs
use std::env;

use color_eyre::eyre::{Result, bail};

use crate::config::markers::MarkerSet;
use crate::config::options::{ExtractOptions, IdMode, InclusionMode};
use crate::extract::{self, ArtworkStatus, ExtractError};
use crate::fetch::{HttpSource, MarkupSource};
use crate::resolve;

struct Params {
    extract: ExtractOptions,
    markers: MarkerSet,
    resolve_id: Option<String>,
    delim: char,
}

impl Params {
    fn new() -> Self {
        Self {
            extract: ExtractOptions::default(),
            markers: MarkerSet::default(),
            resolve_id: None,
            delim: ',',
        }
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;

    let mut params = Params::new();
    parse_cli(&mut params)?;

    let source = HttpSource;
    match params.resolve_id.take() {
        Some(id) => print_link(&source, &params, &id),
        None => list_artworks(&source, &params),
    }
}

fn list_artworks(source: &dyn MarkupSource, params: &Params) -> Result<()> {
    let doc = source.dashboard_markup()?;
    let records = match extract::extract(&doc, &params.extract, &params.markers) {
        Ok(v) => v,
        Err(ExtractError::NoItemsFound) => {
            eprintln!("No artworks found");
            return Ok(());
        }
        Err(ExtractError::NotAuthenticated) => {
            bail!("not signed in upstream — open the registry in a browser, sign in, and retry");
        }
    };

    let d = params.delim;
    for r in &records {
        let status = match r.status {
            ArtworkStatus::Verified => "Verified",
            ArtworkStatus::Unverified => "Unverified",
        };
        println!("{}{d}{}{d}{}{d}{}{d}{}", r.id, r.title, r.artist, r.year, status);
    }
    Ok(())
}

fn print_link(source: &dyn MarkupSource, params: &Params, id: &str) -> Result<()> {
    match resolve::resolve(source, &params.markers, id) {
        Ok(link) => {
            println!("{}", link);
            Ok(())
        }
        Err(resolve::ResolveError::LinkNotFound) => {
            bail!("details unavailable for {id:?} — the upstream markup may have changed");
        }
        Err(e) => Err(e.into()),
    }
}

fn parse_cli(params: &mut Params) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--list" => {} // the default
            "--resolve" => {
                let Some(id) = args.next() else { bail!("Missing artwork id for --resolve") };
                params.resolve_id = Some(id);
            }
            "--lenient" => params.extract.inclusion = InclusionMode::Lenient,
            "--discovery-ids" => params.extract.id_mode = IdMode::Discovery,
            "--tsv" => params.delim = '\t',
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {}", a),
        }
    }
    Ok(())
}
