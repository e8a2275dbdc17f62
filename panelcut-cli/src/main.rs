use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use log::{error, info, warn};
use panelcut::io::export::export_solution;
use panelcut::io::import::import_job;
use panelcut::io::svg::sheet_to_svg;
use panelcut::packer::pack_job;
use panelcut_cli::config::CutConfig;
use panelcut_cli::io::cli::Cli;
use panelcut_cli::io::output::JobOutput;
use panelcut_cli::session::{Reply, SessionStore};
use panelcut_cli::sink::FolderSink;
use panelcut_cli::{EPOCH, io};
use rayon::prelude::*;

const STDIN_SESSION: &str = "stdin";

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CutConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };

    info!("Successfully parsed CutConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    match args.interactive {
        true => main_interactive(config, args.solution_folder),
        false => main_batch(&args.input_file, &config, &args.solution_folder),
    }
}

/// Packs every input file independently, a failing file does not affect the others
fn main_batch(input_files: &[PathBuf], config: &CutConfig, output_folder: &Path) -> Result<()> {
    let n_failed = input_files
        .par_iter()
        .map(|input_file| {
            solve_file(input_file, config, output_folder)
                .inspect_err(|e| error!("[MAIN] {input_file:?} failed: {e:#}"))
        })
        .filter(|res| res.is_err())
        .count();

    info!(
        "[MAIN] {}/{} job(s) packed in {:?}",
        input_files.len() - n_failed,
        input_files.len(),
        EPOCH.elapsed()
    );

    match n_failed {
        0 => Ok(()),
        n => bail!("{n} job(s) could not be packed"),
    }
}

fn solve_file(input_file: &Path, config: &CutConfig, output_folder: &Path) -> Result<()> {
    let input_stem = input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {input_file:?}"))?;

    let ext_job = io::read_job(input_file)?;
    let job = import_job(&ext_job).with_context(|| format!("invalid job in {input_file:?}"))?;
    let packing = pack_job(&job);

    {
        let output = JobOutput {
            job: ext_job,
            solution: export_solution(&packing),
            config: config.clone(),
        };

        let solution_path = output_folder.join(format!("sol_{input_stem}.json"));

        io::write_json(&output, &solution_path)?;
    }

    if config.export_svg {
        for sheet in packing.sheets.iter() {
            let svg_path = output_folder.join(format!("sol_{input_stem}_{}.svg", sheet.id));
            let svg = sheet_to_svg(sheet, config.svg_draw_options, input_stem);

            io::write_svg(&svg, &svg_path)?;
        }
    }

    Ok(())
}

/// Reads a stock size, parts and a finish keyword from stdin, one per line.
/// A new session starts after every finished layout.
fn main_interactive(config: CutConfig, output_folder: PathBuf) -> Result<()> {
    let mut sink = FolderSink::new(output_folder, config.clone());
    let mut store = SessionStore::new();
    let id = STDIN_SESSION.to_owned();

    println!("enter the stock size (e.g. 2440x1220)");
    for line in std::io::stdin().lock().lines() {
        let line = line.context("could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        if !store.contains(&id) {
            store.start(id.clone());
        }

        let reply = match store.feed(&id, &line, &config, &mut sink) {
            Ok(Some(reply)) => reply,
            Ok(None) => continue,
            Err(e) => {
                error!("[MAIN] {e:#}");
                println!("the layout could not be saved, enter the finish keyword again to retry");
                continue;
            }
        };
        match reply {
            Reply::StockAccepted(stock) => {
                println!("stock {stock} accepted, enter parts, finish with {:?}", config.finish_keywords)
            }
            Reply::PartAdded { dim, count } => println!("part #{count}: {dim}"),
            Reply::Rejected(err) => println!("rejected: {err}"),
            Reply::Finished(packing) => {
                let report = packing.report();
                println!(
                    "{} sheet(s), waste {:.2}%, {} oversize part(s)",
                    report.sheet_count,
                    report.waste_percent,
                    packing.oversize.len()
                );
                for oversize in packing.oversize.iter() {
                    println!("  {oversize}");
                }
                println!("enter the stock size for a new job");
            }
        }
    }
    Ok(())
}
