use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use panelcut::io::ext_repr::ExtJob;
use serde::Serialize;
use serde::de::DeserializeOwned;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("could not open file: {path:?}"))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse file: {path:?}"))
}

pub fn read_job(path: &Path) -> Result<ExtJob> {
    read_json(path)
}

pub fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("could not open solution file: {path:?}"))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write solution file: {path:?}"))?;

    info!("solution written to {:?}", canonical(path));
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg file: {path:?}"))?;
    info!("svg written to {:?}", canonical(path));
    Ok(())
}

fn canonical(path: &Path) -> std::path::PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()
        .context("could not initialize logger")?;
    info!("epoch: {}", jiff::Timestamp::now());
    Ok(())
}
