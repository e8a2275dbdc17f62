use crate::CutError;
use crate::entities::Job;
use crate::geometry::Dimension;
use crate::io::ext_repr::{ExtJob, ExtSize};
use itertools::Itertools;
use log::debug;
use std::iter;

/// Imports a job into the library.
/// Parts with a demand above one are expanded into consecutive copies.
/// Fails on the first invalid size, no partial job is ever built.
pub fn import_job(ext_job: &ExtJob) -> Result<Job, CutError> {
    let stock = import_size(&ext_job.stock)?;

    let dims: Vec<Dimension> = ext_job
        .parts
        .iter()
        .map(|ext_part| {
            import_size(&ext_part.size).map(|dim| iter::repeat_n(dim, ext_part.demand))
        })
        .flatten_ok()
        .try_collect()?;

    debug!(
        "[IMPORT] job {:?}: stock {}, {} part(s)",
        ext_job.name,
        stock,
        dims.len()
    );

    Ok(Job::new(stock, dims))
}

pub fn import_size(ext_size: &ExtSize) -> Result<Dimension, CutError> {
    Dimension::try_new(ext_size.width, ext_size.height)
}
