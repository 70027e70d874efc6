//! Depth-buffered rasterization, one scoped worker thread per band.
//!
//! Screen position is only known after projection, so work is split on the
//! output side: each worker walks the whole sample grid and keeps the samples
//! whose row falls inside its band. The per-pixel result is the max-depth
//! sample, which does not depend on how rows are divided among workers.

use super::bands::BandPartition;
use super::buffers::{BandSlice, FrameBuffers};
use super::error::{RenderError, Result};
use super::projection::{angle_samples, Projector};
use super::ramp::level_for_weight;
use super::types::{FrameStats, Resolution};
use std::thread;

/// Project every sample and commit the ones that land in `slice`'s band.
pub fn rasterize_band(projector: &Projector, resolution: Resolution, slice: &mut BandSlice<'_>) -> FrameStats {
    let mut stats = FrameStats::default();
    if projector.is_degenerate() {
        stats.degenerate = true;
        return stats;
    }

    let band = slice.band();
    for sample in angle_samples() {
        let s = projector.project(sample);
        stats.samples += 1;

        // a non-finite depth also poisons x and y, so test it before clipping
        if !s.depth.is_finite() {
            stats.non_finite += 1;
            continue;
        }
        if !s.in_bounds(resolution) || !band.contains(s.y as usize) {
            continue;
        }
        if slice.depth_test(s.x as usize, s.y as usize, s.depth, level_for_weight(s.weight)) {
            stats.committed += 1;
        }
    }
    stats
}

/// Fill `buffers` for one frame using one worker per band.
///
/// Blocks until every worker has joined. If a worker cannot be spawned or
/// panics, the frame is reported as failed rather than returned with a
/// missing band.
pub fn rasterize_parallel(
    projector: &Projector,
    buffers: &mut FrameBuffers,
    partition: &BandPartition,
) -> Result<FrameStats> {
    let resolution = buffers.resolution();
    let mut slices = buffers.split_bands(partition)?;

    if let [only] = slices.as_mut_slice() {
        return Ok(rasterize_band(projector, resolution, only));
    }

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(slices.len());
        for (i, mut slice) in slices.into_iter().enumerate() {
            let band = slice.band();
            let handle = thread::Builder::new()
                .name(format!("raster-band-{i}"))
                .spawn_scoped(scope, move || rasterize_band(projector, resolution, &mut slice))
                .map_err(|source| RenderError::WorkerSpawn {
                    start_y: band.start_y,
                    end_y: band.end_y,
                    source,
                })?;
            handles.push((band, handle));
        }

        let mut total = FrameStats::default();
        for (band, handle) in handles {
            let stats = handle.join().map_err(|_| RenderError::WorkerPanicked {
                start_y: band.start_y,
                end_y: band.end_y,
            })?;
            total.merge(&stats);
        }
        Ok(total)
    })
}
