use crate::pipeline::ScanPipeline;
use crate::transport::PacketSource;
use crossbeam_channel::{Receiver, TryRecvError};
use std::time::Instant;
use tracing::{info, warn};

/// Polls `source` and feeds the pipeline until `terminator_rx` says stop.
///
/// Each iteration handles at most one datagram and then hands the pipeline to
/// `render`, which only gets read access. Returns the number of iterations.
pub fn run_loop<S, F>(
    source: &mut S,
    pipeline: &mut ScanPipeline,
    terminator_rx: &Receiver<bool>,
    mut render: F,
) -> u64
where
    S: PacketSource,
    F: FnMut(&ScanPipeline),
{
    let mut n_iterations = 0;
    while !do_terminate(terminator_rx) {
        match source.poll() {
            Ok(Some(datagram)) => {
                pipeline.process(datagram, Instant::now());
            }
            Ok(None) => (),
            Err(e) => warn!(error = %e, "failed to receive datagram"),
        }
        render(pipeline);
        n_iterations += 1;
    }
    info!(n_iterations, frames = pipeline.stats().frames, "driver loop stopped");
    n_iterations
}

/// A dropped sender counts as a request to stop.
pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    match terminator_rx.try_recv() {
        Ok(terminate) => terminate,
        Err(TryRecvError::Empty) => false,
        Err(TryRecvError::Disconnected) => true,
    }
}
