//! Fixed-size pool of worker threads for y = A @ x.
//!
//! Each worker is handed a `RowTask` describing its rows and a mutable
//! borrow of only its own slice of `y`. The slices are carved out with
//! `split_at_mut`, so no two workers can alias an output element and no
//! locking is needed. `A` and `x` are shared by immutable reference.

use std::num::NonZeroUsize;
use std::thread::{self, Scope, ScopedJoinHandle};

use tracing::{debug, trace};

use crate::backend::{check_buffers, MatVecBackend};
use crate::cpu::kernel;
use crate::error::{MatVecError, Result};
use crate::partition::{partitions, RowRange};

/// Everything one worker needs: its index, its rows, the shared inputs,
/// and write access to its own output rows.
struct RowTask<'a> {
    worker: usize,
    rows: RowRange,
    a: &'a [f64],
    x: &'a [f64],
    n: usize,
    y_local: &'a mut [f64],
}

impl RowTask<'_> {
    fn execute(self) {
        trace!(worker = self.worker, rows = self.rows.len(), "worker start");
        kernel::matvec_rows(self.a, self.n, self.x, self.y_local, self.rows);
    }
}

/// A spawned worker. Joined exactly once by the pool.
struct WorkerHandle<'scope> {
    worker: usize,
    handle: ScopedJoinHandle<'scope, ()>,
}

impl WorkerHandle<'_> {
    fn join(self) -> Result<()> {
        self.handle
            .join()
            .map_err(|_| MatVecError::WorkerPanicked { worker: self.worker })
    }
}

/// Runs the row kernel on a fixed number of OS threads, one per worker.
///
/// The worker count is fixed for the lifetime of the pool. Workers are
/// spawned per call to [`WorkerPool::run`] and all of them are joined before
/// it returns.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    workers: NonZeroUsize,
}

impl WorkerPool {
    /// Create a pool of `workers` threads.
    ///
    /// # Errors
    /// Returns `InvalidWorkerCount` if `workers == 0`.
    pub fn new(workers: usize) -> Result<Self> {
        let workers = NonZeroUsize::new(workers).ok_or(MatVecError::InvalidWorkerCount(workers))?;
        Ok(WorkerPool { workers })
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// Computes `y = A @ x` with one thread per worker and waits for all of them.
    ///
    /// - `a`: row-major data of shape [m, n]
    /// - `x`: data of shape [n, 1]
    /// - `y`: caller-owned output of length m; each element is written once
    ///
    /// Only buffer lengths are checked here. Whether `x` is a column vector
    /// compatible with `A` is the caller's concern (see `Matrix::check_matvec`).
    ///
    /// Any worker failure fails the whole run; `y` is then unspecified.
    pub fn run(&self, a: &[f64], x: &[f64], y: &mut [f64], n: usize) -> Result<()> {
        check_buffers(a, x, y, n)?;
        let p = self.workers();
        let m = y.len();
        debug!(rows = m, cols = n, workers = p, "starting worker pool");

        thread::scope(move |scope| {
            let mut handles = Vec::new();
            handles
                .try_reserve_exact(p)
                .map_err(|_| MatVecError::Allocation {
                    what: "worker handles",
                    elements: p,
                })?;

            let spawned = spawn_workers(scope, a, x, y, n, p, &mut handles);
            join_all(handles, spawned)
        })
    }
}

fn spawn_workers<'scope, 'env>(
    scope: &'scope Scope<'scope, 'env>,
    a: &'env [f64],
    x: &'env [f64],
    y: &'env mut [f64],
    n: usize,
    p: usize,
    handles: &mut Vec<WorkerHandle<'scope>>,
) -> Result<()> {
    let mut rest = y;
    for (worker, rows) in partitions(p, rest.len()).enumerate() {
        let (y_local, tail) = std::mem::take(&mut rest).split_at_mut(rows.len());
        rest = tail;

        debug!(worker, first = rows.first(), last = ?rows.last(), "assigning rows");
        let task = RowTask {
            worker,
            rows,
            a,
            x,
            n,
            y_local,
        };
        let handle = thread::Builder::new()
            .name(format!("matvec-worker-{worker}"))
            .spawn_scoped(scope, move || task.execute())
            .map_err(|source| MatVecError::Spawn { worker, source })?;
        handles.push(WorkerHandle { worker, handle });
    }
    Ok(())
}

/// Join barrier: joins every handle, even after a spawn failure, and
/// returns the first error seen (`spawned` first, then in worker order).
fn join_all(handles: Vec<WorkerHandle<'_>>, spawned: Result<()>) -> Result<()> {
    let joined = handles.len();
    let mut outcome = spawned;
    for handle in handles {
        let result = handle.join();
        if outcome.is_ok() {
            outcome = result;
        }
    }
    if outcome.is_ok() {
        debug!(workers = joined, "all workers joined");
    }
    outcome
}

impl MatVecBackend for WorkerPool {
    fn name(&self) -> &str {
        "threaded"
    }

    fn matvec_into(&self, a: &[f64], x: &[f64], y: &mut [f64], n: usize) -> Result<()> {
        self.run(a, x, y, n)
    }
}
