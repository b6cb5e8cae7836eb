use std::{cmp, num::NonZeroUsize, thread, time::Instant};

use crate::{
    TestOutcomes,
    outcome::TestOutcome,
    runner::{TestJob, TestRunner},
};

/// Runs jobs on a pool of scoped worker threads.
///
/// Workers pull jobs from a shared queue, so outcomes are reported in the
/// order jobs finish. All workers are joined before [`run`](TestRunner::run)
/// returns.
#[derive(Debug, Clone)]
pub struct ConcurrentRunner {
    threads: NonZeroUsize,
}

impl Default for ConcurrentRunner {
    fn default() -> Self {
        Self {
            threads: thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl ConcurrentRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thread_count(self, count: NonZeroUsize) -> Self {
        Self { threads: count }
    }
}

impl TestRunner for ConcurrentRunner {
    fn run<'j>(&self, jobs: Vec<TestJob<'j>>) -> TestOutcomes {
        let worker_count = self.worker_count(jobs.len());
        let (jtx, jrx) = crossbeam_channel::unbounded::<TestJob<'j>>();
        let (otx, orx) = crossbeam_channel::unbounded();

        for job in jobs {
            // `jrx` is alive, the queue is unbounded.
            let _ = jtx.send(job);
        }
        drop(jtx);

        thread::scope(|scope| {
            for _ in 0..worker_count.get() {
                let jrx = jrx.clone();
                let otx = otx.clone();
                scope.spawn(move || {
                    while let Ok(TestJob { name, run }) = jrx.recv() {
                        let now = Instant::now();
                        let status = run();
                        let duration = now.elapsed();
                        if otx.send((name, TestOutcome { status, duration })).is_err() {
                            // If receiver dropped, the work is irrelevant anymore, drop silently.
                            return;
                        }
                    }
                });
            }
            drop(otx);

            orx.iter().collect()
        })
    }

    fn worker_count(&self, job_count: usize) -> NonZeroUsize {
        NonZeroUsize::new(cmp::min(self.threads.get(), job_count)).unwrap_or(NonZeroUsize::MIN)
    }
}
