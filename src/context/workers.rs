/*!
The worker pool --- tasks partitioned across threads, results collected in worker order.

Each worker owns the task indices congruent to its own index, modulo the worker count, and an append-only channel of its results.
Workers never communicate with one another, never block on one another, and share the context by reference, which is sound as everything a task reads is fixed before the run.

After every worker finishes, a single collector drains the channels in worker order and concatenates the reports.
The merge is sequential and single-threaded, and the report order is therefore a function of the partition alone.

There is no cancellation: a run proceeds to completion, or an error from some task ends the collection with that error.
*/

use crate::{
    context::{tasks::round_robin, Context},
    misc::log::targets::{self},
    procedures::ClosureStrategy,
    reports::TaskReport,
    types::err::ErrorKind,
};

/// Runs the tasks of `context` across `workers` threads, returning the reports concatenated in worker order.
pub fn run_partitioned(context: &Context, workers: usize) -> Result<Vec<TaskReport>, ErrorKind> {
    let the_tasks = context.tasks()?;
    let headline = context.headline();
    let learner = ClosureStrategy::select(&context.config, &headline);

    let worker_count = workers.max(1);
    log::info!(target: targets::TASKS, "{} tasks across {} workers", the_tasks.len(), worker_count);

    let mut receivers = Vec::with_capacity(worker_count);

    std::thread::scope(|scope| {
        for worker in 0..worker_count {
            let (tx, rx) = crossbeam::channel::unbounded();
            receivers.push(rx);

            let owned: Vec<usize> = round_robin(the_tasks.len(), worker_count, worker);
            let the_tasks = &the_tasks;
            let headline = &headline;

            scope.spawn(move || {
                for index in owned {
                    let report = context.run_task_with(&the_tasks[index], learner, headline);
                    if tx.send(report).is_err() {
                        break;
                    }
                }
            });
        }
    });

    // Every sender is gone once the scope ends, so each drain below terminates.
    let mut reports = Vec::with_capacity(the_tasks.len());
    for receiver in receivers {
        for report in receiver {
            reports.push(report?);
        }
    }

    Ok(reports)
}
