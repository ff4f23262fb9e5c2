use std::{
    io::{BufReader, BufWriter, Read, Write},
    path::PathBuf,
};

use otter_learn::{
    config::Config,
    context::{tasks::round_robin, Context},
    reports::{persist, TaskOutcome, TaskReport},
    types::err::ErrorKind,
};

use parse_args::parse_args;

mod parse_args;
mod tmp;

/// Options of the CLI, as opposed to options of a run.
pub struct CliConfig {
    pub input: Option<PathBuf>,
    pub headline: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub tmp_dir: PathBuf,
    pub processes: usize,
    pub worker_slice: Option<(usize, usize)>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            input: None,
            headline: None,
            output: None,
            tmp_dir: std::env::temp_dir(),
            processes: 1,
            worker_slice: None,
        }
    }
}

fn main() {
    tmp::register_purge_hook();

    let mut config = Config::default();
    let mut cli = CliConfig::default();

    let args: Vec<String> = std::env::args().collect();
    parse_args(&args, &mut config, &mut cli);

    let Some(input) = &cli.input else {
        println!("An input matrix is required: --input=<path>");
        std::process::exit(1);
    };

    let mut the_context = Context::from_config(config);

    if let Some(headline_path) = &cli.headline {
        match std::fs::File::open(headline_path) {
            Ok(file) => {
                if let Err(e) = the_context.read_headline(BufReader::new(file)) {
                    println!("Failed to read headline: {e:?}");
                    std::process::exit(1);
                }
            }
            Err(_) => {
                println!("Failed to open headline file {headline_path:?}");
                std::process::exit(1);
            }
        }
    }

    match std::fs::File::open(input) {
        Ok(file) => {
            if let Err(e) = the_context.read_matrix(BufReader::new(file)) {
                println!("Failed to read matrix: {e:?}");
                std::process::exit(1);
            }
        }
        Err(_) => {
            println!("Failed to open input file {input:?}");
            std::process::exit(1);
        }
    }

    let result = match (cli.processes, cli.worker_slice) {
        // A worker process: its slice of tasks, written to its private output.
        (_, Some((worker, of))) => run_slice(&the_context, worker, of),

        // The coordinator of a process pool.
        (processes, None) if processes > 1 => {
            coordinate_processes(&args, &cli, processes);
            return;
        }

        // A single process of worker threads.
        _ => the_context.run_parallel(),
    };

    let reports = match result {
        Ok(reports) => reports,
        Err(e) => {
            println!("Run failed: {e:?}");
            std::process::exit(2);
        }
    };

    if let Err(e) = write_reports(&the_context, &reports, cli.output.as_deref()) {
        println!("Failed to write reports: {e:?}");
        std::process::exit(2);
    }
}

/// Runs the tasks of one worker slice, threaded per the configuration.
///
/// With more than one configured worker this is the hybrid deployment: the slice owned by this
/// process is partitioned again, round-robin, across its own threads.
fn run_slice(context: &Context, worker: usize, of: usize) -> Result<Vec<TaskReport>, ErrorKind> {
    let the_tasks = context.tasks()?;
    let owned = round_robin(the_tasks.len(), of, worker);
    let threads = context.config.workers.max(1);

    if threads == 1 {
        let mut reports = Vec::with_capacity(owned.len());
        for index in owned {
            reports.push(context.run_task(&the_tasks[index])?);
        }
        return Ok(reports);
    }

    let mut receivers = Vec::with_capacity(threads);
    std::thread::scope(|scope| {
        for thread in 0..threads {
            let (tx, rx) = crossbeam::channel::unbounded();
            receivers.push(rx);

            let share: Vec<usize> = owned.iter().skip(thread).step_by(threads).copied().collect();
            let the_tasks = &the_tasks;

            scope.spawn(move || {
                for index in share {
                    if tx.send(context.run_task(&the_tasks[index])).is_err() {
                        break;
                    }
                }
            });
        }
    });

    let mut reports = Vec::with_capacity(owned.len());
    for receiver in receivers {
        for report in receiver {
            reports.push(report?);
        }
    }
    Ok(reports)
}

/// Spawns one worker process per slice, then concatenates their private outputs in worker order.
fn coordinate_processes(args: &[String], cli: &CliConfig, processes: usize) {
    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(_) => {
            println!("Failed to locate the current executable");
            std::process::exit(2);
        }
    };

    let stamp = std::process::id();
    let mut children = Vec::with_capacity(processes);
    let mut temp_paths = Vec::with_capacity(processes);

    for worker in 0..processes {
        let temp_path = cli.tmp_dir.join(format!("otter_learn_{stamp}_{worker}.tmp"));
        tmp::note_temp(temp_path.clone());

        let mut command = std::process::Command::new(&exe);
        for arg in args.iter().skip(1) {
            if !arg.starts_with("--processes") && !arg.starts_with("--output") {
                command.arg(arg);
            }
        }
        command.arg(format!("--worker-slice={worker}/{processes}"));
        command.arg(format!("--output={}", temp_path.display()));

        match command.spawn() {
            Ok(child) => {
                children.push(child);
                temp_paths.push(temp_path);
            }
            Err(_) => {
                println!("Failed to spawn worker {worker}");
                tmp::purge_temps();
                std::process::exit(2);
            }
        }
    }

    for mut child in children {
        match child.wait() {
            Ok(status) if status.success() => {}
            _ => {
                println!("A worker process failed");
                tmp::purge_temps();
                std::process::exit(2);
            }
        }
    }

    // The sequential merge, in worker-index order.
    let merged: Result<(), std::io::Error> = (|| {
        let mut sink: Box<dyn Write> = match &cli.output {
            Some(path) => Box::new(BufWriter::new(std::fs::File::create(path)?)),
            None => Box::new(std::io::stdout()),
        };
        for temp_path in &temp_paths {
            let mut contents = String::new();
            std::fs::File::open(temp_path)?.read_to_string(&mut contents)?;
            sink.write_all(contents.as_bytes())?;
        }
        sink.flush()
    })();

    tmp::purge_temps();

    if merged.is_err() {
        println!("Failed to merge worker outputs");
        std::process::exit(2);
    }
}

/// Writes each report: learned formulas in the persistence format, other outcomes as comments.
fn write_reports(
    context: &Context,
    reports: &[TaskReport],
    output: Option<&std::path::Path>,
) -> Result<(), ErrorKind> {
    let headline = context.headline();

    let mut sink: Box<dyn Write> = match output {
        Some(path) => match std::fs::File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(_) => {
                return Err(ErrorKind::Report(otter_learn::types::err::ReportError::Io));
            }
        },
        None => Box::new(std::io::stdout()),
    };

    for report in reports {
        match &report.outcome {
            TaskOutcome::Learned(_) => {
                persist::write_formula(&mut sink, report, &headline, context.config.offset)?;
            }
            outcome => {
                let _ = writeln!(sink, "c {}: {outcome}", report.label);
            }
        }
    }

    let _ = sink.flush();
    Ok(())
}
