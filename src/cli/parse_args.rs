use std::{path::PathBuf, str::FromStr};

use otter_learn::config::{Closure, Config, Cooking, Direction, Strategy, TaskMode};

use crate::CliConfig;

/// Parse CLI arguments to a [Config] struct or a [CliConfig] struct.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &[String], cfg: &mut Config, cli: &mut CliConfig) {
    'arg_examination: for arg in args.iter().skip(1) {
        let mut split = arg.split('=');
        match split.next() {
            Some("--no-section") => {
                println!("Relevance search disabled, every coordinate is kept.");
                cfg.no_section = true;
            }

            Some("--no-cover") => {
                cfg.set_cover = false;
            }

            Some("--self-check") => {
                cfg.self_check = true;
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, a message is sent.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--closure") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = Closure::from_str(request) {
                        cfg.closure = value;
                        continue 'arg_examination;
                    }
                }
                println!("closure requires one of: horn, dual-horn, bijunctive, cnf");
                std::process::exit(1);
            }

            Some("--cooking") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = Cooking::from_str(request) {
                        cfg.cooking = value;
                        continue 'arg_examination;
                    }
                }
                println!("cooking requires one of: raw, bleu, medium, well-done");
                std::process::exit(1);
            }

            Some("--direction") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = Direction::from_str(request) {
                        cfg.direction = value;
                        continue 'arg_examination;
                    }
                }
                println!("direction requires one of: ascending, descending, random, low-score, high-score, precedence");
                std::process::exit(1);
            }

            Some("--headline") => {
                if let Some(request) = split.next() {
                    if let Ok(path) = PathBuf::from_str(request) {
                        cli.headline = Some(path);
                        continue 'arg_examination;
                    }
                }
                println!("headline requires a path");
                std::process::exit(1);
            }

            Some("--input") => {
                if let Some(request) = split.next() {
                    if let Ok(path) = PathBuf::from_str(request) {
                        cli.input = Some(path);
                        continue 'arg_examination;
                    }
                }
                println!("input requires a path");
                std::process::exit(1);
            }

            Some("--mode") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = TaskMode::from_str(request) {
                        cfg.mode = value;
                        continue 'arg_examination;
                    }
                }
                println!("mode requires one of: one, all, selected");
                std::process::exit(1);
            }

            Some("--offset") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        cfg.offset = value;
                        continue 'arg_examination;
                    }
                }
                println!("offset requires a non-negative integer");
                std::process::exit(1);
            }

            Some("--output") => {
                if let Some(request) = split.next() {
                    if let Ok(path) = PathBuf::from_str(request) {
                        cli.output = Some(path);
                        continue 'arg_examination;
                    }
                }
                println!("output requires a path");
                std::process::exit(1);
            }

            Some("--processes") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if value >= 1 {
                            cli.processes = value;
                            continue 'arg_examination;
                        }
                    }
                }
                println!("processes requires a positive integer");
                std::process::exit(1);
            }

            Some("--seed") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u64>() {
                        cfg.seed = value;
                        continue 'arg_examination;
                    }
                }
                println!("seed requires a non-negative integer");
                std::process::exit(1);
            }

            Some("--selected") => {
                if let Some(request) = split.next() {
                    cfg.selected = request.split(',').map(str::to_owned).collect();
                    cfg.mode = TaskMode::SelectedToAll;
                    continue 'arg_examination;
                }
                println!("selected requires a comma-separated list of group names");
                std::process::exit(1);
            }

            Some("--strategy") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = Strategy::from_str(request) {
                        cfg.strategy = value;
                        continue 'arg_examination;
                    }
                }
                println!("strategy requires one of: large, exact");
                std::process::exit(1);
            }

            Some("--tmp-dir") => {
                if let Some(request) = split.next() {
                    if let Ok(path) = PathBuf::from_str(request) {
                        cli.tmp_dir = path;
                        continue 'arg_examination;
                    }
                }
                println!("tmp-dir requires a path");
                std::process::exit(1);
            }

            Some("--worker-slice") => {
                if let Some(request) = split.next() {
                    if let Some((worker, of)) = request.split_once('/') {
                        if let (Ok(worker), Ok(of)) = (worker.parse(), of.parse()) {
                            cli.worker_slice = Some((worker, of));
                            continue 'arg_examination;
                        }
                    }
                }
                println!("worker-slice requires the form <worker>/<count>");
                std::process::exit(1);
            }

            Some("--workers") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if value >= 1 {
                            cfg.workers = value;
                            continue 'arg_examination;
                        }
                    }
                }
                println!("workers requires a positive integer");
                std::process::exit(1);
            }

            Some(unknown) => {
                println!("Unrecognised argument: {unknown}");
                std::process::exit(1);
            }

            None => {}
        }
    }
}
