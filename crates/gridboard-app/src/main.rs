//! Gridboard terminal shell entry point.
//!
//! Thin presentation layer over the engine: reads line commands from
//! stdin, feeds them to the reducer, and prints the resulting view model.
//! Stands in for the graphical front-end the engine is designed to sit
//! behind.

mod commands;
mod render;

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use gridboard_core::{Catalog, Dashboard, Shell};

use crate::commands::{Command, HELP};

const DEFAULT_SEED: &str = include_str!("../assets/seed.json");

/// Shell wired to the terminal front-end. There are no pointer events on
/// stdin, so the outside-interaction listener is only logged; reload is
/// modeled as re-seeding the dashboard, standing in for a page reload.
struct TermShell {
    reload_requested: Rc<Cell<bool>>,
}

impl Shell for TermShell {
    fn attach_outside_listener(&mut self) {
        log::debug!("outside-interaction listener attached");
    }

    fn detach_outside_listener(&mut self) {
        log::debug!("outside-interaction listener detached");
    }

    fn reload(&mut self) {
        self.reload_requested.set(true);
    }
}

fn seed_json() -> io::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => Ok(DEFAULT_SEED.to_string()),
    }
}

fn new_dashboard(seed: &Catalog, reload_requested: &Rc<Cell<bool>>) -> Dashboard {
    Dashboard::with_shell(
        seed.clone(),
        Box::new(TermShell {
            reload_requested: Rc::clone(reload_requested),
        }),
    )
}

fn main() {
    env_logger::init();
    log::info!("Starting Gridboard");

    let seed = match seed_json().map_err(|e| e.to_string()).and_then(|json| {
        Catalog::from_json(&json).map_err(|e| e.to_string())
    }) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("failed to load seed: {err}");
            std::process::exit(1);
        }
    };

    let reload_requested = Rc::new(Cell::new(false));
    let mut dashboard = new_dashboard(&seed, &reload_requested);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        let view = dashboard.view();
        print!("{}", render::render(&view));
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                log::error!("stdin error: {err}");
                break;
            }
        }

        match commands::parse(&line, &view) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Event(event)) => dashboard.handle(event),
            Err(err) => println!("{err}"),
        }

        if reload_requested.take() {
            log::info!("reloading seed");
            dashboard = new_dashboard(&seed, &reload_requested);
        }
    }

    log::info!("Goodbye");
}
