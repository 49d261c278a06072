//! Pattern demonstration entry point.
//!
//! # Responsibility
//! - Walk through the Memento and Observer collaborations end to end.
//! - Own all console output; the core crate only returns values and logs.
//!
//! # Configuration
//! - `PATTERNS_LOG_DIR`: absolute directory for rolling file logs. Unset
//!   leaves file logging off.
//! - `PATTERNS_LOG_LEVEL`: `trace|debug|info|warn|error`, defaults to the
//!   build-mode level.

use log::info;
use patterns_core::{
    default_log_level, init_logging, Caretaker, ConcreteObserver, ConcreteSubject, Originator,
    Subject,
};
use std::error::Error;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "PATTERNS_LOG_DIR";
const LOG_LEVEL_ENV: &str = "PATTERNS_LOG_LEVEL";

fn main() -> ExitCode {
    configure_logging();
    println!("patterns_core ping={}", patterns_core::ping());
    println!("patterns_core version={}", patterns_core::core_version());

    let outcome = run_memento_demo().and_then(|()| run_observer_demo());
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn configure_logging() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level =
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        // Demo output does not depend on file logging.
        eprintln!("logging disabled: {err}");
    }
}

fn run_memento_demo() -> Result<(), Box<dyn Error>> {
    println!("-- memento --");
    let mut originator = Originator::new("init".to_string());
    println!("{}", originator.show());
    originator.set_state("begin".to_string());
    println!("{}", originator.show());

    let mut caretaker = Caretaker::new();
    caretaker.set_memento(originator.create_memento());

    originator.set_state("change".to_string());
    println!("{}", originator.show());

    originator.restore(caretaker.require_memento()?);
    println!("{}", originator.show());
    info!("event=demo_done module=cli demo=memento status=ok");
    Ok(())
}

fn run_observer_demo() -> Result<(), Box<dyn Error>> {
    println!("-- observer --");
    let subject = ConcreteSubject::new();
    let observers: Vec<_> = ["X", "Y", "Z"]
        .into_iter()
        .map(|name| ConcreteObserver::new(&subject, name))
        .collect();
    for observer in &observers {
        subject.attach(observer);
    }

    for status in ["A", "B"] {
        subject.set_status(status.to_string());
        subject.notify()?;
        for change in observers.iter().filter_map(|observer| observer.last_change()) {
            println!("{change}");
        }
    }
    info!("event=demo_done module=cli demo=observer status=ok");
    Ok(())
}
