use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_verbose_logging(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub(crate) fn log_verbose(message: impl AsRef<str>) {
    if VERBOSE.load(Ordering::Relaxed) {
        println!("{}", format!("[opsdrill] {}", message.as_ref()).dimmed());
    }
}
