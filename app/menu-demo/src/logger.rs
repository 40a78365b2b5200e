use std::{io::Write, time::Instant};

use ansi_rgb::{red, yellow, Foreground};
use log::{Level, LevelFilter, Log};
use rgb::{Rgb, RGB8};

fn level_to_rgb(level: Level) -> RGB8 {
    match level {
        Level::Error => red(),
        Level::Warn => yellow(),
        Level::Info => Rgb::new(0x00, 0xBC, 0x12),
        Level::Debug => Rgb::new(0x16, 0x85, 0xA9),
        Level::Trace => Rgb::new(128, 128, 128),
    }
}

fn level_icon(level: Level) -> &'static str {
    match level {
        Level::Error => "💥",
        Level::Warn => "⚠️",
        Level::Info => "💡",
        Level::Debug => "🐛",
        Level::Trace => "🔍",
    }
}

/// Coloured logger on stderr, so it never mixes into the menu on stdout.
struct MenuLogger {
    start: Instant,
    level: LevelFilter,
}

impl Log for MenuLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {:.3?} [{path}:{line}] {args}",
            level_icon(record.level()),
            self.start.elapsed(),
            path = record.target(),
            line = record.line().unwrap_or(0),
            args = record.args()
        );
        let _ = writeln!(
            std::io::stderr(),
            "{}",
            line.fg(level_to_rgb(record.level()))
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

pub fn init(level: LevelFilter) {
    let logger = Box::leak(Box::new(MenuLogger {
        start: Instant::now(),
        level,
    }));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
