// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::uninlined_format_args)]

use icongen::{Config, Generator, Icon, Outcome};

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), icongen::Error> {
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(LOGGER.max_level);
    }

    let generator = Generator::new(Config::default());
    generator.run(print_icon)?;

    println!("Icon generation complete!");
    Ok(())
}

fn print_icon(icon: &Icon) {
    match icon.outcome {
        Outcome::Rendered => println!("Generated {}", icon.path.display()),
        Outcome::Placeholder(ref e) => {
            println!("Error generating {}: {}", icon.path.display(), e);
            println!("Created placeholder {}", icon.path.display());
        }
    }
}

/// A simple stderr logger.
///
/// usvg warnings about skipped SVG features end up here.
static LOGGER: SimpleLogger = SimpleLogger {
    max_level: log::LevelFilter::Warn,
};

struct SimpleLogger {
    max_level: log::LevelFilter,
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let target = record
            .module_path()
            .filter(|_| record.target().is_empty())
            .unwrap_or_else(|| record.target());

        let prefix = match record.level() {
            log::Level::Error => "Error",
            log::Level::Warn => "Warning",
            log::Level::Info => "Info",
            log::Level::Debug => "Debug",
            log::Level::Trace => "Trace",
        };

        eprintln!(
            "{} (in {}:{}): {}",
            prefix,
            target,
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {}
}
