//! Interactive test menu.
//!
//! The loop is `menu -> read line -> trim -> dispatch -> prompt -> read line`.
//! A blank line redraws the menu, and input that selects nothing runs
//! nothing. Nothing the user types can stop the loop.

use alloc::{string::String, vec, vec::Vec};
use core::{fmt::Write, time::Duration};

use log::debug;

use crate::{
    channel::{ChannelWriter, LineChannel},
    command::{trim_trailing_space, Command},
    executor::run_single,
    select, Clock, Registry, Report, ReportStats,
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunnerConfig {
    /// Size of the line buffer. One byte is kept back, so the longest
    /// accepted line is `line_max - 1` bytes.
    pub line_max: usize,
    pub menu_header: String,
    pub prompt: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            line_max: 256,
            menu_header: "\n\nHere's the test menu, pick your combo:\n".into(),
            prompt: "Enter next test, or 'enter' to see menu\n".into(),
        }
    }
}

/// What one dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub command: Command,
    /// Number of test cases run.
    pub selected: usize,
    /// Only set for menu-number commands that ran a test.
    pub elapsed: Option<Duration>,
    /// Reporter counters after the session closed.
    pub stats: ReportStats,
}

pub struct MenuRunner<C, R, K> {
    registry: Registry,
    channel: C,
    report: R,
    clock: K,
    config: RunnerConfig,
    line: Vec<u8>,
    test_count: usize,
}

impl<C, R, K> MenuRunner<C, R, K>
where
    C: LineChannel,
    R: Report,
    K: Clock,
{
    pub fn new(registry: Registry, channel: C, report: R, clock: K) -> Self {
        Self::with_config(registry, channel, report, clock, RunnerConfig::default())
    }

    pub fn with_config(
        registry: Registry,
        channel: C,
        report: R,
        clock: K,
        config: RunnerConfig,
    ) -> Self {
        let line = vec![0; config.line_max.max(2) - 1];
        let test_count = registry.len();
        Self {
            registry,
            channel,
            report,
            clock,
            config,
            line,
            test_count,
        }
    }

    /// Show the menu, then serve commands forever.
    pub fn run_menu(&mut self) -> ! {
        self.show_menu();
        loop {
            self.step();
        }
    }

    /// Print the numbered list of test cases. Returns how many were listed.
    pub fn show_menu(&mut self) -> usize {
        let mut out = ChannelWriter(&mut self.channel);
        let _ = out.write_str(&self.config.menu_header);
        let mut count = 0;
        for case in self.registry.iter() {
            count += 1;
            let _ = writeln!(out, "({})\t\"{}\" {}", count, case.name, case.desc);
        }
        self.test_count = count;
        count
    }

    /// Serve one command: read it, run it, prompt for the next one.
    pub fn step(&mut self) -> Dispatch {
        let command = self.read_command();
        let dispatch = self.execute(&command);
        let _ = ChannelWriter(&mut self.channel).write_str(&self.config.prompt);
        self.channel.wait_until_idle();
        dispatch
    }

    /// Block until a non-blank line arrives, redrawing the menu on blank ones.
    pub fn read_command(&mut self) -> Command {
        loop {
            let stale = self.channel.drain();
            if stale > 0 {
                debug!("dropped {stale} stale input bytes");
            }

            self.line.fill(0);
            let len = self.channel.receive_line(&mut self.line).min(self.line.len());
            // the line ends at the first NUL, as a C string would
            let line = &self.line[..len];
            let line = line
                .iter()
                .position(|&b| b == 0)
                .map_or(line, |nul| &line[..nul]);
            let text = trim_trailing_space(utf8_prefix(line));
            if !text.is_empty() {
                return Command::parse(text);
            }
            self.show_menu();
        }
    }

    /// Run the cases `command` selects inside one reporter session.
    pub fn execute(&mut self, command: &Command) -> Dispatch {
        let Self {
            registry,
            channel,
            report,
            clock,
            test_count,
            ..
        } = self;
        let mut out = ChannelWriter(channel);

        report.begin(&mut out);

        let mut selected = 0;
        let mut elapsed = None;
        match command {
            Command::All => {
                for case in select::all(registry) {
                    run_single(report, &mut out, case);
                    selected += 1;
                }
            }
            Command::Tag(filter) => {
                for case in select::by_tag(registry, filter) {
                    run_single(report, &mut out, case);
                    selected += 1;
                }
            }
            Command::Name(quoted) => {
                for case in select::by_name(registry, quoted) {
                    run_single(report, &mut out, case);
                    selected += 1;
                }
            }
            Command::Index(index) => {
                let in_menu = usize::try_from(*index).is_ok_and(|i| (1..=*test_count).contains(&i));
                if let Some(case) = select::by_index(registry, *index).filter(|_| in_menu) {
                    let start = clock.now();
                    run_single(report, &mut out, case);
                    let end = clock.now();
                    let took = end.saturating_sub(start);
                    let _ = writeln!(out, "Test ran in {}ms", took.as_millis());
                    elapsed = Some(took);
                    selected = 1;
                }
            }
        }

        report.end(&mut out);

        if selected == 0 {
            debug!("{command:?} selected no test");
        }

        Dispatch {
            command: command.clone(),
            selected,
            elapsed,
            stats: report.stats(),
        }
    }

    pub fn run_all(&mut self) -> Dispatch {
        self.execute(&Command::All)
    }

    /// Run cases whose description contains `filter` verbatim.
    pub fn run_with_filter(&mut self, filter: &str) -> Dispatch {
        self.execute(&Command::Tag(filter.into()))
    }

    /// Run cases whose name contains the text inside `quoted`'s quotes.
    pub fn run_by_name(&mut self, quoted: &str) -> Dispatch {
        self.execute(&Command::Name(quoted.into()))
    }

    /// Run the case listed as number `index` (1-based).
    pub fn run_by_index(&mut self, index: i64) -> Dispatch {
        self.execute(&Command::Index(index))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn report(&self) -> &R {
        &self.report
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn into_parts(self) -> (Registry, C, R, K) {
        (self.registry, self.channel, self.report, self.clock)
    }
}

/// Longest valid UTF-8 prefix; serial input is not guaranteed to be text.
fn utf8_prefix(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            // valid_up_to() marks a char boundary
            core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default()
        }
    }
}
