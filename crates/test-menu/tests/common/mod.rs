#![allow(dead_code)]

use std::{cell::Cell, collections::VecDeque, fmt::Write, time::Duration};

use test_menu::{
    Clock, LineChannel, Registry, Report, ReportStats, TestContext, TestDescriptor, TestFn,
    TestResult,
};

/// Scripted console: each `receive_line` pops one line, `try_receive_byte`
/// only ever sees bytes queued with `push_stale`.
#[derive(Default)]
pub struct MockChannel {
    lines: VecDeque<Vec<u8>>,
    stale: VecDeque<u8>,
    pub sent: Vec<u8>,
    pub idle_waits: usize,
    pub reads: usize,
}

impl MockChannel {
    pub fn new<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ch = Self::default();
        for line in lines {
            ch.push_line(line);
        }
        ch
    }

    pub fn push_line(&mut self, line: &str) {
        self.lines.push_back(line.as_bytes().to_vec());
    }

    pub fn push_stale(&mut self, bytes: &[u8]) {
        self.stale.extend(bytes);
    }

    pub fn stale_left(&self) -> usize {
        self.stale.len()
    }

    /// Output with the `\n\r` line endings folded back to `\n`.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.sent).replace('\r', "")
    }

    pub fn clear_output(&mut self) {
        self.sent.clear();
    }
}

impl LineChannel for MockChannel {
    fn send_byte(&mut self, byte: u8) {
        self.sent.push(byte);
    }

    fn try_receive_byte(&mut self) -> Option<u8> {
        self.stale.pop_front()
    }

    fn receive_line(&mut self, buf: &mut [u8]) -> usize {
        self.reads += 1;
        let line = self.lines.pop_front().expect("scripted input exhausted");
        let n = line.len().min(buf.len());
        buf[..n].copy_from_slice(&line[..n]);
        n
    }

    fn wait_until_idle(&mut self) {
        self.idle_waits += 1;
    }
}

/// Runs the tests and remembers the order and context they ran with.
#[derive(Default)]
pub struct RecordingReport {
    ctx: TestContext,
    pub ran: Vec<&'static str>,
    pub contexts: Vec<TestContext>,
    pub begins: usize,
    pub ends: usize,
    stats: ReportStats,
}

impl Report for RecordingReport {
    fn begin(&mut self, out: &mut dyn Write) {
        self.begins += 1;
        self.stats = ReportStats::default();
        let _ = writeln!(out, "<begin>");
    }

    fn end(&mut self, out: &mut dyn Write) {
        self.ends += 1;
        let _ = writeln!(out, "<end>");
    }

    fn set_context(&mut self, ctx: TestContext) {
        self.ctx = ctx;
    }

    fn context(&self) -> &TestContext {
        &self.ctx
    }

    fn run_default(&mut self, out: &mut dyn Write, test_fn: TestFn, name: &'static str, _line: u32) {
        self.ran.push(name);
        self.contexts.push(self.ctx);
        self.stats.tests += 1;
        if test_fn().is_err() {
            self.stats.failures += 1;
        }
        let _ = writeln!(out, "<run {name}>");
    }

    fn stats(&self) -> ReportStats {
        self.stats
    }
}

/// Advances by `tick` on every read.
pub struct ManualClock {
    now: Cell<Duration>,
    tick: Duration,
}

impl ManualClock {
    pub fn new(tick: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            tick,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let t = self.now.get();
        self.now.set(t + self.tick);
        t
    }
}

pub fn pass() -> TestResult {
    Ok(())
}

pub fn case(name: &'static str, desc: &'static str) -> TestDescriptor {
    TestDescriptor::new(name, desc, "suite.rs", 1, pass)
}

pub fn registry(cases: &[TestDescriptor]) -> Registry {
    cases.iter().copied().collect()
}

/// Show `log` output of the crate under `RUST_LOG`.
pub fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}
