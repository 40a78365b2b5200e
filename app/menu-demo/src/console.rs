use std::{
    io::{stdin, stdout, Read, Stdout, Write},
    process,
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};

use log::{debug, info};
use test_menu::{Clock, LineChannel};

/// Terminal stand-in for a UART.
///
/// Stdin is pumped byte by byte from a reader thread so that pending input
/// can be polled and dropped the way a UART receive FIFO can.
pub struct StdioChannel {
    rx: Receiver<u8>,
    out: Stdout,
}

impl StdioChannel {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = [0u8; 1];
            let mut input = stdin();
            while let Ok(1) = input.read(&mut buf) {
                if tx.send(buf[0]).is_err() {
                    return;
                }
            }
            debug!("stdin closed");
        });
        Self { rx, out: stdout() }
    }
}

impl LineChannel for StdioChannel {
    fn send_byte(&mut self, byte: u8) {
        let _ = self.out.write_all(&[byte]);
    }

    fn try_receive_byte(&mut self) -> Option<u8> {
        self.rx.try_recv().ok()
    }

    fn receive_line(&mut self, buf: &mut [u8]) -> usize {
        let _ = self.out.flush();
        let mut len = 0;
        loop {
            match self.rx.recv() {
                Ok(b'\r' | b'\n') => return len,
                Ok(ch) => {
                    if let Some(slot) = buf.get_mut(len) {
                        *slot = ch;
                        len += 1;
                    }
                }
                Err(_) => {
                    info!("input closed, leaving the menu");
                    let _ = self.out.flush();
                    process::exit(0);
                }
            }
        }
    }

    fn wait_until_idle(&mut self) {
        let _ = self.out.flush();
    }
}

/// Milliseconds since the program started.
pub struct StdClock {
    start: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for StdClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}
