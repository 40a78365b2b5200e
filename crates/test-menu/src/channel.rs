//! Character channel the menu talks over, usually a UART.

use core::fmt;

use embedded_io::{Error as _, Read, ReadReady, Write};
use log::warn;

pub trait LineChannel {
    /// Send one raw byte.
    fn send_byte(&mut self, byte: u8);

    /// Poll for a byte that has already arrived, without blocking.
    fn try_receive_byte(&mut self) -> Option<u8>;

    /// Block until a line ending arrives. Stores at most `buf.len()` bytes,
    /// drops the rest of an overlong line and returns the stored length.
    fn receive_line(&mut self, buf: &mut [u8]) -> usize;

    /// Block until everything sent so far has left the device.
    fn wait_until_idle(&mut self);

    /// Send one byte of text, `\n` becoming `\n\r` and `\r` dropped.
    fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.send_byte(b'\n');
                self.send_byte(b'\r');
            }
            b'\r' => {}
            _ => self.send_byte(byte),
        }
    }

    /// Throw away pending input. Returns how many bytes were dropped.
    fn drain(&mut self) -> usize {
        let mut n = 0;
        while self.try_receive_byte().is_some() {
            n += 1;
        }
        n
    }
}

/// `fmt::Write` over a channel with newline translation.
pub struct ChannelWriter<'a, C: ?Sized>(pub &'a mut C);

impl<C: LineChannel + ?Sized> fmt::Write for ChannelWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.bytes().for_each(|ch| self.0.put_char(ch));
        Ok(())
    }
}

/// [`LineChannel`] over an `embedded-io` serial device.
///
/// Device errors are logged and the operation retried.
pub struct SerialChannel<T> {
    io: T,
}

impl<T> SerialChannel<T> {
    pub fn new(io: T) -> Self {
        Self { io }
    }

    pub fn into_inner(self) -> T {
        self.io
    }
}

impl<T: Read + ReadReady> SerialChannel<T> {
    fn read_byte(&mut self) -> u8 {
        let mut buf = [0u8; 1];
        loop {
            match self.io.read(&mut buf) {
                Ok(1) => return buf[0],
                Ok(_) => {}
                Err(e) => warn!("serial read failed: {:?}", e.kind()),
            }
        }
    }
}

impl<T: Read + ReadReady + Write> LineChannel for SerialChannel<T> {
    fn send_byte(&mut self, byte: u8) {
        loop {
            match self.io.write(&[byte]) {
                Ok(1) => return,
                Ok(_) => {}
                Err(e) => warn!("serial write failed: {:?}", e.kind()),
            }
        }
    }

    fn try_receive_byte(&mut self) -> Option<u8> {
        match self.io.read_ready() {
            Ok(true) => Some(self.read_byte()),
            Ok(false) => None,
            Err(e) => {
                warn!("serial poll failed: {:?}", e.kind());
                None
            }
        }
    }

    fn receive_line(&mut self, buf: &mut [u8]) -> usize {
        let mut len = 0;
        loop {
            let ch = self.read_byte();
            if ch == b'\r' || ch == b'\n' {
                return len;
            }
            if let Some(slot) = buf.get_mut(len) {
                *slot = ch;
                len += 1;
            }
        }
    }

    fn wait_until_idle(&mut self) {
        while let Err(e) = self.io.flush() {
            warn!("serial flush failed: {:?}", e.kind());
        }
    }
}
