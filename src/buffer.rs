use core::fmt::{self, Write};

use crate::constants::*;

/// Logical content of one digit position. Raw bitmask writes have no single
/// character representation, so they are recorded as `Blank` and re-render
/// as an empty digit if the display is scrolled afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Digit {
    Blank,
    Char(char),
}

impl Digit {
    fn mask(self) -> u16 {
        match self {
            Digit::Blank => segment_mask(' '),
            Digit::Char(c) => segment_mask(c),
        }
    }
}

/// Font lookup. Code points outside 0x20-0x7E map to the all-segments-lit
/// fallback entry.
pub fn segment_mask(c: char) -> u16 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        SEGMENT_TABLE[(code - 0x20) as usize]
    } else {
        SEGMENT_TABLE[SEGMENT_TABLE.len() - 1]
    }
}

/// Maps a (segment, digit) pair to a byte offset and bit mask within the
/// 16-byte display RAM. Segments 0-6 use COM lines 0-6 directly; segment 8
/// shares COM 0 and segment 7 shares COM 1; segments 9-13 fold back onto
/// COM 2-6. Segments above 6 select the upper nibble of the row group.
pub fn segment_address(segment: u8, digit: u8) -> (usize, u8) {
    let com = match segment {
        8 => 0,
        7 => 1,
        0..=6 => segment,
        _ => segment - 7,
    };

    let mut row = digit;
    if segment > 6 {
        row += 4;
    }

    let mut addr = (com as usize) << 1;
    if row > 7 {
        addr += 1;
    }
    (addr, 1 << (row % 8))
}

/// In-memory mirror of the controller's display RAM plus the logical
/// character at each of the 4 digit positions (position 0 is leftmost).
pub struct DisplayBuffer {
    ram: [u8; BUFFER_SIZE],
    content: [Digit; NUM_DIGITS as usize],
}

impl DisplayBuffer {
    pub fn new() -> Self {
        Self {
            ram: [0; BUFFER_SIZE],
            content: [Digit::Blank; NUM_DIGITS as usize],
        }
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.ram
    }

    pub fn content(&self) -> &[Digit; NUM_DIGITS as usize] {
        &self.content
    }

    pub fn clear(&mut self) {
        self.ram = [0; BUFFER_SIZE];
        self.content = [Digit::Blank; NUM_DIGITS as usize];
    }

    pub fn set_segment(&mut self, segment: u8, digit: u8) {
        let (addr, mask) = segment_address(segment, digit);
        self.ram[addr] |= mask;
    }

    /// Clears all 14 segment bits of one digit. The colon and decimal-point
    /// bits live in bytes the segments never touch and are left alone.
    pub fn erase_digit(&mut self, digit: u8) {
        for segment in 0..SEGMENTS_PER_DIGIT {
            let (addr, mask) = segment_address(segment, digit);
            self.ram[addr] &= !mask;
        }
    }

    pub fn put_bitmask(&mut self, bitmask: u16, digit: u8) {
        self.erase_digit(digit);
        for segment in 0..SEGMENTS_PER_DIGIT {
            if bitmask >> segment & 1 != 0 {
                self.set_segment(segment, digit);
            }
        }
    }

    /// Renders one character at the given position. Out-of-range positions
    /// and code points outside 32..=127 are dropped silently. `.` and `:`
    /// only set their indicator bit and leave the digit content untouched.
    pub fn put_char(&mut self, c: char, index: u8) {
        if index >= NUM_DIGITS {
            return;
        }
        let code = c as u32;
        if !(32..=127).contains(&code) {
            return;
        }
        if c == '.' {
            self.set_decimal_point(true);
            return;
        }
        if c == ':' {
            self.set_colon(true);
            return;
        }
        self.content[index as usize] = Digit::Char(c);
        self.put_bitmask(segment_mask(c), index);
    }

    /// Shifts the logical content by `count` positions, positive toward
    /// position 0 (scroll left), then re-renders every digit. Vacated
    /// positions become blank; a magnitude of 4 or more blanks everything.
    pub fn scroll(&mut self, count: i32) {
        let mut shifted = [Digit::Blank; NUM_DIGITS as usize];
        for (i, slot) in shifted.iter_mut().enumerate() {
            let src = i as i32 + count;
            if (0..NUM_DIGITS as i32).contains(&src) {
                *slot = self.content[src as usize];
            }
        }
        self.content = shifted;
        for digit in 0..NUM_DIGITS {
            self.put_bitmask(self.content[digit as usize].mask(), digit);
        }
    }

    /// Scrolls one position left and appends the character at the rightmost
    /// digit. `.` and `:` attach to the current rightmost digit without
    /// consuming a position.
    pub fn push(&mut self, c: char) {
        if c != '.' && c != ':' {
            self.scroll(1);
        }
        self.put_char(c, NUM_DIGITS - 1);
    }

    pub fn put_text(&mut self, text: &str) {
        for c in text.chars() {
            self.push(c);
        }
    }

    pub fn set_digit_raw(&mut self, index: u8, bitmask: u16) {
        self.content[index as usize] = Digit::Blank;
        self.put_bitmask(bitmask, index);
    }

    pub fn colon(&self) -> bool {
        self.ram[COLON_ADDRESS] & 0b01 != 0
    }

    pub fn set_colon(&mut self, on: bool) {
        if on {
            self.ram[COLON_ADDRESS] |= 0b01;
        } else {
            self.ram[COLON_ADDRESS] &= !0b01;
        }
    }

    pub fn decimal_point(&self) -> bool {
        self.ram[DOT_ADDRESS] & 0b01 != 0
    }

    pub fn set_decimal_point(&mut self, on: bool) {
        if on {
            self.ram[DOT_ADDRESS] |= 0b01;
        } else {
            self.ram[DOT_ADDRESS] &= !0b01;
        }
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// A number formatted for the display, at most 5 characters (the decimal
/// point shares a digit position and does not count against the 4 digits).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormattedNumber {
    buf: [u8; 8],
    len: usize,
}

impl FormattedNumber {
    /// Formats a finite value. Integer-valued inputs keep all their digits
    /// and must fit in 4 characters, sign included. Anything else is
    /// truncated to one fractional digit and capped at 5 characters total.
    pub fn from_f64(value: f64) -> Option<Self> {
        let mut out = Self { buf: [0; 8], len: 0 };
        let int_part = value as i64;
        if value == int_part as f64 {
            write!(out, "{}", int_part).ok()?;
            if out.len > 4 {
                return None;
            }
        } else {
            let frac = if value < 0.0 {
                int_part as f64 - value
            } else {
                value - int_part as f64
            };
            // The epsilon keeps representation error just below a whole
            // tenth from pulling the truncated digit down by one.
            let tenth = ((frac * 10.0 + 1e-9) as u8).min(9);
            let sign = if value < 0.0 && int_part == 0 { "-" } else { "" };
            write!(out, "{}{}.{}", sign, int_part, tenth).ok()?;
            if out.len > 5 {
                return None;
            }
        }
        Some(out)
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl Write for FormattedNumber {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if self.len + bytes.len() > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}
