#![no_std]

mod buffer;
mod constants;

pub use buffer::{segment_address, segment_mask, Digit, DisplayBuffer, FormattedNumber};
pub use constants::*;
use embedded_hal::i2c::I2c;
use num_traits::ToPrimitive;

/// Driver for a 4-character, 14-segment alphanumeric display on the
/// HT16K33 controller.
pub struct QwiicAlphanumeric<I2C> {
    pub i2c: I2C,
    pub address: u8,
    buffer: DisplayBuffer,
    auto_write: bool,
    blink_rate: u8,
    brightness: f32,
}

impl<I2C, E> QwiicAlphanumeric<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: DisplayBuffer::new(),
            auto_write: true,
            blink_rate: 0,
            brightness: 1.0,
        }
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Turns the oscillator on and brings the display up cleared, not
    /// blinking, at full brightness.
    pub fn init(&mut self) -> Result<(), QwiicAlphanumericError<E>> {
        self.write_cmd(command::OSCILLATOR_ON)?;
        self.clear()?;
        self.set_blink_rate(0)?;
        self.set_brightness(1.0)?;
        Ok(())
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Pushes the full 16-byte display RAM to the device in one block
    /// write starting at offset 0.
    pub fn show(&mut self) -> Result<(), QwiicAlphanumericError<E>> {
        let mut frame = [0u8; BUFFER_SIZE + 1];
        frame[1..].copy_from_slice(self.buffer.as_bytes());
        self.i2c.write(self.address, &frame)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), QwiicAlphanumericError<E>> {
        self.buffer.clear();
        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    /// Clears the display and renders the text. Strings longer than 4
    /// characters scroll across the display, ending with the tail visible;
    /// `.` and `:` light their indicator instead of consuming a position.
    pub fn print(&mut self, text: &str) -> Result<(), QwiicAlphanumericError<E>> {
        self.clear()?;
        self.buffer.put_text(text);
        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    /// Clears the display and renders a number, returning the exact string
    /// that was rendered. Fails with `Overflow` when the value does not fit
    /// (see [`format_number`](Self::format_number)).
    pub fn print_number<T: ToPrimitive>(
        &mut self,
        value: T,
    ) -> Result<FormattedNumber, QwiicAlphanumericError<E>> {
        self.clear()?;
        let text = self.format_number(value)?;
        if self.auto_write {
            self.show()?;
        }
        Ok(text)
    }

    /// Renders the value as uppercase hexadecimal through the text path, so
    /// long values scroll instead of overflowing.
    pub fn print_hex<T: ToPrimitive>(&mut self, value: T) -> Result<(), QwiicAlphanumericError<E>> {
        let value = value
            .to_i64()
            .ok_or(QwiicAlphanumericError::UnsupportedValue)?;

        let mut digits = [0u8; 17];
        let mut start = digits.len();
        let mut num = value.unsigned_abs();
        loop {
            start -= 1;
            let d = (num % 16) as u8;
            digits[start] = if d < 10 { b'0' + d } else { b'A' + d - 10 };
            num /= 16;
            if num == 0 {
                break;
            }
        }
        if value < 0 {
            start -= 1;
            digits[start] = b'-';
        }
        let text = core::str::from_utf8(&digits[start..]).unwrap_or("");
        self.print(text)
    }

    /// Formats a number into the display without clearing it first and
    /// without flushing, regardless of the auto-write setting. Integer
    /// values keep all their digits and must fit in 4 characters; other
    /// values are truncated to one fractional digit and capped at 5
    /// characters total (the decimal point shares a digit position).
    pub fn format_number<T: ToPrimitive>(
        &mut self,
        value: T,
    ) -> Result<FormattedNumber, QwiicAlphanumericError<E>> {
        let value = value
            .to_f64()
            .ok_or(QwiicAlphanumericError::UnsupportedValue)?;
        if !value.is_finite() {
            return Err(QwiicAlphanumericError::UnsupportedValue);
        }
        let text = FormattedNumber::from_f64(value).ok_or(QwiicAlphanumericError::Overflow)?;

        let auto_write = self.auto_write;
        self.auto_write = false;
        self.buffer.put_text(text.as_str());
        self.auto_write = auto_write;

        Ok(text)
    }

    /// Renders one character at the given position. Invalid positions and
    /// non-printable characters are dropped silently.
    pub fn set_char_at(&mut self, index: u8, c: char) -> Result<(), QwiicAlphanumericError<E>> {
        self.buffer.put_char(c, index);
        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    /// Sets a digit to a raw 14-bit segment bitmask. The digit's logical
    /// content becomes blank, since a raw bitmask has no single character
    /// representation.
    pub fn set_digit_raw(
        &mut self,
        index: u8,
        bitmask: u16,
    ) -> Result<(), QwiicAlphanumericError<E>> {
        if index >= NUM_DIGITS {
            return Err(QwiicAlphanumericError::InvalidLocation(index));
        }
        self.buffer.set_digit_raw(index, bitmask);
        if self.auto_write {
            self.show()?;
        }
        Ok(())
    }

    /// Same as [`set_digit_raw`](Self::set_digit_raw), taking the bitmask
    /// as a high/low byte pair.
    pub fn set_digit_raw_bytes(
        &mut self,
        index: u8,
        high: u8,
        low: u8,
    ) -> Result<(), QwiicAlphanumericError<E>> {
        self.set_digit_raw(index, (high as u16) << 8 | low as u16)
    }

    /// Scrolls the display content by `count` positions, positive to the
    /// left. Does not flush.
    pub fn scroll(&mut self, count: i32) {
        self.buffer.scroll(count);
    }

    pub fn blink_rate(&self) -> u8 {
        self.blink_rate
    }

    pub fn set_blink_rate(&mut self, rate: u8) -> Result<(), QwiicAlphanumericError<E>> {
        if rate > MAX_BLINK_RATE {
            return Err(QwiicAlphanumericError::InvalidValue);
        }
        self.blink_rate = rate;
        self.write_cmd(command::BLINK | command::BLINK_DISPLAY_ON | rate << 1)?;
        Ok(())
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: f32) -> Result<(), QwiicAlphanumericError<E>> {
        if !(0.0..=1.0).contains(&brightness) {
            return Err(QwiicAlphanumericError::InvalidValue);
        }
        self.brightness = brightness;
        let level = (MAX_BRIGHTNESS_LEVEL as f32 * brightness + 0.5) as u8 & 0x0F;
        self.write_cmd(command::BRIGHTNESS | level)?;
        Ok(())
    }

    pub fn auto_write(&self) -> bool {
        self.auto_write
    }

    /// When enabled, every mutating display operation flushes to the bus
    /// immediately; when disabled, changes batch until [`show`](Self::show).
    pub fn set_auto_write(&mut self, auto_write: bool) {
        self.auto_write = auto_write;
    }

    pub fn colon(&self) -> bool {
        self.buffer.colon()
    }

    pub fn set_colon(&mut self, on: bool) {
        self.buffer.set_colon(on);
    }

    pub fn decimal_point(&self) -> bool {
        self.buffer.decimal_point()
    }

    pub fn set_decimal_point(&mut self, on: bool) {
        self.buffer.set_decimal_point(on);
    }

    fn write_cmd(&mut self, byte: u8) -> Result<(), QwiicAlphanumericError<E>> {
        self.i2c.write(self.address, &[byte])?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QwiicAlphanumericError<E> {
    I2cError(E),
    /// Digit index outside 0-3.
    InvalidLocation(u8),
    /// Blink rate or brightness outside its documented range.
    InvalidValue,
    /// Formatted number does not fit in 5 display characters.
    Overflow,
    /// Numeric input that cannot be represented (conversion failure,
    /// NaN or infinity).
    UnsupportedValue,
}

impl<E> From<E> for QwiicAlphanumericError<E> {
    fn from(error: E) -> Self {
        QwiicAlphanumericError::I2cError(error)
    }
}
