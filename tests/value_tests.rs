use qwiic_alphanumeric::{Digit, QwiicAlphanumeric, QwiicAlphanumericError, DEFAULT_ADDRESS};

struct MockI2c;

impl embedded_hal::i2c::ErrorType for MockI2c {
    type Error = embedded_hal::i2c::ErrorKind;
}

impl embedded_hal::i2c::I2c for MockI2c {
    fn write(&mut self, _address: u8, _data: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read(&mut self, _address: u8, _buffer: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_read(
        &mut self,
        _address: u8,
        _write: &[u8],
        _read: &mut [u8],
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transaction(
        &mut self,
        _address: u8,
        _operations: &mut [embedded_hal::i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Records every bus write so tests can assert the emitted traffic.
#[derive(Default)]
struct RecordingI2c {
    writes: Vec<(u8, Vec<u8>)>,
}

impl embedded_hal::i2c::ErrorType for RecordingI2c {
    type Error = embedded_hal::i2c::ErrorKind;
}

impl embedded_hal::i2c::I2c for RecordingI2c {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _address: u8, _buffer: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_read(
        &mut self,
        _address: u8,
        _write: &[u8],
        _read: &mut [u8],
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transaction(
        &mut self,
        _address: u8,
        _operations: &mut [embedded_hal::i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[test]
fn number_value_test() {
    let mut display = QwiicAlphanumeric::new(MockI2c);

    assert_eq!(display.print_number(42).unwrap().as_str(), "42");
    assert_eq!(display.print_number(9999).unwrap().as_str(), "9999");
    assert_eq!(display.print_number(-999).unwrap().as_str(), "-999");
    assert_eq!(display.print_number(53.2).unwrap().as_str(), "53.2");

    assert_eq!(
        display.print_number(12345),
        Err(QwiicAlphanumericError::Overflow)
    );
    assert_eq!(
        display.print_number(99999),
        Err(QwiicAlphanumericError::Overflow)
    );
    assert_eq!(
        display.print_number(-1000),
        Err(QwiicAlphanumericError::Overflow)
    );
    assert_eq!(
        display.print_number(f64::NAN),
        Err(QwiicAlphanumericError::UnsupportedValue)
    );
}

#[test]
fn text_window_test() {
    let mut display = QwiicAlphanumeric::new(MockI2c);

    display.print("ABCD").unwrap();
    assert_eq!(
        display.buffer().content(),
        &[
            Digit::Char('A'),
            Digit::Char('B'),
            Digit::Char('C'),
            Digit::Char('D')
        ]
    );

    // Longer strings scroll, keeping the tail visible.
    display.print("ABCDE").unwrap();
    assert_eq!(
        display.buffer().content(),
        &[
            Digit::Char('B'),
            Digit::Char('C'),
            Digit::Char('D'),
            Digit::Char('E')
        ]
    );
}

#[test]
fn hex_value_test() {
    let mut display = QwiicAlphanumeric::new(MockI2c);

    display.print_hex(0xFF).unwrap();
    assert_eq!(
        display.buffer().content(),
        &[Digit::Blank, Digit::Blank, Digit::Char('F'), Digit::Char('F')]
    );

    display.print_hex(0x1A2B).unwrap();
    assert_eq!(
        display.buffer().content(),
        &[
            Digit::Char('1'),
            Digit::Char('A'),
            Digit::Char('2'),
            Digit::Char('B')
        ]
    );
}

#[test]
fn blink_and_brightness_range_test() {
    let mut display = QwiicAlphanumeric::new(MockI2c);

    assert!(display.set_blink_rate(3).is_ok());
    assert_eq!(
        display.set_blink_rate(4),
        Err(QwiicAlphanumericError::InvalidValue)
    );
    assert_eq!(display.blink_rate(), 3);

    assert!(display.set_brightness(0.0).is_ok());
    assert!(display.set_brightness(1.0).is_ok());
    assert_eq!(
        display.set_brightness(1.5),
        Err(QwiicAlphanumericError::InvalidValue)
    );
    assert_eq!(
        display.set_brightness(-0.1),
        Err(QwiicAlphanumericError::InvalidValue)
    );
    assert_eq!(display.brightness(), 1.0);
}

#[test]
fn raw_digit_test() {
    let mut from_mask = QwiicAlphanumeric::new(MockI2c);
    let mut from_bytes = QwiicAlphanumeric::new(MockI2c);

    from_mask.set_digit_raw(0, 0x2D3F).unwrap();
    from_bytes.set_digit_raw_bytes(0, 0x2D, 0x3F).unwrap();
    assert_eq!(from_mask.buffer().as_bytes(), from_bytes.buffer().as_bytes());
    assert_eq!(from_mask.buffer().content()[0], Digit::Blank);

    assert_eq!(
        from_mask.set_digit_raw(4, 0xFFFF),
        Err(QwiicAlphanumericError::InvalidLocation(4))
    );
}

#[test]
fn command_byte_test() {
    let mut display = QwiicAlphanumeric::new(RecordingI2c::default());

    display.set_blink_rate(2).unwrap();
    assert_eq!(display.i2c.writes.last(), Some(&(DEFAULT_ADDRESS, vec![0x85])));

    display.set_brightness(1.0).unwrap();
    assert_eq!(display.i2c.writes.last(), Some(&(DEFAULT_ADDRESS, vec![0xEF])));

    display.set_brightness(0.5).unwrap();
    assert_eq!(display.i2c.writes.last(), Some(&(DEFAULT_ADDRESS, vec![0xE8])));
}

#[test]
fn show_block_write_test() {
    let mut display = QwiicAlphanumeric::with_address(RecordingI2c::default(), 0x71);
    display.set_auto_write(false);

    display.print("8").unwrap();
    assert!(display.i2c.writes.is_empty());

    display.show().unwrap();
    assert_eq!(display.i2c.writes.len(), 1);
    let (address, frame) = &display.i2c.writes[0];
    assert_eq!(*address, 0x71);
    assert_eq!(frame.len(), 17);
    assert_eq!(frame[0], 0x00);
    assert_eq!(&frame[1..], display.buffer().as_bytes());
}

#[test]
fn format_number_restores_auto_write() {
    let mut display = QwiicAlphanumeric::new(RecordingI2c::default());
    display.set_auto_write(false);

    assert_eq!(display.format_number(7).unwrap().as_str(), "7");
    assert!(!display.auto_write());
    assert!(display.i2c.writes.is_empty());

    display.set_auto_write(true);
    assert_eq!(display.format_number(8).unwrap().as_str(), "8");
    assert!(display.auto_write());
    // format_number never flushes on its own.
    assert!(display.i2c.writes.is_empty());
}
