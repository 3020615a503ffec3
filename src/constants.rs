pub const DEFAULT_ADDRESS: u8 = 0x70;
pub const AVAILABLE_ADDRESSES: [u8; 4] = [0x70, 0x71, 0x72, 0x73];
pub const NUM_DIGITS: u8 = 4;
pub const SEGMENTS_PER_DIGIT: u8 = 14;
pub const BUFFER_SIZE: usize = 16;
pub const MAX_BLINK_RATE: u8 = 3;
pub const MAX_BRIGHTNESS_LEVEL: u8 = 15; // 4 bits

// Display RAM offsets of the extra indicators, bit 0 of each.
pub const COLON_ADDRESS: usize = 0x01;
pub const DOT_ADDRESS: usize = 0x03;

/// 14-segment font for code points 0x20-0x7E, indexed by `code point - 32`.
/// The last entry is the all-segments-lit fallback for anything outside
/// that range (DEL included), kept visible as an error indicator.
pub const SEGMENT_TABLE: [u16; 96] = [
    0b00_0000_0000_0000, // ' ' (space)
    0b00_0010_0000_1000, // '!'
    0b00_0010_0000_0010, // '"'
    0b01_0011_0100_1110, // '#'
    0b01_0011_0110_1101, // '$'
    0b10_0100_0010_0100, // '%'
    0b00_1100_1101_1001, // '&'
    0b00_0010_0000_0000, // '''
    0b00_0000_0011_1001, // '('
    0b00_0000_0000_1111, // ')'
    0b11_1110_1000_0000, // '*'
    0b01_0011_0100_0000, // '+'
    0b10_0000_0000_0000, // ','
    0b00_0001_0100_0000, // '-'
    0b00_0000_0000_0000, // '.'
    0b10_0100_0000_0000, // '/'
    0b00_0000_0011_1111, // '0'
    0b00_0100_0000_0110, // '1'
    0b00_0001_0101_1011, // '2'
    0b00_0001_0100_1111, // '3'
    0b00_0001_0110_0110, // '4'
    0b00_0001_0110_1101, // '5'
    0b00_0001_0111_1101, // '6'
    0b01_0100_0000_0001, // '7'
    0b00_0001_0111_1111, // '8'
    0b00_0001_0110_0111, // '9'
    0b00_0000_0000_0000, // ':'
    0b10_0010_0000_0000, // ';'
    0b00_1100_0000_0000, // '<'
    0b00_0001_0100_1000, // '='
    0b01_0000_1000_0000, // '>'
    0b01_0001_0000_0011, // '?'
    0b00_0011_0011_1011, // '@'
    0b00_0001_0111_0111, // 'A'
    0b01_0011_0000_1111, // 'B'
    0b00_0000_0011_1001, // 'C'
    0b01_0010_0000_1111, // 'D'
    0b00_0001_0111_1001, // 'E'
    0b00_0001_0111_0001, // 'F'
    0b00_0001_0011_1101, // 'G'
    0b00_0001_0111_0110, // 'H'
    0b01_0010_0000_1001, // 'I'
    0b00_0000_0001_1110, // 'J'
    0b00_1100_0111_0000, // 'K'
    0b00_0000_0011_1000, // 'L'
    0b00_0100_1011_0110, // 'M'
    0b00_1000_1011_0110, // 'N'
    0b00_0000_0011_1111, // 'O'
    0b00_0001_0111_0011, // 'P'
    0b00_1000_0011_1111, // 'Q'
    0b00_1001_0111_0011, // 'R'
    0b00_0001_1000_1101, // 'S'
    0b01_0010_0000_0001, // 'T'
    0b00_0000_0011_1110, // 'U'
    0b10_0100_0011_0000, // 'V'
    0b10_1000_0011_0110, // 'W'
    0b10_1100_1000_0000, // 'X'
    0b01_0100_1000_0000, // 'Y'
    0b10_0100_0000_1001, // 'Z'
    0b00_0000_0011_1001, // '['
    0b00_1000_1000_0000, // '\'
    0b00_0000_0000_1111, // ']'
    0b10_1000_0000_0000, // '^'
    0b00_0000_0000_1000, // '_'
    0b00_0000_1000_0000, // '`'
    0b00_0001_0101_1111, // 'a'
    0b00_1000_0111_1000, // 'b'
    0b00_0001_0101_1000, // 'c'
    0b10_0001_0000_1110, // 'd'
    0b00_0000_0111_1001, // 'e'
    0b00_0000_0111_0001, // 'f'
    0b00_0001_1000_1111, // 'g'
    0b00_0001_0111_0100, // 'h'
    0b01_0000_0000_0000, // 'i'
    0b00_0000_0000_1110, // 'j'
    0b01_1110_0000_0000, // 'k'
    0b01_0010_0000_0000, // 'l'
    0b01_0001_0101_0100, // 'm'
    0b00_1000_0101_0000, // 'n'
    0b00_0001_0101_1100, // 'o'
    0b00_0100_0111_0001, // 'p'
    0b00_1001_0110_0011, // 'q'
    0b00_0000_0101_0000, // 'r'
    0b00_0001_1000_1101, // 's'
    0b00_0000_0111_1000, // 't'
    0b00_0000_0001_1100, // 'u'
    0b10_0000_0001_0000, // 'v'
    0b10_1000_0001_0100, // 'w'
    0b10_1100_1000_0000, // 'x'
    0b00_0011_0000_1110, // 'y'
    0b10_0100_0000_1001, // 'z'
    0b10_0000_1100_1001, // '{'
    0b01_0010_0000_0000, // '|'
    0b00_1101_0000_1001, // '}'
    0b00_0001_0101_0010, // '~'
    0b11_1111_1111_1111, // Unknown character (DEL or RUBOUT)
];

pub mod command {
    pub const OSCILLATOR_ON: u8 = 0x21;
    pub const BLINK: u8 = 0x80;
    pub const BLINK_DISPLAY_ON: u8 = 0x01;
    pub const BRIGHTNESS: u8 = 0xE0;
}
