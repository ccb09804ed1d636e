//! Primitive token readers for the area file grammar.
//!
//! The original loaders in `db.c` work on a `FILE *` with `getc`/`ungetc`;
//! [`AreaReader`] reproduces that model: a forward-only byte cursor with a
//! single pushback slot. Every reader skips leading whitespace, then leaves
//! the cursor just past the consumed token, pushing back at most one byte
//! when the token end is signaled by a non-terminator.

/// Buffer bound inherited from `MAX_STRING_LENGTH`; strings and words hold
/// at most `MAX_STRING_LENGTH - 1` bytes, excess input stays in the stream.
pub const MAX_STRING_LENGTH: usize = 4096;

/// Spell names inside single quotes are capped separately.
const MAX_SPELL_NAME: usize = 255;

/// `isspace` over bytes, matching the C locale set.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Convert one flag letter to its bit value: `A`..`Z` are bits 0..25,
/// `a`..`z` are bits 26..51. Anything else contributes 0.
pub fn flag_convert(letter: u8) -> i64 {
    match letter {
        b'A'..=b'Z' => 1i64 << (letter - b'A'),
        b'a'..=b'z' => 1i64 << (26 + letter - b'a'),
        _ => 0,
    }
}

pub struct AreaReader<'a> {
    data: &'a [u8],
    pos: usize,
    pushback: Option<u8>,
}

impl<'a> AreaReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            pushback: None,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        if let Some(b) = self.pushback.take() {
            return Some(b);
        }
        let b = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }

    /// Push one byte back; the next read returns it first. Like `ungetc`,
    /// the byte need not be the one just read, and only one slot exists.
    pub fn unread(&mut self, b: u8) {
        self.pushback = Some(b);
    }

    fn skip_whitespace(&mut self) -> Option<u8> {
        loop {
            let b = self.next_byte()?;
            if !is_space(b) {
                return Some(b);
            }
        }
    }

    /// Next non-whitespace byte, or `None` at end of input.
    pub fn read_letter(&mut self) -> Option<u8> {
        self.skip_whitespace()
    }

    /// Signed decimal integer. No digits means 0, and the offending byte is
    /// consumed. A terminating space is consumed; any other terminator is
    /// pushed back.
    pub fn read_number(&mut self) -> i64 {
        let Some(mut c) = self.skip_whitespace() else {
            return 0;
        };

        let mut negative = false;
        if c == b'-' {
            negative = true;
            match self.next_byte() {
                Some(b) => c = b,
                None => return 0,
            }
        }

        if !c.is_ascii_digit() {
            return 0;
        }

        // wraps on overlong digit runs, like the C's int arithmetic
        let mut number: i64 = 0;
        loop {
            number = number.wrapping_mul(10).wrapping_add(i64::from(c - b'0'));
            match self.next_byte() {
                Some(b) if b.is_ascii_digit() => c = b,
                Some(b) => {
                    if b != b' ' {
                        self.unread(b);
                    }
                    break;
                }
                None => break,
            }
        }

        if negative { number.wrapping_neg() } else { number }
    }

    /// Bitflag integer: either a run of flag letters summed through
    /// [`flag_convert`], or a decimal number which may chain additively
    /// into another flag via `|`. Only the decimal form honors a leading
    /// `-`.
    pub fn read_flag(&mut self) -> i64 {
        let Some(mut c) = self.skip_whitespace() else {
            return 0;
        };

        let mut negative = false;
        if c == b'-' {
            negative = true;
            match self.next_byte() {
                Some(b) => c = b,
                None => return 0,
            }
        }

        if !c.is_ascii_digit() {
            let mut number: i64 = 0;
            let mut cur = Some(c);
            while let Some(b) = cur {
                if !b.is_ascii_alphabetic() {
                    break;
                }
                number = number.wrapping_add(flag_convert(b));
                cur = self.next_byte();
            }
            if let Some(b) = cur {
                self.unread(b);
            }
            return number;
        }

        // wraps on overlong digit runs, like the C's int arithmetic
        let mut number: i64 = 0;
        let terminator = loop {
            number = number.wrapping_mul(10).wrapping_add(i64::from(c - b'0'));
            match self.next_byte() {
                Some(b) if b.is_ascii_digit() => c = b,
                other => break other,
            }
        };

        match terminator {
            Some(b'|') => number = number.wrapping_add(self.read_flag()),
            Some(b) if b != b' ' => self.unread(b),
            _ => {}
        }

        if negative { number.wrapping_neg() } else { number }
    }

    /// Tilde-terminated string. A `~` right away yields the empty string.
    /// At the length bound collection stops silently; the byte that would
    /// have overflowed is consumed and the rest stays in the stream.
    pub fn read_string(&mut self) -> String {
        let Some(first) = self.skip_whitespace() else {
            return String::new();
        };
        if first == b'~' {
            return String::new();
        }

        let mut buf = Vec::new();
        let mut cur = first;
        loop {
            buf.push(cur);
            match self.next_byte() {
                None | Some(b'~') => break,
                Some(b) => {
                    if buf.len() >= MAX_STRING_LENGTH - 1 {
                        break;
                    }
                    cur = b;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Whitespace-terminated word, or `None` if the input is exhausted
    /// before any byte is read. The terminating whitespace is consumed.
    pub fn read_word(&mut self) -> Option<String> {
        let first = self.skip_whitespace()?;

        let mut buf = Vec::new();
        let mut cur = first;
        loop {
            buf.push(cur);
            match self.next_byte() {
                None => break,
                Some(b) if is_space(b) => break,
                Some(b) => {
                    if buf.len() >= MAX_STRING_LENGTH - 1 {
                        break;
                    }
                    cur = b;
                }
            }
        }
        Some(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Raw bytes up to a closing single quote, for materia spell names.
    /// The leading quote must already be consumed.
    pub fn read_quoted_tail(&mut self) -> String {
        let mut buf = Vec::new();
        loop {
            match self.next_byte() {
                None | Some(b'\'') => break,
                Some(b) => {
                    if buf.len() >= MAX_SPELL_NAME {
                        break;
                    }
                    buf.push(b);
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Discard the rest of the current line.
    pub fn read_to_eol(&mut self) {
        loop {
            match self.next_byte() {
                None | Some(b'\n') => break,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_convert_upper() {
        for c in b'A'..=b'Z' {
            assert_eq!(flag_convert(c), 1i64 << (c - b'A'));
        }
    }

    #[test]
    fn flag_convert_lower() {
        for c in b'a'..=b'z' {
            assert_eq!(flag_convert(c), 1i64 << (26 + c - b'a'));
        }
    }

    #[test]
    fn flag_convert_other() {
        assert_eq!(flag_convert(b'0'), 0);
        assert_eq!(flag_convert(b'~'), 0);
    }

    #[test]
    fn letter_skips_whitespace() {
        let mut r = AreaReader::new(b"  \t\n  #OBJECTS");
        assert_eq!(r.read_letter(), Some(b'#'));
        assert_eq!(r.read_letter(), Some(b'O'));
    }

    #[test]
    fn letter_at_eof() {
        let mut r = AreaReader::new(b"   ");
        assert_eq!(r.read_letter(), None);
    }

    #[test]
    fn number_basic() {
        let mut r = AreaReader::new(b" 42 -7 0");
        assert_eq!(r.read_number(), 42);
        assert_eq!(r.read_number(), -7);
        assert_eq!(r.read_number(), 0);
    }

    #[test]
    fn number_without_digits_is_zero() {
        let mut r = AreaReader::new(b"abc 5");
        assert_eq!(r.read_number(), 0);
        // the 'a' was consumed; 'b' is next
        assert_eq!(r.read_letter(), Some(b'b'));
    }

    #[test]
    fn number_pushes_back_non_space_terminator() {
        let mut r = AreaReader::new(b"12~");
        assert_eq!(r.read_number(), 12);
        assert_eq!(r.read_letter(), Some(b'~'));
    }

    #[test]
    fn number_overlong_digit_run_wraps() {
        // twenty nines: 99999999999999999999 mod 2^64
        let mut r = AreaReader::new(b"99999999999999999999 5");
        assert_eq!(r.read_number(), 7766279631452241919);
        assert_eq!(r.read_number(), 5);
    }

    #[test]
    fn flag_overlong_digit_run_wraps() {
        let mut r = AreaReader::new(b"99999999999999999999 ");
        assert_eq!(r.read_flag(), 7766279631452241919);
    }

    #[test]
    fn flag_repeated_letters_wrap() {
        // 8192 'z' letters sum to 2^13 * 2^51 = 2^64, wrapping to zero
        let mut data = vec![b'z'; 8192];
        data.push(b' ');
        let mut r = AreaReader::new(&data);
        assert_eq!(r.read_flag(), 0);
    }

    #[test]
    fn flag_letter_run() {
        let mut r = AreaReader::new(b"AB ");
        assert_eq!(r.read_flag(), 3);
    }

    #[test]
    fn flag_mixed_case_run() {
        // 'a' is bit 26
        let mut r = AreaReader::new(b"Aa\n");
        assert_eq!(r.read_flag(), 1 + (1i64 << 26));
    }

    #[test]
    fn flag_decimal() {
        let mut r = AreaReader::new(b"1024 ");
        assert_eq!(r.read_flag(), 1024);
    }

    #[test]
    fn flag_negative_decimal() {
        let mut r = AreaReader::new(b"-5 ");
        assert_eq!(r.read_flag(), -5);
    }

    #[test]
    fn flag_mixed_pipe_grammar() {
        // decimal plus letter continuation
        let mut r = AreaReader::new(b"4|AB ");
        assert_eq!(r.read_flag(), 4 + 1 + 2);
    }

    #[test]
    fn flag_pipe_chain() {
        let mut r = AreaReader::new(b"1|2|4 ");
        assert_eq!(r.read_flag(), 7);
    }

    #[test]
    fn flag_round_trip_letters() {
        // every sum of distinct letter bits decodes back to itself
        let bits: i64 = flag_convert(b'A') + flag_convert(b'M') + flag_convert(b'z');
        let mut encoded = Vec::new();
        for i in 0u8..52 {
            if bits & (1i64 << i) != 0 {
                encoded.push(if i < 26 { b'A' + i } else { b'a' + (i - 26) });
            }
        }
        encoded.push(b' ');
        let mut r = AreaReader::new(&encoded);
        assert_eq!(r.read_flag(), bits);
    }

    #[test]
    fn string_basic() {
        let mut r = AreaReader::new(b"a sharp sword~next");
        assert_eq!(r.read_string(), "a sharp sword");
        assert_eq!(r.read_letter(), Some(b'n'));
    }

    #[test]
    fn string_empty() {
        let mut r = AreaReader::new(b"  ~rest");
        assert_eq!(r.read_string(), "");
        assert_eq!(r.read_letter(), Some(b'r'));
    }

    #[test]
    fn string_unterminated_runs_to_eof() {
        let mut r = AreaReader::new(b"no tilde here");
        assert_eq!(r.read_string(), "no tilde here");
        assert_eq!(r.read_letter(), None);
    }

    #[test]
    fn string_truncates_at_bound() {
        let mut data = vec![b'x'; MAX_STRING_LENGTH + 10];
        data.push(b'~');
        let mut r = AreaReader::new(&data);
        let s = r.read_string();
        assert_eq!(s.len(), MAX_STRING_LENGTH - 1);
        // overflow byte was consumed, remainder stays in the stream
        assert_eq!(r.read_letter(), Some(b'x'));
    }

    #[test]
    fn word_basic() {
        let mut r = AreaReader::new(b"  OBJECTS\n#1");
        assert_eq!(r.read_word().as_deref(), Some("OBJECTS"));
        assert_eq!(r.read_letter(), Some(b'#'));
    }

    #[test]
    fn word_at_eof() {
        let mut r = AreaReader::new(b"   \n ");
        assert_eq!(r.read_word(), None);
    }

    #[test]
    fn unread_returns_byte_first() {
        let mut r = AreaReader::new(b"XY");
        assert_eq!(r.read_letter(), Some(b'X'));
        r.unread(b'#');
        assert_eq!(r.read_letter(), Some(b'#'));
        assert_eq!(r.read_letter(), Some(b'Y'));
    }

    #[test]
    fn quoted_tail() {
        let mut r = AreaReader::new(b"magic missile' 3");
        assert_eq!(r.read_quoted_tail(), "magic missile");
        assert_eq!(r.read_number(), 3);
    }

    #[test]
    fn read_to_eol_discards_line() {
        let mut r = AreaReader::new(b"garbage line\nA 5 2");
        r.read_to_eol();
        assert_eq!(r.read_letter(), Some(b'A'));
    }
}
