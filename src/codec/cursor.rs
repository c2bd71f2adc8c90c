use bytes::Buf;

/// Read position over borrowed input.
///
/// Every read is bounds-checked; a read past the end returns `None` and leaves
/// the cursor where it was.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    rest: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { rest: input }
    }

    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// The unread input.
    pub fn as_slice(&self) -> &'a [u8] {
        self.rest
    }

    pub fn read_u16_be(&mut self) -> Option<u16> {
        if self.rest.remaining() < 2 {
            return None;
        }
        Some(self.rest.get_u16())
    }

    /// Consume `n` bytes and return them.
    pub fn advance(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.rest.len() {
            return None;
        }
        let (head, tail) = self.rest.split_at(n);
        self.rest = tail;
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian() {
        let mut cursor = ByteCursor::new(&[0x12, 0x34, 0xff]);
        assert_eq!(cursor.read_u16_be(), Some(0x1234));
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn short_reads_do_not_move() {
        let mut cursor = ByteCursor::new(&[0x01]);
        assert_eq!(cursor.read_u16_be(), None);
        assert_eq!(cursor.advance(2), None);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn advance_returns_consumed_slice() {
        let mut cursor = ByteCursor::new(b"keyvalue");
        assert_eq!(cursor.advance(3), Some(&b"key"[..]));
        assert_eq!(cursor.as_slice(), b"value");
        assert_eq!(cursor.advance(0), Some(&b""[..]));
    }
}
