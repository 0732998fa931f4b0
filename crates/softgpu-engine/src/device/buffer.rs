/// Raw byte storage behind a `BufferId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Allocates `size` zeroed bytes.
    pub(crate) fn new(size: usize) -> Self {
        Self { data: vec![0; size] }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `len` bytes starting at `offset`, or `None` if the range is out of bounds.
    #[inline]
    pub(crate) fn bytes(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.data.get(offset..end)
    }

    /// Copies `src` into the buffer at `offset`. Returns `false` (and writes
    /// nothing) if the range does not fit.
    pub(crate) fn write(&mut self, offset: usize, src: &[u8]) -> bool {
        let Some(end) = offset.checked_add(src.len()) else { return false };
        match self.data.get_mut(offset..end) {
            Some(dst) => {
                dst.copy_from_slice(src);
                true
            }
            None => false,
        }
    }

    /// Copies `dst.len()` bytes starting at `offset` into `dst`. Returns
    /// `false` (and leaves `dst` untouched) if the range does not fit.
    pub(crate) fn read(&self, offset: usize, dst: &mut [u8]) -> bool {
        match self.bytes(offset, dst.len()) {
            Some(src) => {
                dst.copy_from_slice(src);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed() {
        let b = Buffer::new(8);
        assert_eq!(b.len(), 8);
        assert_eq!(b.bytes(0, 8), Some(&[0u8; 8][..]));
    }

    #[test]
    fn write_then_read_at_offset() {
        let mut b = Buffer::new(8);
        assert!(b.write(3, &[1, 2, 3]));
        let mut out = [0u8; 4];
        assert!(b.read(2, &mut out));
        assert_eq!(out, [0, 1, 2, 3]);
    }

    #[test]
    fn out_of_range_transfers_are_rejected() {
        let mut b = Buffer::new(4);
        assert!(!b.write(2, &[9, 9, 9]));
        assert_eq!(b.bytes(0, 4), Some(&[0u8; 4][..]));

        let mut out = [7u8; 2];
        assert!(!b.read(3, &mut out));
        assert_eq!(out, [7, 7]);
        assert!(b.bytes(usize::MAX, 2).is_none());
    }

    #[test]
    fn zero_length_transfer_at_end_is_allowed() {
        let mut b = Buffer::new(4);
        assert!(b.write(4, &[]));
        assert!(b.read(4, &mut []));
    }
}
