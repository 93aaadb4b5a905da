//! Sequential reader over the items of one RLP list.
//!
//! `rlp::Rlp::iter` stops silently on a malformed item, which would let a
//! truncated entry pass as "end of list". The cursor validates every item
//! header instead and always advances by the item's full encoded length, so
//! a walk over finite input terminates.

use rlp::{DecoderError, Rlp};

pub(crate) struct ListCursor<'a> {
    payload: &'a [u8],
    offset: usize,
}

impl<'a> ListCursor<'a> {
    /// Open `list` for reading.
    pub(crate) fn open(list: &Rlp<'a>) -> Result<Self, DecoderError> {
        if !list.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        Ok(Self {
            payload: list.data()?,
            offset: 0,
        })
    }

    /// Next item, or `None` at the end of the list.
    pub(crate) fn next_item(&mut self) -> Result<Option<Rlp<'a>>, DecoderError> {
        let rest = &self.payload[self.offset..];
        if rest.is_empty() {
            return Ok(None);
        }

        let len = Rlp::new(rest).payload_info()?.total();
        if len == 0 || len > rest.len() {
            return Err(DecoderError::RlpIsTooShort);
        }

        self.offset += len;
        Ok(Some(Rlp::new(&rest[..len])))
    }

    /// Count the items left without consuming them.
    pub(crate) fn remaining_items(&self) -> Result<usize, DecoderError> {
        let mut scan = ListCursor {
            payload: self.payload,
            offset: self.offset,
        };
        let mut count = 0;
        while scan.next_item()?.is_some() {
            count += 1;
        }
        Ok(count)
    }

    /// Step over everything left in the list without decoding it.
    ///
    /// Item headers are still checked, nested contents are not. Returns the
    /// number of bytes skipped.
    pub(crate) fn skip_rest(&mut self) -> Result<usize, DecoderError> {
        let start = self.offset;
        while self.next_item()?.is_some() {}
        Ok(self.offset - start)
    }
}
