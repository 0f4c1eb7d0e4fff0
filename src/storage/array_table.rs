/*
    sta_core

    Copyright 2024-2026 The sta_core Authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the "Software"),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    ---------------------------------------------------------------------------

    storage::array_table.rs

    ArrayTable<T>: allocates variable-length arrays of T in blocks, addressed
    by ArrayId, with a free list bucketed by array length so arrays of the
    same size are reused LIFO. Used for the parallel per-vertex/per-edge
    arrays (arrivals, slews, arc delays) that are sized against the dcalc
    analysis-point count.

*/

#![allow(dead_code)]

use crate::error::StorageError;
use crate::id::{self, ArrayId, BlockIdx, IDX_BITS_DEFAULT};

struct Block<T> {
    data: Vec<T>,
}

impl<T: Default + Clone> Block<T> {
    fn new(capacity: usize) -> Self {
        Block { data: vec![T::default(); capacity] }
    }
}

/// Block-allocated table of variable-length `T` arrays, addressed by
/// [`ArrayId`]. `idx_bits` controls the block size (`1 << idx_bits` elements
/// per block); denser payloads (e.g. per-vertex slew storage) use a larger
/// `idx_bits` than the default short-array configuration.
pub struct ArrayTable<T> {
    blocks: Vec<Block<T>>,
    free_block_idx: Option<BlockIdx>,
    free_idx: u32,
    /// `free_lists[count]` is a LIFO stack of ids of freed arrays of exactly
    /// that length.
    free_lists: Vec<Vec<ArrayId>>,
    size: usize,
    idx_bits: u32,
}

impl<T: Default + Clone> ArrayTable<T> {
    pub fn new() -> Self {
        Self::with_idx_bits(IDX_BITS_DEFAULT)
    }

    pub fn with_idx_bits(idx_bits: u32) -> Self {
        Self {
            blocks: Vec::new(),
            free_block_idx: None,
            free_idx: 0,
            free_lists: Vec::new(),
            size: 0,
            idx_bits,
        }
    }

    #[inline]
    fn block_size(&self) -> u32 {
        1u32 << self.idx_bits
    }

    fn make_block(&mut self, size: u32) -> Result<BlockIdx, StorageError> {
        let block_idx = self.blocks.len() as BlockIdx;
        if block_idx >= id::block_count_max(self.idx_bits) {
            return Err(StorageError::Critical {
                id: 223,
                msg: "max array table block count exceeded",
            });
        }
        self.blocks.push(Block::new(size as usize));
        log::trace!("ArrayTable: allocated block {block_idx} ({size} elements)");
        self.free_block_idx = Some(block_idx);
        // ArrayId zero is reserved for the null sentinel.
        self.free_idx = if block_idx > 0 { 0 } else { 1 };
        Ok(block_idx)
    }

    /// Allocates an array of `count` elements, reusing a freed array of the
    /// same length if one exists (LIFO), otherwise bump-allocating.
    pub fn make(&mut self, count: u32) -> Result<ArrayId, StorageError> {
        if let Some(bucket) = self.free_lists.get_mut(count as usize) {
            if let Some(id) = bucket.pop() {
                self.size += count as usize;
                return Ok(id);
            }
        }

        let block_size = self.block_size();
        let need_new_block = match self.free_block_idx {
            None => true,
            Some(blk) => self.free_idx + count > self.blocks[blk as usize].data.len() as u32,
        };
        if need_new_block {
            let size = if self.blocks.is_empty() && count > block_size - 1 {
                count + 1
            } else if count > block_size {
                count
            } else {
                block_size
            };
            self.make_block(size)?;
        }

        let block_idx = self.free_block_idx.expect("just ensured a block exists");
        let array_id = ArrayId::combine(block_idx, self.free_idx, self.idx_bits);
        self.free_idx += count;
        self.size += count as usize;
        Ok(array_id)
    }

    /// Prepends `id` (an array of `count` elements) to the free list for that
    /// length.
    pub fn destroy(&mut self, id: ArrayId, count: u32) {
        let count = count as usize;
        if count >= self.free_lists.len() {
            self.free_lists.resize_with(count + 1, Vec::new);
        }
        self.free_lists[count].push(id);
        self.size = self.size.saturating_sub(count);
    }

    /// Grows the table so that `id` resolves to a valid slice start, without
    /// going through the free-list/bump-allocate path. Used to pre-size dense
    /// per-vertex arrays (e.g. slews) before concurrent readers/writers run.
    pub fn ensure_id(&mut self, id: ArrayId) {
        let (blk_idx, _) = id.split(self.idx_bits);
        let block_size = self.block_size();
        while (self.blocks.len() as u32) <= blk_idx {
            self.blocks.push(Block::new(block_size as usize));
        }
    }

    pub fn get(&self, id: ArrayId, count: u32) -> Option<&[T]> {
        if id.is_null() {
            return None;
        }
        let (blk, idx) = id.split(self.idx_bits);
        let block = self.blocks.get(blk as usize)?;
        block.data.get(idx as usize..(idx as usize + count as usize))
    }

    pub fn get_mut(&mut self, id: ArrayId, count: u32) -> Option<&mut [T]> {
        if id.is_null() {
            return None;
        }
        let (blk, idx) = id.split(self.idx_bits);
        let block = self.blocks.get_mut(blk as usize)?;
        block.data.get_mut(idx as usize..(idx as usize + count as usize))
    }

    /// Single-element accessor for array tables indexed densely (e.g.
    /// `vertex_id * rf_count + rf_index`) rather than by a caller-held
    /// `ArrayId`/count pair.
    pub fn element(&self, id: ArrayId) -> Option<&T> {
        if id.is_null() {
            return None;
        }
        let (blk, idx) = id.split(self.idx_bits);
        self.blocks.get(blk as usize)?.data.get(idx as usize)
    }

    pub fn element_mut(&mut self, id: ArrayId) -> Option<&mut T> {
        if id.is_null() {
            return None;
        }
        let (blk, idx) = id.split(self.idx_bits);
        self.blocks.get_mut(blk as usize)?.data.get_mut(idx as usize)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
        self.free_block_idx = None;
        self.free_idx = 0;
        self.free_lists.clear();
        self.size = 0;
    }
}

impl<T: Default + Clone> Default for ArrayTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_and_fill() {
        let mut table: ArrayTable<i32> = ArrayTable::new();
        let id = table.make(4).unwrap();
        table.get_mut(id, 4).unwrap().copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(table.get(id, 4).unwrap(), &[1, 2, 3, 4]);
    }

    #[test]
    fn reuse_is_lifo_and_size_specific() {
        let mut table: ArrayTable<i32> = ArrayTable::new();
        let a = table.make(3).unwrap();
        let b = table.make(3).unwrap();
        let c = table.make(3).unwrap();
        table.destroy(a, 3);
        table.destroy(b, 3);
        table.destroy(c, 3);

        // An interleaved make of a different length must not observe these ids.
        let other = table.make(5).unwrap();
        assert_ne!(other, a);
        assert_ne!(other, b);
        assert_ne!(other, c);

        let r1 = table.make(3).unwrap();
        let r2 = table.make(3).unwrap();
        let r3 = table.make(3).unwrap();
        assert_eq!(r1, c);
        assert_eq!(r2, b);
        assert_eq!(r3, a);
    }

    #[test]
    fn ensure_id_grows_without_bump_alloc() {
        let mut table: ArrayTable<u32> = ArrayTable::with_idx_bits(7);
        let far_id = ArrayId::combine(5, 10, 7);
        table.ensure_id(far_id);
        assert!(table.element(far_id).is_some());
    }

    #[test]
    fn spans_multiple_blocks() {
        let mut table: ArrayTable<u8> = ArrayTable::with_idx_bits(7);
        let mut ids = Vec::new();
        for _ in 0..40 {
            ids.push(table.make(5).unwrap());
        }
        for (i, id) in ids.iter().enumerate() {
            table.get_mut(*id, 5).unwrap()[0] = i as u8;
        }
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(table.get(*id, 5).unwrap()[0], i as u8);
        }
    }
}
