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

    storage::object_table.rs

    ObjectTable<T>: allocates individual objects in fixed-size blocks of 128.
    Destroyed objects are threaded onto a free list keyed by ObjectId rather
    than by reinterpreting the freed object's own storage, since Rust can't
    alias a live `T` as a raw link the way the original arena does; the result
    is the same LIFO free-list reuse behavior with no unsafe code.

*/

#![allow(dead_code)]

use crate::error::StorageError;
use crate::id::{self, BlockIdx, ObjectId, IDX_BITS_DEFAULT};

enum Slot<T> {
    Free(ObjectId),
    Occupied(T),
}

struct Block<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Block<T> {
    fn new(count: usize) -> Self {
        let mut slots = Vec::with_capacity(count);
        slots.resize_with(count, || Slot::Free(ObjectId::NULL));
        Block { slots }
    }
}

/// Block-allocated table of `T`, addressed by [`ObjectId`]. Blocks never move
/// once allocated (`Vec<Block<T>>` push only grows the index, the `Block`
/// itself lives in a stable heap allocation), so a held `ObjectId` remains
/// valid across further `make()` calls on the same table.
pub struct ObjectTable<T> {
    blocks: Vec<Block<T>>,
    free: ObjectId,
    size: usize,
    idx_bits: u32,
}

impl<T: Default> ObjectTable<T> {
    pub fn new() -> Self {
        Self { blocks: Vec::new(), free: ObjectId::NULL, size: 0, idx_bits: IDX_BITS_DEFAULT }
    }

    #[inline]
    fn block_object_count(&self) -> usize {
        1usize << self.idx_bits
    }

    fn make_block(&mut self) -> Result<(), StorageError> {
        let block_idx: BlockIdx = self.blocks.len() as u32;
        if block_idx >= id::block_count_max(self.idx_bits) {
            return Err(StorageError::Critical {
                id: 224,
                msg: "max object table block count exceeded",
            });
        }
        let count = self.block_object_count();
        self.blocks.push(Block::new(count));
        log::trace!("ObjectTable: allocated block {block_idx} ({count} objects)");

        // ObjectId zero is reserved for the null sentinel, so block 0 starts
        // its free list at index 1 instead of 0.
        let last = if block_idx > 0 { 0 } else { 1 };
        for i in (last..count as u32).rev() {
            let obj_id = ObjectId::combine(block_idx, i, self.idx_bits);
            self.free_push(obj_id);
        }
        Ok(())
    }

    fn free_push(&mut self, obj_id: ObjectId) {
        let (blk, idx) = obj_id.split(self.idx_bits);
        self.blocks[blk as usize].slots[idx as usize] = Slot::Free(self.free);
        self.free = obj_id;
    }

    /// Allocates a fresh, default-initialized `T` and returns its id. Callers
    /// mutate the object afterwards via [`ObjectTable::get_mut`].
    pub fn make(&mut self) -> Result<ObjectId, StorageError> {
        if self.free.is_null() {
            self.make_block()?;
        }
        let obj_id = self.free;
        let (blk, idx) = obj_id.split(self.idx_bits);
        let next = match self.blocks[blk as usize].slots[idx as usize] {
            Slot::Free(next) => next,
            Slot::Occupied(_) => {
                return Err(StorageError::Critical { id: 226, msg: "free list is corrupt" })
            }
        };
        self.free = next;
        self.blocks[blk as usize].slots[idx as usize] = Slot::Occupied(T::default());
        self.size += 1;
        Ok(obj_id)
    }

    pub fn get(&self, obj_id: ObjectId) -> Option<&T> {
        if obj_id.is_null() {
            return None;
        }
        let (blk, idx) = obj_id.split(self.idx_bits);
        match self.blocks.get(blk as usize)?.slots.get(idx as usize)? {
            Slot::Occupied(t) => Some(t),
            Slot::Free(_) => None,
        }
    }

    pub fn get_mut(&mut self, obj_id: ObjectId) -> Option<&mut T> {
        if obj_id.is_null() {
            return None;
        }
        let (blk, idx) = obj_id.split(self.idx_bits);
        match self.blocks.get_mut(blk as usize)?.slots.get_mut(idx as usize)? {
            Slot::Occupied(t) => Some(t),
            Slot::Free(_) => None,
        }
    }

    pub fn destroy(&mut self, obj_id: ObjectId) {
        if obj_id.is_null() || self.get(obj_id).is_none() {
            return;
        }
        self.size -= 1;
        self.free_push(obj_id);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
        self.free = ObjectId::NULL;
        self.size = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &T)> {
        let idx_bits = self.idx_bits;
        self.blocks.iter().enumerate().flat_map(move |(blk, block)| {
            block.slots.iter().enumerate().filter_map(move |(i, slot)| match slot {
                Slot::Occupied(t) => {
                    Some((ObjectId::combine(blk as BlockIdx, i as u32, idx_bits), t))
                }
                Slot::Free(_) => None,
            })
        })
    }
}

impl<T: Default> Default for ObjectTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip() {
        let mut table: ObjectTable<i32> = ObjectTable::new();
        let id = table.make().unwrap();
        *table.get_mut(id).unwrap() = 42;
        assert_eq!(table.get(id), Some(&42));
    }

    #[test]
    fn destroy_recycles_id() {
        let mut table: ObjectTable<i32> = ObjectTable::new();
        let id1 = table.make().unwrap();
        table.destroy(id1);
        let id2 = table.make().unwrap();
        assert_eq!(id1, id2, "LIFO free list should hand back the just-freed id");
        assert_eq!(table.size(), 1);
    }

    #[test]
    fn spans_multiple_blocks() {
        let mut table: ObjectTable<u32> = ObjectTable::new();
        let mut ids = Vec::new();
        for i in 0..500u32 {
            let id = table.make().unwrap();
            *table.get_mut(id).unwrap() = i;
            ids.push(id);
        }
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(table.get(*id), Some(&(i as u32)));
        }
        assert_eq!(table.size(), 500);
    }

    #[test]
    fn destroyed_slot_reads_as_absent() {
        let mut table: ObjectTable<u32> = ObjectTable::new();
        let id = table.make().unwrap();
        table.destroy(id);
        assert_eq!(table.get(id), None);
    }
}
