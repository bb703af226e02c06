//! Foreign linear-memory primitives and scoped buffer guards.
//!
//! This module contains unsafe code for the process-heap memory.
#![allow(unsafe_code)]

use std::alloc::Layout;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Width of a real value in foreign memory.
pub const REAL_WIDTH: usize = 8;

/// Width of an integer value in foreign memory.
///
/// HiGHS can be built with a 64-bit HighsInt; these widths assume the
/// default 32-bit configuration.
pub const INT_WIDTH: usize = 4;

/// Allocator and accessor primitives of a host linear memory.
///
/// Addresses are opaque: an implementation may hand out raw pointers or
/// offsets into an owned region. Values cross the boundary in the
/// memory's native byte order. Callers must keep every `index` within
/// the element count the buffer was allocated for.
pub trait ForeignMemory {
    /// Allocate `bytes` bytes and return the buffer address.
    fn alloc(&self, bytes: usize) -> usize;

    /// Release the buffer at `addr`.
    fn free(&self, addr: usize);

    /// Write an 8-byte real at `addr + index * REAL_WIDTH`.
    fn write_real(&self, addr: usize, index: usize, value: f64);

    /// Read an 8-byte real from `addr + index * REAL_WIDTH`.
    fn read_real(&self, addr: usize, index: usize) -> f64;

    /// Write a 4-byte integer at `addr + index * INT_WIDTH`.
    fn write_int(&self, addr: usize, index: usize, value: i32);

    /// Read a 4-byte integer from `addr + index * INT_WIDTH`.
    fn read_int(&self, addr: usize, index: usize) -> i32;
}

/// A foreign buffer of 8-byte reals, released when dropped.
pub struct RealBuffer<'m, M: ForeignMemory> {
    memory: &'m M,
    addr: usize,
    len: usize,
}

impl<'m, M: ForeignMemory> RealBuffer<'m, M> {
    /// Allocate a buffer for `len` reals.
    pub fn alloc(memory: &'m M, len: usize) -> Self {
        let addr = memory.alloc(len * REAL_WIDTH);
        RealBuffer { memory, addr, len }
    }

    /// Allocate a buffer and copy `values` in, element by element.
    pub fn copy_in(memory: &'m M, values: &[f64]) -> Self {
        let buffer = Self::alloc(memory, values.len());
        for (index, value) in values.iter().enumerate() {
            memory.write_real(buffer.addr, index, *value);
        }
        buffer
    }

    /// Copy the buffer contents back out, element by element.
    pub fn copy_out(&self) -> Vec<f64> {
        (0..self.len)
            .map(|index| self.memory.read_real(self.addr, index))
            .collect()
    }

    /// Read one element.
    pub fn read(&self, index: usize) -> f64 {
        self.memory.read_real(self.addr, index)
    }

    /// Address of the buffer in the host memory.
    pub fn addr(&self) -> usize {
        self.addr
    }

    /// Element count the buffer was allocated for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<M: ForeignMemory> Drop for RealBuffer<'_, M> {
    fn drop(&mut self) {
        self.memory.free(self.addr);
    }
}

/// A foreign buffer of 4-byte integers, released when dropped.
pub struct IntBuffer<'m, M: ForeignMemory> {
    memory: &'m M,
    addr: usize,
    len: usize,
}

impl<'m, M: ForeignMemory> IntBuffer<'m, M> {
    /// Allocate a buffer for `len` integers.
    pub fn alloc(memory: &'m M, len: usize) -> Self {
        let addr = memory.alloc(len * INT_WIDTH);
        IntBuffer { memory, addr, len }
    }

    /// Allocate a buffer and copy `values` in, element by element.
    pub fn copy_in(memory: &'m M, values: &[i32]) -> Self {
        let buffer = Self::alloc(memory, values.len());
        for (index, value) in values.iter().enumerate() {
            memory.write_int(buffer.addr, index, *value);
        }
        buffer
    }

    /// Copy the buffer contents back out, element by element.
    pub fn copy_out(&self) -> Vec<i32> {
        (0..self.len)
            .map(|index| self.memory.read_int(self.addr, index))
            .collect()
    }

    /// Read one element.
    pub fn read(&self, index: usize) -> i32 {
        self.memory.read_int(self.addr, index)
    }

    /// Address of the buffer in the host memory.
    pub fn addr(&self) -> usize {
        self.addr
    }

    /// Element count the buffer was allocated for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<M: ForeignMemory> Drop for IntBuffer<'_, M> {
    fn drop(&mut self) {
        self.memory.free(self.addr);
    }
}

/// Vec-backed linear memory with bump allocation.
///
/// Addresses are byte offsets into one owned region, 8-byte aligned so
/// real reads stay aligned. Released regions are not reclaimed; the
/// arena is as transient as the call it serves. Allocation and release
/// counts are tracked so callers can assert buffer balance. Not
/// thread-safe.
#[derive(Debug, Default)]
pub struct ArenaMemory {
    inner: RefCell<Arena>,
}

#[derive(Debug, Default)]
struct Arena {
    bytes: Vec<u8>,
    live: BTreeMap<usize, usize>,
    allocs: usize,
    frees: usize,
}

impl ArenaMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocations handed out so far.
    pub fn alloc_count(&self) -> usize {
        self.inner.borrow().allocs
    }

    /// Number of buffers released so far.
    pub fn free_count(&self) -> usize {
        self.inner.borrow().frees
    }

    /// Number of buffers currently live.
    pub fn live_count(&self) -> usize {
        self.inner.borrow().live.len()
    }
}

impl ForeignMemory for ArenaMemory {
    fn alloc(&self, bytes: usize) -> usize {
        let mut arena = self.inner.borrow_mut();
        let addr = (arena.bytes.len() + REAL_WIDTH - 1) & !(REAL_WIDTH - 1);
        arena.bytes.resize(addr + bytes.max(1), 0);
        arena.live.insert(addr, bytes);
        arena.allocs += 1;
        addr
    }

    fn free(&self, addr: usize) {
        let mut arena = self.inner.borrow_mut();
        if arena.live.remove(&addr).is_some() {
            arena.frees += 1;
        }
    }

    fn write_real(&self, addr: usize, index: usize, value: f64) {
        let offset = addr + index * REAL_WIDTH;
        let mut arena = self.inner.borrow_mut();
        arena.bytes[offset..offset + REAL_WIDTH].copy_from_slice(&value.to_ne_bytes());
    }

    fn read_real(&self, addr: usize, index: usize) -> f64 {
        let offset = addr + index * REAL_WIDTH;
        let arena = self.inner.borrow();
        let mut raw = [0u8; REAL_WIDTH];
        raw.copy_from_slice(&arena.bytes[offset..offset + REAL_WIDTH]);
        f64::from_ne_bytes(raw)
    }

    fn write_int(&self, addr: usize, index: usize, value: i32) {
        let offset = addr + index * INT_WIDTH;
        let mut arena = self.inner.borrow_mut();
        arena.bytes[offset..offset + INT_WIDTH].copy_from_slice(&value.to_ne_bytes());
    }

    fn read_int(&self, addr: usize, index: usize) -> i32 {
        let offset = addr + index * INT_WIDTH;
        let arena = self.inner.borrow();
        let mut raw = [0u8; INT_WIDTH];
        raw.copy_from_slice(&arena.bytes[offset..offset + INT_WIDTH]);
        i32::from_ne_bytes(raw)
    }
}

/// Process-heap memory whose addresses are real pointers.
///
/// Pairs with the native HiGHS entry point, which passes the addresses
/// straight through to the C call. Buffers are zeroed on allocation:
/// output buffers may be read back before the solver writes them.
#[derive(Debug, Default)]
pub struct ProcessHeap {
    state: Mutex<HeapState>,
}

#[derive(Debug, Default)]
struct HeapState {
    layouts: BTreeMap<usize, Layout>,
    allocs: usize,
    frees: usize,
}

impl ProcessHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocations handed out so far.
    pub fn alloc_count(&self) -> usize {
        self.state().allocs
    }

    /// Number of buffers released so far.
    pub fn free_count(&self) -> usize {
        self.state().frees
    }

    /// Number of buffers currently live.
    pub fn live_count(&self) -> usize {
        self.state().layouts.len()
    }

    fn state(&self) -> MutexGuard<'_, HeapState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ForeignMemory for ProcessHeap {
    fn alloc(&self, bytes: usize) -> usize {
        let Ok(layout) = Layout::from_size_align(bytes.max(1), REAL_WIDTH) else {
            panic!("foreign buffer size overflow: {bytes} bytes");
        };
        // SAFETY: layout has nonzero size.
        let ptr = unsafe { std::alloc::alloc_zeroed(layout) };
        if ptr.is_null() {
            std::alloc::handle_alloc_error(layout);
        }
        let mut state = self.state();
        state.layouts.insert(ptr as usize, layout);
        state.allocs += 1;
        ptr as usize
    }

    fn free(&self, addr: usize) {
        let layout = {
            let mut state = self.state();
            let layout = state.layouts.remove(&addr);
            if layout.is_some() {
                state.frees += 1;
            }
            layout
        };
        if let Some(layout) = layout {
            // SAFETY: addr came from `alloc` with this layout and has not
            // been released yet.
            unsafe { std::alloc::dealloc(addr as *mut u8, layout) }
        }
    }

    fn write_real(&self, addr: usize, index: usize, value: f64) {
        // SAFETY: addr is a live 8-aligned allocation and index is within
        // the element count it was sized for.
        unsafe { (addr as *mut f64).add(index).write(value) }
    }

    fn read_real(&self, addr: usize, index: usize) -> f64 {
        // SAFETY: as for write_real; allocations are zeroed, so the read
        // is defined even before the first write.
        unsafe { (addr as *const f64).add(index).read() }
    }

    fn write_int(&self, addr: usize, index: usize, value: i32) {
        // SAFETY: as for write_real.
        unsafe { (addr as *mut i32).add(index).write(value) }
    }

    fn read_int(&self, addr: usize, index: usize) -> i32 {
        // SAFETY: as for read_real.
        unsafe { (addr as *const i32).add(index).read() }
    }
}
