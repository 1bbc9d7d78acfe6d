use crate::shared::frame::Frame;

/// Fixed-capacity accumulation window over the video's frame storage.
///
/// Slots are allocated on first use, up to `capacity`, and overwritten in
/// place after a reset. `frames()` exposes only the occupied prefix, so
/// frames left over from a previous batch are unreachable: none is encoded
/// twice and the unfilled tail of a partial batch is never touched.
pub struct FrameBatch {
    slots: Vec<Frame>,
    cursor: usize,
    capacity: usize,
}

impl FrameBatch {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "batch capacity must be positive");
        Self {
            slots: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Moves `frame` into the next free slot.
    pub fn push(&mut self, frame: Frame) {
        debug_assert!(!self.is_full(), "push into a full batch");
        if self.cursor < self.slots.len() {
            self.slots[self.cursor] = frame;
        } else {
            self.slots.push(frame);
        }
        self.cursor += 1;
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// The unique flush trigger: every slot occupied.
    pub fn is_full(&self) -> bool {
        self.cursor == self.capacity
    }

    /// Occupied slots, in arrival order.
    pub fn frames(&self) -> &[Frame] {
        &self.slots[..self.cursor]
    }

    pub fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.slots[..self.cursor]
    }

    /// Marks every slot free; the backing storage is kept for reuse.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
