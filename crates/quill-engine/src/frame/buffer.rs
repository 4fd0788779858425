use bytemuck::Pod;

/// Cursor-based growable buffer of instance records.
///
/// `reset()` only rewinds the cursor: the storage is kept so steady-state
/// frames allocate nothing. When the cursor reaches the end of the storage it
/// grows to `max(needed, capacity * 2)`; previously written records of the
/// frame are carried over.
#[derive(Debug)]
pub struct InstanceBuffer<T> {
    label: &'static str,
    data: Vec<T>,
    len: usize,
}

impl<T: Pod> InstanceBuffer<T> {
    pub fn with_capacity(label: &'static str, capacity: usize) -> Self {
        let mut data = Vec::new();
        data.resize(capacity, T::zeroed());
        Self { label, data, len: 0 }
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Records written this frame.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Records the buffer can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn reset(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        if self.len == self.data.len() {
            self.grow(self.len + 1);
        }
        self.data[self.len] = item;
        self.len += 1;
    }

    pub fn extend_from_slice(&mut self, items: &[T]) {
        let needed = self.len + items.len();
        if needed > self.data.len() {
            self.grow(needed);
        }
        self.data[self.len..needed].copy_from_slice(items);
        self.len = needed;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Raw bytes of the written records, ready for a GPU upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    fn grow(&mut self, needed: usize) {
        let old = self.data.len();
        let new = needed.max(old * 2);
        log::debug!("{} buffer grows {} -> {} records", self.label, old, new);
        self.data.resize(new, T::zeroed());
    }
}
