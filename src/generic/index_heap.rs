/*!
A max-heap over indicies weighted by some value.

Indicies are fixed by expansion of the heap and values may be updated while an
index is outside the heap, so the heap supports (for example) keeping atoms
ordered by activity while activity is bumped and decayed between pops.

Note, values are stored for every index, whether or not the index is active on
the heap, and reactivating an index restores heap order with respect to the
stored value.
*/

/// A max-heap over indicies weighted by values of type `V`.
#[derive(Debug, Default)]
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index, active or not.
    values: Vec<V>,

    /// Heap-ordered indicies.
    heap: Vec<usize>,

    /// A map from an index to its position in the heap, if active.
    positions: Vec<Option<usize>>,
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Ensures indicies up to and including `bound` may be used, with default
    /// values for any fresh index.
    pub fn expand_bounded(&mut self, bound: usize) {
        if bound >= self.values.len() {
            self.values.resize_with(bound + 1, V::default);
            self.positions.resize(bound + 1, None);
        }
    }

    /// Activates `index`, or restores heap order at `index` if already active.
    pub fn activate(&mut self, index: usize) {
        match self.positions[index] {
            Some(position) => {
                self.sift_up(position);
                self.sift_down(self.positions[index].unwrap_or(position));
            }
            None => {
                let position = self.heap.len();
                self.heap.push(index);
                self.positions[index] = Some(position);
                self.sift_up(position);
            }
        }
    }

    /// Removes and returns an index with maximal value, if some index is active.
    pub fn pop_max(&mut self) -> Option<usize> {
        match self.heap.first() {
            None => None,
            Some(&index) => {
                let last = self.heap.len() - 1;
                self.swap_slots(0, last);
                self.heap.pop();
                self.positions[index] = None;
                if !self.heap.is_empty() {
                    self.sift_down(0);
                }
                Some(index)
            }
        }
    }

    /// A reference to the value stored at `index`.
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Replaces the value at `index` without restoring heap order.
    ///
    /// Pair with [activate](IndexHeap::activate) or
    /// [heapify_if_active](IndexHeap::heapify_if_active) when `index` may be on
    /// the heap.
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value;
    }

    /// Restores heap order at `index`, if active.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(position) = self.positions[index] {
            self.sift_up(position);
            if let Some(position) = self.positions[index] {
                self.sift_down(position);
            }
        }
    }

    /// Applies `f` to every stored value, active or not.
    ///
    /// Order is preserved only if `f` is monotone, as with rescaling
    /// activities.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in &mut self.values {
            *value = f(value);
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.values[self.heap[slot]] > self.values[self.heap[parent]] {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut largest = slot;
            if left < self.heap.len()
                && self.values[self.heap[left]] > self.values[self.heap[largest]]
            {
                largest = left;
            }
            if right < self.heap.len()
                && self.values[self.heap[right]] > self.values[self.heap[largest]]
            {
                largest = right;
            }
            if largest == slot {
                break;
            }
            self.swap_slots(slot, largest);
            slot = largest;
        }
    }
}
