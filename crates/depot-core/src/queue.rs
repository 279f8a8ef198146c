//! FIFO conveyor queue
//!
//! A singly linked chain of nodes stored in an arena and addressed by slot
//! index. The queue owns every node; each node links to its successor by
//! index only, so there is no shared ownership and no back-reference.
//! Slots released by `dequeue` are recycled through a free list.

/// One link in the chain
#[derive(Debug)]
struct QueueNode<T> {
    item: T,
    next: Option<usize>,
}

/// First-in, first-out queue
#[derive(Debug)]
pub struct Queue<T> {
    slots: Vec<Option<QueueNode<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Append an item at the tail
    pub fn enqueue(&mut self, item: T) {
        let node = QueueNode { item, next: None };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => {
                if let Some(tail_node) = self.slots[tail].as_mut() {
                    tail_node.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Remove and return the head item, or `None` when the queue is empty
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.slots[head].take()?;
        self.free.push(head);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        if self.len == 0 {
            // Nothing left to link to; drop the arena so it does not keep
            // the high-water mark forever.
            self.slots.clear();
            self.free.clear();
        }

        Some(node.item)
    }

    /// Borrow the head item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.head
            .and_then(|slot| self.slots[slot].as_ref())
            .map(|node| &node.item)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate head to tail without mutating the queue
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            cursor: self.head,
        }
    }
}

impl<T: Clone> Queue<T> {
    /// Snapshot of the queue contents, head to tail
    pub fn to_ordered_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Head-to-tail iterator over a [`Queue`]
pub struct Iter<'a, T> {
    queue: &'a Queue<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.slots[self.cursor?].as_ref()?;
        self.cursor = node.next;
        Some(&node.item)
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}
