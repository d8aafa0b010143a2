// dl_stack.rs
// ──────────────────────────────────────────────────────────────────────────────
// A stack built on a doubly linked list.  Besides the usual push / pop / peek
// it can remove the k-th item counted from the top, which is why the links go
// both ways.  Nodes live in an arena of slots addressed by index; `above` and
// `below` are slot indices instead of pointers.  Freed slots are recycled.
//
// Only the top slot is tracked.  Everything else is reached by walking the
// `below` links downward from the top.
// ──────────────────────────────────────────────────────────────────────────────
use std::fmt;

use super::error::StackError;

/// A single list element. Never handed out of the stack.
#[derive(Clone, Debug)]
struct Node<T> {
    item: T,
    above: Option<usize>, // toward the top
    below: Option<usize>, // toward the bottom
}

/// Extended stack ADT over a doubly linked list.
///
/// Invariants kept after every operation:
/// - walking `below` from `top` visits exactly `len` nodes;
/// - the top node has no `above`, the bottom node has no `below`;
/// - for adjacent nodes A (above) and B (below), `A.below == B` and `B.above == A`.
#[derive(Clone)]
pub struct DLStack<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    top: Option<usize>,
    len: usize,
}

impl<T> DLStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            top: None,
            len: 0,
        }
    }

    /// Adds `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        let node = Node {
            item,
            above: None,
            below: self.top,
        };
        let idx = self.alloc(node);
        if let Some(old_top) = self.top {
            if let Some(old) = self.node_mut(old_top) {
                old.above = Some(idx);
            }
        }
        self.top = Some(idx);
        self.len += 1;
    }

    /// Removes and returns the item on top of the stack.
    ///
    /// # Errors
    /// Returns `StackError::EmptyStack` if the stack holds no items.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let top = self.top.ok_or(StackError::EmptyStack)?;
        let node = self.release(top).ok_or(StackError::EmptyStack)?;

        self.top = node.below;
        if let Some(below) = node.below {
            if let Some(new_top) = self.node_mut(below) {
                new_top.above = None;
            }
        }
        self.len -= 1;
        Ok(node.item)
    }

    /// Removes and returns the k-th item counted from the top (the top is `k = 1`).
    ///
    /// The target is found by walking `k - 1` steps down from the top, so the
    /// cost is O(k).
    ///
    /// # Errors
    /// Returns `StackError::InvalidPosition` if the stack is empty, `k == 0`
    /// or `k` is greater than the number of items.
    pub fn pop_at(&mut self, k: usize) -> Result<T, StackError> {
        let invalid = StackError::InvalidPosition { k, size: self.len };
        if self.is_empty() || k == 0 || k > self.len {
            return Err(invalid);
        }

        // Case 1: plain pop.
        if k == 1 {
            return self.pop();
        }

        let target = self.walk_down(k - 1).ok_or(invalid.clone())?;
        let node = self.release(target).ok_or(invalid)?;

        match (node.above, node.below) {
            // Case 2: bottom item. The node above becomes the new bottom.
            (Some(above), None) => {
                if let Some(new_bottom) = self.node_mut(above) {
                    new_bottom.below = None;
                }
            }
            // Case 3: middle item. Splice the neighbours together.
            (Some(above), Some(below)) => {
                if let Some(upper) = self.node_mut(above) {
                    upper.below = Some(below);
                }
                if let Some(lower) = self.node_mut(below) {
                    lower.above = Some(above);
                }
            }
            // k > 1 always leaves a node above the target.
            (None, _) => {}
        }

        self.len -= 1;
        Ok(node.item)
    }

    /// Returns the item on top of the stack without removing it.
    ///
    /// # Errors
    /// Returns `StackError::EmptyStack` if the stack holds no items.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.top
            .and_then(|idx| self.node(idx))
            .map(|node| &node.item)
            .ok_or(StackError::EmptyStack)
    }

    /// Returns `true` if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of items in the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates over the items from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self,
            cursor: self.top,
            remaining: self.len,
        }
    }

    /// Returns the items ordered from bottom to top.
    pub fn bottom_up(&self) -> Vec<&T> {
        let mut items: Vec<&T> = self.iter().collect();
        items.reverse();
        items
    }

    fn node(&self, idx: usize) -> Option<&Node<T>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    /// Follows `below` links `steps` times starting at the top.
    fn walk_down(&self, steps: usize) -> Option<usize> {
        let mut current = self.top?;
        for _ in 0..steps {
            current = self.node(current)?.below?;
        }
        Some(current)
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<Node<T>> {
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }
}

impl<T> Default for DLStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-to-bottom iterator over a [`DLStack`].
pub struct Iter<'a, T> {
    stack: &'a DLStack<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.node(self.cursor?)?;
        self.cursor = node.below;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DLStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for DLStack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

impl<T: fmt::Display> fmt::Display for DLStack<T> {
    /// Renders the items top to bottom, e.g. `[3 2 1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DLStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the chain from the top and checks length and link symmetry.
    fn assert_links<T>(stack: &DLStack<T>) {
        let mut visited = 0;
        let mut previous: Option<usize> = None;
        let mut cursor = stack.top;
        while let Some(idx) = cursor {
            let node = stack.node(idx).expect("linked slot must be occupied");
            assert_eq!(node.above, previous, "above link of slot {} is not symmetric", idx);
            if let Some(prev) = previous {
                let upper = stack.node(prev).unwrap();
                assert_eq!(upper.below, Some(idx));
            }
            previous = Some(idx);
            cursor = node.below;
            visited += 1;
            assert!(visited <= stack.len(), "chain is longer than len()");
        }
        assert_eq!(visited, stack.len());
        if let Some(bottom) = previous {
            assert!(stack.node(bottom).unwrap().below.is_none());
        }
        if let Some(top) = stack.top {
            assert!(stack.node(top).unwrap().above.is_none());
        }
    }

    fn stack_of(items: &[i32]) -> DLStack<i32> {
        items.iter().copied().collect()
    }

    fn top_down(stack: &DLStack<i32>) -> Vec<i32> {
        stack.iter().copied().collect()
    }

    #[test]
    fn push_peek_pop_follow_lifo_order() {
        let mut stack = DLStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.peek(), Ok(&1));
        assert_links(&stack);
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
        assert_links(&stack);
    }

    #[test]
    fn pop_and_peek_on_empty_stack_fail() {
        let mut stack: DLStack<i32> = DLStack::new();
        assert_eq!(stack.pop(), Err(StackError::EmptyStack));
        assert_eq!(stack.peek(), Err(StackError::EmptyStack));
    }

    #[test]
    fn pop_at_one_matches_pop() {
        let mut a = stack_of(&[10, 20, 30]);
        let mut b = stack_of(&[10, 20, 30]);
        assert_eq!(a.pop_at(1), b.pop());
        assert_eq!(top_down(&a), top_down(&b));
        assert_eq!(a.len(), b.len());
        assert_links(&a);
    }

    #[test]
    fn pop_at_bottom_detaches_last_node() {
        let mut stack = stack_of(&[1, 2, 3, 4]);
        assert_eq!(stack.pop_at(4), Ok(1));
        assert_eq!(stack.len(), 3);
        assert_eq!(top_down(&stack), vec![4, 3, 2]);
        assert_links(&stack);
        assert_eq!(stack.peek(), Ok(&4));
    }

    #[test]
    fn pop_at_middle_splices_neighbours() {
        let mut stack = stack_of(&[1, 2, 3, 4, 5]);
        assert_eq!(stack.pop_at(3), Ok(3));
        assert_eq!(top_down(&stack), vec![5, 4, 2, 1]);
        assert_links(&stack);
        assert_eq!(stack.pop_at(2), Ok(4));
        assert_eq!(top_down(&stack), vec![5, 2, 1]);
        assert_links(&stack);
    }

    #[test]
    fn pop_at_counts_from_the_top() {
        // target pushed after 3 fillers, followed by 2 more items: depth 3.
        let mut stack = DLStack::new();
        for filler in ["a", "b", "c"] {
            stack.push(filler);
        }
        stack.push("target");
        stack.push("d");
        stack.push("e");
        assert_eq!(stack.pop_at(3), Ok("target"));
        assert_eq!(stack.len(), 5);
        let remaining: Vec<&str> = stack.iter().copied().collect();
        assert_eq!(remaining, vec!["e", "d", "c", "b", "a"]);
        assert_links(&stack);
    }

    #[test]
    fn pop_at_rejects_out_of_range_positions() {
        let mut stack = stack_of(&[1, 2]);
        assert_eq!(stack.pop_at(0), Err(StackError::InvalidPosition { k: 0, size: 2 }));
        assert_eq!(stack.pop_at(3), Err(StackError::InvalidPosition { k: 3, size: 2 }));
        assert_eq!(stack.len(), 2);

        let mut empty: DLStack<i32> = DLStack::new();
        assert_eq!(empty.pop_at(1), Err(StackError::InvalidPosition { k: 1, size: 0 }));
    }

    #[test]
    fn single_item_stack_pop_at_size() {
        let mut stack = stack_of(&[7]);
        assert_eq!(stack.pop_at(1), Ok(7));
        assert!(stack.is_empty());
        assert!(stack.peek().is_err());
    }

    #[test]
    fn links_survive_mixed_operations_and_slot_reuse() {
        let mut stack = DLStack::new();
        let mut model: Vec<i32> = Vec::new(); // bottom..top
        for round in 0..6 {
            for i in 0..5 {
                let value = round * 10 + i;
                stack.push(value);
                model.push(value);
            }
            let k = (round as usize % stack.len()) + 1;
            let expected = model.remove(model.len() - k);
            assert_eq!(stack.pop_at(k), Ok(expected));
            let expected_top = model.pop();
            assert_eq!(stack.pop().ok(), expected_top);
            assert_links(&stack);
        }
        let mut expected: Vec<i32> = model.clone();
        expected.reverse();
        assert_eq!(top_down(&stack), expected);
        assert!(stack.slots.len() <= 30);
    }

    #[test]
    fn display_renders_top_to_bottom() {
        let stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.to_string(), "[3 2 1]");
        assert_eq!(DLStack::<i32>::new().to_string(), "[]");
        assert_eq!(format!("{:?}", stack), "[3, 2, 1]");
    }

    #[test]
    fn bottom_up_reverses_iteration_order() {
        let stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.bottom_up(), vec![&1, &2, &3]);
        assert_eq!(stack.iter().len(), 3);
    }
}
