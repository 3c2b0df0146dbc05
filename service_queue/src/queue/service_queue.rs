/// Service queue: a waiting line of integer buzzer tokens.
///
/// Hands out recyclable token ids and removes or promotes any token
/// currently in line in O(1).

use std::fmt;
use crate::error::{Error, Result};
use crate::{queue_debug, queue_error};
use super::slot::Slot;

/// Initial capacity of a queue's token table
pub const INITIAL_CAPACITY: usize = 10;

/// A FIFO line handing out recyclable integer buzzer tokens.
///
/// Internally one growable token table backs two intrusive lists: the
/// active line (doubly linked, FIFO order, with the front slot's back
/// link naming the current back of the line) and a free stack of token
/// ids awaiting reuse. Issuing, seating, evicting and promoting all run
/// in O(1); table growth is amortized across issuances.
///
/// Dropping the queue releases every slot ever created, so teardown
/// cost follows the high water mark rather than the current length.
///
/// # Example
///
/// ```
/// use service_queue::svq::ServiceQueue;
///
/// let mut queue = ServiceQueue::new();
/// let a = queue.issue_token(); // 0
/// let b = queue.issue_token(); // 1
/// assert_eq!(queue.seat_front(), Some(a));
/// assert_eq!(queue.seat_front(), Some(b));
/// assert_eq!(queue.seat_front(), None);
/// ```
pub struct ServiceQueue {
    /// Token id to slot record; `None` marks an id never issued
    slots: Vec<Option<Slot>>,
    /// Front of the line
    active_head: Option<u32>,
    /// Top of the free stack
    free_head: Option<u32>,
    /// Number of tokens currently in line
    len: usize,
    /// Number of distinct ids ever issued
    issued: usize,
}

impl ServiceQueue {
    /// Create an empty queue with the default initial table capacity
    pub fn new() -> Self {
        Self::with_table(INITIAL_CAPACITY)
    }

    /// Create an empty queue with a caller-chosen initial table capacity
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero. The table grows by
    /// doubling, so an empty table could never grow.
    pub fn with_initial_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            let message = "initial table capacity must be at least 1".to_string();
            queue_error!("svq::ServiceQueue", "{}", message);
            return Err(Error::InvalidCapacity(message));
        }
        Ok(Self::with_table(capacity))
    }

    fn with_table(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            active_head: None,
            free_head: None,
            len: 0,
            issued: 0,
        }
    }

    /// Number of tokens currently in line
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the line is currently empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity of the token table
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of distinct token ids ever issued.
    ///
    /// Freed ids keep counting; the value never decreases.
    pub fn high_water_mark(&self) -> usize {
        self.issued
    }

    /// Issue a token and append it to the back of the line.
    ///
    /// Reuses the most recently freed token id when one is available,
    /// otherwise hands out the smallest id never issued, growing the
    /// token table (doubling) when it is full.
    pub fn issue_token(&mut self) -> u32 {
        let token = match self.free_head {
            Some(token) => {
                self.free_head = self.slot(token).next;
                token
            }
            None => {
                if self.len == self.slots.len() {
                    self.grow();
                }
                // Free stack empty: the issued ids are exactly 0..len
                debug_assert_eq!(self.len, self.issued, "fresh id drawn while freed ids exist");
                let token = self.len as u32;
                self.slots[token as usize] = Some(Slot::detached());
                self.issued += 1;
                token
            }
        };
        self.link_back(token);
        token
    }

    /// Seat the front of the line.
    ///
    /// Removes the front token and returns its id, or `None` when the
    /// line is empty. The freed id becomes available for reuse.
    pub fn seat_front(&mut self) -> Option<u32> {
        let head = self.active_head?;
        let (next, prev) = {
            let slot = self.slot(head);
            (slot.next, slot.prev)
        };
        if let Some(next) = next {
            // The new front inherits the back link to the end of the line
            self.slot_mut(next).prev = prev;
        }
        self.active_head = next;
        self.push_free(head);
        self.len -= 1;
        Some(head)
    }

    /// Throw a token out of the line.
    ///
    /// Returns `false`, touching nothing, when the id was never issued
    /// or is not currently in line. On success the freed id becomes
    /// available for reuse.
    pub fn evict(&mut self, token: u32) -> bool {
        let (next, prev) = match self.queued_links(token) {
            Some(links) => links,
            None => return false,
        };
        if self.active_head == Some(token) {
            // Evicting the front is exactly a seating
            self.seat_front();
            return true;
        }
        match next {
            Some(next) => {
                self.slot_mut(next).prev = Some(prev);
                self.slot_mut(prev).next = Some(next);
            }
            None => {
                // Back of the line left: the front's back link moves up
                let head = self.head_token();
                self.slot_mut(head).prev = Some(prev);
                self.slot_mut(prev).next = None;
            }
        }
        self.push_free(token);
        self.len -= 1;
        true
    }

    /// Move a token to the front of the line.
    ///
    /// The rest of the line keeps its relative order. Returns `false`,
    /// touching nothing, when the id was never issued or is not
    /// currently in line. Promoting the current front succeeds without
    /// any change.
    pub fn promote(&mut self, token: u32) -> bool {
        let (next, prev) = match self.queued_links(token) {
            Some(links) => links,
            None => return false,
        };
        let head = self.head_token();
        if head == token {
            return true;
        }
        match next {
            None => {
                // Back of the line promoted: its old neighbor becomes the
                // back, and the front's back link already names the token
                self.slot_mut(prev).next = None;
            }
            Some(next) => {
                self.slot_mut(next).prev = Some(prev);
                self.slot_mut(prev).next = Some(next);
                // The old front drops to second place: its back link must
                // now name the promoted token, and the token takes over
                // the back link to the end of the line
                let tail = self.tail_of(head);
                self.slot_mut(token).prev = Some(tail);
                self.slot_mut(head).prev = Some(token);
            }
        }
        self.slot_mut(token).next = Some(head);
        self.active_head = Some(token);
        true
    }

    /// Iterate over the token ids currently in line, front to back
    pub fn tokens(&self) -> impl Iterator<Item = u32> + '_ {
        std::iter::successors(self.active_head, move |&token| self.slot(token).next)
    }

    /// Print the line to stdout, front to back
    pub fn display(&self) {
        println!("{}", self);
    }

    /// Append an already-registered token to the back of the line
    fn link_back(&mut self, token: u32) {
        assert!(
            self.slots[token as usize].is_some(),
            "token {} has no slot record",
            token
        );
        match self.active_head {
            Some(head) => {
                let tail = self.tail_of(head);
                self.slot_mut(tail).next = Some(token);
                *self.slot_mut(token) = Slot {
                    next: None,
                    prev: Some(tail),
                };
                self.slot_mut(head).prev = Some(token);
            }
            None => {
                // Alone in line: the front's back link names itself
                *self.slot_mut(token) = Slot {
                    next: None,
                    prev: Some(token),
                };
                self.active_head = Some(token);
            }
        }
        self.len += 1;
    }

    /// Push a token onto the free stack, clearing its in-line mark
    fn push_free(&mut self, token: u32) {
        debug_assert!(
            self.slot(token).is_queued(),
            "freeing a token that is not in line: {}",
            token
        );
        let free_head = self.free_head;
        let slot = self.slot_mut(token);
        slot.prev = None;
        slot.next = free_head;
        self.free_head = Some(token);
    }

    /// Link pair of a token currently in line, or `None` when the id is
    /// out of range, never issued, or sitting on the free stack
    fn queued_links(&self, token: u32) -> Option<(Option<u32>, u32)> {
        let slot = self.slots.get(token as usize)?.as_ref()?;
        let prev = slot.prev?;
        Some((slot.next, prev))
    }

    /// Double the token table
    fn grow(&mut self) {
        let new_total = self.slots.len() * 2;
        queue_debug!(
            "svq::ServiceQueue",
            "Growing token table from {} to {} slots",
            self.slots.len(),
            new_total
        );
        self.slots.resize(new_total, None);
    }

    /// Front of the line; panics if the line is empty
    fn head_token(&self) -> u32 {
        match self.active_head {
            Some(head) => head,
            None => panic!("front token missing from a non-empty line"),
        }
    }

    /// Back of the line, reached through the front slot's back link
    fn tail_of(&self, head: u32) -> u32 {
        match self.slot(head).prev {
            Some(tail) => tail,
            None => panic!("front token {} lost its back link", head),
        }
    }

    fn slot(&self, token: u32) -> &Slot {
        match &self.slots[token as usize] {
            Some(slot) => slot,
            None => panic!("token {} has no slot record", token),
        }
    }

    fn slot_mut(&mut self, token: u32) -> &mut Slot {
        match &mut self.slots[token as usize] {
            Some(slot) => slot,
            None => panic!("token {} has no slot record", token),
        }
    }
}

impl Default for ServiceQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ServiceQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for token in self.tokens() {
            write!(f, " {}", token)?;
        }
        write!(f, " ]")
    }
}

#[cfg(test)]
#[path = "service_queue_tests.rs"]
mod tests;
