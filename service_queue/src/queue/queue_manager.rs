/// Central registry of named service queues.
///
/// Manages independent named waiting lines so callers can run several
/// side by side (walk-ins, reservations, pickup orders, etc.).

use std::collections::HashMap;
use crate::error::Result;
use crate::{queue_bail, queue_info};
use super::service_queue::ServiceQueue;

/// Named queue registry
///
/// Stores independent service queues by name. Each queue keeps its own
/// token table, so token ids are only meaningful within the queue that
/// issued them.
pub struct QueueManager {
    queues: HashMap<String, ServiceQueue>,
}

impl QueueManager {
    /// Create a new empty queue manager
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    /// Create a new named queue with the default initial table capacity
    ///
    /// Returns a reference to the created queue.
    ///
    /// # Errors
    ///
    /// Returns an error if a queue with the same name already exists.
    pub fn create_queue(&mut self, name: &str) -> Result<&ServiceQueue> {
        if self.queues.contains_key(name) {
            queue_bail!("svq::QueueManager", "Queue '{}' already exists", name);
        }

        self.queues.insert(name.to_string(), ServiceQueue::new());
        queue_info!("svq::QueueManager", "Queue '{}' created", name);
        Ok(self.queues.get(name).unwrap())
    }

    /// Create a new named queue with a caller-chosen initial table capacity
    ///
    /// Returns a reference to the created queue.
    ///
    /// # Errors
    ///
    /// Returns an error if a queue with the same name already exists,
    /// or if `capacity` is zero.
    pub fn create_queue_with_capacity(
        &mut self,
        name: &str,
        capacity: usize,
    ) -> Result<&ServiceQueue> {
        if self.queues.contains_key(name) {
            queue_bail!("svq::QueueManager", "Queue '{}' already exists", name);
        }

        let queue = ServiceQueue::with_initial_capacity(capacity)?;
        self.queues.insert(name.to_string(), queue);
        queue_info!("svq::QueueManager", "Queue '{}' created", name);
        Ok(self.queues.get(name).unwrap())
    }

    /// Get a queue by name
    pub fn queue(&self, name: &str) -> Option<&ServiceQueue> {
        self.queues.get(name)
    }

    /// Get a mutable queue by name
    pub fn queue_mut(&mut self, name: &str) -> Option<&mut ServiceQueue> {
        self.queues.get_mut(name)
    }

    /// Remove a queue by name
    ///
    /// Returns the removed queue, or None if not found. Dropping the
    /// returned queue releases every slot it ever created.
    pub fn remove_queue(&mut self, name: &str) -> Option<ServiceQueue> {
        let removed = self.queues.remove(name);
        if removed.is_some() {
            queue_info!("svq::QueueManager", "Queue '{}' removed", name);
        }
        removed
    }

    /// Get the number of queues
    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    /// Get all queue names
    pub fn queue_names(&self) -> Vec<&str> {
        self.queues.keys().map(|k| k.as_str()).collect()
    }

    /// Remove all queues
    pub fn clear(&mut self) {
        self.queues.clear();
    }
}

impl Default for QueueManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "queue_manager_tests.rs"]
mod tests;
