// Singly linked chain of key/value entries for one hash table bucket

use std::fmt;

type Link<V> = Option<Box<ChainNode<V>>>;

/// One entry in a chain. Owned exclusively by the chain that holds it.
pub struct ChainNode<V> {
    key: String,
    value: V,
    next: Link<V>,
}

impl<V> ChainNode<V> {
    /// Key stored in this node
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value stored in this node
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the stored value
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

/// Singly linked list of entries, newest first
pub struct Chain<V> {
    /// First node in the chain
    head: Link<V>,
    /// Number of nodes in the chain
    len: usize,
}

impl<V> Chain<V> {
    /// Create an empty chain
    pub fn new() -> Self {
        Chain { head: None, len: 0 }
    }

    /// Number of entries in the chain
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the chain has no entries
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Find the node holding `key`
    pub fn find(&self, key: &str) -> Option<&ChainNode<V>> {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.key == key {
                return Some(node);
            }
            current = node.next.as_deref();
        }
        None
    }

    /// Find the node holding `key`, mutably
    pub fn find_mut(&mut self, key: &str) -> Option<&mut ChainNode<V>> {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.key == key {
                return Some(node);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Check if the chain holds `key`
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Push a new entry at the head of the chain.
    ///
    /// Does not look for an existing entry with the same key; callers that
    /// need insert-if-absent semantics check with [`Chain::find_mut`] first.
    pub fn insert(&mut self, key: String, value: V) {
        let node = Box::new(ChainNode {
            key,
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Unlink the entry holding `key` and return its value
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.len -= 1;

        Some(removed.value)
    }

    /// Detach and return the head entry
    pub fn pop_front(&mut self) -> Option<(String, V)> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            (node.key, node.value)
        })
    }

    /// Iterate entries from head to tail
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unlink nodes one at a time so long chains do not recurse through Box drops
impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

/// Borrowing iterator over a chain
pub struct Iter<'a, V> {
    next: Option<&'a ChainNode<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            (node.key.as_str(), &node.value)
        })
    }
}

/// Owning iterator that drains a chain head first
pub struct IntoIter<V> {
    chain: Chain<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len, Some(self.chain.len))
    }
}

impl<V> IntoIterator for Chain<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}

impl<'a, V> IntoIterator for &'a Chain<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[(key: value) -> (key: value)]`
impl<V: fmt::Display> fmt::Display for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({}: {})", key, value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
