use crate::math::Vector2;

/// Maximum number of contacts a single shape cast can report
pub const MAX_CONTACTS: usize = 16;

/// A single swept-shape intersection reported by a shape cast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit surface normal at the contact, pointing away from the surface
    pub normal: Vector2,

    /// Distance travelled along the cast direction before touching the surface
    pub distance: f32,
}

impl Contact {
    /// Creates a new contact
    #[inline]
    pub fn new(normal: Vector2, distance: f32) -> Self {
        Self { normal, distance }
    }
}

/// A fixed-capacity contact buffer, cleared and refilled on every cast.
///
/// Contacts beyond [`MAX_CONTACTS`] are dropped; the number dropped since the
/// last [`clear`](ContactBuffer::clear) is kept for diagnostics only.
#[derive(Debug, Clone)]
pub struct ContactBuffer {
    /// Backing storage, only the first `len` entries are live
    contacts: [Contact; MAX_CONTACTS],

    /// Number of live contacts
    len: usize,

    /// Contacts discarded because the buffer was full
    dropped: usize,
}

impl Default for ContactBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactBuffer {
    /// Creates a new empty buffer
    pub fn new() -> Self {
        Self {
            contacts: [Contact::new(Vector2::ZERO, 0.0); MAX_CONTACTS],
            len: 0,
            dropped: 0,
        }
    }

    /// Removes all contacts and resets the overflow counter
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.dropped = 0;
    }

    /// Appends a contact in arrival order.
    /// Returns false (and counts the contact as dropped) when the buffer is full.
    pub fn push(&mut self, contact: Contact) -> bool {
        if self.len == MAX_CONTACTS {
            self.dropped += 1;
            return false;
        }
        self.contacts[self.len] = contact;
        self.len += 1;
        true
    }

    /// Inserts a contact keeping the buffer ordered by ascending distance.
    ///
    /// When full, the farthest contact is the one dropped, so the nearest
    /// surfaces always survive an overflow.
    pub fn insert_by_distance(&mut self, contact: Contact) {
        let index = self.contacts[..self.len]
            .iter()
            .position(|c| contact.distance < c.distance)
            .unwrap_or(self.len);

        if self.len == MAX_CONTACTS {
            self.dropped += 1;
            if index == MAX_CONTACTS {
                return;
            }
        } else {
            self.len += 1;
        }

        // Shift the tail right by one, discarding the last slot if we were full
        for i in (index + 1..self.len).rev() {
            self.contacts[i] = self.contacts[i - 1];
        }
        self.contacts[index] = contact;
    }

    /// Returns the live contacts
    #[inline]
    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts[..self.len]
    }

    /// Returns an iterator over the live contacts
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.as_slice().iter()
    }

    /// Returns the number of live contacts
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the buffer holds no contacts
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the buffer is at capacity
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == MAX_CONTACTS
    }

    /// Returns how many contacts were dropped since the last clear
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<'a> IntoIterator for &'a ContactBuffer {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
