use crate::geometry::Point;

/// Stable identity of an active contact: a `pointerId` or a touch `identifier`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContactId(pub i32);

impl From<i32> for ContactId {
    fn from(id: i32) -> Self {
        ContactId(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub position: Point,
}

/// One raw notification from an input source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactInput {
    Added { id: ContactId, position: Point },
    Updated { id: ContactId, position: Point },
    Removed { id: ContactId },
}

/// Currently active contacts in arrival order.
///
/// Removing a contact shifts later ones down without reordering them, so
/// index 0 and 1 are always the two earliest-arrived contacts still down.
#[derive(Clone, Debug, Default)]
pub struct ContactCache {
    contacts: Vec<Contact>,
}

impl ContactCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.position_of(id).is_some()
    }

    /// Append a new contact. Returns `false` without touching the cache if
    /// `id` is already present.
    pub fn add(&mut self, id: ContactId, position: Point) -> bool {
        if self.contains(id) {
            return false;
        }
        self.contacts.push(Contact { id, position });
        true
    }

    /// Overwrite the position of `id` in place. Returns whether it matched.
    pub fn update(&mut self, id: ContactId, position: Point) -> bool {
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.position = position;
                true
            }
            None => false,
        }
    }

    /// Remove `id`, preserving the order of the survivors.
    pub fn remove(&mut self, id: ContactId) -> Option<Contact> {
        let idx = self.position_of(id)?;
        Some(self.contacts.remove(idx))
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    pub fn first(&self) -> Option<Point> {
        self.contacts.first().map(|c| c.position)
    }

    /// Positions of the two earliest-arrived contacts.
    pub fn first_pair(&self) -> Option<(Point, Point)> {
        match self.contacts.as_slice() {
            [a, b, ..] => Some((a.position, b.position)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    fn position_of(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }
}
