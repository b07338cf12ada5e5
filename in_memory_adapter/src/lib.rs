/// Insertion-ordered in-memory storage. Lookups are linear scans, which keeps
/// iteration order stable for rendering.
#[derive(Debug, Clone)]
pub struct InMemoryRepo<T, Id> {
    storage: Vec<(Id, T)>,
}

impl<T, Id> Default for InMemoryRepo<T, Id> {
    fn default() -> Self {
        Self {
            storage: Vec::new(),
        }
    }
}

impl<T, Id> InMemoryRepo<T, Id>
where
    Id: Clone + Eq,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` under `id`, replacing (in place) any item already stored
    /// under that id. Returns the replaced item.
    pub fn insert(&mut self, id: Id, item: T) -> Option<T> {
        match self.position(&id) {
            Some(index) => Some(std::mem::replace(&mut self.storage[index].1, item)),
            None => {
                self.storage.push((id, item));
                None
            }
        }
    }

    pub fn get(&self, id: &Id) -> Option<&T> {
        self.storage
            .iter()
            .find_map(|(key, item)| (key == id).then_some(item))
    }

    pub fn get_mut(&mut self, id: &Id) -> Option<&mut T> {
        self.storage
            .iter_mut()
            .find_map(|(key, item)| (key == id).then_some(item))
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.position(id).is_some()
    }

    /// Removes the item stored under `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &Id) -> Option<T> {
        self.position(id).map(|index| self.storage.remove(index).1)
    }

    pub fn position(&self, id: &Id) -> Option<usize> {
        self.storage.iter().position(|(key, _)| key == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Id, &T)> {
        self.storage.iter().map(|(id, item)| (id, item))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.storage.iter().map(|(_, item)| item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl<T, Id> FromIterator<(Id, T)> for InMemoryRepo<T, Id>
where
    Id: Clone + Eq,
{
    fn from_iter<I: IntoIterator<Item = (Id, T)>>(iter: I) -> Self {
        let mut repo = Self::new();
        for (id, item) in iter {
            repo.insert(id, item);
        }
        repo
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryRepo;

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut repo = InMemoryRepo::new();
        repo.insert("b", 1);
        repo.insert("a", 2);
        assert_eq!(repo.insert("b", 3), Some(1));

        let order: Vec<_> = repo.iter().map(|(id, v)| (*id, *v)).collect();
        assert_eq!(order, vec![("b", 3), ("a", 2)]);
    }

    #[test]
    fn remove_drops_exactly_one_item() {
        let mut repo: InMemoryRepo<u32, &str> =
            [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();

        assert_eq!(repo.remove(&"y"), Some(2));
        assert_eq!(repo.len(), 2);
        assert!(!repo.contains(&"y"));
        assert_eq!(repo.values().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(repo.remove(&"missing"), None);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn get_mut_updates_the_stored_item() {
        let mut repo = InMemoryRepo::new();
        repo.insert(7_u32, String::from("old"));
        if let Some(item) = repo.get_mut(&7) {
            item.push_str("er");
        }
        assert_eq!(repo.get(&7).map(String::as_str), Some("older"));
        assert!(repo.get(&8).is_none());
    }
}
