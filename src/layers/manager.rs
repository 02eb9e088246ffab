use crate::layers::marker::MarkerItem;

/// Ordered registry of the markers a manager has placed.
///
/// Entries keep insertion order. Identifiers are not required to be unique;
/// lookups return the first match.
#[derive(Debug, Clone)]
pub struct MarkerRegistry<M> {
    items: Vec<MarkerItem<M>>,
}

impl<M> MarkerRegistry<M> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an entry, keeping any earlier entry with the same id
    pub fn push(&mut self, item: MarkerItem<M>) {
        self.items.push(item);
    }

    /// All marker handles in insertion order
    pub fn markers(&self) -> Vec<&M> {
        self.items.iter().map(|item| &item.marker).collect()
    }

    /// First entry matching the predicate
    pub fn find<F>(&self, mut predicate: F) -> Option<&MarkerItem<M>>
    where
        F: FnMut(&MarkerItem<M>) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// First entry registered under `id`
    pub fn get(&self, id: &str) -> Option<&MarkerItem<M>> {
        self.find(|item| item.id == id)
    }

    /// Removes every entry registered under `id`, returning them in order
    pub fn remove(&mut self, id: &str) -> Vec<MarkerItem<M>> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.id == id);
        self.items = kept;
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkerItem<M>> {
        self.items.iter()
    }

    /// Gets the number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<M> Default for MarkerRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}
