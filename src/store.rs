use crate::drawing::Element;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("element index {index} out of range (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("element id {found} does not match its slot {expected}")]
    IdMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone)]
pub struct ElementStore<D> {
    elements: Vec<Element<D>>,
}

impl<D> Default for ElementStore<D> {
    fn default() -> Self {
        Self { elements: Vec::new() }
    }
}

impl<D> ElementStore<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> usize {
        self.elements.len()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Element<D>> {
        self.elements.get(id)
    }

    pub fn last(&self) -> Option<&Element<D>> {
        self.elements.last()
    }

    pub fn append(&mut self, element: Element<D>) -> Result<usize, StoreError> {
        let expected = self.next_id();
        if element.id() != expected {
            return Err(StoreError::IdMismatch {
                expected,
                found: element.id(),
            });
        }
        self.elements.push(element);
        Ok(expected)
    }

    pub fn replace_at(&mut self, id: usize, element: Element<D>) -> Result<(), StoreError> {
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(id)
            .ok_or(StoreError::IndexOutOfRange { index: id, len })?;
        if element.id() != id {
            return Err(StoreError::IdMismatch {
                expected: id,
                found: element.id(),
            });
        }
        *slot = element;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn all(&self) -> std::slice::Iter<'_, Element<D>> {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::testing::{Recorded, RecordingBridge};
    use crate::drawing::{ElementKind, create_element};

    fn line(bridge: &mut RecordingBridge, id: usize, x: f32) -> Element<Recorded> {
        create_element(bridge, id, x, 0.0, x + 10.0, 0.0, ElementKind::Line)
    }

    #[test]
    fn test_append_assigns_positional_ids() {
        let mut bridge = RecordingBridge::default();
        let mut store = ElementStore::new();

        for i in 0..5 {
            let id = store.next_id();
            assert_eq!(id, i);
            assert_eq!(store.append(line(&mut bridge, id, i as f32)), Ok(i));
        }

        for (i, element) in store.all().enumerate() {
            assert_eq!(element.id(), i);
        }
    }

    #[test]
    fn test_append_rejects_wrong_id() {
        let mut bridge = RecordingBridge::default();
        let mut store = ElementStore::new();

        let err = store.append(line(&mut bridge, 2, 0.0)).unwrap_err();
        assert_eq!(err, StoreError::IdMismatch { expected: 0, found: 2 });
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_at() {
        let mut bridge = RecordingBridge::default();
        let mut store = ElementStore::new();
        store.append(line(&mut bridge, 0, 0.0)).unwrap();

        store.replace_at(0, line(&mut bridge, 0, 7.0)).unwrap();
        assert_eq!(store.get(0).unwrap().coords(), [7.0, 0.0, 17.0, 0.0]);

        let err = store.replace_at(4, line(&mut bridge, 4, 0.0)).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfRange { index: 4, len: 1 });
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut bridge = RecordingBridge::default();
        let mut store: ElementStore<Recorded> = ElementStore::new();
        store.clear();
        assert!(store.is_empty());

        for i in 0..3 {
            store.append(line(&mut bridge, i, 0.0)).unwrap();
        }
        store.clear();
        store.clear();
        assert_eq!(store.len(), 0);
        assert_eq!(store.next_id(), 0);
    }

    #[test]
    fn test_all_is_restartable() {
        let mut bridge = RecordingBridge::default();
        let mut store = ElementStore::new();
        store.append(line(&mut bridge, 0, 0.0)).unwrap();
        store.append(line(&mut bridge, 1, 1.0)).unwrap();

        let iter = store.all();
        let first: Vec<usize> = iter.clone().map(Element::id).collect();
        let second: Vec<usize> = iter.map(Element::id).collect();
        assert_eq!(first, vec![0, 1]);
        assert_eq!(first, second);
    }
}
