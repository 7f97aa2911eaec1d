use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("could not find the word you were looking for")]
    NotFound,

    #[error("cannot add word because it already exists")]
    WordExists,

    #[error("cannot update word because it does not exist")]
    WordDoesNotExist,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self, word: &str) -> Result<&str, DictionaryError> {
        self.entries
            .get(word)
            .map(String::as_str)
            .ok_or(DictionaryError::NotFound)
    }

    pub fn add(
        &mut self,
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        use std::collections::hash_map::Entry;

        match self.entries.entry(word.into()) {
            Entry::Occupied(_) => Err(DictionaryError::WordExists),
            Entry::Vacant(slot) => {
                slot.insert(definition.into());
                Ok(())
            }
        }
    }

    pub fn update(&mut self, word: &str, definition: impl Into<String>) -> Result<(), DictionaryError> {
        let slot = self
            .entries
            .get_mut(word)
            .ok_or(DictionaryError::WordDoesNotExist)?;
        *slot = definition.into();
        Ok(())
    }

    /// Removing a word that is not there is a no-op.
    pub fn delete(&mut self, word: &str) {
        self.entries.remove(word);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
