use super::*;

// ----- T H E   D I C T I O N A R Y   P R O V I D E R ---------------------------------

/// A provider holding the enrichment data for a single place, as handed over
/// by an external lookup service in the form of a key/value dictionary.
/// An empty dictionary is perfectly valid, and is what you get from
/// [`Dictionary::empty`].
#[derive(Debug)]
pub struct Dictionary {
    id: Uuid,
    name: String,
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new(entries: BTreeMap<String, String>) -> Dictionary {
        Dictionary::with_name("dictionary", entries)
    }

    /// Named after the service the dictionary came from
    pub fn with_name(name: &str, entries: BTreeMap<String, String>) -> Dictionary {
        Dictionary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            entries,
        }
    }

    pub fn empty() -> Dictionary {
        Dictionary::new(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Provider for Dictionary {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

// ----- T E S T S ------------------------------------------------------------------
