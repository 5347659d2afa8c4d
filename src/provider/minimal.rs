use super::*;

// ----- T H E   M I N I M A L   P R O V I D E R ---------------------------------------

/// A provider with no enrichment data at all. Usually sufficient for places
/// read from plain text, and for test authoring.
#[derive(Debug)]
pub struct Minimal {
    id: Uuid,
}

impl Minimal {
    pub fn new() -> Minimal {
        Minimal { id: Uuid::new_v4() }
    }
}

impl Default for Minimal {
    fn default() -> Minimal {
        Minimal::new()
    }
}

impl Provider for Minimal {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        "minimal"
    }

    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_see() {
        let prv = Minimal::default();
        assert!(prv.get("rating").is_none());
        assert_ne!(prv.id(), Minimal::new().id());
    }
}
