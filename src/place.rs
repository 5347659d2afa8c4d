use crate::authoring::*;

/// The categories a place belongs to: Display names, and the matching
/// machine readable ids. The two lists are expected to be of equal length,
/// but nothing here enforces it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Categories {
    pub names: Vec<String>,
    pub ids: Vec<String>,
}

impl Categories {
    pub fn new(names: Vec<String>, ids: Vec<String>) -> Categories {
        Categories { names, ids }
    }

    /// Number of category names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(name, id)` pairs, as far as both lists reach
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .zip(self.ids.iter())
            .map(|(name, id)| (name.as_str(), id.as_str()))
    }
}

/// A point of interest, as handed to us by the outside world.
#[derive(Debug, Clone)]
pub struct Place {
    id: String,
    name: String,
    coordinate: Coordinate,
    categories: Categories,
    provider: ProviderHandle,
}

impl Place {
    pub fn new(
        id: &str,
        name: &str,
        coordinate: Coordinate,
        categories: Categories,
        provider: &ProviderHandle,
    ) -> Place {
        Place {
            id: id.to_string(),
            name: name.to_string(),
            coordinate,
            categories,
            provider: provider.clone(),
        }
    }

    /// The unique identifier, used for navigation
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// The source of the enrichment data for this place
    pub fn provider(&self) -> &ProviderHandle {
        &self.provider
    }
}

// Coordinates compare by bit pattern, so a place is always equal to itself,
// even when its position is unknown (NaN)
impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        let bits = |c: Coordinate| c.0.map(f64::to_bits);
        self.id == other.id
            && self.name == other.name
            && bits(self.coordinate) == bits(other.coordinate)
            && self.categories == other.categories
            && self.provider == other.provider
    }
}

impl Eq for Place {}

// ----- T E S T S ------------------------------------------------------------------
