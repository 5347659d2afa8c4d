use crate::authoring::*;
use crate::source::checked_index;

// ----- T H E   P L A C E   C O L L E C T I O N ---------------------------------------

/// An ordered, immutable collection of places: The data source behind a
/// "browse the places near me" view.
///
/// The order of the places is the order they were handed over in at
/// construction time, and it never changes: There is no way to insert,
/// remove, or reorder places, so a `PlaceCollection` can be shared freely
/// between any number of readers.
///
/// Navigation by [`next`](Self::next) and [`previous`](Self::previous)
/// identifies places by their `id`, through an index built at construction.
/// If an id occurs more than once, navigation starts from its first
/// occurrence.
#[derive(Debug, Default, Clone)]
pub struct PlaceCollection {
    places: Box<[Place]>,
    positions: BTreeMap<String, usize>,
}

impl PlaceCollection {
    pub fn new(places: Vec<Place>) -> PlaceCollection {
        let mut positions = BTreeMap::new();
        for (index, place) in places.iter().enumerate() {
            if positions.contains_key(place.id()) {
                debug!("Duplicate place id '{}' at position {index}", place.id());
                continue;
            }
            positions.insert(place.id().to_string(), index);
        }
        trace!("PlaceCollection: {} places", places.len());

        PlaceCollection {
            places: places.into_boxed_slice(),
            positions,
        }
    }

    /// Number of places in the collection
    pub fn count(&self) -> usize {
        self.places.len()
    }

    /// Companion to `count()`
    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// The place at position `index`.
    /// Fails with [`Error::IndexOutOfRange`] unless `0 <= index < count()`.
    pub fn get(&self, index: isize) -> Result<&Place, Error> {
        let index = checked_index(index, self.count())?;
        Ok(&self.places[index])
    }

    /// The place following `place`, or `None` if `place` is the last one.
    ///
    /// A `place` not found in the collection also gives `None`: Use
    /// [`position`](Self::position) to tell the two cases apart.
    pub fn next(&self, place: &Place) -> Option<&Place> {
        let index = self.position(place.id())?;
        self.places.get(index + 1)
    }

    /// The place preceding `place`, or `None` if `place` is the first one
    /// (or not in the collection).
    pub fn previous(&self, place: &Place) -> Option<&Place> {
        let index = self.position(place.id())?.checked_sub(1)?;
        self.places.get(index)
    }

    /// Position of the (first) place with the given `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// The places, in order
    pub fn as_slice(&self) -> &[Place] {
        &self.places
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }
}

impl From<Vec<Place>> for PlaceCollection {
    fn from(places: Vec<Place>) -> Self {
        PlaceCollection::new(places)
    }
}

impl FromIterator<Place> for PlaceCollection {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        PlaceCollection::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PlaceCollection {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;
    fn into_iter(self) -> Self::IntoIter {
        self.places.iter()
    }
}

impl PlaceDataSource for PlaceCollection {
    fn count(&self) -> usize {
        self.places.len()
    }

    fn place(&self, index: isize) -> Result<&Place, Error> {
        self.get(index)
    }

    fn position(&self, id: &str) -> Option<usize> {
        PlaceCollection::position(self, id)
    }

    fn next_place(&self, place: &Place) -> Option<&Place> {
        self.next(place)
    }

    fn previous_place(&self, place: &Place) -> Option<&Place> {
        self.previous(place)
    }
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn places_list(number: usize) -> Vec<Place> {
        let yelp = ProviderHandle::new(Dictionary::with_name("yelp", BTreeMap::new()));
        let categories = Categories::new(vec![String::new()], vec![String::new()]);
        (0..number)
            .map(|index| {
                Place::new(
                    &index.to_string(),
                    &format!("Place {}", index + 1),
                    Coordinate::origin(),
                    categories.clone(),
                    &yelp,
                )
            })
            .collect()
    }

    #[test]
    fn count() {
        for n in [0, 1, 4, 100] {
            let source = PlaceCollection::new(places_list(n));
            assert_eq!(source.count(), n);
            assert_eq!(source.len(), n);
            assert_eq!(source.is_empty(), n == 0);
        }
    }

    #[test]
    fn place_for_index() -> Result<(), Error> {
        let places = places_list(4);
        let source = PlaceCollection::new(places.clone());

        let third = source.get(2)?;
        assert_eq!(third.id(), "2");
        for (i, place) in places.iter().enumerate() {
            assert_eq!(source.get(i as isize)?, place);
        }
        Ok(())
    }

    #[test]
    fn out_of_bounds() {
        let source = PlaceCollection::new(places_list(4));
        assert!(matches!(
            source.get(4),
            Err(Error::IndexOutOfRange { index: 4, count: 4 })
        ));
        assert!(matches!(
            source.get(-1),
            Err(Error::IndexOutOfRange { index: -1, count: 4 })
        ));
        assert!(source.get(isize::MAX).is_err());
        assert!(source.get(isize::MIN).is_err());

        let empty = PlaceCollection::default();
        assert!(empty.get(0).is_err());
    }

    #[test]
    fn next_place() -> Result<(), Error> {
        let places = places_list(4);
        let source = PlaceCollection::new(places.clone());

        // Known next place
        let current = &places[0];
        assert_eq!(current.id(), "0");
        let next = source.next(current);
        assert_eq!(next.map(Place::id), Some("1"));

        // Known no next place
        let last = &places[places.len() - 1];
        assert!(source.next(last).is_none());

        for i in 0..3 {
            assert_eq!(source.next(source.get(i)?), Some(source.get(i + 1)?));
        }
        Ok(())
    }

    #[test]
    fn previous_place() -> Result<(), Error> {
        let places = places_list(4);
        let source = PlaceCollection::new(places.clone());

        // Known previous place
        let current = &places[3];
        assert_eq!(current.id(), "3");
        let previous = source.previous(current);
        assert_eq!(previous.map(Place::id), Some("2"));

        // Known no previous place
        assert!(source.previous(&places[0]).is_none());

        for i in 1..4 {
            assert_eq!(source.previous(source.get(i)?), Some(source.get(i - 1)?));
        }
        Ok(())
    }

    #[test]
    fn boundaries() -> Result<(), Error> {
        // Empty: Nothing to get, nowhere to go
        let empty = PlaceCollection::new(places_list(0));
        let stranger = &places_list(1)[0];
        assert_eq!(empty.count(), 0);
        assert!(empty.get(0).is_err());
        assert!(empty.next(stranger).is_none());
        assert!(empty.previous(stranger).is_none());
        assert!(empty.position(stranger.id()).is_none());

        // A single place is both first and last
        let single = PlaceCollection::new(places_list(1));
        let only = single.get(0)?;
        assert_eq!(single.count(), 1);
        assert!(matches!(
            single.get(1),
            Err(Error::IndexOutOfRange { index: 1, count: 1 })
        ));
        assert!(single.get(-1).is_err());
        assert!(single.next(only).is_none());
        assert!(single.previous(only).is_none());
        assert_eq!(single.position(only.id()), Some(0));
        Ok(())
    }

    #[test]
    fn unknown_positions() -> Result<(), Error> {
        // Places without a known position still compare equal to themselves
        let provider = ProviderHandle::new(Minimal::new());
        let places = crate::text::parse("0 | A | nan nan\n1 | B | NaN 0", &provider)?;
        let source = PlaceCollection::new(places.clone());
        assert_eq!(source.get(0)?, source.get(0)?);
        assert_eq!(source.get(0)?, &places[0]);
        assert_eq!(source.previous(source.get(1)?), Some(source.get(0)?));
        assert_eq!(source.next(source.get(0)?), Some(source.get(1)?));
        Ok(())
    }

    #[test]
    fn strangers_and_duplicates() -> Result<(), Error> {
        let mut places = places_list(3);
        let stranger = places_list(10).pop().unwrap();
        places.push(places[1].clone());
        let source: PlaceCollection = places.into_iter().collect();
        assert_eq!(source.count(), 4);

        // Not in the collection: No neighbours, and no position
        assert!(source.next(&stranger).is_none());
        assert!(source.previous(&stranger).is_none());
        assert!(source.position(stranger.id()).is_none());

        // The duplicate navigates from its first occurrence
        let duplicate = source.get(3)?;
        assert_eq!(source.position(duplicate.id()), Some(1));
        assert_eq!(source.next(duplicate).map(Place::id), Some("2"));
        assert_eq!(source.previous(duplicate).map(Place::id), Some("0"));
        Ok(())
    }

    #[test]
    fn navigation_by_id() -> Result<(), Error> {
        // A different record carrying a known id navigates like the record it mimics
        let source = PlaceCollection::from(places_list(3));
        let lookalike = Place::new(
            "1",
            "Somewhere else",
            Coordinate::geo(55., 12.),
            Categories::default(),
            &ProviderHandle::new(Minimal::new()),
        );
        assert_eq!(source.next(&lookalike), Some(source.get(2)?));
        assert_eq!(source.previous(&lookalike), Some(source.get(0)?));
        Ok(())
    }

    #[test]
    fn as_data_source() -> Result<(), Error> {
        let source = PlaceCollection::new(places_list(4));
        let dyn_source: &dyn PlaceDataSource = &source;
        assert_eq!(dyn_source.count(), 4);
        assert_eq!(dyn_source.place(1)?.id(), "1");
        let first = dyn_source.place(0)?;
        assert_eq!(dyn_source.next_place(first).map(Place::id), Some("1"));
        assert!(dyn_source.previous_place(first).is_none());

        let ids: Vec<&str> = source.iter().map(Place::id).collect();
        assert_eq!(ids, ["0", "1", "2", "3"]);
        assert_eq!(source.as_slice().len(), 4);
        assert_eq!((&source).into_iter().count(), 4);
        Ok(())
    }
}
