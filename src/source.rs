use crate::authoring::*;

/// `PlaceDataSource` is the access interface a browsing UI talks to: A count,
/// random access by position, and stepping back and forth from a given place.
///
/// Here it is implemented as an accessor trait, so any ordered container of
/// [`Place`]s may serve as a data source. Implementors supply `count`,
/// `place`, and `position`; the navigation methods come for free, but
/// are only as fast as the `position` implementation behind them.
pub trait PlaceDataSource {
    /// Number of places in the source
    fn count(&self) -> usize;

    /// Access the `index`th place. Negative indices, and indices
    /// beyond the end, are reported as [`Error::IndexOutOfRange`]
    fn place(&self, index: isize) -> Result<&Place, Error>;

    /// Position of the first place with the given `id`, if any
    fn position(&self, id: &str) -> Option<usize>;

    /// Companion to `count()`
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The place following `place`. `None` if `place` is the last one,
    /// or if it is not in the source at all
    fn next_place(&self, place: &Place) -> Option<&Place> {
        let index = self.position(place.id())?.checked_add(1)?;
        if index >= self.count() {
            return None;
        }
        self.place(index as isize).ok()
    }

    /// The place preceding `place`. `None` if `place` is the first one,
    /// or if it is not in the source at all
    fn previous_place(&self, place: &Place) -> Option<&Place> {
        let index = self.position(place.id())?.checked_sub(1)?;
        self.place(index as isize).ok()
    }
}

/// Convert a signed index to a position within `0..count`
pub(crate) fn checked_index(index: isize, count: usize) -> Result<usize, Error> {
    match usize::try_from(index) {
        Ok(i) if i < count => Ok(i),
        _ => {
            debug!("index {index} out of range 0..{count}");
            Err(Error::IndexOutOfRange { index, count })
        }
    }
}

// Produce the correct count() method for arrays, slices, and vecs
macro_rules! length {
    (array) => {
        fn count(&self) -> usize {
            N
        }
    };

    (slice) => {
        fn count(&self) -> usize {
            (**self).len()
        }
    };

    (vec) => {
        fn count(&self) -> usize {
            self.len()
        }
    };
}

// Plain containers have no index, so they scan from the front
macro_rules! place_data_source_impl {
    ($len:ident) => {
        length!($len);

        fn place(&self, index: isize) -> Result<&Place, Error> {
            let index = checked_index(index, self.count())?;
            Ok(&self[index])
        }

        fn position(&self, id: &str) -> Option<usize> {
            self.iter().position(|place| place.id() == id)
        }
    };
}

impl<const N: usize> PlaceDataSource for [Place; N] {
    place_data_source_impl!(array);
}

impl PlaceDataSource for &[Place] {
    place_data_source_impl!(slice);
}

impl PlaceDataSource for Vec<Place> {
    place_data_source_impl!(vec);
}

// ----- T E S T S ---------------------------------------------------
