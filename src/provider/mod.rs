use crate::authoring::*;
use std::fmt;
use std::ops::Deref;

mod dictionary;
mod minimal;
pub use dictionary::Dictionary;
pub use minimal::Minimal;

// ----- T H E   P R O V I D E R   T R A I T -------------------------------------------

/// The `Provider` trait defines the mode of communication between a place and
/// the external service that supplied its enrichment data (ratings, opening hours,
/// photos, and the like).
///
/// The collection itself never talks to providers: it only carries a
/// [`ProviderHandle`] around on behalf of each place, so that collaborators
/// further downstream can find their way back to the source.
pub trait Provider: fmt::Debug + Send + Sync {
    /// Identity of this provider instance
    fn id(&self) -> Uuid;

    /// Human readable name of the provider kind
    fn name(&self) -> &str;

    /// Look up an enrichment value by key
    fn get(&self, key: &str) -> Option<String>;
}

// ----- T H E   P R O V I D E R   H A N D L E -----------------------------------------

/// Opaque, shareable reference to a [`Provider`].
///
/// Two handles compare equal when they refer to the same provider instance.
#[derive(Clone)]
pub struct ProviderHandle(Arc<dyn Provider>);

impl ProviderHandle {
    pub fn new<P: Provider + 'static>(provider: P) -> ProviderHandle {
        ProviderHandle(Arc::new(provider))
    }
}

impl From<Arc<dyn Provider>> for ProviderHandle {
    fn from(provider: Arc<dyn Provider>) -> Self {
        ProviderHandle(provider)
    }
}

impl Deref for ProviderHandle {
    type Target = dyn Provider;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ProviderHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.id() == other.0.id()
    }
}

impl Eq for ProviderHandle {}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProviderHandle({}: {})", self.0.name(), self.0.id())
    }
}

// ----- T E S T S ---------------------------------------------------------------------
