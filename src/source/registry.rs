// Tue Jan 15 2026 - Alex

use crate::source::descriptor::SourceDescriptor;

/// Ordered set of registered sources. Registration order is run order.
#[derive(Debug, Default)]
pub struct SourceRegistry {
    descriptors: Vec<SourceDescriptor>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: SourceDescriptor) {
        log::debug!("registered source {} ({})", descriptor.name(), descriptor.aggregate);
        self.descriptors.push(descriptor);
    }

    pub fn with(mut self, descriptor: SourceDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Number of sources with a scrape operation configured.
    pub fn active_count(&self) -> usize {
        self.descriptors.iter().filter(|d| d.has_scraper()).count()
    }
}

impl<'a> IntoIterator for &'a SourceRegistry {
    type Item = &'a SourceDescriptor;
    type IntoIter = std::slice::Iter<'a, SourceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

impl FromIterator<SourceDescriptor> for SourceRegistry {
    fn from_iter<I: IntoIterator<Item = SourceDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for descriptor in iter {
            registry.register(descriptor);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Location;
    use crate::source::descriptor::Granularity;

    #[test]
    fn test_registration_order() {
        let registry = SourceRegistry::new()
            .with(SourceDescriptor::new(Location::country("B"), Granularity::Country))
            .with(SourceDescriptor::new(Location::country("A"), Granularity::Country));

        let names: Vec<_> = registry.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active_count(), 0);
    }
}
