use crate::model::FeatureCollection;

/// Counts describing a loaded feature collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    pub feature_count: usize,
    pub image_count: usize,
    /// Names of features whose popup cannot be opened (no images).
    pub empty_features: Vec<String>,
    pub records_without_description: usize,
}

impl CollectionSummary {
    pub fn of(collection: &FeatureCollection) -> Self {
        let mut summary = Self {
            feature_count: collection.len(),
            ..Default::default()
        };
        for feature in &collection.features {
            summary.image_count += feature.images.len();
            if feature.images.is_empty() {
                summary.empty_features.push(feature.name.clone());
            }
            summary.records_without_description += feature
                .images
                .iter()
                .filter(|r| r.description.is_none())
                .count();
        }
        summary
    }

    pub fn is_valid(&self) -> bool {
        self.empty_features.is_empty()
    }
}
