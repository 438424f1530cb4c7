use std::any::Any;

use geoviz_types::GeoBoundingBox;

use crate::error::GeovizError;
use crate::layer::Layer;
use crate::render::Canvas;

/// Batch of layers that is attached to a map as a single layer.
///
/// Children are drawn in the order they were added.
///
/// ```
/// use geoviz::layer::{CircleMarker, CircleStyle, FeatureGroup};
/// use geoviz::geoviz_types::latlon;
///
/// let mut incidents = FeatureGroup::new();
/// incidents.add_child(CircleMarker::new(&latlon!(37.77, -122.42), CircleStyle::default()));
/// assert_eq!(incidents.len(), 1);
/// ```
#[derive(Default)]
pub struct FeatureGroup {
    name: Option<String>,
    children: Vec<Box<dyn Layer>>,
}

impl FeatureGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty group with a name shown in layer controls.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            children: Vec::new(),
        }
    }

    /// Name of the group.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Adds a layer at the end of the group.
    pub fn add_child(&mut self, layer: impl Layer + 'static) -> &mut Self {
        self.children.push(Box::new(layer));
        self
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over the direct children.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Layer> + '_ {
        self.children.iter().map(|layer| &**layer)
    }
}

impl<L: Layer + 'static> Extend<L> for FeatureGroup {
    fn extend<T: IntoIterator<Item = L>>(&mut self, iter: T) {
        self.children
            .extend(iter.into_iter().map(|l| Box::new(l) as Box<dyn Layer>));
    }
}

impl Layer for FeatureGroup {
    fn render(&self, canvas: &mut dyn Canvas) -> Result<(), GeovizError> {
        canvas.begin_group(self)?;
        for child in &self.children {
            child.render(canvas)?;
        }
        canvas.end_group()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn feature_count(&self) -> usize {
        self.children.iter().map(|c| c.feature_count()).sum()
    }

    fn extent(&self) -> Option<GeoBoundingBox> {
        self.children
            .iter()
            .filter_map(|c| c.extent())
            .reduce(|a, b| a.merge(b))
    }
}

#[cfg(test)]
mod tests {
    use geoviz_types::latlon;

    use super::*;
    use crate::layer::{CircleMarker, CircleStyle, Marker};

    #[test]
    fn counts_nested_features() {
        let mut inner = FeatureGroup::named("inner");
        inner.add_child(Marker::new(&latlon!(1.0, 1.0)));
        inner.add_child(Marker::new(&latlon!(2.0, 2.0)));

        let mut outer = FeatureGroup::new();
        outer
            .add_child(CircleMarker::new(&latlon!(-1.0, 5.0), CircleStyle::default()))
            .add_child(inner);

        assert_eq!(outer.len(), 2);
        assert_eq!(outer.feature_count(), 3);
        assert_eq!(
            outer.extent(),
            Some(GeoBoundingBox::new(-1.0, 1.0, 2.0, 5.0))
        );
    }

    #[test]
    fn empty_group_has_no_extent() {
        let group = FeatureGroup::new();
        assert!(group.is_empty());
        assert_eq!(group.feature_count(), 0);
        assert!(group.extent().is_none());
    }

    #[test]
    fn extend_keeps_order() {
        let mut group = FeatureGroup::new();
        group.extend((0..3).map(|i| Marker::new(&latlon!(i as f64, 0.0))));

        let lats: Vec<f64> = group
            .iter()
            .filter_map(|l| l.as_any().downcast_ref::<Marker>())
            .map(|m| geoviz_types::GeoPoint::lat(&m.position()))
            .collect();
        assert_eq!(lats, vec![0.0, 1.0, 2.0]);
    }
}
