use crate::geom::{ContentBox, GeneratedPath};
use crate::layered::LayeredRingPathBuilder;
use crate::random::Phases;
use crate::ribbon::{RibbonPathBuilder, RibbonStyle};
use crate::ring::RingPathBuilder;
use crate::style::StrokeStyle;
use crate::viewport::Viewport;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

/// Every annotation kind the crate can draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Mark {
    /// A single closed band around the content.
    Ring(StrokeStyle),
    /// Under/over bands faking a self-crossing stroke. Missing keys take the layered preset.
    #[serde(deserialize_with = "layered_style")]
    LayeredRing(StrokeStyle),
    /// A wavy highlighter band.
    Ribbon(RibbonStyle),
}

impl Mark {
    pub fn ring() -> Self {
        Mark::Ring(StrokeStyle::ring())
    }

    pub fn layered_ring() -> Self {
        Mark::LayeredRing(StrokeStyle::layered())
    }

    pub fn ribbon() -> Self {
        Mark::Ribbon(RibbonStyle::default())
    }

    pub fn viewport(&self, content: ContentBox) -> Viewport {
        match self {
            Mark::Ring(style) | Mark::LayeredRing(style) => Viewport::for_ring(content, style),
            Mark::Ribbon(style) => Viewport::for_ribbon(content, style),
        }
    }

    /// Whether the mark draws randomness per build.
    pub fn is_random(&self) -> bool {
        !matches!(self, Mark::Ribbon(_))
    }
}

fn layered_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<StrokeStyle, D::Error> {
    let overrides = serde_json::Value::deserialize(deserializer)?;
    StrokeStyle::from_value_with_preset(overrides, &StrokeStyle::layered())
        .map_err(serde::de::Error::custom)
}

impl Default for Mark {
    fn default() -> Self {
        Mark::ring()
    }
}

/// Builds the path for `mark` around `content`.
///
/// Ring contours are centered at the origin; ribbon contours start at the surface origin and
/// span the whole [`Mark::viewport`].
pub fn generate<R: Rng + ?Sized>(content: ContentBox, mark: &Mark, rng: &mut R) -> GeneratedPath {
    match mark {
        Mark::Ring(style) => {
            let phases = Phases::draw(rng);
            GeneratedPath::single(RingPathBuilder::new(style).build_with_phases(content, phases))
        }
        Mark::LayeredRing(style) => {
            let phases = Phases::draw(rng);
            LayeredRingPathBuilder::new(style)
                .build_with_phases(content, phases)
                .into_generated_path()
        }
        Mark::Ribbon(style) => {
            let surface = Viewport::for_ribbon(content, style);
            let contour = RibbonPathBuilder::new(style).build(surface.width, surface.height);
            GeneratedPath::single(contour)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Band;
    use crate::random::seeded_rng;

    #[test]
    fn ring_generates_one_unbanded_layer() {
        let path = generate(
            ContentBox::new(100.0, 40.0),
            &Mark::ring(),
            &mut seeded_rng(Some(1)),
        );
        assert_eq!(path.layers.len(), 1);
        assert_eq!(path.layers[0].band, None);
        assert_eq!(path.layers[0].contour.len(), 221);
    }

    #[test]
    fn layered_ring_paints_under_before_over() {
        let path = generate(
            ContentBox::new(100.0, 40.0),
            &Mark::layered_ring(),
            &mut seeded_rng(Some(1)),
        );
        let bands: Vec<_> = path.layers.iter().map(|l| l.band).collect();
        assert_eq!(bands, vec![Some(Band::Under), Some(Band::Over)]);
        let total: usize = path.contours().map(|c| c.len()).sum();
        assert_eq!(total, 221);
    }

    #[test]
    fn ribbon_spans_the_inflated_surface() {
        let content = ContentBox::new(184.0, 8.0);
        let mark = Mark::ribbon();
        let path = generate(content, &mark, &mut seeded_rng(None));
        let contour = &path.layers[0].contour;
        let last = contour.outer[contour.len() - 1];
        assert_eq!(last.x, mark.viewport(content).width);
    }

    #[test]
    fn degenerate_ring_generates_no_geometry() {
        let path = generate(
            ContentBox::new(0.0, 40.0),
            &Mark::ring(),
            &mut seeded_rng(Some(1)),
        );
        assert!(path.is_empty());
        assert!(path.contours().all(|c| c.is_finite()));
    }

    #[test]
    fn marks_deserialize_from_tagged_json() {
        let mark: Mark =
            serde_json::from_str(r#"{"kind": "layeredRing", "featherDeg": 4.5}"#).unwrap();
        let Mark::LayeredRing(style) = mark else {
            panic!("expected layered ring");
        };
        assert_eq!(style.feather_deg, 4.5);
        assert_eq!(style.gap_deg, StrokeStyle::layered().gap_deg);
        assert_eq!(style.over_window_deg, StrokeStyle::layered().over_window_deg);
        assert!(!Mark::ribbon().is_random());
    }

    #[test]
    fn bare_marks_deserialize_to_their_presets() {
        let layered: Mark = serde_json::from_str(r#"{"kind": "layeredRing"}"#).unwrap();
        assert_eq!(layered, Mark::layered_ring());
        let ring: Mark = serde_json::from_str(r#"{"kind": "ring"}"#).unwrap();
        assert_eq!(ring, Mark::ring());

        let round_trip: Mark =
            serde_json::from_str(&serde_json::to_string(&Mark::layered_ring()).unwrap()).unwrap();
        assert_eq!(round_trip, Mark::layered_ring());
    }
}
