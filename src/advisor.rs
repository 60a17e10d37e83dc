//! Boundary to the external AI services.
//!
//! The engine never talks to a model itself. Callers plug a client in
//! through [`EnhancementAdvisor`] (recommendations and explanations) and
//! [`ImageRegenerator`] (model-driven enhancement such as sharpening). Every
//! failure on this side is logged and degraded; none of it can fail an
//! enhancement request.

use log::warn;

use crate::buffer::PixelBuffer;
use crate::enhancement::FilterKind;
use crate::error::AdvisorError;
use crate::pipeline::EnhancementResult;

/// Method names the advisor is allowed to suggest.
pub const SUGGESTIBLE_METHODS: [&str; 4] = [
    "Grayscale",
    "Low-pass",
    "Gamma Correction",
    "Histogram Equalization",
];

/// Image description sent along with each explanation request.
pub const GENERIC_IMAGE_DESCRIPTION: &str = "A user-uploaded photo that might have issues with lighting, contrast, or color balance, for which an enhancement has been recommended.";

const ORIGINAL_DESCRIPTION: &str = "The original, unprocessed image uploaded by the user.";

/// Recommends filters for an image and explains the recommendation.
pub trait EnhancementAdvisor {
    /// Names of suggested methods, drawn from [`SUGGESTIBLE_METHODS`].
    fn suggest(&self, image: &PixelBuffer) -> Result<Vec<String>, AdvisorError>;

    /// Free-text reason why `method` suits an image matching `image_description`.
    fn explain(&self, method: &str, image_description: &str) -> Result<String, AdvisorError>;
}

/// Regenerates an image through an external model.
pub trait ImageRegenerator {
    fn regenerate(
        &self,
        image: &PixelBuffer,
        enhancement_type: &str,
    ) -> Result<PixelBuffer, AdvisorError>;
}

/// A recommended method with its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub explanation: String,
}

/// Text used when the advisor cannot explain `method`.
pub fn fallback_explanation(method: &str) -> String {
    format!("AI explanation for {method} could not be generated at this time.")
}

/// Whether `name` is one of [`SUGGESTIBLE_METHODS`], ignoring case.
pub fn is_suggestible_method(name: &str) -> bool {
    let name = name.trim();
    SUGGESTIBLE_METHODS
        .iter()
        .any(|method| method.eq_ignore_ascii_case(name))
}

/// Ask the advisor for suggestions and an explanation of each.
///
/// A failed or empty suggestion call yields no suggestions. Names outside
/// [`SUGGESTIBLE_METHODS`] are dropped. A failed explanation keeps the
/// suggestion with [`fallback_explanation`].
pub fn gather_suggestions<A>(advisor: &A, image: &PixelBuffer) -> Vec<Suggestion>
where
    A: EnhancementAdvisor + ?Sized,
{
    let names = match advisor.suggest(image) {
        Ok(names) => names,
        Err(err) => {
            warn!("enhancement suggestions unavailable: {err}");
            return Vec::new();
        }
    };

    names
        .into_iter()
        .filter(|name| {
            let known = is_suggestible_method(name);
            if !known {
                warn!("ignoring unknown suggested method '{name}'");
            }
            known
        })
        .map(|name| {
            let explanation = advisor
                .explain(&name, GENERIC_IMAGE_DESCRIPTION)
                .unwrap_or_else(|err| {
                    warn!("explanation for {name} unavailable: {err}");
                    fallback_explanation(&name)
                });
            Suggestion { name, explanation }
        })
        .collect()
}

/// First suggestion whose name contains the filter's display name,
/// compared case-insensitively. Sharpen never matches.
pub fn find_suggestion(filter: FilterKind, suggestions: &[Suggestion]) -> Option<&Suggestion> {
    if !filter.is_suggestible() {
        return None;
    }
    let needle = filter.display_name().to_lowercase();
    suggestions
        .iter()
        .find(|s| s.name.to_lowercase().contains(&needle))
}

/// One tile of the presented result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    /// `None` for the untouched original.
    pub filter: Option<FilterKind>,
    pub name: String,
    pub description: String,
    pub is_recommended: bool,
    pub buffer: PixelBuffer,
}

/// Pair each result with its recommendation state, original first.
///
/// A recommended entry shows the advisor's explanation in place of the
/// default description.
pub fn build_gallery(
    original: &PixelBuffer,
    results: &[EnhancementResult],
    suggestions: &[Suggestion],
) -> Vec<GalleryEntry> {
    let mut gallery = Vec::with_capacity(results.len() + 1);
    gallery.push(GalleryEntry {
        filter: None,
        name: "Original".to_string(),
        description: ORIGINAL_DESCRIPTION.to_string(),
        is_recommended: false,
        buffer: original.clone(),
    });

    for result in results {
        let suggestion = find_suggestion(result.id, suggestions);
        gallery.push(GalleryEntry {
            filter: Some(result.id),
            name: result.id.display_name().to_string(),
            description: suggestion
                .map(|s| s.explanation.clone())
                .unwrap_or_else(|| result.id.description().to_string()),
            is_recommended: suggestion.is_some(),
            buffer: result.buffer.clone(),
        });
    }

    gallery
}

/// Run the model-driven enhancement path, `None` on any failure.
pub fn ai_enhance<R>(regenerator: &R, image: &PixelBuffer, enhancement_type: &str) -> Option<PixelBuffer>
where
    R: ImageRegenerator + ?Sized,
{
    match regenerator.regenerate(image, enhancement_type) {
        Ok(enhanced) => Some(enhanced),
        Err(err) => {
            warn!("AI {enhancement_type} enhancement failed: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnhanceSettings;
    use crate::pipeline::enhance;

    struct ScriptedAdvisor {
        names: Option<Vec<&'static str>>,
        failing_explanations: Vec<&'static str>,
    }

    impl EnhancementAdvisor for ScriptedAdvisor {
        fn suggest(&self, _image: &PixelBuffer) -> Result<Vec<String>, AdvisorError> {
            self.names
                .as_ref()
                .map(|names| names.iter().map(|n| n.to_string()).collect())
                .ok_or_else(|| AdvisorError::Unavailable("offline".into()))
        }

        fn explain(&self, method: &str, image_description: &str) -> Result<String, AdvisorError> {
            assert_eq!(image_description, GENERIC_IMAGE_DESCRIPTION);
            if self.failing_explanations.iter().any(|m| *m == method) {
                Err(AdvisorError::EmptyResponse)
            } else {
                Ok(format!("{method} helps"))
            }
        }
    }

    struct Doubler;

    impl ImageRegenerator for Doubler {
        fn regenerate(
            &self,
            image: &PixelBuffer,
            enhancement_type: &str,
        ) -> Result<PixelBuffer, AdvisorError> {
            if enhancement_type != "sharpen" {
                return Err(AdvisorError::Unavailable(enhancement_type.into()));
            }
            Ok(PixelBuffer::new(image.width() * 2, image.height() * 2))
        }
    }

    fn source() -> PixelBuffer {
        PixelBuffer::filled(2, 2, [90, 60, 30, 255])
    }

    #[test]
    fn test_gather_suggestions_with_explanations() {
        let advisor = ScriptedAdvisor {
            names: Some(vec!["Gamma Correction", "Grayscale"]),
            failing_explanations: vec!["Grayscale"],
        };

        let suggestions = gather_suggestions(&advisor, &source());

        assert_eq!(
            suggestions,
            vec![
                Suggestion {
                    name: "Gamma Correction".into(),
                    explanation: "Gamma Correction helps".into(),
                },
                Suggestion {
                    name: "Grayscale".into(),
                    explanation: fallback_explanation("Grayscale"),
                },
            ]
        );
    }

    #[test]
    fn test_gather_suggestions_drops_unlisted_methods() {
        let advisor = ScriptedAdvisor {
            names: Some(vec!["Sharpen", "histogram equalization", "Vignette"]),
            failing_explanations: Vec::new(),
        };

        let suggestions = gather_suggestions(&advisor, &source());

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "histogram equalization");
    }

    #[test]
    fn test_gather_suggestions_failure_is_empty() {
        let advisor = ScriptedAdvisor {
            names: None,
            failing_explanations: Vec::new(),
        };
        assert!(gather_suggestions(&advisor, &source()).is_empty());
    }

    #[test]
    fn test_find_suggestion_substring_match() {
        let suggestions = vec![
            Suggestion {
                name: "HISTOGRAM EQUALIZATION".into(),
                explanation: "spread".into(),
            },
            Suggestion {
                name: "sharpen".into(),
                explanation: "never".into(),
            },
        ];

        assert!(find_suggestion(FilterKind::Histogram, &suggestions).is_some());
        assert!(find_suggestion(FilterKind::Gamma, &suggestions).is_none());
        assert!(find_suggestion(FilterKind::Sharpen, &suggestions).is_none());
    }

    #[test]
    fn test_build_gallery_marks_recommended() {
        let original = source();
        let results = enhance(&original, &EnhanceSettings::default()).unwrap();
        let suggestions = vec![Suggestion {
            name: "Low-pass".into(),
            explanation: "reduces noise here".into(),
        }];

        let gallery = build_gallery(&original, &results, &suggestions);

        assert_eq!(gallery.len(), 6);
        assert_eq!(gallery[0].filter, None);
        assert_eq!(gallery[0].buffer, original);
        assert!(!gallery[0].is_recommended);

        let low_pass = &gallery[2];
        assert_eq!(low_pass.filter, Some(FilterKind::LowPass));
        assert!(low_pass.is_recommended);
        assert_eq!(low_pass.description, "reduces noise here");

        let gamma = &gallery[3];
        assert!(!gamma.is_recommended);
        assert_eq!(gamma.description, FilterKind::Gamma.description());
    }

    #[test]
    fn test_ai_enhance_swallows_failure() {
        let image = source();
        let enhanced = ai_enhance(&Doubler, &image, "sharpen").unwrap();
        assert_eq!(enhanced.width(), 4);
        assert!(ai_enhance(&Doubler, &image, "denoise").is_none());
    }
}
