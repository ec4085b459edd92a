pub mod classification;
pub mod compatibility;
pub mod enums;
pub mod error;
pub mod options;
pub mod profile;
pub mod transliteration;

pub use classification::{
    BurujClassification, DestinyTier, ElementClassification, PlanetClassification, VerseRef,
};
pub use compatibility::{
    CompatibilityMethod, CompatibilityResult, DailyInteraction, ElementalMethod, LayerStatus,
    PlanetaryMethod, ScoreComponent, SpiritualMethod,
};
pub use enums::{Convention, Element, ElementRelation, Modulus, Planet, Recommendation, Weekday};
pub use error::{AbjadError, Result};
pub use options::{CompatibilityOptions, CompatibilityWeights, NormalizationOptions, TaMarbutaAs};
pub use profile::{ElementBalance, LetterValue, NameInput, NameProfile};
pub use transliteration::{MAX_CONFIDENCE, Script, Transliteration, TransliterationSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_layer_serializes_with_reason() {
        let layer: LayerStatus<DailyInteraction> = LayerStatus::Unavailable {
            reason: "mother names missing".to_string(),
        };
        let json = serde_json::to_value(&layer).expect("serialize layer");
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["reason"], "mother names missing");
        assert!(!layer.is_available());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: CompatibilityOptions =
            serde_json::from_str(r#"{"convention":"mashriqi","weights":{"daily":0.5}}"#)
                .expect("deserialize options");
        assert_eq!(options.convention, Convention::Mashriqi);
        assert_eq!(options.weights.daily, 0.5);
        assert_eq!(options.weights.spiritual, 0.30);
        assert_eq!(options.normalization, NormalizationOptions::default());
    }
}
