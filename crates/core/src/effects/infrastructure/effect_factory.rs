use crate::effects::domain::pixel_effect::PixelEffect;

use super::box_blur::BoxBlur;
use super::grayscale::Grayscale;
use super::saturation::Saturation;
use super::sepia::Sepia;

/// Which transform a pipeline run applies, selected once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectKind {
    Grayscale,
    Sepia,
    Blur { radius: i32 },
    Saturation { r: f32, g: f32, b: f32 },
}

/// Creates the effect for `kind`. Logs the selection.
pub fn create_effect(kind: EffectKind) -> Box<dyn PixelEffect> {
    log::info!("Selected effect: {kind:?}");
    match kind {
        EffectKind::Grayscale => Box::new(Grayscale),
        EffectKind::Sepia => Box::new(Sepia),
        EffectKind::Blur { radius } => Box::new(BoxBlur::new(radius)),
        EffectKind::Saturation { r, g, b } => Box::new(Saturation::new(r, g, b)),
    }
}
