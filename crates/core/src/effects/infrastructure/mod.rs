pub mod box_blur;
pub mod effect_factory;
pub mod grayscale;
pub mod saturation;
pub mod sepia;
