pub mod pixel_effect;
