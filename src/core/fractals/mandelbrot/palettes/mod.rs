pub mod cosine_palette;
