// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lower-case ASCII form of `input`; empty when nothing survives.
    fn slugify(&self, input: &str) -> String;
}
