//! Embedded word list
//!
//! Words compiled into the binary for offline play.

/// Built-in five-letter answers used when the word API is not available
pub const FALLBACK_WORDS: &[&str] = &[
    "PERRO", "GATOS", "SALUD", "FELIZ", "NIEVE", "LIMON", "RATON", "PLAZA", "BESOS", "JUEGO",
    "LUCES", "NADAR", "TIGRE", "VOLAR", "ZORRO", "MANGO", "PIANO", "QUESO", "ROCAS", "SILLA",
];
