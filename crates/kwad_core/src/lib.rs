//! Public library API for decoding Klei KWAD asset packages.

/// Package parsing, resource decoding, reference resolution, and animation reconstruction.
pub mod kwad;
