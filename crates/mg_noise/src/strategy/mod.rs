mod continent;
mod octaves;
mod terrain;

pub use continent::ContinentShape;
pub use octaves::{OctaveParams, OctaveStack};
pub use terrain::TerrainStrategy;
