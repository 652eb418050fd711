use super::glowworm::Glowworm;
use std::io::{self, Write};

const REPORT_HEADER: &str = "#Coordinates  Luciferin  Neighbor's number  Vision Range  Scoring";

/// The fixed-size population of glowworms produced by an initializer.
#[derive(Debug, Clone)]
pub struct Swarm {
    pub glowworms: Vec<Glowworm>,
}

impl Swarm {
    pub fn new(glowworms: Vec<Glowworm>) -> Self {
        Self { glowworms }
    }

    pub fn get_size(&self) -> usize {
        self.glowworms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glowworms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glowworm> {
        self.glowworms.iter()
    }

    /// Writes a human-readable report: a header line followed by one line per glowworm.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{}", REPORT_HEADER)?;
        for glowworm in &self.glowworms {
            writeln!(writer, "{}", glowworm)?;
        }
        Ok(())
    }
}
