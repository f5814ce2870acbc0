use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading the fixed-layout text files produced by the
/// simulation runs.
///
/// Implementors decode a whole file at once; every supported format is small enough
/// to be buffered completely before any field is interpreted.
pub trait SimulationFile {
    /// The decoded representation of the file.
    type Output;

    /// The error type for decoding failures.
    type Error: Error + From<io::Error>;

    /// Decodes a file from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content does not match the layout.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error>;

    /// Decodes a file from a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoding fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
