use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use num::Num;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::retriever::tfidf::TFIDFEngine;
use crate::retriever::FaqIndex;

/// Snapshots
///
/// A built index serialized as CBOR, so startup can skip re-weighing a
/// large corpus. The snapshot carries entries, vectors, the IDF table
/// and the threshold; the engine type is not stored and must match at
/// load time.
impl<N, E> FaqIndex<N, E>
where
    N: Num + Copy + Into<f64> + Send + Sync + Serialize + DeserializeOwned,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Write this index to a CBOR stream
    pub fn write_snapshot<W: Write>(&self, writer: W) -> Result<()> {
        serde_cbor::to_writer(writer, self)?;
        Ok(())
    }

    /// Read an index back from a CBOR stream
    pub fn read_snapshot<R: Read>(reader: R) -> Result<Self> {
        let index = serde_cbor::from_reader(reader)?;
        Ok(index)
    }

    /// Save this index to a file
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_snapshot(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Load an index from a file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::read_snapshot(BufReader::new(file))
    }
}
