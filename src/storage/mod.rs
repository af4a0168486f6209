//! On-disk graph artifacts.
//!
//! The bundle is persisted as a compact binary file: the ordered name list
//! plus the edge list in coordinate (row, column) form with implicit unit
//! weights. Loading verifies a magic tag, a format version and a crc32
//! checksum, then rebuilds the adjacency and rank table; a round trip
//! reproduces identical connectivity and rank assignment.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynographError};
use crate::graph::GraphBundle;

/// Magic tag at the start of every graph artifact.
const MAGIC: &[u8; 4] = b"SYNG";

/// Current artifact format version.
const FORMAT_VERSION: u32 = 1;

/// Serializable form of the bundle: names in rank order plus COO edges.
#[derive(Debug, Serialize, Deserialize)]
struct GraphArtifact {
    names: Vec<String>,
    rows: Vec<u32>,
    cols: Vec<u32>,
}

/// Persist a graph bundle to `path`.
pub fn save_bundle<P: AsRef<Path>>(bundle: &GraphBundle, path: P) -> Result<()> {
    let path = path.as_ref();

    let mut rows = Vec::with_capacity(bundle.graph().edge_count());
    let mut cols = Vec::with_capacity(bundle.graph().edge_count());
    for (source, target) in bundle.graph().edges() {
        rows.push(source);
        cols.push(target);
    }
    let artifact = GraphArtifact {
        names: bundle.names().to_vec(),
        rows,
        cols,
    };

    let payload = bincode::serialize(&artifact)
        .map_err(|e| SynographError::storage(format!("Failed to encode graph artifact: {}", e)))?;
    let checksum = crc32fast::hash(&payload);

    let file = File::create(path).map_err(|e| {
        SynographError::storage(format!(
            "Failed to create artifact file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    writer.write_all(MAGIC)?;
    writer.write_u32::<LittleEndian>(FORMAT_VERSION)?;
    writer.write_u64::<LittleEndian>(payload.len() as u64)?;
    writer.write_all(&payload)?;
    writer.write_u32::<LittleEndian>(checksum)?;
    writer.flush()?;

    info!(
        "Saved graph artifact to '{}' ({} nodes, {} edges)",
        path.display(),
        bundle.len(),
        bundle.graph().edge_count()
    );
    Ok(())
}

/// Load a graph bundle from `path`.
pub fn load_bundle<P: AsRef<Path>>(path: P) -> Result<GraphBundle> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SynographError::storage(format!(
            "Failed to open artifact file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(SynographError::storage(format!(
            "'{}' is not a graph artifact (bad magic)",
            path.display()
        )));
    }

    let version = reader.read_u32::<LittleEndian>()?;
    if version != FORMAT_VERSION {
        return Err(SynographError::storage(format!(
            "Unsupported artifact format version {} (expected {})",
            version, FORMAT_VERSION
        )));
    }

    let payload_len = reader.read_u64::<LittleEndian>()?;
    // The stored length is not yet checksum-verified, so it must not size an
    // up-front allocation; read at most that many bytes and compare.
    let mut payload = Vec::new();
    let read = (&mut reader).take(payload_len).read_to_end(&mut payload)?;
    if (read as u64) != payload_len {
        return Err(SynographError::storage(format!(
            "Truncated artifact '{}': payload claims {} bytes, found {}",
            path.display(),
            payload_len,
            read
        )));
    }

    let stored_checksum = reader.read_u32::<LittleEndian>()?;
    let checksum = crc32fast::hash(&payload);
    if checksum != stored_checksum {
        return Err(SynographError::storage(format!(
            "Checksum mismatch in '{}' (stored {:08x}, computed {:08x})",
            path.display(),
            stored_checksum,
            checksum
        )));
    }

    let artifact: GraphArtifact = bincode::deserialize(&payload)
        .map_err(|e| SynographError::storage(format!("Failed to decode graph artifact: {}", e)))?;

    if artifact.rows.len() != artifact.cols.len() {
        return Err(SynographError::storage(
            "Corrupt artifact: row/column index lengths differ".to_string(),
        ));
    }
    let node_count = artifact.names.len() as u32;
    let edges: Vec<(u32, u32)> = artifact
        .rows
        .iter()
        .zip(&artifact.cols)
        .map(|(&r, &c)| (r, c))
        .collect();
    if let Some(&(r, c)) = edges.iter().find(|&&(r, c)| r >= node_count || c >= node_count) {
        return Err(SynographError::storage(format!(
            "Corrupt artifact: edge ({}, {}) outside vocabulary of {} words",
            r, c, node_count
        )));
    }

    Ok(GraphBundle::from_parts(artifact.names, edges))
}
