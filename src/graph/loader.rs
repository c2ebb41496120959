use crate::errors::{Result, RouteError};
use super::Edge;

use std::{io::Read, path::Path};
use csv::ReaderBuilder;
use log::debug;


/// Load an edge list from a CSV file with a `from,to,distance` header
pub fn load_edges<P: AsRef<Path>>(path: P) -> Result<Vec<Edge<f64>>> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let edges = collect_edges(reader)?;
    debug!("loaded {} edges from {}", edges.len(), path.as_ref().display());
    Ok(edges)
}

/// Read an edge list in CSV form from any reader
pub fn read_edges<R: Read>(input: R) -> Result<Vec<Edge<f64>>> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    collect_edges(reader)
}

fn collect_edges<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Edge<f64>>> {
    let mut edges = Vec::new();

    for record in reader.deserialize() {
        let edge: Edge<f64> = record?;

        // the engine does not validate weights, so reject them here
        if !edge.distance.is_finite() || edge.distance < 0.0 {
            return Err(RouteError::InvalidDistance {
                from: edge.from,
                to: edge.to,
                distance: edge.distance,
            });
        }
        edges.push(edge);
    }

    Ok(edges)
}
