//! Decoding of TopoJSON topologies into plain longitude/latitude polygons.
//!
//! Arcs may be quantized (delta-encoded integers plus a `transform`) or
//! absolute. Polygon rings reference arcs by index; a negative index `i`
//! means arc `!i` traversed backwards. Consecutive arcs in a ring share their
//! joining point, which is kept only once.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::GeoError;

/// `(longitude, latitude)` in degrees.
pub type Position = (f64, f64);
pub type Ring = Vec<Position>;
/// Exterior ring followed by any holes.
pub type Polygon = Vec<Ring>;

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
	pub id: Option<String>,
	pub name: Option<String>,
	pub polygons: Vec<Polygon>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorldGeography {
	pub features: Vec<Feature>,
}

impl WorldGeography {
	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}
}

#[derive(Deserialize)]
struct Topology {
	#[serde(default)]
	transform: Option<Transform>,
	#[serde(default)]
	arcs: Vec<Vec<Vec<f64>>>,
	objects: HashMap<String, RawGeometry>,
}

#[derive(Deserialize)]
struct Transform {
	scale: [f64; 2],
	translate: [f64; 2],
}

#[derive(Deserialize)]
struct RawGeometry {
	#[serde(rename = "type", default)]
	kind: Option<String>,
	#[serde(default)]
	arcs: Option<Value>,
	#[serde(default)]
	geometries: Vec<RawGeometry>,
	#[serde(default)]
	id: Option<Value>,
	#[serde(default)]
	properties: Option<HashMap<String, Value>>,
}

/// Decode the geometry collection named `object` from a TopoJSON document.
pub fn decode(json: &str, object: &str) -> Result<WorldGeography, GeoError> {
	let topology: Topology = serde_json::from_str(json)?;
	let arcs = decode_arcs(&topology.arcs, topology.transform.as_ref())?;
	let root = topology
		.objects
		.get(object)
		.ok_or_else(|| GeoError::MissingObject(object.to_owned()))?;

	let mut features = Vec::new();
	collect_features(root, &arcs, &mut features)?;
	if features.is_empty() {
		return Err(GeoError::Empty);
	}
	Ok(WorldGeography { features })
}

fn decode_arcs(raw: &[Vec<Vec<f64>>], transform: Option<&Transform>) -> Result<Vec<Ring>, GeoError> {
	raw.iter()
		.map(|arc| {
			let (mut x, mut y) = (0.0, 0.0);
			arc.iter()
				.map(|p| {
					let [px, py] = match p.as_slice() {
						[px, py, ..] => [*px, *py],
						_ => return Err(GeoError::Decode("arc position needs two coordinates".into())),
					};
					Ok(match transform {
						Some(t) => {
							x += px;
							y += py;
							(x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1])
						}
						None => (px, py),
					})
				})
				.collect()
		})
		.collect()
}

fn collect_features(geometry: &RawGeometry, arcs: &[Ring], out: &mut Vec<Feature>) -> Result<(), GeoError> {
	let polygons = match geometry.kind.as_deref() {
		Some("GeometryCollection") => {
			for child in &geometry.geometries {
				collect_features(child, arcs, out)?;
			}
			return Ok(());
		}
		Some("Polygon") => {
			let rings: Vec<Vec<i64>> = arc_refs(geometry)?;
			vec![stitch_polygon(&rings, arcs)?]
		}
		Some("MultiPolygon") => {
			let polygons: Vec<Vec<Vec<i64>>> = arc_refs(geometry)?;
			polygons
				.iter()
				.map(|rings| stitch_polygon(rings, arcs))
				.collect::<Result<_, _>>()?
		}
		// Points, lines and null geometries have no area to draw.
		_ => return Ok(()),
	};

	out.push(Feature {
		id: geometry.id.as_ref().map(|id| match id {
			Value::String(s) => s.clone(),
			other => other.to_string(),
		}),
		name: geometry
			.properties
			.as_ref()
			.and_then(|p| p.get("name"))
			.and_then(Value::as_str)
			.map(String::from),
		polygons,
	});
	Ok(())
}

fn arc_refs<T: serde::de::DeserializeOwned>(geometry: &RawGeometry) -> Result<T, GeoError> {
	let arcs = geometry
		.arcs
		.clone()
		.ok_or_else(|| GeoError::Decode("polygon without arcs".into()))?;
	Ok(serde_json::from_value(arcs)?)
}

fn stitch_polygon(rings: &[Vec<i64>], arcs: &[Ring]) -> Result<Polygon, GeoError> {
	rings.iter().map(|refs| stitch_ring(refs, arcs)).collect()
}

fn stitch_ring(refs: &[i64], arcs: &[Ring]) -> Result<Ring, GeoError> {
	let mut ring = Ring::new();
	for &index in refs {
		let (arc_idx, reversed) = if index < 0 { (!index, true) } else { (index, false) };
		let arc = usize::try_from(arc_idx)
			.ok()
			.and_then(|i| arcs.get(i))
			.ok_or(GeoError::ArcOutOfRange(index))?;

		let skip = usize::from(!ring.is_empty());
		if reversed {
			ring.extend(arc.iter().rev().skip(skip).copied());
		} else {
			ring.extend(arc.iter().skip(skip).copied());
		}
	}
	Ok(ring)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	// Two squares sharing an edge, quantized with a scale of 0.5 and an offset
	// of (10, 20). Arc 0 is the shared edge.
	const QUANTIZED: &str = r#"{
		"type": "Topology",
		"transform": { "scale": [0.5, 0.5], "translate": [10, 20] },
		"arcs": [
			[[2, 0], [0, 2]],
			[[2, 2], [-2, 0], [0, -2], [2, 0]],
			[[2, 0], [2, 0], [0, 2], [-2, 0]]
		],
		"objects": {
			"countries": {
				"type": "GeometryCollection",
				"geometries": [
					{ "type": "Polygon", "arcs": [[0, 1]], "id": "001", "properties": { "name": "West" } },
					{ "type": "MultiPolygon", "arcs": [[[2, -1]]], "id": 2 },
					{ "type": null },
					{ "type": "Point", "coordinates": [0, 0] }
				]
			}
		}
	}"#;

	#[test]
	fn decodes_quantized_polygons() {
		let world = decode(QUANTIZED, "countries").unwrap();
		assert_eq!(world.len(), 2);

		let west = &world.features[0];
		assert_eq!(west.id.as_deref(), Some("001"));
		assert_eq!(west.name.as_deref(), Some("West"));
		assert_eq!(
			west.polygons,
			vec![vec![vec![(11.0, 20.0), (11.0, 21.0), (10.0, 21.0), (10.0, 20.0), (11.0, 20.0)]]]
		);
	}

	#[test]
	fn negative_arc_indices_reverse() {
		let world = decode(QUANTIZED, "countries").unwrap();
		let east = &world.features[1];
		assert_eq!(east.id.as_deref(), Some("2"));
		assert_eq!(east.name, None);
		assert_eq!(
			east.polygons,
			vec![vec![vec![(11.0, 20.0), (12.0, 20.0), (12.0, 21.0), (11.0, 21.0), (11.0, 20.0)]]]
		);
	}

	#[test]
	fn absolute_arcs_pass_through() {
		let json = r#"{
			"type": "Topology",
			"arcs": [[[0, 0], [5, 0], [5, 5], [0, 0]]],
			"objects": { "land": { "type": "Polygon", "arcs": [[0]] } }
		}"#;
		let world = decode(json, "land").unwrap();
		assert_eq!(
			world.features[0].polygons,
			vec![vec![vec![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 0.0)]]]
		);
	}

	#[test]
	fn missing_object_is_reported() {
		assert_eq!(
			decode(QUANTIZED, "land"),
			Err(GeoError::MissingObject("land".into()))
		);
	}

	#[test]
	fn out_of_range_arc_is_reported() {
		let json = r#"{
			"type": "Topology",
			"arcs": [],
			"objects": { "countries": { "type": "Polygon", "arcs": [[-3]] } }
		}"#;
		assert_eq!(decode(json, "countries"), Err(GeoError::ArcOutOfRange(-3)));
	}

	#[test]
	fn collection_without_areas_is_empty() {
		let json = r#"{
			"type": "Topology",
			"arcs": [],
			"objects": { "countries": { "type": "GeometryCollection", "geometries": [] } }
		}"#;
		assert_eq!(decode(json, "countries"), Err(GeoError::Empty));
	}

	#[test]
	fn malformed_json_is_a_decode_error() {
		assert!(matches!(decode("<html>", "countries"), Err(GeoError::Decode(_))));
	}
}
