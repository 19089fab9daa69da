//! Reads the administrative boundary polygon `convert` clips ingested
//! features against. Shapefile-only for now; ring→polygon grouping is
//! adapted from the teacher's `common/polygon.rs::shp_to_geo`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use shapefile::Shape;

pub fn load(path: &Path) -> Result<Polygon<f64>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    if ext != "shp" {
        bail!("unsupported boundary format `.{ext}`; only Shapefile polygons are implemented");
    }

    let mut reader = shapefile::ShapeReader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let mut polygons = MultiPolygon(Vec::new());
    for shape in reader.iter_shapes() {
        let Shape::Polygon(p) = shape? else {
            bail!("boundary file {} contains a non-Polygon shape", path.display());
        };
        polygons.0.extend(shp_to_geo(&p).0);
    }

    polygons
        .0
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("boundary file {} has no polygon rings", path.display()))
}

fn shp_to_geo(p: &shapefile::Polygon) -> MultiPolygon<f64> {
    fn ensure_closed(coords: &mut Vec<Coord<f64>>) {
        if !coords.is_empty() && coords[0] != coords[coords.len() - 1] {
            coords.push(coords[0]);
        }
    }

    fn signed_area(pts: &[Coord<f64>]) -> f64 {
        pts.windows(2).map(|w| w[0].x * w[1].y - w[1].x * w[0].y).sum::<f64>() / 2.0
    }

    let mut rings: Vec<(LineString<f64>, bool)> = Vec::with_capacity(p.rings().len());
    for ring in p.rings() {
        let mut coords: Vec<Coord<f64>> = ring.points().iter().map(|pt| Coord { x: pt.x, y: pt.y }).collect();
        ensure_closed(&mut coords);
        let is_exterior = signed_area(&coords) < 0.0;
        rings.push((LineString(coords), is_exterior));
    }

    let mut polys = Vec::new();
    let mut current_exterior: Option<LineString<f64>> = None;
    let mut current_holes = Vec::new();
    for (ls, is_exterior) in rings {
        if is_exterior {
            if let Some(ext) = current_exterior.take() {
                polys.push(Polygon::new(ext, std::mem::take(&mut current_holes)));
            }
            current_exterior = Some(ls);
        } else {
            current_holes.push(ls);
        }
    }
    if let Some(ext) = current_exterior {
        polys.push(Polygon::new(ext, current_holes));
    }
    MultiPolygon(polys)
}
