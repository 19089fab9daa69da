//! Reprojection to the canonical NRN coordinate reference, EPSG:4617 (§3
//! invariant 6), grounded on the teacher's `crates/geom/src/algorithm/proj.rs`
//! PROJ.4-string-building pattern (itself built for reprojecting to a
//! metric CRS; here both ends stay geographic).

use anyhow::{Context, Result};
use geo::{Coord, LineString, MapCoords, Point};
use proj4rs::{proj::Proj as Proj4, transform::transform};

pub const NRN_EPSG: i32 = 4617;

fn proj4_for_epsg(epsg: i32) -> &'static str {
    match epsg {
        4617 | 4269 => "+proj=longlat +datum=NAD83 +no_defs +type=crs",
        4326 => "+proj=longlat +datum=WGS84 +no_defs +type=crs",
        _ => "+proj=longlat +datum=WGS84 +no_defs +type=crs",
    }
}

/// Transforms geometry from a source geographic CRS into EPSG:4617.
pub struct Reprojector {
    from: Proj4,
    to: Proj4,
}

impl Reprojector {
    pub fn new(source_epsg: i32) -> Result<Self> {
        let from = Proj4::from_proj_string(proj4_for_epsg(source_epsg))
            .with_context(|| format!("building source CRS definition for EPSG:{source_epsg}"))?;
        let to = Proj4::from_proj_string(proj4_for_epsg(NRN_EPSG))
            .context("building NRN target CRS definition (EPSG:4617)")?;
        Ok(Reprojector { from, to })
    }

    fn reproject_coord(&self, c: Coord<f64>) -> Coord<f64> {
        let mut point = (c.x.to_radians(), c.y.to_radians(), 0.0);
        transform(&self.from, &self.to, &mut point).expect("CRS transform failed");
        Coord {
            x: point.0.to_degrees(),
            y: point.1.to_degrees(),
        }
    }

    pub fn point(&self, p: &Point<f64>) -> Point<f64> {
        Point(self.reproject_coord(p.0))
    }

    pub fn linestring(&self, ls: &LineString<f64>) -> LineString<f64> {
        ls.map_coords(|c| self.reproject_coord(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_crs_round_trips_within_rounding_tolerance() {
        let reproj = Reprojector::new(NRN_EPSG).unwrap();
        let p = Point::new(-75.7, 45.4);
        let out = reproj.point(&p);
        assert!((out.x() - p.x()).abs() < 1e-6);
        assert!((out.y() - p.y()).abs() < 1e-6);
    }
}
