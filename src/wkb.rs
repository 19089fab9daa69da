//! Minimal WKB (Well-Known Binary) encoding for the two geometry kinds the
//! pipeline handles, `Point` and `LineString`. Only used as a canonical
//! byte-string key for geometry-equality comparisons (§4.6) — encoding is
//! literal vertex-sequence encoding, not a general WKB writer, so there is
//! no support for rings, multi-geometries, or Z/M coordinates.

use std::io::Write;

use geo::{Coord, LineString, Point};

const WKB_LE: u8 = 1;
const WKB_POINT: u32 = 1;
const WKB_LINESTRING: u32 = 2;

/// Canonical little-endian WKB bytes for a point, suitable as a hash-map
/// key for exact geometry equality after S1's 7-decimal rounding.
pub fn point_to_wkb(p: &Point<f64>) -> Vec<u8> {
    let mut out = Vec::with_capacity(21);
    out.write_all(&[WKB_LE]).unwrap();
    out.write_all(&WKB_POINT.to_le_bytes()).unwrap();
    write_coord(&mut out, p.0);
    out
}

/// Canonical little-endian WKB bytes for a line string.
pub fn linestring_to_wkb(ls: &LineString<f64>) -> Vec<u8> {
    let mut out = Vec::with_capacity(9 + ls.0.len() * 16);
    out.write_all(&[WKB_LE]).unwrap();
    out.write_all(&WKB_LINESTRING.to_le_bytes()).unwrap();
    out.write_all(&(ls.0.len() as u32).to_le_bytes()).unwrap();
    for coord in &ls.0 {
        write_coord(&mut out, *coord);
    }
    out
}

fn write_coord(out: &mut Vec<u8>, c: Coord<f64>) {
    out.write_all(&c.x.to_le_bytes()).unwrap();
    out.write_all(&c.y.to_le_bytes()).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_linestrings_produce_identical_keys() {
        let a = LineString::from(vec![(-66.0, 45.0), (-66.1, 45.0)]);
        let b = LineString::from(vec![(-66.0, 45.0), (-66.1, 45.0)]);
        assert_eq!(linestring_to_wkb(&a), linestring_to_wkb(&b));
    }

    #[test]
    fn reversed_vertex_order_is_a_different_key() {
        let a = LineString::from(vec![(-66.0, 45.0), (-66.1, 45.0)]);
        let b = LineString::from(vec![(-66.1, 45.0), (-66.0, 45.0)]);
        assert_ne!(linestring_to_wkb(&a), linestring_to_wkb(&b));
    }

    #[test]
    fn point_and_linestring_keys_never_collide() {
        let p = Point::new(-66.0, 45.0);
        let ls = LineString::from(vec![(-66.0, 45.0)]);
        assert_ne!(point_to_wkb(&p), linestring_to_wkb(&ls));
    }
}
