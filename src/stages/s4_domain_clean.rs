//! S4 Domain & Clean (§4.2–§4.3): domain remapping with defaults, the
//! four cleaning sweeps, and the `roadsegid` renumber.

use crate::store::Table;
use crate::value::{AttrValue, Scalar};

/// Replaces every value in a domain-bearing column with its canonical
/// code, substituting `default` for anything outside the domain or equal
/// to the missing-value sentinel (§4.2).
pub fn apply_domain(table: &mut Table, field: &str, domain: &nrn_schema::Domain, default: Scalar) {
    let Some(col) = table.column_mut(field) else { return };
    let resolve = |cell: &mut AttrValue| {
        let AttrValue::Scalar(value) = cell else { return };
        if value.is_none_like() {
            *value = default.clone();
            return;
        }
        let resolved = match value {
            Scalar::Str(label) => domain
                .code_for(nrn_schema::Lang::En, label)
                .or_else(|| domain.code_for(nrn_schema::Lang::Fr, label)),
            Scalar::Int(code) => {
                if domain.label_for(nrn_schema::Lang::En, *code as i32).is_some() {
                    Some(*code as i32)
                } else {
                    None
                }
            }
            _ => None,
        };
        *value = match resolved {
            Some(code) => Scalar::Int(code as i64),
            None => default.clone(),
        };
    };

    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        col.par_iter_mut().for_each(resolve);
    }
    #[cfg(not(feature = "rayon"))]
    {
        col.iter_mut().for_each(resolve);
    }
}

/// Sweep 1: lowercases string `*id` columns (excluding `uuid`) holding a
/// non-default value.
pub fn lowercase_ids(table: &mut Table) {
    let names: Vec<String> = table.field_names().map(str::to_string).collect();
    for name in names {
        if name == "uuid" || !name.ends_with("id") {
            continue;
        }
        let Some(col) = table.column_mut(&name) else { continue };
        for cell in col.iter_mut() {
            if let AttrValue::Scalar(Scalar::Str(s)) = cell {
                if !s.is_empty() && s != &s.to_lowercase() {
                    *s = s.to_lowercase();
                }
            }
        }
    }
}

/// Sweep 2: trims and collapses internal whitespace runs in every string
/// column.
pub fn normalize_whitespace(table: &mut Table) {
    let names: Vec<String> = table.field_names().map(str::to_string).collect();
    for name in names {
        let Some(col) = table.column_mut(&name) else { continue };
        for cell in col.iter_mut() {
            if let AttrValue::Scalar(Scalar::Str(s)) = cell {
                let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
                if collapsed != *s {
                    *s = collapsed;
                }
            }
        }
    }
}

const ROUTE_NAME_FIELDS: &[&str] = &[
    "rtename1en", "rtename2en", "rtename3en", "rtename4en",
    "rtename1fr", "rtename2fr", "rtename3fr", "rtename4fr",
];

/// Sweep 3: title-cases non-default route-name fields on `roadseg` and
/// `ferryseg`.
pub fn title_case_route_names(table: &mut Table) {
    for &name in ROUTE_NAME_FIELDS {
        let Some(col) = table.column_mut(name) else { continue };
        for cell in col.iter_mut() {
            if let AttrValue::Scalar(Scalar::Str(s)) = cell {
                if s.is_empty() || s == "None" {
                    continue;
                }
                let titled = title_case(s);
                if &titled != s {
                    *s = titled;
                }
            }
        }
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sweep 4: overwrites `roadseg.roadsegid` with 1..N in current row order.
pub fn renumber_roadsegid(table: &mut Table) {
    let Some(col) = table.column_mut("roadsegid") else { return };
    for (i, cell) in col.iter_mut().enumerate() {
        *cell = AttrValue::Scalar(Scalar::Int((i + 1) as i64));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nrn_schema::table;

    #[test]
    fn domain_unknown_value_falls_back_to_default() {
        let mut t = Table::new(table("roadseg").unwrap());
        let idx = t.push_default_row("u1".to_string());
        t.column_mut("roadclass").unwrap()[idx] = AttrValue::Scalar(Scalar::Str("Nonsense".into()));
        apply_domain(&mut t, "roadclass", &nrn_schema::domains::ROADCLASS, Scalar::Int(-1));
        assert_eq!(t.column("roadclass").unwrap()[idx], AttrValue::Scalar(Scalar::Int(-1)));
    }

    #[test]
    fn domain_known_label_resolves_to_shared_code() {
        let mut t = Table::new(table("roadseg").unwrap());
        let idx = t.push_default_row("u1".to_string());
        t.column_mut("roadclass").unwrap()[idx] = AttrValue::Scalar(Scalar::Str("Local / Street".into()));
        apply_domain(&mut t, "roadclass", &nrn_schema::domains::ROADCLASS, Scalar::Int(-1));
        let code = nrn_schema::domains::ROADCLASS.code_for(nrn_schema::Lang::En, "Local / Street").unwrap();
        assert_eq!(t.column("roadclass").unwrap()[idx], AttrValue::Scalar(Scalar::Int(code as i64)));
    }

    #[test]
    fn lowercase_ids_leaves_uuid_column_untouched() {
        let mut t = Table::new(table("roadseg").unwrap());
        let idx = t.push_default_row("KEEP-CASE".to_string());
        lowercase_ids(&mut t);
        assert_eq!(t.uuid[idx], "KEEP-CASE");
    }

    #[test]
    fn whitespace_sweep_collapses_internal_runs() {
        let mut t = Table::new(table("strplaname").unwrap());
        let idx = t.push_default_row("u1".to_string());
        t.column_mut("namebody").unwrap()[idx] = AttrValue::Scalar(Scalar::Str("  Main   Street ".into()));
        normalize_whitespace(&mut t);
        assert_eq!(
            t.column("namebody").unwrap()[idx],
            AttrValue::Scalar(Scalar::Str("Main Street".into()))
        );
    }

    #[test]
    fn roadsegid_renumber_follows_row_order() {
        let mut t = Table::new(table("roadseg").unwrap());
        t.push_default_row("a".to_string());
        t.push_default_row("b".to_string());
        renumber_roadsegid(&mut t);
        assert_eq!(t.column("roadsegid").unwrap()[0], AttrValue::Scalar(Scalar::Int(1)));
        assert_eq!(t.column("roadsegid").unwrap()[1], AttrValue::Scalar(Scalar::Int(2)));
    }
}
