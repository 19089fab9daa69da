//! Executes a `conform` document (§4.1) against one raw source row,
//! producing the column values a target table's row should receive.

use std::collections::HashMap;

use crate::config::{ConformDoc, MappingEntry};
use crate::error::ConformError;
use crate::value::{AttrValue, Scalar};

use super::functions::{FunctionCall, RowContext};

const MAX_COPY_DEPTH: usize = 4;

/// Resolves every mapped field of `target_table` for one raw source row.
/// Fields the `conform` document has no entry for are simply absent from
/// the result; the caller leaves those columns at their schema default.
pub fn apply_conform(
    target_table: &str,
    raw_row: &HashMap<String, Scalar>,
    conform: &ConformDoc,
) -> Result<HashMap<String, AttrValue>, ConformError> {
    let mut out = HashMap::new();
    let Some(fields) = conform.get(target_table) else {
        return Ok(out);
    };
    for (field_name, entry) in fields {
        let value = resolve_entry(field_name, entry, raw_row, conform, target_table, 0)?;
        out.insert(field_name.clone(), value);
    }
    Ok(out)
}

fn resolve_entry(
    field_name: &str,
    entry: &MappingEntry,
    raw_row: &HashMap<String, Scalar>,
    conform: &ConformDoc,
    table_name: &str,
    depth: usize,
) -> Result<AttrValue, ConformError> {
    match entry {
        MappingEntry::Literal(lit) => Ok(AttrValue::Scalar(lit.clone().into_scalar())),
        MappingEntry::Direct { field, cast_type } => {
            let raw = raw_row.get(field).cloned().unwrap_or(Scalar::Null);
            let value = FunctionCall::Direct {
                cast_type: cast_type.clone(),
            }
            .apply(&raw, &RowContext { field: field_name, row: raw_row })?;
            Ok(AttrValue::Scalar(value))
        }
        MappingEntry::Chain {
            fields,
            process_separately,
            functions,
        } => run_chain(
            field_name,
            fields,
            *process_separately,
            functions,
            raw_row,
            conform,
            table_name,
            depth,
        ),
    }
}

fn run_chain(
    field_name: &str,
    fields: &[String],
    process_separately: bool,
    functions: &[FunctionCall],
    raw_row: &HashMap<String, Scalar>,
    conform: &ConformDoc,
    table_name: &str,
    depth: usize,
) -> Result<AttrValue, ConformError> {
    if fields.len() > 1 && process_separately {
        let mut parts = Vec::with_capacity(fields.len());
        for f in fields {
            let initial = raw_row.get(f).cloned().unwrap_or(Scalar::Null);
            parts.push(apply_functions(
                field_name, functions, initial, raw_row, conform, table_name, depth,
            )?);
        }
        return Ok(match parts.len() {
            2 => {
                let mut it = parts.into_iter();
                AttrValue::Pair(it.next().unwrap(), it.next().unwrap())
            }
            _ => AttrValue::Scalar(Scalar::Str(
                parts.iter().map(Scalar::to_string).collect::<Vec<_>>().join(" "),
            )),
        });
    }

    let initial = fields
        .first()
        .and_then(|f| raw_row.get(f))
        .cloned()
        .unwrap_or(Scalar::Null);
    let value = apply_functions(field_name, functions, initial, raw_row, conform, table_name, depth)?;
    Ok(AttrValue::Scalar(value))
}

/// Runs a function chain against `val`, splicing in the referenced
/// field's own chain wherever `copy_attribute_functions` appears rather
/// than treating it as an ordinary step.
fn apply_functions(
    field_name: &str,
    functions: &[FunctionCall],
    mut val: Scalar,
    raw_row: &HashMap<String, Scalar>,
    conform: &ConformDoc,
    table_name: &str,
    depth: usize,
) -> Result<Scalar, ConformError> {
    let ctx = RowContext { field: field_name, row: raw_row };
    for func in functions {
        match func {
            FunctionCall::CopyAttributeFunctions {
                attributes,
                modify_parameters,
            } => {
                if depth >= MAX_COPY_DEPTH {
                    return Err(ConformError::CopyTooDeep {
                        field: field_name.to_string(),
                    });
                }
                let sibling = conform
                    .get(table_name)
                    .and_then(|t| t.get(attributes))
                    .ok_or_else(|| ConformError::UnknownCopySource {
                        field: field_name.to_string(),
                        source_field: attributes.clone(),
                    })?;
                let MappingEntry::Chain { functions: sibling_fns, .. } = sibling else {
                    return Err(ConformError::UnknownCopySource {
                        field: field_name.to_string(),
                        source_field: attributes.clone(),
                    });
                };
                let adjusted = apply_modify_parameters(sibling_fns, modify_parameters, field_name)?;
                val = apply_functions(field_name, &adjusted, val, raw_row, conform, table_name, depth + 1)?;
            }
            other => {
                val = other.apply(&val, &ctx)?;
            }
        }
    }
    Ok(val)
}

/// Overlays `modify_parameters`' keys onto every function step of a copied
/// chain, keeping whichever steps don't declare a matching argument
/// untouched.
fn apply_modify_parameters(
    functions: &[FunctionCall],
    modify_parameters: &HashMap<String, serde_yaml::Value>,
    field_name: &str,
) -> Result<Vec<FunctionCall>, ConformError> {
    if modify_parameters.is_empty() {
        return Ok(functions.to_vec());
    }
    functions
        .iter()
        .map(|f| {
            let mut value = serde_yaml::to_value(f).map_err(|_| ConformError::UnknownCopySource {
                field: field_name.to_string(),
                source_field: "<modify_parameters>".to_string(),
            })?;
            if let serde_yaml::Value::Mapping(map) = &mut value {
                for (k, v) in modify_parameters {
                    let key = serde_yaml::Value::String(k.clone());
                    if map.contains_key(&key) {
                        map.insert(key, v.clone());
                    }
                }
            }
            serde_yaml::from_value(value).map_err(|_| ConformError::UnknownCopySource {
                field: field_name.to_string(),
                source_field: "<modify_parameters>".to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LiteralValue;

    fn doc_with(table: &str, field: &str, entry: MappingEntry) -> ConformDoc {
        let mut fields = HashMap::new();
        fields.insert(field.to_string(), entry);
        let mut doc = HashMap::new();
        doc.insert(table.to_string(), fields);
        doc
    }

    #[test]
    fn literal_entry_ignores_source_row() {
        let doc = doc_with("roadseg", "roadclass", MappingEntry::Literal(LiteralValue::Str("Local".into())));
        let row = HashMap::new();
        let out = apply_conform("roadseg", &row, &doc).unwrap();
        assert_eq!(out["roadclass"], AttrValue::Scalar(Scalar::Str("Local".into())));
    }

    #[test]
    fn direct_entry_casts_source_field() {
        let doc = doc_with(
            "roadseg",
            "nbrlanes",
            MappingEntry::Direct {
                field: "LANES".to_string(),
                cast_type: Some("int".to_string()),
            },
        );
        let mut row = HashMap::new();
        row.insert("LANES".to_string(), Scalar::Str("2".into()));
        let out = apply_conform("roadseg", &row, &doc).unwrap();
        assert_eq!(out["nbrlanes"], AttrValue::Scalar(Scalar::Int(2)));
    }

    #[test]
    fn process_separately_produces_a_pair() {
        let doc = doc_with(
            "strplaname",
            "namebody",
            MappingEntry::Chain {
                fields: vec!["L_NAME".to_string(), "R_NAME".to_string()],
                process_separately: true,
                functions: vec![FunctionCall::Direct { cast_type: None }],
            },
        );
        let mut row = HashMap::new();
        row.insert("L_NAME".to_string(), Scalar::Str("Main".into()));
        row.insert("R_NAME".to_string(), Scalar::Str("Elm".into()));
        let out = apply_conform("strplaname", &row, &doc).unwrap();
        assert_eq!(
            out["namebody"],
            AttrValue::Pair(Scalar::Str("Main".into()), Scalar::Str("Elm".into()))
        );
    }

    #[test]
    fn copy_attribute_functions_reuses_sibling_chain_with_override() {
        let mut fields = HashMap::new();
        fields.insert(
            "r_hnumf".to_string(),
            MappingEntry::Chain {
                fields: vec!["FROM_R".to_string()],
                process_separately: false,
                functions: vec![FunctionCall::Direct {
                    cast_type: Some("int".to_string()),
                }],
            },
        );
        fields.insert(
            "l_hnumf".to_string(),
            MappingEntry::Chain {
                fields: vec!["FROM_L".to_string()],
                process_separately: false,
                functions: vec![FunctionCall::CopyAttributeFunctions {
                    attributes: "r_hnumf".to_string(),
                    modify_parameters: HashMap::new(),
                }],
            },
        );
        let mut doc = HashMap::new();
        doc.insert("addrange".to_string(), fields);

        let mut row = HashMap::new();
        row.insert("FROM_L".to_string(), Scalar::Str("10".into()));
        row.insert("FROM_R".to_string(), Scalar::Str("11".into()));

        let out = apply_conform("addrange", &row, &doc).unwrap();
        assert_eq!(out["l_hnumf"], AttrValue::Scalar(Scalar::Int(10)));
    }
}
