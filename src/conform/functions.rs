//! The closed field-mapping function registry (§4.1). Each variant is one
//! named function the `conform` document can reference in a chain; kwargs
//! are the struct's fields, matching the source's fixed per-function
//! argument shape rather than a general call mechanism.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::LiteralValue;
use crate::error::ConformError;
use crate::ids;
use crate::value::Scalar;

fn default_start() -> i64 {
    1
}
fn default_step() -> i64 {
    1
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainType {
    Name,
    Index,
}

impl Default for DomainType {
    fn default() -> Self {
        DomainType::Name
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutLang {
    En,
    Fr,
}

impl Default for OutLang {
    fn default() -> Self {
        OutLang::En
    }
}

impl From<OutLang> for nrn_schema::Lang {
    fn from(l: OutLang) -> Self {
        match l {
            OutLang::En => nrn_schema::Lang::En,
            OutLang::Fr => nrn_schema::Lang::Fr,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Indices {
    One(usize),
    Many(Vec<usize>),
}

impl Indices {
    fn as_slice(&self) -> Vec<usize> {
        match self {
            Indices::One(i) => vec![*i],
            Indices::Many(v) => v.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub condition: String,
    pub value: LiteralValue,
}

/// One step of a mapping chain. `CopyAttributeFunctions` is handled
/// specially by the mapping engine (it needs the whole `conform` document
/// to resolve the other field's chain) rather than through [`apply`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "function", rename_all = "snake_case")]
pub enum FunctionCall {
    Direct {
        cast_type: Option<String>,
    },
    GenUuid {},
    Incrementor {
        column: String,
        #[serde(default = "default_start")]
        start: i64,
        #[serde(default = "default_step")]
        step: i64,
    },
    RegexFind {
        pattern: String,
        #[serde(default)]
        match_index: usize,
        #[serde(default = "default_group_index")]
        group_index: Indices,
        domain: Option<String>,
        #[serde(default)]
        strip_result: bool,
    },
    RegexSub {
        pattern_from: String,
        pattern_to: String,
        domain: Option<String>,
    },
    ConditionalValues {
        conditions: Vec<ConditionEntry>,
        else_value: Option<LiteralValue>,
    },
    Concat {
        join_cols: Vec<String>,
        #[serde(default)]
        join_chars: String,
    },
    ExtractDomain {
        domain_name: String,
        pattern: String,
        #[serde(default)]
        domain_type: DomainType,
        #[serde(default)]
        lang: OutLang,
    },
    Split {
        pat: String,
        n: usize,
        #[serde(default)]
        expand: bool,
    },
    ApplyDomain {
        domain: String,
        default: Option<LiteralValue>,
    },
    CopyAttributeFunctions {
        attributes: String,
        #[serde(default)]
        modify_parameters: HashMap<String, serde_yaml::Value>,
    },
}

fn default_group_index() -> Indices {
    Indices::One(0)
}

fn lookup_domain(name: &str) -> Option<&'static nrn_schema::Domain> {
    nrn_schema::domains::by_name(name)
}

/// Everything besides the chain's own declared source value that a
/// function step might need: the rest of the source row (for `concat`)
/// and the field name the chain is running for (for error messages).
pub struct RowContext<'a> {
    pub field: &'a str,
    pub row: &'a HashMap<String, Scalar>,
}

/// Strips the matched span out of `text` and collapses any resulting
/// doubled-up spaces/hyphens left behind.
fn strip_match(text: &str, start: usize, end: usize) -> String {
    let mut remainder = String::with_capacity(text.len());
    remainder.push_str(&text[..start]);
    remainder.push_str(&text[end..]);
    let collapsed = remainder
        .split(' ')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let collapsed = collapsed
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    collapsed.trim().to_string()
}

impl FunctionCall {
    pub fn apply(
        &self,
        input: &Scalar,
        ctx: &RowContext,
    ) -> Result<Scalar, ConformError> {
        match self {
            FunctionCall::Direct { cast_type } => cast(input, cast_type.as_deref(), ctx.field),
            FunctionCall::GenUuid {} => Ok(Scalar::Str(ids::new_uuid())),
            FunctionCall::Incrementor { column, start, step } => {
                Ok(Scalar::Int(ids::next_increment(column, *start, *step)))
            }
            FunctionCall::RegexFind {
                pattern,
                match_index,
                group_index,
                domain,
                strip_result,
            } => {
                let re = Regex::new(pattern).map_err(|source| ConformError::BadRegex {
                    field: ctx.field.to_string(),
                    pattern: pattern.clone(),
                    source,
                })?;
                let text = input.as_str().unwrap_or_default();
                let m = re.captures_iter(text).nth(*match_index);
                let Some(caps) = m else {
                    return Ok(Scalar::Null);
                };
                if *strip_result {
                    let whole = caps.get(0).unwrap();
                    return Ok(Scalar::Str(strip_match(text, whole.start(), whole.end())));
                }
                let groups = group_index.as_slice();
                let parts: Vec<String> = groups
                    .iter()
                    .filter_map(|&g| caps.get(g).map(|m| m.as_str().to_string()))
                    .collect();
                let extracted = parts.join(" ");
                match domain {
                    Some(name) => Ok(apply_domain_label(&extracted, name, ctx.field)?),
                    None => Ok(Scalar::Str(extracted)),
                }
            }
            FunctionCall::RegexSub {
                pattern_from,
                pattern_to,
                domain,
            } => {
                let re = Regex::new(pattern_from).map_err(|source| ConformError::BadRegex {
                    field: ctx.field.to_string(),
                    pattern: pattern_from.clone(),
                    source,
                })?;
                let text = input.as_str().unwrap_or_default();
                let replaced = re.replace_all(text, pattern_to.as_str()).to_string();
                match domain {
                    Some(name) => apply_domain_label(&replaced, name, ctx.field),
                    None => Ok(Scalar::Str(replaced)),
                }
            }
            FunctionCall::ConditionalValues { conditions, else_value } => {
                for entry in conditions {
                    let parsed = super::condition::parse(&entry.condition).map_err(|_| {
                        ConformError::UnsupportedCondition {
                            field: ctx.field.to_string(),
                            condition: entry.condition.clone(),
                        }
                    })?;
                    if parsed.eval(input) {
                        return Ok(entry.value.clone().into_scalar());
                    }
                }
                Ok(else_value
                    .clone()
                    .map(LiteralValue::into_scalar)
                    .unwrap_or(Scalar::Null))
            }
            FunctionCall::Concat { join_cols, join_chars } => {
                let parts: Vec<String> = join_cols
                    .iter()
                    .map(|c| {
                        ctx.row
                            .get(c)
                            .map(|v| v.to_string())
                            .unwrap_or_default()
                    })
                    .collect();
                Ok(Scalar::Str(parts.join(join_chars)))
            }
            FunctionCall::ExtractDomain {
                domain_name,
                pattern,
                domain_type,
                lang,
            } => {
                let re = Regex::new(pattern).map_err(|source| ConformError::BadRegex {
                    field: ctx.field.to_string(),
                    pattern: pattern.clone(),
                    source,
                })?;
                let text = input.as_str().unwrap_or_default();
                let Some(caps) = re.captures(text) else {
                    return Ok(Scalar::Null);
                };
                let extracted = caps.get(1).or_else(|| caps.get(0)).unwrap().as_str();
                let domain = lookup_domain(domain_name).ok_or_else(|| ConformError::UnknownDomain {
                    field: ctx.field.to_string(),
                    domain: domain_name.clone(),
                })?;
                match domain_type {
                    DomainType::Name => Ok(Scalar::Str(extracted.to_string())),
                    DomainType::Index => {
                        let lang: nrn_schema::Lang = (*lang).into();
                        match domain.code_for(lang, extracted) {
                            Some(code) => Ok(Scalar::Int(code as i64)),
                            None => Ok(Scalar::Null),
                        }
                    }
                }
            }
            FunctionCall::Split { pat, n, expand: _ } => {
                let text = input.as_str().unwrap_or_default();
                let parts: Vec<&str> = text.splitn(*n + 1, pat.as_str()).collect();
                match parts.len() {
                    0 => Ok(Scalar::Null),
                    1 => Ok(Scalar::Str(parts[0].to_string())),
                    _ => {
                        // Emit the tagged pair the left/right split expects
                        // downstream; only meaningful for n == 2 splits.
                        Ok(Scalar::Str(parts.join("\u{1}")))
                    }
                }
            }
            FunctionCall::ApplyDomain { domain, default } => {
                let text = input.as_str().unwrap_or_default();
                let dom = lookup_domain(domain).ok_or_else(|| ConformError::UnknownDomain {
                    field: ctx.field.to_string(),
                    domain: domain.clone(),
                })?;
                let code = dom
                    .code_for(nrn_schema::Lang::En, text)
                    .or_else(|| dom.code_for(nrn_schema::Lang::Fr, text));
                match code {
                    Some(c) => Ok(Scalar::Int(c as i64)),
                    None => Ok(default
                        .clone()
                        .map(LiteralValue::into_scalar)
                        .unwrap_or(Scalar::Null)),
                }
            }
            FunctionCall::CopyAttributeFunctions { .. } => unreachable!(
                "copy_attribute_functions is resolved by the mapping engine, not apply()"
            ),
        }
    }
}

fn apply_domain_label(text: &str, domain_name: &str, field: &str) -> Result<Scalar, ConformError> {
    let domain = lookup_domain(domain_name).ok_or_else(|| ConformError::UnknownDomain {
        field: field.to_string(),
        domain: domain_name.to_string(),
    })?;
    match domain
        .code_for(nrn_schema::Lang::En, text)
        .or_else(|| domain.code_for(nrn_schema::Lang::Fr, text))
    {
        Some(_) => Ok(Scalar::Str(text.to_string())),
        None => Ok(Scalar::Null),
    }
}

fn cast(input: &Scalar, cast_type: Option<&str>, field: &str) -> Result<Scalar, ConformError> {
    let Some(cast_type) = cast_type else {
        return Ok(input.clone());
    };
    let text = input.to_string();
    match cast_type {
        "str" => Ok(Scalar::Str(text)),
        "int" => Ok(text
            .trim()
            .parse::<i64>()
            .map(Scalar::Int)
            .unwrap_or(Scalar::Null)),
        "float" => Ok(text
            .trim()
            .parse::<f64>()
            .map(Scalar::Real)
            .unwrap_or(Scalar::Null)),
        other => Err(ConformError::BadCastTarget {
            field: field.to_string(),
            target: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(field: &'a str, row: &'a HashMap<String, Scalar>) -> RowContext<'a> {
        RowContext { field, row }
    }

    #[test]
    fn direct_casts_to_int() {
        let f = FunctionCall::Direct {
            cast_type: Some("int".to_string()),
        };
        let row = HashMap::new();
        let out = f.apply(&Scalar::Str("42".into()), &ctx("x", &row)).unwrap();
        assert_eq!(out, Scalar::Int(42));
    }

    #[test]
    fn incrementor_advances_by_step() {
        let f = FunctionCall::Incrementor {
            column: "unit_test_incrementor".to_string(),
            start: 1,
            step: 1,
        };
        let row = HashMap::new();
        let c = ctx("x", &row);
        let a = f.apply(&Scalar::Null, &c).unwrap();
        let b = f.apply(&Scalar::Null, &c).unwrap();
        assert_eq!(a, Scalar::Int(1));
        assert_eq!(b, Scalar::Int(2));
    }

    #[test]
    fn concat_joins_other_row_columns() {
        let f = FunctionCall::Concat {
            join_cols: vec!["a".to_string(), "b".to_string()],
            join_chars: "-".to_string(),
        };
        let mut row = HashMap::new();
        row.insert("a".to_string(), Scalar::Str("X".into()));
        row.insert("b".to_string(), Scalar::Str("Y".into()));
        let out = f.apply(&Scalar::Null, &ctx("joined", &row)).unwrap();
        assert_eq!(out, Scalar::Str("X-Y".into()));
    }

    #[test]
    fn regex_find_strip_result_collapses_whitespace() {
        let f = FunctionCall::RegexFind {
            pattern: r"\d+".to_string(),
            match_index: 0,
            group_index: Indices::One(0),
            domain: None,
            strip_result: true,
        };
        let row = HashMap::new();
        let out = f
            .apply(&Scalar::Str("Main  123  Street".into()), &ctx("x", &row))
            .unwrap();
        assert_eq!(out, Scalar::Str("Main Street".into()));
    }

    #[test]
    fn conditional_values_falls_through_to_else() {
        let f = FunctionCall::ConditionalValues {
            conditions: vec![ConditionEntry {
                condition: "value == 'Y'".to_string(),
                value: LiteralValue::Int(1),
            }],
            else_value: Some(LiteralValue::Int(0)),
        };
        let row = HashMap::new();
        let out = f.apply(&Scalar::Str("N".into()), &ctx("flag", &row)).unwrap();
        assert_eq!(out, Scalar::Int(0));
    }
}
