use thiserror::Error;

/// Errors raised while interpreting a `conform` mapping document (§4.1).
/// Every variant identifies the offending mapping entry so the CLI can
/// report which source configuration is at fault.
#[derive(Debug, Error)]
pub enum ConformError {
    #[error("unknown field-mapping function `{0}`")]
    UnknownFunction(String),

    #[error("function `{function}` on field `{field}` is missing required argument `{arg}`")]
    MissingArgument {
        function: String,
        field: String,
        arg: String,
    },

    #[error("field `{field}` declares unparseable regex `{pattern}`: {source}")]
    BadRegex {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("field `{field}` declares unsupported cast target `{target}`")]
    BadCastTarget { field: String, target: String },

    #[error("`conditional_values` on field `{field}` uses unsupported condition `{condition}`")]
    UnsupportedCondition { field: String, condition: String },

    #[error("field `{field}` references unknown domain `{domain}`")]
    UnknownDomain { field: String, domain: String },

    #[error("`copy_attribute_functions` on field `{field}` references unknown field `{source_field}`")]
    UnknownCopySource { field: String, source_field: String },

    #[error("`copy_attribute_functions` chain starting at field `{field}` nests too deeply")]
    CopyTooDeep { field: String },
}

/// Errors raised while resolving a table or field name against the
/// canonical schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unknown target table `{0}`")]
    UnknownTable(String),

    #[error("table `{table}` has no field `{field}`")]
    UnknownField { table: String, field: String },
}
