//! Pipeline stages S1 through S8, run in sequence by `pipeline::Pipeline`.

pub mod s1_ingest;
pub mod s2_conform;
pub mod s3_split_recover;
pub mod s4_domain_clean;
pub mod s5_topology;
pub mod s6_nid;
pub mod s7_project;
pub mod s8_validate;
